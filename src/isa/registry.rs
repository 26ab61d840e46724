//! Instruction registry — registration and decode-table handoff.
//!
//! The registry is an explicitly constructed object the host builds at
//! initialization: sets are registered once, the definition list is
//! immutable thereafter, and the host borrows it for pattern matching
//! during decode. Registration surfaces authoring problems as non-fatal
//! warnings; whether colliding patterns are acceptable stays the set
//! author's call.

use crate::error::{Result, RuneasmError};
use crate::isa::extension::InstructionSet;
use crate::isa::instruction::{BasicInstruction, ExecutionContext, InstructionSummary};
use std::collections::HashMap;
use std::fmt;

/// Warning produced while registering a set.
#[derive(Debug, Clone)]
pub enum RegistrationWarning {
    /// A later definition takes over an existing mnemonic.
    DuplicateMnemonic {
        mnemonic: String,
        new_set: String,
        existing_set: String,
    },
    /// Two definitions' fixed bits can both match the same word.
    AmbiguousPattern { mnemonic: String, other: String },
}

impl fmt::Display for RegistrationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateMnemonic {
                mnemonic,
                new_set,
                existing_set,
            } => {
                write!(
                    f,
                    "mnemonic '{}' in set \"{}\" shadows set \"{}\"",
                    mnemonic, new_set, existing_set
                )
            }
            Self::AmbiguousPattern { mnemonic, other } => {
                write!(
                    f,
                    "pattern for '{}' can match the same word as '{}'",
                    mnemonic, other
                )
            }
        }
    }
}

/// Ordered, build-once collection of instruction definitions.
pub struct InstructionRegistry {
    sets: Vec<Box<dyn InstructionSet>>,
    /// Lowercase mnemonic → (set index, instruction index). Last wins.
    mnemonic_map: HashMap<String, (usize, usize)>,
}

impl InstructionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            sets: Vec::new(),
            mnemonic_map: HashMap::new(),
        }
    }

    /// Register a language pack. Returns warnings, which are also logged.
    pub fn register(&mut self, set: Box<dyn InstructionSet>) -> Vec<RegistrationWarning> {
        let set_idx = self.sets.len();
        let mut warnings = Vec::new();
        let defs = set.instructions();

        // Fixed-bit ambiguity against previously registered sets
        for def in defs {
            for prior in self.sets.iter().flat_map(|s| s.instructions()) {
                if prior.pattern().overlaps(def.pattern()) {
                    warnings.push(RegistrationWarning::AmbiguousPattern {
                        mnemonic: def.mnemonic().to_string(),
                        other: prior.mnemonic().to_string(),
                    });
                }
            }
        }

        // And within the incoming set
        for (i, def) in defs.iter().enumerate() {
            for prior in &defs[..i] {
                if prior.pattern().overlaps(def.pattern()) {
                    warnings.push(RegistrationWarning::AmbiguousPattern {
                        mnemonic: def.mnemonic().to_string(),
                        other: prior.mnemonic().to_string(),
                    });
                }
            }
        }

        // Mnemonic table; last registered wins
        for (i, def) in defs.iter().enumerate() {
            let mnemonic = def.mnemonic().to_lowercase();
            if let Some(&(prior_set, _)) = self.mnemonic_map.get(&mnemonic) {
                let existing_set = if prior_set == set_idx {
                    set.name()
                } else {
                    self.sets[prior_set].name()
                };
                warnings.push(RegistrationWarning::DuplicateMnemonic {
                    mnemonic: mnemonic.clone(),
                    new_set: set.name().to_string(),
                    existing_set: existing_set.to_string(),
                });
            }
            self.mnemonic_map.insert(mnemonic, (set_idx, i));
        }

        for warning in &warnings {
            log::warn!("{}", warning);
        }

        self.sets.push(set);
        warnings
    }

    /// All definitions in registration order, for the host decode table.
    pub fn definitions(&self) -> impl Iterator<Item = &BasicInstruction> + '_ {
        self.sets.iter().flat_map(|s| s.instructions())
    }

    /// Registered language packs, in registration order.
    pub fn sets(&self) -> &[Box<dyn InstructionSet>] {
        &self.sets
    }

    /// Look up a definition by mnemonic (case-insensitive).
    pub fn resolve_mnemonic(&self, mnemonic: &str) -> Option<&BasicInstruction> {
        let &(set_idx, instr_idx) = self.mnemonic_map.get(&mnemonic.to_lowercase())?;
        Some(&self.sets[set_idx].instructions()[instr_idx])
    }

    /// Execute the definition registered under `mnemonic`.
    pub fn dispatch(
        &self,
        mnemonic: &str,
        operands: &[u8],
        ctx: &mut ExecutionContext,
    ) -> Result<()> {
        match self.resolve_mnemonic(mnemonic) {
            Some(def) => def.execute(operands, ctx),
            None => Err(RuneasmError::Execution(format!(
                "unknown mnemonic: {}",
                mnemonic
            ))),
        }
    }

    /// Serializable listing of every definition, in registration order.
    pub fn summaries(&self) -> Vec<InstructionSummary> {
        self.definitions().map(BasicInstruction::summary).collect()
    }

    /// Total number of registered definitions.
    pub fn len(&self) -> usize {
        self.sets.iter().map(|s| s.instructions().len()).sum()
    }

    /// Whether no definitions are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InstructionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InstructionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "InstructionRegistry({} sets, {} definitions)",
            self.sets.len(),
            self.len()
        )
    }
}
