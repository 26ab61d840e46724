//! Custom language packs: the surface an instruction set exposes to hosts.

use crate::isa::instruction::BasicInstruction;
use std::fmt;

/// A pluggable custom instruction set.
///
/// A host merges `instructions()` into its decode table at initialization
/// and surfaces `name()`/`description()` in its language picker. The
/// instruction list is built once and stable thereafter.
pub trait InstructionSet: Send + Sync {
    /// Human-readable language name (for instance "EldenRing").
    fn name(&self) -> &str;

    /// One-line description shown alongside the name.
    fn description(&self) -> &str;

    /// Semantic version (major, minor, patch).
    fn version(&self) -> (u16, u16, u16);

    /// The complete ordered instruction list.
    fn instructions(&self) -> &[BasicInstruction];
}

impl fmt::Debug for dyn InstructionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (maj, min, pat) = self.version();
        write!(
            f,
            "InstructionSet(\"{}\" v{}.{}.{}, {} instructions)",
            self.name(),
            maj,
            min,
            pat,
            self.instructions().len()
        )
    }
}
