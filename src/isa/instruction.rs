//! Instruction definitions and the execution contract.
//!
//! A [`BasicInstruction`] binds one mnemonic to its encoding and its
//! execution routine. Definitions are authored once at set construction and
//! never mutated; the host decode table borrows them for the lifetime of
//! the registry.

use crate::error::Result;
use crate::isa::encoding::{BitPattern, InstructionFormat};
use crate::isa::register::RegisterFile;
use rand::RngCore;
use serde::Serialize;
use std::fmt;

/// Execution routine bound to an instruction definition.
///
/// `operands` is the resolved operand list: register indices extracted by
/// the host decoder in the pattern's operand-field order. Its length and
/// order are a caller contract; routines do not re-validate them. A
/// returned error aborts the simulation step through the host error channel
/// before any further mutation.
pub type ExecRoutine = fn(operands: &[u8], ctx: &mut ExecutionContext) -> Result<()>;

/// Mutable simulator state handed to execution routines.
///
/// Bundles the host register file with an explicit random source, so draws
/// stay deterministic under seeded generators in tests.
pub struct ExecutionContext<'a> {
    /// Host register bank.
    pub registers: &'a mut dyn RegisterFile,
    /// Random source for instructions that draw.
    pub rng: &'a mut dyn RngCore,
}

impl<'a> ExecutionContext<'a> {
    pub fn new(registers: &'a mut dyn RegisterFile, rng: &'a mut dyn RngCore) -> Self {
        Self { registers, rng }
    }
}

/// One custom instruction: encoding, documentation, and semantics.
///
/// The routine is a named `fn` value stored as a field, keeping
/// definition-time data separate from registration-time wiring.
pub struct BasicInstruction {
    example: &'static str,
    description: &'static str,
    pattern: BitPattern,
    routine: ExecRoutine,
}

impl BasicInstruction {
    /// Create a definition from an already-parsed pattern.
    pub fn new(
        example: &'static str,
        description: &'static str,
        pattern: BitPattern,
        routine: ExecRoutine,
    ) -> Self {
        Self {
            example,
            description,
            pattern,
            routine,
        }
    }

    /// Assembly example: mnemonic followed by operand syntax (`"crf $t1"`).
    pub fn example(&self) -> &'static str {
        self.example
    }

    /// Mnemonic: the first token of the example.
    pub fn mnemonic(&self) -> &'static str {
        self.example.split_whitespace().next().unwrap_or(self.example)
    }

    /// Human-readable semantics.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Encoding format of the pattern.
    pub fn format(&self) -> InstructionFormat {
        self.pattern.format()
    }

    /// The 32-bit pattern shape consumed by the host decoder.
    pub fn pattern(&self) -> &BitPattern {
        &self.pattern
    }

    /// Run the bound routine on `operands` against `ctx`.
    pub fn execute(&self, operands: &[u8], ctx: &mut ExecutionContext) -> Result<()> {
        (self.routine)(operands, ctx)
    }

    /// Listing row for host tooling.
    pub fn summary(&self) -> InstructionSummary {
        InstructionSummary {
            mnemonic: self.mnemonic().to_string(),
            example: self.example.to_string(),
            description: self.description.to_string(),
            format: self.format(),
            pattern: self.pattern.template().to_string(),
            operand_count: self.pattern.operand_count(),
        }
    }
}

impl fmt::Debug for BasicInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BasicInstruction({:?}, {}-format, {})",
            self.example,
            self.format(),
            self.pattern.template()
        )
    }
}

/// Serializable instruction listing row (`runeasm-spec --json`).
#[derive(Debug, Clone, Serialize)]
pub struct InstructionSummary {
    pub mnemonic: String,
    pub example: String,
    pub description: String,
    pub format: InstructionFormat,
    pub pattern: String,
    pub operand_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isa::register::MipsRegisterFile;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn exec_mark(operands: &[u8], ctx: &mut ExecutionContext) -> Result<()> {
        ctx.registers.set(operands[0], 7)
    }

    fn sample() -> BasicInstruction {
        let pattern = BitPattern::parse(
            InstructionFormat::R,
            "011100 fffff 00000 00000 00000 100000",
        )
        .unwrap();
        BasicInstruction::new("mark $t1", "Mark: set $t1 to 7", pattern, exec_mark)
    }

    #[test]
    fn test_mnemonic_is_first_token() {
        let def = sample();
        assert_eq!(def.mnemonic(), "mark");
        assert_eq!(def.example(), "mark $t1");
    }

    #[test]
    fn test_execute_runs_stored_routine() {
        let def = sample();
        let mut regs = MipsRegisterFile::new();
        let mut rng = StdRng::seed_from_u64(0);
        let mut ctx = ExecutionContext::new(&mut regs, &mut rng);
        def.execute(&[9], &mut ctx).unwrap();
        assert_eq!(ctx.registers.get(9).unwrap(), 7);
    }

    #[test]
    fn test_summary_row() {
        let summary = sample().summary();
        assert_eq!(summary.mnemonic, "mark");
        assert_eq!(summary.format, InstructionFormat::R);
        assert_eq!(summary.operand_count, 1);
    }
}
