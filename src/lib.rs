//! # Runeasm
//!
//! RPG-flavored pluggable instruction sets for a MIPS-style teaching
//! simulator.
//!
//! A host simulator brings fetch/decode, a register file, and a simulation
//! loop; runeasm brings the custom instructions: what they look like in
//! assembly, how they encode into 32-bit words, and what they do to the
//! register file when dispatched.
//!
//! ## Core Components
//!
//! - **BitPattern**: 32-bit encoding template (fixed bits + operand fields)
//! - **BasicInstruction**: immutable {syntax, description, pattern, routine}
//! - **InstructionSet**: the trait a language pack implements
//! - **InstructionRegistry**: build-once, ordered decode-table source
//! - **EldenRingSet**: the bundled souls-like combat pack (14 instructions)
//!
//! ## Example
//!
//! ```
//! use runeasm::{standard_sets, ExecutionContext, InstructionRegistry};
//! use runeasm::{MipsRegisterFile, RegisterFile};
//!
//! let mut registry = InstructionRegistry::new();
//! for set in standard_sets() {
//!     registry.register(set);
//! }
//!
//! let mut regs = MipsRegisterFile::new();
//! regs.set(9, 20).unwrap(); // $t1 holds HP
//! let mut rng = rand::thread_rng();
//! let mut ctx = ExecutionContext::new(&mut regs, &mut rng);
//! registry.dispatch("crf", &[9], &mut ctx).unwrap();
//! assert_eq!(regs.get(9).unwrap(), 25);
//! ```

pub mod isa;
pub use isa::{
    register_name, standard_sets, BasicInstruction, BitPattern, EldenRingSet, ExecRoutine,
    ExecutionContext, FieldSpan, InstructionFormat, InstructionRegistry, InstructionSet,
    InstructionSummary, MipsRegisterFile, RegisterFile, RegistrationWarning, REGISTER_COUNT,
    WORD_BITS,
};

mod error;
pub use error::{Result, RuneasmError};
