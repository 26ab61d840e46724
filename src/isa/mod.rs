//! Custom instruction-set extension layer for a MIPS-style host simulator.
//!
//! The host owns fetch, decode, and the simulation loop; this module owns
//! what a custom language pack must declare for the host to adopt it.
//!
//! ## Dispatch flow
//!
//! ```text
//! fetch word ──► host decoder matches fixed bits ──► operand register list
//!                (mask / match bits / field spans            │
//!                 authored by BitPattern)                    ▼
//!                                          routine(operands, ExecutionContext)
//! ```
//!
//! ## Submodules
//!
//! - [`encoding`] — binary formats and 32-bit pattern templates
//! - [`instruction`] — definition records and the execution contract
//! - [`extension`] — the [`InstructionSet`] surface packs implement
//! - [`registry`] — build-once collection handed to the host decode table
//! - [`register`] — the consumed register-file interface
//! - [`extensions`] — bundled packs

pub mod encoding;
pub mod extension;
pub mod extensions;
pub mod instruction;
pub mod register;
pub mod registry;

pub use encoding::{BitPattern, FieldSpan, InstructionFormat, WORD_BITS};
pub use extension::InstructionSet;
pub use extensions::{standard_sets, EldenRingSet};
pub use instruction::{BasicInstruction, ExecRoutine, ExecutionContext, InstructionSummary};
pub use register::{register_name, MipsRegisterFile, RegisterFile, REGISTER_COUNT};
pub use registry::{InstructionRegistry, RegistrationWarning};
