//! Bundled custom language packs.
//!
//! Each pack implements [`InstructionSet`] and is registered into an
//! [`InstructionRegistry`](crate::isa::registry::InstructionRegistry) by
//! the host at initialization.
//!
//! | Name      | Instructions | Theme                        |
//! |-----------|-------------|------------------------------|
//! | EldenRing | 14          | souls-like combat simulation |

pub mod elden;

pub use elden::EldenRingSet;

use crate::isa::extension::InstructionSet;

/// All bundled language packs, ready for registration.
pub fn standard_sets() -> Vec<Box<dyn InstructionSet>> {
    vec![Box::new(EldenRingSet::new())]
}
