// src/lib.rs
//! Pratyāhāra construction over the Śivasūtras: named phoneme classes,
//! membership and reverse lookup for Sanskrit grammar rules.

pub mod core;
pub mod error;
pub mod export;
pub mod c_api;

pub use crate::core::classifier::classify;
pub use crate::core::constructor::{construct, construct_in, construct_with};
pub use crate::core::lookup::{find_groups_containing, get_named_group, is_member};
pub use crate::core::registry::Registry;
pub use crate::core::types::{Category, Construction, NamedGroup, Phoneme, Pratyahara};
pub use crate::error::PratyaharaError;
