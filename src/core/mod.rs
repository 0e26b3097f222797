// src/core/mod.rs
pub mod alphabet;
pub mod classifier;
pub mod constructor;
pub mod disambiguation;
pub mod lookup;
pub mod registry;
pub mod types;
