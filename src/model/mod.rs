//! # Vehicle Data Model
//!
//! The single entity exposed by the registry.

mod vehicle;

pub use vehicle::Vehicle;
