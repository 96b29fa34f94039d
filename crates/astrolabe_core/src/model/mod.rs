//! Date value model.
//!
//! # Responsibility
//! - Define the immutable `Date` value and the units it is addressed by.
//!
//! # Invariants
//! - Every operation returns a new value; nothing is mutated in place.

pub mod date;
