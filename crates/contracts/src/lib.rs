//! Shared carousel types: wraparound math, configuration DTOs and errors.
//!
//! Nothing in this crate touches the DOM, so it builds and tests on any target.

pub mod shared;
