//! Common types used across toolsmith crates.

mod common;

pub use common::*;
