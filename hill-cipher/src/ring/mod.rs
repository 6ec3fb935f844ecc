//! # Ring Module
//!
//! Provides the [`Ring`] struct for modular arithmetic in Z_26 and the fixed-size
//! [`KeyMatrix`] / [`InverseMatrix`] types built on top of it.

pub mod math;
pub mod matrix;

pub use math::{ALPHABET_SIZE, Ring};
pub use matrix::{InverseMatrix, KeyMatrix};
