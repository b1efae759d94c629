#![doc = include_str!("../README.md")]

mod doubly_even;
mod error;
mod generator;
mod lux;
mod siamese;
mod square;
mod verify;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{Error, Result};
pub use generator::{MAX_ORDER, Method, generate};
pub use square::{Square, magic_constant};
pub use verify::{Diagonal, Mismatch, Verification, verify};
