#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

mod array;
mod field;
mod hasher;

#[cfg(any(feature = "pedersen", feature = "poseidon"))]
mod bn254;
#[cfg(feature = "pedersen")]
mod pedersen;
#[cfg(feature = "poseidon")]
mod poseidon;
#[cfg(feature = "poseidon2")]
mod poseidon2;

pub use array::*;
pub use field::*;
pub use hasher::*;

#[cfg(any(feature = "pedersen", feature = "poseidon"))]
pub use bn254::*;
#[cfg(feature = "pedersen")]
pub use pedersen::*;
#[cfg(feature = "poseidon")]
pub use poseidon::*;
#[cfg(feature = "poseidon2")]
pub use poseidon2::*;
