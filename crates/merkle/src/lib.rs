#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

mod mutate;
mod smt;
mod verify;

pub use smt::*;
