use ark_bn254::Fr;
use ark_ff::{BigInteger, PrimeField, Zero};

use crate::{le_bits_from_bytes, FieldElement};

/// Bit width of the BN254 scalar field modulus, the natural upper bound for
/// a tree depth over [`Fr`] keys.
pub const FIELD_BITS: usize = 254;

impl FieldElement for Fr {
    fn zero() -> Self {
        <Fr as Zero>::zero()
    }

    fn le_bits<const D: usize>(&self) -> [bool; D] {
        le_bits_from_bytes(&self.into_bigint().to_bytes_le())
    }
}
