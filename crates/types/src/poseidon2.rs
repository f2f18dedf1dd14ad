use zkhash::fields::bn256::FpBN256;
use zkhash::poseidon2::poseidon2::Poseidon2;
use zkhash::poseidon2::poseidon2_instance_bn256::POSEIDON2_BN256_PARAMS;

use crate::{le_bits_from_bytes, FieldElement, TreeHasher};

/// Poseidon2 hasher over the BN254 scalar field.
///
/// Runs the published BN256 width-3 permutation in a rate-2, capacity-1
/// sponge: branches absorb in a single block, leaves absorb `(key, value)`
/// and then the domain tag.
#[derive(Debug, Default, Clone, Copy)]
pub struct Poseidon2Hasher;

impl Poseidon2Hasher {
    fn sponge(inputs: &[FpBN256]) -> FpBN256 {
        let poseidon2 = Poseidon2::new(&POSEIDON2_BN256_PARAMS);
        let mut state = [FpBN256::from(0u64); 3];

        for block in inputs.chunks(2) {
            state[0] += block[0];
            if let Some(x) = block.get(1) {
                state[1] += *x;
            }

            let out = poseidon2.permutation(&state);
            state.copy_from_slice(&out);
        }

        state[0]
    }
}

impl TreeHasher for Poseidon2Hasher {
    type Fe = FpBN256;

    fn hash_leaf(&self, empty: bool, key: FpBN256, value: FpBN256) -> anyhow::Result<FpBN256> {
        if empty {
            return Ok(FieldElement::zero());
        }

        Ok(Self::sponge(&[key, value, FpBN256::from(1u64)]))
    }

    fn hash_branch(&self, left: FpBN256, right: FpBN256) -> anyhow::Result<FpBN256> {
        Ok(Self::sponge(&[left, right]))
    }
}

impl FieldElement for FpBN256 {
    fn zero() -> Self {
        FpBN256::from(0u64)
    }

    fn le_bits<const D: usize>(&self) -> [bool; D] {
        use zkhash::ark_ff::{BigInteger, PrimeField};

        le_bits_from_bytes(&self.into_bigint().to_bytes_le())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_leaf_collapses_to_zero() -> anyhow::Result<()> {
        let h = Poseidon2Hasher;

        assert_eq!(
            h.hash_leaf(true, FpBN256::from(7u64), FpBN256::from(11u64))?,
            FieldElement::zero()
        );

        Ok(())
    }

    #[test]
    fn branch_of_empty_children_is_not_zero() -> anyhow::Result<()> {
        let h = Poseidon2Hasher;
        let zero = <FpBN256 as FieldElement>::zero();

        assert_ne!(h.hash_branch(zero, zero)?, zero);

        Ok(())
    }

    #[test]
    fn leaf_domain_is_separated_from_branches() -> anyhow::Result<()> {
        let h = Poseidon2Hasher;
        let (k, v) = (FpBN256::from(1u64), FpBN256::from(10u64));

        assert_ne!(h.hash_leaf(false, k, v)?, h.hash_branch(k, v)?);

        Ok(())
    }

    #[test]
    fn key_bits_are_little_endian() {
        let bits = FpBN256::from(5u64).le_bits::<4>();

        assert_eq!(bits, [true, false, true, false]);
    }
}
