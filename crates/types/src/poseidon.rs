use ark_bn254::Fr;
use ark_ff::One;
use light_poseidon::{Poseidon, PoseidonHasher as _};

use crate::{FieldElement, TreeHasher};

/// Poseidon hasher over the BN254 scalar field.
///
/// Uses the circomlib parameter set, so roots computed here match proofs
/// produced by circom-based provers bit for bit.
#[derive(Debug, Default, Clone, Copy)]
pub struct PoseidonHasher;

impl TreeHasher for PoseidonHasher {
    type Fe = Fr;

    fn hash_leaf(&self, empty: bool, key: Fr, value: Fr) -> anyhow::Result<Fr> {
        if empty {
            return Ok(Fr::zero());
        }

        Poseidon::<Fr>::new_circom(3)
            .map_err(|e| anyhow::anyhow!("failed to initialize poseidon: {e}"))?
            .hash(&[key, value, Fr::one()])
            .map_err(|e| anyhow::anyhow!("failed to hash leaf: {e}"))
    }

    fn hash_branch(&self, left: Fr, right: Fr) -> anyhow::Result<Fr> {
        Poseidon::<Fr>::new_circom(2)
            .map_err(|e| anyhow::anyhow!("failed to initialize poseidon: {e}"))?
            .hash(&[left, right])
            .map_err(|e| anyhow::anyhow!("failed to hash branch: {e}"))
    }
}
