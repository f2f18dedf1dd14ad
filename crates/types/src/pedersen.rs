use std::sync::OnceLock;

use ark_crypto_primitives::crh::{pedersen, CRHScheme};
use ark_ed_on_bn254::{EdwardsProjective, Fq};
use ark_ff::{BigInteger, One, PrimeField};
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::{FieldElement, TreeHasher};

/// Seed fixing the Pedersen generator set shared by provers and verifiers.
const GENERATOR_SEED: [u8; 32] = *b"fieldsmt.pedersen.generators.v01";

/// Window sizing for the largest preimage, three field elements of 32 bytes.
#[derive(Clone)]
pub struct PedersenWindow;

impl pedersen::Window for PedersenWindow {
    const WINDOW_SIZE: usize = 4;
    const NUM_WINDOWS: usize = 192;
}

type Crh = pedersen::CRH<EdwardsProjective, PedersenWindow>;

static PARAMETERS: OnceLock<pedersen::Parameters<EdwardsProjective>> = OnceLock::new();

fn parameters() -> &'static pedersen::Parameters<EdwardsProjective> {
    PARAMETERS.get_or_init(|| {
        let mut rng = ChaCha20Rng::from_seed(GENERATOR_SEED);

        Crh::setup(&mut rng).expect("generator derivation from a fixed seed cannot fail")
    })
}

/// Pedersen hasher over the curve embedded in the BN254 scalar field.
///
/// Node hashes are the x-coordinate of a Pedersen commitment to the
/// little-endian bytes of the inputs. The generator set is derived once from
/// a fixed seed, so every instance agrees on the same tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct PedersenHasher;

impl PedersenHasher {
    fn commit(preimage: &[u8]) -> anyhow::Result<Fq> {
        let point = Crh::evaluate(parameters(), preimage)
            .map_err(|e| anyhow::anyhow!("failed to evaluate pedersen hash: {e}"))?;

        Ok(point.x)
    }
}

impl TreeHasher for PedersenHasher {
    type Fe = Fq;

    fn hash_leaf(&self, empty: bool, key: Fq, value: Fq) -> anyhow::Result<Fq> {
        if empty {
            return Ok(Fq::zero());
        }

        let mut preimage = Vec::with_capacity(96);

        preimage.extend(key.into_bigint().to_bytes_le());
        preimage.extend(value.into_bigint().to_bytes_le());
        preimage.extend(Fq::one().into_bigint().to_bytes_le());

        Self::commit(&preimage)
    }

    fn hash_branch(&self, left: Fq, right: Fq) -> anyhow::Result<Fq> {
        let mut preimage = Vec::with_capacity(64);

        preimage.extend(left.into_bigint().to_bytes_le());
        preimage.extend(right.into_bigint().to_bytes_le());

        Self::commit(&preimage)
    }
}
