use fieldsmt_types::{foldr, zip, zip3, FieldElement, TreeHasher};

use crate::{Smt, SmtProof};

impl<H, const D: usize> Smt<H, D>
where
    H: TreeHasher,
{
    /// Computes the root implied by the proof.
    ///
    /// The leaf hash is folded towards the root, combining it with one
    /// sibling per live level; levels whose subtree is empty pass the
    /// partial hash through unchanged. Hashing them instead would be wrong,
    /// not just wasteful: an empty subtree is the constant zero at every
    /// level, and `hash_branch(0, 0)` is not zero.
    pub fn compute_root(&self, proof: &SmtProof<H::Fe, D>) -> anyhow::Result<H::Fe> {
        let leaf = self
            .hasher
            .hash_leaf(proof.empty_leaf, proof.key, proof.value)?;
        let bits = proof.key.le_bits::<D>();
        let levels = proof.bitmap();

        foldr(
            &zip3(proof.siblings, bits, levels),
            Ok(leaf),
            |(sibling, bit, live), acc| {
                let node = acc?;

                if !live {
                    return Ok(node);
                }

                if bit {
                    self.hasher.hash_branch(sibling, node)
                } else {
                    self.hasher.hash_branch(node, sibling)
                }
            },
        )
    }

    /// Verifies that the proof opens an occupied leaf under `root`.
    ///
    /// A proof opening an empty leaf is malformed for inclusion and errors;
    /// only the final root comparison is returned as a boolean.
    pub fn verify(&self, proof: &SmtProof<H::Fe, D>, root: &H::Fe) -> anyhow::Result<bool> {
        anyhow::ensure!(
            !proof.empty_leaf,
            "inclusion proof opens an empty leaf position"
        );

        Ok(self.compute_root(proof)? == *root)
    }

    /// Verifies that `excluded` is absent from the tree under `root`.
    ///
    /// Two witness forms are accepted: the proof either opens the empty leaf
    /// position the excluded key resolves to, or opens an occupied leaf of a
    /// different key whose path the excluded key follows until it branches
    /// into an empty subtree. In both forms, the first level where the two
    /// key paths diverge must hold a default sibling; an occupied subtree
    /// there could contain the excluded key.
    pub fn verify_exclusion(
        &self,
        proof: &SmtProof<H::Fe, D>,
        excluded: &H::Fe,
        root: &H::Fe,
    ) -> anyhow::Result<bool> {
        let walk = zip(proof.key.le_bits::<D>(), excluded.le_bits::<D>());
        let mut diverged = false;

        for (i, (own, other)) in walk.into_iter().enumerate() {
            if own != other && !diverged {
                anyhow::ensure!(
                    proof.siblings[i] == H::Fe::zero(),
                    "excluded key branches into an occupied subtree at level {i}"
                );

                diverged = true;
            }
        }

        // A proof for the excluded key's own path must open an empty leaf;
        // an occupied leaf under the same key would witness inclusion.
        anyhow::ensure!(
            diverged || proof.empty_leaf,
            "exclusion proof opens an occupied leaf with the excluded key"
        );

        Ok(self.compute_root(proof)? == *root)
    }
}
