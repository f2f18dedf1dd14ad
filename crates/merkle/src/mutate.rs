use fieldsmt_types::{zip, FieldElement, TreeHasher};

use crate::{Smt, SmtOp, SmtProof};

impl<H, const D: usize> Smt<H, D>
where
    H: TreeHasher,
{
    /// Rewrites the proof into the proof of the tree after applying `op`
    /// with `(key, value)`.
    ///
    /// The proof must verify under `root` as the precondition witness of the
    /// operation: an exclusion proof of `key` for an insertion, an inclusion
    /// proof of `key` for an update, and an inclusion proof of either `key`
    /// itself (singleton tree) or of the leaf that remains next to it for a
    /// deletion. The returned proof opens the written leaf; its computed
    /// root is the post-operation root.
    pub fn process(
        &self,
        proof: &SmtProof<H::Fe, D>,
        op: SmtOp,
        key: H::Fe,
        value: H::Fe,
        root: &H::Fe,
    ) -> anyhow::Result<SmtProof<H::Fe, D>> {
        match op {
            SmtOp::Insert => anyhow::ensure!(
                self.verify_exclusion(proof, &key, root)?,
                "insertion proof does not open the current root"
            ),
            SmtOp::Update => {
                anyhow::ensure!(
                    proof.key == key,
                    "update proof must open the updated key"
                );
                anyhow::ensure!(
                    self.verify(proof, root)?,
                    "update proof does not open the current root"
                );
            }
            SmtOp::Delete => anyhow::ensure!(
                self.verify(proof, root)?,
                "deletion proof does not open the current root"
            ),
        }

        let mut next = *proof;

        match op {
            SmtOp::Insert => {
                self.insert_leaf(proof, &mut next, key)?;

                next.empty_leaf = false;
                next.key = key;
                next.value = value;
            }
            SmtOp::Update => {
                // The leaf position and all its siblings are unchanged.
                next.empty_leaf = false;
                next.key = key;
                next.value = value;
            }
            SmtOp::Delete => {
                if !self.remove_leaf(proof, &mut next, key, value)? {
                    anyhow::ensure!(
                        proof.bitmap().iter().all(|live| !live),
                        "deleting the only remaining key requires a singleton tree"
                    );
                    anyhow::ensure!(
                        proof.value == value,
                        "deleted value does not match the opened leaf"
                    );

                    next = SmtProof::empty();
                }
            }
        }

        Ok(next)
    }

    /// Pushes the opened leaf down to the first level where its path leaves
    /// the inserted key's path, where it becomes the new leaf's sibling.
    ///
    /// An empty opened leaf hashes to the default, so inserting into an
    /// empty position leaves the sibling array untouched. Every level past
    /// the divergence must already be default: the opened leaf sits no
    /// deeper than the divergence, and an occupied sibling beyond it would
    /// belong to some other path.
    fn insert_leaf(
        &self,
        proof: &SmtProof<H::Fe, D>,
        next: &mut SmtProof<H::Fe, D>,
        key: H::Fe,
    ) -> anyhow::Result<()> {
        let walk = zip(proof.key.le_bits::<D>(), key.le_bits::<D>());
        let mut done = false;

        for (i, (own, new)) in walk.into_iter().enumerate() {
            if done {
                anyhow::ensure!(
                    proof.siblings[i] == H::Fe::zero(),
                    "occupied sibling below the insertion branch at level {i}"
                );
            } else if own != new {
                next.siblings[i] =
                    self.hasher
                        .hash_leaf(proof.empty_leaf, proof.key, proof.value)?;

                done = true;
            }
        }

        Ok(())
    }

    /// Clears the deleted leaf out of the sibling array.
    ///
    /// At the first level where the opened key's path leaves the deleted
    /// key's path, the deleted leaf must sit as the sibling; resetting it to
    /// the default lets the opened leaf rise back towards the root when no
    /// deeper branch remains. Returns `false` when the paths never diverge,
    /// the singleton case handled by the caller.
    fn remove_leaf(
        &self,
        proof: &SmtProof<H::Fe, D>,
        next: &mut SmtProof<H::Fe, D>,
        key: H::Fe,
        value: H::Fe,
    ) -> anyhow::Result<bool> {
        let walk = zip(proof.key.le_bits::<D>(), key.le_bits::<D>());

        for (i, (own, gone)) in walk.into_iter().enumerate() {
            if own != gone {
                anyhow::ensure!(
                    proof.siblings[i] == self.hasher.hash_leaf(false, key, value)?,
                    "deleted leaf is not the sibling at level {i}"
                );

                next.siblings[i] = H::Fe::zero();

                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Applies an insertion and returns the new root.
    pub fn insert_and_compute_root(
        &self,
        proof: &SmtProof<H::Fe, D>,
        key: H::Fe,
        value: H::Fe,
        root: &H::Fe,
    ) -> anyhow::Result<H::Fe> {
        let next = self.process(proof, SmtOp::Insert, key, value, root)?;

        self.compute_root(&next)
    }

    /// Applies an update and returns the new root.
    pub fn update_and_compute_root(
        &self,
        proof: &SmtProof<H::Fe, D>,
        key: H::Fe,
        value: H::Fe,
        root: &H::Fe,
    ) -> anyhow::Result<H::Fe> {
        let next = self.process(proof, SmtOp::Update, key, value, root)?;

        self.compute_root(&next)
    }

    /// Applies a deletion and returns the new root.
    pub fn delete_and_compute_root(
        &self,
        proof: &SmtProof<H::Fe, D>,
        key: H::Fe,
        value: H::Fe,
        root: &H::Fe,
    ) -> anyhow::Result<H::Fe> {
        let next = self.process(proof, SmtOp::Delete, key, value, root)?;

        self.compute_root(&next)
    }

    /// Verifies a deletion by replaying it as the inverse insertion.
    ///
    /// `proof` is an exclusion proof of the deleted key under `new_root`;
    /// re-inserting `(key, value)` through it must restore `old_root`. This
    /// proves the transition without ever touching the pre-deletion tree.
    pub fn verify_deletion(
        &self,
        proof: &SmtProof<H::Fe, D>,
        key: H::Fe,
        value: H::Fe,
        new_root: &H::Fe,
        old_root: &H::Fe,
    ) -> anyhow::Result<()> {
        let replayed = self.insert_and_compute_root(proof, key, value, new_root)?;

        anyhow::ensure!(
            replayed == *old_root,
            "deletion replay does not restore the previous root"
        );

        Ok(())
    }
}
