use crate::FieldElement;

/// The hashing seam of a sparse Merkle tree instance.
///
/// Implementations provide the 3-to-1 leaf hash and the 2-to-1 branch hash
/// over a single field element type. The engine never calls a hash on an
/// empty subtree: empty regions are represented by
/// [`FieldElement::zero`] and skipped entirely, which is what keeps proofs
/// compact.
pub trait TreeHasher {
    /// Field element shared by keys, values and node hashes.
    type Fe: FieldElement;

    /// Hashes a leaf.
    ///
    /// An empty leaf hashes to [`FieldElement::zero`]; an occupied leaf is
    /// the 3-to-1 hash of `(key, value, 1)`, the trailing constant keeping
    /// leaf hashes out of the branch hash domain.
    fn hash_leaf(&self, empty: bool, key: Self::Fe, value: Self::Fe)
        -> anyhow::Result<Self::Fe>;

    /// Hashes an internal node from its two children.
    fn hash_branch(&self, left: Self::Fe, right: Self::Fe) -> anyhow::Result<Self::Fe>;
}
