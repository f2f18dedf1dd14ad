use fieldsmt_types::{FieldElement, TreeHasher};

/// A sparse Merkle tree engine of fixed depth `D`.
///
/// The engine holds no tree state, only the hasher: every operation takes a
/// [`SmtProof`] produced by an external prover and either verifies it
/// against a root or rewrites it into the proof of the transitioned tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct Smt<H, const D: usize>
where
    H: TreeHasher,
{
    pub(crate) hasher: H,
}

impl<H, const D: usize> Smt<H, D>
where
    H: TreeHasher,
{
    /// Creates an engine over the provided hasher.
    pub fn new(hasher: H) -> Self {
        Self { hasher }
    }

    /// Returns the proof of the empty tree.
    ///
    /// Its computed root is [`FieldElement::zero`], the root of the tree
    /// with no occupied leaf.
    pub fn empty_proof(&self) -> SmtProof<H::Fe, D> {
        SmtProof::empty()
    }
}

/// A compact opening of one leaf position to the root.
///
/// `siblings[i]` is the off-path child of the node at level `i` of the walk
/// from the root, with bit `i` of `key` (little-endian) selecting the branch
/// taken at that level. Levels below the resolved leaf hold
/// [`FieldElement::zero`], so the deepest non-default sibling marks where
/// the leaf sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmtProof<F, const D: usize> {
    /// Whether the opened leaf position is empty.
    pub empty_leaf: bool,

    /// The key whose path is opened. Ignored by the leaf hash when the leaf
    /// is empty.
    pub key: F,

    /// The value at the opened leaf. Ignored when the leaf is empty.
    pub value: F,

    /// Off-path sibling hashes, root-adjacent first.
    pub siblings: [F; D],
}

impl<F, const D: usize> SmtProof<F, D> {
    /// Creates a proof from its parts.
    pub fn new(empty_leaf: bool, key: F, value: F, siblings: [F; D]) -> Self {
        Self {
            empty_leaf,
            key,
            value,
            siblings,
        }
    }
}

impl<F, const D: usize> SmtProof<F, D>
where
    F: FieldElement,
{
    /// The proof of the empty tree.
    pub fn empty() -> Self {
        Self {
            empty_leaf: true,
            key: F::zero(),
            value: F::zero(),
            siblings: [F::zero(); D],
        }
    }

    /// Marks the levels that carry a real branch hash.
    ///
    /// A level is live iff some sibling at that level or deeper is not the
    /// default, so the live levels form a contiguous run starting at the
    /// root and the hash fold skips everything below the resolved leaf.
    pub fn bitmap(&self) -> [bool; D] {
        let mut levels = [false; D];
        let mut live = false;

        for i in (0..D).rev() {
            live = live || self.siblings[i] != F::zero();
            levels[i] = live;
        }

        levels
    }
}

/// A tree transition operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtOp {
    /// Put a key that is absent from the tree.
    Insert,
    /// Replace the value of a key present in the tree.
    Update,
    /// Remove a key present in the tree.
    Delete,
}

impl SmtOp {
    /// Returns `true` for [`SmtOp::Insert`].
    pub fn is_insertion(&self) -> bool {
        matches!(self, Self::Insert)
    }

    /// Returns `true` for [`SmtOp::Update`].
    pub fn is_update(&self) -> bool {
        matches!(self, Self::Update)
    }

    /// Returns `true` for [`SmtOp::Delete`].
    pub fn is_deletion(&self) -> bool {
        matches!(self, Self::Delete)
    }
}
