use core::fmt::Debug;

/// A prime field element as consumed by the sparse Merkle tree engine.
///
/// The same type carries keys, values and node hashes. The constant returned
/// by [`FieldElement::zero`] doubles as the additive identity and as the
/// canonical placeholder for every empty subtree, regardless of its level.
pub trait FieldElement: Copy + Eq + Debug {
    /// The additive identity, also the empty-subtree placeholder.
    fn zero() -> Self;

    /// Little-endian bit decomposition of the element, truncated or
    /// zero-extended to exactly `D` bits.
    ///
    /// Bit 0 is the least significant bit. When the element is used as a
    /// tree key, bit `i` selects the branch taken at level `i` of the walk
    /// from the root, so two keys that agree on their first `D` bits address
    /// the same leaf position.
    fn le_bits<const D: usize>(&self) -> [bool; D];
}
