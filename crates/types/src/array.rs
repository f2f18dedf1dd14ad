/// Folds a fixed-size array from its last element towards its first.
///
/// `f` receives `xs[N - 1]` first, so a tree walk stored root-first can be
/// folded leaf-to-root without reversing the array.
pub fn foldr<T: Copy, A, const N: usize>(xs: &[T; N], init: A, mut f: impl FnMut(T, A) -> A) -> A {
    let mut acc = init;

    for i in (0..N).rev() {
        acc = f(xs[i], acc);
    }

    acc
}

/// Pairs two fixed-size arrays element-wise.
pub fn zip<A: Copy, B: Copy, const N: usize>(a: [A; N], b: [B; N]) -> [(A, B); N] {
    core::array::from_fn(|i| (a[i], b[i]))
}

/// Pairs three fixed-size arrays element-wise.
pub fn zip3<A: Copy, B: Copy, C: Copy, const N: usize>(
    a: [A; N],
    b: [B; N],
    c: [C; N],
) -> [(A, B, C); N] {
    core::array::from_fn(|i| (a[i], b[i], c[i]))
}

/// Expands a little-endian byte string into its first `D` bits.
///
/// Bit `i` is bit `i % 8` of byte `i / 8`; bits past the end of the string
/// read as zero, so short inputs are zero-extended.
pub fn le_bits_from_bytes<const D: usize>(bytes: &[u8]) -> [bool; D] {
    core::array::from_fn(|i| {
        bytes
            .get(i / 8)
            .map(|byte| (byte >> (i % 8)) & 1 == 1)
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foldr_consumes_last_first() {
        let order = foldr(&[1u8, 2, 3], [0u8; 3], |x, mut acc| {
            acc.rotate_right(1);
            acc[0] = x;
            acc
        });

        assert_eq!(order, [1, 2, 3]);
    }

    #[test]
    fn zip_pairs_positionally() {
        assert_eq!(zip([1, 2], ['a', 'b']), [(1, 'a'), (2, 'b')]);
        assert_eq!(
            zip3([1, 2], [3, 4], [5, 6]),
            [(1, 3, 5), (2, 4, 6)]
        );
    }

    #[test]
    fn le_bits_zero_extend() {
        // 0x05 = 0b101, decomposed least significant bit first.
        let bits = le_bits_from_bytes::<10>(&[0x05]);

        assert_eq!(
            bits,
            [true, false, true, false, false, false, false, false, false, false]
        );
    }

    #[test]
    fn le_bits_cross_byte_boundary() {
        // 0x0100 little-endian: bit 8 is the first set bit.
        let bits = le_bits_from_bytes::<9>(&[0x00, 0x01]);

        assert!(bits[8]);
        assert!(bits[..8].iter().all(|b| !b));
    }
}
