//! k-subset enumeration.
//!
//! Subsets of an `n`-element pool are represented as `u64` position masks
//! (bit `i` set = pool element `i` chosen), generated in increasing numeric
//! order with Gosper's hack. Memory use is constant regardless of C(n, k).

/// Binomial coefficient C(n, k). Zero when `k > n`.
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    // Each partial product is itself a binomial coefficient, so the division is exact.
    (0..k).fold(1u128, |acc, i| acc * (n - i) as u128 / (i + 1) as u128) as u64
}

/// Iterator over every `k`-element subset of `0..n`, as position masks.
#[derive(Debug, Clone)]
pub struct Subsets {
    next: Option<u64>,
    limit: u64,
    remaining: u64,
}

impl Subsets {
    /// Largest supported pool.
    pub const MAX_POOL: usize = 63;

    /// Enumerate the `k`-subsets of an `n`-element pool.
    ///
    /// `k = 0` yields the empty subset once; `k > n` yields nothing.
    pub fn new(n: usize, k: usize) -> Self {
        assert!(n <= Self::MAX_POOL, "pool of {} exceeds {}", n, Self::MAX_POOL);
        let remaining = binomial(n as u64, k as u64);
        Self {
            next: (remaining > 0).then(|| (1u64 << k) - 1),
            limit: 1u64 << n,
            remaining,
        }
    }

    /// Total number of subsets this iterator yields from the start.
    pub fn total(n: usize, k: usize) -> u64 {
        binomial(n as u64, k as u64)
    }

    /// Gosper's hack: next larger integer with the same popcount.
    ///
    /// See: https://graphics.stanford.edu/~seander/bithacks.html#NextBitPermutation
    #[inline]
    fn permute(x: u64) -> u64 {
        let smallest = x & x.wrapping_neg();
        let ripple = x + smallest;
        let ones = ((x ^ ripple) >> 2) / smallest;
        ripple | ones
    }
}

impl Iterator for Subsets {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.next?;
        self.remaining -= 1;
        self.next = if current == 0 {
            None
        } else {
            Some(Self::permute(current)).filter(|&n| n < self.limit)
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Subsets {}
