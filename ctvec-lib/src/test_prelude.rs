//! Test-only imports, plus the `Vec`-based reference implementations the
//! per-operation tests shadow against.

pub use proptest::array::uniform6;
pub use proptest::array::uniform7;
pub use proptest::array::uniform8;
pub use proptest::prelude::*;
pub use proptest_arbitrary_interop::arb;
pub use rand::rngs::StdRng;
pub use rand::seq::SliceRandom;
pub use rand::SeedableRng;
pub use test_strategy::proptest;

pub use crate::prelude::*;

/// `remove_first` reference: drop the leftmost occurrence, if any.
pub fn vec_remove_first(target: i32, xs: &[i32]) -> Vec<i32> {
    let mut out = xs.to_vec();
    if let Some(position) = out.iter().position(|&x| x == target) {
        out.remove(position);
    }
    out
}

/// `remove_all` reference: drop every occurrence.
pub fn vec_remove_all(target: i32, xs: &[i32]) -> Vec<i32> {
    xs.iter().copied().filter(|&x| x != target).collect()
}

/// `sort` reference.
pub fn vec_sorted(xs: &[i32]) -> Vec<i32> {
    let mut out = xs.to_vec();
    out.sort_unstable();
    out
}

/// `uniq` reference: collapse adjacent runs only.
pub fn vec_uniq(xs: &[i32]) -> Vec<i32> {
    let mut out = xs.to_vec();
    out.dedup();
    out
}

/// `set` reference: first-occurrence deduplication.
pub fn vec_dedup_keep_first(xs: &[i32]) -> Vec<i32> {
    let mut out = Vec::new();
    for &x in xs {
        if !out.contains(&x) {
            out.push(x);
        }
    }
    out
}

/// `bisect_left` reference.
pub fn vec_bisect_left(n: i32, xs: &[i32]) -> usize {
    xs.partition_point(|&x| x < n)
}
