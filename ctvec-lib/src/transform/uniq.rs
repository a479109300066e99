use crate::prelude::*;

/// Number of runs of adjacent equal elements in `xs`.
pub const fn runs(xs: &[i32]) -> usize {
    if xs.is_empty() {
        return 0;
    }
    let mut total = 1;
    let mut i = 1;
    while i < xs.len() {
        if xs[i] != xs[i - 1] {
            total += 1;
        }
        i += 1;
    }
    total
}

/// Copy `xs` into `out`, writing each run of adjacent equal elements once.
///
/// Returns the number of elements written. `out` must hold at least
/// `runs(xs)` elements.
pub const fn uniq_into(xs: &[i32], out: &mut [i32]) -> usize {
    let mut src = 0;
    let mut dst = 0;
    while src < xs.len() {
        if src == 0 || xs[src] != xs[src - 1] {
            out[dst] = xs[src];
            dst += 1;
        }
        src += 1;
    }
    dst
}

/// Collapse each run of adjacent equal elements into a single element.
///
/// This is not full deduplication: an element may reappear after a different
/// one separates its runs. The annotated output length must equal the run
/// count — [`runs`] computes it.
///
/// ```
/// use ctvec_lib::prelude::*;
///
/// const V: Vector<3> = uniq(vector![1, 1, 2, 2, 1, 1]);
/// const _: () = assert!(V.same(&vector![1, 2, 1]));
/// ```
pub const fn uniq<const N: usize, const M: usize>(v: Vector<N>) -> Vector<M> {
    assert!(
        M == runs(v.as_slice()),
        "uniq: the result length must be the number of adjacent runs"
    );
    let mut out = [0; M];
    uniq_into(v.as_slice(), &mut out);
    Vector::new(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    const _: () = {
        let v: Vector<3> = uniq(vector![1, 1, 2, 2, 1, 1]);
        assert!(v.same(&vector![1, 2, 1]));

        let no_runs: Vector<3> = uniq(vector![1, 2, 3]);
        assert!(no_runs.same(&vector![1, 2, 3]));

        let one_run: Vector<1> = uniq(vector![5, 5, 5, 5]);
        assert!(one_run.same(&vector![5]));

        let empty: Vector<0> = uniq(vector![]);
        assert!(empty.same(&vector![]));
    };

    const _: () = {
        assert!(runs(&[1, 1, 2, 2, 1, 1]) == 3);
        assert!(runs(&[7]) == 1);
        assert!(runs(&[]) == 0);
    };

    #[proptest]
    fn matches_vec_dedup(#[strategy(uniform8(-2..2))] xs: [i32; 8]) {
        let mut out = vec![0; xs.len()];
        let written = uniq_into(&xs, &mut out);
        out.truncate(written);

        prop_assert_eq!(&out, &vec_uniq(&xs));
        prop_assert_eq!(out.len(), runs(&xs));
    }

    #[proptest]
    fn result_has_no_adjacent_duplicates(#[strategy(uniform8(-2..2))] xs: [i32; 8]) {
        let mut out = vec![0; xs.len()];
        let written = uniq_into(&xs, &mut out);
        out.truncate(written);

        prop_assert!(out.windows(2).all(|w| w[0] != w[1]));
    }
}
