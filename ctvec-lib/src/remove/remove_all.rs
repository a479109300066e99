use crate::prelude::*;

/// Number of occurrences of `target` in `xs`.
pub const fn count(target: i32, xs: &[i32]) -> usize {
    let mut occurrences = 0;
    let mut i = 0;
    while i < xs.len() {
        if xs[i] == target {
            occurrences += 1;
        }
        i += 1;
    }
    occurrences
}

/// Copy `xs` into `out`, skipping every occurrence of `target`.
///
/// Returns the number of elements written. `out` must hold at least
/// `xs.len() - count(target, xs)` elements.
pub const fn remove_all_into(target: i32, xs: &[i32], out: &mut [i32]) -> usize {
    let mut src = 0;
    let mut dst = 0;
    while src < xs.len() {
        if xs[src] != target {
            out[dst] = xs[src];
            dst += 1;
        }
        src += 1;
    }
    dst
}

/// Remove every occurrence of `target` from a vector.
///
/// Each position is considered independently; unlike
/// [`remove_first`](crate::remove::remove_first::remove_first) there is no
/// early stop. The annotated output length must be the input length minus
/// the occurrence count — [`count`] computes it.
///
/// ```
/// use ctvec_lib::prelude::*;
///
/// const V: Vector<3> = remove_all(9, vector![1, 9, 2, 9, 3, 9]);
/// const _: () = assert!(V.same(&vector![1, 2, 3]));
/// ```
pub const fn remove_all<const N: usize, const M: usize>(target: i32, v: Vector<N>) -> Vector<M> {
    assert!(
        M + count(target, v.as_slice()) == N,
        "remove_all: the result length must be the input length minus the occurrence count"
    );
    let mut out = [0; M];
    remove_all_into(target, v.as_slice(), &mut out);
    Vector::new(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    const _: () = {
        let v: Vector<3> = remove_all(9, vector![1, 9, 2, 9, 3, 9]);
        assert!(v.same(&vector![1, 2, 3]));

        let all_gone: Vector<0> = remove_all(1, vector![1, 1, 1]);
        assert!(all_gone.same(&vector![]));

        let unchanged: Vector<3> = remove_all(9, vector![1, 2, 3]);
        assert!(unchanged.same(&vector![1, 2, 3]));
    };

    const _: () = {
        assert!(count(9, &[1, 9, 2, 9, 3, 9]) == 3);
        assert!(count(4, &[1, 9, 2]) == 0);
        assert!(count(0, &[]) == 0);
    };

    #[proptest]
    fn matches_vec_reference(
        #[strategy(-3..3)] target: i32,
        #[strategy(uniform6(-3..3))] xs: [i32; 6],
    ) {
        let mut out = vec![0; xs.len()];
        let written = remove_all_into(target, &xs, &mut out);
        out.truncate(written);

        prop_assert_eq!(out, vec_remove_all(target, &xs));
    }

    #[proptest]
    fn result_is_free_of_the_target(
        #[strategy(-3..3)] target: i32,
        #[strategy(uniform6(-3..3))] xs: [i32; 6],
    ) {
        let mut out = vec![0; xs.len()];
        let written = remove_all_into(target, &xs, &mut out);
        out.truncate(written);

        prop_assert!(!out.contains(&target));
        prop_assert_eq!(out.len(), xs.len() - count(target, &xs));
    }
}
