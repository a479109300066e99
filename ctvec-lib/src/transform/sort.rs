use crate::prelude::*;
use crate::query::min::min_in;
use crate::remove::remove_first::remove_first_into;

/// Sort a vector into ascending order.
///
/// Selection sort: repeatedly take the minimum of the remaining elements,
/// remove its first occurrence, and emit it. The empty vector sorts to
/// itself. Stability is immaterial since equal elements are
/// indistinguishable.
///
/// ```
/// use ctvec_lib::prelude::*;
///
/// const SORTED: Vector<6> = sort(vector![4, 1, 2, 5, 6, 3]);
/// const _: () = assert!(SORTED.same(&vector![1, 2, 3, 4, 5, 6]));
/// ```
pub const fn sort<const N: usize>(v: Vector<N>) -> Vector<N> {
    let mut rest = v.into_array();
    let mut rest_len = N;
    let mut out = [0; N];
    let mut next = 0;
    while next < N {
        let (remaining, _) = rest.split_at(rest_len);
        let smallest = min_in(remaining);

        let mut scratch = [0; N];
        rest_len = remove_first_into(smallest, remaining, &mut scratch);
        rest = scratch;

        out[next] = smallest;
        next += 1;
    }
    Vector::new(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    const _: () = {
        let a: Vector<6> = sort(vector![4, 1, 2, 5, 6, 3]);
        assert!(a.same(&vector![1, 2, 3, 4, 5, 6]));

        let b: Vector<6> = sort(vector![3, 3, 1, 1, 2, 2]);
        assert!(b.same(&vector![1, 1, 2, 2, 3, 3]));

        let c: Vector<6> = sort(vector![2, 2, 1, 1, 3, 3]);
        assert!(c.same(&vector![1, 1, 2, 2, 3, 3]));

        let empty: Vector<0> = sort(vector![]);
        assert!(empty.same(&vector![]));
    };

    // Sorting a sorted vector changes nothing.
    const _: () = {
        let once: Vector<5> = sort(vector![5, 4, 1, 3, 2]);
        let twice: Vector<5> = sort(once);
        assert!(twice.same(&once));
    };

    #[test]
    fn sorts_a_seeded_shuffle_back_into_the_index_sequence() {
        let mut rng = StdRng::from_seed([7; 32]);
        let mut xs = make_arr::<8>();
        xs.shuffle(&mut rng);

        assert_eq!(sort(Vector::new(xs)).into_array(), make_arr::<8>());
    }

    #[proptest]
    fn matches_the_standard_sort(#[strategy(uniform6(-4..4))] xs: [i32; 6]) {
        let sorted = sort(Vector::new(xs));
        let expected = vec_sorted(&xs);
        prop_assert_eq!(sorted.as_slice(), expected.as_slice());
    }

    #[proptest]
    fn is_idempotent_and_length_preserving(#[strategy(arb())] v: Vector<7>) {
        let once = sort(v);
        prop_assert_eq!(sort(once), once);
        prop_assert_eq!(once.len(), v.len());
    }

    #[proptest]
    fn preserves_the_multiset_of_elements(#[strategy(uniform6(-4..4))] xs: [i32; 6]) {
        let sorted = sort(Vector::new(xs));

        // Equal sorted sequences mean equal multisets.
        let expected = vec_sorted(&xs);
        prop_assert_eq!(sorted.as_slice(), expected.as_slice());
        prop_assert!(sorted.as_slice().windows(2).all(|w| w[0] <= w[1]));
    }
}
