#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::curve::tests::{all_points, arb_spec_and_point, point};
    use crate::{BitVector, CompactHilbertCurve, Error, MultiDimensionalSpec};
    use proptest::prelude::*;

    fn curve(bits: Vec<usize>) -> CompactHilbertCurve {
        CompactHilbertCurve::new(MultiDimensionalSpec::new(bits).unwrap())
    }

    fn index_value(curve: &mut CompactHilbertCurve, values: &[u64]) -> u64 {
        let point = point(curve.spec(), values);
        curve.index_of(&point).unwrap().to_u64().unwrap()
    }

    #[test]
    fn known_indices_of_square() {
        let mut curve = curve(vec![3, 3]);
        let expected = [
            ([0, 0], 0),
            ([0, 1], 1),
            ([1, 0], 3),
            ([2, 2], 8),
            ([3, 4], 31),
            ([7, 7], 42),
            ([5, 3], 52),
            ([7, 0], 63),
        ];
        for (values, index) in expected {
            assert_eq!(index_value(&mut curve, &values), index, "{values:?}");
        }
    }

    #[test]
    fn known_indices_of_mixed_widths() {
        let mut curve = curve(vec![1, 3, 2]);
        assert_eq!(index_value(&mut curve, &[1, 5, 2]), 60);
        assert_eq!(index_value(&mut curve, &[0, 7, 3]), 32);
        assert_eq!(index_value(&mut curve, &[1, 0, 1]), 2);
    }

    #[test]
    fn single_dimension_is_identity() {
        let mut curve = curve(vec![5]);
        for value in 0..32 {
            assert_eq!(index_value(&mut curve, &[value]), value);
        }
    }

    #[test]
    fn every_index_is_used_exactly_once() {
        for bits in [vec![3, 3], vec![1, 3, 2], vec![2, 0, 4], vec![4, 1], vec![0, 2]] {
            let mut curve = curve(bits);
            let points = all_points(curve.spec());
            let indices: BTreeSet<u64> = points
                .iter()
                .map(|values| index_value(&mut curve, values))
                .collect();
            let size = 1u64 << curve.spec().sum_bits_per_dimension();
            assert_eq!(indices.len() as u64, size);
            assert_eq!(indices.last().copied(), Some(size - 1));
        }
    }

    ///幅が揃っていれば、連続するインデックスの点は1つの次元で1だけ離れている
    #[test]
    fn consecutive_indices_are_neighbours() {
        for bits in [vec![3, 3], vec![3, 3, 3], vec![4]] {
            let mut curve = curve(bits);
            let sum = curve.spec().sum_bits_per_dimension();
            let mut previous: Option<Vec<u64>> = None;
            for value in 0..1u64 << sum {
                let index = BitVector::from_u64(sum, value).unwrap();
                let current: Vec<u64> = curve
                    .point_of(&index)
                    .unwrap()
                    .iter()
                    .map(|coordinate| coordinate.to_u64().unwrap())
                    .collect();
                if let Some(previous) = previous {
                    let distance: u64 = previous
                        .iter()
                        .zip(&current)
                        .map(|(a, b)| a.abs_diff(*b))
                        .sum();
                    assert_eq!(distance, 1, "{previous:?} -> {current:?}");
                }
                previous = Some(current);
            }
        }
    }

    #[test]
    fn min_level_clears_lower_index_bits() {
        let mut curve = curve(vec![3, 3]);
        let point = point(curve.spec(), &[7, 7]);
        let mut index = curve.spec().new_index();
        curve.index(&point, 1, &mut index).unwrap();
        assert_eq!(index.to_u64().unwrap(), 40);
        curve.index(&point, 3, &mut index).unwrap();
        assert!(index.is_zero());
    }

    #[test]
    fn output_buffer_is_overwritten() {
        let mut curve = curve(vec![3, 3]);
        let mut index = curve.spec().new_index();
        index.set_all();
        curve.index(&point(curve.spec(), &[0, 1]), 0, &mut index).unwrap();
        assert_eq!(index.to_u64().unwrap(), 1);

        let mut out = vec![BitVector::from_u64(3, 7).unwrap(); 2];
        curve.index_inverse(&index, &mut out).unwrap();
        assert_eq!(out, point(curve.spec(), &[0, 1]));
    }

    #[test]
    fn rejects_malformed_arguments() {
        let mut curve = curve(vec![3, 2]);
        let mut index = BitVector::new(5);
        assert_eq!(
            curve.index(&[BitVector::new(3)], 0, &mut index),
            Err(Error::SizeMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            curve.index(&[BitVector::new(3), BitVector::new(3)], 0, &mut index),
            Err(Error::SizeMismatch {
                expected: 2,
                actual: 3
            })
        );
        let point = curve.spec().new_point();
        assert_eq!(
            curve.index(&point, 0, &mut BitVector::new(6)),
            Err(Error::SizeMismatch {
                expected: 5,
                actual: 6
            })
        );
        assert!(matches!(
            curve.index(&point, 4, &mut index),
            Err(Error::InvalidArgument { .. })
        ));
        assert_eq!(
            curve.point_of(&BitVector::new(4)),
            Err(Error::SizeMismatch {
                expected: 5,
                actual: 4
            })
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn inverse_restores_the_point((spec, point) in arb_spec_and_point()) {
            let mut curve = CompactHilbertCurve::new(spec);
            let index = curve.index_of(&point).unwrap();
            prop_assert_eq!(curve.point_of(&index).unwrap(), point);
        }

        #[test]
        fn partial_index_is_a_prefix((spec, point) in arb_spec_and_point(), level in 0usize..=70) {
            let mut curve = CompactHilbertCurve::new(spec);
            let min_level = level.min(curve.spec().max_bits_per_dimension());
            let full = curve.index_of(&point).unwrap();
            let mut partial = curve.spec().new_index();
            curve.index(&point, min_level, &mut partial).unwrap();

            let mut expected = full.clone();
            expected.clear_section(0, curve.masks().bits_below(min_level)).unwrap();
            prop_assert_eq!(partial, expected);
        }
    }
}
