#[cfg(test)]
mod tests {
    use crate::curve::tests::all_points;
    use crate::{
        BitVector, CompactHilbertCurve, LongRangeHome, MultiDimensionalSpec, Pow2Range, RangeHome,
        Result,
    };

    fn curve(bits: Vec<usize>) -> CompactHilbertCurve {
        CompactHilbertCurve::new(MultiDimensionalSpec::new(bits).unwrap())
    }

    #[test]
    fn full_descent_reaches_every_point_in_index_order() {
        for bits in [vec![3, 3], vec![1, 3, 2], vec![2, 0, 3]] {
            let mut curve = curve(bits);
            let mut leaves: Vec<(BitVector, Vec<BitVector>)> = Vec::new();
            let mut collect = |level: usize, index: &BitVector, point: &[BitVector]| -> Result<bool> {
                if level == 0 {
                    leaves.push((index.clone(), point.to_vec()));
                }
                Ok(true)
            };
            curve.accept(&mut collect).unwrap();

            assert_eq!(leaves.len(), all_points(curve.spec()).len());
            for (expected, (index, point)) in leaves.iter().enumerate() {
                assert_eq!(index.to_u64().unwrap(), expected as u64);
                assert_eq!(&curve.index_of(point).unwrap(), index);
            }
        }
    }

    #[test]
    fn pruned_root_is_the_only_visit() {
        let curve = curve(vec![4, 4]);
        let mut visits = 0;
        let mut count = |_: &Pow2Range, orthotope: &[Pow2Range]| -> Result<bool> {
            visits += 1;
            assert_eq!(Pow2Range::level_sum(orthotope), 8);
            Ok(false)
        };
        curve.navigate(&mut count).unwrap();
        assert_eq!(visits, 1);
    }

    #[test]
    fn zero_width_space_has_a_single_node() {
        let curve = curve(vec![0, 0]);
        let mut nodes = Vec::new();
        let mut record = |index: &Pow2Range, _: &[Pow2Range]| -> Result<bool> {
            nodes.push(index.clone());
            Ok(true)
        };
        curve.navigate(&mut record).unwrap();
        assert_eq!(nodes, vec![Pow2Range::new(BitVector::new(0), 0)]);
    }

    ///先行順で連続した区間を辿り、各ノードの直交体が子孫の点をすべて含む
    #[test]
    fn nodes_are_contiguous_and_nested() {
        let curve = curve(vec![2, 3, 1]);
        let home = LongRangeHome;
        let mut next_leaf = 0u64;
        let mut ancestors: Vec<(Pow2Range, Vec<Pow2Range>)> = Vec::new();
        let mut check = |index: &Pow2Range, orthotope: &[Pow2Range]| -> Result<bool> {
            let range = home.to_range(index)?;
            assert_eq!(*range.start(), next_leaf);
            assert_eq!(Pow2Range::level_sum(orthotope), index.level());

            while ancestors
                .last()
                .is_some_and(|(parent, _)| parent.level() <= index.level())
            {
                ancestors.pop();
            }
            for (parent, parent_orthotope) in &ancestors {
                assert!(parent.encloses(index, &home)?);
                for (outer, inner) in parent_orthotope.iter().zip(orthotope) {
                    assert!(outer.encloses(inner, &home)?);
                }
            }

            if index.level() == 0 {
                next_leaf += 1;
            } else {
                ancestors.push((index.clone(), orthotope.to_vec()));
            }
            Ok(true)
        };
        curve.navigate(&mut check).unwrap();
        assert_eq!(next_leaf, 64);
    }

    #[test]
    fn visitor_errors_stop_the_descent() {
        let curve = curve(vec![2, 2]);
        let mut visits = 0;
        let mut fail = |level: usize, _: &BitVector, _: &[BitVector]| -> Result<bool> {
            visits += 1;
            if level == 1 {
                return Err(crate::Error::invalid("stop"));
            }
            Ok(true)
        };
        assert!(curve.accept(&mut fail).is_err());
        assert_eq!(visits, 2);
    }
}
