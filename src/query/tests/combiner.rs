#[cfg(test)]
mod tests {
    use crate::query::tests::{bounds, square};
    use crate::{
        BacktrackingQueryBuilder, FilterCombiner, ListConcatCombiner, LongRangeHome, MergeContext,
        PlainFilterCombiner, QueryOptions, SimpleRegionInspector,
    };

    fn context(gap: &u64) -> MergeContext<'_, u64> {
        MergeContext {
            max_ranges: 4,
            range_count: 2,
            gap,
            total_excess: &100,
        }
    }

    #[test]
    fn plain_combiner_respects_the_gap() {
        let combiner = PlainFilterCombiner::new("all", 3u64);
        assert_eq!(combiner.combine(&"a", &"b", &context(&3)).unwrap(), Some("all"));
        assert_eq!(combiner.combine(&"a", &"b", &context(&4)).unwrap(), None);
        assert_eq!(combiner.collapse(&"a", &"b", &1000).unwrap(), "all");
    }

    #[test]
    fn list_combiner_keeps_the_order() {
        let combiner = ListConcatCombiner::<u8, u64>::new(0);
        assert_eq!(
            combiner.collapse(&vec![1, 2], &vec![3], &5).unwrap(),
            vec![1, 2, 3]
        );
        assert_eq!(combiner.combine(&vec![1], &vec![2], &context(&1)).unwrap(), None);
    }

    #[test]
    fn collapsed_filters_are_concatenated() {
        let (curve, region) = square();
        let inspector = SimpleRegionInspector::new(region, vec!["box"], LongRangeHome).unwrap();
        let query = BacktrackingQueryBuilder::new(
            inspector,
            ListConcatCombiner::new(0u64),
            LongRangeHome,
            QueryOptions::new(1),
        )
        .unwrap()
        .decompose(&curve)
        .unwrap();
        assert_eq!(bounds(&query), vec![(8, 56)]);
        assert_eq!(query.ranges()[0].filter(), &vec!["box", "box"]);
    }
}
