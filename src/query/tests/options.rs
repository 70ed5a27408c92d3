#[cfg(test)]
mod tests {
    use crate::query::tests::{bounds, square};
    use crate::{Error, Query, QueryOptions};

    #[test]
    fn default_options() {
        let options = QueryOptions::default();
        assert_eq!(options.max_ranges, 16);
        assert!(!options.over_selectivity_is_tolerable);
        assert_eq!(QueryOptions::new(16), options);
        assert!(
            QueryOptions::new(3)
                .with_over_selectivity_tolerable(true)
                .over_selectivity_is_tolerable
        );
    }

    #[test]
    fn validation() {
        assert!(QueryOptions::new(1).validate().is_ok());
        assert!(matches!(
            QueryOptions::new(0).validate(),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn query_lookup_and_treemap() {
        let (curve, region) = square();
        let query: Query<(), u64> =
            crate::query::tests::decompose(&curve, region, QueryOptions::default(), 0);
        assert_eq!(query.len(), 2);
        assert!(!query.is_empty());
        assert!(query.contains(&8));
        assert!(query.contains(&55));
        assert!(!query.contains(&12));
        assert!(!query.contains(&7));
        assert_eq!(
            query.find(&53).map(|range| *range.index_range().start()),
            Some(52)
        );

        let treemap = query.to_treemap();
        assert_eq!(treemap.len(), 8);
        assert_eq!(treemap.min(), Some(8));
        assert_eq!(treemap.max(), Some(55));
        assert_eq!(bounds(&query).len(), query.into_ranges().len());
    }
}
