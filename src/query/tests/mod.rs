use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::curve::tests::{all_points, point};
use crate::range::tests::arb_long_range;
use crate::{
    BacktrackingQueryBuilder, CompactHilbertCurve, LongRange, LongRangeHome, MultiDimensionalSpec,
    PlainFilterCombiner, Query, QueryOptions, SimpleRegionInspector,
};

pub mod combiner;
pub mod options;

pub type Region = Vec<Vec<LongRange>>;

pub fn long(start: u64, end: u64) -> LongRange {
    LongRange::new(start, end).unwrap()
}

///`[2, 6) × [2, 4)` を含む 8×8 の空間
pub fn square() -> (CompactHilbertCurve, Region) {
    let curve = CompactHilbertCurve::new(MultiDimensionalSpec::new(vec![3, 3]).unwrap());
    (curve, vec![vec![long(2, 6), long(2, 4)]])
}

///一定のフィルタで領域を分解する
pub fn decompose(
    curve: &CompactHilbertCurve,
    region: Region,
    options: QueryOptions,
    max_gap: u64,
) -> Query<(), u64> {
    let inspector = SimpleRegionInspector::new(region, (), LongRangeHome).unwrap();
    let combiner = PlainFilterCombiner::new((), max_gap);
    BacktrackingQueryBuilder::new(inspector, combiner, LongRangeHome, options)
        .unwrap()
        .decompose(curve)
        .unwrap()
}

pub fn bounds<F>(query: &Query<F, u64>) -> Vec<(u64, u64)> {
    query
        .ranges()
        .iter()
        .map(|range| (*range.index_range().start(), *range.index_range().end()))
        .collect()
}

///領域内の点のインデックスを1つずつ計算する
pub fn region_indices(curve: &mut CompactHilbertCurve, region: &Region) -> BTreeSet<u64> {
    let spec = curve.spec().clone();
    all_points(&spec)
        .into_iter()
        .filter(|values| {
            region.iter().any(|orthotope| {
                orthotope
                    .iter()
                    .zip(values)
                    .all(|(range, value)| range.contains(value))
            })
        })
        .map(|values| {
            curve
                .index_of(&point(&spec, &values))
                .unwrap()
                .to_u64()
                .unwrap()
        })
        .collect()
}

///小さな空間と、その中の1〜2個の直交体からなる領域
pub fn arb_case() -> impl Strategy<Value = (MultiDimensionalSpec, Region)> {
    proptest::collection::vec(0usize..=4, 1..=3).prop_flat_map(|bits| {
        let orthotope: Vec<_> = bits.iter().map(|&b| arb_long_range(1 << b)).collect();
        let spec = MultiDimensionalSpec::new(bits).unwrap();
        (Just(spec), proptest::collection::vec(orthotope, 1..=2))
    })
}
