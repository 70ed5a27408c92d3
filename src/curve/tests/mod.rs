use proptest::prelude::*;

use crate::bit_vector::tests::arb_bit_vector;
use crate::{BitVector, MultiDimensionalSpec};

pub mod hilbert;
pub mod visitor;

///各次元の値から点を作る
pub fn point(spec: &MultiDimensionalSpec, values: &[u64]) -> Vec<BitVector> {
    spec.bits_per_dimension()
        .iter()
        .zip(values)
        .map(|(&bits, &value)| BitVector::from_u64(bits, value).unwrap())
        .collect()
}

///空間内のすべての点を辞書順に列挙する
pub fn all_points(spec: &MultiDimensionalSpec) -> Vec<Vec<u64>> {
    let mut points = vec![Vec::new()];
    for &bits in spec.bits_per_dimension() {
        points = points
            .into_iter()
            .flat_map(|prefix| {
                (0..1u64 << bits).map(move |value| {
                    let mut next = prefix.clone();
                    next.push(value);
                    next
                })
            })
            .collect();
    }
    points
}

///ワード境界をまたぐ幅も含むランダムな空間
pub fn arb_spec() -> impl Strategy<Value = MultiDimensionalSpec> {
    proptest::collection::vec(0usize..=70, 1..=4)
        .prop_map(|bits| MultiDimensionalSpec::new(bits).unwrap())
}

///空間とその中のランダムな点
pub fn arb_spec_and_point() -> impl Strategy<Value = (MultiDimensionalSpec, Vec<BitVector>)> {
    arb_spec().prop_flat_map(|spec| {
        let point: Vec<_> = spec
            .bits_per_dimension()
            .iter()
            .map(|&bits| arb_bit_vector(bits))
            .collect();
        (Just(spec), point)
    })
}
