use proptest::prelude::*;

use crate::LongRange;


///小さな座標空間の中でランダムな区間を生成する
pub fn arb_long_range(limit: u64) -> impl Strategy<Value = LongRange> {
    (0..limit).prop_flat_map(move |start| {
        (start + 1..=limit).prop_map(move |end| LongRange::new(start, end).unwrap())
    })
}

///区間の点を1つずつ数える素朴な実装
pub fn brute_force_overlap(a: &[LongRange], b: &[LongRange]) -> u64 {
    fn count(a: &[LongRange], b: &[LongRange], point: &mut Vec<u64>) -> u64 {
        let dimension = point.len();
        if dimension == a.len() {
            return 1;
        }
        let mut total = 0;
        for x in *a[dimension].start()..*a[dimension].end() {
            if b[dimension].contains(&x) {
                point.push(x);
                total += count(a, b, point);
                point.pop();
            }
        }
        total
    }
    count(a, b, &mut Vec::new())
}
