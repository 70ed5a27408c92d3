use proptest::prelude::*;

use crate::BitVector;


/// 指定したサイズのランダムな [`BitVector`] を生成する
pub fn arb_bit_vector(size: usize) -> impl Strategy<Value = BitVector> {
    proptest::collection::vec(any::<bool>(), size).prop_map(move |bits| {
        let mut vector = BitVector::new(size);
        vector.copy_from_bits(&bits).unwrap();
        vector
    })
}

/// ワード境界をまたぐサイズも含めてランダムな [`BitVector`] を生成する
pub fn arb_sized_bit_vector() -> impl Strategy<Value = BitVector> {
    (0usize..=150).prop_flat_map(arb_bit_vector)
}

/// 1ビットずつ数え直す素朴な実装
pub fn naive_value(vector: &BitVector) -> u128 {
    let mut value = 0u128;
    for i in (0..vector.size()).rev() {
        value = (value << 1) | vector.get(i).unwrap() as u128;
    }
    value
}
