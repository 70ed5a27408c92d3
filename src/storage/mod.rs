use std::ops::{Bound, Deref, RangeBounds};

use crate::bit_vector::BitVector;
use crate::error::{Error, Result};
use crate::query::Query;
use crate::range::RangeHome;

pub mod btree_map;

#[cfg(test)]
mod tests;

/// 書き込み操作の塊
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch<K, V> {
    pub puts: Vec<(K, V)>,
    pub deletes: Vec<K>,
}

impl<K, V> Batch<K, V> {
    pub fn new() -> Self {
        Batch {
            puts: Vec::new(),
            deletes: Vec::new(),
        }
    }

    pub fn put(&mut self, key: K, value: V) {
        self.puts.push((key, value));
    }

    pub fn delete(&mut self, key: K) {
        self.deletes.push(key);
    }
}

impl<V> Batch<Vec<u8>, V> {
    /// 曲線のインデックスをキーとして書き込む。
    pub fn put_index(&mut self, index: &BitVector, value: V) {
        self.put(index_key(index), value);
    }
}

/// `(インデックス, 値)` の列を書き込みだけの [`Batch`] にまとめる。
///
/// ```
/// # use hilbert_query::{Batch, BitVector, index_key};
/// let batch: Batch<Vec<u8>, &str> = [(BitVector::from_u64(6, 52).unwrap(), "a")]
///     .into_iter()
///     .collect();
/// assert_eq!(batch.puts, vec![(index_key(&BitVector::from_u64(6, 52).unwrap()), "a")]);
/// assert!(batch.deletes.is_empty());
/// ```
impl<V> FromIterator<(BitVector, V)> for Batch<Vec<u8>, V> {
    fn from_iter<I: IntoIterator<Item = (BitVector, V)>>(entries: I) -> Self {
        Batch {
            puts: entries
                .into_iter()
                .map(|(index, value)| (index_key(&index), value))
                .collect(),
            deletes: Vec::new(),
        }
    }
}

pub trait KeyValueStore<K, V> {
    /// 値へのアクセサ。戻り値にライフタイム `'a` を結び付けるための GAT
    type Accessor<'a>: Deref<Target = V>
    where
        Self: 'a;

    fn get<'a>(&'a self, key: &K) -> Option<Self::Accessor<'a>>;

    /// 削除を先に、書き込みを後に適用する
    fn apply_batch(&mut self, batch: Batch<K, V>);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// キーの順序で範囲走査できるストア
pub trait OrderedKeyValueStore<K, V>: KeyValueStore<K, V> {
    fn scan<'a, R>(&'a self, range: R) -> Box<dyn Iterator<Item = (&'a K, Self::Accessor<'a>)> + 'a>
    where
        R: RangeBounds<K>;
}

/// インデックスを固定長のビッグエンディアンのキーにする。
///
/// 同じ幅のインデックス同士では、キーのバイト順が数値の順と一致する。
///
/// ```
/// # use hilbert_query::{BitVector, index_key};
/// let a = index_key(&BitVector::from_u64(12, 0x0ff).unwrap());
/// let b = index_key(&BitVector::from_u64(12, 0x100).unwrap());
/// assert_eq!(a, vec![0x00, 0xff]);
/// assert!(a < b);
/// ```
pub fn index_key(index: &BitVector) -> Vec<u8> {
    index.to_big_endian_bytes()
}

/// 分解済みの [`Query`] の各区間を `store` で走査し、該当する要素を区間のフィルタと共に返す。
///
/// 区間には領域外の点が含まれうるので、呼び出し側はフィルタで結果を絞り込むこと。
/// 区間の終点がインデックス空間の末尾（`2^index_bits`）のときは、上限なしで走査する。
pub fn scan_query<'a, S, V, F, H>(
    store: &'a S,
    query: &'a Query<F, H::Point>,
    home: &H,
    index_bits: usize,
) -> Result<Vec<(&'a Vec<u8>, S::Accessor<'a>, &'a F)>>
where
    S: OrderedKeyValueStore<Vec<u8>, V>,
    H: RangeHome,
{
    let mut found = Vec::new();
    for range in query.ranges() {
        let start = index_key(&home.to_bits(range.index_range().start(), index_bits)?);
        let end = match home.to_bits(range.index_range().end(), index_bits) {
            Ok(end) => Bound::Excluded(index_key(&end)),
            Err(Error::Overflow { .. }) => Bound::Unbounded,
            Err(error) => return Err(error),
        };
        for (key, value) in store.scan((Bound::Included(start), end)) {
            found.push((key, value, range.filter()));
        }
    }
    Ok(found)
}
