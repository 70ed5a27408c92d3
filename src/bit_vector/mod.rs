use std::cmp::Ordering;
use std::fmt::{self, Display};

#[cfg(any(test, feature = "random"))]
use rand::Rng;

use crate::error::{Error, Result};

pub mod convert;
pub mod gray_code;
pub mod logic;

#[cfg(test)]
pub(crate) mod tests;

pub(crate) const WORD_BITS: usize = 64;

/// 固定長のビット列を整数として扱う型。
///
/// ビット0が最下位ビットで、`size` は生成時に固定される。
/// 2つのベクトルを組み合わせる演算は、すべて同じ `size` であることを要求する。
///
/// 内部的には `u64` のワード列として保持され、`size` を超える位置のビットは常に0に保たれる。
///
/// ```
/// # use hilbert_query::BitVector;
/// let mut v = BitVector::new(5);
/// v.set(0).unwrap();
/// v.set(3).unwrap();
/// assert_eq!(v.to_string(), "01001");
/// assert_eq!(v.to_u64().unwrap(), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitVector {
    size: usize,
    words: Vec<u64>,
}

impl BitVector {
    /// 全ビットが0の [`BitVector`] を生成する。
    pub fn new(size: usize) -> Self {
        BitVector {
            size,
            words: vec![0; size.div_ceil(WORD_BITS)],
        }
    }

    /// ビット数を返す。
    pub fn size(&self) -> usize {
        self.size
    }

    /// 内部のワード列を下位ワードから順に返す。
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// `index` のビットを返す。
    ///
    /// ```
    /// # use hilbert_query::{BitVector, Error};
    /// let v = BitVector::from_u64(4, 0b0100).unwrap();
    /// assert_eq!(v.get(2), Ok(true));
    /// assert_eq!(v.get(4), Err(Error::OutOfRange { index: 4, size: 4 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.bit(index))
    }

    /// `index` のビットを1にする。
    pub fn set(&mut self, index: usize) -> Result<()> {
        self.set_to(index, true)
    }

    /// `index` のビットを0にする。
    pub fn clear(&mut self, index: usize) -> Result<()> {
        self.set_to(index, false)
    }

    /// `index` のビットを `value` にする。
    pub fn set_to(&mut self, index: usize, value: bool) -> Result<()> {
        self.check_index(index)?;
        self.put_bit(index, value);
        Ok(())
    }

    /// `index` のビットを反転する。
    pub fn flip(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.words[index / WORD_BITS] ^= 1 << (index % WORD_BITS);
        Ok(())
    }

    /// 全ビットを0にする。
    pub fn clear_all(&mut self) {
        self.words.fill(0);
    }

    /// 全ビットを1にする。
    pub fn set_all(&mut self) {
        self.words.fill(u64::MAX);
        self.mask_top();
    }

    /// 1になっているビットの個数を返す。
    pub fn cardinality(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// 値が0かどうか。
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// 値を表現するのに必要なビット数（最上位の1の位置 + 1）を返す。
    pub fn length(&self) -> usize {
        for (i, &word) in self.words.iter().enumerate().rev() {
            if word != 0 {
                return i * WORD_BITS + WORD_BITS - word.leading_zeros() as usize;
            }
        }
        0
    }

    /// `from` 以上で最初に1になっているビットの位置を返す。
    pub fn next_set_bit(&self, from: usize) -> Option<usize> {
        if from >= self.size {
            return None;
        }
        let mut i = from / WORD_BITS;
        let mut word = self.words[i] & (u64::MAX << (from % WORD_BITS));
        loop {
            if word != 0 {
                return Some(i * WORD_BITS + word.trailing_zeros() as usize);
            }
            i += 1;
            if i == self.words.len() {
                return None;
            }
            word = self.words[i];
        }
    }

    /// `from` 以上で最初に0になっているビットの位置を返す。
    pub fn next_clear_bit(&self, from: usize) -> Option<usize> {
        if from >= self.size {
            return None;
        }
        let mut i = from / WORD_BITS;
        let mut word = !self.words[i] & (u64::MAX << (from % WORD_BITS));
        loop {
            if word != 0 {
                let index = i * WORD_BITS + word.trailing_zeros() as usize;
                return (index < self.size).then_some(index);
            }
            i += 1;
            if i == self.words.len() {
                return None;
            }
            word = !self.words[i];
        }
    }

    /// 外部の乱数生成器を使用してランダムな [`BitVector`] を生成する。
    #[cfg(any(test, feature = "random"))]
    pub fn random_using<R: Rng>(rng: &mut R, size: usize) -> Self {
        let mut vector = BitVector::new(size);
        for word in vector.words.iter_mut() {
            *word = rng.random();
        }
        vector.mask_top();
        vector
    }

    pub(crate) fn bit(&self, index: usize) -> bool {
        debug_assert!(index < self.size);
        (self.words[index / WORD_BITS] >> (index % WORD_BITS)) & 1 == 1
    }

    pub(crate) fn put_bit(&mut self, index: usize, value: bool) {
        debug_assert!(index < self.size);
        let mask = 1u64 << (index % WORD_BITS);
        if value {
            self.words[index / WORD_BITS] |= mask;
        } else {
            self.words[index / WORD_BITS] &= !mask;
        }
    }

    /// `size` を超える位置のビットを落とす
    pub(crate) fn mask_top(&mut self) {
        let used = self.size % WORD_BITS;
        if used != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << used) - 1;
            }
        }
    }

    pub(crate) fn words_mut(&mut self) -> &mut [u64] {
        &mut self.words
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.size {
            return Err(Error::OutOfRange {
                index,
                size: self.size,
            });
        }
        Ok(())
    }

    pub(crate) fn check_same_size(&self, other: &BitVector) -> Result<()> {
        if self.size != other.size {
            return Err(Error::SizeMismatch {
                expected: self.size,
                actual: other.size,
            });
        }
        Ok(())
    }
}

impl Ord for BitVector {
    /// 符号なし整数としての大小で比較し、等しければ `size` で比較する。
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.words.len().max(other.words.len());
        for i in (0..len).rev() {
            let a = self.words.get(i).copied().unwrap_or(0);
            let b = other.words.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                ordering => return ordering,
            }
        }
        self.size.cmp(&other.size)
    }
}

impl PartialOrd for BitVector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for BitVector {
    /// 最上位ビットから順に `0` / `1` で表示する。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in (0..self.size).rev() {
            write!(f, "{}", if self.bit(index) { '1' } else { '0' })?;
        }
        Ok(())
    }
}
