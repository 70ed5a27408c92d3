//! ヒルベルト曲線の計算に使うグレイコード関連の変換。

use crate::bit_vector::{BitVector, WORD_BITS};
use crate::error::{Error, Result};

impl BitVector {
    /// 値をグレイコード `b ^ (b >> 1)` に置き換える。
    ///
    /// ```
    /// # use hilbert_query::BitVector;
    /// let mut v = BitVector::from_u64(4, 0b0110).unwrap();
    /// v.gray_code();
    /// assert_eq!(v.to_u64().unwrap(), 0b0101);
    /// ```
    pub fn gray_code(&mut self) {
        let words = self.words_mut();
        for i in 0..words.len() {
            // 上位ワードはまだ書き換えていないので、その最下位ビットが右シフトで流れ込む
            let carry = words.get(i + 1).map_or(0, |next| next & 1);
            words[i] ^= (words[i] >> 1) | (carry << (WORD_BITS - 1));
        }
    }

    /// [`BitVector::gray_code`] の逆変換。
    pub fn gray_code_inverse(&mut self) {
        let mut carry = false;
        let words = self.words_mut();
        for word in words.iter_mut().rev() {
            let mut x = *word;
            x ^= x >> 1;
            x ^= x >> 2;
            x ^= x >> 4;
            x ^= x >> 8;
            x ^= x >> 16;
            x ^= x >> 32;
            if carry {
                x = !x;
            }
            *word = x;
            carry = x & 1 == 1;
        }
        self.mask_top();
    }

    /// `mask` で選ばれた位置にある `source` のビットを、位置の昇順に詰めて `self` に書き込む。
    ///
    /// `self` のサイズは `mask` の1の個数と一致していなければならない。
    ///
    /// ```
    /// # use hilbert_query::BitVector;
    /// let mask = BitVector::from_u64(5, 0b10110).unwrap();
    /// let source = BitVector::from_u64(5, 0b10011).unwrap();
    /// let mut rank = BitVector::new(3);
    /// rank.gray_code_rank(&mask, &source).unwrap();
    /// assert_eq!(rank.to_u64().unwrap(), 0b101);
    /// ```
    pub fn gray_code_rank(&mut self, mask: &BitVector, source: &BitVector) -> Result<()> {
        mask.check_same_size(source)?;
        let cardinality = mask.cardinality();
        if self.size() != cardinality {
            return Err(Error::SizeMismatch {
                expected: cardinality,
                actual: self.size(),
            });
        }
        self.clear_all();
        let mut j = 0;
        let mut next = mask.next_set_bit(0);
        while let Some(k) = next {
            self.put_bit(j, source.bit(k));
            j += 1;
            next = mask.next_set_bit(k + 1);
        }
        Ok(())
    }

    /// [`BitVector::gray_code_rank`] の逆変換。
    ///
    /// `mask` の位置には `rank` のビットを上位から順に戻し、それ以外の位置は
    /// グレイコード上の既知の値 `known` と1つ上位のビットの排他的論理和で復元する。
    pub fn gray_code_rank_inverse(
        &mut self,
        mask: &BitVector,
        known: &BitVector,
        rank: &BitVector,
    ) -> Result<()> {
        self.check_same_size(mask)?;
        self.check_same_size(known)?;
        let cardinality = mask.cardinality();
        if rank.size() != cardinality {
            return Err(Error::invalid(format!(
                "rank has {} bits but the mask selects {}",
                rank.size(),
                cardinality
            )));
        }
        if known
            .words()
            .iter()
            .zip(mask.words())
            .any(|(k, m)| k & m != 0)
        {
            return Err(Error::invalid("known bits overlap the mask"));
        }

        let mut j = rank.size();
        let mut previous = false;
        for k in (0..self.size()).rev() {
            let bit = if mask.bit(k) {
                j -= 1;
                rank.bit(j)
            } else {
                known.bit(k) ^ previous
            };
            self.put_bit(k, bit);
            previous = bit;
        }
        Ok(())
    }

    /// 値を「1つ小さい偶数」にしてからグレイコードに変換する。
    ///
    /// 奇数は最下位ビットを落とし、0以外の偶数は2を引く。0はそのまま。
    /// 部分超立方体 `w` の入口 `gc(2 * floor((w - 1) / 2))` を求めるのに使う。
    ///
    /// ```
    /// # use hilbert_query::BitVector;
    /// let mut v = BitVector::from_u64(3, 6).unwrap();
    /// v.smaller_even_and_gray_code();
    /// assert_eq!(v.to_u64().unwrap(), 0b110); // gc(4)
    /// ```
    pub fn smaller_even_and_gray_code(&mut self) {
        if self.size() == 0 {
            return;
        }
        if self.bit(0) {
            self.put_bit(0, false);
        } else {
            let Some(lowest) = self.next_set_bit(1) else {
                return;
            };
            self.put_bit(lowest, false);
            for k in 1..lowest {
                self.put_bit(k, true);
            }
        }
        self.gray_code();
    }

    /// ビット0と値が異なる最初のビットの位置を返す。
    ///
    /// 全ビットが同じ値（0、全て1、サイズ0）の場合は0を返す。
    /// 部分超立方体 `w` 内の進行方向を求めるのに使う。
    pub fn lowest_different_bit(&self) -> usize {
        if self.size() == 0 {
            return 0;
        }
        let different = if self.bit(0) {
            self.next_clear_bit(0)
        } else {
            self.next_set_bit(0)
        };
        different.unwrap_or(0)
    }
}
