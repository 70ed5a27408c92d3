use crate::bit_vector::{BitVector, WORD_BITS};
use crate::error::{Error, Result};

impl BitVector {
    /// `self &= other`
    pub fn and(&mut self, other: &BitVector) -> Result<()> {
        self.zip_words(other, |a, b| a & b)
    }

    /// `self |= other`
    pub fn or(&mut self, other: &BitVector) -> Result<()> {
        self.zip_words(other, |a, b| a | b)
    }

    /// `self ^= other`
    pub fn xor(&mut self, other: &BitVector) -> Result<()> {
        self.zip_words(other, |a, b| a ^ b)
    }

    /// `self &= !other`
    pub fn and_not(&mut self, other: &BitVector) -> Result<()> {
        self.zip_words(other, |a, b| a & !b)
    }

    /// `other` の内容を書き写す。
    pub fn copy_from(&mut self, other: &BitVector) -> Result<()> {
        self.check_same_size(other)?;
        self.words_mut().copy_from_slice(other.words());
        Ok(())
    }

    fn zip_words(&mut self, other: &BitVector, op: impl Fn(u64, u64) -> u64) -> Result<()> {
        self.check_same_size(other)?;
        for (a, &b) in self.words_mut().iter_mut().zip(other.words()) {
            *a = op(*a, b);
        }
        Ok(())
    }

    /// 全ビットを `count` だけ巡回させる。
    ///
    /// 正の値は上位方向への回転を表し、`count` は `size` を法として扱われる。
    ///
    /// ```
    /// # use hilbert_query::BitVector;
    /// let mut v = BitVector::from_u64(4, 0b1001).unwrap();
    /// v.rotate(1);
    /// assert_eq!(v.to_u64().unwrap(), 0b0011);
    /// v.rotate(-6);
    /// assert_eq!(v.to_u64().unwrap(), 0b1100);
    /// ```
    pub fn rotate(&mut self, count: isize) {
        let size = self.size();
        if size == 0 {
            return;
        }
        let shift = count.rem_euclid(size as isize) as usize;
        if shift == 0 {
            return;
        }

        if size <= WORD_BITS {
            let mask = if size == WORD_BITS {
                u64::MAX
            } else {
                (1u64 << size) - 1
            };
            let word = self.words()[0];
            self.words_mut()[0] = ((word << shift) | (word >> (size - shift))) & mask;
            return;
        }

        let source = std::mem::replace(self, BitVector::new(size));
        for (i, &word) in source.words().iter().enumerate() {
            let mut rest = word;
            while rest != 0 {
                let bit = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                let target = (i * WORD_BITS + bit + shift) % size;
                self.put_bit(target, true);
            }
        }
    }

    /// 符号なしカウンタとして1を加える。
    ///
    /// 全ビットが1の場合は桁あふれとして何もせず `false` を返す。
    ///
    /// ```
    /// # use hilbert_query::BitVector;
    /// let mut v = BitVector::from_u64(3, 0b011).unwrap();
    /// assert!(v.increment());
    /// assert_eq!(v.to_u64().unwrap(), 0b100);
    /// v.set_all();
    /// assert!(!v.increment());
    /// assert_eq!(v.to_u64().unwrap(), 0b111);
    /// ```
    pub fn increment(&mut self) -> bool {
        let Some(position) = self.next_clear_bit(0) else {
            return false;
        };
        let word = position / WORD_BITS;
        let words = self.words_mut();
        for lower in &mut words[..word] {
            *lower = 0;
        }
        // position より下位のビットはすべて1なので、ワード内の加算で繰り上がりが閉じる
        words[word] = words[word].wrapping_add(1);
        true
    }

    /// `src` の全ビットを `offset` の位置から書き込む。
    pub fn copy_section_from(&mut self, offset: usize, src: &BitVector) -> Result<()> {
        self.check_section(offset, src.size())?;
        for i in 0..src.size() {
            self.put_bit(offset + i, src.bit(i));
        }
        Ok(())
    }

    /// `offset` の位置から `dst.size()` ビットを `dst` に読み出す。
    pub fn copy_section_to(&self, offset: usize, dst: &mut BitVector) -> Result<()> {
        self.check_section(offset, dst.size())?;
        for i in 0..dst.size() {
            dst.put_bit(i, self.bit(offset + i));
        }
        Ok(())
    }

    pub(crate) fn clear_section(&mut self, offset: usize, len: usize) -> Result<()> {
        self.check_section(offset, len)?;
        for i in offset..offset + len {
            self.put_bit(i, false);
        }
        Ok(())
    }

    fn check_section(&self, offset: usize, len: usize) -> Result<()> {
        let end = offset.saturating_add(len);
        if end > self.size() {
            return Err(Error::OutOfRange {
                index: end - 1,
                size: self.size(),
            });
        }
        Ok(())
    }
}
