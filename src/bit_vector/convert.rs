use num_bigint::BigUint;

use crate::bit_vector::{BitVector, WORD_BITS};
use crate::error::{Error, Result};

impl BitVector {
    /// `u64` の値から [`BitVector`] を生成する。
    ///
    /// 値が `size` ビットに収まらない場合は [`Error::Overflow`] を返す。
    ///
    /// ```
    /// # use hilbert_query::{BitVector, Error};
    /// let v = BitVector::from_u64(3, 5).unwrap();
    /// assert_eq!(v.to_string(), "101");
    /// assert_eq!(BitVector::from_u64(3, 8), Err(Error::Overflow { bits: 4, capacity: 3 }));
    /// ```
    pub fn from_u64(size: usize, value: u64) -> Result<Self> {
        let mut vector = BitVector::new(size);
        vector.copy_from_u64(value)?;
        Ok(vector)
    }

    /// 内容を `u64` の値で置き換える。
    pub fn copy_from_u64(&mut self, value: u64) -> Result<()> {
        let bits = (u64::BITS - value.leading_zeros()) as usize;
        if bits > self.size() {
            return Err(Error::Overflow {
                bits,
                capacity: self.size(),
            });
        }
        self.clear_all();
        if let Some(first) = self.words_mut().first_mut() {
            *first = value;
        }
        Ok(())
    }

    /// 値を `u64` として返す。64ビットに収まらない場合は [`Error::Overflow`] を返す。
    pub fn to_u64(&self) -> Result<u64> {
        let bits = self.length();
        if bits > WORD_BITS {
            return Err(Error::Overflow {
                bits,
                capacity: WORD_BITS,
            });
        }
        Ok(self.words().first().copied().unwrap_or(0))
    }

    /// 任意精度整数から [`BitVector`] を生成する。
    pub fn from_biguint(size: usize, value: &BigUint) -> Result<Self> {
        let mut vector = BitVector::new(size);
        vector.copy_from_big_endian_bytes(&value.to_bytes_be())?;
        Ok(vector)
    }

    /// 値を任意精度整数として返す。
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.to_big_endian_bytes())
    }

    /// `ceil(size / 8)` バイトのビッグエンディアン表現を返す。
    ///
    /// 同じサイズのベクトル同士では、バイト列の辞書順と数値の大小が一致する。
    ///
    /// ```
    /// # use hilbert_query::BitVector;
    /// let v = BitVector::from_u64(12, 0xabc).unwrap();
    /// assert_eq!(v.to_big_endian_bytes(), vec![0x0a, 0xbc]);
    /// ```
    pub fn to_big_endian_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; self.size().div_ceil(8)];
        let words = self.words();
        for (i, byte) in bytes.iter_mut().rev().enumerate() {
            *byte = (words[i / 8] >> ((i % 8) * 8)) as u8;
        }
        bytes
    }

    /// ビッグエンディアンのバイト列で内容を置き換える。
    ///
    /// 先頭の0バイトは許容するが、値そのものが `size` ビットに収まらない場合は
    /// [`Error::Overflow`] を返す。
    pub fn copy_from_big_endian_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let bits = bytes
            .iter()
            .position(|&byte| byte != 0)
            .map_or(0, |p| (bytes.len() - p) * 8 - bytes[p].leading_zeros() as usize);
        if bits > self.size() {
            return Err(Error::Overflow {
                bits,
                capacity: self.size(),
            });
        }
        self.clear_all();
        let words = self.words_mut();
        for (i, &byte) in bytes.iter().rev().enumerate() {
            if byte != 0 {
                words[i / 8] |= (byte as u64) << ((i % 8) * 8);
            }
        }
        Ok(())
    }

    /// 呼び出し側の `bool` 配列（インデックス0が最下位）で内容を置き換える。
    pub fn copy_from_bits(&mut self, bits: &[bool]) -> Result<()> {
        if bits.len() != self.size() {
            return Err(Error::SizeMismatch {
                expected: self.size(),
                actual: bits.len(),
            });
        }
        for (index, &bit) in bits.iter().enumerate() {
            self.put_bit(index, bit);
        }
        Ok(())
    }

    /// 内容を呼び出し側の `bool` 配列に書き出す。
    pub fn copy_to_bits(&self, out: &mut [bool]) -> Result<()> {
        if out.len() != self.size() {
            return Err(Error::SizeMismatch {
                expected: self.size(),
                actual: out.len(),
            });
        }
        for (index, bit) in out.iter_mut().enumerate() {
            *bit = self.bit(index);
        }
        Ok(())
    }
}

impl From<&BitVector> for BigUint {
    fn from(vector: &BitVector) -> Self {
        vector.to_biguint()
    }
}
