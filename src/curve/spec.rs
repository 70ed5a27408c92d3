use serde::{Deserialize, Serialize};

#[cfg(any(test, feature = "random"))]
use rand::Rng;

use crate::bit_vector::BitVector;
use crate::error::{Error, Result};

/// 各次元のビット幅の組。曲線が扱う空間の形を表す。
///
/// 次元ごとに異なるビット幅を持てる。幅0の次元も許されるが、次元数は1以上でなければならない。
///
/// `serde` では幅のリストとしてそのまま表現される。
///
/// ```
/// # use hilbert_query::MultiDimensionalSpec;
/// let spec = MultiDimensionalSpec::new(vec![3, 5, 2]).unwrap();
/// assert_eq!(spec.dimensions(), 3);
/// assert_eq!(spec.max_bits_per_dimension(), 5);
/// assert_eq!(spec.sum_bits_per_dimension(), 10);
/// assert!(MultiDimensionalSpec::new(vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct MultiDimensionalSpec {
    bits_per_dimension: Vec<usize>,
    max: usize,
    sum: usize,
}

impl MultiDimensionalSpec {
    pub fn new(bits_per_dimension: Vec<usize>) -> Result<Self> {
        if bits_per_dimension.is_empty() {
            return Err(Error::invalid("at least one dimension is required"));
        }
        let max = bits_per_dimension.iter().copied().max().unwrap_or(0);
        let sum = bits_per_dimension.iter().sum();
        Ok(MultiDimensionalSpec {
            bits_per_dimension,
            max,
            sum,
        })
    }

    pub fn bits_per_dimension(&self) -> &[usize] {
        &self.bits_per_dimension
    }

    pub fn dimensions(&self) -> usize {
        self.bits_per_dimension.len()
    }

    pub fn max_bits_per_dimension(&self) -> usize {
        self.max
    }

    /// インデックスのビット幅
    pub fn sum_bits_per_dimension(&self) -> usize {
        self.sum
    }

    /// 各次元の幅を持つ、すべて0の点を返す。
    pub fn new_point(&self) -> Vec<BitVector> {
        self.bits_per_dimension
            .iter()
            .map(|&bits| BitVector::new(bits))
            .collect()
    }

    /// インデックス幅の0のベクトルを返す。
    pub fn new_index(&self) -> BitVector {
        BitVector::new(self.sum)
    }

    /// 外部の乱数生成器を使用して空間内のランダムな点を生成する。
    #[cfg(any(test, feature = "random"))]
    pub fn random_point_using<R: Rng>(&self, rng: &mut R) -> Vec<BitVector> {
        self.bits_per_dimension
            .iter()
            .map(|&bits| BitVector::random_using(rng, bits))
            .collect()
    }

    /// 次元数と各座標の幅が一致しているかを検査する
    pub(crate) fn check_point(&self, point: &[BitVector]) -> Result<()> {
        if point.len() != self.dimensions() {
            return Err(Error::SizeMismatch {
                expected: self.dimensions(),
                actual: point.len(),
            });
        }
        for (coordinate, &bits) in point.iter().zip(&self.bits_per_dimension) {
            if coordinate.size() != bits {
                return Err(Error::SizeMismatch {
                    expected: bits,
                    actual: coordinate.size(),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn check_index(&self, index: &BitVector) -> Result<()> {
        if index.size() != self.sum {
            return Err(Error::SizeMismatch {
                expected: self.sum,
                actual: index.size(),
            });
        }
        Ok(())
    }
}

impl TryFrom<Vec<usize>> for MultiDimensionalSpec {
    type Error = Error;

    fn try_from(bits_per_dimension: Vec<usize>) -> Result<Self> {
        MultiDimensionalSpec::new(bits_per_dimension)
    }
}

impl From<MultiDimensionalSpec> for Vec<usize> {
    fn from(spec: MultiDimensionalSpec) -> Self {
        spec.bits_per_dimension
    }
}
