use crate::bit_vector::BitVector;
use crate::curve::spec::MultiDimensionalSpec;
use crate::error::{Error, Result};

/// 各反復レベルで有効な次元を表すマスクの事前計算。
///
/// レベル `i` のマスクはビット `j` が立っているとき、次元 `n-1-j` の幅が `i` より大きいことを表す。
/// 併せて、そのレベルのインデックス片がインデックス全体のどこに置かれるか（`bits_below`）も保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HilbertIndexMasks {
    dimensions: usize,
    masks: Vec<BitVector>,
    bits_below: Vec<usize>,
}

impl HilbertIndexMasks {
    /// ```
    /// # use hilbert_query::{HilbertIndexMasks, MultiDimensionalSpec};
    /// let spec = MultiDimensionalSpec::new(vec![1, 3, 2]).unwrap();
    /// let masks = HilbertIndexMasks::new(&spec);
    /// assert_eq!(masks.mask(0, 0).unwrap().to_string(), "111");
    /// assert_eq!(masks.mask(1, 0).unwrap().to_string(), "011");
    /// assert_eq!(masks.mask(2, 0).unwrap().to_string(), "010");
    /// assert_eq!(masks.bits_below(2), 5);
    /// assert_eq!(masks.bits_below(3), 6);
    /// ```
    pub fn new(spec: &MultiDimensionalSpec) -> Self {
        let n = spec.dimensions();
        let max = spec.max_bits_per_dimension();
        let mut masks = Vec::with_capacity(max);
        let mut bits_below = Vec::with_capacity(max + 1);
        let mut offset = 0;
        for i in 0..max {
            let mut mask = BitVector::new(n);
            for (j, &bits) in spec.bits_per_dimension().iter().enumerate() {
                if bits > i {
                    mask.put_bit(n - 1 - j, true);
                }
            }
            bits_below.push(offset);
            offset += mask.cardinality();
            masks.push(mask);
        }
        bits_below.push(offset);
        HilbertIndexMasks {
            dimensions: n,
            masks,
            bits_below,
        }
    }

    /// レベル `i` で幅が `i` より大きい次元の数
    pub fn cardinality(&self, i: usize) -> usize {
        self.masks.get(i).map_or(0, BitVector::cardinality)
    }

    /// レベル `i` のマスクを `rotation` だけ回転したものを返す。
    pub fn mask(&self, i: usize, rotation: isize) -> Result<BitVector> {
        let mut out = BitVector::new(self.dimensions);
        self.copy_mask_to(i, rotation, &mut out)?;
        Ok(out)
    }

    /// [`HilbertIndexMasks::mask`] の結果を `out` に書き込む。
    pub fn copy_mask_to(&self, i: usize, rotation: isize, out: &mut BitVector) -> Result<()> {
        let mask = self.masks.get(i).ok_or(Error::OutOfRange {
            index: i,
            size: self.masks.len(),
        })?;
        out.copy_from(mask)?;
        out.rotate(rotation);
        Ok(())
    }

    /// レベル `i` より下のレベルが占めるインデックスのビット数。
    ///
    /// レベル `i` のインデックス片はこの位置から始まる。
    /// 最大幅以上のレベルではインデックス全体の幅を返す。
    pub fn bits_below(&self, i: usize) -> usize {
        self.bits_below[i.min(self.masks.len())]
    }
}
