use tracing::trace;

use crate::bit_vector::BitVector;
use crate::curve::masks::HilbertIndexMasks;
use crate::curve::spec::MultiDimensionalSpec;
use crate::curve::visitor::{SpaceVisitor, ZoomingNavigator, ZoomingSpaceVisitorAdapter};
use crate::error::{Error, Result};

/// 次元ごとに幅の異なる空間のためのコンパクト・ヒルベルト曲線。
///
/// インデックスの幅は各次元の幅の総和になる。
/// [`CompactHilbertCurve::index`] と [`CompactHilbertCurve::index_inverse`] は内部の作業領域を使い回すため `&mut self` を取り、
/// [`CompactHilbertCurve::accept`] は呼び出しごとに作業領域を確保するため `&self` で呼べる。
///
/// ```
/// # use hilbert_query::{BitVector, CompactHilbertCurve, MultiDimensionalSpec};
/// let spec = MultiDimensionalSpec::new(vec![3, 3]).unwrap();
/// let mut curve = CompactHilbertCurve::new(spec);
///
/// let point = [BitVector::from_u64(3, 5).unwrap(), BitVector::from_u64(3, 3).unwrap()];
/// let index = curve.index_of(&point).unwrap();
/// assert_eq!(index.to_u64().unwrap(), 52);
/// assert_eq!(curve.point_of(&index).unwrap(), point);
/// ```
#[derive(Debug, Clone)]
pub struct CompactHilbertCurve {
    spec: MultiDimensionalSpec,
    masks: HilbertIndexMasks,
    scratch: Scratch,
}

/// 1回の計算で使う作業用のベクトル
#[derive(Debug, Clone)]
struct Scratch {
    mask: BitVector,
    known: BitVector,
    label: BitVector,
    transformed: BitVector,
    w: BitVector,
    entry: BitVector,
    entry_step: BitVector,
    ranks: Vec<BitVector>,
}

impl Scratch {
    fn new(spec: &MultiDimensionalSpec, masks: &HilbertIndexMasks) -> Self {
        let n = spec.dimensions();
        Scratch {
            mask: BitVector::new(n),
            known: BitVector::new(n),
            label: BitVector::new(n),
            transformed: BitVector::new(n),
            w: BitVector::new(n),
            entry: BitVector::new(n),
            entry_step: BitVector::new(n),
            ranks: (0..spec.max_bits_per_dimension())
                .map(|i| BitVector::new(masks.cardinality(i)))
                .collect(),
        }
    }
}

/// ズーミング走査の1段分の状態
struct ZoomFrame {
    entry: BitVector,
    direction: usize,
    mask: BitVector,
    known: BitVector,
    w: BitVector,
    label: BitVector,
    entry_step: BitVector,
    rank: BitVector,
}

impl ZoomFrame {
    fn new(n: usize, rank_size: usize) -> Self {
        ZoomFrame {
            entry: BitVector::new(n),
            direction: 0,
            mask: BitVector::new(n),
            known: BitVector::new(n),
            w: BitVector::new(n),
            label: BitVector::new(n),
            entry_step: BitVector::new(n),
            rank: BitVector::new(rank_size),
        }
    }
}

impl CompactHilbertCurve {
    pub fn new(spec: MultiDimensionalSpec) -> Self {
        let masks = HilbertIndexMasks::new(&spec);
        let scratch = Scratch::new(&spec, &masks);
        trace!(
            dimensions = spec.dimensions(),
            max_bits = spec.max_bits_per_dimension(),
            index_bits = spec.sum_bits_per_dimension(),
            "compact hilbert curve created"
        );
        CompactHilbertCurve {
            spec,
            masks,
            scratch,
        }
    }

    pub fn spec(&self) -> &MultiDimensionalSpec {
        &self.spec
    }

    pub fn masks(&self) -> &HilbertIndexMasks {
        &self.masks
    }

    /// `point` のインデックスを計算して `out` に書き込む。
    ///
    /// レベル `min_level` より下の反復は省略され、対応するインデックスの下位ビットは0になる。
    /// `min_level` が0なら完全なインデックスを得る。
    pub fn index(&mut self, point: &[BitVector], min_level: usize, out: &mut BitVector) -> Result<()> {
        self.spec.check_point(point)?;
        self.spec.check_index(out)?;
        let max = self.spec.max_bits_per_dimension();
        if min_level > max {
            return Err(Error::invalid(format!(
                "min level {min_level} exceeds the maximum width {max}"
            )));
        }

        let n = self.spec.dimensions();
        let scratch = &mut self.scratch;
        out.clear_all();
        scratch.entry.clear_all();
        let mut direction = 0;
        for i in (min_level..max).rev() {
            let rotation = direction as isize;
            self.masks.copy_mask_to(i, -rotation, &mut scratch.mask)?;

            scratch.label.clear_all();
            for (j, coordinate) in point.iter().enumerate() {
                if i < coordinate.size() && coordinate.bit(i) {
                    scratch.label.put_bit(n - 1 - j, true);
                }
            }

            scratch.transformed.copy_from(&scratch.label)?;
            scratch.transformed.xor(&scratch.entry)?;
            scratch.transformed.rotate(-rotation);
            scratch.w.copy_from(&scratch.transformed)?;
            scratch.w.gray_code_inverse();

            let rank = &mut scratch.ranks[i];
            rank.gray_code_rank(&scratch.mask, &scratch.w)?;
            out.copy_section_from(self.masks.bits_below(i), rank)?;

            step(
                &mut scratch.entry,
                &mut direction,
                &scratch.w,
                &mut scratch.entry_step,
            )?;
        }
        Ok(())
    }

    /// [`CompactHilbertCurve::index`] の逆変換。`index` の点を `point` に書き込む。
    pub fn index_inverse(&mut self, index: &BitVector, point: &mut [BitVector]) -> Result<()> {
        self.spec.check_index(index)?;
        self.spec.check_point(point)?;

        let n = self.spec.dimensions();
        let scratch = &mut self.scratch;
        for coordinate in point.iter_mut() {
            coordinate.clear_all();
        }
        scratch.entry.clear_all();
        let mut direction = 0;
        for i in (0..self.spec.max_bits_per_dimension()).rev() {
            let rotation = direction as isize;
            self.masks.copy_mask_to(i, -rotation, &mut scratch.mask)?;
            scratch.known.copy_from(&scratch.entry)?;
            scratch.known.rotate(-rotation);
            scratch.known.and_not(&scratch.mask)?;

            let rank = &mut scratch.ranks[i];
            index.copy_section_to(self.masks.bits_below(i), rank)?;
            scratch
                .w
                .gray_code_rank_inverse(&scratch.mask, &scratch.known, rank)?;

            scratch.label.copy_from(&scratch.w)?;
            scratch.label.gray_code();
            scratch.label.rotate(rotation);
            scratch.label.xor(&scratch.entry)?;
            for (j, coordinate) in point.iter_mut().enumerate() {
                if scratch.label.bit(n - 1 - j) {
                    coordinate.set(i)?;
                }
            }

            step(
                &mut scratch.entry,
                &mut direction,
                &scratch.w,
                &mut scratch.entry_step,
            )?;
        }
        Ok(())
    }

    /// `point` の完全なインデックスを新しく確保して返す。
    pub fn index_of(&mut self, point: &[BitVector]) -> Result<BitVector> {
        let mut index = self.spec.new_index();
        self.index(point, 0, &mut index)?;
        Ok(index)
    }

    /// `index` の点を新しく確保して返す。
    pub fn point_of(&mut self, index: &BitVector) -> Result<Vec<BitVector>> {
        let mut point = self.spec.new_point();
        self.index_inverse(index, &mut point)?;
        Ok(point)
    }

    /// 曲線の再帰分割を深さ優先の先行順で辿る。
    ///
    /// 根（レベルは最大幅）から始め、`visitor` が `true` を返したノードだけ子に降りる。
    /// 子はインデックスの昇順に訪問されるので、兄弟のインデックス区間は連続して並ぶ。
    /// `visitor` に渡されるインデックスと点は、そのレベルより下のビットが0になっている。
    pub fn accept<V: SpaceVisitor>(&self, visitor: &mut V) -> Result<()> {
        let n = self.spec.dimensions();
        let max = self.spec.max_bits_per_dimension();
        let mut frames: Vec<ZoomFrame> = (0..=max)
            .map(|level| ZoomFrame::new(n, level.checked_sub(1).map_or(0, |i| self.masks.cardinality(i))))
            .collect();
        let mut index = self.spec.new_index();
        let mut point = self.spec.new_point();
        self.descend(max, &mut frames, &mut index, &mut point, visitor)
    }

    /// [`ZoomingNavigator`] で再帰分割を辿る。
    pub fn navigate<N: ZoomingNavigator>(&self, navigator: &mut N) -> Result<()> {
        let mut adapter = ZoomingSpaceVisitorAdapter::new(self, navigator);
        self.accept(&mut adapter)
    }

    /// `frames` の末尾がレベル `level` の状態
    fn descend<V: SpaceVisitor>(
        &self,
        level: usize,
        frames: &mut [ZoomFrame],
        index: &mut BitVector,
        point: &mut [BitVector],
        visitor: &mut V,
    ) -> Result<()> {
        if !visitor.visit(level, index, point)? || level == 0 {
            return Ok(());
        }
        let Some((current, lower)) = frames.split_last_mut() else {
            return Ok(());
        };

        let n = point.len();
        let i = level - 1;
        let rotation = current.direction as isize;
        self.masks.copy_mask_to(i, -rotation, &mut current.mask)?;
        current.known.copy_from(&current.entry)?;
        current.known.rotate(-rotation);
        current.known.and_not(&current.mask)?;

        let offset = self.masks.bits_below(i);
        current.rank.clear_all();
        loop {
            current
                .w
                .gray_code_rank_inverse(&current.mask, &current.known, &current.rank)?;
            current.label.copy_from(&current.w)?;
            current.label.gray_code();
            current.label.rotate(rotation);
            current.label.xor(&current.entry)?;
            for (j, coordinate) in point.iter_mut().enumerate() {
                if i < coordinate.size() {
                    coordinate.put_bit(i, current.label.bit(n - 1 - j));
                }
            }
            index.copy_section_from(offset, &current.rank)?;

            if let Some(child) = lower.last_mut() {
                child.entry.copy_from(&current.entry)?;
                child.direction = current.direction;
                step(
                    &mut child.entry,
                    &mut child.direction,
                    &current.w,
                    &mut current.entry_step,
                )?;
            }
            self.descend(i, lower, index, point, visitor)?;

            if !current.rank.increment() {
                break;
            }
        }

        index.clear_section(offset, current.rank.size())?;
        for coordinate in point.iter_mut() {
            if i < coordinate.size() {
                coordinate.put_bit(i, false);
            }
        }
        Ok(())
    }
}

/// 部分超立方体 `w` に入ったあとの入口 `entry` と方向 `direction` を更新する
fn step(
    entry: &mut BitVector,
    direction: &mut usize,
    w: &BitVector,
    entry_step: &mut BitVector,
) -> Result<()> {
    entry_step.copy_from(w)?;
    entry_step.smaller_even_and_gray_code();
    entry_step.rotate(*direction as isize);
    entry.xor(entry_step)?;
    *direction = (*direction + w.lowest_different_bit() + 1) % w.size();
    Ok(())
}
