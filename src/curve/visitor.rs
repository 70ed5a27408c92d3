use crate::bit_vector::BitVector;
use crate::curve::hilbert::CompactHilbertCurve;
use crate::error::Result;
use crate::range::Pow2Range;

/// [`CompactHilbertCurve::accept`] から呼ばれる低レベルのコールバック。
///
/// `level` は反復レベル（根が最大幅、葉が0）で、`index` と `point` はそのノードの始点を表す。
/// 戻り値が `true` のとき子ノードに降りる。
pub trait SpaceVisitor {
    fn visit(&mut self, level: usize, index: &BitVector, point: &[BitVector]) -> Result<bool>;
}

impl<F> SpaceVisitor for F
where
    F: FnMut(usize, &BitVector, &[BitVector]) -> Result<bool>,
{
    fn visit(&mut self, level: usize, index: &BitVector, point: &[BitVector]) -> Result<bool> {
        self(level, index, point)
    }
}

/// ノードをインデックス区間と直交体として受け取るコールバック。
///
/// ```
/// # use hilbert_query::{CompactHilbertCurve, MultiDimensionalSpec, Pow2Range, Result};
/// let curve = CompactHilbertCurve::new(MultiDimensionalSpec::new(vec![2, 1]).unwrap());
/// let mut levels = Vec::new();
/// let mut record = |index: &Pow2Range, orthotope: &[Pow2Range]| -> Result<bool> {
///     levels.push((index.level(), orthotope[0].level(), orthotope[1].level()));
///     Ok(index.level() == 3)
/// };
/// curve.navigate(&mut record).unwrap();
/// assert_eq!(levels, vec![(3, 2, 1), (2, 1, 1), (2, 1, 1)]);
/// ```
pub trait ZoomingNavigator {
    fn visit(&mut self, index_range: &Pow2Range, orthotope: &[Pow2Range]) -> Result<bool>;
}

impl<F> ZoomingNavigator for F
where
    F: FnMut(&Pow2Range, &[Pow2Range]) -> Result<bool>,
{
    fn visit(&mut self, index_range: &Pow2Range, orthotope: &[Pow2Range]) -> Result<bool> {
        self(index_range, orthotope)
    }
}

/// [`ZoomingNavigator`] を [`SpaceVisitor`] として使うための変換。
///
/// 反復レベル `i` のノードは、インデックス側がレベル `bits_below(i)`、
/// 次元 `j` 側がレベル `min(i, width_j)` の [`Pow2Range`] になる。
pub struct ZoomingSpaceVisitorAdapter<'a, N> {
    curve: &'a CompactHilbertCurve,
    navigator: &'a mut N,
}

impl<'a, N: ZoomingNavigator> ZoomingSpaceVisitorAdapter<'a, N> {
    pub fn new(curve: &'a CompactHilbertCurve, navigator: &'a mut N) -> Self {
        ZoomingSpaceVisitorAdapter { curve, navigator }
    }
}

impl<N: ZoomingNavigator> SpaceVisitor for ZoomingSpaceVisitorAdapter<'_, N> {
    fn visit(&mut self, level: usize, index: &BitVector, point: &[BitVector]) -> Result<bool> {
        let index_range = Pow2Range::new(index.clone(), self.curve.masks().bits_below(level));
        let orthotope: Vec<Pow2Range> = point
            .iter()
            .zip(self.curve.spec().bits_per_dimension())
            .map(|(coordinate, &bits)| Pow2Range::new(coordinate.clone(), level.min(bits)))
            .collect();
        self.navigator.visit(&index_range, &orthotope)
    }
}
