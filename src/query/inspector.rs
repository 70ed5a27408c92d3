use crate::error::{Error, Result};
use crate::query::Assessment;
use crate::range::{Content, IndexRange, Pow2Range, RangeHome, orthotope_overlap, orthotope_volume};

/// 再帰分割のノードが問い合わせ領域とどう関係するかを判定する。
///
/// `V` は余剰量（問い合わせ領域外の点の量）の型。
pub trait RegionInspector<F, V> {
    fn assess(&self, index_range: &Pow2Range, orthotope: &[Pow2Range]) -> Result<Assessment<F, V>>;

    /// これ以上分割できないノードが [`Assessment::Overlaps`] だったときに使うフィルタ
    fn best_effort_filter(&self, index_range: &Pow2Range, orthotope: &[Pow2Range]) -> Result<F>;
}

/// 直交体の和集合を問い合わせ領域とする [`RegionInspector`]。
///
/// 領域に完全に含まれるノードには、呼び出し側が与えた一定のフィルタを付ける。
///
/// ```
/// # use hilbert_query::{
/// #     Assessment, BitVector, LongRange, LongRangeHome, Pow2Range, RegionInspector,
/// #     SimpleRegionInspector,
/// # };
/// let region = vec![vec![LongRange::new(2, 6).unwrap(), LongRange::new(2, 4).unwrap()]];
/// let inspector = SimpleRegionInspector::new(region, "in", LongRangeHome).unwrap();
///
/// let node = Pow2Range::new(BitVector::from_u64(6, 8).unwrap(), 2);
/// let orthotope = [
///     Pow2Range::new(BitVector::from_u64(3, 2).unwrap(), 1),
///     Pow2Range::new(BitVector::from_u64(3, 2).unwrap(), 1),
/// ];
/// assert!(matches!(
///     inspector.assess(&node, &orthotope).unwrap(),
///     Assessment::Covered { filter: "in", .. }
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct SimpleRegionInspector<F, H: RangeHome> {
    region: Vec<Vec<IndexRange<H::Point>>>,
    filter: F,
    home: H,
}

impl<F, H: RangeHome> SimpleRegionInspector<F, H> {
    /// 領域が空の場合や、直交体の次元数が揃っていない場合は [`Error::InvalidArgument`] を返す。
    pub fn new(region: Vec<Vec<IndexRange<H::Point>>>, filter: F, home: H) -> Result<Self> {
        let Some(first) = region.first() else {
            return Err(Error::invalid("query region needs at least one orthotope"));
        };
        let dimensions = first.len();
        if region.iter().any(|orthotope| orthotope.len() != dimensions) {
            return Err(Error::invalid(
                "all orthotopes of a query region must have the same dimensions",
            ));
        }
        Ok(SimpleRegionInspector {
            region,
            filter,
            home,
        })
    }

    pub fn region(&self) -> &[Vec<IndexRange<H::Point>>] {
        &self.region
    }

    fn to_ranges(&self, orthotope: &[Pow2Range]) -> Result<Vec<IndexRange<H::Point>>> {
        orthotope
            .iter()
            .map(|range| self.home.to_range(range))
            .collect()
    }
}

impl<F: Clone, H: RangeHome> RegionInspector<F, H::Content> for SimpleRegionInspector<F, H> {
    fn assess(
        &self,
        _index_range: &Pow2Range,
        orthotope: &[Pow2Range],
    ) -> Result<Assessment<F, H::Content>> {
        let node = self.to_ranges(orthotope)?;
        let volume = orthotope_volume(&self.home, &node);
        let mut covered = H::Content::zero();
        for query in &self.region {
            let overlap = orthotope_overlap(&self.home, query, &node)?;
            if overlap.is_zero() {
                continue;
            }
            if query.iter().zip(&node).all(|(outer, inner)| outer.encloses(inner)) {
                return Ok(Assessment::Covered {
                    filter: self.filter.clone(),
                    potential_over_selectivity: false,
                    excess: H::Content::zero(),
                });
            }
            covered.increase_by(&overlap);
        }

        let mut excess = volume;
        if covered.is_zero() {
            return Ok(Assessment::Disjoint { excess });
        }
        excess.decrease_by(&covered);
        Ok(Assessment::Overlaps { excess })
    }

    fn best_effort_filter(&self, _index_range: &Pow2Range, _orthotope: &[Pow2Range]) -> Result<F> {
        Ok(self.filter.clone())
    }
}
