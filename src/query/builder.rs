use std::mem;

use tracing::{debug, trace};

use crate::curve::{CompactHilbertCurve, ZoomingNavigator};
use crate::error::Result;
use crate::query::{
    Assessment, FilterCombiner, FilteredIndexRange, MergeContext, Query, QueryOptions,
    RegionInspector,
};
use crate::range::{Content, IndexRange, Pow2Range, RangeHome};

/// 受け入れ済みで、まだ確定していない区間
struct PendingRange<F, T, V> {
    range: IndexRange<T>,
    filter: F,
    potential_over_selectivity: bool,
    /// 直前の区間との間にある領域外の量
    gap_before: V,
}

/// 曲線の再帰分割を辿り、問い合わせ領域を上限個数以下の区間に分解する。
///
/// 領域と交わらない部分木は刈り込み、領域に含まれるノードは区間として受け入れる。
/// 区間は [`FilterCombiner::combine`] で直前の区間と統合でき、
/// 個数が [`QueryOptions::max_ranges`] を超えたときは最も古い2つが [`FilterCombiner::collapse`] でまとめられる。
///
/// ```
/// # use hilbert_query::{
/// #     BacktrackingQueryBuilder, CompactHilbertCurve, LongRange, LongRangeHome,
/// #     MultiDimensionalSpec, PlainFilterCombiner, QueryOptions, SimpleRegionInspector,
/// # };
/// let curve = CompactHilbertCurve::new(MultiDimensionalSpec::new(vec![3, 3]).unwrap());
/// let region = vec![vec![LongRange::new(2, 6).unwrap(), LongRange::new(2, 4).unwrap()]];
/// let inspector = SimpleRegionInspector::new(region, (), LongRangeHome).unwrap();
/// let combiner = PlainFilterCombiner::new((), 0u64);
///
/// let mut builder =
///     BacktrackingQueryBuilder::new(inspector, combiner, LongRangeHome, QueryOptions::new(2))
///         .unwrap();
/// let query = builder.decompose(&curve).unwrap();
/// let ranges: Vec<String> = query.ranges().iter().map(|r| r.index_range().to_string()).collect();
/// assert_eq!(ranges, vec!["[8, 12)", "[52, 56)"]);
/// assert!(!query.potential_over_selectivity());
/// ```
pub struct BacktrackingQueryBuilder<F, V, H: RangeHome, I, C> {
    inspector: I,
    combiner: C,
    home: H,
    options: QueryOptions,
    ranges: Vec<PendingRange<F, H::Point, V>>,
    pending_gap: V,
    total_excess: V,
    absorbed_excess: V,
}

impl<F, V, H, I, C> BacktrackingQueryBuilder<F, V, H, I, C>
where
    V: Content,
    H: RangeHome,
    I: RegionInspector<F, V>,
    C: FilterCombiner<F, V>,
{
    /// `options` が不正な場合は [`Error::InvalidArgument`](crate::Error::InvalidArgument) を返す。
    pub fn new(inspector: I, combiner: C, home: H, options: QueryOptions) -> Result<Self> {
        options.validate()?;
        Ok(BacktrackingQueryBuilder {
            inspector,
            combiner,
            home,
            options,
            ranges: Vec::new(),
            pending_gap: V::zero(),
            total_excess: V::zero(),
            absorbed_excess: V::zero(),
        })
    }

    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// `curve` の分割を辿って問い合わせ領域を分解する。
    ///
    /// 呼び出すたびに内部の状態は初期化される。
    pub fn decompose(&mut self, curve: &CompactHilbertCurve) -> Result<Query<F, H::Point>> {
        self.ranges.clear();
        self.pending_gap = V::zero();
        self.total_excess = V::zero();
        self.absorbed_excess = V::zero();

        curve.navigate(self)?;

        let ranges: Vec<_> = mem::take(&mut self.ranges)
            .into_iter()
            .map(|pending| {
                FilteredIndexRange::new(
                    pending.range,
                    pending.filter,
                    pending.potential_over_selectivity,
                )
            })
            .collect();
        let query = Query::new(ranges);
        debug!(
            ranges = query.len(),
            max_ranges = self.options.max_ranges,
            potential_over_selectivity = query.potential_over_selectivity(),
            "query decomposed"
        );
        Ok(query)
    }

    /// 統合や強制的なまとめによって区間に取り込まれた領域外の量
    pub fn absorbed_excess(&self) -> &V {
        &self.absorbed_excess
    }

    /// 刈り込んだノードの領域外の量の合計
    pub fn total_excess(&self) -> &V {
        &self.total_excess
    }

    fn accept(&mut self, index_range: &Pow2Range, filter: F, over: bool) -> Result<()> {
        let range = self.home.to_range(index_range)?;
        let gap = mem::replace(&mut self.pending_gap, V::zero());
        let range_count = self.ranges.len();

        if let Some(last) = self.ranges.last_mut() {
            let context = MergeContext {
                max_ranges: self.options.max_ranges,
                range_count,
                gap: &gap,
                total_excess: &self.total_excess,
            };
            if let Some(merged) = self.combiner.combine(&last.filter, &filter, &context)? {
                trace!(?range, ?gap, "merged into the previous range");
                // 間に刈り込んだノードがあれば、見積もった余剰量が0でも領域外を含む
                let detached = last.range.end() != range.start();
                last.range = last.range.span(&range);
                last.filter = merged;
                last.potential_over_selectivity |= over || detached || !gap.is_zero();
                self.absorbed_excess.increase_by(&gap);
                return Ok(());
            }
        }

        self.ranges.push(PendingRange {
            range,
            filter,
            potential_over_selectivity: over,
            gap_before: gap,
        });
        if self.ranges.len() > self.options.max_ranges {
            self.collapse_oldest()?;
        }
        Ok(())
    }

    fn collapse_oldest(&mut self) -> Result<()> {
        let second = self.ranges.remove(1);
        let first = &mut self.ranges[0];
        trace!(
            left = ?first.range,
            right = ?second.range,
            gap = ?second.gap_before,
            "collapsed the two oldest ranges"
        );
        first.filter = self
            .combiner
            .collapse(&first.filter, &second.filter, &second.gap_before)?;
        let detached = first.range.end() != second.range.start();
        first.range = first.range.span(&second.range);
        first.potential_over_selectivity |=
            second.potential_over_selectivity || detached || !second.gap_before.is_zero();
        self.absorbed_excess.increase_by(&second.gap_before);
        Ok(())
    }
}

impl<F, V, H, I, C> ZoomingNavigator for BacktrackingQueryBuilder<F, V, H, I, C>
where
    V: Content,
    H: RangeHome,
    I: RegionInspector<F, V>,
    C: FilterCombiner<F, V>,
{
    fn visit(&mut self, index_range: &Pow2Range, orthotope: &[Pow2Range]) -> Result<bool> {
        match self.inspector.assess(index_range, orthotope)? {
            Assessment::Disjoint { excess } => {
                if !self.ranges.is_empty() {
                    self.pending_gap.increase_by(&excess);
                }
                self.total_excess.increase_by(&excess);
                Ok(false)
            }
            Assessment::Covered {
                filter,
                potential_over_selectivity,
                ..
            } => {
                if potential_over_selectivity
                    && !self.options.over_selectivity_is_tolerable
                    && index_range.level() > 0
                {
                    return Ok(true);
                }
                self.accept(index_range, filter, potential_over_selectivity)?;
                Ok(false)
            }
            Assessment::Overlaps { .. } => {
                if index_range.level() > 0 {
                    return Ok(true);
                }
                let filter = self.inspector.best_effort_filter(index_range, orthotope)?;
                self.accept(index_range, filter, true)?;
                Ok(false)
            }
        }
    }
}
