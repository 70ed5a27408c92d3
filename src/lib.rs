/// 発生し得るすべてのエラーを`enum` 型として定義・集約。
mod error;

/// 固定長のビット列と、グレイコードなどのビット演算。
mod bit_vector;

/// インデックス空間と座標空間の区間、およびその大きさの計算。
mod range;

/// 次元ごとに幅の異なるコンパクト・ヒルベルト曲線と、その再帰分割の走査。
mod curve;

/// 問い合わせ領域を曲線上の区間に分解する。
mod query;

/// 分解した区間で走査するための順序付きストレージのTrait定義と実装
mod storage;

pub use roaring::RoaringTreemap;

pub use error::{Error, Result};

pub use bit_vector::BitVector;

pub use range::{
    BigUintRange, BigUintRangeHome, Content, IndexRange, LongRange, LongRangeHome, Pow2Range,
    RangeHome, orthotope_overlap, orthotope_volume,
};

pub use curve::{
    CompactHilbertCurve, HilbertIndexMasks, MultiDimensionalSpec, SpaceVisitor, ZoomingNavigator,
    ZoomingSpaceVisitorAdapter,
};

pub use query::{
    Assessment, BacktrackingQueryBuilder, FilterCombiner, FilteredIndexRange, ListConcatCombiner,
    MergeContext, PlainFilterCombiner, Query, QueryOptions, RegionInspector, SimpleRegionInspector,
};

pub use storage::{Batch, KeyValueStore, OrderedKeyValueStore, index_key, scan_query};
