use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// [`BacktrackingQueryBuilder`](crate::BacktrackingQueryBuilder) の設定。
///
/// 省略された項目は [`Default`] の値で補われる。
///
/// ```
/// # use hilbert_query::QueryOptions;
/// let options = QueryOptions::default();
/// assert_eq!(options.max_ranges, 16);
/// assert!(!options.over_selectivity_is_tolerable);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    /// 出力する区間の最大数。1以上。
    pub max_ranges: usize,
    /// 余分な点を含みうる区間を、分割せずにそのまま受け入れるかどうか。
    pub over_selectivity_is_tolerable: bool,
}

impl QueryOptions {
    pub fn new(max_ranges: usize) -> Self {
        QueryOptions {
            max_ranges,
            ..Default::default()
        }
    }

    pub fn with_over_selectivity_tolerable(mut self, tolerable: bool) -> Self {
        self.over_selectivity_is_tolerable = tolerable;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.max_ranges < 1 {
            return Err(Error::invalid("max_ranges must be at least 1"));
        }
        Ok(())
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        QueryOptions {
            max_ranges: 16,
            over_selectivity_is_tolerable: false,
        }
    }
}
