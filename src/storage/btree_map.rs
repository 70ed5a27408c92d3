use std::collections::BTreeMap;
use std::ops::RangeBounds;

use crate::storage::{Batch, KeyValueStore, OrderedKeyValueStore};

/// メモリ上の順序付きストア。インデックスのキーはバイト列の順でそのまま曲線の順に並ぶ。
impl<K: Ord, V> KeyValueStore<K, V> for BTreeMap<K, V> {
    type Accessor<'a>
        = &'a V
    where
        Self: 'a;

    fn get<'a>(&'a self, key: &K) -> Option<&'a V> {
        BTreeMap::get(self, key)
    }

    fn apply_batch(&mut self, Batch { puts, deletes }: Batch<K, V>) {
        deletes.iter().for_each(|key| {
            self.remove(key);
        });
        self.extend(puts);
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

impl<K: Ord, V> OrderedKeyValueStore<K, V> for BTreeMap<K, V> {
    fn scan<'a, R>(&'a self, range: R) -> Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a>
    where
        R: RangeBounds<K>,
    {
        Box::new(BTreeMap::range(self, range))
    }
}
