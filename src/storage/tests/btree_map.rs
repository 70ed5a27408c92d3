#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::{Batch, BitVector, KeyValueStore, OrderedKeyValueStore};

    #[test]
    fn batch_applies_deletes_before_puts() {
        let mut store: BTreeMap<Vec<u8>, &str> = BTreeMap::new();
        let mut batch = Batch::new();
        batch.put(vec![1], "one");
        batch.put(vec![2], "two");
        KeyValueStore::apply_batch(&mut store, batch);
        assert_eq!(KeyValueStore::len(&store), 2);

        let mut batch = Batch::new();
        batch.delete(vec![1]);
        batch.put(vec![1], "uno");
        batch.delete(vec![2]);
        store.apply_batch(batch);
        assert_eq!(KeyValueStore::get(&store, &vec![1]).copied(), Some("uno"));
        assert_eq!(KeyValueStore::get(&store, &vec![2]), None);
        assert!(!KeyValueStore::is_empty(&store));
    }

    #[test]
    fn scan_follows_numeric_order_of_indices() {
        let mut store: BTreeMap<Vec<u8>, u64> = BTreeMap::new();
        let mut batch = Batch::new();
        for value in [300u64, 2, 17, 256] {
            batch.put_index(&BitVector::from_u64(12, value).unwrap(), value);
        }
        store.apply_batch(batch);

        let values: Vec<u64> = store.scan(..).map(|(_, value)| *value).collect();
        assert_eq!(values, vec![2, 17, 256, 300]);

        let from = crate::index_key(&BitVector::from_u64(12, 17).unwrap());
        let to = crate::index_key(&BitVector::from_u64(12, 300).unwrap());
        let values: Vec<u64> = store.scan(from..to).map(|(_, value)| *value).collect();
        assert_eq!(values, vec![17, 256]);
    }
}
