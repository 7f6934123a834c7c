use super::store::{ItemId, TransactionId};

/// Flat storage for the itemsets of one size and their occurrence sets.
///
/// Items live in a single buffer with a fixed stride of `itemset_size`, so
/// itemset `idx` is `items[idx * size..(idx + 1) * size]`.
#[derive(Debug, Clone)]
pub struct FrequentLevel {
    items: Vec<ItemId>,
    occurrences: Vec<Vec<TransactionId>>,
    pub itemset_size: usize,
}

impl FrequentLevel {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            items: Vec::new(),
            occurrences: Vec::new(),
            itemset_size,
        }
    }

    pub fn with_capacity(itemset_size: usize, estimated_itemsets: usize) -> Self {
        Self {
            items: Vec::with_capacity(estimated_itemsets * itemset_size),
            occurrences: Vec::with_capacity(estimated_itemsets),
            itemset_size,
        }
    }

    /// Append a canonical (sorted, duplicate-free) itemset with its occurrence set.
    pub fn push(&mut self, itemset: &[ItemId], occurrences: Vec<TransactionId>) -> usize {
        debug_assert_eq!(itemset.len(), self.itemset_size);
        debug_assert!(itemset.windows(2).all(|w| w[0] < w[1]));
        self.items.extend_from_slice(itemset);
        self.occurrences.push(occurrences);
        self.occurrences.len() - 1
    }

    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    pub fn get_itemset(&self, idx: usize) -> &[ItemId] {
        let start = idx * self.itemset_size;
        &self.items[start..start + self.itemset_size]
    }

    pub fn occurrences(&self, idx: usize) -> &[TransactionId] {
        &self.occurrences[idx]
    }

    pub fn frequency(&self, idx: usize) -> usize {
        self.occurrences[idx].len()
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[ItemId]> {
        (0..self.len()).map(move |idx| self.get_itemset(idx))
    }

    /// Itemsets paired with their occurrence sets, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&[ItemId], &[TransactionId])> {
        (0..self.len()).map(move |idx| (self.get_itemset(idx), self.occurrences(idx)))
    }

    /// Total number of transaction ids held by this level.
    pub fn total_occurrences(&self) -> usize {
        self.occurrences.iter().map(Vec::len).sum()
    }

    /// Rough heap footprint, used for progress logging.
    pub fn estimated_bytes(&self) -> usize {
        let item_size = std::mem::size_of::<ItemId>();
        let tid_size = std::mem::size_of::<TransactionId>();
        let list_overhead = std::mem::size_of::<Vec<TransactionId>>();
        self.items.len() * item_size
            + self.total_occurrences() * tid_size
            + self.occurrences.len() * list_overhead
    }
}
