use super::storage::FrequentLevel;
use super::store::{Item, ItemId, TransactionStore};

/// One reported itemset: its items in ascending order and the number of transactions holding all of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrequentItemset<I> {
    pub items: Vec<I>,
    pub frequency: usize,
}

impl<I> FrequentItemset<I> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Accumulates every finished level of at least `min_set_size` items.
#[derive(Debug, Clone)]
pub struct ResultCollector {
    min_set_size: usize,
    records: Vec<(Vec<ItemId>, usize)>,
}

impl ResultCollector {
    pub fn new(min_set_size: usize) -> Self {
        Self {
            min_set_size,
            records: Vec::new(),
        }
    }

    /// Record `level` if its itemsets are large enough. Returns how many records were added.
    pub fn collect(&mut self, level: &FrequentLevel) -> usize {
        if level.itemset_size < self.min_set_size {
            return 0;
        }
        self.records.extend(
            level
                .iter()
                .map(|(itemset, tids)| (itemset.to_vec(), tids.len())),
        );
        level.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Final ordering: smaller itemsets first, then by the sorted item sequence.
    pub fn finish<I: Item>(mut self, store: &TransactionStore<I>) -> Vec<FrequentItemset<I>> {
        self.records
            .sort_unstable_by(|(a, _), (b, _)| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        self.records
            .into_iter()
            .map(|(ids, frequency)| FrequentItemset {
                items: store.resolve(&ids),
                frequency,
            })
            .collect()
    }
}
