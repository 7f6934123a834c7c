use super::storage::FrequentLevel;
use super::store::{Item, ItemId, TransactionId, TransactionStore};

/// Occurrence set of every item in the vocabulary, indexed by [`ItemId`].
///
/// One pass over the log. Transactions are visited in id order, so every
/// list comes out sorted.
pub fn index_items<I: Item>(store: &TransactionStore<I>) -> Vec<Vec<TransactionId>> {
    let mut index: Vec<Vec<TransactionId>> = vec![Vec::new(); store.num_items()];
    for (tid, items) in store.iter_transactions() {
        for &item in items {
            index[item.index()].push(tid);
        }
    }
    index
}

/// Level 1: every single item whose occurrence set reaches `sigma`.
pub fn build_first_level<I: Item>(store: &TransactionStore<I>, sigma: usize) -> FrequentLevel {
    let index = index_items(store);
    let survivors = index.iter().filter(|tids| tids.len() >= sigma).count();

    let mut level = FrequentLevel::with_capacity(1, survivors);
    for (idx, tids) in index.into_iter().enumerate() {
        if tids.len() >= sigma {
            // the store caps its vocabulary at u32::MAX items
            level.push(&[ItemId(idx as u32)], tids);
        }
    }
    level
}
