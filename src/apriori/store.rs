use crate::error::{CooccurError, Result};
use ndarray::ArrayView2;
use std::hash::Hash;

/// Anything that can be bought: comparable for canonical ordering, hashable for lookups.
pub trait Item: Ord + Hash + Clone {}

impl<T: Ord + Hash + Clone> Item for T {}

/// Dense index of an item in the store's vocabulary.
///
/// Ids are handed out in ascending item order, so a sorted run of ids is
/// also the sorted run of the items they stand for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u32);

impl ItemId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Position of a transaction in the input log.
pub type TransactionId = u32;

/// Most transactions or distinct items a store can hold; both id spaces are 32-bit.
pub const MAX_STORE_ENTRIES: usize = u32::MAX as usize;

/// Fails when `count` entries would not all get a distinct 32-bit id.
pub(crate) fn check_capacity(what: &'static str, count: usize) -> Result<()> {
    if count > MAX_STORE_ENTRIES {
        return Err(CooccurError::TooLarge {
            what,
            count,
            limit: MAX_STORE_ENTRIES,
        });
    }
    Ok(())
}

/// Parsed transactions with their items interned to [`ItemId`]s.
///
/// Holds at most [`MAX_STORE_ENTRIES`] transactions and as many distinct
/// items; construction rejects anything larger, so every id cast below is lossless.
#[derive(Debug, Clone)]
pub struct TransactionStore<I> {
    vocabulary: Vec<I>,
    transactions: Vec<Vec<ItemId>>,
}

impl<I: Item> TransactionStore<I> {
    /// Build a store from records in log order. Repeated items within a record are collapsed.
    pub fn from_transactions<T, R>(records: T) -> Result<Self>
    where
        T: IntoIterator<Item = R>,
        R: IntoIterator<Item = I>,
    {
        let raw: Vec<Vec<I>> = records
            .into_iter()
            .map(|record| record.into_iter().collect())
            .collect();
        check_capacity("transactions", raw.len())?;

        let mut vocabulary: Vec<I> = raw.iter().flatten().cloned().collect();
        vocabulary.sort_unstable();
        vocabulary.dedup();
        check_capacity("distinct items", vocabulary.len())?;

        let transactions = raw
            .into_iter()
            .map(|record| {
                let mut ids: Vec<ItemId> = record
                    .iter()
                    .filter_map(|item| vocabulary.binary_search(item).ok())
                    .map(|idx| ItemId(idx as u32))
                    .collect();
                ids.sort_unstable();
                ids.dedup();
                ids
            })
            .collect();

        Ok(Self { vocabulary, transactions })
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Number of distinct items seen anywhere in the log.
    pub fn num_items(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn max_transaction_len(&self) -> usize {
        self.transactions.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Sorted item ids of one transaction.
    #[inline]
    pub fn transaction(&self, tid: TransactionId) -> &[ItemId] {
        &self.transactions[tid as usize]
    }

    pub fn iter_transactions(&self) -> impl Iterator<Item = (TransactionId, &[ItemId])> {
        self.transactions
            .iter()
            .enumerate()
            .map(|(tid, items)| (tid as TransactionId, items.as_slice()))
    }

    #[inline]
    pub fn item(&self, id: ItemId) -> &I {
        &self.vocabulary[id.index()]
    }

    pub fn item_id(&self, item: &I) -> Option<ItemId> {
        self.vocabulary
            .binary_search(item)
            .ok()
            .map(|idx| ItemId(idx as u32))
    }

    /// Ascending ids of every transaction containing `item`; empty if the item never occurs.
    pub fn occurrences(&self, item: &I) -> Vec<TransactionId> {
        let Some(id) = self.item_id(item) else {
            return Vec::new();
        };
        self.iter_transactions()
            .filter(|(_, items)| items.binary_search(&id).is_ok())
            .map(|(tid, _)| tid)
            .collect()
    }

    pub fn resolve(&self, ids: &[ItemId]) -> Vec<I> {
        ids.iter().map(|&id| self.item(id).clone()).collect()
    }
}

impl TransactionStore<usize> {
    /// Build a store from a dense 0/1 matrix: one row per transaction, one column per item.
    pub fn from_one_hot(matrix: ArrayView2<i32>) -> Result<Self> {
        let num_items = matrix.shape()[1];
        Self::from_transactions(matrix.rows().into_iter().map(|row| {
            (0..num_items)
                .filter(|&j| row[j] != 0)
                .collect::<Vec<usize>>()
        }))
    }
}
