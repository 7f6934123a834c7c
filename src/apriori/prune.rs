//! Early rejection of candidates that have a subset known to be infrequent.
//!
//! If any subset of a candidate failed the `sigma` threshold, the candidate
//! cannot pass it either. Looking up every subset costs `2^n`, so only
//! subsets of size `1..=min(n, max_combo_size)` are checked. The frequency
//! filter still counts every survivor exactly, which is why `max_combo_size`
//! moves running time but never the result.

use super::combinations::for_each_combination;
use super::storage::FrequentLevel;
use super::store::ItemId;
use crate::error::{CooccurError, Result};
use std::collections::HashMap;

/// Frequent itemsets of the sizes the pruner can still ask about, with their frequencies.
///
/// Owned by a single mining run. Size 1 is kept as a dense table indexed by
/// [`ItemId`]; sizes `2..=max_combo_size` are hash maps keyed by the sorted
/// itemset. Levels above `max_combo_size` are never looked up and are not kept.
#[derive(Debug, Clone)]
pub struct FrequentHistory {
    max_combo_size: usize,
    num_items: usize,
    singletons: Vec<Option<usize>>,
    levels: Vec<HashMap<Vec<ItemId>, usize>>,
}

impl FrequentHistory {
    pub fn new(max_combo_size: usize, num_items: usize) -> Self {
        Self {
            max_combo_size,
            num_items,
            singletons: vec![None; num_items],
            levels: Vec::new(),
        }
    }

    pub fn max_combo_size(&self) -> usize {
        self.max_combo_size
    }

    /// Number of itemset sizes currently held.
    pub fn depth(&self) -> usize {
        if self.singletons.iter().any(Option::is_some) {
            1 + self.levels.len()
        } else {
            self.levels.len()
        }
    }

    /// Remember a finished level. Levels must arrive in size order.
    ///
    /// Returns `false` when the level lies outside the lookup window and was dropped.
    pub fn record(&mut self, level: &FrequentLevel) -> Result<bool> {
        let size = level.itemset_size;
        if size > self.max_combo_size {
            return Ok(false);
        }

        if size == 1 {
            for (idx, itemset) in level.iter_itemsets().enumerate() {
                let slot = self.singletons.get_mut(itemset[0].index()).ok_or_else(|| {
                    CooccurError::InvariantViolation(format!(
                        "level 1 holds item id {} but only {} items exist",
                        itemset[0].0, self.num_items
                    ))
                })?;
                *slot = Some(level.frequency(idx));
            }
            return Ok(true);
        }

        if self.levels.len() + 2 != size {
            return Err(CooccurError::InvariantViolation(format!(
                "level of size {size} recorded out of order (history holds sizes up to {})",
                self.levels.len() + 1
            )));
        }

        let entries = (0..level.len())
            .map(|idx| (level.get_itemset(idx).to_vec(), level.frequency(idx)))
            .collect();
        self.levels.push(entries);
        Ok(true)
    }

    /// Frequency of a single item, `None` when it did not reach `sigma`.
    pub fn item_frequency(&self, item: ItemId) -> Result<Option<usize>> {
        self.singletons.get(item.index()).copied().ok_or_else(|| {
            CooccurError::InvariantViolation(format!(
                "subset check on item id {} which was never seen at level 1",
                item.0
            ))
        })
    }

    /// Frequency of a sorted itemset, `None` when it is not known to be frequent.
    pub fn frequency(&self, itemset: &[ItemId]) -> Result<Option<usize>> {
        match itemset.len() {
            0 => Ok(None),
            1 => self.item_frequency(itemset[0]),
            size => {
                let level = self.levels.get(size - 2).ok_or_else(|| {
                    CooccurError::InvariantViolation(format!(
                        "subset check of size {size} but no frequent level of that size is held"
                    ))
                })?;
                Ok(level.get(itemset).copied())
            }
        }
    }
}

/// Checks candidate subsets against a [`FrequentHistory`].
#[derive(Debug)]
pub struct SubsetPruner<'h> {
    history: &'h FrequentHistory,
    combo: Vec<ItemId>,
    subset: Vec<ItemId>,
}

impl<'h> SubsetPruner<'h> {
    pub fn new(history: &'h FrequentHistory) -> Self {
        Self {
            history,
            combo: Vec::new(),
            subset: Vec::new(),
        }
    }

    /// Whether `parent ∪ {added}` may still be frequent.
    ///
    /// `parent` is a frequent itemset, so every subset that leaves out `added`
    /// is frequent already; only subsets containing `added` are looked up.
    pub fn admits(&mut self, parent: &[ItemId], added: ItemId) -> Result<bool> {
        if self.history.item_frequency(added)?.is_none() {
            return Ok(false);
        }

        let max_size = parent.len().min(self.history.max_combo_size());
        for size in 2..=max_size {
            let history = self.history;
            let subset = &mut self.subset;
            let mut failure = None;

            let complete = for_each_combination(parent, size - 1, &mut self.combo, &mut |combo| {
                subset.clear();
                let split = combo.partition_point(|&item| item < added);
                subset.extend_from_slice(&combo[..split]);
                subset.push(added);
                subset.extend_from_slice(&combo[split..]);

                match history.frequency(subset.as_slice()) {
                    Ok(Some(_)) => true,
                    Ok(None) => false,
                    Err(err) => {
                        failure = Some(err);
                        false
                    }
                }
            });

            if let Some(err) = failure {
                return Err(err);
            }
            if !complete {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
