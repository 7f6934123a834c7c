use super::prune::SubsetPruner;
use super::storage::FrequentLevel;
use super::store::{Item, ItemId, TransactionId, TransactionStore};
use crate::error::{CooccurError, Result};
use std::collections::{HashMap, HashSet};

/// Candidates of the next size, each with its exact occurrence set.
#[derive(Debug, Default)]
pub struct CandidateSet {
    pub itemset_size: usize,
    pub entries: HashMap<Vec<ItemId>, Vec<TransactionId>>,
    /// Distinct candidates rejected by the pruner.
    pub pruned: usize,
    /// Times a candidate was reached again through another parent.
    pub merged: usize,
}

impl CandidateSet {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Extend every itemset of `level` by one item taken from the transactions it occurs in.
///
/// For a parent `S` and an item `i` outside it, the transactions of
/// `occurrence(S)` that also hold `i` are exactly `occurrence(S ∪ {i})`, so
/// occurrence sets are derived from the parent without rescanning the log.
/// The same candidate is usually reached from several parents; those paths
/// must agree on the occurrence set, and a mismatch aborts the run.
pub fn generate_candidates<I: Item>(
    store: &TransactionStore<I>,
    level: &FrequentLevel,
    pruner: &mut SubsetPruner<'_>,
) -> Result<CandidateSet> {
    let itemset_size = level.itemset_size + 1;
    let mut candidates = CandidateSet {
        itemset_size,
        ..CandidateSet::default()
    };
    let mut rejected: HashSet<Vec<ItemId>> = HashSet::new();
    let mut extensions: HashMap<ItemId, Vec<TransactionId>> = HashMap::new();
    let mut candidate: Vec<ItemId> = Vec::with_capacity(itemset_size);

    for (parent, parent_tids) in level.iter() {
        for &tid in parent_tids {
            for &item in store.transaction(tid) {
                if parent.binary_search(&item).is_err() {
                    extensions.entry(item).or_default().push(tid);
                }
            }
        }

        for (added, tids) in extensions.drain() {
            candidate.clear();
            let split = parent.partition_point(|&item| item < added);
            candidate.extend_from_slice(&parent[..split]);
            candidate.push(added);
            candidate.extend_from_slice(&parent[split..]);

            if let Some(existing) = candidates.entries.get(candidate.as_slice()) {
                if *existing != tids {
                    return Err(CooccurError::InvariantViolation(format!(
                        "candidate {:?} reached with {} occurrences from one parent and {} from another",
                        candidate,
                        existing.len(),
                        tids.len()
                    )));
                }
                candidates.merged += 1;
                continue;
            }
            if rejected.contains(candidate.as_slice()) {
                continue;
            }

            if pruner.admits(parent, added)? {
                candidates.entries.insert(candidate.clone(), tids);
            } else {
                rejected.insert(candidate.clone());
            }
        }
    }

    candidates.pruned = rejected.len();
    Ok(candidates)
}
