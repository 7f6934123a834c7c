use super::base::build_first_level;
use super::candidates::{generate_candidates, CandidateSet};
use super::collector::{FrequentItemset, ResultCollector};
use super::config::MiningConfig;
use super::prune::{FrequentHistory, SubsetPruner};
use super::storage::FrequentLevel;
use super::store::{Item, TransactionStore};
use crate::error::Result;

/// Counters for one itemset size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelStats {
    pub itemset_size: usize,
    /// Distinct candidates that survived the pruner.
    pub candidates: usize,
    pub pruned: usize,
    pub merged: usize,
    pub frequent: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MiningStats {
    pub levels: Vec<LevelStats>,
}

impl MiningStats {
    /// Size of the largest non-empty frequent level, 0 if nothing reached `sigma`.
    pub fn largest_itemset_size(&self) -> usize {
        self.levels
            .iter()
            .filter(|level| level.frequent > 0)
            .map(|level| level.itemset_size)
            .max()
            .unwrap_or(0)
    }

    pub fn total_frequent(&self) -> usize {
        self.levels.iter().map(|level| level.frequent).sum()
    }
}

/// Keep the candidates whose occurrence set reaches `sigma`, sorted into a level.
pub fn filter_frequent(candidates: CandidateSet, sigma: usize) -> FrequentLevel {
    let mut survivors: Vec<_> = candidates
        .entries
        .into_iter()
        .filter(|(_, tids)| tids.len() >= sigma)
        .collect();
    survivors.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

    let mut level = FrequentLevel::with_capacity(candidates.itemset_size, survivors.len());
    for (itemset, tids) in survivors {
        level.push(&itemset, tids);
    }
    level
}

/// Every itemset of at least `min_set_size` items that occurs in at least `sigma` transactions.
pub fn mine_frequent_itemsets<I: Item>(
    store: &TransactionStore<I>,
    config: &MiningConfig,
) -> Result<Vec<FrequentItemset<I>>> {
    mine_with_stats(store, config).map(|(itemsets, _)| itemsets)
}

/// Same as [`mine_frequent_itemsets`], also returning per-level counters.
pub fn mine_with_stats<I: Item>(
    store: &TransactionStore<I>,
    config: &MiningConfig,
) -> Result<(Vec<FrequentItemset<I>>, MiningStats)> {
    config.validate()?;

    let mut history = FrequentHistory::new(config.max_combo_size, store.num_items());
    let mut collector = ResultCollector::new(config.min_set_size);
    let mut stats = MiningStats::default();

    let mut current = build_first_level(store, config.sigma);
    log::info!(
        "starting with {} itemsets of size 1 ({} distinct items in {} transactions)",
        current.len(),
        store.num_items(),
        store.len()
    );
    stats.levels.push(LevelStats {
        itemset_size: 1,
        candidates: store.num_items(),
        frequent: current.len(),
        ..LevelStats::default()
    });
    history.record(&current)?;
    collector.collect(&current);

    while !current.is_empty() {
        let next_size = current.itemset_size + 1;
        log::info!("checking itemsets of size {}", next_size);

        let candidates = {
            let mut pruner = SubsetPruner::new(&history);
            generate_candidates(store, &current, &mut pruner)?
        };
        let mut level_stats = LevelStats {
            itemset_size: next_size,
            candidates: candidates.len(),
            pruned: candidates.pruned,
            merged: candidates.merged,
            frequent: 0,
        };
        log::debug!(
            "size {}: {} candidates kept, {} pruned, {} merged paths",
            next_size,
            level_stats.candidates,
            level_stats.pruned,
            level_stats.merged
        );

        let next = filter_frequent(candidates, config.sigma);
        level_stats.frequent = next.len();
        stats.levels.push(level_stats);
        log::info!("added {}", next.len());
        log::debug!(
            "size {} level holds {} occurrences (~{} bytes)",
            next_size,
            next.total_occurrences(),
            next.estimated_bytes()
        );

        if !history.record(&next)? {
            log::debug!(
                "size {} is above max_combo_size {}, not kept for subset checks ({} sizes held)",
                next_size,
                history.max_combo_size(),
                history.depth()
            );
        }
        collector.collect(&next);
        current = next;
    }

    log::info!(
        "found {} itemsets of size >= {}, largest size {}",
        collector.len(),
        config.min_set_size,
        stats.largest_itemset_size()
    );
    Ok((collector.finish(store), stats))
}
