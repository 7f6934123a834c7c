use cooccur::{mine_frequent_itemsets, mine_with_stats, FrequentItemset, MiningConfig, TransactionStore};
use proptest::prelude::*;

fn baskets() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(0u8..8, 0..7), 1..30)
}

fn count_containing(transactions: &[Vec<u8>], itemset: &[u8]) -> usize {
    transactions
        .iter()
        .filter(|t| itemset.iter().all(|item| t.contains(item)))
        .count()
}

fn brute_force(transactions: &[Vec<u8>], sigma: usize, min_set_size: usize) -> Vec<FrequentItemset<u8>> {
    let mut vocabulary: Vec<u8> = transactions.iter().flatten().copied().collect();
    vocabulary.sort_unstable();
    vocabulary.dedup();

    let mut expected = Vec::new();
    for mask in 1u32..(1 << vocabulary.len()) {
        let items: Vec<u8> = vocabulary
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, &item)| item)
            .collect();
        let frequency = count_containing(transactions, &items);
        if items.len() >= min_set_size && frequency >= sigma {
            expected.push(FrequentItemset { items, frequency });
        }
    }
    expected.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.items.cmp(&b.items)));
    expected
}

proptest! {
    #[test]
    fn frequencies_match_direct_count(transactions in baskets(), sigma in 1usize..5) {
        let store = TransactionStore::from_transactions(transactions.clone()).unwrap();
        let result = mine_frequent_itemsets(&store, &MiningConfig::new(sigma, 1)).unwrap();
        for itemset in &result {
            prop_assert_eq!(itemset.frequency, count_containing(&transactions, &itemset.items));
            prop_assert!(itemset.frequency >= sigma);
        }
    }

    #[test]
    fn complete_against_brute_force(
        transactions in baskets(),
        sigma in 1usize..5,
        min_set_size in 1usize..4,
    ) {
        let store = TransactionStore::from_transactions(transactions.clone()).unwrap();
        let result = mine_frequent_itemsets(&store, &MiningConfig::new(sigma, min_set_size)).unwrap();
        prop_assert_eq!(result, brute_force(&transactions, sigma, min_set_size));
    }

    #[test]
    fn subsets_are_at_least_as_frequent(transactions in baskets(), sigma in 1usize..4) {
        let store = TransactionStore::from_transactions(transactions).unwrap();
        let result = mine_frequent_itemsets(&store, &MiningConfig::new(sigma, 1)).unwrap();

        for itemset in result.iter().filter(|itemset| itemset.len() > 1) {
            for skip in 0..itemset.len() {
                let subset: Vec<u8> = itemset
                    .items
                    .iter()
                    .enumerate()
                    .filter(|&(idx, _)| idx != skip)
                    .map(|(_, &item)| item)
                    .collect();
                let parent = result.iter().find(|candidate| candidate.items == subset);
                prop_assert!(parent.is_some(), "subset {:?} of {:?} not reported", subset, itemset.items);
                prop_assert!(parent.unwrap().frequency >= itemset.frequency);
            }
        }
    }

    #[test]
    fn max_combo_size_only_affects_speed(
        transactions in baskets(),
        sigma in 1usize..4,
        max_combo_size in 1usize..8,
    ) {
        let store = TransactionStore::from_transactions(transactions).unwrap();
        let baseline = mine_frequent_itemsets(&store, &MiningConfig::new(sigma, 1)).unwrap();
        let config = MiningConfig::new(sigma, 1).with_max_combo_size(max_combo_size);
        prop_assert_eq!(mine_frequent_itemsets(&store, &config).unwrap(), baseline);
    }

    #[test]
    fn identical_runs_identical_output(transactions in baskets(), sigma in 1usize..4) {
        let store = TransactionStore::from_transactions(transactions).unwrap();
        let config = MiningConfig::new(sigma, 2);
        let (first, first_stats) = mine_with_stats(&store, &config).unwrap();
        let (second, second_stats) = mine_with_stats(&store, &config).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(first_stats, second_stats);
    }

    #[test]
    fn halts_after_first_empty_level(transactions in baskets(), sigma in 1usize..4) {
        let store = TransactionStore::from_transactions(transactions).unwrap();
        let (_, stats) = mine_with_stats(&store, &MiningConfig::new(sigma, 1)).unwrap();
        let (last, rest) = stats.levels.split_last().unwrap();
        prop_assert_eq!(last.frequent, 0);
        prop_assert!(rest.iter().all(|level| level.frequent > 0));
    }
}
