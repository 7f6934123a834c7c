pub mod base;
pub mod candidates;
pub mod collector;
pub mod combinations;
pub mod config;
pub mod mining;
pub mod prune;
pub mod storage;
pub mod store;


pub use collector::{FrequentItemset, ResultCollector};
pub use config::MiningConfig;
pub use mining::{mine_frequent_itemsets, mine_with_stats, LevelStats, MiningStats};
pub use prune::{FrequentHistory, SubsetPruner};
pub use storage::FrequentLevel;
pub use store::{Item, ItemId, TransactionId, TransactionStore};
