//! Find the itemsets that are bought together at least `sigma` times.
//!
//! Mining grows itemsets one item at a time, Apriori style. Each level of
//! frequent itemsets carries the ids of the transactions it occurs in, so the
//! next level's occurrence sets come from filtering the parent's instead of
//! rescanning the log.
//!
//! ```
//! use cooccur::{mine_frequent_itemsets, MiningConfig, TransactionStore};
//!
//! let store = TransactionStore::from_transactions(vec![
//!     vec![1, 2, 3],
//!     vec![1, 2],
//!     vec![1, 2, 3],
//!     vec![1, 3],
//! ]).unwrap();
//! let config = MiningConfig::new(2, 2);
//!
//! let itemsets = mine_frequent_itemsets(&store, &config).unwrap();
//! assert_eq!(itemsets.len(), 4);
//! assert_eq!(itemsets[3].items, vec![1, 2, 3]);
//! assert_eq!(itemsets[3].frequency, 2);
//! ```

pub mod apriori;
pub mod error;
pub mod io;

pub use apriori::{
    mine_frequent_itemsets, mine_with_stats, FrequentItemset, MiningConfig, MiningStats,
    TransactionStore,
};
pub use error::CooccurError;
