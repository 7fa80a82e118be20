//! Lexrank - order keys that always fit between two neighbors.
//!
//! A sequence whose items carry lowercase string keys can be kept in display
//! order just by sorting on those keys. To insert or move an item, generate a
//! fresh key from its new left and right neighbors; no other key changes.
//!
//! # Quick Start
//!
//! ```
//! use lexrank::RankKey;
//!
//! // The first item of an empty list.
//! let first = RankKey::first();
//!
//! // Append and prepend.
//! let last = first.after();
//! let head = first.before().unwrap();
//!
//! // Insert between two neighbors.
//! let middle = RankKey::between(Some(&first), Some(&last)).unwrap();
//!
//! let mut keys = vec![last.clone(), middle.clone(), head.clone(), first.clone()];
//! keys.sort();
//! assert_eq!(keys, [head, first, middle, last]);
//! ```
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | `alphabet` | Letter codes and the two sentinels |
//! | `between` | The generator, single and batched |
//! | `key` | `RankKey`, a validated key |
//! | `rebalance` | Length limits and evenly spread replacement keys |
//! | `error` | `RankError` |
//!
//! Everything here is pure and synchronous, so it can be called from any
//! number of threads at once.

pub mod alphabet;
pub mod between;
pub mod error;
pub mod key;
pub mod rebalance;

pub use between::generate_between;
pub use between::generate_n_between;
pub use error::RankError;
pub use error::Result;
pub use key::RankKey;
pub use rebalance::RebalancePolicy;
