//! Caller-driven length control.
//!
//! Generated keys never shrink, and inserting repeatedly at the same spot
//! grows them steadily. Nothing here runs on its own: the owner of a sequence
//! asks [`RebalancePolicy::needs_rebalance`] after its writes and, when it
//! says yes, replaces every key in display order with the output of
//! [`rebalance`].

use crate::alphabet;
use crate::between;
use crate::error::RankError;
use crate::error::Result;
use crate::key::RankKey;

/// Default longest key tolerated before a rebalance is due.
pub const DEFAULT_MAX_KEY_LEN: usize = 64;

/// When a sequence should be rebalanced.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RebalancePolicy {
    /// Longest key, in letters, that does not trigger a rebalance.
    pub max_key_len: usize,
}

impl Default for RebalancePolicy {
    fn default() -> RebalancePolicy {
        return RebalancePolicy {
            max_key_len: DEFAULT_MAX_KEY_LEN,
        };
    }
}

impl RebalancePolicy {
    pub fn new(max_key_len: usize) -> RebalancePolicy {
        return RebalancePolicy { max_key_len };
    }

    /// Check whether any key has outgrown the limit.
    pub fn needs_rebalance<I, K>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        for key in keys {
            let len = key.as_ref().len();
            if len > self.max_key_len {
                tracing::debug!(len, max = self.max_key_len, "rank key over limit, rebalance due");
                return true;
            }
        }
        return false;
    }
}

/// Fresh keys for a sequence of `count` items, evenly spread and increasing.
///
/// Assign them to the items in display order. The longest key is
/// logarithmic in `count`.
pub fn rebalance(count: usize) -> Vec<RankKey> {
    let keys: Vec<RankKey> = between::spread(&[], None, count)
        .iter()
        .map(|codes| RankKey::from_codes(codes))
        .collect();
    tracing::debug!(
        count,
        longest = keys.iter().map(RankKey::len).max().unwrap_or(0),
        "rebalanced rank keys"
    );
    return keys;
}

/// Check that persisted keys are well formed and strictly increasing.
///
/// Returns the first problem found, in order.
pub fn check_sequence<I, K>(keys: I) -> Result<()>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    let mut prev: Option<K> = None;
    for key in keys {
        alphabet::validate(key.as_ref())?;
        if let Some(prev) = &prev {
            if prev.as_ref() >= key.as_ref() {
                return Err(RankError::ordering(Some(prev.as_ref()), key.as_ref()));
            }
        }
        prev = Some(key);
    }
    return Ok(());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy() {
        assert_eq!(RebalancePolicy::default().max_key_len, DEFAULT_MAX_KEY_LEN);
    }

    #[test]
    fn needs_rebalance_only_past_limit() {
        let policy = RebalancePolicy::new(3);
        assert!(!policy.needs_rebalance(["a", "abc", "zzz"]));
        assert!(policy.needs_rebalance(["a", "abcd"]));
        assert!(!policy.needs_rebalance(Vec::<String>::new()));
    }

    #[test]
    fn rebalance_spreads_keys() {
        let keys = rebalance(26);
        assert_eq!(keys.len(), 26);
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
        assert!(keys.iter().all(|k| k.len() <= 2));
        assert!(check_sequence(&keys).is_ok());
    }

    #[test]
    fn rebalance_nothing() {
        assert!(rebalance(0).is_empty());
        assert_eq!(rebalance(1), [RankKey::first()]);
    }

    #[test]
    fn check_sequence_finds_disorder() {
        assert!(check_sequence(["a", "b", "ba"]).is_ok());
        let err = check_sequence(["a", "c", "b"]).unwrap_err();
        assert_eq!(
            err,
            RankError::OrderingViolation {
                prev: Some("c".to_string()),
                next: "b".to_string(),
            }
        );
        assert!(check_sequence(["a", "a"]).unwrap_err().is_ordering_violation());
        assert!(check_sequence(["a", "B"]).unwrap_err().is_alphabet_violation());
    }
}
