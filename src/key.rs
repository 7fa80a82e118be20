//! A validated rank key.
//!
//! `RankKey` wraps a string that is known to use only `a..=z`. It orders,
//! hashes and serializes exactly like that string, so a store can persist the
//! plain text and sort by it to recover display order.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::alphabet;
use crate::alphabet::Codes;
use crate::between;
use crate::error::Result;

/// An immutable key over `a..=z`, ordered lexicographically.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct RankKey(String);

impl RankKey {
    /// Validate a key read from storage.
    pub fn new(key: impl Into<String>) -> Result<RankKey> {
        let key = key.into();
        alphabet::validate(&key)?;
        return Ok(RankKey(key));
    }

    /// The key for the only item of an empty sequence.
    pub fn first() -> RankKey {
        return RankKey::from_codes(&between::between_codes(&[], None).0);
    }

    /// A key strictly between two neighbors, either of which may be absent.
    pub fn between(prev: Option<&RankKey>, next: Option<&RankKey>) -> Result<RankKey> {
        let key = between::generate_between(prev.map(RankKey::as_str), next.map(RankKey::as_str))?;
        return Ok(RankKey(key));
    }

    /// A key after this one, for appending.
    pub fn after(&self) -> RankKey {
        return RankKey::from_codes(&between::between_codes(&self.codes(), None).0);
    }

    /// A key before this one, for prepending.
    ///
    /// Fails only when this key is empty or made entirely of `a`, since no
    /// key sorts below those.
    pub fn before(&self) -> Result<RankKey> {
        return RankKey::between(None, Some(self));
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }

    pub fn into_string(self) -> String {
        return self.0;
    }

    pub fn len(&self) -> usize {
        return self.0.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.0.is_empty();
    }

    fn codes(&self) -> Codes {
        return self.0.bytes().filter_map(alphabet::code).collect();
    }

    pub(crate) fn from_codes(codes: &[u8]) -> RankKey {
        return RankKey(alphabet::decode(codes));
    }
}

impl FromStr for RankKey {
    type Err = crate::error::RankError;

    fn from_str(s: &str) -> Result<RankKey> {
        return RankKey::new(s);
    }
}

impl TryFrom<String> for RankKey {
    type Error = crate::error::RankError;

    fn try_from(s: String) -> Result<RankKey> {
        return RankKey::new(s);
    }
}

impl TryFrom<&str> for RankKey {
    type Error = crate::error::RankError;

    fn try_from(s: &str) -> Result<RankKey> {
        return RankKey::new(s);
    }
}

impl From<RankKey> for String {
    fn from(key: RankKey) -> String {
        return key.0;
    }
}

impl AsRef<str> for RankKey {
    fn as_ref(&self) -> &str {
        return &self.0;
    }
}

impl Borrow<str> for RankKey {
    fn borrow(&self) -> &str {
        return &self.0;
    }
}

impl PartialEq<str> for RankKey {
    fn eq(&self, other: &str) -> bool {
        return self.0 == other;
    }
}

impl PartialEq<&str> for RankKey {
    fn eq(&self, other: &&str) -> bool {
        return self.0 == *other;
    }
}

impl fmt::Display for RankKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(&self.0);
    }
}

impl fmt::Debug for RankKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "RankKey({})", self.0);
    }
}
