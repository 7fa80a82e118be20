//! Generating a key that sorts strictly between two neighbors.
//!
//! Both neighbors are scanned in lockstep, reading a sentinel wherever a key
//! is missing or exhausted, until their codes diverge. The shared prefix is
//! carried into the new key unchanged, and one differentiator letter is
//! chosen halfway between the two diverging codes (rounding toward the right
//! neighbor). Two situations leave no room at the divergence point and are
//! adjusted first:
//!
//! 1. **Left exhausted**: `prev` ends where `next` continues. Any leading run
//!    of `a` in the rest of `next` is copied, and a following `b` is matched
//!    with an `a` that opens the whole alphabet above it.
//!
//!    e.g. prev = "a", next = "ab", str = "aan"
//!
//! 2. **Adjacent codes**: the diverging letters are consecutive. The letter
//!    from `prev` is kept, any run of `z` after it is copied, and the
//!    differentiator is chosen between the next letter of `prev` and the end
//!    of the alphabet.
//!
//!    e.g. prev = "zy", next = "zz", str = "zyn"
//!
//! Otherwise the differentiator fits directly:
//!
//!    e.g. prev = "abcde", next = "abchi", str = "abcf"
//!
//! A single call adds at most two letters beyond the longer neighbor, and the
//! result never ends in `a`.

use crate::alphabet;
use crate::alphabet::Codes;
use crate::alphabet::A;
use crate::alphabet::AFTER_LAST;
use crate::alphabet::B;
use crate::alphabet::BEFORE_FIRST;
use crate::alphabet::Z;
use crate::error::RankError;
use crate::error::Result;

/// The adjustment applied where the neighbors diverge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Case {
    LeftExhausted,
    Adjacent,
    Gap,
}

/// Generate a key strictly between `prev` and `next`.
///
/// `None` for `prev` inserts at the very start of the sequence, `None` for
/// `next` at the very end. Fails with [`RankError::AlphabetViolation`] if
/// either key has a character outside `a..=z`, and with
/// [`RankError::OrderingViolation`] if no key fits between them.
///
/// ```
/// use lexrank::generate_between;
///
/// assert_eq!(generate_between(Some("zy"), Some("zz")).unwrap(), "zyn");
/// assert_eq!(generate_between(Some("abcde"), Some("abchi")).unwrap(), "abcf");
/// assert_eq!(generate_between(None, None).unwrap(), "n");
/// assert!(generate_between(Some("b"), Some("a")).is_err());
/// ```
pub fn generate_between(prev: Option<&str>, next: Option<&str>) -> Result<String> {
    let (prev_codes, next_codes) = bounds(prev, next)?;
    let (codes, case) = between_codes(&prev_codes, next_codes.as_deref());
    let key = alphabet::decode(&codes);
    tracing::trace!(?prev, ?next, ?case, key = %key, "generated rank key");
    return Ok(key);
}

/// Generate `count` strictly increasing keys between `prev` and `next`.
///
/// Keys are placed by recursive bisection, so the longest one grows with the
/// logarithm of `count` rather than with `count` itself. Bounds are checked
/// even when `count` is zero.
///
/// ```
/// use lexrank::generate_n_between;
///
/// let keys = generate_n_between(None, None, 3).unwrap();
/// assert_eq!(keys, ["g", "n", "u"]);
/// ```
pub fn generate_n_between(
    prev: Option<&str>,
    next: Option<&str>,
    count: usize,
) -> Result<Vec<String>> {
    let (prev_codes, next_codes) = bounds(prev, next)?;
    let out = spread(&prev_codes, next_codes.as_deref(), count);
    tracing::trace!(?prev, ?next, count, "generated rank key batch");
    return Ok(out.iter().map(|codes| alphabet::decode(codes)).collect());
}

/// Encode both neighbors and check that a key fits between them.
fn bounds(prev: Option<&str>, next: Option<&str>) -> Result<(Codes, Option<Codes>)> {
    let prev_codes = match prev {
        Some(key) => alphabet::encode(key)?,
        None => Codes::new(),
    };
    let next_codes = match next {
        Some(key) => Some(alphabet::encode(key)?),
        None => None,
    };
    if let (Some(key), Some(codes)) = (next, &next_codes) {
        if !has_room(&prev_codes, codes) {
            return Err(RankError::ordering(prev, key));
        }
    }
    return Ok((prev_codes, next_codes));
}

/// Whether some key over `a..=z` sorts strictly between `prev` and `next`.
///
/// An absent `prev` is the empty slice. Codes order like their letters, so
/// slice comparison is key comparison.
pub(crate) fn has_room(prev: &[u8], next: &[u8]) -> bool {
    if prev >= next {
        return false;
    }
    return match next.strip_prefix(prev) {
        Some(tail) => tail.iter().any(|&code| code != A),
        None => true,
    };
}

/// The core routine over codes. Callers must have checked `has_room`.
pub(crate) fn between_codes(prev: &[u8], next: Option<&[u8]>) -> (Codes, Case) {
    let prev_at = |i: usize| prev.get(i).copied().unwrap_or(BEFORE_FIRST);
    let next_at = |i: usize| next.and_then(|n| n.get(i)).copied().unwrap_or(AFTER_LAST);

    // Past the end of both keys the sentinels differ, so this terminates
    // with pos <= prev.len().
    let mut pos = 0;
    let (mut p, mut n) = loop {
        let (p, n) = (prev_at(pos), next_at(pos));
        if p != n {
            break (p, n);
        }
        pos += 1;
    };

    let mut out = Codes::from_slice(&prev[..pos]);
    pos += 1;

    let case = if p == BEFORE_FIRST {
        while n == A {
            out.push(A);
            n = next_at(pos);
            pos += 1;
        }
        if n == B {
            out.push(A);
            n = AFTER_LAST;
        }
        Case::LeftExhausted
    } else if n == p + 1 {
        out.push(p);
        n = AFTER_LAST;
        p = prev_at(pos);
        pos += 1;
        while p == Z {
            out.push(Z);
            p = prev_at(pos);
            pos += 1;
        }
        Case::Adjacent
    } else {
        Case::Gap
    };

    out.push(midpoint(p, n));
    return (out, case);
}

/// `ceil(n - (n - p) / 2)`: halfway between two codes, rounded up.
fn midpoint(p: u8, n: u8) -> u8 {
    debug_assert!(p + 1 < n, "no letter between codes {p} and {n}");
    return (p + n + 1) / 2;
}

/// `count` increasing codes between the bounds. Callers must have checked
/// `has_room`; each midpoint keeps room on both of its sides.
pub(crate) fn spread(prev: &[u8], next: Option<&[u8]>, count: usize) -> Vec<Codes> {
    let mut out = Vec::with_capacity(count);
    bisect(prev, next, count, &mut out);
    return out;
}

fn bisect(prev: &[u8], next: Option<&[u8]>, count: usize, out: &mut Vec<Codes>) {
    if count == 0 {
        return;
    }
    let (mid, _) = between_codes(prev, next);
    debug_assert!(has_room(prev, &mid));
    let left = (count - 1) / 2;
    bisect(prev, Some(&mid), left, out);
    out.push(mid.clone());
    bisect(&mid, next, count - 1 - left, out);
}
