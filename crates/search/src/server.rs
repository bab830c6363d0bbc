//! The catalog query contract shared by every server implementation.

use merx_catalog::Product;
use merx_core::{DomainError, DomainResult};

/// Default cap on the number of entries a single query may return.
pub const DEFAULT_MAX_RETURNED_ENTRIES: usize = 5;

/// Capability contract: a frozen product catalog answering prefix queries.
///
/// Implementations differ only in how they store the catalog; the query
/// semantics are identical. A query names a prefix length `n` and selects
/// every product whose name is exactly `n` ASCII letters followed by two or
/// three digits (`^[A-Za-z]{n}\d{2,3}$`).
pub trait Server {
    /// Maximum number of entries a single [`Server::get_entries`] call may
    /// return before the query is rejected.
    fn max_returned_entries(&self) -> usize {
        DEFAULT_MAX_RETURNED_ENTRIES
    }

    /// Return every matching product, sorted ascending by price.
    ///
    /// Fails with [`DomainError::TooManyResults`] carrying the match count
    /// when more products match than [`Server::max_returned_entries`] allows;
    /// no partial result is returned. Zero matches is an empty `Ok`, not an
    /// error.
    fn get_entries(&self, prefix_length: usize) -> DomainResult<Vec<Product>>;
}

/// Query pattern `^[A-Za-z]{prefix_length}\d{2,3}$`, anchored at both ends.
///
/// Byte-wise on purpose: multi-byte characters can never satisfy the ASCII
/// class checks, so they fail the match exactly as the pattern requires.
pub(crate) fn matches_query(name: &str, prefix_length: usize) -> bool {
    let bytes = name.as_bytes();
    let digits = match bytes.len().checked_sub(prefix_length) {
        Some(n @ 2..=3) => n,
        _ => return false,
    };
    let (prefix, suffix) = bytes.split_at(bytes.len() - digits);
    prefix.iter().all(|b| b.is_ascii_alphabetic())
        && suffix.iter().all(|b| b.is_ascii_digit())
}

/// Shared tail of every `get_entries`: reject over-cap matches, then sort
/// ascending by price. The sort is stable, so price ties keep the relative
/// order the storage produced them in.
pub(crate) fn cap_and_sort(
    mut matches: Vec<Product>,
    cap: usize,
) -> DomainResult<Vec<Product>> {
    if matches.len() > cap {
        tracing::warn!(count = matches.len(), cap, "query rejected: too many matches");
        return Err(DomainError::too_many_results(matches.len()));
    }
    matches.sort_by(|a, b| a.price().total_cmp(&b.price()));
    Ok(matches)
}
