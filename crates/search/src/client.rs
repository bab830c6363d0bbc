//! Client aggregation layer over a catalog server.

use merx_catalog::Product;
use merx_core::{DomainError, DomainResult};

use crate::server::Server;

/// Aggregates query results from exactly one server.
///
/// Generic over the [`Server`] contract, so the same client works against
/// either storage strategy (or any future one).
#[derive(Debug)]
pub struct Client<S: Server> {
    server: S,
}

impl<S: Server> Client<S> {
    pub fn new(server: S) -> Self {
        Self { server }
    }

    /// Sum of the prices of every product matching `prefix_length`.
    ///
    /// Returns `Ok(None)` when there is no usable answer: either the query
    /// matched nothing, or the server rejected it for exceeding its result
    /// cap (recovered locally, not a fault). Any other failure kind
    /// propagates unchanged.
    pub fn get_total_price(&self, prefix_length: usize) -> DomainResult<Option<f64>> {
        let entries = match self.server.get_entries(prefix_length) {
            Ok(entries) => entries,
            Err(DomainError::TooManyResults { count }) => {
                tracing::debug!(count, "result cap exceeded, no usable answer");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        if entries.is_empty() {
            return Ok(None);
        }
        Ok(Some(entries.iter().map(Product::price).sum()))
    }
}
