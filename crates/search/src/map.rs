//! Map-backed catalog server.

use std::collections::BTreeMap;

use merx_catalog::Product;
use merx_core::DomainResult;

use crate::server::{DEFAULT_MAX_RETURNED_ENTRIES, Server, cap_and_sort, matches_query};

/// Catalog server backed by a name-keyed map.
///
/// Duplicate names collapse at construction: the first occurrence wins and
/// later ones are silently dropped, so a given name can never contribute more
/// than one match. This is a deliberate divergence from [`crate::ListServer`].
/// Price ties in query results surface in lexicographic name order, the map's
/// native iteration order.
#[derive(Debug, Clone)]
pub struct MapServer {
    products: BTreeMap<String, Product>,
    max_entries: usize,
}

impl MapServer {
    /// Snapshot `catalog` into the server, deduplicating by name.
    ///
    /// The server owns its copy; later changes to the caller's collection are
    /// never observed.
    pub fn new(catalog: &[Product]) -> Self {
        let mut products = BTreeMap::new();
        for p in catalog {
            // Insert-if-absent, not overwrite: first write wins on duplicate
            // names.
            products
                .entry(p.name().to_owned())
                .or_insert_with(|| p.clone());
        }
        Self {
            products,
            max_entries: DEFAULT_MAX_RETURNED_ENTRIES,
        }
    }

    /// Override the result cap (default 5).
    pub fn with_max_returned_entries(mut self, cap: usize) -> Self {
        self.max_entries = cap;
        self
    }
}

impl Server for MapServer {
    fn max_returned_entries(&self) -> usize {
        self.max_entries
    }

    fn get_entries(&self, prefix_length: usize) -> DomainResult<Vec<Product>> {
        let matches: Vec<Product> = self
            .products
            .iter()
            .filter(|(name, _)| matches_query(name, prefix_length))
            .map(|(_, p)| p.clone())
            .collect();

        tracing::debug!(prefix_length, count = matches.len(), "map catalog scanned");
        cap_and_sort(matches, self.max_entries)
    }
}
