//! List-backed catalog server.

use merx_catalog::Product;
use merx_core::DomainResult;

use crate::server::{DEFAULT_MAX_RETURNED_ENTRIES, Server, cap_and_sort, matches_query};

/// Catalog server backed by an ordered product list.
///
/// The input catalog is kept verbatim: order and duplicate names are both
/// preserved, so a name that appears twice can match a query twice — and
/// duplicates alone can push a query over the result cap. Price ties in query
/// results keep catalog order.
#[derive(Debug, Clone)]
pub struct ListServer {
    products: Vec<Product>,
    max_entries: usize,
}

impl ListServer {
    /// Snapshot `catalog` into the server.
    ///
    /// The server owns its copy; later changes to the caller's collection are
    /// never observed.
    pub fn new(catalog: &[Product]) -> Self {
        Self {
            products: catalog.to_vec(),
            max_entries: DEFAULT_MAX_RETURNED_ENTRIES,
        }
    }

    /// Override the result cap (default 5).
    pub fn with_max_returned_entries(mut self, cap: usize) -> Self {
        self.max_entries = cap;
        self
    }
}

impl Server for ListServer {
    fn max_returned_entries(&self) -> usize {
        self.max_entries
    }

    fn get_entries(&self, prefix_length: usize) -> DomainResult<Vec<Product>> {
        let matches: Vec<Product> = self
            .products
            .iter()
            .filter(|p| matches_query(p.name(), prefix_length))
            .cloned()
            .collect();

        tracing::debug!(prefix_length, count = matches.len(), "list catalog scanned");
        cap_and_sort(matches, self.max_entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use merx_core::DomainError;

    fn product(name: &str, price: f64) -> Product {
        Product::new(name, price).unwrap()
    }

    #[test]
    fn returns_matches_sorted_by_price() {
        let catalog = vec![
            product("P12", 1.0),
            product("PP234", 1.0),
            product("PP236", 3.0),
            product("PP235", 2.0),
        ];
        let server = ListServer::new(&catalog);

        let entries = server.get_entries(2).unwrap();
        assert_eq!(
            entries,
            vec![catalog[1].clone(), catalog[3].clone(), catalog[2].clone()]
        );
    }

    #[test]
    fn price_ties_keep_catalog_order() {
        let catalog = vec![
            product("PP236", 2.0),
            product("PP234", 2.0),
            product("PP235", 1.0),
        ];
        let server = ListServer::new(&catalog);

        let entries = server.get_entries(2).unwrap();
        assert_eq!(
            entries,
            vec![catalog[2].clone(), catalog[0].clone(), catalog[1].clone()]
        );
    }

    #[test]
    fn duplicate_names_match_once_per_occurrence() {
        let catalog = vec![
            product("PP234", 1.0),
            product("PP234", 1.0),
            product("PP235", 2.0),
        ];
        let server = ListServer::new(&catalog);

        let entries = server.get_entries(2).unwrap();
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn duplicates_alone_can_exceed_the_cap() {
        let catalog: Vec<Product> = (0..6).map(|_| product("PP234", 1.0)).collect();
        let server = ListServer::new(&catalog);

        let err = server.get_entries(2).unwrap_err();
        assert_eq!(err, DomainError::TooManyResults { count: 6 });
    }

    #[test]
    fn no_matches_is_an_empty_ok() {
        let server = ListServer::new(&[product("PP234", 1.0)]);
        assert_eq!(server.get_entries(4).unwrap(), vec![]);
    }

    #[test]
    fn cap_is_configurable() {
        let catalog = vec![product("PP234", 1.0), product("PP235", 2.0)];
        let server = ListServer::new(&catalog).with_max_returned_entries(1);

        let err = server.get_entries(2).unwrap_err();
        assert_eq!(err, DomainError::TooManyResults { count: 2 });
    }

    #[test]
    fn snapshot_is_decoupled_from_the_caller_collection() {
        let mut catalog = vec![product("PP234", 1.0)];
        let server = ListServer::new(&catalog);

        catalog.push(product("PP235", 2.0));
        catalog[0] = product("PP236", 9.0);

        let entries = server.get_entries(2).unwrap();
        assert_eq!(entries, vec![product("PP234", 1.0)]);
    }
}
