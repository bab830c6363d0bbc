//! `merx-search` — catalog servers and the client aggregation layer.
//!
//! A [`Server`] owns a frozen snapshot of a product catalog and answers
//! prefix queries with price-sorted results, bounded by a result cap. Two
//! storage strategies implement the contract: [`ListServer`] (ordered list,
//! duplicates preserved) and [`MapServer`] (name-keyed map, duplicates
//! collapsed first-write-wins). [`Client`] turns a query into a price total,
//! treating a rejected or empty query as "no answer".

pub mod client;
pub mod list;
pub mod map;
pub mod server;

pub use client::Client;
pub use list::ListServer;
pub use map::MapServer;
pub use server::{DEFAULT_MAX_RETURNED_ENTRIES, Server};
