//! Read-only property catalog and the home-screen search/filter predicates.

pub mod catalog;
pub mod domain;
pub mod filter;
pub mod router;

pub use catalog::{ListingProvider, StaticListingCatalog};
pub use domain::{PropertyId, PropertyRecord, PropertySnapshot};
pub use filter::{search, ListingBrowser, ListingQuery};
pub use router::listings_router;
