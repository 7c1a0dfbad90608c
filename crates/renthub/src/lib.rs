//! Domain library for the RentHub rental marketplace.
//!
//! The interesting machinery lives in [`application`]: a four-step rental
//! application wizard modeled as an explicit state machine with a payment gate
//! on the final step. [`listings`] carries the read-only property catalog and
//! the pure search/filter predicates the home screen composes. The remaining
//! modules ([`auth`], [`profile`], [`tenancy`]) are the screen-local stores the
//! wizard's collaborators own.

pub mod application;
pub mod auth;
pub mod config;
pub mod error;
pub mod listings;
pub mod profile;
pub mod telemetry;
pub mod tenancy;
