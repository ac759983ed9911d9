//! Service contains the rent estimation logic of the application.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod domain;
pub mod query;

// Used in `define_kind!` expansions.
use strum as _;

pub use self::query::Query;

/// Domain service estimating rents.
///
/// Rents are estimated in Turkish Lira, as the pricing tables are.
#[derive(Clone, Copy, Debug, Default)]
pub struct Service;

impl Service {
    /// Creates a new [`Service`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}
