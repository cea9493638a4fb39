//! Museum collection client and the random-artwork provider.
//!
//! DESIGN
//! ======
//! The collection API is an opaque network boundary with two read-only
//! endpoints: the bulk identifier listing and the per-object detail record.
//! [`client::CollectionApi`] is the seam; [`client::MetClient`] speaks HTTP,
//! tests substitute an in-memory fake. [`provider::ArtworkProvider`] owns the
//! selection policy and the bounded retry loop and never surfaces errors to
//! its caller: failures are logged and reported as
//! [`provider::FetchOutcome::Unavailable`].

pub mod client;
pub mod config;
pub mod provider;
pub mod types;

pub use client::{CollectionApi, MetClient};
pub use config::MuseumConfig;
pub use provider::{ArtworkProvider, FetchOutcome, LoadingFlag, Selection};
pub use types::{ArtworkMetadata, MuseumError};
