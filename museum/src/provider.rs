//! Random artwork selection with a bounded retry loop.
//!
//! DESIGN
//! ======
//! Two selection policies:
//!
//! - `Sample`: pick from a short fixed list of identifiers.
//! - `Departments`: load the full identifier catalog once, pick from it, and
//!   accept only records whose department is on the allow-list.
//!
//! Either way a record must have a thumbnail to count. Each `fetch_random`
//! makes at most `max_attempts` detail requests. An empty candidate list is
//! reported as `Unavailable` straight away rather than retried.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, error, info, warn};

use crate::client::CollectionApi;
use crate::types::ArtworkMetadata;

/// Identifiers the sample selection draws from.
pub const SAMPLE_OBJECT_IDS: &[u64] = &[436_535, 436_528, 436_533, 436_532, 436_524, 436_525];

/// Departments holding drawable visual art.
pub const DEFAULT_DEPARTMENTS: &[&str] = &[
    "European Paintings",
    "Drawings and Prints",
    "Modern and Contemporary Art",
    "The American Wing",
    "Asian Art",
    "Robert Lehman Collection",
    "Photographs",
    "Islamic Art",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Pick from these identifiers.
    Sample(Vec<u64>),
    /// Pick from the full catalog, keeping only these departments.
    Departments(Vec<String>),
}

impl Default for Selection {
    fn default() -> Self {
        Self::Sample(SAMPLE_OBJECT_IDS.to_vec())
    }
}

impl Selection {
    /// Catalog selection over [`DEFAULT_DEPARTMENTS`].
    #[must_use]
    pub fn default_departments() -> Self {
        Self::Departments(DEFAULT_DEPARTMENTS.iter().map(|d| (*d).to_string()).collect())
    }

    /// Whether a fetched record satisfies this selection.
    #[must_use]
    pub fn accepts(&self, art: &ArtworkMetadata) -> bool {
        if !art.has_thumbnail() {
            return false;
        }
        match self {
            Self::Sample(_) => true,
            Self::Departments(allowed) => allowed.iter().any(|d| d == &art.department),
        }
    }
}

/// Result of one `fetch_random` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Found(ArtworkMetadata),
    Unavailable,
}

/// Shared view of whether a fetch is in flight.
///
/// Clones observe the same flag, so a display task can poll it while the
/// provider is busy inside [`ArtworkProvider::fetch_random`].
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Arc<AtomicBool>);

impl LoadingFlag {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn begin(&self) -> InFlight {
        self.0.store(true, Ordering::Release);
        InFlight(self.clone())
    }
}

/// Clears the flag when the fetch finishes or is dropped mid-flight.
struct InFlight(LoadingFlag);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.0.store(false, Ordering::Release);
    }
}

pub struct ArtworkProvider<A> {
    api: A,
    selection: Selection,
    max_attempts: u32,
    /// Full identifier listing, loaded on first use by `Departments`.
    catalog: Option<Vec<u64>>,
    loading: LoadingFlag,
    current: Option<ArtworkMetadata>,
}

impl<A: CollectionApi> ArtworkProvider<A> {
    #[must_use]
    pub fn new(api: A, selection: Selection, max_attempts: u32) -> Self {
        Self { api, selection, max_attempts: max_attempts.max(1), catalog: None, loading: LoadingFlag::default(), current: None }
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// A handle that keeps reporting the loading state while a fetch holds
    /// the provider.
    #[must_use]
    pub fn loading(&self) -> LoadingFlag {
        self.loading.clone()
    }

    /// The most recently loaded artwork. Failed fetches leave it unchanged.
    #[must_use]
    pub fn current(&self) -> Option<&ArtworkMetadata> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Replace the current artwork with another random one.
    pub async fn fetch_another(&mut self) -> FetchOutcome {
        let mut rng = StdRng::from_rng(&mut rand::rng());
        self.fetch_random(&mut rng).await
    }

    /// Pick and fetch a random acceptable artwork using `rng`.
    pub async fn fetch_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> FetchOutcome {
        let in_flight = self.loading.begin();
        let outcome = self.try_fetch(rng).await;
        drop(in_flight);

        match &outcome {
            FetchOutcome::Found(art) => {
                info!(object_id = art.object_id, title = %art.title, department = %art.department, "artwork loaded");
                self.current = Some(art.clone());
            }
            FetchOutcome::Unavailable => warn!(max_attempts = self.max_attempts, "no valid artwork found"),
        }
        outcome
    }

    async fn try_fetch<R: Rng + ?Sized>(&mut self, rng: &mut R) -> FetchOutcome {
        if matches!(self.selection, Selection::Departments(_)) && self.catalog.is_none() {
            match self.api.object_ids().await {
                Ok(ids) => {
                    info!(count = ids.len(), "object catalog loaded");
                    self.catalog = Some(ids);
                }
                Err(e) => {
                    error!(error = %e, "object catalog load failed");
                    return FetchOutcome::Unavailable;
                }
            }
        }

        let candidates: &[u64] = match &self.selection {
            Selection::Sample(ids) => ids,
            Selection::Departments(_) => self.catalog.as_deref().unwrap_or_default(),
        };
        if candidates.is_empty() {
            warn!("no candidate identifiers to choose from");
            return FetchOutcome::Unavailable;
        }

        for attempt in 1..=self.max_attempts {
            let Some(&id) = candidates.choose(rng) else {
                break;
            };
            match self.api.object(id).await {
                Ok(art) if self.selection.accepts(&art) => return FetchOutcome::Found(art),
                Ok(art) => debug!(id, attempt, department = %art.department, "artwork rejected"),
                Err(e) => warn!(error = %e, id, attempt, retryable = e.retryable(), "artwork fetch failed"),
            }
        }
        FetchOutcome::Unavailable
    }
}
