//! Listing and name search over the hero catalogue.
//!
//! Both operations are pure functions of the catalogue and the
//! request; nothing is cached between calls.

use std::sync::Arc;

use crate::core::catalogue::Catalogue;
use crate::core::error::{HeroesError, Result};
use crate::core::types::{HeroesResponse, PageLinks, PageParam};

/// Message for a page token that is not an integer
pub const INVALID_PAGE_MESSAGE: &str = "Only Numbers Allowed";

/// Message for a page outside the catalogue
pub const PAGE_NOT_FOUND_MESSAGE: &str = "Heroes Not Found";

/// Page served when the caller gives none
pub const DEFAULT_PAGE: i64 = 1;

/// Query service for paginated listing and search
pub struct QueryService {
    catalogue: Arc<Catalogue>,
}

impl QueryService {
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        Self { catalogue }
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// List one page of heroes
    ///
    /// # Errors
    ///
    /// - `InvalidInput`: page token is not an integer
    /// - `NotFound`: page number outside `1..=last_page`
    pub fn list(&self, page: PageParam) -> Result<HeroesResponse> {
        let requested = match page {
            PageParam::Absent => DEFAULT_PAGE,
            PageParam::Valid(n) => n,
            PageParam::Malformed(raw) => {
                tracing::debug!(raw = %raw, "Rejected non-numeric page");
                return Err(HeroesError::InvalidInput(INVALID_PAGE_MESSAGE.to_string()));
            }
        };

        let (number, heroes) = u32::try_from(requested)
            .ok()
            .and_then(|n| self.catalogue.page_of(n).map(|heroes| (n, heroes)))
            .ok_or_else(|| {
                tracing::debug!(page = requested, "Page outside catalogue");
                HeroesError::NotFound(PAGE_NOT_FOUND_MESSAGE.to_string())
            })?;

        let links = PageLinks::for_page(number, self.catalogue.last_page());
        tracing::debug!(page = number, heroes = heroes.len(), "Serving page");

        Ok(HeroesResponse::ok(heroes.to_vec(), Some(links)))
    }

    /// Case-insensitive substring search over every hero name
    ///
    /// An absent or blank fragment yields an empty result, not the
    /// whole catalogue. Results keep catalogue order.
    pub fn search(&self, name: Option<&str>) -> HeroesResponse {
        let fragment = match name {
            Some(f) if !f.trim().is_empty() => f.to_lowercase(),
            _ => return HeroesResponse::ok(Vec::new(), None),
        };

        let heroes: Vec<_> = self
            .catalogue
            .all_records()
            .iter()
            .filter(|hero| hero.name.to_lowercase().contains(&fragment))
            .cloned()
            .collect();

        tracing::debug!(query = %fragment, matches = heroes.len(), "Search completed");

        HeroesResponse::ok(heroes, None)
    }
}
