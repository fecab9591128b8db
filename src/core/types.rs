//! Core data types for the heroes API.
//!
//! This module defines the catalogue record, the page request
//! variant, and the response envelope in both its domain and wire
//! forms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single catalogue entry
///
/// Only `id` and `name` carry meaning for listing and search; every
/// other field is passed through to the wire unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    /// Unique, stable identifier
    pub id: u32,

    /// Display name, matched by search
    pub name: String,

    /// Image reference (usually a path under `/images`)
    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub about: String,

    #[serde(default)]
    pub rating: f64,

    #[serde(default)]
    pub power: u32,

    /// Birth month
    #[serde(default)]
    pub month: String,

    /// Birth day
    #[serde(default)]
    pub day: String,

    #[serde(default)]
    pub family: Vec<String>,

    #[serde(default)]
    pub abilities: Vec<String>,

    #[serde(default)]
    pub nature_types: Vec<String>,
}

/// Page number as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageParam {
    /// No `page` parameter at all
    Absent,

    /// Parameter present but not an integer (includes the empty string)
    Malformed(String),

    /// Parsed integer; may still be out of range
    Valid(i64),
}

impl PageParam {
    /// Classify raw query text without trimming it
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            None => PageParam::Absent,
            Some(text) => match text.parse::<i64>() {
                Ok(n) => PageParam::Valid(n),
                Err(_) => PageParam::Malformed(text.to_string()),
            },
        }
    }
}

/// Neighbouring page numbers for a paginated listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLinks {
    pub previous: Option<u32>,
    pub next: Option<u32>,
}

impl PageLinks {
    /// Compute links for `page` in a catalogue of `last_page` pages
    pub fn for_page(page: u32, last_page: u32) -> Self {
        let previous = (2..=last_page).contains(&page).then(|| page - 1);
        let next = (1..last_page).contains(&page).then(|| page + 1);
        Self { previous, next }
    }
}

/// Successful query result before wire shaping
#[derive(Debug, Clone, PartialEq)]
pub struct HeroesResponse {
    pub success: bool,
    pub message: String,
    pub heroes: Vec<Hero>,

    /// Present for listings, absent for search results
    pub page: Option<PageLinks>,

    /// Set at construction, never cached
    pub last_updated: DateTime<Utc>,
}

impl HeroesResponse {
    pub fn ok(heroes: Vec<Hero>, page: Option<PageLinks>) -> Self {
        Self {
            success: true,
            message: "ok".to_string(),
            heroes,
            page,
            last_updated: Utc::now(),
        }
    }
}

/// JSON envelope returned by every heroes endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    pub prev_page: Option<u32>,
    pub next_page: Option<u32>,
    #[serde(default)]
    pub heroes: Vec<Hero>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl ApiResponse {
    /// Failure envelope: no heroes, no page links, no timestamp
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            prev_page: None,
            next_page: None,
            heroes: Vec::new(),
            last_updated: None,
        }
    }
}

impl From<HeroesResponse> for ApiResponse {
    fn from(resp: HeroesResponse) -> Self {
        let links = resp.page.unwrap_or(PageLinks {
            previous: None,
            next: None,
        });
        Self {
            success: resp.success,
            message: resp.message,
            prev_page: links.previous,
            next_page: links.next,
            heroes: resp.heroes,
            last_updated: Some(resp.last_updated),
        }
    }
}

/// First value for `key` in decoded query pairs
///
/// Repeated keys are not an error; later values are ignored.
pub fn first_query_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

/// Query string for the listing endpoint
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub page: Option<String>,
}

impl ListParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            page: first_query_value(pairs, "page"),
        }
    }
}

/// Query string for the search endpoint
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub name: Option<String>,
}

impl SearchParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            name: first_query_value(pairs, "name"),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub heroes: usize,
    pub pages: u32,
}
