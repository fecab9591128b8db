//! Immutable hero catalogue
//!
//! Holds the fixed page partition of all heroes plus the full
//! record set in canonical order. Built once at startup and shared
//! read-only behind an `Arc`.

use crate::core::error::{HeroesError, Result};
use crate::core::types::Hero;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

/// Reference dataset shipped with the binary
const BUILTIN_CATALOGUE: &str = include_str!("../../data/heroes.json");

/// On-disk catalogue document
#[derive(Debug, Deserialize)]
struct CatalogueDocument {
    pages: Vec<PageDocument>,
}

#[derive(Debug, Deserialize)]
struct PageDocument {
    page: u32,
    heroes: Vec<Hero>,
}

/// Page-partitioned hero store
#[derive(Debug, Clone)]
pub struct Catalogue {
    pages: BTreeMap<u32, Vec<Hero>>,
    all: Vec<Hero>,
    last_page: u32,
}

impl Catalogue {
    /// Build a catalogue from pages given in order, numbered from 1
    ///
    /// # Errors
    ///
    /// - `InvalidCatalogue`: no pages, more pages than `u32` can number,
    ///   or a hero id appears twice
    pub fn from_pages(pages: Vec<Vec<Hero>>) -> Result<Self> {
        if pages.is_empty() {
            return Err(HeroesError::InvalidCatalogue(
                "Catalogue must contain at least one page".to_string(),
            ));
        }

        let last_page = u32::try_from(pages.len()).map_err(|_| {
            HeroesError::InvalidCatalogue(format!("Too many pages: {}", pages.len()))
        })?;

        let mut seen = HashSet::new();
        for hero in pages.iter().flatten() {
            if !seen.insert(hero.id) {
                return Err(HeroesError::InvalidCatalogue(format!(
                    "Duplicate hero id: {}",
                    hero.id
                )));
            }
        }

        let all = pages.iter().flatten().cloned().collect();
        let pages = (1u32..).zip(pages).collect();

        Ok(Self {
            pages,
            all,
            last_page,
        })
    }

    /// Parse a catalogue from its JSON document form
    ///
    /// Pages may appear in any order in the document but their numbers
    /// must form the contiguous range `1..=n`.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut doc: CatalogueDocument = serde_json::from_str(json)?;
        doc.pages.sort_by_key(|p| p.page);

        for (expected, page) in (1u32..).zip(&doc.pages) {
            if page.page != expected {
                return Err(HeroesError::InvalidCatalogue(format!(
                    "Page numbers must be contiguous from 1: expected {expected}, found {}",
                    page.page
                )));
            }
        }

        Self::from_pages(doc.pages.into_iter().map(|p| p.heroes).collect())
    }

    /// Load a catalogue document from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            HeroesError::InvalidCatalogue(format!(
                "Failed to read catalogue {}: {e}",
                path.display()
            ))
        })?;

        Self::from_json(&contents)
    }

    /// The reference dataset embedded at compile time
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOGUE)
    }

    /// Heroes on page `n`, or `None` outside `1..=last_page()`
    pub fn page_of(&self, n: u32) -> Option<&[Hero]> {
        self.pages.get(&n).map(Vec::as_slice)
    }

    /// Every hero, in page order
    pub fn all_records(&self) -> &[Hero] {
        &self.all
    }

    pub fn last_page(&self) -> u32 {
        self.last_page
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}
