use serde::{Deserialize, Serialize};

use super::domain::PropertyRecord;

/// Free-text match over location, zip code, and street address.
///
/// Location and address compare case-insensitively; the zip code is a plain
/// substring test. A blank query matches everything.
fn text_matches(record: &PropertyRecord, text: &str) -> bool {
    let needle = text.trim();
    if needle.is_empty() {
        return true;
    }
    let lowered = needle.to_lowercase();
    record.location.to_lowercase().contains(&lowered)
        || record.zip_code.contains(needle)
        || record.address.to_lowercase().contains(&lowered)
}

/// Pure search over a collection: the subsequence whose location, zip, or
/// address matches `text`. Blank input returns the collection unfiltered.
/// Result order preserves the input order.
pub fn search(records: &[PropertyRecord], text: &str) -> Vec<PropertyRecord> {
    records
        .iter()
        .filter(|record| text_matches(record, text))
        .cloned()
        .collect()
}

/// Conjunctive listing predicate: every active criterion must hold.
///
/// `min_bedrooms`/`min_bathrooms` of zero mean "any"; a blank `text` leaves
/// the free-text criterion inactive. Filters and search therefore compose as
/// an intersection rather than replacing one another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    pub price_min: u32,
    pub price_max: u32,
    pub min_bedrooms: u8,
    pub min_bathrooms: u8,
    pub smart_home_only: bool,
    pub text: String,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            price_min: 0,
            price_max: 5000,
            min_bedrooms: 0,
            min_bathrooms: 0,
            smart_home_only: false,
            text: String::new(),
        }
    }
}

impl ListingQuery {
    pub fn matches(&self, record: &PropertyRecord) -> bool {
        let price_ok = record.price >= self.price_min && record.price <= self.price_max;
        let bedrooms_ok = self.min_bedrooms == 0 || record.bedrooms >= self.min_bedrooms;
        let bathrooms_ok = self.min_bathrooms == 0 || record.bathrooms >= self.min_bathrooms;
        let smart_ok = !self.smart_home_only || record.is_smart_home;
        price_ok && bedrooms_ok && bathrooms_ok && smart_ok && text_matches(record, &self.text)
    }

    /// Apply the whole query, preserving insertion order.
    pub fn apply(&self, records: &[PropertyRecord]) -> Vec<PropertyRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

/// Home-screen store: the full collection plus the active query, recombined on
/// every change.
///
/// One observed behavior from the original flow is kept deliberately: a blank
/// search returns the full unfiltered collection even while filters are
/// active. A non-blank search narrows the filtered results instead of
/// resetting them.
#[derive(Debug, Clone)]
pub struct ListingBrowser {
    records: Vec<PropertyRecord>,
    query: ListingQuery,
}

impl ListingBrowser {
    pub fn new(records: Vec<PropertyRecord>) -> Self {
        Self {
            records,
            query: ListingQuery::default(),
        }
    }

    pub fn query(&self) -> &ListingQuery {
        &self.query
    }

    /// Update the free-text query and return the visible listings.
    pub fn search(&mut self, text: &str) -> Vec<PropertyRecord> {
        self.query.text = text.to_string();
        if self.query.text.trim().is_empty() {
            return self.records.clone();
        }
        self.query.apply(&self.records)
    }

    /// Update the structured filters and return the visible listings. An
    /// active non-blank search stays conjoined.
    pub fn apply_filters(
        &mut self,
        price_min: u32,
        price_max: u32,
        min_bedrooms: u8,
        min_bathrooms: u8,
        smart_home_only: bool,
    ) -> Vec<PropertyRecord> {
        self.query.price_min = price_min;
        self.query.price_max = price_max;
        self.query.min_bedrooms = min_bedrooms;
        self.query.min_bathrooms = min_bathrooms;
        self.query.smart_home_only = smart_home_only;
        self.query.apply(&self.records)
    }

    /// Restore the default filter set and show everything.
    pub fn reset_filters(&mut self) -> Vec<PropertyRecord> {
        let text = std::mem::take(&mut self.query.text);
        self.query = ListingQuery {
            text,
            ..ListingQuery::default()
        };
        self.records.clone()
    }
}
