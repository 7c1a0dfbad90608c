//! Browser-level scenarios over the sample catalogue: filters and free-text
//! search recombining as a user toggles them.

use renthub::listings::{ListingBrowser, ListingProvider, StaticListingCatalog};

fn browser() -> ListingBrowser {
    ListingBrowser::new(StaticListingCatalog::default().list_properties())
}

fn ids(records: &[renthub::listings::PropertyRecord]) -> Vec<&str> {
    records.iter().map(|record| record.id.as_str()).collect()
}

#[test]
fn filters_narrow_then_search_narrows_further() {
    let mut browser = browser();

    let results = browser.apply_filters(0, 5000, 2, 0, false);
    assert_eq!(ids(&results), vec!["1", "2", "3", "4", "5"]);

    let results = browser.search("Chicago");
    assert_eq!(ids(&results), vec!["4"]);

    // Narrower bedroom floor keeps the active search text.
    let results = browser.apply_filters(0, 5000, 4, 0, false);
    assert_eq!(ids(&results), vec!["4"]);
}

#[test]
fn blank_search_returns_the_full_catalogue_even_with_filters_set() {
    let mut browser = browser();
    browser.apply_filters(0, 2000, 0, 0, true);

    let results = browser.search("");
    assert_eq!(results.len(), 5);
}

#[test]
fn zip_search_is_exact_while_location_search_ignores_case() {
    let mut browser = browser();
    assert_eq!(ids(&browser.search("94107")), vec!["1"]);
    assert_eq!(ids(&browser.search("aUsTiN")), vec!["3"]);
    assert!(browser.search("9410").iter().any(|r| r.id.as_str() == "1"));
}

#[test]
fn reset_restores_default_filters_but_keeps_the_search_text() {
    let mut browser = browser();
    browser.search("Los Angeles");
    browser.apply_filters(2000, 5000, 0, 0, false);

    let results = browser.reset_filters();
    assert_eq!(results.len(), 5);

    // The kept text re-conjoins on the next filter change.
    let results = browser.apply_filters(0, 5000, 0, 0, false);
    assert_eq!(ids(&results), vec!["5"]);
}

#[test]
fn smart_home_and_price_band_conjoin() {
    let mut browser = browser();
    let results = browser.apply_filters(1700, 2000, 0, 0, true);
    assert_eq!(ids(&results), vec!["1"]);
}
