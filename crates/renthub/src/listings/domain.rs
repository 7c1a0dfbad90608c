use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyId(pub String);

impl PropertyId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Read-only description of a rental listing.
///
/// Records are owned by the catalog; every consumer borrows them. Ids are
/// unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub id: PropertyId,
    pub images: Vec<String>,
    /// Monthly rent in whole dollars.
    pub price: u32,
    pub address: String,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub sqft: u32,
    pub is_smart_home: bool,
    pub location: String,
    pub zip_code: String,
    pub description: String,
    pub amenities: Vec<String>,
    pub smart_features: Vec<String>,
}

impl PropertyRecord {
    /// Minimal view passed to the application wizard through navigation.
    pub fn snapshot(&self) -> PropertySnapshot {
        PropertySnapshot {
            id: self.id.clone(),
            address: self.address.clone(),
            price: self.price,
        }
    }
}

/// The slice of a listing the wizard consumes (address + price), carried as a
/// navigation parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySnapshot {
    pub id: PropertyId,
    pub address: String,
    pub price: u32,
}

impl PropertySnapshot {
    /// Fallback used when navigation arrives without a `property` parameter.
    pub fn fallback() -> Self {
        Self {
            id: PropertyId("1".to_string()),
            address: "123 Main Street, San Francisco, CA 94107".to_string(),
            price: 1850,
        }
    }
}
