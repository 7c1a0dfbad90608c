use super::domain::{PropertyId, PropertyRecord};

/// Source of listings, injected so the filter/search logic never depends on
/// where records come from. The shipped implementation is a fixed in-memory
/// catalog; a network- or database-backed provider slots in behind the same
/// trait.
pub trait ListingProvider: Send + Sync {
    /// Full collection in stable insertion order.
    fn list_properties(&self) -> Vec<PropertyRecord>;

    fn property(&self, id: &PropertyId) -> Option<PropertyRecord> {
        self.list_properties()
            .into_iter()
            .find(|record| &record.id == id)
    }
}

/// The fixed demo catalog: five listings, ids "1" through "5".
#[derive(Debug, Clone)]
pub struct StaticListingCatalog {
    records: Vec<PropertyRecord>,
}

impl Default for StaticListingCatalog {
    fn default() -> Self {
        Self {
            records: sample_records(),
        }
    }
}

impl StaticListingCatalog {
    /// Hardcoded record shown when the detail view is reached without a
    /// navigation parameter.
    pub fn fallback_record() -> PropertyRecord {
        PropertyRecord {
            id: PropertyId("1".to_string()),
            images: vec![
                "https://images.unsplash.com/photo-1580587771525-78b9dba3b914".to_string(),
                "https://images.unsplash.com/photo-1576941089067-2de3c901e126".to_string(),
                "https://images.unsplash.com/photo-1512917774080-9991f1c4c750".to_string(),
            ],
            price: 1850,
            address: "123 Main Street, San Francisco, CA 94107".to_string(),
            bedrooms: 2,
            bathrooms: 2,
            sqft: 1200,
            is_smart_home: true,
            location: "San Francisco".to_string(),
            zip_code: "94107".to_string(),
            description: "Beautiful modern apartment in the heart of San Francisco. Recently \
                          renovated with high-end finishes and smart home features throughout. \
                          Open floor plan with lots of natural light."
                .to_string(),
            amenities: vec![
                "In-unit Laundry".to_string(),
                "Dishwasher".to_string(),
                "Central AC".to_string(),
                "Hardwood Floors".to_string(),
                "Stainless Steel Appliances".to_string(),
                "Balcony".to_string(),
                "Fitness Center".to_string(),
                "Parking".to_string(),
                "Pet Friendly".to_string(),
            ],
            smart_features: vec![
                "Smart Thermostat".to_string(),
                "Smart Locks".to_string(),
                "Voice-controlled Lighting".to_string(),
                "Smart Appliances".to_string(),
                "Security Cameras".to_string(),
            ],
        }
    }
}

impl ListingProvider for StaticListingCatalog {
    fn list_properties(&self) -> Vec<PropertyRecord> {
        self.records.clone()
    }
}

fn record(
    id: &str,
    image: &str,
    price: u32,
    address: &str,
    bedrooms: u8,
    bathrooms: u8,
    sqft: u32,
    is_smart_home: bool,
    location: &str,
    zip_code: &str,
    description: &str,
    amenities: &[&str],
    smart_features: &[&str],
) -> PropertyRecord {
    PropertyRecord {
        id: PropertyId(id.to_string()),
        images: vec![image.to_string()],
        price,
        address: address.to_string(),
        bedrooms,
        bathrooms,
        sqft,
        is_smart_home,
        location: location.to_string(),
        zip_code: zip_code.to_string(),
        description: description.to_string(),
        amenities: amenities.iter().map(|s| s.to_string()).collect(),
        smart_features: smart_features.iter().map(|s| s.to_string()).collect(),
    }
}

fn sample_records() -> Vec<PropertyRecord> {
    vec![
        record(
            "1",
            "https://images.unsplash.com/photo-1580587771525-78b9dba3b914",
            1850,
            "123 Main Street, San Francisco, CA 94107",
            2,
            2,
            1200,
            true,
            "San Francisco",
            "94107",
            "Renovated two-bedroom with smart home features and an open floor plan.",
            &["In-unit Laundry", "Dishwasher", "Central AC", "Parking"],
            &["Smart Thermostat", "Smart Locks", "Security Cameras"],
        ),
        record(
            "2",
            "https://images.unsplash.com/photo-1568605114967-8130f3a36994",
            2200,
            "456 Park Avenue, New York, NY 10022",
            3,
            2,
            1500,
            false,
            "New York",
            "10022",
            "Spacious midtown three-bedroom steps from the park.",
            &["Doorman", "Elevator", "Dishwasher", "Fitness Center"],
            &[],
        ),
        record(
            "3",
            "https://images.unsplash.com/photo-1512917774080-9991f1c4c750",
            1650,
            "789 Oak Drive, Austin, TX 78704",
            2,
            1,
            950,
            true,
            "Austin",
            "78704",
            "Cozy South Congress bungalow with a connected-home package.",
            &["Backyard", "Pet Friendly", "Hardwood Floors"],
            &["Smart Thermostat", "Voice-controlled Lighting"],
        ),
        record(
            "4",
            "https://images.unsplash.com/photo-1564013799919-ab600027ffc6",
            3100,
            "101 Lake View, Chicago, IL 60611",
            4,
            3,
            2200,
            true,
            "Chicago",
            "60611",
            "Lakefront four-bedroom with panoramic views and full automation.",
            &["In-unit Laundry", "Balcony", "Parking", "Central AC"],
            &["Smart Thermostat", "Smart Locks", "Smart Appliances"],
        ),
        record(
            "5",
            "https://images.unsplash.com/photo-1576941089067-2de3c901e126",
            1950,
            "222 Sunset Blvd, Los Angeles, CA 90046",
            2,
            2,
            1100,
            false,
            "Los Angeles",
            "90046",
            "Bright Hollywood Hills-adjacent two-bedroom with a private patio.",
            &["Patio", "Dishwasher", "Pet Friendly"],
            &[],
        ),
    ]
}
