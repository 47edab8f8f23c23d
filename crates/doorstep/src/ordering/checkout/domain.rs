use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback pin shown until a real device location arrives.
pub const FALLBACK_LATITUDE: f64 = 25.276987;
pub const FALLBACK_LONGITUDE: f64 = 55.296249;

/// Identifier wrapper for placed orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingType {
    #[default]
    Apartment,
    House,
    Office,
}

impl BuildingType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::House => "House",
            Self::Office => "Office",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for GeoPoint {
    fn default() -> Self {
        Self {
            latitude: FALLBACK_LATITUDE,
            longitude: FALLBACK_LONGITUDE,
        }
    }
}

/// Delivery address and contact details collected at checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutForm {
    #[serde(default)]
    pub building_type: BuildingType,
    #[serde(default)]
    pub building_name: String,
    #[serde(default)]
    pub house_number: String,
    #[serde(default)]
    pub floor: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub additional_directions: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address_label: String,
    #[serde(default)]
    pub location: GeoPoint,
}

/// Fields whose trimmed emptiness blocks order placement. Optional fields
/// (`additional_directions`, `address_label`) are deliberately not listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutField {
    BuildingName,
    HouseNumber,
    Floor,
    Street,
    Phone,
    Name,
}

impl CheckoutField {
    pub const fn key(self) -> &'static str {
        match self {
            Self::BuildingName => "building_name",
            Self::HouseNumber => "house_number",
            Self::Floor => "floor",
            Self::Street => "street",
            Self::Phone => "phone",
            Self::Name => "name",
        }
    }
}
