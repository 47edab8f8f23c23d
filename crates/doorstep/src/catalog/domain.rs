use serde::{Deserialize, Serialize};

use crate::ordering::cart::{ServiceId, ServiceSnapshot};

/// Top-level grouping shown on the request flow's first step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    Discounts,
    ElectricalPlumbing,
    CleaningPest,
    HomeRepairs,
}

impl ServiceCategory {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Discounts,
            Self::ElectricalPlumbing,
            Self::CleaningPest,
            Self::HomeRepairs,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Discounts => "discounts",
            Self::ElectricalPlumbing => "electrical_plumbing",
            Self::CleaningPest => "cleaning_pest",
            Self::HomeRepairs => "home_repairs",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Discounts => "Discounts",
            Self::ElectricalPlumbing => "Electrical & Plumbing",
            Self::CleaningPest => "Cleaning & Pest",
            Self::HomeRepairs => "Home Repairs",
        }
    }

    /// Accepts either the stable key or the display label, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ordered().into_iter().find(|category| {
            category.key() == normalized || category.label().to_ascii_lowercase() == normalized
        })
    }
}

/// Identifier wrapper for marketplace companies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyId(pub String);

/// A provider listed in the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub category: ServiceCategory,
    pub logo_url: Option<String>,
}

/// A bookable service offered by a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: ServiceId,
    pub company_id: CompanyId,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

impl ServiceOffering {
    /// The payload the cart consumes when this offering is added.
    pub fn snapshot(&self) -> ServiceSnapshot {
        ServiceSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_keys_and_labels() {
        assert_eq!(
            ServiceCategory::parse("cleaning_pest"),
            Some(ServiceCategory::CleaningPest)
        );
        assert_eq!(
            ServiceCategory::parse("Cleaning & Pest"),
            Some(ServiceCategory::CleaningPest)
        );
        assert_eq!(
            ServiceCategory::parse("  HOME_REPAIRS  "),
            Some(ServiceCategory::HomeRepairs)
        );
        assert_eq!(ServiceCategory::parse("gardening"), None);
    }
}
