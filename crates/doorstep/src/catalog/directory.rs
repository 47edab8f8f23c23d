use super::domain::{Company, CompanyId, ServiceCategory, ServiceOffering};
use crate::ordering::cart::ServiceId;

/// In-memory directory of companies and their bookable offerings.
#[derive(Debug, Clone, Default)]
pub struct ServiceCatalog {
    companies: Vec<Company>,
    offerings: Vec<ServiceOffering>,
}

impl ServiceCatalog {
    pub fn new(companies: Vec<Company>, offerings: Vec<ServiceOffering>) -> Self {
        Self {
            companies,
            offerings,
        }
    }

    /// The built-in marketplace directory.
    pub fn standard() -> Self {
        Self::new(standard_companies(), standard_offerings())
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn offerings(&self) -> &[ServiceOffering] {
        &self.offerings
    }

    pub fn company(&self, id: &CompanyId) -> Option<&Company> {
        self.companies.iter().find(|company| &company.id == id)
    }

    pub fn offering(&self, id: &ServiceId) -> Option<&ServiceOffering> {
        self.offerings.iter().find(|offering| &offering.id == id)
    }

    pub fn companies_in(&self, category: ServiceCategory) -> Vec<&Company> {
        self.companies
            .iter()
            .filter(|company| company.category == category)
            .collect()
    }

    pub fn offerings_for(&self, company_id: &CompanyId) -> Vec<&ServiceOffering> {
        self.offerings
            .iter()
            .filter(|offering| &offering.company_id == company_id)
            .collect()
    }

    /// Case-insensitive substring search over company names, optionally
    /// restricted to one category; filtered first and then paged (pages are
    /// 1-based).
    pub fn search_companies(
        &self,
        query: &str,
        category: Option<ServiceCategory>,
        page: usize,
        page_size: usize,
    ) -> Vec<&Company> {
        let query = query.trim().to_lowercase();
        let matched = self
            .companies
            .iter()
            .filter(|company| category.map_or(true, |wanted| company.category == wanted))
            .filter(|company| query.is_empty() || company.name.to_lowercase().contains(&query));
        paged(matched, page, page_size)
    }

    /// Offerings filtered by name query, or by company when no query is given;
    /// a non-empty query wins over the company filter.
    pub fn search_offerings(
        &self,
        query: &str,
        company: Option<&CompanyId>,
        page: usize,
        page_size: usize,
    ) -> Vec<&ServiceOffering> {
        let query = query.trim().to_lowercase();
        let matched: Vec<&ServiceOffering> = if !query.is_empty() {
            self.offerings
                .iter()
                .filter(|offering| offering.name.to_lowercase().contains(&query))
                .collect()
        } else if let Some(company_id) = company {
            self.offerings
                .iter()
                .filter(|offering| &offering.company_id == company_id)
                .collect()
        } else {
            self.offerings.iter().collect()
        };
        paged(matched.into_iter(), page, page_size)
    }
}

fn paged<'a, T, I>(items: I, page: usize, page_size: usize) -> Vec<&'a T>
where
    I: Iterator<Item = &'a T>,
{
    let page = page.max(1);
    items.skip((page - 1) * page_size).take(page_size).collect()
}

fn standard_companies() -> Vec<Company> {
    vec![
        Company {
            id: CompanyId("superfix".to_string()),
            name: "SuperFix LLC".to_string(),
            category: ServiceCategory::ElectricalPlumbing,
            logo_url: Some("https://via.placeholder.com/100?text=SuperFix+Logo".to_string()),
        },
        Company {
            id: CompanyId("sparkleclean".to_string()),
            name: "SparkleClean".to_string(),
            category: ServiceCategory::CleaningPest,
            logo_url: Some("https://via.placeholder.com/100?text=SparkleClean+Logo".to_string()),
        },
        Company {
            id: CompanyId("handyhome".to_string()),
            name: "HandyHome Pros".to_string(),
            category: ServiceCategory::HomeRepairs,
            logo_url: Some("https://via.placeholder.com/100?text=HandyHome+Logo".to_string()),
        },
    ]
}

fn standard_offerings() -> Vec<ServiceOffering> {
    fn offering(
        id: &str,
        company: &str,
        name: &str,
        price: f64,
        description: &str,
    ) -> ServiceOffering {
        ServiceOffering {
            id: ServiceId(id.to_string()),
            company_id: CompanyId(company.to_string()),
            name: name.to_string(),
            price,
            description: Some(description.to_string()),
        }
    }

    vec![
        offering(
            "superfix_ceiling_fan_installation",
            "superfix",
            "Ceiling Fan Installation",
            60.0,
            "Mount and wire a customer-supplied ceiling fan.",
        ),
        offering(
            "superfix_pipe_leak_repair",
            "superfix",
            "Pipe Leak Repair",
            85.0,
            "Locate and seal a single leaking joint or section.",
        ),
        offering(
            "superfix_water_heater_checkup",
            "superfix",
            "Water Heater Checkup",
            120.0,
            "Full inspection with anode and thermostat test.",
        ),
        offering(
            "sparkleclean_deep_home_cleaning",
            "sparkleclean",
            "Deep Home Cleaning",
            150.0,
            "Whole-home detail clean including kitchen degrease.",
        ),
        offering(
            "sparkleclean_sofa_shampoo",
            "sparkleclean",
            "Sofa Shampoo",
            55.0,
            "Steam shampoo for a three-seat sofa.",
        ),
        offering(
            "sparkleclean_pest_control_visit",
            "sparkleclean",
            "Pest Control Visit",
            95.0,
            "Interior perimeter treatment, child and pet safe.",
        ),
        offering(
            "handyhome_door_hinge_fix",
            "handyhome",
            "Door Hinge Fix",
            25.0,
            "Re-seat or replace up to three door hinges.",
        ),
        offering(
            "handyhome_wall_painting",
            "handyhome",
            "Wall Painting (per room)",
            180.0,
            "Two coats on four walls, paint included.",
        ),
        offering(
            "handyhome_ac_filter_replacement",
            "handyhome",
            "AC Filter Replacement",
            40.0,
            "Swap filters on up to two split units.",
        ),
    ]
}
