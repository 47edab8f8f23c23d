use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::directory::ServiceCatalog;
use super::domain::{Company, CompanyId, ServiceCategory, ServiceOffering};
use crate::ordering::cart::ServiceId;

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read catalog export: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid catalog CSV data: {}", err),
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Builds a catalog from a partner CSV export with `Company`, `Category`,
/// `Service`, `Price`, and optional `Description` columns. Rows with a
/// category the marketplace does not list are skipped; duplicate service rows
/// keep the first occurrence.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ServiceCatalog, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ServiceCatalog, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut companies: Vec<Company> = Vec::new();
        let mut offerings: Vec<ServiceOffering> = Vec::new();
        let mut seen_services: HashSet<ServiceId> = HashSet::new();

        for record in csv_reader.deserialize::<CatalogRow>() {
            let row = record?;

            let category = match ServiceCategory::parse(&row.category) {
                Some(category) => category,
                None => continue,
            };

            let company_id = CompanyId(slug(&row.company));
            if !companies.iter().any(|company| company.id == company_id) {
                companies.push(Company {
                    id: company_id.clone(),
                    name: row.company.clone(),
                    category,
                    logo_url: None,
                });
            }

            let service_id = ServiceId(format!("{}_{}", company_id.0, slug(&row.service)));
            if !seen_services.insert(service_id.clone()) {
                continue;
            }

            offerings.push(ServiceOffering {
                id: service_id,
                company_id,
                name: row.service,
                price: row.price,
                description: row.description,
            });
        }

        Ok(ServiceCatalog::new(companies, offerings))
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Company")]
    company: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Service")]
    service: String,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(
        rename = "Description",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    description: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn slug(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.trim().to_ascii_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
        } else if !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }
    }
    out.trim_end_matches('_').to_string()
}
