//! The service catalog: companies, their bookable offerings, and the partner
//! CSV importer that can hydrate the directory.

mod directory;
mod domain;
mod import;

pub use directory::ServiceCatalog;
pub use domain::{Company, CompanyId, ServiceCategory, ServiceOffering};
pub use import::{CatalogImportError, CatalogImporter};
