use std::collections::BTreeSet;

use serde::Serialize;

use super::domain::{CheckoutField, CheckoutForm};

const REQUIRED_FIELDS: [CheckoutField; 6] = [
    CheckoutField::BuildingName,
    CheckoutField::HouseNumber,
    CheckoutField::Floor,
    CheckoutField::Street,
    CheckoutField::Phone,
    CheckoutField::Name,
];

/// Outcome of validating a checkout form snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormReport {
    missing: BTreeSet<CheckoutField>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn missing(&self) -> &BTreeSet<CheckoutField> {
        &self.missing
    }

    pub fn field_keys(&self) -> Vec<&'static str> {
        self.missing.iter().map(|field| field.key()).collect()
    }
}

/// Stateless validator over the required-field set. A required field is in
/// error iff its trimmed value is empty; the two optional free-text fields are
/// never inspected.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormValidator;

impl FormValidator {
    pub fn validate(&self, form: &CheckoutForm) -> FormReport {
        let missing = REQUIRED_FIELDS
            .into_iter()
            .filter(|field| Self::value_of(form, *field).trim().is_empty())
            .collect();

        FormReport { missing }
    }

    fn value_of(form: &CheckoutForm, field: CheckoutField) -> &str {
        match field {
            CheckoutField::BuildingName => &form.building_name,
            CheckoutField::HouseNumber => &form.house_number,
            CheckoutField::Floor => &form.floor,
            CheckoutField::Street => &form.street,
            CheckoutField::Phone => &form.phone,
            CheckoutField::Name => &form.name,
        }
    }
}
