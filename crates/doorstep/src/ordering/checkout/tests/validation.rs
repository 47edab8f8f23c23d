use super::common::*;
use crate::ordering::checkout::domain::{CheckoutField, CheckoutForm};
use crate::ordering::checkout::validation::FormValidator;

#[test]
fn fully_populated_form_is_valid() {
    let report = FormValidator.validate(&filled_form());
    assert!(report.is_valid());
    assert!(report.missing().is_empty());
}

#[test]
fn empty_form_flags_all_six_required_fields() {
    let report = FormValidator.validate(&CheckoutForm::default());
    assert!(!report.is_valid());
    assert_eq!(report.missing().len(), 6);
}

#[test]
fn whitespace_only_values_count_as_missing() {
    let form = CheckoutForm {
        building_name: "   ".to_string(),
        house_number: "\t".to_string(),
        floor: " ".to_string(),
        street: "  ".to_string(),
        phone: "\n".to_string(),
        name: "   ".to_string(),
        ..CheckoutForm::default()
    };

    let report = FormValidator.validate(&form);
    assert!(!report.is_valid());
    assert_eq!(report.missing().len(), 6);
    assert!(report.missing().contains(&CheckoutField::BuildingName));
    assert!(report.missing().contains(&CheckoutField::Name));
}

#[test]
fn optional_fields_are_never_validated() {
    let form = CheckoutForm {
        additional_directions: String::new(),
        address_label: String::new(),
        ..filled_form()
    };

    assert!(FormValidator.validate(&form).is_valid());
}

#[test]
fn single_missing_field_is_reported_precisely() {
    let form = CheckoutForm {
        phone: String::new(),
        ..filled_form()
    };

    let report = FormValidator.validate(&form);
    assert_eq!(report.field_keys(), vec!["phone"]);
}

#[test]
fn validation_is_deterministic_and_does_not_mutate() {
    let form = CheckoutForm {
        street: String::new(),
        ..filled_form()
    };
    let before = form.clone();

    let first = FormValidator.validate(&form);
    let second = FormValidator.validate(&form);

    assert_eq!(first, second);
    assert_eq!(form, before);
}
