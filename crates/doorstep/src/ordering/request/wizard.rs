use std::collections::BTreeSet;

use serde::Serialize;

use super::domain::{RequestField, RequestForm, RequestSubmission};
use crate::catalog::{Company, ServiceCategory};

/// Steps of the linear request-creation flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    CategorySelect,
    CompanySelect,
    FormEntry,
}

impl WizardStep {
    pub const fn index(self) -> u8 {
        match self {
            Self::CategorySelect => 0,
            Self::CompanySelect => 1,
            Self::FormEntry => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CategorySelect => "Select Category",
            Self::CompanySelect => "Select Company",
            Self::FormEntry => "Request Details",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("wizard is at '{}' but the action requires '{}'", .found.label(), .expected.label())]
    OutOfOrder {
        expected: WizardStep,
        found: WizardStep,
    },
    #[error("required request fields missing: {}", .0.iter().map(|field| field.key()).collect::<Vec<_>>().join(", "))]
    MissingFields(BTreeSet<RequestField>),
}

/// Outcome of a back navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackAction {
    /// The wizard moved to an earlier step.
    SteppedBack(WizardStep),
    /// Already at the first step; leaving the flow is the navigator's call.
    ExitWizard,
}

/// Linear category → company → form wizard. Each advance requires the step's
/// prerequisite selection; an out-of-order call is refused and leaves the
/// state untouched.
#[derive(Debug, Clone, Default)]
pub struct RequestWizard {
    step: WizardStep,
    selected_category: Option<ServiceCategory>,
    selected_company: Option<Company>,
}

impl RequestWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn selected_category(&self) -> Option<ServiceCategory> {
        self.selected_category
    }

    pub fn selected_company(&self) -> Option<&Company> {
        self.selected_company.as_ref()
    }

    /// Records the category and moves on to company selection.
    pub fn select_category(&mut self, category: ServiceCategory) -> Result<(), WizardError> {
        self.expect_step(WizardStep::CategorySelect)?;
        self.selected_category = Some(category);
        self.step = WizardStep::CompanySelect;
        Ok(())
    }

    /// Records the company and moves on to the request form.
    pub fn select_company(&mut self, company: Company) -> Result<(), WizardError> {
        self.expect_step(WizardStep::CompanySelect)?;
        self.selected_company = Some(company);
        self.step = WizardStep::FormEntry;
        Ok(())
    }

    /// Steps back one screen, dropping the selection that step recorded. At
    /// the first step nothing changes and the caller is told to exit.
    pub fn back(&mut self) -> BackAction {
        match self.step {
            WizardStep::FormEntry => {
                self.selected_company = None;
                self.step = WizardStep::CompanySelect;
                BackAction::SteppedBack(self.step)
            }
            WizardStep::CompanySelect => {
                self.selected_category = None;
                self.step = WizardStep::CategorySelect;
                BackAction::SteppedBack(self.step)
            }
            WizardStep::CategorySelect => BackAction::ExitWizard,
        }
    }

    /// Accepts the draft when title, address, and time slot are present. The
    /// wizard stays on the form step either way; navigating away after a
    /// successful submission belongs to the caller.
    pub fn submit(&self, form: &RequestForm) -> Result<RequestSubmission, WizardError> {
        self.expect_step(WizardStep::FormEntry)?;

        let missing = form.missing_fields();
        if !missing.is_empty() {
            return Err(WizardError::MissingFields(missing));
        }

        let category = match self.selected_category {
            Some(category) => category,
            None => {
                return Err(WizardError::OutOfOrder {
                    expected: WizardStep::CategorySelect,
                    found: self.step,
                })
            }
        };
        let company = match &self.selected_company {
            Some(company) => company.clone(),
            None => {
                return Err(WizardError::OutOfOrder {
                    expected: WizardStep::CompanySelect,
                    found: self.step,
                })
            }
        };

        Ok(RequestSubmission {
            category,
            company,
            title: form.title.trim().to_string(),
            address: form.address.clone(),
            time_slot: form.time_slot.clone(),
            description: form.description.clone(),
            tags: form.tags.clone(),
        })
    }

    fn expect_step(&self, expected: WizardStep) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::OutOfOrder {
                expected,
                found: self.step,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ServiceCatalog;

    fn cleaning_company() -> Company {
        ServiceCatalog::standard()
            .companies_in(ServiceCategory::CleaningPest)
            .first()
            .cloned()
            .cloned()
            .expect("standard catalog has a cleaning company")
    }

    fn filled_request() -> RequestForm {
        RequestForm {
            title: "Broken AC".to_string(),
            address: "123 Main St".to_string(),
            time_slot: "9:00 – 10:00".to_string(),
            description: "Unit leaks near the window".to_string(),
            tags: vec!["Urgent".to_string()],
        }
    }

    #[test]
    fn company_selection_before_category_is_rejected() {
        let mut wizard = RequestWizard::new();

        let error = wizard
            .select_company(cleaning_company())
            .expect_err("selection out of order");
        assert_eq!(
            error,
            WizardError::OutOfOrder {
                expected: WizardStep::CompanySelect,
                found: WizardStep::CategorySelect,
            }
        );
        assert_eq!(wizard.step(), WizardStep::CategorySelect);
        assert!(wizard.selected_company().is_none());
    }

    #[test]
    fn full_walk_reaches_the_form_step() {
        let mut wizard = RequestWizard::new();
        wizard
            .select_category(ServiceCategory::CleaningPest)
            .expect("category at step 0");
        wizard
            .select_company(cleaning_company())
            .expect("company at step 1");

        assert_eq!(wizard.step(), WizardStep::FormEntry);
        assert_eq!(wizard.step().index(), 2);
        assert_eq!(
            wizard.selected_category(),
            Some(ServiceCategory::CleaningPest)
        );
    }

    #[test]
    fn back_drops_the_selection_recorded_by_the_step() {
        let mut wizard = RequestWizard::new();
        wizard
            .select_category(ServiceCategory::HomeRepairs)
            .expect("category");
        wizard
            .select_company(cleaning_company())
            .expect("company");

        assert_eq!(
            wizard.back(),
            BackAction::SteppedBack(WizardStep::CompanySelect)
        );
        assert!(wizard.selected_company().is_none());
        assert_eq!(wizard.selected_category(), Some(ServiceCategory::HomeRepairs));

        assert_eq!(
            wizard.back(),
            BackAction::SteppedBack(WizardStep::CategorySelect)
        );
        assert!(wizard.selected_category().is_none());

        assert_eq!(wizard.back(), BackAction::ExitWizard);
        assert_eq!(wizard.step(), WizardStep::CategorySelect);
    }

    #[test]
    fn submit_before_the_form_step_is_rejected() {
        let wizard = RequestWizard::new();
        let error = wizard
            .submit(&filled_request())
            .expect_err("submit out of order");
        assert!(matches!(error, WizardError::OutOfOrder { .. }));
    }

    #[test]
    fn submit_reports_exactly_the_missing_fields() {
        let mut wizard = RequestWizard::new();
        wizard
            .select_category(ServiceCategory::CleaningPest)
            .expect("category");
        wizard
            .select_company(cleaning_company())
            .expect("company");

        let draft = RequestForm {
            title: "   ".to_string(),
            ..filled_request()
        };
        match wizard.submit(&draft) {
            Err(WizardError::MissingFields(missing)) => {
                assert_eq!(missing.len(), 1);
                assert!(missing.contains(&RequestField::Title));
            }
            other => panic!("expected missing title, got {other:?}"),
        }
        assert_eq!(wizard.step(), WizardStep::FormEntry, "wizard stays put");
    }

    #[test]
    fn submit_returns_the_collaborator_payload() {
        let mut wizard = RequestWizard::new();
        wizard
            .select_category(ServiceCategory::CleaningPest)
            .expect("category");
        let company = cleaning_company();
        wizard.select_company(company.clone()).expect("company");

        let submission = wizard
            .submit(&filled_request())
            .expect("draft accepted");
        assert_eq!(submission.category, ServiceCategory::CleaningPest);
        assert_eq!(submission.company, company);
        assert_eq!(submission.title, "Broken AC");
        assert_eq!(submission.time_slot, "9:00 – 10:00");
    }
}
