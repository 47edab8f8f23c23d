//! The linear request-creation flow: category → company → form.

pub mod domain;
pub mod wizard;

pub use domain::{RequestField, RequestForm, RequestSubmission, PRESET_TIME_SLOTS};
pub use wizard::{BackAction, RequestWizard, WizardError, WizardStep};
