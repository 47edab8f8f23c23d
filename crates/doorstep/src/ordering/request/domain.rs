use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{Company, ServiceCategory};

/// Preset appointment windows offered before the custom picker.
pub const PRESET_TIME_SLOTS: [&str; 3] = ["8:00 – 9:00", "9:00 – 10:00", "10:00 – 11:00"];

/// Fields whose emptiness blocks request submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestField {
    Title,
    Address,
    TimeSlot,
}

impl RequestField {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Address => "address",
            Self::TimeSlot => "time_slot",
        }
    }
}

/// Draft captured on the wizard's final step. Address and time slot come from
/// pickers, so only the free-text title is trimmed before the presence check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestForm {
    pub title: String,
    pub address: String,
    pub time_slot: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl RequestForm {
    /// Trimmed tags only; empty input is dropped.
    pub fn add_tag(&mut self, tag: &str) {
        let tag = tag.trim();
        if !tag.is_empty() {
            self.tags.push(tag.to_string());
        }
    }

    pub fn remove_tag(&mut self, index: usize) {
        if index < self.tags.len() {
            self.tags.remove(index);
        }
    }

    pub(crate) fn missing_fields(&self) -> BTreeSet<RequestField> {
        let mut missing = BTreeSet::new();
        if self.title.trim().is_empty() {
            missing.insert(RequestField::Title);
        }
        if self.address.is_empty() {
            missing.insert(RequestField::Address);
        }
        if self.time_slot.is_empty() {
            missing.insert(RequestField::TimeSlot);
        }
        missing
    }
}

/// Payload handed to the order-submission collaborator once a draft is
/// accepted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestSubmission {
    pub category: ServiceCategory,
    pub company: Company,
    pub title: String,
    pub address: String,
    pub time_slot: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_trimmed_and_empty_input_dropped() {
        let mut form = RequestForm::default();
        form.add_tag("  High Rated ");
        form.add_tag("   ");
        form.add_tag("Urgent");

        assert_eq!(form.tags, vec!["High Rated", "Urgent"]);

        form.remove_tag(0);
        assert_eq!(form.tags, vec!["Urgent"]);

        form.remove_tag(10);
        assert_eq!(form.tags, vec!["Urgent"]);
    }
}
