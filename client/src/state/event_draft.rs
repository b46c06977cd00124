//! Local state for the "Create New Event" form.
//!
//! Inputs are addressed by their `name` attribute; a keystroke overwrites that
//! one field. A field is missing when it is the empty string, mirroring the
//! browser's `required` constraint (whitespace counts as a value).

#[cfg(test)]
#[path = "event_draft_test.rs"]
mod event_draft_test;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventField {
    Title,
    Date,
    Location,
    Description,
}

impl EventField {
    pub const ALL: [Self; 4] = [Self::Title, Self::Date, Self::Location, Self::Description];

    /// Input `name` attribute for this field.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Date => "date",
            Self::Location => "location",
            Self::Description => "description",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Date => "Date",
            Self::Location => "Location",
            Self::Description => "Description",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub location: String,
    pub description: String,
}

impl EventDraft {
    #[must_use]
    pub fn get(&self, field: EventField) -> &str {
        match field {
            EventField::Title => &self.title,
            EventField::Date => &self.date,
            EventField::Location => &self.location,
            EventField::Description => &self.description,
        }
    }

    /// Overwrite exactly `field`.
    pub fn set(&mut self, field: EventField, value: String) {
        let slot = match field {
            EventField::Title => &mut self.title,
            EventField::Date => &mut self.date,
            EventField::Location => &mut self.location,
            EventField::Description => &mut self.description,
        };
        *slot = value;
    }

    /// Overwrite the field whose input is named `name`. Unknown names are ignored.
    pub fn set_by_name(&mut self, name: &str, value: String) -> bool {
        match EventField::from_name(name) {
            Some(field) => {
                self.set(field, value);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn missing_fields(&self) -> Vec<EventField> {
        EventField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }
}

/// Confirmation shown after a complete draft is submitted. Nothing is stored.
pub const SUBMITTED_MESSAGE: &str = "Event logged (publishing is not connected yet).";

/// Handle a submit. Publishing is not wired to a backend yet: a complete
/// draft is only logged.
///
/// # Errors
///
/// Returns the fields still empty when the draft is incomplete.
pub fn submit(draft: &EventDraft) -> Result<(), Vec<EventField>> {
    let missing = draft.missing_fields();
    if !missing.is_empty() {
        return Err(missing);
    }
    match serde_json::to_string(draft) {
        Ok(json) => log::info!("event draft submitted: {json}"),
        Err(e) => log::warn!("event draft submitted but could not be serialized: {e}"),
    }
    Ok(())
}

/// Message listing the missing fields, e.g. `"Please fill in: Date, Location."`.
#[must_use]
pub fn missing_fields_message(missing: &[EventField]) -> String {
    let labels: Vec<&str> = missing.iter().map(|field| field.label()).collect();
    format!("Please fill in: {}.", labels.join(", "))
}
