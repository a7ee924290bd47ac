//! Form session state container.
//!
//! A [`FormSession`] owns the record, the per-field errors and the touched
//! set. Validation runs in two tiers: typing into a field optimistically
//! clears its error, while blur and submit re-run the rules.
//!
//! Focus hints are not delivered inline. They queue until the view layer has
//! committed its re-render and calls [`FormSession::commit_render`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use addr_dataset::LookupIndex;
use addr_model::{City, Field, FieldErrors, FieldTouched, FormRecord, State};
use addr_validate::{Issue, validate_field};

use crate::resolve::{Resolution, resolve_change};

/// Non-binding hint to the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewAdvisory {
    /// Move input focus to the city selector.
    FocusCity,
}

/// Accepted submission with display names resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAddress {
    #[serde(flatten)]
    pub record: FormRecord,
    pub state_name: Option<String>,
    pub city_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "payload", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Accepted(SubmittedAddress),
    Rejected(FieldErrors),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

#[derive(Debug, Clone)]
pub struct FormSession<'a> {
    index: &'a LookupIndex,
    record: FormRecord,
    errors: FieldErrors,
    touched: FieldTouched,
    advisories: Vec<ViewAdvisory>,
}

impl FormSession<'static> {
    /// Session over the built-in dataset.
    pub fn new() -> Self {
        Self::with_index(LookupIndex::builtin())
    }
}

impl Default for FormSession<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> FormSession<'a> {
    pub fn with_index(index: &'a LookupIndex) -> Self {
        Self {
            index,
            record: FormRecord::default(),
            errors: FieldErrors::default(),
            touched: FieldTouched::default(),
            advisories: Vec::new(),
        }
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn touched(&self) -> &FieldTouched {
        &self.touched
    }

    /// Error text to render: only for touched fields.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.touched.contains(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn states(&self) -> &'a [State] {
        self.index.states()
    }

    /// Cities selectable for the current state.
    pub fn available_cities(&self) -> &'a [City] {
        if self.record.state.is_empty() {
            return &[];
        }
        self.index.cities_by_state(&self.record.state)
    }

    pub fn city_input_enabled(&self) -> bool {
        !self.record.state.is_empty()
    }

    /// Plain setter with optimistic error clearing.
    pub fn update_field(&mut self, field: Field, value: &str) {
        self.record.set(field, value);
        if self.errors.clear(field) {
            debug!(%field, "cleared error on edit");
        }
    }

    /// Change event from the view. Location fields go through the cascade.
    pub fn on_field_change(&mut self, field: Field, value: &str) {
        match resolve_change(&self.record, self.index, field, value) {
            Some(resolution) => {
                self.errors.clear(field);
                self.apply(resolution);
            }
            None => self.update_field(field, value),
        }
    }

    /// Blur event: mark touched and validate just this field.
    pub fn on_blur(&mut self, field: Field) {
        self.touched.mark(field);
        let issue = validate_field(field, self.record.get(field));
        self.errors
            .record(field, issue.as_ref().map(Issue::message));
    }

    /// Validate every field and, if all pass, produce the submission.
    ///
    /// Errors left by the cascade are discarded in favor of the fresh pass.
    pub fn submit(&mut self) -> SubmitOutcome {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            if let Some(issue) = validate_field(field, self.record.get(field)) {
                errors.set(field, issue.message());
            }
        }
        self.errors = errors;
        self.touched.mark_all();

        if self.errors.has_any() {
            debug!(errors = self.errors.len(), "submission rejected");
            return SubmitOutcome::Rejected(self.errors.clone());
        }

        let submitted = SubmittedAddress {
            record: self.record.clone(),
            state_name: self
                .index
                .state_by_id(&self.record.state)
                .map(|state| state.name.clone()),
            city_name: self
                .index
                .city_by_id(&self.record.city)
                .map(|city| city.name.clone()),
        };
        // Names stay out of library logs; the view layer decides what to dump.
        info!(
            pincode = %submitted.record.pincode,
            state = %submitted.record.state,
            city = %submitted.record.city,
            state_name = submitted.state_name.as_deref().unwrap_or("-"),
            city_name = submitted.city_name.as_deref().unwrap_or("-"),
            "address submitted"
        );
        SubmitOutcome::Accepted(submitted)
    }

    /// Called by the view after a re-render has been committed.
    ///
    /// Returns the advisories queued since the previous commit.
    pub fn commit_render(&mut self) -> Vec<ViewAdvisory> {
        std::mem::take(&mut self.advisories)
    }

    pub fn pending_advisories(&self) -> &[ViewAdvisory] {
        &self.advisories
    }

    /// Back to an empty form.
    pub fn reset(&mut self) {
        self.record = FormRecord::default();
        self.errors = FieldErrors::default();
        self.touched = FieldTouched::default();
        self.advisories.clear();
    }

    fn apply(&mut self, resolution: Resolution) {
        self.record = resolution.record;
        for field in resolution.cleared_errors {
            self.errors.clear(field);
        }
        for (field, issue) in resolution.set_errors {
            self.errors.set(field, issue.message());
        }
        if resolution.focus_city {
            self.advisories.push(ViewAdvisory::FocusCity);
        }
    }
}
