//! Non-interactive form filling.
//!
//! Plays the role of a view layer: feeds supplied values into a
//! [`FormSession`] in form order, as a user tabbing through the fields
//! would, commits a "render" after each change, then submits.

use serde::Serialize;
use tracing::{debug, trace, warn};

use addr_core::{FormSession, SubmitOutcome, SubmittedAddress, ViewAdvisory};
use addr_dataset::LookupIndex;
use addr_model::{Field, FormRecord};

use crate::logging::redact_value;

/// Values to type into the form. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct FillRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub pincode: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
}

impl FillRequest {
    pub fn value(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Pincode => &self.pincode,
            Field::State => &self.state,
            Field::City => &self.city,
        };
        value.as_deref()
    }
}

/// Advisory raised while handling a change to `field`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvisoryRecord {
    pub field: Field,
    pub advisory: ViewAdvisory,
}

#[derive(Debug, Clone, Serialize)]
pub struct FillReport {
    /// Record as it stood after the last change, before submission.
    pub record: FormRecord,
    pub advisories: Vec<AdvisoryRecord>,
    pub outcome: SubmitOutcome,
}

pub fn run_fill(request: &FillRequest, index: &LookupIndex) -> FillReport {
    let mut session = FormSession::with_index(index);
    let mut advisories = Vec::new();

    for field in Field::ALL {
        let Some(value) = request.value(field) else {
            continue;
        };
        let logged = if field.is_location() {
            value
        } else {
            redact_value(value)
        };
        trace!(%field, value = logged, "change");
        session.on_field_change(field, value);
        for advisory in session.commit_render() {
            trace!(%field, ?advisory, "advisory");
            advisories.push(AdvisoryRecord { field, advisory });
        }
        session.on_blur(field);
    }

    let record = session.record().clone();
    let outcome = session.submit();
    match &outcome {
        SubmitOutcome::Accepted(address) => log_submitted(address),
        SubmitOutcome::Rejected(errors) => warn!(errors = errors.len(), "submission rejected"),
    }
    FillReport {
        record,
        advisories,
        outcome,
    }
}

/// Diagnostic dump of an accepted submission, names redacted unless allowed.
fn log_submitted(address: &SubmittedAddress) {
    let mut dump = address.clone();
    dump.record.first_name = redact_value(&address.record.first_name).to_string();
    dump.record.last_name = redact_value(&address.record.last_name).to_string();
    match serde_json::to_string(&dump) {
        Ok(json) => debug!(record = %json, "submitted record"),
        Err(error) => debug!(%error, "could not serialize submitted record"),
    }
}
