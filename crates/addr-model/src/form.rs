//! Mutable per-session form state.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::Field;

/// Current values of the address form.
///
/// `state` and `city` hold dataset ids, or are empty when unselected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    pub first_name: String,
    pub last_name: String,
    pub pincode: String,
    pub state: String,
    pub city: String,
}

impl FormRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Pincode => &self.pincode,
            Field::State => &self.state,
            Field::City => &self.city,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Pincode => &mut self.pincode,
            Field::State => &mut self.state,
            Field::City => &mut self.city,
        };
        *slot = value.into();
    }
}

/// Per-field error messages. Absence means no error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors {
    messages: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    /// Record the outcome of a validation pass for one field.
    pub fn record(&mut self, field: Field, message: Option<String>) {
        match message {
            Some(message) => self.set(field, message),
            None => {
                self.clear(field);
            }
        }
    }

    /// Returns true if an error was present.
    pub fn clear(&mut self, field: Field) -> bool {
        self.messages.remove(&field).is_some()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.messages.contains_key(&field)
    }

    pub fn has_any(&self) -> bool {
        !self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterate in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.messages
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

/// Fields the user has blurred at least once.
///
/// Grows monotonically until the session is reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldTouched {
    fields: BTreeSet<Field>,
}

impl FieldTouched {
    pub fn mark(&mut self, field: Field) {
        self.fields.insert(field);
    }

    pub fn mark_all(&mut self) {
        self.fields.extend(Field::ALL);
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.iter().copied()
    }
}
