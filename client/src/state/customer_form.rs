//! Customer creation form state: the draft record and its submission phase.
//!
//! DESIGN
//! ======
//! The draft is replaced wholesale on every edit (`with_field` consumes and
//! returns a new value) so the page signal only ever holds complete drafts.
//! No client-side validation happens here; the customer API owns that.

#[cfg(test)]
#[path = "customer_form_test.rs"]
mod customer_form_test;

use serde::{Deserialize, Serialize};

/// An unsaved customer record being composed in the form.
///
/// `id` and `created_at` belong to the record shape but are assigned by the
/// customer API; they stay empty on the client and are left out of request
/// bodies while empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDraft {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_at: String,
}

impl CustomerDraft {
    /// Return a new draft with `field` set to `value` and every other field unchanged.
    #[must_use]
    pub fn with_field(mut self, field: CustomerField, value: impl Into<String>) -> Self {
        *self.field_mut(field) = value.into();
        self
    }

    /// Current text of a user-editable field.
    #[must_use]
    pub fn field(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::FirstName => &self.first_name,
            CustomerField::LastName => &self.last_name,
            CustomerField::Email => &self.email,
            CustomerField::Phone => &self.phone,
            CustomerField::Address => &self.address,
            CustomerField::City => &self.city,
        }
    }

    fn field_mut(&mut self, field: CustomerField) -> &mut String {
        match field {
            CustomerField::FirstName => &mut self.first_name,
            CustomerField::LastName => &mut self.last_name,
            CustomerField::Email => &mut self.email,
            CustomerField::Phone => &mut self.phone,
            CustomerField::Address => &mut self.address,
            CustomerField::City => &mut self.city,
        }
    }
}

// =============================================================================
// FIELDS
// =============================================================================

/// Form section a field is rendered under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormSection {
    PersonalDetails,
    Address,
}

impl FormSection {
    /// Heading shown above the section's inputs.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::PersonalDetails => "Personal Details",
            Self::Address => "Address",
        }
    }
}

/// The user-editable customer fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CustomerField {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    City,
}

impl CustomerField {
    /// All editable fields in render order.
    pub const ALL: [Self; 6] = [Self::FirstName, Self::LastName, Self::Email, Self::Phone, Self::Address, Self::City];

    /// JSON / input `name` attribute for the field.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::City => "city",
        }
    }

    /// Resolve a field from its `name` attribute.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Address => "Home address",
            Self::City => "City",
        }
    }

    /// HTML input type.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }

    #[must_use]
    pub fn section(self) -> FormSection {
        match self {
            Self::FirstName | Self::LastName | Self::Email | Self::Phone => FormSection::PersonalDetails,
            Self::Address | Self::City => FormSection::Address,
        }
    }

    /// Fields belonging to `section`, in render order.
    pub fn in_section(section: FormSection) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |field| field.section() == section)
    }
}

// =============================================================================
// FORM STATE
// =============================================================================

/// Submission phase of the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Page-scoped form state held in a single `RwSignal`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerFormState {
    pub draft: CustomerDraft,
    pub phase: SubmitPhase,
}

impl CustomerFormState {
    /// Replace the draft with one where `field` holds `value`.
    pub fn update_field(&mut self, field: CustomerField, value: impl Into<String>) {
        self.draft = std::mem::take(&mut self.draft).with_field(field, value);
    }

    /// Enter the submitting phase and hand back the draft to send.
    ///
    /// Returns `None` when a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<CustomerDraft> {
        if self.is_submitting() {
            return None;
        }
        self.phase = SubmitPhase::Submitting;
        Some(self.draft.clone())
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Label for the submit control.
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() { "Adding..." } else { "Add Customer" }
    }
}
