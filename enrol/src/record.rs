//! Registration record types.
//!
//! [`RegistrationDraft`] is the raw, stringly-typed snapshot of what the
//! user has entered. [`Registration`] is the typed record produced by a
//! successful validation pass.

use chrono::NaiveDate;
use serde::Serialize;

/// The registration form's fields, in display order.
///
/// Doubles as the key namespace of [`ErrorMap`](crate::validation::ErrorMap):
/// one variant per control on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    BirthDate,
    Gender,
    PhoneNumber,
    Country,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Every field, in the order the form displays them.
    pub const ALL: [Field; 9] = [
        Field::FirstName,
        Field::LastName,
        Field::BirthDate,
        Field::Gender,
        Field::PhoneNumber,
        Field::Country,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Stable snake_case name, used as the error-map key in logs.
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::BirthDate => "birth_date",
            Field::Gender => "gender",
            Field::PhoneNumber => "phone_number",
            Field::Country => "country",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm_password",
        }
    }

    /// Human-facing label shown next to the control.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::BirthDate => "Birth Date",
            Field::Gender => "Gender",
            Field::PhoneNumber => "Phone Number",
            Field::Country => "Country",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }

    /// Position within [`Field::ALL`].
    pub fn index(self) -> usize {
        match self {
            Field::FirstName => 0,
            Field::LastName => 1,
            Field::BirthDate => 2,
            Field::Gender => 3,
            Field::PhoneNumber => 4,
            Field::Country => 5,
            Field::Email => 6,
            Field::Password => 7,
            Field::ConfirmPassword => 8,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Gender choice offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// All choices, in display order.
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Wire value stored in a draft.
    pub fn value(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    /// Label shown next to the radio option.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// Parses a wire value back into a choice.
    pub fn from_value(value: &str) -> Option<Gender> {
        Gender::ALL.into_iter().find(|g| g.value() == value)
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Raw field values as currently entered, before any validation.
///
/// Everything is text at this boundary. Selection controls contribute
/// their wire value (for example `"male"` or `"US"`) and an empty string
/// when nothing is chosen; the birth date is ISO `YYYY-MM-DD` text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub gender: String,
    pub phone_number: String,
    pub country: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationDraft {
    /// Returns the raw text of one field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::BirthDate => &self.birth_date,
            Field::Gender => &self.gender,
            Field::PhoneNumber => &self.phone_number,
            Field::Country => &self.country,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }
}

/// A validated, normalized registration.
///
/// Only [`FormValidator`](crate::validation::FormValidator) produces
/// these: text fields are trimmed, the birth date is parsed and the
/// gender is typed. The confirmation password is consumed during
/// validation and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub phone_number: String,
    pub country: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}
