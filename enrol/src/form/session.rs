//! The registration form session.

use chrono::NaiveDate;

use crate::country::{COUNTRY_OPTIONS, CountryOption};
use crate::record::{Field, Gender, Registration, RegistrationDraft};
use crate::validation::{ErrorMap, FormValidator};

use super::event::{EditOutcome, Key, Modifiers};
use super::fields::{RadioField, SecretField, SelectField, TextField};

/// The registration form: nine fields, focus traversal, and the
/// submit/reset lifecycle.
///
/// The session owns all mutable state (values, cursors, selections,
/// errors, reveal toggles); the validator stays pure. A failed submit
/// applies its [`ErrorMap`] onto the fields wholesale, a successful
/// one resets the form and hands back the accepted record.
///
/// # Example
///
/// ```ignore
/// let mut form = RegistrationForm::new();
/// loop {
///     match form.handle_key(key, modifiers) {
///         EditOutcome::Submitted => match form.submit() {
///             Ok(record) => finish(record),
///             Err(errors) => log::debug!("{} field(s) need attention", errors.len()),
///         },
///         _ => {}
///     }
/// }
/// ```
#[derive(Debug)]
pub struct RegistrationForm {
    pub first_name: TextField,
    pub last_name: TextField,
    pub birth_date: TextField,
    pub gender: RadioField,
    pub phone_number: TextField,
    pub country: SelectField,
    pub email: TextField,
    pub password: SecretField,
    pub confirm_password: SecretField,
    focus: usize,
    validator: FormValidator,
}

impl RegistrationForm {
    /// Form with the standard rules and the built-in country list.
    pub fn new() -> Self {
        Self::with_countries(COUNTRY_OPTIONS)
    }

    /// Form offering the given countries; the selection is validated
    /// against the same list.
    pub fn with_countries(countries: &[CountryOption]) -> Self {
        Self {
            first_name: TextField::new(),
            last_name: TextField::new(),
            birth_date: TextField::with_placeholder("YYYY-MM-DD"),
            gender: RadioField::with_options(Gender::ALL.map(Gender::label)),
            phone_number: TextField::new(),
            country: SelectField::with_options(countries).placeholder("Select your country"),
            email: TextField::new(),
            password: SecretField::new(),
            confirm_password: SecretField::new(),
            focus: 0,
            validator: FormValidator::new().restrict_countries(countries),
        }
    }

    // === Focus ===

    /// The field that currently receives editing keys.
    pub fn focused(&self) -> Field {
        Field::ALL[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Field::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + Field::ALL.len() - 1) % Field::ALL.len();
    }

    pub fn focus_field(&mut self, field: Field) {
        self.focus = field.index();
    }

    // === Lifecycle ===

    /// Snapshot of the raw values currently held by the fields.
    pub fn draft(&self) -> RegistrationDraft {
        RegistrationDraft {
            first_name: self.first_name.value().to_string(),
            last_name: self.last_name.value().to_string(),
            birth_date: self.birth_date.value().to_string(),
            gender: self
                .gender
                .selected()
                .and_then(|i| Gender::ALL.get(i).copied())
                .map(|g| g.value().to_string())
                .unwrap_or_default(),
            phone_number: self.phone_number.value().to_string(),
            country: self
                .country
                .selected_value()
                .map(str::to_string)
                .unwrap_or_default(),
            email: self.email.value().to_string(),
            password: self.password.value().to_string(),
            confirm_password: self.confirm_password.value().to_string(),
        }
    }

    /// Validates the current input against the wall-clock date.
    ///
    /// On failure every failing field gets its message and the map is
    /// returned; on success the form resets and the accepted record is
    /// returned.
    pub fn submit(&mut self) -> Result<Registration, ErrorMap> {
        let result = self.validator.validate(&self.draft());
        self.apply_result(result)
    }

    /// [`submit`](Self::submit) with an injected "today", for
    /// deterministic age-boundary behavior.
    pub fn submit_at(&mut self, today: NaiveDate) -> Result<Registration, ErrorMap> {
        let result = self.validator.validate_at(&self.draft(), today);
        self.apply_result(result)
    }

    fn apply_result(
        &mut self,
        result: Result<Registration, ErrorMap>,
    ) -> Result<Registration, ErrorMap> {
        match result {
            Ok(record) => {
                log::debug!("submission accepted, resetting form");
                self.reset();
                Ok(record)
            }
            Err(errors) => {
                log::debug!("submission rejected: {} field(s)", errors.len());
                self.apply_errors(&errors);
                Err(errors)
            }
        }
    }

    /// Clears every field, selection, error, and reveal toggle, and
    /// moves focus back to the first field.
    pub fn reset(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
        self.birth_date.clear();
        self.gender.clear();
        self.phone_number.clear();
        self.country.clear();
        self.email.clear();
        self.password.clear();
        self.confirm_password.clear();
        self.focus = 0;
    }

    // === Errors ===

    /// Applies one validation pass wholesale: failing fields get their
    /// message, every other field's error is cleared.
    pub fn apply_errors(&mut self, errors: &ErrorMap) {
        for field in Field::ALL {
            match errors.message(field) {
                Some(message) => self.set_field_error(field, message.to_string()),
                None => self.clear_field_error(field),
            }
        }
    }

    /// The message currently shown beneath a field, if any.
    pub fn field_error(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => self.first_name.error(),
            Field::LastName => self.last_name.error(),
            Field::BirthDate => self.birth_date.error(),
            Field::Gender => self.gender.error(),
            Field::PhoneNumber => self.phone_number.error(),
            Field::Country => self.country.error(),
            Field::Email => self.email.error(),
            Field::Password => self.password.text().error(),
            Field::ConfirmPassword => self.confirm_password.text().error(),
        }
    }

    pub fn has_errors(&self) -> bool {
        Field::ALL.iter().any(|f| self.field_error(*f).is_some())
    }

    fn set_field_error(&mut self, field: Field, message: String) {
        match field {
            Field::FirstName => self.first_name.set_error(message),
            Field::LastName => self.last_name.set_error(message),
            Field::BirthDate => self.birth_date.set_error(message),
            Field::Gender => self.gender.set_error(message),
            Field::PhoneNumber => self.phone_number.set_error(message),
            Field::Country => self.country.set_error(message),
            Field::Email => self.email.set_error(message),
            Field::Password => self.password.text_mut().set_error(message),
            Field::ConfirmPassword => self.confirm_password.text_mut().set_error(message),
        }
    }

    fn clear_field_error(&mut self, field: Field) {
        match field {
            Field::FirstName => self.first_name.clear_error(),
            Field::LastName => self.last_name.clear_error(),
            Field::BirthDate => self.birth_date.clear_error(),
            Field::Gender => self.gender.clear_error(),
            Field::PhoneNumber => self.phone_number.clear_error(),
            Field::Country => self.country.clear_error(),
            Field::Email => self.email.clear_error(),
            Field::Password => self.password.text_mut().clear_error(),
            Field::ConfirmPassword => self.confirm_password.text_mut().clear_error(),
        }
    }

    // === Key routing ===

    /// Routes one key to the focused field.
    ///
    /// Tab/BackTab move focus, Enter reports [`EditOutcome::Submitted`]
    /// for the caller to act on, Ctrl+U toggles reveal on a focused
    /// secret field; everything else is editing on the focused field.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> EditOutcome {
        match key {
            Key::Tab if modifiers.shift => {
                self.focus_prev();
                EditOutcome::Handled
            }
            Key::Tab => {
                self.focus_next();
                EditOutcome::Handled
            }
            Key::BackTab => {
                self.focus_prev();
                EditOutcome::Handled
            }
            Key::Enter => EditOutcome::Submitted,
            Key::Char('u') if modifiers.ctrl => self.toggle_reveal(),
            _ => match self.focused() {
                Field::Gender => self.handle_gender_key(key, modifiers),
                Field::Country => self.handle_country_key(key, modifiers),
                field => self.handle_text_key(field, key, modifiers),
            },
        }
    }

    fn toggle_reveal(&mut self) -> EditOutcome {
        match self.focused() {
            Field::Password => {
                self.password.toggle_reveal();
                EditOutcome::Changed
            }
            Field::ConfirmPassword => {
                self.confirm_password.toggle_reveal();
                EditOutcome::Changed
            }
            _ => EditOutcome::Ignored,
        }
    }

    fn handle_gender_key(&mut self, key: Key, modifiers: Modifiers) -> EditOutcome {
        if !modifiers.none() || self.gender.is_empty() {
            return EditOutcome::Ignored;
        }
        match key {
            Key::Up => {
                self.gender.select_prev();
                EditOutcome::Changed
            }
            Key::Down => {
                self.gender.select_next();
                EditOutcome::Changed
            }
            Key::Home => {
                self.gender.select(0);
                EditOutcome::Changed
            }
            Key::End => {
                self.gender.select(self.gender.len() - 1);
                EditOutcome::Changed
            }
            _ => EditOutcome::Ignored,
        }
    }

    fn handle_country_key(&mut self, key: Key, modifiers: Modifiers) -> EditOutcome {
        // Shift stays allowed so capitalized letter jumps work.
        if modifiers.ctrl || modifiers.alt || self.country.is_empty() {
            return EditOutcome::Ignored;
        }
        match key {
            Key::Up => {
                self.country.select_prev();
                EditOutcome::Changed
            }
            Key::Down => {
                self.country.select_next();
                EditOutcome::Changed
            }
            Key::Home => {
                self.country.select(0);
                EditOutcome::Changed
            }
            Key::End => {
                self.country.select(self.country.len() - 1);
                EditOutcome::Changed
            }
            Key::Char(c) if c.is_ascii_alphabetic() => {
                if self.country.select_by_letter(c) {
                    EditOutcome::Changed
                } else {
                    EditOutcome::Handled
                }
            }
            _ => EditOutcome::Ignored,
        }
    }

    fn handle_text_key(&mut self, field: Field, key: Key, modifiers: Modifiers) -> EditOutcome {
        let Some(text) = self.text_state_mut(field) else {
            return EditOutcome::Ignored;
        };
        match key {
            Key::Char(c) if !modifiers.ctrl && !modifiers.alt => {
                text.insert_char(c);
                EditOutcome::Changed
            }
            Key::Backspace => {
                if text.delete_back() {
                    EditOutcome::Changed
                } else {
                    EditOutcome::Handled
                }
            }
            Key::Delete => {
                if text.delete_forward() {
                    EditOutcome::Changed
                } else {
                    EditOutcome::Handled
                }
            }
            Key::Left => {
                text.cursor_left();
                EditOutcome::Handled
            }
            Key::Right => {
                text.cursor_right();
                EditOutcome::Handled
            }
            Key::Home => {
                text.cursor_home();
                EditOutcome::Handled
            }
            Key::End => {
                text.cursor_end();
                EditOutcome::Handled
            }
            _ => EditOutcome::Ignored,
        }
    }

    /// The text state behind a field, if it is text-backed. Secret
    /// fields expose their inner text; choice fields have none.
    pub fn text_state(&self, field: Field) -> Option<&TextField> {
        match field {
            Field::FirstName => Some(&self.first_name),
            Field::LastName => Some(&self.last_name),
            Field::BirthDate => Some(&self.birth_date),
            Field::PhoneNumber => Some(&self.phone_number),
            Field::Email => Some(&self.email),
            Field::Password => Some(self.password.text()),
            Field::ConfirmPassword => Some(self.confirm_password.text()),
            Field::Gender | Field::Country => None,
        }
    }

    fn text_state_mut(&mut self, field: Field) -> Option<&mut TextField> {
        match field {
            Field::FirstName => Some(&mut self.first_name),
            Field::LastName => Some(&mut self.last_name),
            Field::BirthDate => Some(&mut self.birth_date),
            Field::PhoneNumber => Some(&mut self.phone_number),
            Field::Email => Some(&mut self.email),
            Field::Password => Some(self.password.text_mut()),
            Field::ConfirmPassword => Some(self.confirm_password.text_mut()),
            Field::Gender | Field::Country => None,
        }
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}
