//! Form session tests: editing, focus, errors, submit/reset.

use chrono::NaiveDate;
use enrol::{EditOutcome, Field, Gender, Key, Modifiers, RadioField, RegistrationForm};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 25).unwrap()
}

/// Fills every field with values the validator accepts.
fn fill_valid(form: &mut RegistrationForm) {
    form.first_name.set_value("Jo");
    form.last_name.set_value("Doe");
    form.birth_date.set_value("2000-01-15");
    form.gender.select(0);
    form.phone_number.set_value("1234567890");
    form.country.select_value("US");
    form.email.set_value("a@b.com");
    form.password.text_mut().set_value("Abcdef1");
    form.confirm_password.text_mut().set_value("Abcdef1");
}

fn type_str(form: &mut RegistrationForm, text: &str) {
    for c in text.chars() {
        form.handle_key(Key::Char(c), Modifiers::new());
    }
}

// === Editing ===

#[test]
fn test_typing_into_focused_field() {
    let mut form = RegistrationForm::new();
    assert_eq!(form.focused(), Field::FirstName);

    let outcome = form.handle_key(Key::Char('J'), Modifiers::new());
    assert_eq!(outcome, EditOutcome::Changed);
    type_str(&mut form, "o");

    assert_eq!(form.first_name.value(), "Jo");
    assert_eq!(form.first_name.cursor(), 2);
}

#[test]
fn test_backspace_at_start_is_handled_not_changed() {
    let mut form = RegistrationForm::new();
    assert_eq!(form.handle_key(Key::Backspace, Modifiers::new()), EditOutcome::Handled);
    assert!(form.first_name.is_empty());
}

#[test]
fn test_ctrl_chars_do_not_type() {
    let mut form = RegistrationForm::new();
    assert_eq!(form.handle_key(Key::Char('r'), Modifiers::ctrl()), EditOutcome::Ignored);
    assert!(form.first_name.is_empty());
}

#[test]
fn test_enter_reports_submitted() {
    let mut form = RegistrationForm::new();
    assert_eq!(form.handle_key(Key::Enter, Modifiers::new()), EditOutcome::Submitted);
}

// === Focus ===

#[test]
fn test_focus_cycle_wraps() {
    let mut form = RegistrationForm::new();
    for _ in 0..Field::ALL.len() {
        form.handle_key(Key::Tab, Modifiers::new());
    }
    assert_eq!(form.focused(), Field::FirstName);

    form.handle_key(Key::BackTab, Modifiers::new());
    assert_eq!(form.focused(), Field::ConfirmPassword);
}

// === Choice fields ===

#[test]
fn test_radio_keys_cycle_gender() {
    let mut form = RegistrationForm::new();
    form.focus_field(Field::Gender);

    form.handle_key(Key::Down, Modifiers::new());
    assert_eq!(form.gender.selected_label(), Some("Male"));
    form.handle_key(Key::Down, Modifiers::new());
    assert_eq!(form.gender.selected_label(), Some("Female"));
    form.handle_key(Key::Up, Modifiers::new());
    assert_eq!(form.gender.selected_label(), Some("Male"));
    form.handle_key(Key::End, Modifiers::new());
    assert_eq!(form.gender.selected_label(), Some("Other"));
}

#[test]
fn test_country_letter_jump() {
    let mut form = RegistrationForm::new();
    form.focus_field(Field::Country);

    form.handle_key(Key::Down, Modifiers::new());
    assert_eq!(form.country.selected_label(), Some("Argentina"));

    assert_eq!(form.handle_key(Key::Char('u'), Modifiers::new()), EditOutcome::Changed);
    assert_eq!(form.country.selected_label(), Some("United Kingdom"));
    form.handle_key(Key::Char('u'), Modifiers::new());
    assert_eq!(form.country.selected_label(), Some("United States"));
}

// === Secret fields ===

#[test]
fn test_reveal_toggle_on_focused_secret() {
    let mut form = RegistrationForm::new();
    form.focus_field(Field::Password);
    type_str(&mut form, "Abc1");

    assert_eq!(form.password.display_text(), "••••");
    assert_eq!(form.handle_key(Key::Char('u'), Modifiers::ctrl()), EditOutcome::Changed);
    assert!(form.password.revealed());
    assert_eq!(form.password.display_text(), "Abc1");
}

#[test]
fn test_reveal_toggle_ignored_elsewhere() {
    let mut form = RegistrationForm::new();
    assert_eq!(form.handle_key(Key::Char('u'), Modifiers::ctrl()), EditOutcome::Ignored);
}

// === Submit lifecycle ===

#[test]
fn test_failed_submit_marks_fields() {
    let mut form = RegistrationForm::new();
    let errors = form.submit_at(today()).unwrap_err();

    assert_eq!(errors.len(), Field::ALL.len());
    assert!(form.has_errors());
    assert_eq!(form.field_error(Field::FirstName), Some("Please enter your first name"));
    assert_eq!(form.field_error(Field::Gender), Some("Gender is required"));
    assert_eq!(form.field_error(Field::Country), Some("Please select a country"));
    // Input is retained for correction.
    assert_eq!(form.focused(), Field::FirstName);
}

#[test]
fn test_editing_clears_only_that_fields_error() {
    let mut form = RegistrationForm::new();
    form.submit_at(today()).unwrap_err();

    form.handle_key(Key::Char('J'), Modifiers::new());
    assert_eq!(form.field_error(Field::FirstName), None);
    assert!(form.field_error(Field::LastName).is_some());
}

#[test]
fn test_second_submit_clears_recovered_fields() {
    let mut form = RegistrationForm::new();
    form.submit_at(today()).unwrap_err();

    fill_valid(&mut form);
    form.phone_number.set_value("123");
    let errors = form.submit_at(today()).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(
        form.field_error(Field::PhoneNumber),
        Some("Phone number must be exactly 10 digits")
    );
    assert_eq!(form.field_error(Field::FirstName), None);
    assert_eq!(form.field_error(Field::Email), None);
}

#[test]
fn test_underage_birth_date_marks_field() {
    let mut form = RegistrationForm::new();
    fill_valid(&mut form);
    form.birth_date.set_value("2010-01-01");

    form.submit_at(today()).unwrap_err();
    assert_eq!(
        form.field_error(Field::BirthDate),
        Some("You must be at least 18 years old")
    );
}

#[test]
fn test_successful_submit_returns_record_and_resets() {
    let mut form = RegistrationForm::new();
    fill_valid(&mut form);
    form.password.toggle_reveal();

    let record = form.submit_at(today()).unwrap();
    assert_eq!(record.first_name, "Jo");
    assert_eq!(record.gender, Gender::Male);
    assert_eq!(record.country, "US");

    assert!(form.first_name.is_empty());
    assert!(form.birth_date.is_empty());
    assert_eq!(form.gender.selected(), None);
    assert_eq!(form.country.selected(), None);
    assert!(form.password.value().is_empty());
    assert!(!form.password.revealed());
    assert!(!form.has_errors());
    assert_eq!(form.focused(), Field::FirstName);
}

#[test]
fn test_draft_collects_current_values() {
    let mut form = RegistrationForm::new();
    fill_valid(&mut form);

    let draft = form.draft();
    assert_eq!(draft.first_name, "Jo");
    assert_eq!(draft.gender, "male");
    assert_eq!(draft.country, "US");
    assert_eq!(draft.confirm_password, "Abcdef1");
}

#[test]
fn test_draft_tolerates_swapped_radio_options() {
    let mut form = RegistrationForm::new();
    form.gender = RadioField::with_options(["Male", "Female", "Other", "Prefer not to say"]);
    form.gender.select(3);

    // A selection past the known genders contributes no wire value.
    assert_eq!(form.draft().gender, "");
}

#[test]
fn test_reset_clears_values_and_errors() {
    let mut form = RegistrationForm::new();
    form.submit_at(today()).unwrap_err();
    fill_valid(&mut form);
    form.focus_field(Field::Email);

    form.reset();
    assert!(form.first_name.is_empty());
    assert_eq!(form.gender.selected(), None);
    assert_eq!(form.country.selected(), None);
    assert!(!form.has_errors());
    assert_eq!(form.focused(), Field::FirstName);
}
