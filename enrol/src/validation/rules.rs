//! The declarative field-rule table.
//!
//! Every constraint the form enforces lives in one table: per-field
//! rule lists built fluently, each rule a predicate plus the reason
//! and message reported when it fails. [`RuleTable::registration`]
//! is the standard table; the evaluator in
//! [`FormValidator`](super::FormValidator) walks it field by field.

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::record::{Field, Gender, RegistrationDraft};

use super::result::{FieldError, Reason};

/// Letters and spaces only.
const NAME_PATTERN: &str = r"^[A-Za-z\s]+$";
/// Exactly ten ASCII digits.
const PHONE_PATTERN: &str = r"^[0-9]{10}$";

/// Date entry format for the birth date field.
pub(crate) const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// What a rule predicate gets to look at.
///
/// Most rules only read their own field's value; cross-field rules
/// (password confirmation) reach into the whole draft, and the age
/// rule needs "today".
pub struct RuleContext<'a> {
    pub draft: &'a RegistrationDraft,
    pub today: NaiveDate,
}

type Check = Box<dyn Fn(&str, &RuleContext<'_>) -> bool + Send + Sync>;

/// One constraint: a predicate plus the error it reports when false.
pub(crate) struct Rule {
    reason: Reason,
    message: String,
    check: Check,
}

impl Rule {
    pub(crate) fn new(
        reason: Reason,
        message: impl Into<String>,
        check: impl Fn(&str, &RuleContext<'_>) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            reason,
            message: message.into(),
            check: Box::new(check),
        }
    }
}

/// The ordered rule list for one field.
pub(crate) struct FieldRules {
    pub(crate) field: Field,
    rules: Vec<Rule>,
}

impl FieldRules {
    /// Runs this field's rules in order and reports the first failure.
    pub(crate) fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<FieldError> {
        let value = ctx.draft.value(self.field);
        for rule in &self.rules {
            if !(rule.check)(value, ctx) {
                return Some(FieldError::new(self.field, rule.reason, rule.message.clone()));
            }
        }
        None
    }
}

/// Declarative constraint table: for each field, the rules to check
/// and the message reported per violation.
///
/// # Example
///
/// ```ignore
/// let table = RuleTable::new()
///     .field(Field::Email)
///         .required("Please enter your email")
///         .email("Please enter a valid email address")
///     .build();
/// ```
#[derive(Default)]
pub struct RuleTable {
    entries: Vec<FieldRules>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the rule list for a field. Starting a field that already
    /// has rules appends to its existing list.
    pub fn field(self, field: Field) -> RuleBuilder {
        RuleBuilder {
            table: self,
            field,
            rules: Vec::new(),
        }
    }

    pub(crate) fn entries(&self) -> &[FieldRules] {
        &self.entries
    }

    /// Appends a rule to a field's list, creating the entry if the
    /// field has none yet.
    pub(crate) fn push_rule(&mut self, field: Field, rule: Rule) {
        match self.entries.iter_mut().find(|e| e.field == field) {
            Some(entry) => entry.rules.push(rule),
            None => self.entries.push(FieldRules {
                field,
                rules: vec![rule],
            }),
        }
    }

    /// The registration form's standard rules, messages verbatim from
    /// the form copy.
    pub fn registration() -> Self {
        RuleTable::new()
            .field(Field::FirstName)
            .required("Please enter your first name")
            .min_length(2, "First name must have at least 2 characters")
            .max_length(20, "First name cannot exceed 20 characters")
            .pattern(NAME_PATTERN, "First name must contain only alphabets and spaces")
            .field(Field::LastName)
            .required("Please enter your last name")
            .min_length(2, "Last name must have at least 2 characters")
            .max_length(20, "Last name cannot exceed 20 characters")
            .pattern(NAME_PATTERN, "Last name must contain only alphabets and spaces")
            .field(Field::BirthDate)
            .required("Birth date is required")
            .iso_date("Please enter a valid date")
            .min_age(18, "You must be at least 18 years old")
            .field(Field::Gender)
            .required("Gender is required")
            .one_of(Gender::ALL.map(Gender::value), "Please select a valid gender")
            .field(Field::PhoneNumber)
            .required("Please enter your phone number")
            .pattern(PHONE_PATTERN, "Phone number must be exactly 10 digits")
            .field(Field::Country)
            .required("Please select a country")
            .field(Field::Email)
            .required("Please enter your email")
            .email("Please enter a valid email address")
            .field(Field::Password)
            .required("Please enter your password")
            .min_length(3, "Password must be 3 to 30 characters long")
            .max_length(30, "Password must be 3 to 30 characters long")
            .has_lowercase("Password must contain at least one lowercase letter")
            .has_uppercase("Password must contain at least one uppercase letter")
            .has_digit("Password must contain at least one digit")
            .field(Field::ConfirmPassword)
            .required("Confirm password is required")
            .matches_field(Field::Password, "Passwords do not match")
            .build()
    }
}

/// Fluent rule-list builder for one field.
///
/// Rules run in the order they are added; the first failing rule's
/// message is the one reported for the field.
pub struct RuleBuilder {
    table: RuleTable,
    field: Field,
    rules: Vec<Rule>,
}

impl RuleBuilder {
    /// Adds a custom rule: `check` returns true when the value passes.
    pub fn rule(
        mut self,
        reason: Reason,
        message: impl Into<String>,
        check: impl Fn(&str, &RuleContext<'_>) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.rules.push(Rule::new(reason, message, check));
        self
    }

    /// Value must be non-empty after trimming.
    pub fn required(self, message: impl Into<String>) -> Self {
        self.rule(Reason::Required, message, |v, _| !v.trim().is_empty())
    }

    /// Minimum length in characters.
    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        self.rule(Reason::TooShort, message, move |v, _| {
            v.chars().count() >= min
        })
    }

    /// Maximum length in characters.
    pub fn max_length(self, max: usize, message: impl Into<String>) -> Self {
        self.rule(Reason::TooLong, message, move |v, _| {
            v.chars().count() <= max
        })
    }

    /// Value must match the regex. Compiled here, once.
    pub fn pattern(self, pattern: &str, message: impl Into<String>) -> Self {
        let re = Regex::new(pattern).expect("Invalid regex pattern");
        self.rule(Reason::Pattern, message, move |v, _| re.is_match(v))
    }

    /// Value must be a syntactically valid email with a dotted domain.
    pub fn email(self, message: impl Into<String>) -> Self {
        self.rule(Reason::Pattern, message, |v, _| {
            email_address::EmailAddress::is_valid(v)
                && v.rsplit_once('@').is_some_and(|(_, domain)| domain.contains('.'))
        })
    }

    /// Value must be one of the allowed wire values.
    pub fn one_of<I, S>(self, allowed: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
        self.rule(Reason::Pattern, message, move |v, _| {
            allowed.iter().any(|a| a == v)
        })
    }

    /// Value must parse as an ISO `YYYY-MM-DD` date.
    pub fn iso_date(self, message: impl Into<String>) -> Self {
        self.rule(Reason::Pattern, message, |v, _| {
            NaiveDate::parse_from_str(v, BIRTH_DATE_FORMAT).is_ok()
        })
    }

    /// Parsed date must be at least `years` years before today.
    ///
    /// Unparseable input passes; the format rule owns that failure.
    pub fn min_age(self, years: i32, message: impl Into<String>) -> Self {
        self.rule(Reason::OutOfRange, message, move |v, ctx| {
            match NaiveDate::parse_from_str(v, BIRTH_DATE_FORMAT) {
                Ok(date) => date <= latest_birth_date(ctx.today, years),
                Err(_) => true,
            }
        })
    }

    /// At least one lowercase letter.
    pub fn has_lowercase(self, message: impl Into<String>) -> Self {
        self.rule(Reason::Pattern, message, |v, _| {
            v.chars().any(|c| c.is_ascii_lowercase())
        })
    }

    /// At least one uppercase letter.
    pub fn has_uppercase(self, message: impl Into<String>) -> Self {
        self.rule(Reason::Pattern, message, |v, _| {
            v.chars().any(|c| c.is_ascii_uppercase())
        })
    }

    /// At least one ASCII digit.
    pub fn has_digit(self, message: impl Into<String>) -> Self {
        self.rule(Reason::Pattern, message, |v, _| {
            v.chars().any(|c| c.is_ascii_digit())
        })
    }

    /// Value must equal another field's value exactly.
    pub fn matches_field(self, other: Field, message: impl Into<String>) -> Self {
        self.rule(Reason::Mismatch, message, move |v, ctx| {
            v == ctx.draft.value(other)
        })
    }

    /// Finalizes this field's list and starts the next field's.
    pub fn field(self, field: Field) -> RuleBuilder {
        self.finish().field(field)
    }

    /// Finalizes the table.
    pub fn build(self) -> RuleTable {
        self.finish()
    }

    fn finish(self) -> RuleTable {
        let RuleBuilder {
            mut table,
            field,
            rules,
        } = self;
        for rule in rules {
            table.push_rule(field, rule);
        }
        table
    }
}

/// Latest birth date that still yields `years` full years of age on
/// `today`.
pub(crate) fn latest_birth_date(today: NaiveDate, years: i32) -> NaiveDate {
    let year = today.year() - years;
    match today.with_year(year) {
        Some(date) => date,
        // Feb 29 thresholds clamp to Feb 28 in non-leap years.
        None => NaiveDate::from_ymd_opt(year, 2, 28).expect("Feb 28 exists in every year"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_latest_birth_date_same_month_day() {
        assert_eq!(latest_birth_date(date(2026, 8, 25), 18), date(2008, 8, 25));
    }

    #[test]
    fn test_latest_birth_date_leap_day_clamps() {
        // 2006 is not a leap year, so the threshold moves to Feb 28.
        assert_eq!(latest_birth_date(date(2024, 2, 29), 18), date(2006, 2, 28));
    }

    #[test]
    fn test_latest_birth_date_leap_to_leap() {
        assert_eq!(latest_birth_date(date(2024, 2, 29), 4), date(2020, 2, 29));
    }

    #[test]
    fn test_registration_table_covers_every_field() {
        let table = RuleTable::registration();
        for field in Field::ALL {
            assert!(
                table.entries().iter().any(|e| e.field == field),
                "missing rules for {field}"
            );
        }
    }
}
