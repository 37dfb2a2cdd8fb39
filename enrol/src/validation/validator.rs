//! Whole-record validation.

use chrono::{NaiveDate, Utc};

use crate::country::CountryOption;
use crate::record::{Field, Gender, Registration, RegistrationDraft};

use super::result::{ErrorMap, FieldError, Reason};
use super::rules::{BIRTH_DATE_FORMAT, Rule, RuleContext, RuleTable};

/// Validates a [`RegistrationDraft`] against the rule table.
///
/// Stateless between calls: every pass re-evaluates the whole draft
/// and produces either the normalized [`Registration`] or an
/// [`ErrorMap`] holding one message per failing field. All fields are
/// always evaluated; an earlier field's failure never hides a later
/// field's.
pub struct FormValidator {
    table: RuleTable,
}

impl FormValidator {
    /// Validator with the standard registration rules.
    pub fn new() -> Self {
        Self {
            table: RuleTable::registration(),
        }
    }

    /// Validator over a custom rule table.
    ///
    /// Building the accepted record parses the birth date and gender.
    /// Drafts the table admits without vetting those come back as
    /// field errors on acceptance.
    pub fn with_table(table: RuleTable) -> Self {
        Self { table }
    }

    /// Restricts `country` to the given option list.
    ///
    /// Off by default: without this the field only requires a
    /// non-empty selection.
    pub fn restrict_countries(mut self, options: &[CountryOption]) -> Self {
        let allowed: Vec<String> = options.iter().map(|c| c.value.to_string()).collect();
        self.table.push_rule(
            Field::Country,
            Rule::new(Reason::Pattern, "Please select a valid country", move |v, _| {
                allowed.iter().any(|a| a == v)
            }),
        );
        self
    }

    /// Restricts `email` to the given top-level domains.
    ///
    /// Off by default. Comparison is case-insensitive.
    pub fn restrict_email_tlds(mut self, tlds: &[&str]) -> Self {
        let allowed: Vec<String> = tlds.iter().map(|t| t.to_ascii_lowercase()).collect();
        self.table.push_rule(
            Field::Email,
            Rule::new(
                Reason::Pattern,
                "Please enter a valid email address",
                move |v, _| {
                    let Some((_, domain)) = v.rsplit_once('@') else {
                        return false;
                    };
                    let Some((_, tld)) = domain.rsplit_once('.') else {
                        return false;
                    };
                    allowed.iter().any(|a| a.eq_ignore_ascii_case(tld))
                },
            ),
        );
        self
    }

    /// Validates against the wall-clock date.
    pub fn validate(&self, draft: &RegistrationDraft) -> Result<Registration, ErrorMap> {
        self.validate_at(draft, Utc::now().date_naive())
    }

    /// Validates with an injected "today", for deterministic
    /// age-boundary behavior.
    pub fn validate_at(
        &self,
        input: &RegistrationDraft,
        today: NaiveDate,
    ) -> Result<Registration, ErrorMap> {
        let draft = normalized(input);
        let ctx = RuleContext {
            draft: &draft,
            today,
        };

        let mut errors = ErrorMap::new();
        for entry in self.table.entries() {
            if let Some(error) = entry.evaluate(&ctx) {
                log::debug!("{error}");
                errors.insert(error);
            }
        }

        if errors.is_empty() {
            accept(draft)
        } else {
            Err(errors)
        }
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FormValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormValidator").finish_non_exhaustive()
    }
}

/// Trims every text field. Passwords keep their whitespace; equality
/// between them is exact.
fn normalized(input: &RegistrationDraft) -> RegistrationDraft {
    RegistrationDraft {
        first_name: input.first_name.trim().to_string(),
        last_name: input.last_name.trim().to_string(),
        birth_date: input.birth_date.trim().to_string(),
        gender: input.gender.trim().to_string(),
        phone_number: input.phone_number.trim().to_string(),
        country: input.country.trim().to_string(),
        email: input.email.trim().to_string(),
        password: input.password.clone(),
        confirm_password: input.confirm_password.clone(),
    }
}

/// Builds the accepted record from a draft every rule passed.
///
/// The standard table vets both parses up front; a custom table may
/// not, so the parses stay fallible.
fn accept(draft: RegistrationDraft) -> Result<Registration, ErrorMap> {
    let mut errors = ErrorMap::new();

    let birth_date = NaiveDate::parse_from_str(&draft.birth_date, BIRTH_DATE_FORMAT).ok();
    if birth_date.is_none() {
        errors.insert(FieldError::new(
            Field::BirthDate,
            Reason::Pattern,
            "Please enter a valid date",
        ));
    }

    let gender = Gender::from_value(&draft.gender);
    if gender.is_none() {
        errors.insert(FieldError::new(
            Field::Gender,
            Reason::Pattern,
            "Please select a valid gender",
        ));
    }

    let (Some(birth_date), Some(gender)) = (birth_date, gender) else {
        return Err(errors);
    };

    Ok(Registration {
        first_name: draft.first_name,
        last_name: draft.last_name,
        birth_date,
        gender,
        phone_number: draft.phone_number,
        country: draft.country,
        email: draft.email,
        password: draft.password,
    })
}
