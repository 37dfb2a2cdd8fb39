//! Registration form core.
//!
//! A client-side registration form split in two: a declarative,
//! whole-record validator ([`FormValidator`]) and the form session
//! that front ends drive ([`RegistrationForm`]). The validator checks
//! every field on every pass and reports one message per failing
//! field; the session owns field state, focus, and the submit/reset
//! lifecycle.

pub mod country;
pub mod form;
pub mod record;
pub mod validation;

pub use country::{COUNTRY_OPTIONS, CountryOption, find_country};
pub use form::{
    EditOutcome, Key, Modifiers, RadioField, RegistrationForm, SecretField, SelectField, TextField,
};
pub use record::{Field, Gender, Registration, RegistrationDraft};
pub use validation::{ErrorMap, FieldError, FormValidator, Reason, RuleBuilder, RuleContext, RuleTable};
