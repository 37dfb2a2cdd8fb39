//! Whole-record validation for the registration form.
//!
//! Rules are declared once, in a table, and a single evaluator walks
//! them: every field is checked on every pass, each failing field
//! reports its first applicable message, and the messages land in a
//! field-keyed [`ErrorMap`].
//!
//! # Example
//!
//! ```ignore
//! let validator = FormValidator::new()
//!     .restrict_countries(COUNTRY_OPTIONS);
//!
//! match validator.validate(&draft) {
//!     Ok(record) => submit(record),
//!     Err(errors) => {
//!         for error in &errors {
//!             println!("{error}");
//!         }
//!     }
//! }
//! ```

mod result;
mod rules;
mod validator;

pub use result::{ErrorMap, FieldError, Reason};
pub use rules::{RuleBuilder, RuleContext, RuleTable};
pub use validator::FormValidator;
