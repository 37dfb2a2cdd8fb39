//! Form-session state: editable fields, focus, and the submit/reset
//! lifecycle.

mod event;
mod fields;
mod session;

pub use event::{EditOutcome, Key, Modifiers};
pub use fields::{RadioField, SecretField, SelectField, TextField};
pub use session::RegistrationForm;
