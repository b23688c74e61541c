pub mod form;

pub use form::{Field, RegistrationForm, ValidationErrors};
