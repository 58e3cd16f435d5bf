//! Form domain layer
//!
//! Holds the sign-up field values and derives the submit gate from the
//! validators in [`crate::domain`].

mod field;
mod form_state;

pub use field::{FormField, SignUpField};
pub use form_state::{
    Form, FormValidation, SignUpForm, SubmitListener, SubmitState, SUBMIT_BUTTON_INDEX,
};
