//! Form rendering module
//!
//! - `field_renderer`: text field with supporting text
//! - `signup_form`: the sign-up screen body

mod field_renderer;
mod signup_form;

pub use signup_form::draw_signup;
