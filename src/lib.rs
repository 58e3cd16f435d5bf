//! Sign-up form core and terminal front end
//!
//! [`domain`] holds the field validators, [`state`] the form that derives the
//! submit gate from them. [`app`] and [`ui`] drive the form from a terminal.

pub mod app;
pub mod config;
pub mod domain;
pub mod messages;
pub mod platform;
pub mod state;
pub mod ui;
