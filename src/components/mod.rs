//! Reusable view components.

pub mod password_field;
