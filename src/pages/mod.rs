//! Application pages, one per route table entry.

pub mod home;
pub mod login;
pub mod not_found;
