//! # credsaathi-web
//!
//! Leptos + WASM frontend for the Cred Saathi loan advisory service.
//! A client-side rendered application with three views — landing, login,
//! and a 404 fallback — selected by a static route table.
//!
//! This crate contains pages, components, view state, and the route table.
//! There is no server component; authentication belongs to an external
//! collaborator that this client does not call.

pub mod app;
pub mod components;
pub mod pages;
pub mod routes;
pub mod state;
