//! Client-side view state.
//!
//! DESIGN
//! ======
//! State is owned by the page that creates it. The login form is the only
//! stateful view, so this module stays small and fully unit-tested.

pub mod login;
