//! Administrative services.
//!
//! Holds the one-time admin code used to bootstrap the first admin account.

pub mod code;
