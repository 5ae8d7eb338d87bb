//! Nim: players take one to three tokens from a shared pot.
//!
//! Under the normal rule whoever takes the last token wins; under the
//! misère rule whoever takes the last token loses.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod pot;

pub use pot::{MAX_TAKE, NimRule, Pot, Take};
