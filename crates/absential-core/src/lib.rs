//! Core types for Absential: the absence sentinel, the `Absential` slot,
//! the combinator cell, and the shared error surface.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod absential;
pub mod cell;
pub mod error;
pub mod marker;

///
/// Prelude
///
/// Domain vocabulary only. No errors or registries are re-exported here.
///

pub mod prelude {
    pub use crate::{
        absential::Absential::{self, Absent, Present},
        cell::Cell,
        marker::{ABSENT, Marker},
    };
}
