//! Absential keeps "value not supplied" distinguishable from "value is
//! null", so defaulted parameters and partial updates can tell the two
//! apart.
//!
//! ## Crate layout
//! - `core`: the sentinel marker, the `Absential` slot, the combinator
//!   `Cell`, and the shared error surface.
//! - `registry`: an explicit process-global name table binding the
//!   canonical sentinel and its predicate for type-erased consumers.
//!
//! The `prelude` module carries the domain vocabulary used at call sites.
//!
//! ```
//! use absential::{Absent, Absential, Cell, Present};
//!
//! fn describe(limit: Absential<Option<u32>>) -> String {
//!     match limit {
//!         Present(Some(n)) => format!("limit {n}"),
//!         Present(None) => "explicitly unlimited".to_string(),
//!         Absent => "not supplied".to_string(),
//!     }
//! }
//!
//! assert_eq!(describe(Present(Some(3))), "limit 3");
//! assert_eq!(describe(Present(None)), "explicitly unlimited");
//! assert_eq!(describe(Absent), "not supplied");
//!
//! let fallback = Cell::<u32>::empty().or(Cell::of(10)).extract_or(0);
//! assert_eq!(fallback, 10);
//! ```

pub use absential_core as core;

pub mod registry;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use absential_core::{
    absential::Absential::{self, Absent, Present},
    cell::Cell,
    error::Error,
    marker::{ABSENT, Marker, MarkerDisplay, is_marker},
};

///
/// Prelude
///
/// Domain vocabulary only. No errors or registries are re-exported here.
///

pub mod prelude {
    pub use crate::core::{
        absential::Absential::{self, Absent, Present},
        cell::Cell,
        marker::{ABSENT, Marker},
    };
}
