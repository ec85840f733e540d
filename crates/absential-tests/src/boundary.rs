use absential::Cell;
use serde::{Deserialize, Serialize};

///
/// Payload
///
/// A wire shape that stays nullable on the outside and bridges to a cell
/// on the inside, the documented pattern at process boundaries.
///

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Payload {
    pub name: String,
    pub limit: Option<u32>,
}

impl Payload {
    #[must_use]
    pub fn limit_cell(&self) -> Cell<u32> {
        Cell::from_option(self.limit)
    }
}

///
/// Snapshot
///
/// A shape carrying a cell directly. Serializing it only succeeds while
/// the cell is occupied; absence never crosses the boundary.
///

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Snapshot {
    pub limit: Cell<u32>,
}

///
/// TESTS
///
