use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Number of copies of a game the store owns.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct StockTotal(i32);

impl StockTotal {
    pub fn new(amount: impl Into<i32>) -> Self {
        Self(amount.into())
    }

    pub fn has_copy_left(&self, active_rentals: i64) -> bool {
        active_rentals < i64::from(self.0)
    }
}
