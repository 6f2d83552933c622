use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Daily rental price in minor currency units.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct PricePerDay(i64);

impl PricePerDay {
    pub fn new(price: impl Into<i64>) -> Self {
        Self(price.into())
    }
}
