use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::entity::{DaysRented, PricePerDay};

/// Price agreed when the rental was created. Never recomputed.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct OriginalPrice(i64);

impl OriginalPrice {
    pub fn new(price: impl Into<i64>) -> Self {
        Self(price.into())
    }

    /// `None` when the product does not fit the price column.
    pub fn calculate(price_per_day: &PricePerDay, days: &DaysRented) -> Option<Self> {
        price_per_day
            .as_ref()
            .checked_mul(i64::from(*days.as_ref()))
            .map(Self)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct DelayFee(i64);

impl DelayFee {
    pub fn new(fee: impl Into<i64>) -> Self {
        Self(fee.into())
    }
}
