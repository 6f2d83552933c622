use std::fmt::Display;
use std::str::FromStr;

use crate::entity::{DaysRented, DelayFee, OriginalPrice, PricePerDay};

/// How the fee of a late return is charged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LateFeePolicy {
    /// Every day past the agreed duration costs one daily price.
    #[default]
    OverdueDays,
    /// Every elapsed day costs one daily price, on top of the original price.
    /// Matches the fee charged by the first version of the service.
    Legacy,
}

impl LateFeePolicy {
    /// Fee for a rental returned `elapsed_days` after it started, `None` when
    /// the rental is not late.
    pub fn charge(
        &self,
        elapsed_days: i64,
        days_rented: &DaysRented,
        price_per_day: &PricePerDay,
        original_price: &OriginalPrice,
    ) -> Option<DelayFee> {
        let agreed = i64::from(*days_rented.as_ref());
        if elapsed_days <= agreed {
            return None;
        }
        let daily = *price_per_day.as_ref();
        let fee = match self {
            LateFeePolicy::OverdueDays => (elapsed_days - agreed).saturating_mul(daily),
            LateFeePolicy::Legacy => elapsed_days
                .saturating_mul(daily)
                .saturating_add(*original_price.as_ref()),
        };
        Some(DelayFee::new(fee))
    }
}

#[derive(Debug)]
pub struct UnknownLateFeePolicy(String);

impl Display for UnknownLateFeePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown late fee policy `{}`, expected `overdue-days` or `legacy`",
            self.0
        )
    }
}

impl std::error::Error for UnknownLateFeePolicy {}

impl FromStr for LateFeePolicy {
    type Err = UnknownLateFeePolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overdue-days" | "overdue_days" => Ok(Self::OverdueDays),
            "legacy" => Ok(Self::Legacy),
            other => Err(UnknownLateFeePolicy(other.to_string())),
        }
    }
}
