mod date;
mod days;
mod detail;
mod id;
mod late_fee;
mod price;

pub use self::{date::*, days::*, detail::*, id::*, late_fee::*, price::*};
use crate::entity::{CustomerId, GameId, PricePerDay};
use destructure::Destructure;
use time::{Duration, OffsetDateTime};
use vodca::References;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RentalStatus {
    Active,
    Returned,
}

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Rental {
    id: RentalId,
    customer_id: CustomerId,
    game_id: GameId,
    rent_date: RentDate,
    days_rented: DaysRented,
    return_date: Option<ReturnDate>,
    original_price: OriginalPrice,
    delay_fee: Option<DelayFee>,
}

impl Rental {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: RentalId,
        customer_id: CustomerId,
        game_id: GameId,
        rent_date: RentDate,
        days_rented: DaysRented,
        return_date: Option<ReturnDate>,
        original_price: OriginalPrice,
        delay_fee: Option<DelayFee>,
    ) -> Self {
        Self {
            id,
            customer_id,
            game_id,
            rent_date,
            days_rented,
            return_date,
            original_price,
            delay_fee,
        }
    }

    pub fn status(&self) -> RentalStatus {
        match self.return_date {
            None => RentalStatus::Active,
            Some(_) => RentalStatus::Returned,
        }
    }

    /// Whole days since the rental started at midnight UTC, a started day
    /// counting as a full one.
    pub fn elapsed_days(&self, now: OffsetDateTime) -> i64 {
        let started = self.rent_date.as_ref().midnight().assume_utc();
        let elapsed = now - started;
        if elapsed.is_negative() {
            return 0;
        }
        let days = elapsed.whole_days();
        if elapsed > Duration::days(days) {
            days + 1
        } else {
            days
        }
    }

    pub fn into_returned(self, return_date: ReturnDate, delay_fee: Option<DelayFee>) -> Self {
        Self {
            return_date: Some(return_date),
            delay_fee,
            ..self
        }
    }

    pub fn delay_fee_at(
        &self,
        now: OffsetDateTime,
        price_per_day: &PricePerDay,
        policy: LateFeePolicy,
    ) -> Option<DelayFee> {
        policy.charge(
            self.elapsed_days(now),
            &self.days_rented,
            price_per_day,
            &self.original_price,
        )
    }
}

/// A rental about to be opened.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct RentalDraft {
    customer_id: CustomerId,
    game_id: GameId,
    rent_date: RentDate,
    days_rented: DaysRented,
    original_price: OriginalPrice,
}

impl RentalDraft {
    pub fn new(
        customer_id: CustomerId,
        game_id: GameId,
        rent_date: RentDate,
        days_rented: DaysRented,
        original_price: OriginalPrice,
    ) -> Self {
        Self {
            customer_id,
            game_id,
            rent_date,
            days_rented,
            original_price,
        }
    }

    pub fn into_rental(self, id: RentalId) -> Rental {
        let DestructRentalDraft {
            customer_id,
            game_id,
            rent_date,
            days_rented,
            original_price,
        } = self.into_destruct();
        Rental::new(
            id,
            customer_id,
            game_id,
            rent_date,
            days_rented,
            None,
            original_price,
            None,
        )
    }
}
