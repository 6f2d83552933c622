use kernel::prelude::entity::{
    DestructRental, DestructRentalDetail, LateFeePolicy, Rental, RentalDetail,
};
use time::Date;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalDto {
    pub id: i32,
    pub customer_id: i32,
    pub game_id: i32,
    pub rent_date: Date,
    pub days_rented: i32,
    pub return_date: Option<Date>,
    pub original_price: i64,
    pub delay_fee: Option<i64>,
}

impl From<Rental> for RentalDto {
    fn from(value: Rental) -> Self {
        let DestructRental {
            id,
            customer_id,
            game_id,
            rent_date,
            days_rented,
            return_date,
            original_price,
            delay_fee,
        } = value.into_destruct();
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            game_id: game_id.into(),
            rent_date: rent_date.into(),
            days_rented: days_rented.into(),
            return_date: return_date.map(Into::into),
            original_price: original_price.into(),
            delay_fee: delay_fee.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalDetailDto {
    pub rental: RentalDto,
    pub customer_name: String,
    pub game_name: String,
    pub category_id: i32,
    pub category_name: String,
}

impl From<RentalDetail> for RentalDetailDto {
    fn from(value: RentalDetail) -> Self {
        let DestructRentalDetail {
            rental,
            customer_name,
            game_name,
            category_id,
            category_name,
        } = value.into_destruct();
        Self {
            rental: rental.into(),
            customer_name: customer_name.into(),
            game_name: game_name.into(),
            category_id: category_id.into(),
            category_name: category_name.into(),
        }
    }
}

/// Listing of rentals. Only the unfiltered listing carries the related rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RentalListDto {
    Detailed(Vec<RentalDetailDto>),
    Plain(Vec<RentalDto>),
}

pub enum GetRentalsDto {
    All,
    ByCustomer { customer_id: i32 },
    ByGame { game_id: i32 },
}

pub struct CreateRentalDto {
    pub customer_id: i32,
    pub game_id: i32,
    pub days_rented: i32,
}

pub struct ReturnRentalDto {
    pub id: i32,
    pub policy: LateFeePolicy,
}
