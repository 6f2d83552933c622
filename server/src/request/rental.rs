use application::transfer::{CreateRentalDto, GetRentalsDto, ReturnRentalDto};
use kernel::prelude::entity::LateFeePolicy;
use serde::Deserialize;
use validator::Validate;

use crate::controller::{Intake, TryIntake};
use crate::error::ErrorStatus;

/// Listing filter. `customerId` wins when both are given.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRentalsRequest {
    customer_id: Option<i32>,
    game_id: Option<i32>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRentalRequest {
    #[validate(
        required(message = "\"customerId\" is required"),
        range(min = 1, message = "\"customerId\" must be at least 1")
    )]
    customer_id: Option<i32>,
    #[validate(
        required(message = "\"gameId\" is required"),
        range(min = 1, message = "\"gameId\" must be at least 1")
    )]
    game_id: Option<i32>,
    #[validate(
        required(message = "\"daysRented\" is required"),
        range(min = 1, message = "\"daysRented\" must be at least 1")
    )]
    days_rented: Option<i32>,
}

#[derive(Debug)]
pub struct ReturnRentalRequest {
    id: i32,
    policy: LateFeePolicy,
}

impl ReturnRentalRequest {
    pub fn new(id: i32, policy: LateFeePolicy) -> Self {
        Self { id, policy }
    }
}

pub struct RentalTransformer;

impl Intake<GetRentalsRequest> for RentalTransformer {
    type To = GetRentalsDto;
    fn emit(&self, input: GetRentalsRequest) -> Self::To {
        match (input.customer_id, input.game_id) {
            (Some(customer_id), _) => GetRentalsDto::ByCustomer { customer_id },
            (None, Some(game_id)) => GetRentalsDto::ByGame { game_id },
            (None, None) => GetRentalsDto::All,
        }
    }
}

impl TryIntake<CreateRentalRequest> for RentalTransformer {
    type To = CreateRentalDto;
    type Error = ErrorStatus;
    fn emit(&self, input: CreateRentalRequest) -> Result<Self::To, Self::Error> {
        input.validate()?;
        Ok(CreateRentalDto {
            customer_id: input.customer_id.unwrap_or_default(),
            game_id: input.game_id.unwrap_or_default(),
            days_rented: input.days_rented.unwrap_or_default(),
        })
    }
}

impl Intake<ReturnRentalRequest> for RentalTransformer {
    type To = ReturnRentalDto;
    fn emit(&self, input: ReturnRentalRequest) -> Self::To {
        ReturnRentalDto {
            id: input.id,
            policy: input.policy,
        }
    }
}
