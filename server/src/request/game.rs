use application::transfer::{CreateGameDto, GetGamesDto};
use serde::Deserialize;
use validator::Validate;

use crate::controller::{Intake, TryIntake};
use crate::error::ErrorStatus;

#[derive(Debug, Deserialize)]
pub struct GetGamesRequest {
    name: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    #[validate(
        required(message = "\"name\" is required"),
        length(min = 1, message = "\"name\" must not be empty")
    )]
    name: Option<String>,
    #[validate(required(message = "\"image\" is required"))]
    image: Option<String>,
    #[validate(
        required(message = "\"stockTotal\" is required"),
        range(min = 1, message = "\"stockTotal\" must be at least 1")
    )]
    stock_total: Option<i32>,
    #[validate(
        required(message = "\"categoryId\" is required"),
        range(min = 1, message = "\"categoryId\" must be at least 1")
    )]
    category_id: Option<i32>,
    #[validate(
        required(message = "\"pricePerDay\" is required"),
        range(min = 1, message = "\"pricePerDay\" must be at least 1")
    )]
    price_per_day: Option<i64>,
}

pub struct GameTransformer;

impl Intake<GetGamesRequest> for GameTransformer {
    type To = GetGamesDto;
    fn emit(&self, input: GetGamesRequest) -> Self::To {
        GetGamesDto {
            name: input.name.filter(|name| !name.is_empty()),
        }
    }
}

impl TryIntake<CreateGameRequest> for GameTransformer {
    type To = CreateGameDto;
    type Error = ErrorStatus;
    fn emit(&self, input: CreateGameRequest) -> Result<Self::To, Self::Error> {
        input.validate()?;
        Ok(CreateGameDto {
            name: input.name.unwrap_or_default(),
            image: input.image.unwrap_or_default(),
            stock_total: input.stock_total.unwrap_or_default(),
            category_id: input.category_id.unwrap_or_default(),
            price_per_day: input.price_per_day.unwrap_or_default(),
        })
    }
}
