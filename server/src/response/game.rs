use application::transfer::GameDto;
use serde::{Deserialize, Serialize};

use crate::controller::Exhaust;
use crate::response::CreatedResponse;

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    id: i32,
    name: String,
    image: String,
    stock_total: i32,
    category_id: i32,
    price_per_day: i64,
}

impl From<GameDto> for GameResponse {
    fn from(value: GameDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            image: value.image,
            stock_total: value.stock_total,
            category_id: value.category_id,
            price_per_day: value.price_per_day,
        }
    }
}

pub struct GamePresenter;

impl Exhaust<i32> for GamePresenter {
    type To = CreatedResponse;
    fn emit(&self, input: i32) -> Self::To {
        CreatedResponse::new(input)
    }
}

impl Exhaust<Vec<GameDto>> for GamePresenter {
    type To = axum::Json<Vec<GameResponse>>;
    fn emit(&self, input: Vec<GameDto>) -> Self::To {
        axum::Json(input.into_iter().map(GameResponse::from).collect())
    }
}
