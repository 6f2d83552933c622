use application::transfer::{RentalDetailDto, RentalDto, RentalListDto};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::prelude::entity::{RentDate, ReturnDate};
use serde::{Deserialize, Serialize};

use crate::controller::Exhaust;
use crate::response::CreatedResponse;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalResponse {
    id: i32,
    customer_id: i32,
    game_id: i32,
    rent_date: RentDate,
    days_rented: i32,
    return_date: Option<ReturnDate>,
    original_price: i64,
    delay_fee: Option<i64>,
}

impl From<RentalDto> for RentalResponse {
    fn from(value: RentalDto) -> Self {
        Self {
            id: value.id,
            customer_id: value.customer_id,
            game_id: value.game_id,
            rent_date: RentDate::new(value.rent_date),
            days_rented: value.days_rented,
            return_date: value.return_date.map(ReturnDate::new),
            original_price: value.original_price,
            delay_fee: value.delay_fee,
        }
    }
}

impl IntoResponse for RentalResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentedBy {
    id: i32,
    name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentedGame {
    id: i32,
    name: String,
    category_id: i32,
    category_name: String,
}

/// Rental row of the unfiltered listing, with its customer and game inlined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalDetailResponse {
    #[serde(flatten)]
    rental: RentalResponse,
    customer: RentedBy,
    game: RentedGame,
}

impl From<RentalDetailDto> for RentalDetailResponse {
    fn from(value: RentalDetailDto) -> Self {
        let customer = RentedBy {
            id: value.rental.customer_id,
            name: value.customer_name,
        };
        let game = RentedGame {
            id: value.rental.game_id,
            name: value.game_name,
            category_id: value.category_id,
            category_name: value.category_name,
        };
        Self {
            rental: RentalResponse::from(value.rental),
            customer,
            game,
        }
    }
}

pub struct RentalPresenter;

impl Exhaust<i32> for RentalPresenter {
    type To = CreatedResponse;
    fn emit(&self, input: i32) -> Self::To {
        CreatedResponse::new(input)
    }
}

impl Exhaust<RentalDto> for RentalPresenter {
    type To = RentalResponse;
    fn emit(&self, input: RentalDto) -> Self::To {
        RentalResponse::from(input)
    }
}

impl Exhaust<RentalListDto> for RentalPresenter {
    type To = Response;
    fn emit(&self, input: RentalListDto) -> Self::To {
        match input {
            RentalListDto::Detailed(rentals) => axum::Json(
                rentals
                    .into_iter()
                    .map(RentalDetailResponse::from)
                    .collect::<Vec<_>>(),
            )
            .into_response(),
            RentalListDto::Plain(rentals) => axum::Json(
                rentals
                    .into_iter()
                    .map(RentalResponse::from)
                    .collect::<Vec<_>>(),
            )
            .into_response(),
        }
    }
}

#[cfg(test)]
mod test {
    use application::transfer::{RentalDetailDto, RentalDto};
    use time::macros::date;

    use super::RentalDetailResponse;

    fn detail() -> RentalDetailDto {
        RentalDetailDto {
            rental: RentalDto {
                id: 1,
                customer_id: 1,
                game_id: 1,
                rent_date: date!(2021 - 06 - 20),
                days_rented: 3,
                return_date: None,
                original_price: 4500,
                delay_fee: None,
            },
            customer_name: "João Alfredo".to_string(),
            game_name: "Banco Imobiliário".to_string(),
            category_id: 1,
            category_name: "Estratégia".to_string(),
        }
    }

    #[test]
    fn listing_nests_customer_and_game() {
        let json = serde_json::to_value(RentalDetailResponse::from(detail())).unwrap();

        assert_eq!(json["rentDate"], "2021-06-20");
        assert_eq!(json["returnDate"], serde_json::Value::Null);
        assert_eq!(json["delayFee"], serde_json::Value::Null);
        assert_eq!(json["customer"]["name"], "João Alfredo");
        assert_eq!(json["game"]["categoryId"], 1);
        assert_eq!(json["game"]["categoryName"], "Estratégia");
    }

    #[test]
    fn listing_survives_round_trip() {
        let listing = vec![RentalDetailResponse::from(detail())];

        let encoded = serde_json::to_string(&listing).unwrap();
        let decoded: Vec<RentalDetailResponse> = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, listing);
    }
}
