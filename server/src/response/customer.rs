use application::transfer::CustomerDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::prelude::entity::Birthday;
use serde::{Deserialize, Serialize};

use crate::controller::Exhaust;
use crate::response::CreatedResponse;

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerResponse {
    id: i32,
    name: String,
    phone: String,
    cpf: String,
    birthday: Birthday,
}

impl From<CustomerDto> for CustomerResponse {
    fn from(value: CustomerDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            phone: value.phone,
            cpf: value.cpf,
            birthday: Birthday::new(value.birthday),
        }
    }
}

impl IntoResponse for CustomerResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct CustomerPresenter;

impl Exhaust<i32> for CustomerPresenter {
    type To = CreatedResponse;
    fn emit(&self, input: i32) -> Self::To {
        CreatedResponse::new(input)
    }
}

impl Exhaust<()> for CustomerPresenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::CREATED
    }
}

impl Exhaust<Option<CustomerDto>> for CustomerPresenter {
    type To = Option<CustomerResponse>;
    fn emit(&self, input: Option<CustomerDto>) -> Self::To {
        input.map(CustomerResponse::from)
    }
}

impl Exhaust<Vec<CustomerDto>> for CustomerPresenter {
    type To = axum::Json<Vec<CustomerResponse>>;
    fn emit(&self, input: Vec<CustomerDto>) -> Self::To {
        axum::Json(input.into_iter().map(CustomerResponse::from).collect())
    }
}
