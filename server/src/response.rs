use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

mod category;
mod customer;
mod game;
mod rental;

pub use self::{category::*, customer::*, game::*, rental::*};

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    id: i32,
}

impl CreatedResponse {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}

impl IntoResponse for CreatedResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, axum::Json(self)).into_response()
    }
}
