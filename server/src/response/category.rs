use application::transfer::CategoryDto;
use serde::{Deserialize, Serialize};

use crate::controller::Exhaust;
use crate::response::CreatedResponse;

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResponse {
    id: i32,
    name: String,
}

impl From<CategoryDto> for CategoryResponse {
    fn from(value: CategoryDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

pub struct CategoryPresenter;

impl Exhaust<i32> for CategoryPresenter {
    type To = CreatedResponse;
    fn emit(&self, input: i32) -> Self::To {
        CreatedResponse::new(input)
    }
}

impl Exhaust<Vec<CategoryDto>> for CategoryPresenter {
    type To = axum::Json<Vec<CategoryResponse>>;
    fn emit(&self, input: Vec<CategoryDto>) -> Self::To {
        axum::Json(input.into_iter().map(CategoryResponse::from).collect())
    }
}
