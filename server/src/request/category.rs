use application::transfer::CreateCategoryDto;
use serde::Deserialize;
use validator::Validate;

use crate::controller::TryIntake;
use crate::error::ErrorStatus;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(
        required(message = "\"name\" is required"),
        length(min = 1, message = "\"name\" must not be empty")
    )]
    name: Option<String>,
}

pub struct CategoryTransformer;

impl TryIntake<CreateCategoryRequest> for CategoryTransformer {
    type To = CreateCategoryDto;
    type Error = ErrorStatus;
    fn emit(&self, input: CreateCategoryRequest) -> Result<Self::To, Self::Error> {
        input.validate()?;
        Ok(CreateCategoryDto {
            name: input.name.unwrap_or_default(),
        })
    }
}
