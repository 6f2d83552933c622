use application::transfer::{
    CreateCustomerDto, GetCustomerDto, GetCustomersDto, UpdateCustomerDto,
};
use kernel::prelude::entity::parse_iso_date;
use serde::Deserialize;
use time::Date;
use validator::{Validate, ValidationError};

use crate::controller::{Intake, TryIntake};
use crate::error::ErrorStatus;

#[derive(Debug, Deserialize)]
pub struct GetCustomersRequest {
    cpf: Option<String>,
}

#[derive(Debug)]
pub struct GetCustomerRequest {
    id: i32,
}

impl GetCustomerRequest {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}

/// Body of both customer creation and replacement.
#[derive(Debug, Deserialize, Validate)]
pub struct CustomerRequest {
    #[validate(
        required(message = "\"name\" is required"),
        length(min = 1, message = "\"name\" must not be empty")
    )]
    name: Option<String>,
    #[validate(
        required(message = "\"phone\" is required"),
        length(min = 10, max = 11, message = "\"phone\" must have 10 or 11 characters")
    )]
    phone: Option<String>,
    #[validate(
        required(message = "\"cpf\" is required"),
        length(equal = 11, message = "\"cpf\" must have 11 characters")
    )]
    cpf: Option<String>,
    #[validate(
        required(message = "\"birthday\" is required"),
        custom(function = "iso_date", message = "\"birthday\" must be a YYYY-MM-DD date")
    )]
    birthday: Option<String>,
}

fn iso_date(value: &str) -> Result<(), ValidationError> {
    match parse_iso_date(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("iso_date")),
    }
}

struct ValidCustomer {
    name: String,
    phone: String,
    cpf: String,
    birthday: Date,
}

impl TryFrom<CustomerRequest> for ValidCustomer {
    type Error = ErrorStatus;
    fn try_from(input: CustomerRequest) -> Result<Self, Self::Error> {
        input.validate()?;
        let birthday = input
            .birthday
            .as_deref()
            .and_then(parse_iso_date)
            .ok_or_else(|| {
                ErrorStatus::Validation(vec!["\"birthday\" must be a YYYY-MM-DD date".into()])
            })?;
        Ok(Self {
            name: input.name.unwrap_or_default(),
            phone: input.phone.unwrap_or_default(),
            cpf: input.cpf.unwrap_or_default(),
            birthday,
        })
    }
}

pub struct CustomerTransformer;

impl Intake<GetCustomersRequest> for CustomerTransformer {
    type To = GetCustomersDto;
    fn emit(&self, input: GetCustomersRequest) -> Self::To {
        GetCustomersDto {
            cpf: input.cpf.filter(|cpf| !cpf.is_empty()),
        }
    }
}

impl Intake<GetCustomerRequest> for CustomerTransformer {
    type To = GetCustomerDto;
    fn emit(&self, input: GetCustomerRequest) -> Self::To {
        GetCustomerDto { id: input.id }
    }
}

impl TryIntake<CustomerRequest> for CustomerTransformer {
    type To = CreateCustomerDto;
    type Error = ErrorStatus;
    fn emit(&self, input: CustomerRequest) -> Result<Self::To, Self::Error> {
        let ValidCustomer {
            name,
            phone,
            cpf,
            birthday,
        } = ValidCustomer::try_from(input)?;
        Ok(CreateCustomerDto {
            name,
            phone,
            cpf,
            birthday,
        })
    }
}

impl TryIntake<(i32, CustomerRequest)> for CustomerTransformer {
    type To = UpdateCustomerDto;
    type Error = ErrorStatus;
    fn emit(&self, (id, input): (i32, CustomerRequest)) -> Result<Self::To, Self::Error> {
        let ValidCustomer {
            name,
            phone,
            cpf,
            birthday,
        } = ValidCustomer::try_from(input)?;
        Ok(UpdateCustomerDto {
            id,
            name,
            phone,
            cpf,
            birthday,
        })
    }
}
