use kernel::prelude::entity::{Customer, DestructCustomer};
use time::Date;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDto {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub cpf: String,
    pub birthday: Date,
}

impl From<Customer> for CustomerDto {
    fn from(value: Customer) -> Self {
        let DestructCustomer {
            id,
            name,
            phone,
            cpf,
            birthday,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
            cpf: cpf.into(),
            birthday: birthday.into(),
        }
    }
}

pub struct GetCustomersDto {
    pub cpf: Option<String>,
}

pub struct GetCustomerDto {
    pub id: i32,
}

pub struct CreateCustomerDto {
    pub name: String,
    pub phone: String,
    pub cpf: String,
    pub birthday: Date,
}

pub struct UpdateCustomerDto {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub cpf: String,
    pub birthday: Date,
}
