mod birthday;
mod cpf;
mod id;
mod name;
mod phone;

pub use self::{birthday::*, cpf::*, id::*, name::*, phone::*};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Customer {
    id: CustomerId,
    name: CustomerName,
    phone: Phone,
    cpf: Cpf,
    birthday: Birthday,
}

impl Customer {
    pub fn new(
        id: CustomerId,
        name: CustomerName,
        phone: Phone,
        cpf: Cpf,
        birthday: Birthday,
    ) -> Self {
        Self {
            id,
            name,
            phone,
            cpf,
            birthday,
        }
    }
}

/// Customer fields as submitted for creation or replacement.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct CustomerDraft {
    name: CustomerName,
    phone: Phone,
    cpf: Cpf,
    birthday: Birthday,
}

impl CustomerDraft {
    pub fn new(name: CustomerName, phone: Phone, cpf: Cpf, birthday: Birthday) -> Self {
        Self {
            name,
            phone,
            cpf,
            birthday,
        }
    }

    pub fn into_customer(self, id: CustomerId) -> Customer {
        let DestructCustomerDraft {
            name,
            phone,
            cpf,
            birthday,
        } = self.into_destruct();
        Customer::new(id, name, phone, cpf, birthday)
    }
}
