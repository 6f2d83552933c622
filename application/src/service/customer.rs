use error_stack::Report;
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{CustomerQuery, DependOnCustomerQuery};
use kernel::interface::update::{CustomerModifier, DependOnCustomerModifier};
use kernel::prelude::entity::{Birthday, Cpf, CustomerDraft, CustomerId, CustomerName, Phone};
use kernel::KernelError;

use crate::transfer::{
    CreateCustomerDto, CustomerDto, GetCustomerDto, GetCustomersDto, UpdateCustomerDto,
};

#[async_trait::async_trait]
pub trait GetCustomerService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnCustomerQuery<Connection>
{
    async fn get_customers(
        &self,
        dto: GetCustomersDto,
    ) -> error_stack::Result<Vec<CustomerDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let customers = self
            .customer_query()
            .find_all(&mut connection, dto.cpf.as_deref())
            .await?;

        Ok(customers.into_iter().map(CustomerDto::from).collect())
    }

    async fn get_customer(
        &self,
        dto: GetCustomerDto,
    ) -> error_stack::Result<Option<CustomerDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = CustomerId::new(dto.id);
        let customer = self.customer_query().find_by_id(&mut connection, &id).await?;

        Ok(customer.map(CustomerDto::from))
    }
}

impl<Connection: Transaction + Send, T> GetCustomerService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnCustomerQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait CreateCustomerService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnCustomerModifier<Connection>
{
    async fn create_customer(
        &self,
        dto: CreateCustomerDto,
    ) -> error_stack::Result<i32, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let customer = CustomerDraft::new(
            CustomerName::new(dto.name),
            Phone::new(dto.phone),
            Cpf::new(dto.cpf),
            Birthday::new(dto.birthday),
        );
        let id = self
            .customer_modifier()
            .create(&mut connection, &customer)
            .await?;
        connection.commit().await?;

        Ok(id.into())
    }
}

impl<Connection: Transaction + Send, T> CreateCustomerService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnCustomerModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait UpdateCustomerService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnCustomerModifier<Connection>
{
    async fn update_customer(&self, dto: UpdateCustomerDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = CustomerId::new(dto.id);
        let customer = CustomerDraft::new(
            CustomerName::new(dto.name),
            Phone::new(dto.phone),
            Cpf::new(dto.cpf),
            Birthday::new(dto.birthday),
        );
        let updated = self
            .customer_modifier()
            .update(&mut connection, &id, &customer)
            .await?;
        if !updated {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("Customer {} does not exist", dto.id)));
        }
        connection.commit().await?;

        Ok(())
    }
}

impl<Connection: Transaction + Send, T> UpdateCustomerService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnCustomerModifier<Connection>
{
}

#[cfg(test)]
mod test {
    use kernel::KernelError;
    use time::macros::date;

    use crate::service::fake::InMemoryDatabase;
    use crate::service::{CreateCustomerService, GetCustomerService, UpdateCustomerService};
    use crate::transfer::{
        CreateCustomerDto, GetCustomerDto, GetCustomersDto, UpdateCustomerDto,
    };

    fn customer(name: &str, cpf: &str) -> CreateCustomerDto {
        CreateCustomerDto {
            name: name.to_string(),
            phone: "21998899222".to_string(),
            cpf: cpf.to_string(),
            birthday: date!(1992 - 10 - 05),
        }
    }

    fn all() -> GetCustomersDto {
        GetCustomersDto { cpf: None }
    }

    #[tokio::test]
    async fn created_customer_can_be_found() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::default();

        let id = db
            .create_customer(customer("João Alfredo", "01234567890"))
            .await?;

        let found = db.get_customer(GetCustomerDto { id }).await?;
        let found = found.expect("customer was created");
        assert_eq!(found.name, "João Alfredo");
        assert_eq!(found.birthday, date!(1992 - 10 - 05));
        assert_eq!(db.get_customers(all()).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn missing_customer_is_none() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::default();
        assert!(db.get_customer(GetCustomerDto { id: 7 }).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_cpf_is_a_conflict() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::default();
        db.create_customer(customer("Ana", "01234567890")).await?;

        let report = db
            .create_customer(customer("Bia", "01234567890"))
            .await
            .unwrap_err();

        assert_eq!(report.current_context(), &KernelError::Conflict);
        assert_eq!(db.get_customers(all()).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn filter_by_cpf_prefix() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::default();
        db.create_customer(customer("Ana", "01234567890")).await?;
        db.create_customer(customer("Bia", "98765432100")).await?;

        let found = db
            .get_customers(GetCustomersDto {
                cpf: Some("012".to_string()),
            })
            .await?;

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Ana");
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_fields() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::default();
        let id = db.create_customer(customer("Ana", "01234567890")).await?;

        db.update_customer(UpdateCustomerDto {
            id,
            name: "Ana Maria".to_string(),
            phone: "2199887766".to_string(),
            cpf: "01234567890".to_string(),
            birthday: date!(1993 - 01 - 01),
        })
        .await?;

        let found = db.get_customer(GetCustomerDto { id }).await?.unwrap();
        assert_eq!(found.name, "Ana Maria");
        assert_eq!(found.phone, "2199887766");
        assert_eq!(found.birthday, date!(1993 - 01 - 01));
        Ok(())
    }

    #[tokio::test]
    async fn update_to_taken_cpf_is_a_conflict() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::default();
        db.create_customer(customer("Ana", "01234567890")).await?;
        let id = db.create_customer(customer("Bia", "98765432100")).await?;

        let report = db
            .update_customer(UpdateCustomerDto {
                id,
                name: "Bia".to_string(),
                phone: "21998899222".to_string(),
                cpf: "01234567890".to_string(),
                birthday: date!(1992 - 10 - 05),
            })
            .await
            .unwrap_err();

        assert_eq!(report.current_context(), &KernelError::Conflict);
        let found = db.get_customer(GetCustomerDto { id }).await?.unwrap();
        assert_eq!(found.cpf, "98765432100");
        Ok(())
    }

    #[tokio::test]
    async fn update_of_unknown_customer_is_not_found() {
        let db = InMemoryDatabase::default();

        let report = db
            .update_customer(UpdateCustomerDto {
                id: 99,
                name: "Nobody".to_string(),
                phone: "21998899222".to_string(),
                cpf: "01234567890".to_string(),
                birthday: date!(1992 - 10 - 05),
            })
            .await
            .unwrap_err();

        assert_eq!(report.current_context(), &KernelError::NotFound);
    }
}
