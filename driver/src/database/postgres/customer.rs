use sqlx::PgConnection;
use time::Date;

use kernel::interface::query::CustomerQuery;
use kernel::interface::update::CustomerModifier;
use kernel::prelude::entity::{
    Birthday, Cpf, Customer, CustomerDraft, CustomerId, CustomerName, Phone,
};
use kernel::KernelError;

use crate::database::postgres::{like_prefix, PostgresConnection};
use crate::error::ConvertError;

pub struct PostgresCustomerRepository;

#[async_trait::async_trait]
impl CustomerQuery<PostgresConnection> for PostgresCustomerRepository {
    async fn find_all(
        &self,
        con: &mut PostgresConnection,
        cpf_prefix: Option<&str>,
    ) -> error_stack::Result<Vec<Customer>, KernelError> {
        PgCustomerInternal::find_all(con, cpf_prefix).await
    }

    async fn find_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &CustomerId,
    ) -> error_stack::Result<Option<Customer>, KernelError> {
        PgCustomerInternal::find_by_id(con, id).await
    }
}

#[async_trait::async_trait]
impl CustomerModifier<PostgresConnection> for PostgresCustomerRepository {
    async fn create(
        &self,
        con: &mut PostgresConnection,
        customer: &CustomerDraft,
    ) -> error_stack::Result<CustomerId, KernelError> {
        PgCustomerInternal::create(con, customer).await
    }

    async fn update(
        &self,
        con: &mut PostgresConnection,
        id: &CustomerId,
        customer: &CustomerDraft,
    ) -> error_stack::Result<bool, KernelError> {
        PgCustomerInternal::update(con, id, customer).await
    }
}

#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: i32,
    name: String,
    phone: String,
    cpf: String,
    birthday: Date,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer::new(
            CustomerId::new(row.id),
            CustomerName::new(row.name),
            Phone::new(row.phone),
            Cpf::new(row.cpf),
            Birthday::new(row.birthday),
        )
    }
}

pub(in crate::database) struct PgCustomerInternal;

impl PgCustomerInternal {
    async fn find_all(
        con: &mut PgConnection,
        cpf_prefix: Option<&str>,
    ) -> error_stack::Result<Vec<Customer>, KernelError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            // language=postgresql
            r#"
            SELECT id, name, phone, cpf, birthday
            FROM customers
            WHERE $1::TEXT IS NULL OR cpf LIKE $1
            ORDER BY id
            "#,
        )
        .bind(cpf_prefix.map(like_prefix))
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn find_by_id(
        con: &mut PgConnection,
        id: &CustomerId,
    ) -> error_stack::Result<Option<Customer>, KernelError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            // language=postgresql
            r#"
            SELECT id, name, phone, cpf, birthday
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Customer::from))
    }

    async fn create(
        con: &mut PgConnection,
        customer: &CustomerDraft,
    ) -> error_stack::Result<CustomerId, KernelError> {
        let id = sqlx::query_scalar::<_, i32>(
            // language=postgresql
            r#"
            INSERT INTO customers (name, phone, cpf, birthday)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(customer.name().as_ref())
        .bind(customer.phone().as_ref())
        .bind(customer.cpf().as_ref())
        .bind(customer.birthday().as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(CustomerId::new(id))
    }

    async fn update(
        con: &mut PgConnection,
        id: &CustomerId,
        customer: &CustomerDraft,
    ) -> error_stack::Result<bool, KernelError> {
        let result = sqlx::query(
            // language=postgresql
            r#"
            UPDATE customers
            SET name = $2, phone = $3, cpf = $4, birthday = $5
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .bind(customer.name().as_ref())
        .bind(customer.phone().as_ref())
        .bind(customer.cpf().as_ref())
        .bind(customer.birthday().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(result.rows_affected() > 0)
    }
}
