use std::ops::{Deref, DerefMut};

use error_stack::{Report, ResultExt};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Error, PgConnection, Pool, Postgres};

use kernel::interface::clock::DependOnClock;
use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnCategoryQuery, DependOnCustomerQuery, DependOnGameQuery, DependOnRentalQuery,
};
use kernel::interface::update::{
    DependOnCategoryModifier, DependOnCustomerModifier, DependOnGameModifier,
    DependOnRentalModifier,
};
use kernel::KernelError;

use crate::clock::SystemClock;
use crate::env;
use crate::error::ConvertError;

pub use self::{category::*, customer::*, game::*, rental::*};

mod category;
mod customer;
mod game;
mod rental;

static DATABASE_URL: &str = "DATABASE_URL";
static DATABASE_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone)]
pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(DATABASE_URL)?;
        let max_connections = match dotenvy::var(DATABASE_MAX_CONNECTIONS) {
            Ok(value) => value
                .parse::<u32>()
                .change_context_lazy(|| KernelError::Internal)
                .attach_printable_lazy(|| {
                    format!("{DATABASE_MAX_CONNECTIONS} must be a positive number: {value}")
                })?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(&url)
            .await
            .convert_error()
            .attach_printable("Failed to connect to postgres")?;
        tracing::debug!(max_connections, "postgres pool ready");
        Ok(Self { pool })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait::async_trait]
impl DatabaseConnection<PostgresConnection> for PostgresDatabase {
    async fn transact(&self) -> error_stack::Result<PostgresConnection, KernelError> {
        let con = self.pool.begin().await.convert_error()?;
        Ok(PostgresConnection(con))
    }
}

/// A transaction on one pooled connection. Dropping it without commit rolls back.
pub struct PostgresConnection(sqlx::Transaction<'static, Postgres>);

#[async_trait::async_trait]
impl Transaction for PostgresConnection {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()
    }
}

impl Deref for PostgresConnection {
    type Target = PgConnection;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PostgresConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl DependOnClock for PostgresDatabase {
    type Clock = SystemClock;
    fn clock(&self) -> &Self::Clock {
        &SystemClock
    }
}

impl DependOnCategoryQuery<PostgresConnection> for PostgresDatabase {
    type CategoryQuery = PostgresCategoryRepository;
    fn category_query(&self) -> &Self::CategoryQuery {
        &PostgresCategoryRepository
    }
}

impl DependOnCategoryModifier<PostgresConnection> for PostgresDatabase {
    type CategoryModifier = PostgresCategoryRepository;
    fn category_modifier(&self) -> &Self::CategoryModifier {
        &PostgresCategoryRepository
    }
}

impl DependOnGameQuery<PostgresConnection> for PostgresDatabase {
    type GameQuery = PostgresGameRepository;
    fn game_query(&self) -> &Self::GameQuery {
        &PostgresGameRepository
    }
}

impl DependOnGameModifier<PostgresConnection> for PostgresDatabase {
    type GameModifier = PostgresGameRepository;
    fn game_modifier(&self) -> &Self::GameModifier {
        &PostgresGameRepository
    }
}

impl DependOnCustomerQuery<PostgresConnection> for PostgresDatabase {
    type CustomerQuery = PostgresCustomerRepository;
    fn customer_query(&self) -> &Self::CustomerQuery {
        &PostgresCustomerRepository
    }
}

impl DependOnCustomerModifier<PostgresConnection> for PostgresDatabase {
    type CustomerModifier = PostgresCustomerRepository;
    fn customer_modifier(&self) -> &Self::CustomerModifier {
        &PostgresCustomerRepository
    }
}

impl DependOnRentalQuery<PostgresConnection> for PostgresDatabase {
    type RentalQuery = PostgresRentalRepository;
    fn rental_query(&self) -> &Self::RentalQuery {
        &PostgresRentalRepository
    }
}

impl DependOnRentalModifier<PostgresConnection> for PostgresDatabase {
    type RentalModifier = PostgresRentalRepository;
    fn rental_modifier(&self) -> &Self::RentalModifier {
        &PostgresRentalRepository
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let kind = match &error {
                Error::PoolTimedOut => KernelError::Timeout,
                Error::Database(e) if e.is_unique_violation() => KernelError::Conflict,
                Error::Database(e) if e.is_foreign_key_violation() => {
                    KernelError::ReferenceNotFound
                }
                _ => KernelError::Internal,
            };
            Report::from(error).change_context(kind)
        })
    }
}

/// `ILIKE`/`LIKE` pattern matching values that start with `prefix` literally.
pub(in crate::database) fn like_prefix(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
pub(in crate::database) fn unique(base: &str) -> String {
    format!("{base} {}", rand::random::<u32>())
}
