use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{CategoryQuery, DependOnCategoryQuery};
use kernel::interface::update::{CategoryModifier, DependOnCategoryModifier};
use kernel::prelude::entity::CategoryName;
use kernel::KernelError;

use crate::transfer::{CategoryDto, CreateCategoryDto};

#[async_trait::async_trait]
pub trait GetCategoryService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnCategoryQuery<Connection>
{
    async fn get_categories(&self) -> error_stack::Result<Vec<CategoryDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let categories = self.category_query().find_all(&mut connection).await?;

        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> GetCategoryService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnCategoryQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait CreateCategoryService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnCategoryModifier<Connection>
{
    async fn create_category(
        &self,
        dto: CreateCategoryDto,
    ) -> error_stack::Result<i32, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let name = CategoryName::new(dto.name);
        let id = self
            .category_modifier()
            .create(&mut connection, &name)
            .await?;
        connection.commit().await?;

        Ok(id.into())
    }
}

impl<Connection: Transaction + Send, T> CreateCategoryService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnCategoryModifier<Connection>
{
}
