use sqlx::PgConnection;

use kernel::interface::query::CategoryQuery;
use kernel::interface::update::CategoryModifier;
use kernel::prelude::entity::{Category, CategoryId, CategoryName};
use kernel::KernelError;

use crate::database::postgres::PostgresConnection;
use crate::error::ConvertError;

pub struct PostgresCategoryRepository;

#[async_trait::async_trait]
impl CategoryQuery<PostgresConnection> for PostgresCategoryRepository {
    async fn find_all(
        &self,
        con: &mut PostgresConnection,
    ) -> error_stack::Result<Vec<Category>, KernelError> {
        PgCategoryInternal::find_all(con).await
    }

    async fn find_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &CategoryId,
    ) -> error_stack::Result<Option<Category>, KernelError> {
        PgCategoryInternal::find_by_id(con, id).await
    }
}

#[async_trait::async_trait]
impl CategoryModifier<PostgresConnection> for PostgresCategoryRepository {
    async fn create(
        &self,
        con: &mut PostgresConnection,
        name: &CategoryName,
    ) -> error_stack::Result<CategoryId, KernelError> {
        PgCategoryInternal::create(con, name).await
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i32,
    name: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category::new(CategoryId::new(row.id), CategoryName::new(row.name))
    }
}

pub(in crate::database) struct PgCategoryInternal;

impl PgCategoryInternal {
    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Category>, KernelError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            // language=postgresql
            r#"
            SELECT id, name
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn find_by_id(
        con: &mut PgConnection,
        id: &CategoryId,
    ) -> error_stack::Result<Option<Category>, KernelError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            // language=postgresql
            r#"
            SELECT id, name
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Category::from))
    }

    async fn create(
        con: &mut PgConnection,
        name: &CategoryName,
    ) -> error_stack::Result<CategoryId, KernelError> {
        let id = sqlx::query_scalar::<_, i32>(
            // language=postgresql
            r#"
            INSERT INTO categories (name)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(name.as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(CategoryId::new(id))
    }
}
