use crate::database::Transaction;
use crate::entity::{Category, CategoryId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CategoryQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_all(&self, con: &mut Connection)
        -> error_stack::Result<Vec<Category>, KernelError>;

    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &CategoryId,
    ) -> error_stack::Result<Option<Category>, KernelError>;
}

pub trait DependOnCategoryQuery<Connection: Transaction>: Sync + Send + 'static {
    type CategoryQuery: CategoryQuery<Connection>;
    fn category_query(&self) -> &Self::CategoryQuery;
}
