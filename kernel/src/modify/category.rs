use crate::database::Transaction;
use crate::entity::{CategoryId, CategoryName};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CategoryModifier<Connection: Transaction>: 'static + Sync + Send {
    /// Fails with [`KernelError::Conflict`] when the name is taken.
    async fn create(
        &self,
        con: &mut Connection,
        name: &CategoryName,
    ) -> error_stack::Result<CategoryId, KernelError>;
}

pub trait DependOnCategoryModifier<Connection: Transaction>: 'static + Sync + Send {
    type CategoryModifier: CategoryModifier<Connection>;
    fn category_modifier(&self) -> &Self::CategoryModifier;
}
