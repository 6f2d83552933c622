use crate::database::Transaction;
use crate::entity::{Customer, CustomerId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CustomerQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_all(
        &self,
        con: &mut Connection,
        cpf_prefix: Option<&str>,
    ) -> error_stack::Result<Vec<Customer>, KernelError>;

    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &CustomerId,
    ) -> error_stack::Result<Option<Customer>, KernelError>;
}

pub trait DependOnCustomerQuery<Connection: Transaction>: Sync + Send + 'static {
    type CustomerQuery: CustomerQuery<Connection>;
    fn customer_query(&self) -> &Self::CustomerQuery;
}
