use crate::database::Transaction;
use crate::entity::{CustomerDraft, CustomerId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CustomerModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        customer: &CustomerDraft,
    ) -> error_stack::Result<CustomerId, KernelError>;

    /// Replaces every field of the customer. Returns `false` when no customer has the id.
    async fn update(
        &self,
        con: &mut Connection,
        id: &CustomerId,
        customer: &CustomerDraft,
    ) -> error_stack::Result<bool, KernelError>;
}

pub trait DependOnCustomerModifier<Connection: Transaction>: 'static + Sync + Send {
    type CustomerModifier: CustomerModifier<Connection>;
    fn customer_modifier(&self) -> &Self::CustomerModifier;
}
