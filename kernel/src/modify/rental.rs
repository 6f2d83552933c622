use crate::database::Transaction;
use crate::entity::{DelayFee, RentalDraft, RentalId, ReturnDate};
use crate::KernelError;

#[async_trait::async_trait]
pub trait RentalModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        rental: &RentalDraft,
    ) -> error_stack::Result<RentalId, KernelError>;

    /// Closes the rental if it is still active.
    ///
    /// Returns `false` when the rental does not exist or was returned before,
    /// leaving the stored row untouched.
    async fn mark_returned(
        &self,
        con: &mut Connection,
        id: &RentalId,
        return_date: &ReturnDate,
        delay_fee: Option<&DelayFee>,
    ) -> error_stack::Result<bool, KernelError>;
}

pub trait DependOnRentalModifier<Connection: Transaction>: 'static + Sync + Send {
    type RentalModifier: RentalModifier<Connection>;
    fn rental_modifier(&self) -> &Self::RentalModifier;
}
