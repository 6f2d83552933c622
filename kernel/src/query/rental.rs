use crate::database::Transaction;
use crate::entity::{CustomerId, GameId, PricePerDay, Rental, RentalDetail, RentalId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait RentalQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_all(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<RentalDetail>, KernelError>;

    async fn find_by_customer_id(
        &self,
        con: &mut Connection,
        customer_id: &CustomerId,
    ) -> error_stack::Result<Vec<Rental>, KernelError>;

    async fn find_by_game_id(
        &self,
        con: &mut Connection,
        game_id: &GameId,
    ) -> error_stack::Result<Vec<Rental>, KernelError>;

    /// The rental along with the current daily price of its game.
    async fn find_with_price(
        &self,
        con: &mut Connection,
        id: &RentalId,
    ) -> error_stack::Result<Option<(Rental, PricePerDay)>, KernelError>;

    async fn count_active_by_game_id(
        &self,
        con: &mut Connection,
        game_id: &GameId,
    ) -> error_stack::Result<i64, KernelError>;
}

pub trait DependOnRentalQuery<Connection: Transaction>: Sync + Send + 'static {
    type RentalQuery: RentalQuery<Connection>;
    fn rental_query(&self) -> &Self::RentalQuery;
}
