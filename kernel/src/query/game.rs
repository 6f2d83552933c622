use crate::database::Transaction;
use crate::entity::{Game, GameId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait GameQuery<Connection: Transaction>: Sync + Send + 'static {
    /// Games whose name starts with `name_prefix`, ignoring case. All games when `None`.
    async fn find_all(
        &self,
        con: &mut Connection,
        name_prefix: Option<&str>,
    ) -> error_stack::Result<Vec<Game>, KernelError>;

    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &GameId,
    ) -> error_stack::Result<Option<Game>, KernelError>;
}

pub trait DependOnGameQuery<Connection: Transaction>: Sync + Send + 'static {
    type GameQuery: GameQuery<Connection>;
    fn game_query(&self) -> &Self::GameQuery;
}
