use crate::database::Transaction;
use crate::entity::{GameDraft, GameId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait GameModifier<Connection: Transaction>: 'static + Sync + Send {
    /// Fails with [`KernelError::Conflict`] when the name is taken and with
    /// [`KernelError::ReferenceNotFound`] when the category does not exist.
    async fn create(
        &self,
        con: &mut Connection,
        game: &GameDraft,
    ) -> error_stack::Result<GameId, KernelError>;
}

pub trait DependOnGameModifier<Connection: Transaction>: 'static + Sync + Send {
    type GameModifier: GameModifier<Connection>;
    fn game_modifier(&self) -> &Self::GameModifier;
}
