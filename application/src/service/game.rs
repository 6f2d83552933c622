use error_stack::Report;
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{CategoryQuery, DependOnCategoryQuery, DependOnGameQuery, GameQuery};
use kernel::interface::update::{DependOnGameModifier, GameModifier};
use kernel::prelude::entity::{
    CategoryId, GameDraft, GameImage, GameName, PricePerDay, StockTotal,
};
use kernel::KernelError;

use crate::transfer::{CreateGameDto, GameDto, GetGamesDto};

#[async_trait::async_trait]
pub trait GetGameService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnGameQuery<Connection>
{
    async fn get_games(&self, dto: GetGamesDto) -> error_stack::Result<Vec<GameDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let games = self
            .game_query()
            .find_all(&mut connection, dto.name.as_deref())
            .await?;

        Ok(games.into_iter().map(GameDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> GetGameService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnGameQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait CreateGameService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnCategoryQuery<Connection>
    + DependOnGameModifier<Connection>
{
    async fn create_game(&self, dto: CreateGameDto) -> error_stack::Result<i32, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let category_id = CategoryId::new(dto.category_id);
        let category = self
            .category_query()
            .find_by_id(&mut connection, &category_id)
            .await?;
        if category.is_none() {
            return Err(Report::new(KernelError::ReferenceNotFound)
                .attach_printable(format!("Category {} does not exist", dto.category_id)));
        }

        let game = GameDraft::new(
            GameName::new(dto.name),
            GameImage::new(dto.image),
            StockTotal::new(dto.stock_total),
            category_id,
            PricePerDay::new(dto.price_per_day),
        );
        let id = self.game_modifier().create(&mut connection, &game).await?;
        connection.commit().await?;

        Ok(id.into())
    }
}

impl<Connection: Transaction + Send, T> CreateGameService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnCategoryQuery<Connection>
        + DependOnGameModifier<Connection>
{
}
