use sqlx::PgConnection;

use kernel::interface::query::GameQuery;
use kernel::interface::update::GameModifier;
use kernel::prelude::entity::{
    CategoryId, Game, GameDraft, GameId, GameImage, GameName, PricePerDay, StockTotal,
};
use kernel::KernelError;

use crate::database::postgres::{like_prefix, PostgresConnection};
use crate::error::ConvertError;

pub struct PostgresGameRepository;

#[async_trait::async_trait]
impl GameQuery<PostgresConnection> for PostgresGameRepository {
    async fn find_all(
        &self,
        con: &mut PostgresConnection,
        name_prefix: Option<&str>,
    ) -> error_stack::Result<Vec<Game>, KernelError> {
        PgGameInternal::find_all(con, name_prefix).await
    }

    async fn find_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &GameId,
    ) -> error_stack::Result<Option<Game>, KernelError> {
        PgGameInternal::find_by_id(con, id).await
    }
}

#[async_trait::async_trait]
impl GameModifier<PostgresConnection> for PostgresGameRepository {
    async fn create(
        &self,
        con: &mut PostgresConnection,
        game: &GameDraft,
    ) -> error_stack::Result<GameId, KernelError> {
        PgGameInternal::create(con, game).await
    }
}

#[derive(sqlx::FromRow)]
struct GameRow {
    id: i32,
    name: String,
    image: String,
    stock_total: i32,
    category_id: i32,
    price_per_day: i64,
}

impl From<GameRow> for Game {
    fn from(row: GameRow) -> Self {
        Game::new(
            GameId::new(row.id),
            GameName::new(row.name),
            GameImage::new(row.image),
            StockTotal::new(row.stock_total),
            CategoryId::new(row.category_id),
            PricePerDay::new(row.price_per_day),
        )
    }
}

pub(in crate::database) struct PgGameInternal;

impl PgGameInternal {
    async fn find_all(
        con: &mut PgConnection,
        name_prefix: Option<&str>,
    ) -> error_stack::Result<Vec<Game>, KernelError> {
        let rows = sqlx::query_as::<_, GameRow>(
            // language=postgresql
            r#"
            SELECT id, name, image, stock_total, category_id, price_per_day
            FROM games
            WHERE $1::TEXT IS NULL OR name ILIKE $1
            ORDER BY id
            "#,
        )
        .bind(name_prefix.map(like_prefix))
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Game::from).collect())
    }

    async fn find_by_id(
        con: &mut PgConnection,
        id: &GameId,
    ) -> error_stack::Result<Option<Game>, KernelError> {
        let row = sqlx::query_as::<_, GameRow>(
            // language=postgresql
            r#"
            SELECT id, name, image, stock_total, category_id, price_per_day
            FROM games
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Game::from))
    }

    async fn create(
        con: &mut PgConnection,
        game: &GameDraft,
    ) -> error_stack::Result<GameId, KernelError> {
        let id = sqlx::query_scalar::<_, i32>(
            // language=postgresql
            r#"
            INSERT INTO games (name, image, stock_total, category_id, price_per_day)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(game.name().as_ref())
        .bind(game.image().as_ref())
        .bind(game.stock_total().as_ref())
        .bind(game.category_id().as_ref())
        .bind(game.price_per_day().as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(GameId::new(id))
    }
}
