use kernel::prelude::entity::{DestructGame, Game};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDto {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub stock_total: i32,
    pub category_id: i32,
    pub price_per_day: i64,
}

impl From<Game> for GameDto {
    fn from(value: Game) -> Self {
        let DestructGame {
            id,
            name,
            image,
            stock_total,
            category_id,
            price_per_day,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            stock_total: stock_total.into(),
            category_id: category_id.into(),
            price_per_day: price_per_day.into(),
        }
    }
}

pub struct GetGamesDto {
    pub name: Option<String>,
}

pub struct CreateGameDto {
    pub name: String,
    pub image: String,
    pub stock_total: i32,
    pub category_id: i32,
    pub price_per_day: i64,
}
