mod id;
mod image;
mod name;
mod price;
mod stock;

pub use self::{id::*, image::*, name::*, price::*, stock::*};
use crate::entity::CategoryId;
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Game {
    id: GameId,
    name: GameName,
    image: GameImage,
    stock_total: StockTotal,
    category_id: CategoryId,
    price_per_day: PricePerDay,
}

impl Game {
    pub fn new(
        id: GameId,
        name: GameName,
        image: GameImage,
        stock_total: StockTotal,
        category_id: CategoryId,
        price_per_day: PricePerDay,
    ) -> Self {
        Self {
            id,
            name,
            image,
            stock_total,
            category_id,
            price_per_day,
        }
    }
}

/// A game that has not been stored yet.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct GameDraft {
    name: GameName,
    image: GameImage,
    stock_total: StockTotal,
    category_id: CategoryId,
    price_per_day: PricePerDay,
}

impl GameDraft {
    pub fn new(
        name: GameName,
        image: GameImage,
        stock_total: StockTotal,
        category_id: CategoryId,
        price_per_day: PricePerDay,
    ) -> Self {
        Self {
            name,
            image,
            stock_total,
            category_id,
            price_per_day,
        }
    }

    pub fn into_game(self, id: GameId) -> Game {
        let DestructGameDraft {
            name,
            image,
            stock_total,
            category_id,
            price_per_day,
        } = self.into_destruct();
        Game::new(id, name, image, stock_total, category_id, price_per_day)
    }
}
