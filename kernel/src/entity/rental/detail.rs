use destructure::Destructure;
use vodca::References;

use crate::entity::{CategoryId, CategoryName, CustomerName, GameName, Rental};

/// A rental listed together with the customer, game and category it refers to.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct RentalDetail {
    rental: Rental,
    customer_name: CustomerName,
    game_name: GameName,
    category_id: CategoryId,
    category_name: CategoryName,
}

impl RentalDetail {
    pub fn new(
        rental: Rental,
        customer_name: CustomerName,
        game_name: GameName,
        category_id: CategoryId,
        category_name: CategoryName,
    ) -> Self {
        Self {
            rental,
            customer_name,
            game_name,
            category_id,
            category_name,
        }
    }
}
