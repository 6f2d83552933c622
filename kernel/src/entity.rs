mod category;
mod common;
mod customer;
mod game;
mod rental;

pub use self::{category::*, common::*, customer::*, game::*, rental::*};
