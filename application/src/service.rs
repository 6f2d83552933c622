mod category;
mod customer;
mod game;
mod rental;

pub use self::{category::*, customer::*, game::*, rental::*};

#[cfg(test)]
mod fake;
