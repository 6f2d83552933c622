mod id;
mod name;

pub use self::{id::*, name::*};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Category {
    id: CategoryId,
    name: CategoryName,
}

impl Category {
    pub fn new(id: CategoryId, name: CategoryName) -> Self {
        Self { id, name }
    }
}
