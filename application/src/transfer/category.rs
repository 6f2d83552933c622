use kernel::prelude::entity::{Category, DestructCategory};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        let DestructCategory { id, name } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

pub struct CreateCategoryDto {
    pub name: String,
}
