use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct DaysRented(i32);

impl DaysRented {
    pub const MIN: i32 = 2;

    pub fn new(days: impl Into<i32>) -> Self {
        Self(days.into())
    }

    pub fn is_allowed(&self) -> bool {
        self.0 >= Self::MIN
    }
}
