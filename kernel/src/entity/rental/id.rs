use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct RentalId(i32);

impl RentalId {
    pub fn new(id: impl Into<i32>) -> Self {
        Self(id.into())
    }
}
