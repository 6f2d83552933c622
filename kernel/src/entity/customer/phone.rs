use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct Phone(String);

impl Phone {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }
}
