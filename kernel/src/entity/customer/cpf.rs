use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Brazilian individual taxpayer id, 11 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct Cpf(String);

impl Cpf {
    pub fn new(cpf: impl Into<String>) -> Self {
        Self(cpf.into())
    }
}
