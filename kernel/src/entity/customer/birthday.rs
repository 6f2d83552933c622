use serde::{Deserialize, Serialize};
use time::Date;
use vodca::{AsRefln, Fromln};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct Birthday(#[serde(with = "iso_date")] Date);

impl Birthday {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }
}
