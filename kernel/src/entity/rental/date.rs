use serde::{Deserialize, Serialize};
use time::Date;
use vodca::{AsRefln, Fromln};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct RentDate(#[serde(with = "iso_date")] Date);

impl RentDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct ReturnDate(#[serde(with = "iso_date")] Date);

impl ReturnDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }
}
