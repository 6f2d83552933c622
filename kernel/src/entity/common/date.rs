use time::format_description::FormatItem;
use time::macros::format_description;
use time::Date;

const ISO_DATE: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses a calendar date written as `YYYY-MM-DD`.
pub fn parse_iso_date(value: &str) -> Option<Date> {
    Date::parse(value, ISO_DATE).ok()
}
