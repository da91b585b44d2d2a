use chrono::{Local, NaiveDate};

pub fn today_string() -> String {
    day_key(Local::now().date_naive())
}

pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
