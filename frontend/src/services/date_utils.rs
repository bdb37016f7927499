use chrono::NaiveDate;
use js_sys::Date;

/// Today's date on the browser's local clock.
pub fn today() -> NaiveDate {
    let now = Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

/// Today in YYYY-MM-DD format, for `<input type="date" min=...>`
pub fn today_string() -> String {
    today().format(shared::validation::DATE_FORMAT).to_string()
}

/// Current instant as an RFC 3339 / ISO 8601 UTC timestamp
pub fn now_iso() -> String {
    String::from(Date::new_0().to_iso_string())
}
