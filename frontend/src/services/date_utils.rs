use chrono::NaiveDate;
use shared::validate::parse_form_date;

/// Get current date in YYYY-MM-DD format
pub fn current_date() -> String {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    format!("{:04}-{:02}-{:02}", year as u32, month as u32, day as u32)
}

/// Current date as a `NaiveDate`, for seeding the form and the past-date
/// rule. The browser clock is the only time source in this app.
pub fn today() -> NaiveDate {
    parse_form_date(&current_date()).unwrap_or(NaiveDate::MIN)
}
