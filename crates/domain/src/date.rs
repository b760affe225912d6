use chrono::NaiveDate;

/// Parses a `YYYY-MM-DD` date string into a calendar date, rejecting
/// dates outside the supported year range and days that do not exist
/// in the given month.
pub fn parse_date(datestr: &str) -> anyhow::Result<NaiveDate> {
    let dates = datestr.split('-').collect::<Vec<_>>();
    if dates.len() != 3 {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }
    let year = dates[0].parse::<i32>();
    let month = dates[1].parse::<u32>();
    let day = dates[2].parse::<u32>();

    if year.is_err() || month.is_err() || day.is_err() {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }

    let year = year.unwrap();
    let month = month.unwrap();
    let day = day.unwrap();
    if !(1970..=2100).contains(&year) || !(1..=12).contains(&month) {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }

    let month_length = get_month_length(year, month);

    if day < 1 || day > month_length {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow::Error::msg(datestr.to_string()))
}

pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

// month: January -> 1
pub fn get_month_length(year: i32, month: u32) -> u32 {
    match month - 1 {
        0 => 31,
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        2 => 31,
        3 => 30,
        4 => 31,
        5 => 30,
        6 => 31,
        7 => 31,
        8 => 30,
        9 => 31,
        10 => 30,
        11 => 31,
        _ => panic!("Invalid month"),
    }
}

/// The first and last calendar day of the given month. This is the
/// authoritative month boundary for range queries, February included.
pub fn month_span(year: i32, month: u32) -> anyhow::Result<(NaiveDate, NaiveDate)> {
    if !(1970..=2100).contains(&year) || !(1..=12).contains(&month) {
        return Err(anyhow::Error::msg(format!(
            "Invalid year and month: {}-{}",
            year, month
        )));
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let last = NaiveDate::from_ymd_opt(year, month, get_month_length(year, month));
    match (first, last) {
        (Some(first), Some(last)) => Ok((first, last)),
        _ => Err(anyhow::Error::msg(format!(
            "Invalid year and month: {}-{}",
            year, month
        ))),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_accepts_valid_dates() {
        let valid_dates = vec![
            "2018-1-1",
            "2025-12-31",
            "2020-1-12",
            "2020-2-29",
            "2020-02-2",
            "2020-02-02",
            "2026-01-26",
        ];

        for date in &valid_dates {
            assert!(parse_date(date).is_ok());
        }
    }

    #[test]
    fn it_rejects_invalid_dates() {
        let invalid_dates = vec![
            "2018--1-1",
            "2020-1-32",
            "2020-2-30",
            "2021-2-29",
            "2020-0-1",
            "2020-1-0",
            "1969-1-1",
            "garbage",
        ];

        for date in &invalid_dates {
            assert!(parse_date(date).is_err());
        }
    }

    #[test]
    fn it_computes_month_spans() {
        let (first, last) = month_span(2026, 2).unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());

        // Leap year
        let (_, last) = month_span(2028, 2).unwrap();
        assert_eq!(last, NaiveDate::from_ymd_opt(2028, 2, 29).unwrap());

        let (_, last) = month_span(2026, 4).unwrap();
        assert_eq!(last, NaiveDate::from_ymd_opt(2026, 4, 30).unwrap());

        let (_, last) = month_span(2026, 12).unwrap();
        assert_eq!(last, NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());
    }

    #[test]
    fn it_rejects_invalid_month_spans() {
        assert!(month_span(2026, 0).is_err());
        assert!(month_span(2026, 13).is_err());
        assert!(month_span(10_000, 1).is_err());
    }
}
