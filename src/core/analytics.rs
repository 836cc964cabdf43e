//! Period bucketing, totals and pagination over stored expenses.

use anyhow::{anyhow, Error};
use chrono::{Datelike, Days, Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::core::expense::ExpenseRecord;

/// Named time window for filtering expenses. Buckets compare calendar days
/// only; time-of-day never matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Today,
    ThisWeek,
    ThisMonth,
    ThisYear,
    All,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::ThisWeek => "this-week",
            Period::ThisMonth => "this-month",
            Period::ThisYear => "this-year",
            Period::All => "all",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "today" => Ok(Period::Today),
            "this-week" => Ok(Period::ThisWeek),
            "this-month" => Ok(Period::ThisMonth),
            "this-year" => Ok(Period::ThisYear),
            "all" => Ok(Period::All),
            other => Err(anyhow!(
                "Unknown period '{other}', expected one of: today, this-week, this-month, this-year, all"
            )),
        }
    }
}

/// Filters against the current calendar day. "Today" is re-evaluated on every
/// call so a day boundary crossing is observed immediately.
pub fn filter_by_period(records: &[ExpenseRecord], period: Period) -> Vec<ExpenseRecord> {
    filter_by_period_on(records, period, Local::now().date_naive())
}

pub fn filter_by_period_on(
    records: &[ExpenseRecord],
    period: Period,
    today: NaiveDate,
) -> Vec<ExpenseRecord> {
    if period == Period::All {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| {
            // Records with unparseable dates never match a bucket
            record
                .day()
                .is_some_and(|day| in_period(day, period, today))
        })
        .cloned()
        .collect()
}

fn in_period(day: NaiveDate, period: Period, today: NaiveDate) -> bool {
    match period {
        Period::Today => day == today,
        Period::ThisWeek => {
            // Week runs Sunday through Saturday
            let start = today - Days::new(u64::from(today.weekday().num_days_from_sunday()));
            let end = start + Days::new(6);
            day >= start && day <= end
        }
        Period::ThisMonth => day.year() == today.year() && day.month() == today.month(),
        Period::ThisYear => day.year() == today.year(),
        Period::All => true,
    }
}

/// Sums expenses in the reporting currency. Uses the conversion snapshot when
/// present and falls back to the raw amount otherwise, so totals are
/// best-effort when conversions are missing.
pub fn total_in_reporting_currency(records: &[ExpenseRecord]) -> f64 {
    records
        .iter()
        .map(|record| {
            record
                .conversion
                .as_ref()
                .map_or(record.amount, |conversion| conversion.usd_amount)
        })
        .sum()
}

/// Headline dashboard figures. Income is the configured constant; the app
/// does not track income entries.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub balance: f64,
    pub income: f64,
    pub expenses: f64,
}

impl DashboardSummary {
    pub fn compute(records: &[ExpenseRecord], income: f64) -> Self {
        let expenses = total_in_reporting_currency(records);
        DashboardSummary {
            balance: income - expenses,
            income,
            expenses,
        }
    }
}

/// 1-based page slice. Out-of-range pages and a zero page size yield an
/// empty page rather than an error.
pub fn paginate(records: &[ExpenseRecord], page: usize, per_page: usize) -> Vec<ExpenseRecord> {
    if page == 0 || per_page == 0 {
        return Vec::new();
    }
    records
        .iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .cloned()
        .collect()
}

pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::currency::ConversionSnapshot;

    fn record(id: &str, date: &str, amount: f64) -> ExpenseRecord {
        ExpenseRecord {
            id: id.to_string(),
            category_id: "groceries".to_string(),
            amount,
            currency: "USD".to_string(),
            date: date.to_string(),
            created_at: format!("{date}T10:00:00Z"),
            receipt: None,
            conversion: None,
        }
    }

    fn converted(id: &str, date: &str, amount: f64, usd_amount: f64) -> ExpenseRecord {
        let mut record = record(id, date, amount);
        record.conversion = Some(ConversionSnapshot {
            original_amount: amount,
            original_currency: "EUR".to_string(),
            usd_amount,
            exchange_rate: usd_amount / amount,
            last_updated: format!("{date}T10:00:00Z"),
        });
        record
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_all_period_is_identity() {
        let records = vec![record("1", "2024-01-15", 100.0), record("2", "bogus", 5.0)];
        assert_eq!(filter_by_period_on(&records, Period::All, day(2024, 1, 20)), records);

        let empty: Vec<ExpenseRecord> = Vec::new();
        assert!(filter_by_period_on(&empty, Period::All, day(2024, 1, 20)).is_empty());
    }

    #[test]
    fn test_today_matches_calendar_day_only() {
        let records = vec![
            record("1", "2024-01-20", 10.0),
            record("2", "2024-01-19", 20.0),
        ];
        let filtered = filter_by_period_on(&records, Period::Today, day(2024, 1, 20));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn test_this_week_runs_sunday_through_saturday() {
        // 2024-01-17 is a Wednesday; its week is Jan 14 (Sun) to Jan 20 (Sat)
        let today = day(2024, 1, 17);
        let records = vec![
            record("sun", "2024-01-14", 1.0),
            record("sat", "2024-01-20", 2.0),
            record("before", "2024-01-13", 3.0),
            record("after", "2024-01-21", 4.0),
        ];
        let filtered = filter_by_period_on(&records, Period::ThisWeek, today);
        let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["sun", "sat"]);
    }

    #[test]
    fn test_this_month_keeps_only_current_month() {
        let records = vec![
            record("jan", "2024-01-15", 100.0),
            record("mar", "2024-03-15", 100.0),
        ];
        let filtered = filter_by_period_on(&records, Period::ThisMonth, day(2024, 1, 20));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "jan");
    }

    #[test]
    fn test_this_month_includes_leap_day() {
        let records = vec![record("leap", "2024-02-29", 50.0)];
        let filtered = filter_by_period_on(&records, Period::ThisMonth, day(2024, 2, 1));
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_this_year_spans_full_year() {
        let records = vec![
            record("jan1", "2024-01-01", 1.0),
            record("dec31", "2024-12-31", 2.0),
            record("prev", "2023-12-31", 3.0),
        ];
        let filtered = filter_by_period_on(&records, Period::ThisYear, day(2024, 6, 15));
        let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["jan1", "dec31"]);
    }

    #[test]
    fn test_malformed_dates_are_excluded() {
        let records = vec![
            record("good", "2024-01-20", 10.0),
            record("bad", "20-01-2024", 10.0),
        ];
        let filtered = filter_by_period_on(&records, Period::ThisYear, day(2024, 1, 20));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "good");
    }

    #[test]
    fn test_total_mixes_converted_and_raw_amounts() {
        let records = vec![
            converted("1", "2024-01-15", 100.0, 100.0),
            converted("2", "2024-01-15", 50.0, 55.0),
            record("3", "2024-01-15", 100.0),
        ];
        assert_eq!(total_in_reporting_currency(&records), 255.0);
    }

    #[test]
    fn test_total_of_empty_is_zero() {
        assert_eq!(total_in_reporting_currency(&[]), 0.0);
    }

    #[test]
    fn test_dashboard_summary_balance() {
        let records = vec![converted("1", "2024-01-15", 50.0, 55.0)];
        let summary = DashboardSummary::compute(&records, 10_840.0);
        assert_eq!(summary.income, 10_840.0);
        assert_eq!(summary.expenses, 55.0);
        assert_eq!(summary.balance, 10_785.0);
    }

    #[test]
    fn test_paginate_slices_one_based_pages() {
        let records: Vec<ExpenseRecord> = (1..=5)
            .map(|i| record(&i.to_string(), "2024-01-15", i as f64))
            .collect();

        let page1 = paginate(&records, 1, 2);
        let ids: Vec<&str> = page1.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);

        let page3 = paginate(&records, 3, 2);
        let ids: Vec<&str> = page3.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["5"]);

        assert!(paginate(&records, 4, 2).is_empty());
        assert!(paginate(&records, 0, 2).is_empty());
        assert_eq!(page_count(5, 2), 3);
        assert_eq!(page_count(0, 2), 0);
    }

    #[test]
    fn test_period_round_trips_through_strings() {
        for period in [
            Period::Today,
            Period::ThisWeek,
            Period::ThisMonth,
            Period::ThisYear,
            Period::All,
        ] {
            assert_eq!(period.as_str().parse::<Period>().unwrap(), period);
        }
        assert!("last-week".parse::<Period>().is_err());
    }
}
