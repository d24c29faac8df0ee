//! Sales Report
//!
//! Daily figures come from `GET /reports/sales?days=N`; the screen only
//! sums and averages them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::format::format_day;
use crate::money::{decimal_from_json, Money};

/// Reporting window offered on the report screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReportPeriod {
    Week,
    #[default]
    Month,
    Quarter,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 3] = [ReportPeriod::Week, ReportPeriod::Month, ReportPeriod::Quarter];

    pub fn days(&self) -> u32 {
        match self {
            ReportPeriod::Week => 7,
            ReportPeriod::Month => 30,
            ReportPeriod::Quarter => 90,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportPeriod::Week => "Minggu Ini",
            ReportPeriod::Month => "Bulan Ini",
            ReportPeriod::Quarter => "3 Bulan",
        }
    }

    pub fn from_days(days: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|period| period.days() == days)
    }
}

/// Figures for one calendar day
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySales {
    pub date: String,
    pub revenue: Money,
    #[serde(default)]
    pub customers: u64,
    #[serde(default)]
    pub transactions: u64,
}

impl DailySales {
    pub fn average_per_transaction(&self) -> Money {
        self.revenue.divided_by(self.transactions)
    }

    /// `"17 Agu"` for ISO dates, otherwise the label as the backend sent it
    pub fn day_label(&self) -> String {
        match NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d") {
            Ok(date) => format_day(date),
            Err(_) => self.date.clone(),
        }
    }
}

/// Share of sales for one category, in percent
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryShare {
    pub name: String,
    #[serde(deserialize_with = "decimal_from_json")]
    pub value: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SalesReport {
    #[serde(default)]
    pub daily: Vec<DailySales>,
    #[serde(default)]
    pub categories: Vec<CategoryShare>,
}

/// Response body: the report itself or wrapped in `data`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SalesReportResponse {
    Wrapped { data: SalesReport },
    Bare(SalesReport),
}

impl SalesReportResponse {
    pub fn into_report(self) -> SalesReport {
        match self {
            SalesReportResponse::Wrapped { data } => data,
            SalesReportResponse::Bare(report) => report,
        }
    }
}

/// Summed figures over the whole period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportTotals {
    pub revenue: Money,
    pub customers: u64,
    pub transactions: u64,
    pub average_per_transaction: Money,
}

impl SalesReport {
    pub fn totals(&self) -> ReportTotals {
        let revenue: Money = self.daily.iter().map(|day| day.revenue).sum();
        let customers = self.daily.iter().map(|day| day.customers).sum();
        let transactions = self.daily.iter().map(|day| day.transactions).sum();
        ReportTotals {
            revenue,
            customers,
            transactions,
            average_per_transaction: revenue.divided_by(transactions),
        }
    }

    /// The last `count` days, most recent first
    pub fn recent_days(&self, count: usize) -> Vec<DailySales> {
        self.daily.iter().rev().take(count).cloned().collect()
    }

    /// Highest daily revenue, used to scale the trend bars
    pub fn peak_revenue(&self) -> Money {
        self.daily.iter().map(|day| day.revenue).max().unwrap_or(Money::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, revenue: i64, customers: u64, transactions: u64) -> DailySales {
        DailySales {
            date: date.to_string(),
            revenue: Money::from(revenue),
            customers,
            transactions,
        }
    }

    #[test]
    fn test_totals() {
        let report = SalesReport {
            daily: vec![day("01 Okt", 50000, 10, 4), day("02 Okt", 70000, 12, 6)],
            categories: vec![],
        };
        let totals = report.totals();
        assert_eq!(totals.revenue, Money::from(120000));
        assert_eq!(totals.customers, 22);
        assert_eq!(totals.transactions, 10);
        assert_eq!(totals.average_per_transaction, Money::from(12000));
    }

    #[test]
    fn test_empty_report_has_zero_average() {
        let totals = SalesReport::default().totals();
        assert_eq!(totals.average_per_transaction, Money::ZERO);
        assert_eq!(totals.transactions, 0);
    }

    #[test]
    fn test_recent_days_most_recent_first() {
        let report = SalesReport {
            daily: (1..=10).map(|d| day(&format!("{:02} Okt", d), 1000 * d as i64, 1, 1)).collect(),
            categories: vec![],
        };
        let recent = report.recent_days(7);
        assert_eq!(recent.len(), 7);
        assert_eq!(recent[0].date, "10 Okt");
        assert_eq!(recent[6].date, "04 Okt");
        assert_eq!(report.peak_revenue(), Money::from(10000));
    }

    #[test]
    fn test_period_days() {
        assert_eq!(ReportPeriod::default().days(), 30);
        assert_eq!(ReportPeriod::from_days(90), Some(ReportPeriod::Quarter));
        assert_eq!(ReportPeriod::from_days(14), None);
    }

    #[test]
    fn test_wrapped_response() {
        let json = r#"{"data":{"daily":[{"date":"2026-10-19","revenue":"45000","customers":3,"transactions":2}],"categories":[{"name":"Makanan","value":45}]}}"#;
        let report = serde_json::from_str::<SalesReportResponse>(json).unwrap().into_report();
        assert_eq!(report.daily.len(), 1);
        assert_eq!(report.categories[0].value, Decimal::from(45));
        assert_eq!(report.daily[0].day_label(), "19 Okt");
        assert_eq!(day("Senin", 0, 0, 0).day_label(), "Senin");
    }
}
