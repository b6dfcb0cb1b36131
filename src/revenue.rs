//! Recognized revenue from delivered orders, bucketed around a reference date.
//!
//! Every delivered order counts toward the all-time total. Only orders whose
//! `delivered_at` parses as a date can land in the year, quarter and month buckets,
//! and each narrower bucket is a subset of the wider one.

use crate::clients::ProcessOrderClient;
use crate::clock::Clock;
use crate::model::{ProcessOrder, ProcessStatus};
use crate::order_actor::ProcessOrderError;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevenueSummary {
    pub year: i32,
    pub quarter: u32,
    pub month: u32,
    pub total_all: i64,
    pub total_year: i64,
    pub total_quarter: i64,
    pub total_month: i64,
}

/// Calendar quarter (1..=4) of a month (1..=12).
pub fn quarter_of(month: u32) -> u32 {
    (month - 1) / 3 + 1
}

pub fn summarize<'a>(orders: impl IntoIterator<Item = &'a ProcessOrder>, now: NaiveDate) -> RevenueSummary {
    let quarter = quarter_of(now.month());
    let mut summary = RevenueSummary {
        year: now.year(),
        quarter,
        month: now.month(),
        total_all: 0,
        total_year: 0,
        total_quarter: 0,
        total_month: 0,
    };

    for order in orders {
        if order.status != ProcessStatus::Delivered {
            continue;
        }
        let amount = order.total_quote_price;
        summary.total_all += amount;

        let Some(delivered) = order.delivered_on() else {
            continue;
        };
        if delivered.year() != now.year() {
            continue;
        }
        summary.total_year += amount;
        if quarter_of(delivered.month()) != quarter {
            continue;
        }
        summary.total_quarter += amount;
        if delivered.month() == now.month() {
            summary.total_month += amount;
        }
    }
    summary
}

/// Reads delivered orders and summarizes them against the clock's today.
#[derive(Clone)]
pub struct RevenueService {
    orders: ProcessOrderClient,
    clock: Arc<dyn Clock>,
}

impl RevenueService {
    pub fn new(orders: ProcessOrderClient, clock: Arc<dyn Clock>) -> Self {
        Self { orders, clock }
    }

    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<RevenueSummary, ProcessOrderError> {
        let delivered = self.orders.list_delivered().await?;
        Ok(summarize(&delivered, self.clock.today()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProcessOrderId, ProcessOrderInput};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn delivered(id: u32, total: i64, delivered_at: Option<&str>) -> ProcessOrder {
        let mut order = ProcessOrder::new(
            ProcessOrderId(id),
            ProcessOrderInput {
                company_name: "Daehan Metal".into(),
                quote_date: date(2024, 1, 5),
                category: "casting".into(),
                product_name: "valve body".into(),
                quantity: 10,
                manufacturing_cost: 0,
                total_quote_price: total,
                status: ProcessStatus::Delivered,
                actual_order_amount: None,
                related_file: None,
                due_date: date(2024, 6, 30),
            },
        );
        order.delivered_at = delivered_at.map(str::to_string);
        order
    }

    #[test]
    fn quarters() {
        assert_eq!(quarter_of(1), 1);
        assert_eq!(quarter_of(3), 1);
        assert_eq!(quarter_of(4), 2);
        assert_eq!(quarter_of(12), 4);
    }

    #[test]
    fn buckets_nest_inside_each_other() {
        let orders = [
            delivered(1, 1000, Some("2024-02-10")),
            delivered(2, 2000, Some("2024-05-03")),
            delivered(3, 400, Some("2023-05-03")),
        ];
        let summary = summarize(&orders, date(2024, 5, 20));

        assert_eq!(summary.year, 2024);
        assert_eq!(summary.quarter, 2);
        assert_eq!(summary.month, 5);
        assert_eq!(summary.total_all, 3400);
        assert_eq!(summary.total_year, 3000);
        assert_eq!(summary.total_quarter, 2000);
        assert_eq!(summary.total_month, 2000);
    }

    #[test]
    fn undated_deliveries_count_toward_all_time_only() {
        let orders = [
            delivered(1, 500, Some("not a date")),
            delivered(2, 700, None),
            delivered(3, 100, Some("2024-05-01")),
        ];
        let summary = summarize(&orders, date(2024, 5, 20));
        assert_eq!(summary.total_all, 1300);
        assert_eq!(summary.total_year, 100);
        assert_eq!(summary.total_month, 100);
    }

    #[test]
    fn other_statuses_are_ignored() {
        let mut quoting = delivered(1, 900, Some("2024-05-01"));
        quoting.status = ProcessStatus::Quoting;
        let summary = summarize(&[quoting], date(2024, 5, 20));
        assert_eq!(summary.total_all, 0);
    }
}
