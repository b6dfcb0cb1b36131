//! Manufacturing process orders.
//!
//! An order's unit price and margin are derived from its quote figures and are
//! recomputed whenever the order is written; callers never supply them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

resource_id!(
    /// Type-safe identifier for process orders.
    ProcessOrderId,
    "order"
);

/// Date format of `delivered_at` and every other order date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessStatus {
    Quoting,
    InProduction,
    Delivered,
    NotProceeding,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessOrder {
    pub id: ProcessOrderId,
    pub company_name: String,
    pub quote_date: NaiveDate,
    pub category: String,
    pub product_name: String,
    pub quantity: u32,
    pub manufacturing_cost: i64,
    pub total_quote_price: i64,
    pub unit_quote_price: i64,
    /// Percent of the quote left after manufacturing cost. `None` for a zero quote.
    pub margin_rate: Option<f64>,
    pub status: ProcessStatus,
    pub actual_order_amount: Option<i64>,
    pub related_file: Option<String>,
    /// Kept as text: stores written by older tools may hold values that are not dates.
    pub delivered_at: Option<String>,
    pub due_date: NaiveDate,
}

impl ProcessOrder {
    /// Builds an order from `input` with derived fields filled in.
    pub fn new(id: ProcessOrderId, input: ProcessOrderInput) -> Self {
        let mut order = Self {
            id,
            company_name: input.company_name,
            quote_date: input.quote_date,
            category: input.category,
            product_name: input.product_name,
            quantity: input.quantity,
            manufacturing_cost: input.manufacturing_cost,
            total_quote_price: input.total_quote_price,
            unit_quote_price: 0,
            margin_rate: None,
            status: input.status,
            actual_order_amount: input.actual_order_amount,
            related_file: input.related_file,
            delivered_at: None,
            due_date: input.due_date,
        };
        order.recompute_derived();
        order
    }

    pub fn recompute_derived(&mut self) {
        self.unit_quote_price = unit_quote_price(self.total_quote_price, self.quantity);
        self.margin_rate = margin_rate(self.total_quote_price, self.manufacturing_cost);
    }

    /// Merges every field present in `update`, then recomputes derived fields.
    pub fn apply(&mut self, update: ProcessOrderUpdate) {
        if let Some(v) = update.company_name {
            self.company_name = v;
        }
        if let Some(v) = update.quote_date {
            self.quote_date = v;
        }
        if let Some(v) = update.category {
            self.category = v;
        }
        if let Some(v) = update.product_name {
            self.product_name = v;
        }
        if let Some(v) = update.quantity {
            self.quantity = v;
        }
        if let Some(v) = update.manufacturing_cost {
            self.manufacturing_cost = v;
        }
        if let Some(v) = update.total_quote_price {
            self.total_quote_price = v;
        }
        if let Some(v) = update.status {
            self.status = v;
        }
        if let Some(v) = update.actual_order_amount {
            self.actual_order_amount = v;
        }
        if let Some(v) = update.related_file {
            self.related_file = v;
        }
        if let Some(v) = update.due_date {
            self.due_date = v;
        }
        self.recompute_derived();
    }

    /// `delivered_at` as a date, if it is one.
    pub fn delivered_on(&self) -> Option<NaiveDate> {
        self.delivered_at
            .as_deref()
            .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok())
    }
}

/// `floor(total / quantity)`, or 0 when there is no quantity.
pub fn unit_quote_price(total_quote_price: i64, quantity: u32) -> i64 {
    if quantity == 0 {
        return 0;
    }
    total_quote_price.div_euclid(i64::from(quantity))
}

/// `(total - cost) / total * 100`, or `None` when the quote is not positive.
pub fn margin_rate(total_quote_price: i64, manufacturing_cost: i64) -> Option<f64> {
    if total_quote_price <= 0 {
        return None;
    }
    let total = total_quote_price as f64;
    Some((total - manufacturing_cost as f64) / total * 100.0)
}

/// Everything a caller provides when creating an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessOrderInput {
    pub company_name: String,
    pub quote_date: NaiveDate,
    pub category: String,
    pub product_name: String,
    pub quantity: u32,
    pub manufacturing_cost: i64,
    pub total_quote_price: i64,
    pub status: ProcessStatus,
    #[serde(default)]
    pub actual_order_amount: Option<i64>,
    #[serde(default)]
    pub related_file: Option<String>,
    pub due_date: NaiveDate,
}

/// A partial update. Absent fields are left alone.
///
/// For the nullable fields the outer `Option` says whether to touch the field and the
/// inner one is the new value, so `{"related_file": null}` clears the file while an
/// omitted `related_file` keeps it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessOrderUpdate {
    pub company_name: Option<String>,
    pub quote_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub product_name: Option<String>,
    pub quantity: Option<u32>,
    pub manufacturing_cost: Option<i64>,
    pub total_quote_price: Option<i64>,
    pub status: Option<ProcessStatus>,
    #[serde(default, deserialize_with = "super::present")]
    pub actual_order_amount: Option<Option<i64>>,
    #[serde(default, deserialize_with = "super::present")]
    pub related_file: Option<Option<String>>,
    pub due_date: Option<NaiveDate>,
}

impl ProcessOrderUpdate {
    pub fn status(status: ProcessStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

/// A full input overwrites every mutable field.
impl From<ProcessOrderInput> for ProcessOrderUpdate {
    fn from(input: ProcessOrderInput) -> Self {
        Self {
            company_name: Some(input.company_name),
            quote_date: Some(input.quote_date),
            category: Some(input.category),
            product_name: Some(input.product_name),
            quantity: Some(input.quantity),
            manufacturing_cost: Some(input.manufacturing_cost),
            total_quote_price: Some(input.total_quote_price),
            status: Some(input.status),
            actual_order_amount: Some(input.actual_order_amount),
            related_file: Some(input.related_file),
            due_date: Some(input.due_date),
        }
    }
}
