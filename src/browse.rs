//! Searching, sorting and display formatting for the order listing.
//!
//! All functions are pure; front ends call them on a snapshot from the order actor.

use crate::model::{DirectoryEntry, Order};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Column an order listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Date,
    OrderNumber,
    Supplier,
    Material,
    Customer,
    Commercial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "number" | "ordernumber" | "order-number" => Ok(Self::OrderNumber),
            "supplier" => Ok(Self::Supplier),
            "material" => Ok(Self::Material),
            "customer" => Ok(Self::Customer),
            "commercial" => Ok(Self::Commercial),
            other => Err(format!("unknown sort field: {other}")),
        }
    }
}

/// Name ordering that ignores case and Latin-1 accents, so "Ângela" sorts with the
/// A's. Lowercase and then exact spelling break ties so the result is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let (lower_a, lower_b) = (a.to_lowercase(), b.to_lowercase());
    fold_accents(&lower_a)
        .cmp(fold_accents(&lower_b))
        .then_with(|| lower_a.cmp(&lower_b))
        .then_with(|| a.cmp(b))
}

fn fold_accents(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().map(|c| match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    })
}

/// Orders whose customer, material, service description or supplier contains `query`
/// (case-insensitive), or whose number contains it verbatim. The query is used as
/// typed, surrounding spaces included; only the empty query keeps everything. Input
/// order is preserved.
pub fn filter_orders(orders: &[Order], query: &str) -> Vec<Order> {
    if query.is_empty() {
        return orders.to_vec();
    }
    let needle = query.to_lowercase();
    orders
        .iter()
        .filter(|order| matches_query(order, &needle, query))
        .cloned()
        .collect()
}

fn matches_query(order: &Order, needle: &str, raw: &str) -> bool {
    let text_fields = [
        Some(order.customer.as_str()),
        Some(order.material.as_str()),
        order.service_description.as_deref(),
        Some(order.supplier.as_str()),
    ];
    text_fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
        || order.order_number.to_string().contains(raw)
}

/// Stable sort by `field`. Text columns compare case-insensitively.
pub fn sort_orders(orders: &mut [Order], field: SortField, direction: SortDirection) {
    orders.sort_by(|a, b| {
        let ordering = match field {
            SortField::Date => a.date.cmp(&b.date),
            SortField::OrderNumber => a.order_number.cmp(&b.order_number),
            SortField::Supplier => compare_names(&a.supplier, &b.supplier),
            SortField::Material => compare_names(&a.material, &b.material),
            SortField::Customer => compare_names(&a.customer, &b.customer),
            SortField::Commercial => compare_names(&a.commercial, &b.commercial),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Directory entries ordered by name, as selection lists show them.
pub fn sorted_by_name<E: DirectoryEntry>(mut entries: Vec<E>) -> Vec<E> {
    entries.sort_by(|a, b| compare_names(a.name(), b.name()));
    entries
}

/// `DD/MM/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Listing label for an order number, zero-padded to four digits: `#0007`.
pub fn display_number(order_number: u32) -> String {
    format!("#{order_number:04}")
}
