use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::holding::Holding;

/// Sentinel type filter meaning "show every instrument type".
pub const ALL_TYPES: &str = "All";

/// Holdings-table column a view can be ordered by.
///
/// Serde names match the camelCase column keys the table sends, so the
/// embedding UI can pass its sort state through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Name,
    Isin,
    Ticker,
    AssetType,
    Quantity,
    UnitPrice,
    TotalValue,
    CurrentPrice,
    CurrentTotalValue,
    PriceChange,
    PercentChange,
}

/// Sort direction for holdings views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Projects holdings into the shape a table view presents: filtered by
/// instrument type and ordered by a column. Never mutates its input.
pub struct ViewService;

impl ViewService {
    pub fn new() -> Self {
        Self
    }

    /// Keep only holdings of the given instrument type. The `"All"`
    /// sentinel and the empty string disable filtering.
    pub fn filter_by_type(&self, holdings: &[Holding], asset_type: &str) -> Vec<Holding> {
        if asset_type.is_empty() || asset_type == ALL_TYPES {
            return holdings.to_vec();
        }
        holdings
            .iter()
            .filter(|h| h.asset_type == asset_type)
            .cloned()
            .collect()
    }

    /// The filter options for the current holdings: `"All"` first, then
    /// each distinct non-empty instrument type in alphabetical order.
    pub fn unique_asset_types(&self, holdings: &[Holding]) -> Vec<String> {
        let distinct: BTreeSet<&str> = holdings
            .iter()
            .map(|h| h.asset_type.as_str())
            .filter(|t| !t.is_empty())
            .collect();

        let mut types = Vec::with_capacity(distinct.len() + 1);
        types.push(ALL_TYPES.to_string());
        types.extend(distinct.into_iter().map(String::from));
        types
    }

    /// Return a new, ordered copy of the holdings. The sort is stable and
    /// the input slice is left untouched.
    pub fn sort(
        &self,
        holdings: &[Holding],
        field: SortField,
        direction: SortDirection,
    ) -> Vec<Holding> {
        let mut sorted = holdings.to_vec();
        sorted.sort_by(|a, b| {
            let ordering = compare_by_field(a, b, field);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        sorted
    }
}

impl Default for ViewService {
    fn default() -> Self {
        Self::new()
    }
}

fn compare_by_field(a: &Holding, b: &Holding, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.cmp(&b.name),
        SortField::Isin => a.isin.cmp(&b.isin),
        SortField::Ticker => a.ticker.cmp(&b.ticker),
        SortField::AssetType => a.asset_type.cmp(&b.asset_type),
        SortField::Quantity => compare_numeric(Some(a.quantity), Some(b.quantity)),
        SortField::UnitPrice => compare_numeric(Some(a.unit_price), Some(b.unit_price)),
        SortField::TotalValue => compare_numeric(Some(a.total_value), Some(b.total_value)),
        SortField::CurrentPrice => compare_numeric(
            a.market.as_ref().map(|m| m.current_price),
            b.market.as_ref().map(|m| m.current_price),
        ),
        SortField::CurrentTotalValue => compare_numeric(
            a.market.as_ref().map(|m| m.current_total_value),
            b.market.as_ref().map(|m| m.current_total_value),
        ),
        SortField::PriceChange => compare_numeric(
            a.market.as_ref().map(|m| m.price_change),
            b.market.as_ref().map(|m| m.price_change),
        ),
        SortField::PercentChange => compare_numeric(
            a.market.as_ref().and_then(|m| m.percent_change),
            b.market.as_ref().and_then(|m| m.percent_change),
        ),
    }
}

/// Pairs with a missing operand compare as equal, so holdings without a
/// resolved quote keep their relative order instead of crashing the view.
fn compare_numeric(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}
