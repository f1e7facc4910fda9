//! Result Mapper
//!
//! Converts a raw store payload into a [`SearchResult`]. Every field is read
//! independently and falls back to its own default when absent or null.
//! Numbers found in text fields are rendered as text; any other unexpected
//! type falls back to the default. `available` also accepts `0`/`1` and
//! textual booleans. `price` is the only field that can fail:
//! it accepts numbers and numeric strings and rejects everything else.

use serde_json::Value;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Payload, SearchResult};

pub const DEFAULT_PROD_NAME: &str = "Unknown Product";
pub const DEFAULT_DETAIL_DESC: &str = "No description available";
pub const DEFAULT_PRICE: f64 = 0.0;
pub const DEFAULT_AVAILABLE: bool = true;

/// Payload key holding the product colour
const COLOR_FIELD: &str = "colour_group_name";

pub fn map_payload(payload: &Payload) -> CatalogResult<SearchResult> {
    Ok(SearchResult {
        image_url: text_field(payload, "image_url", ""),
        prod_name: text_field(payload, "prod_name", DEFAULT_PROD_NAME),
        detail_desc: text_field(payload, "detail_desc", DEFAULT_DETAIL_DESC),
        product_type_name: text_field(payload, "product_type_name", ""),
        index_group_name: text_field(payload, "index_group_name", ""),
        price: price_field(payload)?,
        article_id: text_field(payload, "article_id", ""),
        available: bool_field(payload, "available", DEFAULT_AVAILABLE),
        color: text_field(payload, COLOR_FIELD, ""),
        size: text_field(payload, "size", ""),
    })
}

/// Map a batch of payloads, preserving order.
///
/// The first record that cannot be mapped aborts the batch.
pub fn map_payloads(payloads: &[Payload]) -> CatalogResult<Vec<SearchResult>> {
    payloads.iter().map(map_payload).collect()
}

fn text_field(payload: &Payload, key: &str, default: &str) -> String {
    match payload.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => default.to_string(),
    }
}

/// Accepts JSON booleans, `0`/`1`, and the usual textual spellings
/// (`true`/`false`, `yes`/`no`, `on`/`off`, `t`/`f`, `y`/`n`, `1`/`0`).
fn bool_field(payload: &Payload, key: &str, default: bool) -> bool {
    match payload.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) if v == 0.0 => false,
            Some(v) if v == 1.0 => true,
            _ => default,
        },
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "yes" | "y" | "on" | "1" => true,
            "false" | "f" | "no" | "n" | "off" | "0" => false,
            _ => default,
        },
        _ => default,
    }
}

fn price_field(payload: &Payload) -> CatalogResult<f64> {
    match payload.get("price") {
        None | Some(Value::Null) => Ok(DEFAULT_PRICE),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| invalid_price(n)),
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| invalid_price(s)),
        Some(other) => Err(invalid_price(other)),
    }
}

fn invalid_price(value: impl std::fmt::Display) -> CatalogError {
    CatalogError::InvalidPayload {
        field: "price",
        details: format!("cannot convert {} to a number", value),
    }
}
