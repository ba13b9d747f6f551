//! Probe-then-fetch retrieval of every record behind a listing URL.
//!
//! The upstream API pages its results. Instead of walking pages, a first
//! request with `numOfRows=1` reads `totalCount`, and a second request asks for
//! exactly that many rows on page 1. Both requests share the same prefix, so
//! the filters match.

use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::normalize::RawRecord;
use crate::transport::{endpoint_name, Transport};

const SUCCESS_CODES: &[&str] = &["0000", "00"];

/// Fetch all records behind `url_prefix`.
///
/// `None` means the upstream reported no results: a zero total, or an
/// `items` placeholder that is not a record or list of records.
pub fn fetch_all<T: Transport>(transport: &T, url_prefix: &str) -> Result<Option<Vec<RawRecord>>> {
    let endpoint = endpoint_name(url_prefix);

    let probe = transport.fetch(&page_url(url_prefix, 1))?;
    let total = total_count(body(&probe)?);
    debug!(endpoint = %endpoint, total, "probed total count");

    if total == 0 {
        return Ok(None);
    }

    let full = transport.fetch(&page_url(url_prefix, total))?;
    Ok(items(body(&full)?))
}

/// Fetch a single, unpaginated envelope and return its items.
pub fn fetch_items<T: Transport>(transport: &T, url: &str) -> Result<Option<Vec<RawRecord>>> {
    let envelope = transport.fetch(url)?;
    Ok(items(body(&envelope)?))
}

fn page_url(prefix: &str, rows: u64) -> String {
    format!("{}&numOfRows={}&pageNo=1", prefix, rows)
}

fn body(envelope: &Value) -> Result<Option<&Value>> {
    check_header(envelope)?;
    Ok(envelope.get("response").and_then(|r| r.get("body")))
}

fn check_header(envelope: &Value) -> Result<()> {
    let header = match envelope.get("response").and_then(|r| r.get("header")) {
        Some(h) => h,
        None => return Ok(()),
    };
    let code = match header.get("resultCode") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => format!("{:02}", n.as_i64().unwrap_or(-1)),
        _ => return Ok(()),
    };
    if SUCCESS_CODES.contains(&code.as_str()) {
        return Ok(());
    }
    let message = header
        .get("resultMsg")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    Err(ApiError::Upstream { code, message })
}

/// `totalCount` arrives as a number, or occasionally as a numeric string.
fn total_count(body: Option<&Value>) -> u64 {
    match body.and_then(|b| b.get("totalCount")) {
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Unwrap `items.item`, which is a list, a lone record, or a placeholder.
pub fn items(body: Option<&Value>) -> Option<Vec<RawRecord>> {
    match body?.get("items")?.get("item")? {
        Value::Array(list) => {
            let records: Vec<RawRecord> = list.iter().filter_map(|v| v.as_object().cloned()).collect();
            let skipped = list.len() - records.len();
            if skipped > 0 {
                debug!(skipped, "ignored non-record items");
            }
            Some(records)
        }
        Value::Object(record) => Some(vec![record.clone()]),
        _ => None,
    }
}
