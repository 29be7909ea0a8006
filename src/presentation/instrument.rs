/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::Serialize;
use serde_json::Value;

/// Result of filtering the instrument list
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentSearchResult {
    /// The query as given
    pub query: String,
    /// Number of instruments that matched before truncation
    pub total_matches: usize,
    /// Matching instruments as returned by the API, truncated to the limit
    pub instruments: Vec<Value>,
}

fn field_contains(instrument: &Value, field: &str, needle: &str) -> bool {
    instrument
        .get(field)
        .and_then(Value::as_str)
        .is_some_and(|v| v.to_lowercase().contains(needle))
}

/// Filters instruments whose `ticker` or `name` contains `query`, ignoring case
///
/// Order is preserved. At most `limit` instruments are kept, but `total_matches`
/// counts all of them.
#[must_use]
pub fn filter_instruments(instruments: &Value, query: &str, limit: usize) -> InstrumentSearchResult {
    let needle = query.trim().to_lowercase();
    let matches: Vec<&Value> = instruments
        .as_array()
        .map(|all| {
            all.iter()
                .filter(|inst| {
                    field_contains(inst, "ticker", &needle) || field_contains(inst, "name", &needle)
                })
                .collect()
        })
        .unwrap_or_default();

    InstrumentSearchResult {
        query: query.trim().to_string(),
        total_matches: matches.len(),
        instruments: matches.into_iter().take(limit).cloned().collect(),
    }
}
