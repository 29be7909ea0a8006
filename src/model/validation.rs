/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::constants::{DEFAULT_SEARCH_RESULTS, MAX_HISTORY_LIMIT, MAX_SEARCH_RESULTS};
use crate::error::{AppError, AppResult};
use chrono::{DateTime, SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

// Tickers end up in URL paths, so only this alphabet is allowed.
static TICKER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._-]{1,32}$").expect("ticker pattern is valid"));

/// Trims and checks a ticker symbol such as `AAPL_US_EQ`
pub fn validate_ticker(ticker: &str) -> AppResult<String> {
    let ticker = ticker.trim();
    if ticker.is_empty() {
        return Err(AppError::InvalidInput("ticker symbol is required".to_string()));
    }
    if !TICKER_PATTERN.is_match(ticker) {
        return Err(AppError::InvalidInput(format!(
            "invalid ticker symbol: {ticker}"
        )));
    }
    Ok(ticker.to_string())
}

/// Trims an optional ticker, treating blank as absent
pub fn validate_optional_ticker(ticker: Option<&str>) -> AppResult<Option<String>> {
    match ticker.map(str::trim).filter(|t| !t.is_empty()) {
        Some(t) => validate_ticker(t).map(Some),
        None => Ok(None),
    }
}

/// Requires a non-blank string
pub fn validate_required(field: &str, value: &str) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::InvalidInput(format!("{field} is required")));
    }
    Ok(value.to_string())
}

/// Requires a finite, strictly positive number
pub fn validate_positive(field: &str, value: f64) -> AppResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::InvalidInput(format!(
            "{field} must be a positive number, got {value}"
        )));
    }
    Ok(value)
}

/// Requires a positive identifier
pub fn validate_id(field: &str, id: i64) -> AppResult<i64> {
    if id <= 0 {
        return Err(AppError::InvalidInput(format!(
            "{field} must be a positive integer, got {id}"
        )));
    }
    Ok(id)
}

/// Resolves the page size of a history endpoint
///
/// Defaults to the maximum; zero is rejected and larger values are clamped.
pub fn history_limit(limit: Option<u32>) -> AppResult<u32> {
    match limit {
        None => Ok(MAX_HISTORY_LIMIT),
        Some(0) => Err(AppError::InvalidInput(
            "limit must be at least 1".to_string(),
        )),
        Some(l) if l > MAX_HISTORY_LIMIT => {
            warn!("limit {} exceeds {}, clamping", l, MAX_HISTORY_LIMIT);
            Ok(MAX_HISTORY_LIMIT)
        }
        Some(l) => Ok(l),
    }
}

/// Resolves how many instruments a search returns
pub fn search_limit(limit: Option<u32>) -> AppResult<usize> {
    match limit {
        None => Ok(DEFAULT_SEARCH_RESULTS),
        Some(0) => Err(AppError::InvalidInput(
            "limit must be at least 1".to_string(),
        )),
        Some(l) => Ok((l as usize).min(MAX_SEARCH_RESULTS)),
    }
}

/// Parses an RFC 3339 timestamp and renders it in UTC
pub fn normalize_time(value: &str) -> AppResult<String> {
    let parsed = DateTime::parse_from_rfc3339(value.trim()).map_err(|e| {
        AppError::InvalidInput(format!("time must be an RFC 3339 timestamp: {e}"))
    })?;
    Ok(parsed
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Secs, true))
}
