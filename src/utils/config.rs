/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/
use std::collections::HashMap;
use std::env;
use std::fmt::Debug;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, error};

/// A place configuration values are read from
///
/// The process environment is the production source; tests use a `HashMap`.
pub trait ConfigSource {
    /// Returns the raw value of `name`, if set
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads configuration from the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl ConfigSource for HashMap<&str, &str> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).map(|v| (*v).to_string())
    }
}

/// Gets a value from `source` or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `source` - Where to read the value from
/// * `name` - The name of the variable
/// * `default` - The value to use if the variable is missing or invalid
pub fn get_or_default<T: FromStr>(source: &impl ConfigSource, name: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match source.var(name) {
        Some(val) => val.trim().parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", name, val);
            default
        }),
        None => default,
    }
}

/// Gets a value from `source` and parses it, returning None if not found or invalid
pub fn get_or_none<T: FromStr>(source: &impl ConfigSource, name: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    source.var(name).and_then(|val| val.trim().parse::<T>().ok())
}

/// Gets an environment variable or returns a default value if not found or cannot be parsed
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    get_or_default(&ProcessEnv, env_var, default)
}

/// Gets an environment variable and parses it, returning None if not found or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    get_or_none(&ProcessEnv, env_var)
}

/// Resolves a secret such as `TRADING212_API_KEY`
///
/// Lookup order:
/// 1. the file named by `<name>_FILE`
/// 2. `<secrets_dir>/<name in lowercase>`
/// 3. the variable `<name>` itself
///
/// Values are trimmed and an empty value counts as missing. Unreadable files are
/// logged and skipped.
pub fn read_secret(source: &impl ConfigSource, secrets_dir: &Path, name: &str) -> Option<String> {
    let explicit_file = source.var(&format!("{name}_FILE"));
    if let Some(path) = explicit_file.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
        match fs::read_to_string(path) {
            Ok(contents) => {
                if let Some(value) = non_empty(&contents) {
                    debug!("{} loaded from {}", name, path);
                    return Some(value);
                }
            }
            Err(e) => error!("Failed to read {} from {}: {}", name, path, e),
        }
    }

    let mounted = secrets_dir.join(name.to_lowercase());
    if mounted.is_file() {
        match fs::read_to_string(&mounted) {
            Ok(contents) => {
                if let Some(value) = non_empty(&contents) {
                    debug!("{} loaded from {}", name, mounted.display());
                    return Some(value);
                }
            }
            Err(e) => error!("Failed to read {} from {}: {}", name, mounted.display(), e),
        }
    }

    source.var(name).as_deref().and_then(non_empty)
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
