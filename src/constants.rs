/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

/// Base URL of the Trading212 live environment
pub const LIVE_BASE_URL: &str = "https://live.trading212.com/api/v0";
/// Base URL of the Trading212 demo (practice) environment
pub const DEMO_BASE_URL: &str = "https://demo.trading212.com/api/v0";
/// User agent string sent with every HTTP request
pub const USER_AGENT: &str = concat!("trading212-mcp/", env!("CARGO_PKG_VERSION"));
/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Upper bound the API accepts for the `limit` of history endpoints
pub const MAX_HISTORY_LIMIT: u32 = 50;
/// Default number of instruments returned by a search
pub const DEFAULT_SEARCH_RESULTS: usize = 10;
/// Maximum number of instruments returned by a search
pub const MAX_SEARCH_RESULTS: usize = 50;
/// Directory where container runtimes mount secret files
pub const DEFAULT_SECRETS_DIR: &str = "/run/secrets";
/// `.env` file loaded in addition to the one in the working directory
pub const DEFAULT_DOTENV_PATH: &str = "/app/.env";

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "TRADING212_API_KEY";
/// Environment variable holding the API secret
pub const ENV_API_SECRET: &str = "TRADING212_API_SECRET";
/// Environment variable selecting `live` or `demo`
pub const ENV_ENVIRONMENT: &str = "TRADING212_ENVIRONMENT";
/// Environment variable overriding the REST base URL
pub const ENV_BASE_URL: &str = "TRADING212_BASE_URL";
/// Environment variable with the HTTP timeout in seconds
pub const ENV_TIMEOUT: &str = "TRADING212_TIMEOUT";
/// Environment variable pointing to the secrets directory
pub const ENV_SECRETS_DIR: &str = "TRADING212_SECRETS_DIR";

/// Name the MCP server announces during initialization
pub const SERVER_NAME: &str = "trading212";
