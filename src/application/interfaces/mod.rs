/// Account service interface
pub mod account;
/// History service interface
pub mod history;
/// Instrument and exchange metadata interface
pub mod instrument;
/// Order service interface
pub mod order;
/// Pie service interface
pub mod pie;
/// Portfolio service interface
pub mod portfolio;

pub use account::AccountService;
pub use history::HistoryService;
pub use instrument::InstrumentService;
pub use order::OrderService;
pub use pie::PieService;
pub use portfolio::PortfolioService;
