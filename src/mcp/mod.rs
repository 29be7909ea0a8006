/// Tool argument definitions
pub mod params;
/// rmcp server with the tool router
pub mod server;

pub use server::Trading212Server;
