/// Instrument search over the instrument list
pub mod instrument;
/// Order side, validity and type enums
pub mod order;
