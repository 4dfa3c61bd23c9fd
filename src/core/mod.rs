pub mod client;
pub mod formula;
