// Domain layer: record models and the score API port.

pub mod model;
pub mod ports;
