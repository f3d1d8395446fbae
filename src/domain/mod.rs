// Domain layer: models and ports. No network or config concerns here.

pub mod model;
pub mod ports;
