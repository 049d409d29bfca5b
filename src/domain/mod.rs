// Domain layer: course model, the loaded catalog, and the dataset source port.

pub mod model;
pub mod ports;
