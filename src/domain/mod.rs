// Domain layer: vendor DTOs and ports. No I/O here.

pub mod messages;
pub mod model;
pub mod ports;
