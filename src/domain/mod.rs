// Domain layer: skip models, presentation tables and ports.

pub mod catalog;
pub mod model;
pub mod ports;
