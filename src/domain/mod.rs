// Domain layer: core models and ports (interfaces). No dependencies beyond
// std/serde plus async-trait for the one async port.

pub mod model;
pub mod ports;
