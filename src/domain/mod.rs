// Domain layer: employee model and the ports the rest of the crate is configured through.

pub mod model;
pub mod ports;
