// Domain layer: the person/assignment model and the ports the run engine talks through.

pub mod model;
pub mod ports;
