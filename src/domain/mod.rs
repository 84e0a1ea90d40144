// Domain layer: bike and part models plus the ports the store talks through.

pub mod model;
pub mod ports;
