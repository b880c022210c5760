// Domain layer: plain data and the ports the codemods are written against.

pub mod model;
pub mod ports;
