// Domain layer: buoy categories, fetch results and the ports the fetcher depends on.

pub mod model;
pub mod ports;
