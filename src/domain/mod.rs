// Domain layer: entities and ports. Adapters and use cases depend on this, never the reverse.

pub mod model;
pub mod ports;
