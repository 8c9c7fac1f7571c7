// Domain layer: data carriers and ports (interfaces). Persistence mapping is
// the adapters' concern; these stay plain structs.

pub mod model;
pub mod ports;
