// Domain layer: match verdicts, thresholds and the matcher port. Only std/serde.

pub mod model;
pub mod ports;
