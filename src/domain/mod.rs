// Domain layer: entities, identities and ports. Nothing here knows about storage or transport.

pub mod ids;
pub mod ports;
pub mod race;
pub mod race_result;
pub mod runner;
