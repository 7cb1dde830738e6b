// Domain layer: page model, content records and the ports the page needs
// from its host (viewport, storage, configuration).

pub mod content;
pub mod model;
pub mod ports;
