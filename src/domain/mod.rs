// Domain layer: the account model and the ports the onboarding service depends on.

pub mod model;
pub mod ports;
