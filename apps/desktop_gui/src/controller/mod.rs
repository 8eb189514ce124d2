//! Controller layer: frame actions and reducer/effect orchestration.

pub mod events;
pub mod orchestration;
