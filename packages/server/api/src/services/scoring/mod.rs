pub mod engine;
pub mod features;
pub mod model;
pub mod roster;
