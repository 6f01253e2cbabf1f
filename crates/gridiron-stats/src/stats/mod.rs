// Player stat pipeline: load, derive, aggregate, classify, project.

pub mod classify;
pub mod derived;
pub mod loader;
pub mod projection;
pub mod record;
pub mod season;
