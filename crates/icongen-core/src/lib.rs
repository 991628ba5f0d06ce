pub mod config;
pub mod logging;

pub mod emit;
pub mod naming;
pub mod pipeline;
pub mod source;
pub mod target;
pub mod transform;
