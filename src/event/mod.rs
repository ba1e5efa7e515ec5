//! Event definitions, queueing and dispatch

mod dispatcher;
mod model;
mod queue;
mod registry;


pub use dispatcher::*;
pub use model::*;
pub use queue::*;
pub use registry::*;
