pub mod cli;
pub mod ctx;
pub mod family;
pub mod io;
pub mod math;
pub mod metrics;
pub mod phase;
pub mod pipeline;
pub mod schema;
