pub mod resolver;
pub mod sink;

pub use resolver::{Connection, ConnectionResolver, VariableResolver};
pub use sink::PipelineSink;
