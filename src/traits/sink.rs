use crate::errors::SinkError;
use crate::pipeline::PipelineDefinition;

/// Hands a generated pipeline to the host runtime.
///
/// Sinks only ever receive a fully generated and validated definition; a failed
/// generation never reaches `register`.
pub trait PipelineSink {
    fn register(&mut self, definition: &PipelineDefinition) -> Result<(), SinkError>;
}
