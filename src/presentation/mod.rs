mod pipeline_assembly;

pub use pipeline_assembly::{AssemblyError, PipelineAssembly, SCAFFOLD_MEDIA};
