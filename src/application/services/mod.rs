mod annotation_aggregator;
mod job_poller;
mod media_pipeline;
mod report_builder;
mod synthesis_stage;
mod translation_stage;

pub use annotation_aggregator::AnnotationAggregator;
pub use job_poller::{DEFAULT_POLL_INTERVAL, JobPoller, PollError};
pub use media_pipeline::{MediaPipeline, PipelineError, PipelineRequest, PipelineRun};
pub use report_builder::ReportBuilder;
pub use synthesis_stage::{SynthesisError, SynthesisOptions, SynthesisStage};
pub use translation_stage::TranslationStage;
