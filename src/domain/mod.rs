mod annotation;
mod chart;
mod chunk;
mod job;
mod job_name;
mod job_status;
mod media;
mod skipped_call;
mod storage_path;
mod synthesized_audio;
mod transcript;
mod translation;

pub use annotation::{
    AnnotationOperation, AnnotationSet, DetectedLanguage, Entity, KeyPhrase, PiiEntity, Sentiment,
    SyntaxToken, Tagged,
};
pub use chart::{BarSeries, ChartError, ChartSet};
pub use chunk::{Chunk, join_chunks};
pub use job::{Job, JobSnapshot};
pub use job_name::JobName;
pub use job_status::JobStatus;
pub use media::{MediaFormat, MediaUri};
pub use skipped_call::{SkippedCall, Stage};
pub use storage_path::StoragePath;
pub use synthesized_audio::{AudioFormat, SynthesizedAudio, SynthesizedAudioSet};
pub use transcript::{Transcript, TranscriptError};
pub use translation::TranslatedDocument;
