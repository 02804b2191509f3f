use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::Instrument;

use crate::application::ports::{
    ChartRenderError, ChartRenderer, ServiceFailure, SpeechRecognizerError, StagingStore,
    StagingStoreError, TextSplitter,
};
use crate::domain::{
    AnnotationSet, ChartError, ChartSet, Job, JobName, JobStatus, MediaFormat, MediaUri,
    SkippedCall, Stage, StoragePath, SynthesizedAudioSet, Transcript, TranscriptError,
    TranslatedDocument,
};

use super::{
    AnnotationAggregator, JobPoller, PollError, ReportBuilder, SynthesisError, SynthesisStage,
    TranslationStage,
};

/// What to transcribe and where the recognizer should write the transcript.
#[derive(Debug, Clone)]
pub struct PipelineRequest {
    pub media: MediaUri,
    pub transcript_path: StoragePath,
    pub media_format: MediaFormat,
    pub language_code: String,
}

/// Everything accumulated over one run.
#[derive(Debug)]
pub struct PipelineRun {
    pub job: Job,
    pub transcript: Transcript,
    pub chunk_count: usize,
    pub annotations: AnnotationSet,
    pub translation: TranslatedDocument,
    pub audio: SynthesizedAudioSet,
    pub skipped: Vec<SkippedCall>,
    pub report: String,
    pub chart_path: PathBuf,
}

pub struct MediaPipeline {
    poller: JobPoller,
    store: Arc<dyn StagingStore>,
    splitter: Arc<dyn TextSplitter>,
    aggregator: AnnotationAggregator,
    translation: TranslationStage,
    synthesis: SynthesisStage,
    chart_renderer: Arc<dyn ChartRenderer>,
    report_path: StoragePath,
    chart_path: PathBuf,
}

impl MediaPipeline {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        poller: JobPoller,
        store: Arc<dyn StagingStore>,
        splitter: Arc<dyn TextSplitter>,
        aggregator: AnnotationAggregator,
        translation: TranslationStage,
        synthesis: SynthesisStage,
        chart_renderer: Arc<dyn ChartRenderer>,
        report_path: StoragePath,
        chart_path: PathBuf,
    ) -> Self {
        Self {
            poller,
            store,
            splitter,
            aggregator,
            translation,
            synthesis,
            chart_renderer,
            report_path,
            chart_path,
        }
    }

    pub async fn run(&self, request: &PipelineRequest) -> Result<PipelineRun, PipelineError> {
        self.preflight(request).await?;

        let job = self
            .poller
            .submit(
                request.media.clone(),
                request.transcript_path.clone(),
                request.media_format,
                &request.language_code,
            )
            .await
            .map_err(PipelineError::from_poll)?;

        let span = tracing::info_span!("pipeline_run", job = %job.name);
        self.process_job(job).instrument(span).await
    }

    async fn preflight(&self, request: &PipelineRequest) -> Result<(), PipelineError> {
        match self.store.head(request.media.path()).await {
            Ok(size) => {
                tracing::debug!(media = %request.media, size, "Input media found");
                Ok(())
            }
            Err(StagingStoreError::NotFound(_)) => {
                Err(PipelineError::MissingMedia(request.media.to_string()))
            }
            Err(e) => Err(PipelineError::from_store(Stage::Recognition, e)),
        }
    }

    async fn process_job(&self, mut job: Job) -> Result<PipelineRun, PipelineError> {
        let status = self
            .poller
            .await_completion(&mut job)
            .await
            .map_err(PipelineError::from_poll)?;

        if status != JobStatus::Completed {
            return Err(PipelineError::JobFailed {
                job: job.name.clone(),
                status,
                reason: job
                    .failure_reason
                    .clone()
                    .unwrap_or_else(|| "no reason reported".to_string()),
            });
        }

        let data = self
            .store
            .fetch(&job.output)
            .await
            .map_err(|e| PipelineError::from_store(Stage::Recognition, e))?;
        let transcript = Transcript::from_bytes(&data)?;
        tracing::info!(chars = transcript.text().chars().count(), "Transcript fetched");
        if transcript.is_empty() {
            tracing::warn!(
                path = %job.output,
                "Transcript is empty, downstream stages get no chunks"
            );
        }

        let chunks = self.splitter.split(transcript.text());
        tracing::debug!(
            chunks = chunks.len(),
            max_len = self.splitter.max_len(),
            "Transcript split"
        );

        let mut annotations = AnnotationSet::new();
        let mut skipped = Vec::new();

        self.aggregator
            .annotate(&chunks, &mut annotations, &mut skipped)
            .instrument(tracing::info_span!("annotation"))
            .await
            .map_err(|e| PipelineError::unreachable(Stage::Annotation, e))?;

        let mut report = ReportBuilder::new(Arc::clone(&self.store), self.report_path.clone());
        report.append_annotations(&annotations);
        report
            .persist()
            .await
            .map_err(|e| PipelineError::from_store(Stage::Report, e))?;

        let translation = self
            .translation
            .translate(&chunks, &mut skipped)
            .instrument(tracing::info_span!("translation"))
            .await
            .map_err(|e| PipelineError::unreachable(Stage::Translation, e))?;

        if translation.is_empty() {
            tracing::warn!(
                chunks = chunks.len(),
                "Translation produced no text, nothing to synthesize"
            );
        }
        let translated_text = translation.text();
        let audio = self
            .synthesis
            .synthesize(&translated_text, &mut skipped)
            .instrument(tracing::info_span!("synthesis"))
            .await
            .map_err(|e| match e {
                SynthesisError::Synthesizer(e) => PipelineError::unreachable(Stage::Synthesis, e),
                SynthesisError::Store(e) => PipelineError::from_store(Stage::Synthesis, e),
            })?;

        report.append_translation(&translation, chunks.len());
        report.append_synthesis(&audio);
        report.append_skipped(&skipped);
        report
            .persist()
            .await
            .map_err(|e| PipelineError::from_store(Stage::Report, e))?;

        let charts = ChartSet::from_annotations(&annotations)?;
        self.chart_renderer.render(&charts, &self.chart_path)?;
        tracing::info!(path = %self.chart_path.display(), "Visualization written");

        tracing::info!(skipped = skipped.len(), "Pipeline completed");

        Ok(PipelineRun {
            job,
            transcript,
            chunk_count: chunks.len(),
            annotations,
            translation,
            audio,
            skipped,
            report: report.content().to_string(),
            chart_path: self.chart_path.clone(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("{stage} endpoint unreachable: {message}")]
    Unreachable { stage: Stage, message: String },
    #[error("recognition job {job} finished with status {status}: {reason}")]
    JobFailed {
        job: JobName,
        status: JobStatus,
        reason: String,
    },
    #[error("recognition job {job} did not finish within {waited:?}")]
    JobTimedOut { job: JobName, waited: Duration },
    #[error("input media not found: {0}")]
    MissingMedia(String),
    #[error("speech recognizer: {0}")]
    Recognition(SpeechRecognizerError),
    #[error("{stage} staging store: {source}")]
    Staging {
        stage: Stage,
        source: StagingStoreError,
    },
    #[error("transcript: {0}")]
    Transcript(#[from] TranscriptError),
    #[error("visualization: {0}")]
    Visualization(#[from] ChartError),
    #[error("chart rendering: {0}")]
    Rendering(#[from] ChartRenderError),
}

impl PipelineError {
    pub fn unreachable(stage: Stage, error: impl std::error::Error) -> Self {
        PipelineError::Unreachable {
            stage,
            message: error.to_string(),
        }
    }

    fn from_store(stage: Stage, error: StagingStoreError) -> Self {
        if error.is_unreachable() {
            return Self::unreachable(stage, error);
        }
        PipelineError::Staging {
            stage,
            source: error,
        }
    }

    fn from_poll(error: PollError) -> Self {
        match error {
            PollError::Recognizer(e) if e.is_unreachable() => {
                Self::unreachable(Stage::Recognition, e)
            }
            PollError::Recognizer(e) => PipelineError::Recognition(e),
            PollError::TimedOut { job, waited } => PipelineError::JobTimedOut { job, waited },
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            PipelineError::Unreachable { .. } => 2,
            PipelineError::JobFailed { .. } | PipelineError::JobTimedOut { .. } => 3,
            PipelineError::Visualization(_) => 4,
            _ => 1,
        }
    }
}
