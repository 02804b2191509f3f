use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Unique name of a recognition job.
///
/// Seeded from the current unix timestamp. A process-local sequence suffix
/// keeps names distinct when several jobs are generated within the same
/// second; collisions across processes are not guarded against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobName(String);

impl JobName {
    pub fn generate() -> Self {
        let seconds = Utc::now().timestamp();
        let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        if sequence == 0 {
            Self(format!("transcription_job_{}", seconds))
        } else {
            Self(format!("transcription_job_{}_{}", seconds, sequence))
        }
    }

    pub fn from_raw(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
