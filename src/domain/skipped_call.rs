use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Recognition,
    Annotation,
    Translation,
    Synthesis,
    Report,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Recognition => "recognition",
            Stage::Annotation => "annotation",
            Stage::Translation => "translation",
            Stage::Synthesis => "synthesis",
            Stage::Report => "report",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A per-chunk external call that failed at service level and was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCall {
    pub stage: Stage,
    pub operation: String,
    pub chunk_index: usize,
    pub reason: String,
}

impl fmt::Display for SkippedCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} chunk {}: {}",
            self.stage, self.operation, self.chunk_index, self.reason
        )
    }
}
