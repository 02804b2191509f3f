/// Classifies a provider error as fatal or skippable.
///
/// Connectivity failures (the endpoint cannot be reached at all) abort the
/// pipeline. Everything else is a service-level failure for one call.
pub trait ServiceFailure: std::error::Error {
    fn is_unreachable(&self) -> bool;
}

/// Result of one per-chunk external call after the failure policy applied.
#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome<T> {
    Success(T),
    Skipped { reason: String },
}

impl<T> CallOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, CallOutcome::Success(_))
    }

    pub fn into_success(self) -> Option<T> {
        match self {
            CallOutcome::Success(value) => Some(value),
            CallOutcome::Skipped { .. } => None,
        }
    }
}

/// Applies the failure policy: connectivity errors propagate, all others become `Skipped`.
pub fn settle<T, E: ServiceFailure>(result: Result<T, E>) -> Result<CallOutcome<T>, E> {
    match result {
        Ok(value) => Ok(CallOutcome::Success(value)),
        Err(e) if e.is_unreachable() => Err(e),
        Err(e) => Ok(CallOutcome::Skipped {
            reason: e.to_string(),
        }),
    }
}
