// uitour/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TourError {
  /// An option is bound to a value of the wrong kind, e.g. `onShow = true`.
  #[error("Configuration error for option '{option}': {message}")]
  Configuration { option: String, message: String },

  #[error("Hook '{hook}' failed. Source: {source}")]
  HookFailed {
    hook: String,
    #[source]
    source: AnyhowError,
  },

  #[error("No current step to move from")]
  NoCurrentStep,

  #[error("Step is not registered with this tour: {step}")]
  StepNotRegistered { step: String },

  #[error("Another next/prev transition is still in flight")]
  TransitionInProgress,
}

impl TourError {
  pub(crate) fn hook_failed(hook: &str, source: AnyhowError) -> Self {
    TourError::HookFailed {
      hook: hook.to_string(),
      source,
    }
  }
}

// Errors raised outside a named hook (e.g. by host code using `?` on anyhow results).
impl From<AnyhowError> for TourError {
  fn from(err: AnyhowError) -> Self {
    TourError::HookFailed {
      hook: "<unknown>".to_string(),
      source: err,
    }
  }
}

pub type TourResult<T, E = TourError> = std::result::Result<T, E>;
