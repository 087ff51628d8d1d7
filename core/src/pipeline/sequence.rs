// uitour/src/pipeline/sequence.rs

//! Contains `Sequence`, the building block of every show, hide and next/prev transition.

use crate::error::TourError;
use std::future::Future;
use std::pin::Pin;
use tracing::{event, instrument, span, Instrument, Level};

pub type StageFuture = Pin<Box<dyn Future<Output = Result<(), TourError>> + Send>>;

type Stage = Box<dyn FnOnce() -> StageFuture + Send>;

/// An ordered list of stages. Stage *k+1* is only constructed and started once stage *k*
/// has resolved `Ok`. The first `Err` aborts the sequence and is returned as-is; no later
/// stage runs and nothing is rolled back.
pub struct Sequence {
  name: &'static str,
  stages: Vec<(&'static str, Stage)>,
}

impl Sequence {
  pub fn new(name: &'static str) -> Self {
    Self {
      name,
      stages: Vec::new(),
    }
  }

  /// Appends an asynchronous stage.
  pub fn then<F, Fut>(mut self, stage_name: &'static str, stage: F) -> Self
  where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Result<(), TourError>> + Send + 'static,
  {
    self.stages.push((stage_name, Box::new(move || Box::pin(stage()) as StageFuture)));
    self
  }

  /// Appends a stage with nothing to await.
  pub fn then_sync<F>(self, stage_name: &'static str, stage: F) -> Self
  where
    F: FnOnce() -> Result<(), TourError> + Send + 'static,
  {
    self.then(stage_name, move || {
      let result = stage();
      async move { result }
    })
  }

  #[instrument(
        name = "Sequence::run",
        skip_all,
        fields(sequence = self.name, num_stages = self.stages.len()),
        err(Display)
    )]
  pub async fn run(self) -> Result<(), TourError> {
    event!(Level::TRACE, "Sequence starting.");

    for (stage_idx, (stage_name, stage)) in self.stages.into_iter().enumerate() {
      let stage_span = span!(Level::TRACE, "sequence_stage", stage = stage_name, stage_index = stage_idx);
      if let Err(e) = stage().instrument(stage_span).await {
        event!(Level::ERROR, stage = stage_name, error = %e, "Stage failed, aborting sequence.");
        return Err(e);
      }
    }

    event!(Level::TRACE, "Sequence completed.");
    Ok(())
  }
}

impl std::fmt::Debug for Sequence {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let stage_names: Vec<&str> = self.stages.iter().map(|(name, _)| *name).collect();
    f.debug_struct("Sequence")
      .field("name", &self.name)
      .field("stages", &stage_names)
      .finish()
  }
}
