// uitour/src/registry.rs

//! Defines `StepRegistry`, the ordered and deduplicated collection of registered steps.

use crate::core::control::Direction;
use crate::core::step::{Step, StepKey};
use crate::error::{TourError, TourResult};
use tracing::{event, Level};

/// Steps ordered by ascending `order`, ties kept in insertion order.
///
/// Membership is by identity (`StepKey`). Two distinct steps may share a `step_id`;
/// uniqueness of ids is the host's convention, not something the registry enforces.
#[derive(Debug, Default)]
pub struct StepRegistry {
  steps: Vec<Step>,
}

impl StepRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Inserts `step` and re-sorts. Returns `false` (and changes nothing) if the step is
  /// already registered.
  pub fn add(&mut self, step: Step) -> bool {
    if self.contains(&step) {
      event!(Level::TRACE, step = %step.label(), "Step already registered, ignoring.");
      return false;
    }
    self.steps.push(step);
    // sort_by_key is stable, so equal orders keep insertion order.
    self.steps.sort_by_key(Step::order);
    true
  }

  pub fn remove(&mut self, step: &Step) -> TourResult<()> {
    let idx = self.position(step.key()).ok_or_else(|| TourError::StepNotRegistered { step: step.label() })?;
    self.steps.remove(idx);
    Ok(())
  }

  /// Re-inserts a step whose `order` changed after registration.
  pub fn reorder(&mut self, step: &Step) -> TourResult<()> {
    self.remove(step)?;
    self.add(step.clone());
    Ok(())
  }

  pub fn contains(&self, step: &Step) -> bool {
    self.position(step.key()).is_some()
  }

  pub fn position(&self, key: StepKey) -> Option<usize> {
    self.steps.iter().position(|s| s.key() == key)
  }

  pub fn first(&self) -> Option<Step> {
    self.steps.first().cloned()
  }

  /// Positional neighbour of `step`. `None` at either end, and when `step` is not
  /// registered (e.g. it was unmounted while current).
  pub fn neighbour(&self, step: &Step, direction: Direction) -> Option<Step> {
    let idx = self.position(step.key())?;
    let target = idx.checked_add_signed(direction.offset())?;
    self.steps.get(target).cloned()
  }

  pub fn steps(&self) -> &[Step] {
    &self.steps
  }

  pub fn len(&self) -> usize {
    self.steps.len()
  }

  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }
}
