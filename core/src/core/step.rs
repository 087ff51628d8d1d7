// uitour/src/core/step.rs

//! Defines `Step`, one highlighted stop in a tour.

use crate::config::{validate_option, OptionValue, Options};
use crate::core::control::Direction;
use crate::core::shared::Shared;
use crate::error::TourResult;
use crate::host::element::ElementRef;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_STEP_KEY: AtomicU64 = AtomicU64::new(1);

/// Identity of a `Step` object. Every built step gets a fresh key; clones share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepKey(u64);

impl StepKey {
  fn fresh() -> Self {
    StepKey(NEXT_STEP_KEY.fetch_add(1, Ordering::Relaxed))
  }
}

impl std::fmt::Display for StepKey {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "step#{}", self.0)
  }
}

struct StepData {
  step_id: Option<String>,
  order: i64,
  element: ElementRef,
  options: Options,
  next_step: Option<String>,
  prev_step: Option<String>,
  next_path: Option<String>,
  prev_path: Option<String>,
  prevent_scrolling: bool,
  fixed: bool,
  is_next: bool,
  is_prev: bool,
}

/// Handle to a step owned by the host UI.
///
/// Cloning is cheap and yields the same step: registry membership and the tour's
/// current-step pointer compare by `StepKey`, never by `step_id`.
#[derive(Clone)]
pub struct Step {
  key: StepKey,
  data: Shared<StepData>,
}

impl Step {
  pub fn builder(element: ElementRef) -> StepBuilder {
    StepBuilder::new(element)
  }

  pub fn key(&self) -> StepKey {
    self.key
  }

  pub fn step_id(&self) -> Option<String> {
    self.data.read().step_id.clone()
  }

  pub fn order(&self) -> i64 {
    *self.data.map_read(|d| &d.order)
  }

  /// Changes the ordering key. Call `Tour::reorder_step` afterwards if registered.
  pub fn set_order(&self, order: i64) {
    self.data.write().order = order;
  }

  pub fn element(&self) -> ElementRef {
    self.data.read().element.clone()
  }

  /// Per-step override for a named option, if this step sets one.
  pub fn config(&self, name: &str) -> Option<OptionValue> {
    self.data.read().options.get(name).cloned()
  }

  pub fn set_option(&self, name: impl Into<String>, value: impl Into<OptionValue>) -> TourResult<()> {
    let name = name.into();
    let value = value.into();
    validate_option(&name, &value)?;
    self.data.write().options.set(name, value);
    Ok(())
  }

  pub fn next_step(&self) -> Option<String> {
    self.data.read().next_step.clone()
  }

  pub fn prev_step(&self) -> Option<String> {
    self.data.read().prev_step.clone()
  }

  pub fn next_path(&self) -> Option<String> {
    self.data.read().next_path.clone()
  }

  pub fn prev_path(&self) -> Option<String> {
    self.data.read().prev_path.clone()
  }

  pub fn prevent_scrolling(&self) -> bool {
    self.data.read().prevent_scrolling
  }

  pub fn fixed(&self) -> bool {
    self.data.read().fixed
  }

  /// Whether moving forward was possible when this step was last shown.
  pub fn is_next(&self) -> bool {
    self.data.read().is_next
  }

  /// Whether moving backward was possible when this step was last shown.
  pub fn is_prev(&self) -> bool {
    self.data.read().is_prev
  }

  pub(crate) fn declared_target(&self, direction: Direction) -> Option<String> {
    match direction {
      Direction::Forward => self.next_step(),
      Direction::Backward => self.prev_step(),
    }
  }

  pub(crate) fn has_path(&self, direction: Direction) -> bool {
    let data = self.data.read();
    match direction {
      Direction::Forward => data.next_path.is_some(),
      Direction::Backward => data.prev_path.is_some(),
    }
  }

  pub(crate) fn set_navigability(&self, is_next: bool, is_prev: bool) {
    let mut data = self.data.write();
    data.is_next = is_next;
    data.is_prev = is_prev;
  }

  /// Label for logs: the step id when present, the key otherwise.
  pub fn label(&self) -> String {
    match self.step_id() {
      Some(id) => id,
      None => self.key.to_string(),
    }
  }
}

impl PartialEq for Step {
  fn eq(&self, other: &Self) -> bool {
    self.key == other.key
  }
}

impl Eq for Step {}

impl std::fmt::Debug for Step {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let data = self.data.read();
    f.debug_struct("Step")
      .field("key", &self.key)
      .field("step_id", &data.step_id)
      .field("order", &data.order)
      .field("element", &data.element.describe())
      .field("next_step", &data.next_step)
      .field("prev_step", &data.prev_step)
      .field("is_next", &data.is_next)
      .field("is_prev", &data.is_prev)
      .finish()
  }
}

pub struct StepBuilder {
  data: StepData,
}

impl StepBuilder {
  fn new(element: ElementRef) -> Self {
    Self {
      data: StepData {
        step_id: None,
        order: 0,
        element,
        options: Options::new(),
        next_step: None,
        prev_step: None,
        next_path: None,
        prev_path: None,
        prevent_scrolling: false,
        fixed: false,
        is_next: false,
        is_prev: false,
      },
    }
  }

  pub fn id(mut self, step_id: impl Into<String>) -> Self {
    self.data.step_id = Some(step_id.into());
    self
  }

  pub fn order(mut self, order: i64) -> Self {
    self.data.order = order;
    self
  }

  pub fn option(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
    self.data.options.set(name, value);
    self
  }

  /// Id of the step a navigation started by `onNext` will register.
  pub fn next_step(mut self, step_id: impl Into<String>) -> Self {
    self.data.next_step = Some(step_id.into());
    self
  }

  pub fn prev_step(mut self, step_id: impl Into<String>) -> Self {
    self.data.prev_step = Some(step_id.into());
    self
  }

  /// Route reached by moving forward; makes the step navigable forward even when it is
  /// last in the registry.
  pub fn next_path(mut self, path: impl Into<String>) -> Self {
    self.data.next_path = Some(path.into());
    self
  }

  pub fn prev_path(mut self, path: impl Into<String>) -> Self {
    self.data.prev_path = Some(path.into());
    self
  }

  pub fn prevent_scrolling(mut self, prevent_scrolling: bool) -> Self {
    self.data.prevent_scrolling = prevent_scrolling;
    self
  }

  pub fn fixed(mut self, fixed: bool) -> Self {
    self.data.fixed = fixed;
    self
  }

  /// Validates the step's options and produces a step with a fresh identity.
  pub fn build(self) -> TourResult<Step> {
    self.data.options.validate()?;
    Ok(Step {
      key: StepKey::fresh(),
      data: Shared::new(self.data),
    })
  }
}
