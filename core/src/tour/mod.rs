// uitour/src/tour/mod.rs

//! Contains the `Tour` engine handle: playback status, the current-step pointer, the step
//! registry and the merged options. Lifecycle operations, transitions and deferred resume
//! live in the submodules.

mod lifecycle;
mod transitions;
mod waiting;

use crate::config::{ConfigProvider, OptionValue, Options, TourConfig};
use crate::core::control::{Direction, TourStatus};
use crate::core::hook::Hook;
use crate::core::shared::Shared;
use crate::core::step::Step;
use crate::error::{TourError, TourResult};
use crate::host::{Backdrop, Scheduler, TokioScheduler};
use crate::registry::StepRegistry;
use std::future::Future;
use std::sync::Arc;
use tracing::{event, Level};

pub(crate) struct TourState {
  pub(crate) status: TourStatus,
  pub(crate) current: Option<Step>,
  /// Step id a `wait_for` is waiting to see registered. One-shot.
  pub(crate) pending_resume: Option<String>,
  pub(crate) options: Options,
  pub(crate) registry: StepRegistry,
  /// Set while a `next`/`prev` pipeline is in flight.
  pub(crate) transition_active: bool,
}

struct TourInner {
  state: Shared<TourState>,
  backdrop: Arc<dyn Backdrop>,
  scheduler: Arc<dyn Scheduler>,
}

/// The tour orchestration engine.
///
/// `Tour` is a cheap, cloneable handle; all clones drive the same tour. Hooks receive a
/// clone so they can call back into the engine (redirects, `wait_for`).
///
/// Exactly one `next`/`prev` pipeline runs at a time: a second call while one is in
/// flight fails with `TourError::TransitionInProgress`. `pause`, `resume`, `end` and
/// `wait_for` are not serialized against an in-flight transition.
#[derive(Clone)]
pub struct Tour {
  inner: Arc<TourInner>,
}

impl Tour {
  /// Creates a tour whose options start from the provider's global defaults.
  pub fn new(
    config: &dyn ConfigProvider,
    backdrop: Arc<dyn Backdrop>,
    scheduler: Arc<dyn Scheduler>,
  ) -> TourResult<Self> {
    let options = config.get_all();
    options.validate()?;
    event!(Level::DEBUG, num_options = options.len(), "Creating tour.");
    Ok(Self {
      inner: Arc::new(TourInner {
        state: Shared::new(TourState {
          status: TourStatus::Off,
          current: None,
          pending_resume: None,
          options,
          registry: StepRegistry::new(),
          transition_active: false,
        }),
        backdrop,
        scheduler,
      }),
    })
  }

  /// Tour with the stock `TourConfig` defaults, driven by tokio.
  ///
  /// Detached work (tour-level hooks, the hide run by `end`) is only executed when the
  /// calling thread is inside a tokio runtime. Elsewhere it is skipped with a warning.
  pub fn with_backdrop(backdrop: Arc<dyn Backdrop>) -> TourResult<Self> {
    Self::new(&TourConfig::default(), backdrop, Arc::new(TokioScheduler))
  }

  /// Merges `overrides` into the live options (later keys win) and returns the tour
  /// for chaining. Nothing is merged if any override is invalid.
  pub fn init(&self, overrides: Options) -> TourResult<&Self> {
    overrides.validate()?;
    event!(Level::DEBUG, num_overrides = overrides.len(), "Merging tour options.");
    self.inner.state.write().options.merge(overrides);
    Ok(self)
  }

  /// Merged value of the named option.
  pub fn config(&self, name: &str) -> Option<OptionValue> {
    self.inner.state.read().options.get(name).cloned()
  }

  pub fn options(&self) -> Options {
    self.inner.state.read().options.clone()
  }

  // --- Registration ---

  /// Registers `step` in order. Adding an already registered step is a no-op.
  ///
  /// If a `wait_for` is pending on this step's id, the tour resumes on it as part of
  /// this call.
  pub fn add_step(&self, step: Step) {
    let found = {
      let mut state = self.inner.state.write();
      if !state.registry.add(step.clone()) {
        return;
      }
      event!(Level::DEBUG, step = %step.label(), order = step.order(), "Step registered.");
      let matches = match &state.pending_resume {
        Some(target) => step.step_id().as_deref() == Some(target.as_str()),
        None => false,
      };
      if matches {
        state.pending_resume = None;
        state.current = Some(step.clone());
        Some(state.transition_active)
      } else {
        None
      }
    };

    if let Some(in_transition) = found {
      self.resume_found(step, in_transition);
    }
  }

  pub fn remove_step(&self, step: &Step) -> TourResult<()> {
    self.inner.state.write().registry.remove(step)?;
    event!(Level::DEBUG, step = %step.label(), "Step deregistered.");
    Ok(())
  }

  /// Moves a registered step to match its current `order`.
  pub fn reorder_step(&self, step: &Step) -> TourResult<()> {
    self.inner.state.write().registry.reorder(step)
  }

  // --- Inspection ---

  pub fn current_step(&self) -> Option<Step> {
    self.inner.state.read().current.clone()
  }

  /// Replaces the current-step pointer without showing or hiding anything.
  pub fn set_current_step(&self, step: Option<Step>) {
    self.inner.state.write().current = step;
  }

  /// Registry neighbour after the current step.
  pub fn next_step(&self) -> Option<Step> {
    self.neighbour_of_current(Direction::Forward)
  }

  /// Registry neighbour before the current step.
  pub fn prev_step(&self) -> Option<Step> {
    self.neighbour_of_current(Direction::Backward)
  }

  /// All registered steps, in order.
  pub fn steps(&self) -> Vec<Step> {
    self.inner.state.read().registry.steps().to_vec()
  }

  pub fn status(&self) -> TourStatus {
    self.inner.state.read().status
  }

  /// Step id a `wait_for` is still waiting on, if any.
  pub fn pending_step(&self) -> Option<String> {
    self.inner.state.read().pending_resume.clone()
  }

  // --- Internal helpers ---

  fn neighbour_of_current(&self, direction: Direction) -> Option<Step> {
    let state = self.inner.state.read();
    let current = state.current.as_ref()?;
    state.registry.neighbour(current, direction)
  }

  /// Step override first, then the tour's merged options.
  fn resolve_option(&self, step: &Step, name: &str) -> Option<OptionValue> {
    step.config(name).or_else(|| self.config(name))
  }

  fn resolve_hook(&self, step: &Step, name: &str) -> Option<Hook> {
    self.resolve_option(step, name).and_then(|value| value.as_hook().cloned())
  }

  fn option_is_truthy(&self, step: &Step, name: &str) -> bool {
    self.resolve_option(step, name).is_some_and(|value| value.is_truthy())
  }

  /// Awaitable invocation of an optional hook; an absent hook resolves immediately.
  fn run_hook(&self, hook: Option<Hook>, name: &'static str) -> impl Future<Output = TourResult<()>> + Send + 'static {
    let tour = self.clone();
    async move {
      match hook {
        Some(hook) => {
          event!(Level::TRACE, hook = name, "Running hook.");
          hook.call(tour).await.map_err(|e| TourError::hook_failed(name, e))
        }
        None => Ok(()),
      }
    }
  }

  /// Invokes a tour-level hook without waiting for it.
  fn fire_tour_hook(&self, name: &'static str) {
    let Some(hook) = self.config(name).and_then(|value| value.as_hook().cloned()) else {
      return;
    };
    event!(Level::TRACE, hook = name, "Dispatching detached hook.");
    let fut = hook.call(self.clone());
    self.spawn_logged(name, async move { fut.await.map_err(|e| TourError::hook_failed(name, e)) });
  }

  fn spawn_logged(&self, task: &'static str, fut: impl Future<Output = TourResult<()>> + Send + 'static) {
    self.inner.scheduler.spawn_detached(Box::pin(async move {
      if let Err(e) = fut.await {
        event!(Level::WARN, task, error = %e, "Detached tour task failed.");
      }
    }));
  }

  /// Puts back the status an operation replaced, if its pipeline failed and nothing
  /// else has changed the status since.
  fn restore_status_on_error(&self, result: &TourResult<()>, set_to: TourStatus, prior: TourStatus) {
    if result.is_err() {
      let mut state = self.inner.state.write();
      if state.status == set_to {
        state.status = prior;
      }
    }
  }
}

impl std::fmt::Debug for Tour {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let state = self.inner.state.read();
    f.debug_struct("Tour")
      .field("status", &state.status)
      .field("current", &state.current.as_ref().map(Step::label))
      .field("num_steps", &state.registry.len())
      .field("pending_resume", &state.pending_resume)
      .finish()
  }
}
