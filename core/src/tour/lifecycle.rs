// uitour/src/tour/lifecycle.rs

//! `start`, `end`, `pause` and `resume`.
//!
//! Tour-level hooks (`onStart`, `onEnd`, `onPause`, `onResume`) are dispatched as
//! detached tasks and never awaited. The show/hide sequences run by `start`, `pause`
//! and `resume` are awaited and their failures returned.

use super::Tour;
use crate::config::{ON_END, ON_PAUSE, ON_RESUME, ON_START};
use crate::core::control::TourStatus;
use crate::core::step::Step;
use crate::error::TourResult;
use tracing::{event, instrument, Level};

impl Tour {
  /// Starts the tour on the first registered step.
  #[instrument(name = "Tour::start", skip_all, err(Display))]
  pub async fn start(&self) -> TourResult<()> {
    self.fire_tour_hook(ON_START);

    let (prior, first) = {
      let mut state = self.inner.state.write();
      let prior = state.status;
      let first = state.registry.first();
      state.current = first.clone();
      state.status = TourStatus::On;
      (prior, first)
    };

    let Some(step) = first else {
      event!(Level::WARN, "Tour started with no registered steps.");
      return Ok(());
    };
    event!(Level::DEBUG, step = %step.label(), "Tour started.");

    let result = self.show_step(&step).await;
    self.restore_status_on_error(&result, TourStatus::On, prior);
    result
  }

  /// Ends the tour. The current step's hide sequence runs detached.
  ///
  /// A pending `wait_for` survives: a `next` whose target is still mounting ends the tour,
  /// and the late registration starts it again at that step. Use `cancel_wait` to drop it.
  #[instrument(name = "Tour::end", skip_all)]
  pub fn end(&self) {
    let current = self.current_step();
    if let Some(step) = current {
      let tour = self.clone();
      self.spawn_logged("end_hide", async move { tour.hide_step(&step).await });
    }

    self.fire_tour_hook(ON_END);

    let mut state = self.inner.state.write();
    state.current = None;
    state.status = TourStatus::Off;
    event!(Level::DEBUG, "Tour ended.");
  }

  /// Hides the current step, keeping the pointer so `resume` can show it again.
  #[instrument(name = "Tour::pause", skip_all, err(Display))]
  pub async fn pause(&self) -> TourResult<()> {
    let (prior, current) = self.begin_pause();
    let Some(step) = current else {
      return Ok(());
    };
    let result = self.hide_step(&step).await;
    self.restore_status_on_error(&result, TourStatus::Paused, prior);
    result
  }

  /// Shows the current step again after a pause.
  #[instrument(name = "Tour::resume", skip_all, err(Display))]
  pub async fn resume(&self) -> TourResult<()> {
    self.fire_tour_hook(ON_RESUME);

    let (prior, current) = {
      let mut state = self.inner.state.write();
      let prior = state.status;
      state.status = TourStatus::On;
      (prior, state.current.clone())
    };
    event!(Level::DEBUG, "Tour resumed.");

    let Some(step) = current else {
      return Ok(());
    };
    let result = self.show_step(&step).await;
    self.restore_status_on_error(&result, TourStatus::On, prior);
    result
  }

  /// Synchronous half of `pause`: hook dispatch and status change.
  pub(super) fn begin_pause(&self) -> (TourStatus, Option<Step>) {
    self.fire_tour_hook(ON_PAUSE);

    let mut state = self.inner.state.write();
    let prior = state.status;
    state.status = TourStatus::Paused;
    event!(Level::DEBUG, "Tour paused.");
    (prior, state.current.clone())
  }
}
