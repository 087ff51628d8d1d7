// uitour/src/tour/waiting.rs

//! Deferred resume for steps that only exist after a navigation.
//!
//! `wait_for` pauses the tour and remembers a step id. The next `add_step` registering
//! a step with that id makes it current and resumes playback, with no explicit `resume`
//! from the host.
//!
//! When called from an `onNext`/`onPrev` hook, the in-flight transition owns step
//! visibility: `wait_for` skips its own hide, and the resume skips its own show, since the
//! transition hides the old step and shows whatever is current when it finishes.
//!
//! The pending id outlives `end`, so a registration arriving after the transition
//! gave up still resumes the tour. `cancel_wait` discards it.

use super::Tour;
use crate::config::ON_RESUME;
use crate::core::control::TourStatus;
use crate::core::step::Step;
use crate::error::TourResult;
use tracing::{event, instrument, Level};

impl Tour {
  /// Pauses the tour until a step with `step_id` is registered.
  ///
  /// A second call replaces the id being waited on.
  #[instrument(name = "Tour::wait_for", skip(self), err(Display))]
  pub async fn wait_for(&self, step_id: &str) -> TourResult<()> {
    let (prior, current) = self.begin_pause();

    let in_transition = {
      let mut state = self.inner.state.write();
      state.pending_resume = Some(step_id.to_string());
      state.transition_active
    };
    event!(Level::DEBUG, in_transition, "Waiting for step registration.");

    if in_transition {
      return Ok(());
    }
    let Some(step) = current else {
      return Ok(());
    };
    let result = self.hide_step(&step).await;
    self.restore_status_on_error(&result, TourStatus::Paused, prior);
    result
  }

  /// Drops the pending `wait_for`, returning the id that was awaited.
  pub fn cancel_wait(&self) -> Option<String> {
    let cancelled = self.inner.state.write().pending_resume.take();
    if let Some(step_id) = &cancelled {
      event!(Level::DEBUG, step_id = %step_id, "Wait cancelled.");
    }
    cancelled
  }

  /// Fulfils a pending `wait_for` once `step` (already made current) is registered.
  pub(super) fn resume_found(&self, step: Step, in_transition: bool) {
    event!(Level::DEBUG, step = %step.label(), in_transition, "Awaited step registered, resuming.");
    self.fire_tour_hook(ON_RESUME);
    self.inner.state.write().status = TourStatus::On;

    if in_transition {
      return;
    }
    let tour = self.clone();
    self.spawn_logged("resume_show", async move { tour.show_step(&step).await });
  }
}
