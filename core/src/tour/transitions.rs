// uitour/src/tour/transitions.rs

//! The show, hide and next/prev pipelines.
//!
//! Show: `onShow` → backdrop → `uiTourShow` → flush → `onShown` → navigability.
//! Hide: `onHide` → `uiTourHide` → backdrop hide → flush → `onHidden`.
//! Next/prev: `onNext`/`onPrev` → hide current → relocate → show new current, or end.
//! If the pointer moves while the new current is being shown, that step is hidden and
//! the pointer's target shown before the transition completes.

use super::Tour;
use crate::config::{BACKDROP, ON_HIDDEN, ON_HIDE, ON_SHOW, ON_SHOWN};
use crate::core::control::{Direction, TourEvent};
use crate::core::step::Step;
use crate::error::{TourError, TourResult};
use crate::pipeline::Sequence;
use tracing::{event, instrument, Level};

/// Marks a `next`/`prev` pipeline as in flight until dropped.
struct TransitionGuard {
  tour: Tour,
}

impl TransitionGuard {
  fn acquire(tour: &Tour) -> TourResult<Self> {
    let mut state = tour.inner.state.write();
    if state.transition_active {
      return Err(TourError::TransitionInProgress);
    }
    state.transition_active = true;
    Ok(Self { tour: tour.clone() })
  }
}

impl Drop for TransitionGuard {
  fn drop(&mut self) {
    self.tour.inner.state.write().transition_active = false;
  }
}

impl Tour {
  /// Moves to the next step, or ends the tour if there is none.
  pub async fn next(&self) -> TourResult<()> {
    self.advance(Direction::Forward).await
  }

  /// Moves to the previous step, or ends the tour if there is none.
  pub async fn prev(&self) -> TourResult<()> {
    self.advance(Direction::Backward).await
  }

  #[instrument(name = "Tour::advance", skip(self), err(Display))]
  async fn advance(&self, direction: Direction) -> TourResult<()> {
    let _transition = TransitionGuard::acquire(self)?;
    let step = self.current_step().ok_or(TourError::NoCurrentStep)?;
    let hook_name = direction.hook_name();
    let hook = self.resolve_hook(&step, hook_name);
    event!(Level::DEBUG, from = %step.label(), "Transition starting.");

    let hook_stage = self.run_hook(hook, hook_name);
    let (hiding, from) = (self.clone(), step.clone());
    let relocating = self.clone();
    let showing = self.clone();

    Sequence::new("advance")
      .then(hook_name, move || hook_stage)
      .then("hide", move || async move { hiding.hide_step(&from).await })
      .then_sync("relocate", move || {
        relocating.relocate(&step, direction);
        Ok(())
      })
      .then("show_or_end", move || async move { showing.show_current_or_end().await })
      .run()
      .await
  }

  /// Shows the current step, then keeps following the pointer while a hook of the shown
  /// step moves it (a `wait_for` fulfilled by a registration during the show).
  async fn show_current_or_end(&self) -> TourResult<()> {
    let Some(mut shown) = self.current_step() else {
      self.end();
      return Ok(());
    };
    self.show_step(&shown).await?;

    while let Some(current) = self.current_step() {
      if current == shown {
        break;
      }
      event!(Level::DEBUG, from = %shown.label(), to = %current.label(), "Current step moved during show.");
      self.hide_step(&shown).await?;
      self.show_step(&current).await?;
      shown = current;
    }
    Ok(())
  }

  /// Picks the step to show after `from` was hidden.
  ///
  /// If `from` declares an explicit target and the current step already carries that id,
  /// a hook (via `wait_for` or `set_current_step`) installed it and it is kept. Otherwise
  /// the current pointer moves to its registry neighbour.
  fn relocate(&self, from: &Step, direction: Direction) {
    let declared = from.declared_target(direction);
    let mut guard = self.inner.state.write();
    let state = &mut *guard;

    let redirected = match (&declared, &state.current) {
      (Some(target), Some(current)) => current.step_id().as_deref() == Some(target.as_str()),
      _ => false,
    };
    if redirected {
      event!(Level::DEBUG, target = ?declared, "Current step set by navigation, keeping it.");
      return;
    }

    let neighbour = state
      .current
      .as_ref()
      .and_then(|current| state.registry.neighbour(current, direction));
    event!(Level::TRACE, to = ?neighbour.as_ref().map(Step::label), "Moving to registry neighbour.");
    state.current = neighbour;
  }

  /// Runs the show sequence for `step`.
  pub async fn show_step(&self, step: &Step) -> TourResult<()> {
    self.show_sequence(step).run().await
  }

  /// Runs the hide sequence for `step`.
  pub async fn hide_step(&self, step: &Step) -> TourResult<()> {
    self.hide_sequence(step).run().await
  }

  fn show_sequence(&self, step: &Step) -> Sequence {
    let on_show = self.run_hook(self.resolve_hook(step, ON_SHOW), ON_SHOW);
    let on_shown = self.run_hook(self.resolve_hook(step, ON_SHOWN), ON_SHOWN);
    let (backdrop_tour, backdrop_step) = (self.clone(), step.clone());
    let event_step = step.clone();
    let flush_tour = self.clone();
    let (nav_tour, nav_step) = (self.clone(), step.clone());

    Sequence::new("show")
      .then(ON_SHOW, move || on_show)
      .then_sync(BACKDROP, move || {
        if backdrop_tour.option_is_truthy(&backdrop_step, BACKDROP) {
          backdrop_tour.inner.backdrop.create_for_element(
            &backdrop_step.element(),
            backdrop_step.prevent_scrolling(),
            backdrop_step.fixed(),
          );
        }
        Ok(())
      })
      .then_sync("dispatch", move || {
        event_step.element().dispatch_event(TourEvent::Show);
        Ok(())
      })
      .then("flush", move || async move {
        flush_tour.inner.scheduler.flush().await;
        Ok(())
      })
      .then(ON_SHOWN, move || on_shown)
      .then_sync("navigability", move || {
        nav_tour.update_navigability(&nav_step);
        Ok(())
      })
  }

  fn hide_sequence(&self, step: &Step) -> Sequence {
    let on_hide = self.run_hook(self.resolve_hook(step, ON_HIDE), ON_HIDE);
    let on_hidden = self.run_hook(self.resolve_hook(step, ON_HIDDEN), ON_HIDDEN);
    let event_step = step.clone();
    let (backdrop_tour, backdrop_step) = (self.clone(), step.clone());
    let flush_tour = self.clone();

    Sequence::new("hide")
      .then(ON_HIDE, move || on_hide)
      .then_sync("dispatch", move || {
        event_step.element().dispatch_event(TourEvent::Hide);
        Ok(())
      })
      .then_sync(BACKDROP, move || {
        if backdrop_tour.option_is_truthy(&backdrop_step, BACKDROP) {
          backdrop_tour.inner.backdrop.hide();
        }
        Ok(())
      })
      .then("flush", move || async move {
        flush_tour.inner.scheduler.flush().await;
        Ok(())
      })
      .then(ON_HIDDEN, move || on_hidden)
  }

  /// A step is navigable in a direction when it has a registry neighbour there or
  /// declares a path a navigation will resolve to a step.
  fn update_navigability(&self, step: &Step) {
    let (is_next, is_prev) = {
      let state = self.inner.state.read();
      let has = |direction| state.registry.neighbour(step, direction).is_some() || step.has_path(direction);
      (has(Direction::Forward), has(Direction::Backward))
    };
    step.set_navigability(is_next, is_prev);
  }
}
