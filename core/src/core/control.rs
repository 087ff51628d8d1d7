// uitour/src/core/control.rs

//! Playback status, transition direction and the notifications dispatched on step elements.

/// Playback status of a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TourStatus {
  /// Not running. No current step.
  #[default]
  Off,
  /// Playing; the current step is (or is being) shown.
  On,
  /// Temporarily hidden, keeping the current step pointer.
  Paused,
}

impl TourStatus {
  /// Numeric status code, as exposed to debugging tools.
  pub fn code(self) -> u8 {
    match self {
      TourStatus::Off => 0,
      TourStatus::On => 1,
      TourStatus::Paused => 2,
    }
  }
}

/// Which way a `next`/`prev` transition moves through the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
  Forward,
  Backward,
}

impl Direction {
  /// Name of the step hook run before the current step is hidden.
  pub(crate) fn hook_name(self) -> &'static str {
    match self {
      Direction::Forward => crate::config::ON_NEXT,
      Direction::Backward => crate::config::ON_PREV,
    }
  }

  /// Registry index offset to the neighbour in this direction.
  pub(crate) fn offset(self) -> isize {
    match self {
      Direction::Forward => 1,
      Direction::Backward => -1,
    }
  }
}

/// Payload-free notification dispatched on a step's element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourEvent {
  Show,
  Hide,
}

impl TourEvent {
  pub fn name(self) -> &'static str {
    match self {
      TourEvent::Show => "uiTourShow",
      TourEvent::Hide => "uiTourHide",
    }
  }
}

impl std::fmt::Display for TourEvent {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.name())
  }
}
