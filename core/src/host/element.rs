// uitour/src/host/element.rs

use crate::core::control::TourEvent;
use std::sync::Arc;

/// A UI target a step is bound to. The engine never owns the element; it only
/// dispatches notifications on it and hands it to the backdrop.
pub trait Element: Send + Sync {
  /// Synchronously signal listeners on this element (scroll-into-view, custom highlights).
  fn dispatch_event(&self, event: TourEvent);

  /// Human-readable label for logs.
  fn describe(&self) -> String {
    "<element>".to_string()
  }
}

pub type ElementRef = Arc<dyn Element>;
