// uitour/src/host/backdrop.rs

use crate::host::element::ElementRef;

/// The single shared overlay highlighting the active step's element.
///
/// Only one step owns the backdrop at a time. `hide` is global, not scoped to the
/// step that created the overlay.
pub trait Backdrop: Send + Sync {
  fn create_for_element(&self, element: &ElementRef, prevent_scrolling: bool, fixed: bool);

  fn hide(&self);
}
