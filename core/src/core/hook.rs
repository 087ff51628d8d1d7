// uitour/src/core/hook.rs

//! Defines `Hook`, the user-supplied async callback invoked at fixed pipeline points.

use crate::tour::Tour;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Future returned by a hook invocation.
pub type HookFuture = Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send>>;

/// A named, optionally per-step callback.
///
/// A hook receives a clone of the `Tour` handle so it can drive the tour itself, for
/// example an `onNext` hook that starts a navigation and calls `tour.wait_for(..)`.
///
/// Hooks are responsible for:
/// 1. Never holding a step or tour lock guard across their own `.await` points.
/// 2. Returning `Err` to abort the pipeline they run in. The error reaches whoever
///    called the tour operation, wrapped in `TourError::HookFailed`.
#[derive(Clone)]
pub struct Hook(Arc<dyn Fn(Tour) -> HookFuture + Send + Sync>);

impl Hook {
  pub fn new<F, Fut>(hook_fn: F) -> Self
  where
    F: Fn(Tour) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
  {
    Hook(Arc::new(move |tour| {
      let fut = hook_fn(tour);
      Box::pin(fut)
    }))
  }

  /// Hook for callbacks that have nothing to await.
  pub fn sync<F>(hook_fn: F) -> Self
  where
    F: Fn(&Tour) -> anyhow::Result<()> + Send + Sync + 'static,
  {
    Hook(Arc::new(move |tour| {
      let result = hook_fn(&tour);
      Box::pin(async move { result })
    }))
  }

  pub(crate) fn call(&self, tour: Tour) -> HookFuture {
    (self.0)(tour)
  }
}

impl std::fmt::Debug for Hook {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("Hook(..)")
  }
}
