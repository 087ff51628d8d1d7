// uitour/src/host/scheduler.rs

//! The host's render scheduling, as seen by the engine.

use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use tracing::{event, Level};

/// Work dispatched without being joined (tour-level hooks, teardown hides).
pub type DetachedTask = Pin<Box<dyn Future<Output = ()> + Send>>;

#[async_trait]
pub trait Scheduler: Send + Sync {
  /// Resolves once the host UI has committed pending updates, i.e. after exactly one
  /// render pass. Hooks running after this point observe the mutated element.
  async fn flush(&self);

  /// Runs `task` to completion in the background. The caller does not wait for it.
  fn spawn_detached(&self, task: DetachedTask);
}

/// Scheduler for hosts driven by a tokio runtime.
///
/// The render pass is modelled as one cooperative yield, which lets every task woken by
/// the preceding stages run before the pipeline continues. Detached work needs an entered
/// tokio runtime; outside one it is dropped with a warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
  async fn flush(&self) {
    tokio::task::yield_now().await;
  }

  fn spawn_detached(&self, task: DetachedTask) {
    match tokio::runtime::Handle::try_current() {
      Ok(handle) => {
        handle.spawn(task);
      }
      Err(e) => {
        event!(Level::WARN, error = %e, "No tokio runtime entered, detached task dropped.");
      }
    }
  }
}
