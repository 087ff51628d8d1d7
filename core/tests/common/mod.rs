// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tracing::Level;
use uitour::{
  Backdrop, DetachedTask, Element, ElementRef, Hook, Options, Scheduler, Step, StepBuilder, TokioScheduler, Tour,
  TourConfig, TourEvent,
};

// --- Shared event log ---
#[derive(Clone, Debug, Default)]
pub struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
  pub fn push(&self, entry: impl Into<String>) {
    self.0.lock().unwrap().push(entry.into());
  }

  pub fn entries(&self) -> Vec<String> {
    self.0.lock().unwrap().clone()
  }

  pub fn take(&self) -> Vec<String> {
    std::mem::take(&mut *self.0.lock().unwrap())
  }

  pub fn count(&self, entry: &str) -> usize {
    self.0.lock().unwrap().iter().filter(|e| e.as_str() == entry).count()
  }

  pub fn clear(&self) {
    self.0.lock().unwrap().clear();
  }
}

// --- Host doubles ---
pub struct RecordingElement {
  name: String,
  log: EventLog,
}

impl Element for RecordingElement {
  fn dispatch_event(&self, event: TourEvent) {
    self.log.push(format!("{}:{}", event.name(), self.name));
  }

  fn describe(&self) -> String {
    self.name.clone()
  }
}

pub struct RecordingBackdrop {
  log: EventLog,
}

impl Backdrop for RecordingBackdrop {
  fn create_for_element(&self, element: &ElementRef, prevent_scrolling: bool, fixed: bool) {
    self
      .log
      .push(format!("backdrop:create:{}:{}:{}", element.describe(), prevent_scrolling, fixed));
  }

  fn hide(&self) {
    self.log.push("backdrop:hide");
  }
}

/// Logs every yield point and keeps the handles of detached tasks so tests can wait
/// for them.
pub struct RecordingScheduler {
  log: EventLog,
  tasks: Mutex<Vec<JoinHandle<()>>>,
}

#[async_trait::async_trait]
impl Scheduler for RecordingScheduler {
  async fn flush(&self) {
    self.log.push("flush");
    tokio::task::yield_now().await;
  }

  fn spawn_detached(&self, task: DetachedTask) {
    self.tasks.lock().unwrap().push(tokio::spawn(task));
  }
}

impl RecordingScheduler {
  /// Waits until every detached task, including ones spawned by detached tasks, is done.
  pub async fn drain(&self) {
    loop {
      let handles = std::mem::take(&mut *self.tasks.lock().unwrap());
      if handles.is_empty() {
        break;
      }
      for handle in handles {
        handle.await.expect("detached task panicked");
      }
    }
  }
}

// --- Hook creators ---
pub fn logging_hook(log: &EventLog, entry: impl Into<String>) -> Hook {
  let log = log.clone();
  let entry = entry.into();
  Hook::sync(move |_tour| {
    log.push(entry.clone());
    Ok(())
  })
}

pub fn failing_hook(log: &EventLog, entry: impl Into<String>, message: &'static str) -> Hook {
  let log = log.clone();
  let entry = entry.into();
  Hook::sync(move |_tour| {
    log.push(entry.clone());
    Err(anyhow::anyhow!(message))
  })
}

pub const STEP_HOOK_NAMES: [&str; 6] = ["onNext", "onPrev", "onShow", "onShown", "onHide", "onHidden"];
pub const TOUR_HOOK_NAMES: [&str; 4] = ["onStart", "onEnd", "onPause", "onResume"];

// --- Fixture ---
pub struct Fixture {
  pub tour: Tour,
  pub log: EventLog,
  pub scheduler: Arc<RecordingScheduler>,
}

impl Fixture {
  pub fn new() -> Self {
    Self::with_config(TourConfig::default())
  }

  pub fn with_config(config: TourConfig) -> Self {
    setup_tracing();
    let log = EventLog::default();
    let scheduler = Arc::new(RecordingScheduler {
      log: log.clone(),
      tasks: Mutex::new(Vec::new()),
    });
    let backdrop = Arc::new(RecordingBackdrop { log: log.clone() });
    let tour = Tour::new(&config, backdrop, scheduler.clone()).expect("default config is valid");
    Self { tour, log, scheduler }
  }

  /// Same host doubles, but detached work goes through the stock `TokioScheduler`.
  pub fn tokio_driven() -> Self {
    let mut fx = Self::new();
    let backdrop = Arc::new(RecordingBackdrop { log: fx.log.clone() });
    fx.tour = Tour::new(&TourConfig::default(), backdrop, Arc::new(TokioScheduler)).expect("default config is valid");
    fx
  }

  /// Installs logging tour-level hooks ("onStart", "onEnd", ...).
  pub fn with_tour_hooks(self) -> Self {
    let mut overrides = Options::new();
    for name in TOUR_HOOK_NAMES {
      overrides.set(name, logging_hook(&self.log, name));
    }
    self.tour.init(overrides).expect("hooks are valid");
    self
  }

  pub fn element(&self, name: &str) -> ElementRef {
    Arc::new(RecordingElement {
      name: name.to_string(),
      log: self.log.clone(),
    })
  }

  /// Step with an id and order, no hooks.
  pub fn step(&self, id: &str, order: i64) -> StepBuilder {
    Step::builder(self.element(id)).id(id).order(order)
  }

  /// Step whose six step hooks log "<hook>:<id>".
  pub fn traced(&self, id: &str, order: i64) -> StepBuilder {
    let mut builder = self.step(id, order);
    for name in STEP_HOOK_NAMES {
      builder = builder.option(name, logging_hook(&self.log, format!("{}:{}", name, id)));
    }
    builder
  }

  /// Builds and registers traced steps, returning them in the given order.
  pub fn register_traced(&self, steps: &[(&str, i64)]) -> Vec<Step> {
    steps
      .iter()
      .map(|(id, order)| {
        let step = self.traced(id, *order).build().expect("valid step");
        self.tour.add_step(step.clone());
        step
      })
      .collect()
  }

  pub async fn settle(&self) {
    self.scheduler.drain().await;
  }
}

pub fn ids(steps: &[Step]) -> Vec<String> {
  steps.iter().map(|s| s.step_id().unwrap_or_default()).collect()
}

pub fn current_id(tour: &Tour) -> Option<String> {
  tour.current_step().and_then(|s| s.step_id())
}

pub fn show_entries(id: &str) -> Vec<String> {
  vec![
    format!("onShow:{}", id),
    format!("uiTourShow:{}", id),
    "flush".to_string(),
    format!("onShown:{}", id),
  ]
}

pub fn hide_entries(id: &str) -> Vec<String> {
  vec![
    format!("onHide:{}", id),
    format!("uiTourHide:{}", id),
    "flush".to_string(),
    format!("onHidden:{}", id),
  ]
}

// --- Helper for Tracing Setup ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
