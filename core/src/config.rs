// uitour/src/config.rs

//! Flat option maps for tours and steps, plus the provider of global defaults.
//!
//! Options are keyed by name. A handful of names are recognised by the engine (the
//! hooks and `backdrop`); every other key is carried along untouched so host code can
//! read it back through `Tour::config` or `Step::config`.

use crate::core::hook::Hook;
use crate::error::{TourError, TourResult};
use parking_lot::RwLock;
use std::collections::HashMap;

// Tour-level hooks, fired without being awaited.
pub const ON_START: &str = "onStart";
pub const ON_END: &str = "onEnd";
pub const ON_PAUSE: &str = "onPause";
pub const ON_RESUME: &str = "onResume";

// Step-level hooks, awaited as pipeline stages.
pub const ON_NEXT: &str = "onNext";
pub const ON_PREV: &str = "onPrev";
pub const ON_SHOW: &str = "onShow";
pub const ON_SHOWN: &str = "onShown";
pub const ON_HIDE: &str = "onHide";
pub const ON_HIDDEN: &str = "onHidden";

pub const BACKDROP: &str = "backdrop";

pub const TOUR_HOOKS: [&str; 4] = [ON_START, ON_END, ON_PAUSE, ON_RESUME];
pub const STEP_HOOKS: [&str; 6] = [ON_NEXT, ON_PREV, ON_SHOW, ON_SHOWN, ON_HIDE, ON_HIDDEN];

/// A single option value.
#[derive(Debug, Clone)]
pub enum OptionValue {
  Hook(Hook),
  Bool(bool),
  Number(f64),
  Text(String),
}

impl OptionValue {
  pub fn as_hook(&self) -> Option<&Hook> {
    match self {
      OptionValue::Hook(hook) => Some(hook),
      _ => None,
    }
  }

  pub fn as_bool(&self) -> Option<bool> {
    match self {
      OptionValue::Bool(b) => Some(*b),
      _ => None,
    }
  }

  /// Loose truthiness used for flags such as `backdrop`.
  pub fn is_truthy(&self) -> bool {
    match self {
      OptionValue::Hook(_) => true,
      OptionValue::Bool(b) => *b,
      OptionValue::Number(n) => *n != 0.0 && !n.is_nan(),
      OptionValue::Text(s) => !s.is_empty(),
    }
  }

  fn kind(&self) -> &'static str {
    match self {
      OptionValue::Hook(_) => "hook",
      OptionValue::Bool(_) => "boolean",
      OptionValue::Number(_) => "number",
      OptionValue::Text(_) => "text",
    }
  }
}

impl From<Hook> for OptionValue {
  fn from(hook: Hook) -> Self {
    OptionValue::Hook(hook)
  }
}

impl From<bool> for OptionValue {
  fn from(b: bool) -> Self {
    OptionValue::Bool(b)
  }
}

impl From<f64> for OptionValue {
  fn from(n: f64) -> Self {
    OptionValue::Number(n)
  }
}

impl From<i32> for OptionValue {
  fn from(n: i32) -> Self {
    OptionValue::Number(f64::from(n))
  }
}

impl From<&str> for OptionValue {
  fn from(s: &str) -> Self {
    OptionValue::Text(s.to_string())
  }
}

impl From<String> for OptionValue {
  fn from(s: String) -> Self {
    OptionValue::Text(s)
  }
}

/// Named option values. Merging is shallow: later keys replace earlier ones.
#[derive(Debug, Clone, Default)]
pub struct Options(HashMap<String, OptionValue>);

impl Options {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builder-style insert.
  pub fn with(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
    self.set(name, value);
    self
  }

  pub fn set(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) {
    self.0.insert(name.into(), value.into());
  }

  pub fn get(&self, name: &str) -> Option<&OptionValue> {
    self.0.get(name)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn merge(&mut self, overrides: Options) {
    self.0.extend(overrides.0);
  }

  /// Rejects recognised names bound to the wrong kind of value.
  pub fn validate(&self) -> TourResult<()> {
    for (name, value) in &self.0 {
      validate_option(name, value)?;
    }
    Ok(())
  }
}

pub(crate) fn validate_option(name: &str, value: &OptionValue) -> TourResult<()> {
  let is_hook_name = TOUR_HOOKS.contains(&name) || STEP_HOOKS.contains(&name);
  if is_hook_name && value.as_hook().is_none() {
    return Err(TourError::Configuration {
      option: name.to_string(),
      message: format!("expected a hook, found a {}", value.kind()),
    });
  }
  if name == BACKDROP && value.as_bool().is_none() {
    return Err(TourError::Configuration {
      option: name.to_string(),
      message: format!("expected a boolean, found a {}", value.kind()),
    });
  }
  Ok(())
}

/// Source of the global default options a tour starts from.
pub trait ConfigProvider: Send + Sync {
  fn get_all(&self) -> Options;
}

/// Stock provider of global defaults, adjustable before tours are created.
#[derive(Debug)]
pub struct TourConfig {
  defaults: RwLock<Options>,
}

impl TourConfig {
  /// A provider with no defaults at all.
  pub fn empty() -> Self {
    Self {
      defaults: RwLock::new(Options::new()),
    }
  }

  pub fn get(&self, name: &str) -> Option<OptionValue> {
    self.defaults.read().get(name).cloned()
  }

  pub fn set(&self, name: impl Into<String>, value: impl Into<OptionValue>) -> TourResult<()> {
    let name = name.into();
    let value = value.into();
    validate_option(&name, &value)?;
    self.defaults.write().set(name, value);
    Ok(())
  }
}

impl Default for TourConfig {
  fn default() -> Self {
    let defaults = Options::new()
      .with(BACKDROP, false)
      .with("scrollIntoView", true)
      .with("scrollOffset", 100)
      .with("placement", "top")
      .with("orphan", false);
    Self {
      defaults: RwLock::new(defaults),
    }
  }
}

impl ConfigProvider for TourConfig {
  fn get_all(&self) -> Options {
    self.defaults.read().clone()
  }
}
