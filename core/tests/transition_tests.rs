// tests/transition_tests.rs
mod common;

use common::*;
use std::sync::Arc;
use tokio::sync::Notify;
use uitour::{Hook, Options, TourConfig, TourError, TourStatus};

#[tokio::test]
async fn test_show_sequence_order_with_backdrop() {
  let fx = Fixture::new();
  let step = fx
    .traced("a", 1)
    .option("backdrop", true)
    .prevent_scrolling(true)
    .build()
    .unwrap();
  fx.tour.add_step(step.clone());

  fx.tour.show_step(&step).await.unwrap();
  assert_eq!(
    fx.log.take(),
    vec!["onShow:a", "backdrop:create:a:true:false", "uiTourShow:a", "flush", "onShown:a"]
  );

  fx.tour.hide_step(&step).await.unwrap();
  assert_eq!(
    fx.log.take(),
    vec!["onHide:a", "uiTourHide:a", "backdrop:hide", "flush", "onHidden:a"]
  );
}

#[tokio::test]
async fn test_backdrop_inherited_from_tour_options() {
  let config = TourConfig::default();
  config.set("backdrop", true).unwrap();
  let fx = Fixture::with_config(config);
  let plain = fx.step("plain", 1).fixed(true).build().unwrap();
  let opted_out = fx.step("opted_out", 2).option("backdrop", false).build().unwrap();
  fx.tour.add_step(plain.clone());
  fx.tour.add_step(opted_out.clone());

  fx.tour.show_step(&plain).await.unwrap();
  fx.tour.show_step(&opted_out).await.unwrap();
  let entries = fx.log.entries();
  assert!(entries.contains(&"backdrop:create:plain:false:true".to_string()));
  assert!(!entries.iter().any(|e| e.starts_with("backdrop:create:opted_out")));
}

#[tokio::test]
async fn test_tour_level_step_hook_applies_unless_overridden() {
  let fx = Fixture::new();
  fx.tour
    .init(Options::new().with("onShown", logging_hook(&fx.log, "tour:onShown")))
    .unwrap();
  let inherits = fx.step("inherits", 1).build().unwrap();
  let overrides = fx
    .step("overrides", 2)
    .option("onShown", logging_hook(&fx.log, "step:onShown"))
    .build()
    .unwrap();
  fx.tour.add_step(inherits.clone());
  fx.tour.add_step(overrides.clone());

  fx.tour.show_step(&inherits).await.unwrap();
  fx.tour.show_step(&overrides).await.unwrap();
  assert_eq!(fx.log.count("tour:onShown"), 1);
  assert_eq!(fx.log.count("step:onShown"), 1);
}

#[tokio::test]
async fn test_navigability_recomputed_on_show() {
  let fx = Fixture::new();
  let steps = fx.register_traced(&[("a", 1), ("b", 2), ("c", 3)]);

  fx.tour.start().await.unwrap();
  assert!(steps[0].is_next());
  assert!(!steps[0].is_prev());

  fx.tour.next().await.unwrap();
  assert!(steps[1].is_next());
  assert!(steps[1].is_prev());

  fx.tour.next().await.unwrap();
  assert!(!steps[2].is_next());
  assert!(steps[2].is_prev());
}

#[tokio::test]
async fn test_paths_make_edges_navigable() {
  let fx = Fixture::new();
  let first = fx.step("first", 1).prev_path("/intro").build().unwrap();
  let last = fx.step("last", 2).next_path("/details").build().unwrap();
  fx.tour.add_step(first.clone());
  fx.tour.add_step(last.clone());

  fx.tour.show_step(&first).await.unwrap();
  fx.tour.show_step(&last).await.unwrap();
  assert!(first.is_prev());
  assert!(first.is_next());
  assert!(last.is_next());
  assert!(last.is_prev());
}

#[tokio::test]
async fn test_hook_redirect_to_declared_step_is_kept() {
  let fx = Fixture::new();
  let a_step_ref = Arc::new(std::sync::Mutex::new(None));
  let target_ref = a_step_ref.clone();
  let a = fx
    .traced("a", 1)
    .next_step("c")
    .option(
      "onNext",
      Hook::sync(move |tour| {
        let target = target_ref.lock().unwrap().clone();
        tour.set_current_step(target);
        Ok(())
      }),
    )
    .build()
    .unwrap();
  fx.tour.add_step(a);
  let rest = fx.register_traced(&[("b", 2), ("c", 3)]);
  *a_step_ref.lock().unwrap() = Some(rest[1].clone());

  fx.tour.start().await.unwrap();
  fx.tour.next().await.unwrap();
  assert_eq!(current_id(&fx.tour).as_deref(), Some("c"));
  assert_eq!(fx.log.count("onShown:b"), 0);
}

#[tokio::test]
async fn test_redirect_to_undeclared_step_is_overridden_by_position() {
  let fx = Fixture::new();
  let redirect = Arc::new(std::sync::Mutex::new(None));
  let target_ref = redirect.clone();
  // Declares "c" but the hook installs "d".
  let a = fx
    .traced("a", 1)
    .next_step("c")
    .option(
      "onNext",
      Hook::sync(move |tour| {
        tour.set_current_step(target_ref.lock().unwrap().clone());
        Ok(())
      }),
    )
    .build()
    .unwrap();
  fx.tour.add_step(a);
  let rest = fx.register_traced(&[("b", 2), ("c", 3), ("d", 4), ("e", 5)]);
  *redirect.lock().unwrap() = Some(rest[2].clone());

  fx.tour.start().await.unwrap();
  fx.tour.next().await.unwrap();
  // Positional advance from the pointer the hook left behind.
  assert_eq!(current_id(&fx.tour).as_deref(), Some("e"));
}

#[tokio::test]
async fn test_overlapping_next_is_rejected() {
  let fx = Fixture::new();
  let gate = Arc::new(Notify::new());
  let entered = Arc::new(Notify::new());
  let (hook_gate, hook_entered) = (gate.clone(), entered.clone());
  let a = fx
    .traced("a", 1)
    .option(
      "onNext",
      Hook::new(move |_tour| {
        let gate = hook_gate.clone();
        let entered = hook_entered.clone();
        async move {
          entered.notify_one();
          gate.notified().await;
          Ok(())
        }
      }),
    )
    .build()
    .unwrap();
  fx.tour.add_step(a);
  fx.register_traced(&[("b", 2), ("c", 3)]);
  fx.tour.start().await.unwrap();

  let tour = fx.tour.clone();
  let first = tokio::spawn(async move { tour.next().await });
  entered.notified().await;

  match fx.tour.next().await {
    Err(TourError::TransitionInProgress) => {}
    other => panic!("Expected TransitionInProgress, got {:?}", other),
  }
  assert!(matches!(fx.tour.prev().await, Err(TourError::TransitionInProgress)));

  gate.notify_one();
  first.await.unwrap().unwrap();
  assert_eq!(current_id(&fx.tour).as_deref(), Some("b"));

  // The guard is released: transitions work again.
  fx.tour.next().await.unwrap();
  assert_eq!(current_id(&fx.tour).as_deref(), Some("c"));
  assert_eq!(fx.tour.status(), TourStatus::On);
}

#[tokio::test]
async fn test_each_hook_runs_once_per_sequence() {
  let fx = Fixture::new();
  fx.register_traced(&[("a", 1), ("b", 2)]);
  fx.tour.start().await.unwrap();
  fx.tour.next().await.unwrap();
  fx.tour.next().await.unwrap();
  fx.settle().await;

  for name in ["onShow", "onShown", "onHide", "onHidden", "onNext"] {
    assert_eq!(fx.log.count(&format!("{}:a", name)), 1, "{}:a", name);
    assert_eq!(fx.log.count(&format!("{}:b", name)), 1, "{}:b", name);
  }
}
