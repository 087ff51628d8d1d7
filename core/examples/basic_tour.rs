// uitour/examples/basic_tour.rs

use std::sync::Arc;
use tracing::info;
use uitour::{Backdrop, Element, ElementRef, Hook, Options, Step, Tour, TourError, TourEvent};

// 1. Host collaborators. A real host would touch the UI here.
struct LabelledElement(&'static str);

impl Element for LabelledElement {
  fn dispatch_event(&self, event: TourEvent) {
    info!("{} received {}", self.0, event);
  }

  fn describe(&self) -> String {
    self.0.to_string()
  }
}

struct LoggingBackdrop;

impl Backdrop for LoggingBackdrop {
  fn create_for_element(&self, element: &ElementRef, prevent_scrolling: bool, fixed: bool) {
    info!(prevent_scrolling, fixed, "Backdrop around {}", element.describe());
  }

  fn hide(&self) {
    info!("Backdrop hidden");
  }
}

#[tokio::main]
async fn main() -> Result<(), TourError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Tour Example ---");

  // 2. Create the tour and pass per-instance options.
  let tour = Tour::with_backdrop(Arc::new(LoggingBackdrop))?;
  tour.init(
    Options::new()
      .with("backdrop", true)
      .with("onStart", Hook::sync(|_| {
        info!("Tour started");
        Ok(())
      }))
      .with("onEnd", Hook::sync(|_| {
        info!("Tour finished");
        Ok(())
      })),
  )?;

  // 3. Register steps as their elements mount. Registration order does not matter.
  for (label, order) in [("search box", 2), ("menu button", 1), ("profile link", 3)] {
    let step = Step::builder(Arc::new(LabelledElement(label)))
      .id(label)
      .order(order)
      .option("onShown", Hook::sync(move |tour| {
        info!("Showing '{}' ({} steps registered)", label, tour.steps().len());
        Ok(())
      }))
      .build()?;
    tour.add_step(step);
  }

  // 4. Play it through.
  tour.start().await?;
  while tour.current_step().is_some() {
    tour.next().await?;
  }
  info!("Final status: {:?}", tour.status());
  Ok(())
}
