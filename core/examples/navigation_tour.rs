// uitour/examples/navigation_tour.rs

//! A tour whose second step lives on a page that only mounts after navigating.

use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use uitour::{Backdrop, Element, ElementRef, Hook, Step, Tour, TourError, TourEvent};

struct PageElement(&'static str);

impl Element for PageElement {
  fn dispatch_event(&self, event: TourEvent) {
    info!("[{}] {}", self.0, event);
  }
}

struct NoBackdrop;

impl Backdrop for NoBackdrop {
  fn create_for_element(&self, _element: &ElementRef, _prevent_scrolling: bool, _fixed: bool) {}
  fn hide(&self) {}
}

/// Simulated router: mounting the details page registers its step.
async fn navigate_to_details(tour: Tour) {
  tokio::time::sleep(Duration::from_millis(50)).await;
  info!("Details page mounted");
  match Step::builder(Arc::new(PageElement("details: price"))).id("price").order(1).build() {
    Ok(step) => tour.add_step(step),
    Err(e) => info!("Could not build step: {}", e),
  }
}

#[tokio::main]
async fn main() -> Result<(), TourError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  let tour = Tour::with_backdrop(Arc::new(NoBackdrop))?;

  let listing = Step::builder(Arc::new(PageElement("listing: first item")))
    .id("item")
    .order(1)
    .next_step("price")
    .next_path("/details")
    .option("onNext", Hook::new(|tour: Tour| async move {
      tour.wait_for("price").await?;
      navigate_to_details(tour.clone()).await;
      Ok::<(), anyhow::Error>(())
    }))
    .build()?;
  tour.add_step(listing);

  tour.start().await?;
  tour.next().await?;

  let current = tour.current_step().map(|s| s.label());
  info!("Now on {:?}, status {:?}", current, tour.status());

  tour.end();
  Ok(())
}
