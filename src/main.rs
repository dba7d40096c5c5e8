//! # Restaurant Map Demo
//!
//! Drives a [`MapSession`] through the main user flows against the bundled data set,
//! with a map surface and view that only log what they are asked to draw:
//!
//! 1.  The shell attaches and the default cuisine (all) is shown.
//! 2.  The user picks Peruvian.
//! 3.  The UI is recreated; the new shell renders from memory without a fetch.
//! 4.  The user picks Italian, whose fetch is set up to fail.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use restaurant_map::lifecycle::{setup_tracing, MapConfig, MapSession};
use restaurant_map::map::{CuisineIcons, LatLngBounds, MapSurface, MarkerHandle, MarkerOptions};
use restaurant_map::model::CuisineFilter;
use restaurant_map::repository::SeedRepository;
use restaurant_map::shell::ShellView;
use std::time::Duration;
use tracing::{info, warn, Instrument};

const FETCH_LATENCY: Duration = Duration::from_millis(150);
const SETTLE: Duration = Duration::from_millis(300);

/// Map surface that logs every command.
#[derive(Default)]
struct TracingSurface {
    next_handle: u64,
}

impl MapSurface for TracingSurface {
    fn clear_markers(&mut self) {
        info!("map: clear markers");
    }

    fn add_marker(&mut self, options: MarkerOptions) -> MarkerHandle {
        self.next_handle += 1;
        let icon = options.icon.as_ref().map_or("default", |i| i.asset.as_str());
        info!(title = %options.title, position = %options.position, icon, "map: marker");
        MarkerHandle(self.next_handle)
    }

    fn animate_camera_to_bounds(&mut self, bounds: LatLngBounds, padding: u32) {
        info!(
            southwest = %bounds.southwest,
            northeast = %bounds.northeast,
            padding,
            "map: camera"
        );
    }
}

struct TracingView;

impl ShellView for TracingView {
    fn show_loading(&mut self) {
        info!("view: loading shown");
    }

    fn hide_loading(&mut self) {
        info!("view: loading hidden");
    }

    fn show_error(&mut self, reason: &str) {
        warn!(reason, "view: error notification");
    }

    fn dismiss_error(&mut self) {
        info!("view: error dismissed");
    }

    fn set_selection_enabled(&mut self, enabled: bool) {
        info!(enabled, "view: selection control");
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting restaurant map demo");

    let repository = SeedRepository::bundled()
        .map_err(|e| e.to_string())?
        .with_latency(FETCH_LATENCY)
        .failing_for(CuisineFilter::ITALIAN, "connection refused");
    let config = MapConfig::from_env().map_err(|e| e.to_string())?;
    let session = MapSession::new(repository, config);
    info!(
        padding = session.config().camera_padding,
        default_filter = %session.config().default_filter,
        "Session configured"
    );

    let span = tracing::info_span!("first_attach");
    let mut shell = async {
        let mut shell = session.shell(TracingSurface::default(), CuisineIcons, TracingView);
        shell.on_surface_ready().await.map_err(|e| e.to_string())?;
        tokio::time::sleep(SETTLE).await;
        Ok::<_, String>(shell)
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("select_peruvian");
    async {
        shell
            .select_filter(CuisineFilter::PERUVIAN.code())
            .await
            .map_err(|e| e.to_string())?;
        tokio::time::sleep(SETTLE).await;
        if let Some(handle) = shell.marker_handles().first().copied() {
            if let Some(restaurant) = shell.restaurant_for(handle) {
                let consumed = shell.on_marker_click(handle);
                info!(%handle, name = %restaurant.name, consumed, "Tapped first marker");
            }
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("recreate_ui");
    shell = async {
        shell.detach().await.map_err(|e| e.to_string())?;
        let mut shell = session.shell(TracingSurface::default(), CuisineIcons, TracingView);
        shell.on_surface_ready().await.map_err(|e| e.to_string())?;
        Ok::<_, String>(shell)
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("select_italian");
    async {
        shell
            .select_filter(CuisineFilter::ITALIAN.code())
            .await
            .map_err(|e| e.to_string())?;
        tokio::time::sleep(SETTLE).await;
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    shell.detach().await.map_err(|e| e.to_string())?;
    session.shutdown().await.map_err(|e| e.to_string())?;

    info!("Demo completed");
    Ok(())
}
