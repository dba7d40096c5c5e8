use restaurant_map::framework::mock::MockSource;
use restaurant_map::framework::{FilterOutcome, SyncError};
use restaurant_map::lifecycle::{MapConfig, MapSession};
use restaurant_map::map::mock::RecordingSurface;
use restaurant_map::map::{CuisineIcons, MarkerHandle, MarkerIcon};
use restaurant_map::model::{CuisineFilter, Restaurant};
use restaurant_map::repository::SeedRepository;
use restaurant_map::shell::mock::{RecordingView, ViewEvent};
use restaurant_map::shell::ShellError;
use std::time::Duration;

/// Polls `condition` until it holds, failing the test after a second.
async fn eventually<C: Fn() -> bool>(what: &str, condition: C) {
    let waited = tokio::time::timeout(Duration::from_secs(1), async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await;
    assert!(waited.is_ok(), "timed out waiting for {what}");
}

fn bundled_session() -> MapSession {
    let repository = SeedRepository::bundled().expect("bundled data should parse");
    MapSession::new(repository, MapConfig::default())
}

fn sample_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant::new("La Mar", -33.4103, -70.5979, 1),
        Restaurant::new("Mulato", -33.4342, -70.6357, 3),
    ]
}

/// Full end-to-end flow: the first attachment shows every restaurant.
#[tokio::test]
async fn test_first_attach_shows_all_restaurants() {
    let session = bundled_session();
    let surface = RecordingSurface::new();
    let view = RecordingView::new();
    let mut shell = session.shell(surface.clone(), CuisineIcons, view.clone());

    assert!(!view.selection_enabled());
    shell.on_surface_ready().await.unwrap();
    assert!(view.selection_enabled());

    eventually("12 markers", || surface.markers().len() == 12).await;

    let moves = surface.camera_moves();
    assert_eq!(moves.len(), 1);
    let (bounds, padding) = moves[0];
    assert_eq!(padding, 40);
    for marker in surface.markers() {
        assert!(bounds.contains(marker.position), "{} not framed", marker.title);
    }

    // Unknown cuisine 4 falls back to the default marker.
    let mardoqueo = surface
        .markers()
        .into_iter()
        .find(|m| m.title == "Fuente Mardoqueo")
        .unwrap();
    assert_eq!(mardoqueo.icon, None);

    assert_eq!(
        view.events(),
        vec![
            ViewEvent::SelectionEnabled(false),
            ViewEvent::SelectionEnabled(true),
            ViewEvent::DismissError,
            ViewEvent::ShowLoading,
            ViewEvent::HideLoading,
        ]
    );

    shell.detach().await.unwrap();
    session.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_selecting_peruvian_shows_three_flagged_markers() {
    let session = bundled_session();
    let surface = RecordingSurface::new();
    let view = RecordingView::new();
    let mut shell = session.shell(surface.clone(), CuisineIcons, view.clone());
    shell.on_surface_ready().await.unwrap();
    eventually("first render", || surface.camera_moves().len() == 1).await;

    let outcome = shell.select_filter(1).await.unwrap();
    assert_eq!(outcome, FilterOutcome::Fetching);
    eventually("second render", || surface.camera_moves().len() == 2).await;

    let mut titles = surface.titles();
    titles.sort();
    assert_eq!(titles, vec!["Astrid y Gaston", "La Mar", "Tanta"]);
    assert!(surface
        .markers()
        .iter()
        .all(|m| m.icon == Some(MarkerIcon::new("ic_peru"))));
    assert!(!view.is_loading());

    let handles = shell.marker_handles();
    assert_eq!(handles, vec![MarkerHandle(13), MarkerHandle(14), MarkerHandle(15)]);
    let tapped = shell.restaurant_for(handles[0]).unwrap();
    assert_eq!(tapped.cuisine, 1);
    assert!(shell.on_marker_click(handles[0]));
    assert_eq!(shell.restaurant_for(MarkerHandle(1)), None);
}

#[tokio::test]
async fn test_failed_fetch_keeps_markers_and_shows_error() {
    let repository = SeedRepository::bundled()
        .unwrap()
        .failing_for(CuisineFilter::ITALIAN, "connection refused");
    let session = MapSession::new(repository, MapConfig::default());
    let surface = RecordingSurface::new();
    let view = RecordingView::new();
    let mut shell = session.shell(surface.clone(), CuisineIcons, view.clone());
    shell.on_surface_ready().await.unwrap();
    eventually("12 markers", || surface.markers().len() == 12).await;

    shell.select_filter(2).await.unwrap();
    eventually("error notification", || view.error().is_some()).await;

    assert_eq!(
        view.error().as_deref(),
        Some("transport failure: connection refused")
    );
    assert!(!view.is_loading());
    assert_eq!(surface.markers().len(), 12, "old markers stay on failure");
    assert_eq!(surface.camera_moves().len(), 1);

    // Picking the failed cuisine again retries.
    assert_eq!(shell.select_filter(2).await.unwrap(), FilterOutcome::Fetching);

    // A later success dismisses the notification and replaces the markers.
    shell.select_filter(3).await.unwrap();
    eventually("5 markers", || surface.markers().len() == 5).await;
    assert_eq!(view.error(), None);
}

#[tokio::test]
async fn test_recreated_shell_renders_from_memory() {
    let mock = MockSource::<CuisineFilter, Restaurant>::new();
    mock.expect_fetch(CuisineFilter::ALL)
        .return_ok(sample_restaurants());
    let session = MapSession::new(mock.clone(), MapConfig::default());

    let first_surface = RecordingSurface::new();
    let mut first = session.shell(first_surface.clone(), CuisineIcons, RecordingView::new());
    first.on_surface_ready().await.unwrap();
    eventually("first render", || first_surface.markers().len() == 2).await;
    first.detach().await.unwrap();

    let surface = RecordingSurface::new();
    let view = RecordingView::new();
    let mut second = session.shell(surface.clone(), CuisineIcons, view.clone());
    second.on_surface_ready().await.unwrap();

    // Replay happens inside subscribe, so the render is already done.
    assert_eq!(surface.titles(), vec!["La Mar", "Mulato"]);
    assert_eq!(surface.camera_moves().len(), 1);
    assert_eq!(
        view.events(),
        vec![
            ViewEvent::SelectionEnabled(false),
            ViewEvent::HideLoading,
            ViewEvent::SelectionEnabled(true),
        ]
    );
    assert_eq!(mock.fetch_count(), 1);
    let state = session.client.filter_state().await.unwrap();
    assert_eq!(state.selected, Some(CuisineFilter::ALL));

    // The detached shell's surface is no longer drawn on.
    assert_eq!(first_surface.clear_count(), 1);
    mock.verify();
}

#[tokio::test]
async fn test_recreated_shell_keeps_non_default_selection() {
    let mock = MockSource::<CuisineFilter, Restaurant>::new();
    mock.expect_fetch(CuisineFilter::ALL)
        .return_ok(sample_restaurants());
    mock.expect_fetch(CuisineFilter::CHILEAN)
        .return_ok(vec![Restaurant::new("Mulato", -33.4342, -70.6357, 3)]);
    let session = MapSession::new(mock.clone(), MapConfig::default());

    let surface = RecordingSurface::new();
    let mut first = session.shell(surface.clone(), CuisineIcons, RecordingView::new());
    first.on_surface_ready().await.unwrap();
    first.select_filter(3).await.unwrap();
    eventually("chilean render", || surface.titles() == vec!["Mulato"]).await;
    first.detach().await.unwrap();

    let surface = RecordingSurface::new();
    let mut second = session.shell(surface.clone(), CuisineIcons, RecordingView::new());
    second.on_surface_ready().await.unwrap();

    assert_eq!(surface.titles(), vec!["Mulato"]);
    assert_eq!(mock.calls(), vec![CuisineFilter::ALL, CuisineFilter::CHILEAN]);
}

#[tokio::test]
async fn test_dropped_shell_stops_drawing() {
    let mock = MockSource::<CuisineFilter, Restaurant>::new();
    mock.expect_fetch(CuisineFilter::ALL)
        .return_ok(sample_restaurants());
    mock.expect_fetch(CuisineFilter::PERUVIAN)
        .return_ok(vec![Restaurant::new("La Mar", -33.4103, -70.5979, 1)]);
    let session = MapSession::new(mock.clone(), MapConfig::default());

    let dead_surface = RecordingSurface::new();
    let mut dropped = session.shell(dead_surface.clone(), CuisineIcons, RecordingView::new());
    dropped.on_surface_ready().await.unwrap();
    eventually("first render", || dead_surface.markers().len() == 2).await;
    drop(dropped);

    let surface = RecordingSurface::new();
    let mut shell = session.shell(surface.clone(), CuisineIcons, RecordingView::new());
    shell.on_surface_ready().await.unwrap();
    shell.select_filter(1).await.unwrap();
    eventually("peruvian render", || surface.titles() == vec!["La Mar"]).await;

    assert_eq!(dead_surface.clear_count(), 1);
    assert_eq!(dead_surface.titles(), vec!["La Mar", "Mulato"]);

    // The background unsubscribe releases the dropped shell's client, so the session
    // can still shut down.
    shell.detach().await.unwrap();
    tokio::time::timeout(Duration::from_secs(1), session.shutdown())
        .await
        .expect("session did not shut down")
        .unwrap();
}

#[tokio::test]
async fn test_selection_before_surface_ready_is_refused() {
    let mock = MockSource::<CuisineFilter, Restaurant>::new();
    let session = MapSession::new(mock.clone(), MapConfig::default());
    let view = RecordingView::new();
    let shell = session.shell(RecordingSurface::new(), CuisineIcons, view.clone());

    let result = shell.select_filter(1).await;

    assert_eq!(result, Err(ShellError::SurfaceNotReady));
    assert!(!shell.is_ready());
    assert!(!view.selection_enabled());
    assert_eq!(mock.fetch_count(), 0);
    assert!(!session.client.filter_state().await.unwrap().initialized);
}

#[tokio::test]
async fn test_surface_ready_twice_subscribes_once() {
    let mock = MockSource::<CuisineFilter, Restaurant>::new();
    mock.expect_fetch(CuisineFilter::ALL)
        .return_ok(sample_restaurants());
    let session = MapSession::new(mock.clone(), MapConfig::default());
    let surface = RecordingSurface::new();
    let view = RecordingView::new();
    let mut shell = session.shell(surface.clone(), CuisineIcons, view.clone());

    shell.on_surface_ready().await.unwrap();
    shell.on_surface_ready().await.unwrap();
    eventually("render", || surface.markers().len() == 2).await;

    let loads = view
        .events()
        .into_iter()
        .filter(|e| *e == ViewEvent::ShowLoading)
        .count();
    assert_eq!(loads, 1);
    assert_eq!(surface.clear_count(), 1);
    assert_eq!(mock.fetch_count(), 1);
}

#[tokio::test]
async fn test_unknown_selection_index_is_rejected() {
    let session = bundled_session();
    let mut shell = session.shell(RecordingSurface::new(), CuisineIcons, RecordingView::new());
    shell.on_surface_ready().await.unwrap();

    let result = shell.select_filter(9).await;

    assert_eq!(result, Err(ShellError::Sync(SyncError::UnknownFilter(9))));
    let state = session.client.filter_state().await.unwrap();
    assert_eq!(state.selected, Some(CuisineFilter::ALL));
}

#[tokio::test]
async fn test_configured_default_and_padding_are_used() {
    let config = MapConfig::from_json_str(r#"{ "camera_padding": 64, "default_filter": 3 }"#)
        .unwrap();
    let session = MapSession::new(SeedRepository::bundled().unwrap(), config);
    let surface = RecordingSurface::new();
    let mut shell = session.shell(surface.clone(), CuisineIcons, RecordingView::new());

    shell.on_surface_ready().await.unwrap();
    eventually("chilean render", || surface.camera_moves().len() == 1).await;

    assert_eq!(surface.markers().len(), 5);
    assert_eq!(surface.camera_moves()[0].1, 64);
}

#[tokio::test]
async fn test_session_shutdown_after_shells_detach() {
    let session = bundled_session();
    let mut shell = session.shell(RecordingSurface::new(), CuisineIcons, RecordingView::new());
    shell.on_surface_ready().await.unwrap();
    let client = session.client.clone();

    shell.detach().await.unwrap();
    drop(client);

    tokio::time::timeout(Duration::from_secs(1), session.shutdown())
        .await
        .expect("session did not shut down")
        .unwrap();
}
