//! Integrationstests: Klick-Sequenzen durch Controller und Intent-Mapping.

use approx::assert_relative_eq;
use map_measure::{AppController, AppIntent, AppState, PointId};
use walkers::Position;

fn pos(lon: f64, lat: f64) -> Position {
    walkers::lat_lon(lat, lon)
}

/// Klick auf eine leere Stelle der Karte.
fn click_empty(controller: &mut AppController, state: &mut AppState, lon: f64, lat: f64) {
    controller
        .handle_intent(
            state,
            AppIntent::SurfaceClicked {
                position: pos(lon, lat),
                hit: None,
            },
        )
        .expect("Klick sollte funktionieren");
}

/// Klick, der einen existierenden Punkt trifft.
fn click_point(controller: &mut AppController, state: &mut AppState, id: PointId) {
    controller
        .handle_intent(
            state,
            AppIntent::SurfaceClicked {
                // Die Klick-Koordinate ist bei einem Treffer irrelevant
                position: pos(0.0, 0.0),
                hit: Some(id),
            },
        )
        .expect("Klick sollte funktionieren");
}

#[test]
fn test_single_click_places_point_without_distance() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click_empty(&mut controller, &mut state, 10.0, 10.0);

    assert_eq!(state.track.point_count(), 1);
    assert!(state.track.path().is_none());
    assert!(state.ui.distance_text.is_none());
}

#[test]
fn test_second_click_builds_path_and_distance() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click_empty(&mut controller, &mut state, 10.0, 10.0);
    click_empty(&mut controller, &mut state, 10.0, 20.0);

    assert_eq!(state.track.point_count(), 2);
    let path = state.track.path().expect("Pfad ab zwei Punkten erwartet");
    assert_eq!(path.coordinates, vec![pos(10.0, 10.0), pos(10.0, 20.0)]);

    // 10 Breitengrad entlang des Meridians
    let km = state.track.length_km().expect("Distanz erwartet");
    assert_relative_eq!(km, 1111.95, epsilon = 0.5);

    let text = state.ui.distance_text.as_deref().expect("Anzeigetext");
    assert!(text.starts_with("Total distance: "), "war: {text}");
    assert!(text.ends_with("km"), "war: {text}");
}

#[test]
fn test_clicking_middle_point_removes_it_and_recomputes() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click_empty(&mut controller, &mut state, 10.0, 10.0);
    click_empty(&mut controller, &mut state, 10.0, 15.0);
    click_empty(&mut controller, &mut state, 10.0, 20.0);

    let distance_before = state.track.length_km().expect("Distanz über drei Punkte");
    let middle_id = state.track.points()[1].id.clone();

    click_point(&mut controller, &mut state, middle_id.clone());

    assert_eq!(state.track.point_count(), 2);
    assert!(state.track.points().iter().all(|p| p.id != middle_id));

    let path = state.track.path().expect("Pfad über die restlichen Punkte");
    assert_eq!(path.coordinates, vec![pos(10.0, 10.0), pos(10.0, 20.0)]);

    // Gerade Strecke: Länge bleibt hier gleich, wird aber neu berechnet
    let distance_after = state.track.length_km().expect("Distanz über zwei Punkte");
    assert_relative_eq!(distance_after, distance_before, epsilon = 0.01);
    assert!(state.ui.distance_text.is_some());
}

#[test]
fn test_removing_all_points_clears_path_and_distance() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click_empty(&mut controller, &mut state, 10.0, 10.0);
    click_empty(&mut controller, &mut state, 10.0, 20.0);
    assert!(state.ui.distance_text.is_some());

    let first = state.track.points()[0].id.clone();
    click_point(&mut controller, &mut state, first);
    assert_eq!(state.track.point_count(), 1);
    assert!(state.track.path().is_none());
    assert!(state.ui.distance_text.is_none());

    let last = state.track.points()[0].id.clone();
    click_point(&mut controller, &mut state, last);
    assert_eq!(state.track.point_count(), 0);
    assert!(state.track.path().is_none());
    assert!(state.ui.distance_text.is_none());
}

#[test]
fn test_every_click_changes_point_count_by_exactly_one() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for i in 0..5 {
        let before = state.track.point_count();
        click_empty(&mut controller, &mut state, i as f64, i as f64);
        assert_eq!(state.track.point_count(), before + 1);
    }

    while state.track.point_count() > 0 {
        let before = state.track.point_count();
        let id = state.track.points()[0].id.clone();
        click_point(&mut controller, &mut state, id);
        assert_eq!(state.track.point_count(), before - 1);
    }
}

#[test]
fn test_path_present_iff_at_least_two_points() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    // Beliebige Klick-Sequenz: Invariante gilt nach jedem Schritt
    for i in 0..6 {
        click_empty(&mut controller, &mut state, i as f64 * 0.5, 50.0);
        check_invariant(&state);
    }
    for _ in 0..6 {
        let id = state.track.points()[0].id.clone();
        click_point(&mut controller, &mut state, id);
        check_invariant(&state);
    }
}

fn check_invariant(state: &AppState) {
    match state.track.path() {
        Some(path) => {
            assert!(state.track.point_count() >= 2);
            let expected: Vec<Position> =
                state.track.points().iter().map(|p| p.position).collect();
            assert_eq!(path.coordinates, expected);
        }
        None => assert!(state.track.point_count() < 2),
    }
}

#[test]
fn test_removing_stale_id_is_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click_empty(&mut controller, &mut state, 10.0, 10.0);
    let id = state.track.points()[0].id.clone();
    click_point(&mut controller, &mut state, id.clone());
    assert_eq!(state.track.point_count(), 0);

    // Zweiter Klick mit derselben (inzwischen gelöschten) Id
    click_point(&mut controller, &mut state, id);
    assert_eq!(state.track.point_count(), 0);
    assert!(state.ui.distance_text.is_none());
}

#[test]
fn test_republishing_feature_collection_is_idempotent() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click_empty(&mut controller, &mut state, 10.0, 10.0);
    click_empty(&mut controller, &mut state, 10.0, 20.0);

    // Zwei Frames ohne Mutation sehen identischen Render-Zustand
    let first = state.track.feature_collection();
    let second = state.track.feature_collection();
    assert_eq!(first, second);
    assert_eq!(first.points.len(), 2);
    assert!(first.path.is_some());
}

#[test]
fn test_zoom_and_reset_view_flow() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let start_zoom = state.view.zoom();

    controller
        .handle_intent(&mut state, AppIntent::ZoomOutRequested)
        .expect("ZoomOut sollte funktionieren");
    assert!(state.view.zoom() < start_zoom);

    state.view.memory.center_at(pos(0.0, 0.0));
    assert!(state.view.memory.detached().is_some());

    controller
        .handle_intent(&mut state, AppIntent::ResetViewRequested)
        .expect("ResetView sollte funktionieren");
    assert_eq!(state.view.center(), state.view.home);
    assert_relative_eq!(state.view.zoom(), start_zoom, epsilon = 1e-9);
}

#[test]
fn test_viewport_resize_is_recorded() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [1280.0, 720.0],
            },
        )
        .expect("Resize sollte funktionieren");

    assert_eq!(state.view.viewport_size, [1280.0, 720.0]);
}

#[test]
fn test_exit_request_sets_flag() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("Exit sollte funktionieren");

    assert!(state.should_exit);
}
