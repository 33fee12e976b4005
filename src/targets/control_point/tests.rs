use glam::Vec2;

use super::{AxisMask, ControlPoint};
use crate::core::{ControlRole, MarkerSymbol, SurfaceRegistry};

fn punkt() -> ControlPoint {
    ControlPoint::new(
        ControlRole::Center,
        AxisMask::BOTH,
        MarkerSymbol::Cross,
        [1.0, 0.0, 0.0, 1.0],
    )
}

#[test]
fn test_bind_liest_position_vom_ersten_marker() {
    let mut surfaces = SurfaceRegistry::new();
    let a = surfaces.add_surface();
    let b = surfaces.add_surface();

    let mut cp = punkt();
    cp.bind_to_surface(&mut surfaces, a, Some(Vec2::new(10.0, 20.0)));
    // Ohne explizite Position: aktuelle Koordinate des ersten Markers
    cp.bind_to_surface(&mut surfaces, b, None);

    assert_eq!(cp.bindings().len(), 2);
    assert_eq!(cp.position(&surfaces), Some(Vec2::new(10.0, 20.0)));
}

#[test]
fn test_bind_ohne_position_und_ohne_marker_ist_noop() {
    let mut surfaces = SurfaceRegistry::new();
    let a = surfaces.add_surface();

    let mut cp = punkt();
    cp.bind_to_surface(&mut surfaces, a, None);
    assert!(cp.bindings().is_empty(), "Bindung ohne Position muss verfallen");
}

#[test]
fn test_set_x_aktualisiert_alle_marker() {
    let mut surfaces = SurfaceRegistry::new();
    let a = surfaces.add_surface();
    let b = surfaces.add_surface();

    let mut cp = punkt();
    cp.bind_to_surface(&mut surfaces, a, Some(Vec2::new(5.0, 5.0)));
    cp.bind_to_surface(&mut surfaces, b, None);

    cp.set_x(&mut surfaces, 42.0);
    cp.set_y(&mut surfaces, 7.0);

    for binding in cp.bindings() {
        let marker = surfaces
            .get(binding.surface_id)
            .and_then(|s| s.marker(binding.marker_id))
            .expect("Marker muss existieren");
        assert_eq!(marker.pos, Vec2::new(42.0, 7.0));
    }
}

#[test]
fn test_achsenmaske_blockiert_y() {
    let mut surfaces = SurfaceRegistry::new();
    let a = surfaces.add_surface();

    let mut cp = ControlPoint::new(
        ControlRole::Radius,
        AxisMask::X_ONLY,
        MarkerSymbol::Circle,
        [0.0, 1.0, 0.0, 1.0],
    );
    cp.bind_to_surface(&mut surfaces, a, Some(Vec2::new(100.0, 50.0)));

    cp.apply_motion(&mut surfaces, Vec2::new(130.0, 99.0));

    // y bleibt unverändert, x folgt dem Event
    assert_eq!(cp.position(&surfaces), Some(Vec2::new(130.0, 50.0)));
}

#[test]
fn test_hit_test_nur_auf_eigener_surface() {
    let mut surfaces = SurfaceRegistry::new();
    let a = surfaces.add_surface();
    let b = surfaces.add_surface();

    let mut cp = punkt();
    cp.bind_to_surface(&mut surfaces, a, Some(Vec2::new(10.0, 10.0)));

    assert!(cp.hit_test(&surfaces, a, Vec2::new(14.0, 10.0)));
    assert!(
        !cp.hit_test(&surfaces, a, Vec2::new(30.0, 10.0)),
        "außerhalb des Pick-Radius"
    );
    assert!(
        !cp.hit_test(&surfaces, b, Vec2::new(10.0, 10.0)),
        "Surface b hat keinen Marker dieses Punkts"
    );
}

#[test]
fn test_unbind_surface_entfernt_nur_dortige_marker() {
    let mut surfaces = SurfaceRegistry::new();
    let a = surfaces.add_surface();
    let b = surfaces.add_surface();

    let mut cp = punkt();
    cp.bind_to_surface(&mut surfaces, a, Some(Vec2::new(1.0, 2.0)));
    cp.bind_to_surface(&mut surfaces, b, None);

    cp.unbind_surface(&mut surfaces, b);

    assert_eq!(cp.bindings().len(), 1);
    assert_eq!(surfaces.get(b).unwrap().marker_count(), 0);
    assert_eq!(surfaces.get(a).unwrap().marker_count(), 1);
}

#[test]
fn test_remove_markers_leert_alle_surfaces() {
    let mut surfaces = SurfaceRegistry::new();
    let a = surfaces.add_surface();
    let b = surfaces.add_surface();

    let mut cp = punkt();
    cp.bind_to_surface(&mut surfaces, a, Some(Vec2::ZERO));
    cp.bind_to_surface(&mut surfaces, b, None);

    cp.remove_markers(&mut surfaces);

    assert!(cp.bindings().is_empty());
    assert_eq!(surfaces.get(a).unwrap().marker_count(), 0);
    assert_eq!(surfaces.get(b).unwrap().marker_count(), 0);
}
