//! Integrationstests über die öffentliche API:
//! - End-to-End-Drags (Press/Motion/Release) über den TargetManager
//! - Synchronität mehrerer Ansichten desselben Targets
//! - Intent-Fluss über den AppState

use glam::Vec2;
use image_target_editor::{
    AppIntent, AppState, CircleTarget, ControlRole, PatchShape, PointerEvent, RecordingLabel,
    RectangleTarget, SurfaceRegistry, Target, TargetManager,
};

const ROT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

fn press(surface_id: u64, x: f32, y: f32) -> (u64, PointerEvent) {
    (surface_id, PointerEvent::Press {
        pos: Vec2::new(x, y),
    })
}

fn motion(surface_id: u64, x: f32, y: f32) -> (u64, PointerEvent) {
    (surface_id, PointerEvent::Motion {
        pos: Vec2::new(x, y),
    })
}

#[test]
fn test_kreis_radius_drag_end_to_end() {
    let mut surfaces = SurfaceRegistry::new();
    let a = surfaces.add_surface();
    let mut manager = TargetManager::new();
    let label = RecordingLabel::new();
    manager.add_target(
        Target::Circle(CircleTarget::new(100.0, 100.0, 20.0, ROT)),
        Box::new(label.clone()),
        &mut surfaces,
        a,
    );

    // Radius-Handle sitzt bei (120, 100) — greifen und nach (130, 100) ziehen
    for (sid, ev) in [
        press(a, 120.0, 100.0),
        motion(a, 124.0, 101.0),
        motion(a, 130.0, 100.0),
        (a, PointerEvent::Release),
    ] {
        manager.handle_pointer(sid, ev, &mut surfaces);
    }

    assert_eq!(label.last().unwrap(), "x = 100\ny = 100\nr = 30");
    assert!(manager.session().is_free());
}

#[test]
fn test_rechteck_ecke_end_to_end() {
    let mut surfaces = SurfaceRegistry::new();
    let a = surfaces.add_surface();
    let mut manager = TargetManager::new();
    let label = RecordingLabel::new();
    let id = manager.add_target(
        Target::Rectangle(RectangleTarget::new(0.0, 0.0, 10.0, ROT)),
        Box::new(label.clone()),
        &mut surfaces,
        a,
    );

    // tr sitzt bei (10, 10) — nach (20, 10) ziehen
    for (sid, ev) in [
        press(a, 10.0, 10.0),
        motion(a, 20.0, 10.0),
        (a, PointerEvent::Release),
    ] {
        manager.handle_pointer(sid, ev, &mut surfaces);
    }

    // Spannweiten gegen die Nachbarecken: ddx = 20 − (−10) = 30, ddy = 10 − (−10) = 20
    match manager.target(id) {
        Some(Target::Rectangle(r)) => {
            assert_eq!((r.x, r.y), (5.0, 0.0));
            assert_eq!((r.dx, r.dy), (15.0, 10.0));
        }
        _ => panic!("Target muss ein Rechteck sein"),
    }
    assert_eq!(label.last().unwrap(), "x = 5\ny = 0\ndx = 30\ndy = 20");
}

#[test]
fn test_zwei_ansichten_bleiben_synchron() {
    let mut surfaces = SurfaceRegistry::new();
    let a = surfaces.add_surface();
    let b = surfaces.add_surface();
    let mut manager = TargetManager::new();
    let id = manager.add_target(
        Target::Circle(CircleTarget::new(100.0, 100.0, 20.0, ROT)),
        Box::new(RecordingLabel::new()),
        &mut surfaces,
        a,
    );
    manager.draw_target(id, &mut surfaces, b);

    // Zentrum auf Ansicht a ziehen
    for (sid, ev) in [
        press(a, 100.0, 100.0),
        motion(a, 140.0, 120.0),
        (a, PointerEvent::Release),
    ] {
        manager.handle_pointer(sid, ev, &mut surfaces);
    }

    // Beide Ansichten tragen dieselbe Geometrie
    let shapes: Vec<PatchShape> = [a, b]
        .iter()
        .map(|sid| {
            let scene = surfaces.get(*sid).expect("Surface muss existieren");
            let (_, patch) = scene.patches().next().expect("Patch muss existieren");
            patch.shape
        })
        .collect();
    assert_eq!(shapes[0], shapes[1]);
    match shapes[0] {
        PatchShape::Circle { center, radius } => {
            assert_eq!(center, Vec2::new(140.0, 120.0));
            assert_eq!(radius, 20.0);
        }
        _ => panic!("Kreis-Target muss Kreis-Patches tragen"),
    }

    // Auch die Marker beider Ansichten sind identisch positioniert
    let cp = manager
        .target(id)
        .and_then(|t| t.control_point(ControlRole::Center))
        .expect("Zentrums-Punkt muss existieren");
    for binding in cp.bindings() {
        let marker = surfaces
            .get(binding.surface_id)
            .and_then(|s| s.marker(binding.marker_id))
            .expect("Marker muss existieren");
        assert_eq!(marker.pos, Vec2::new(140.0, 120.0));
    }
}

#[test]
fn test_degenerierte_geometrie_bleibt_gueltig() {
    let mut surfaces = SurfaceRegistry::new();
    let a = surfaces.add_surface();
    let mut manager = TargetManager::new();
    let label = RecordingLabel::new();
    manager.add_target(
        Target::Circle(CircleTarget::new(100.0, 100.0, 20.0, ROT)),
        Box::new(label.clone()),
        &mut surfaces,
        a,
    );

    // Radius-Handle exakt aufs Zentrum ziehen → r = 0, kein Fehler
    for (sid, ev) in [
        press(a, 120.0, 100.0),
        motion(a, 100.0, 100.0),
        (a, PointerEvent::Release),
    ] {
        manager.handle_pointer(sid, ev, &mut surfaces);
    }

    assert_eq!(label.last().unwrap(), "x = 100\ny = 100\nr = 0");
}

#[test]
fn test_appstate_intent_fluss() {
    let mut state = AppState::new();

    state.handle_intent(AppIntent::AddCircle).unwrap();
    state.handle_intent(AppIntent::AddSquare).unwrap();
    assert_eq!(state.panel.len(), 2);
    assert_eq!(state.manager.len(), 2);
    assert_eq!(
        state.panel[0].label.text(),
        "x = 320\ny = 240\nr = 60",
        "initiales Kreis-Label mit Standard-Radius"
    );

    // Zweite Ansicht öffnen: alle Targets werden dort gezeichnet
    state.handle_intent(AppIntent::ToggleSecondView).unwrap();
    let second = state.secondary_surface.expect("zweite Ansicht muss offen sein");
    assert_eq!(state.surfaces.get(second).unwrap().patch_count(), 2);

    // Kreis-Zentrum per Pointer-Intent auf der zweiten Ansicht ziehen
    let kreis_id = state.panel[0].target_id;
    for event in [
        PointerEvent::Press {
            pos: Vec2::new(320.0, 240.0),
        },
        PointerEvent::Motion {
            pos: Vec2::new(300.0, 200.0),
        },
        PointerEvent::Release,
    ] {
        state
            .handle_intent(AppIntent::Pointer {
                surface_id: second,
                event,
            })
            .unwrap();
    }
    assert_eq!(state.panel[0].label.text(), "x = 300\ny = 200\nr = 60");

    // Zweite Ansicht schließen und Target entfernen
    state.handle_intent(AppIntent::ToggleSecondView).unwrap();
    assert!(state.secondary_surface.is_none());
    state.handle_intent(AppIntent::RemoveTarget(kreis_id)).unwrap();
    assert_eq!(state.panel.len(), 1);
    assert_eq!(state.manager.len(), 1);
}
