use glam::Vec2;

use super::TargetManager;
use crate::app::label::RecordingLabel;
use crate::core::{ControlRole, PointerEvent, SurfaceRegistry};
use crate::targets::{CircleTarget, Target};

const ROT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

fn press(pos: Vec2) -> PointerEvent {
    PointerEvent::Press { pos }
}

fn motion(pos: Vec2) -> PointerEvent {
    PointerEvent::Motion { pos }
}

/// Ein Kreis (100,100,r=20) auf Surface a.
fn aufbau() -> (SurfaceRegistry, u64, TargetManager, u64, RecordingLabel) {
    let mut surfaces = SurfaceRegistry::new();
    let a = surfaces.add_surface();
    let mut manager = TargetManager::new();
    let label = RecordingLabel::new();
    let id = manager.add_target(
        Target::Circle(CircleTarget::new(100.0, 100.0, 20.0, ROT)),
        Box::new(label.clone()),
        &mut surfaces,
        a,
    );
    (surfaces, a, manager, id, label)
}

#[test]
fn test_add_target_stoesst_initiales_label_an() {
    let (_, _, _, _, label) = aufbau();
    assert_eq!(label.texts(), vec!["x = 100\ny = 100\nr = 20".to_string()]);
}

#[test]
fn test_drag_zyklus_press_motion_release() {
    let (mut surfaces, a, mut manager, id, label) = aufbau();

    // Press auf dem Radius-Handle bei (120,100)
    manager.handle_pointer(a, press(Vec2::new(120.0, 100.0)), &mut surfaces);
    let owner = manager.session().owner().expect("Session muss erworben sein");
    assert_eq!(owner.target_id, id);
    assert_eq!(owner.role, ControlRole::Radius);
    assert_eq!(owner.surface_id, a);

    manager.handle_pointer(a, motion(Vec2::new(130.0, 100.0)), &mut surfaces);
    match manager.target(id) {
        Some(Target::Circle(c)) => assert_eq!(c.r, 30.0),
        _ => panic!("Target muss ein Kreis sein"),
    }
    assert_eq!(label.last().unwrap(), "x = 100\ny = 100\nr = 30");

    manager.handle_pointer(a, PointerEvent::Release, &mut surfaces);
    assert!(manager.session().is_free());
}

#[test]
fn test_press_daneben_erwirbt_nichts() {
    let (mut surfaces, a, mut manager, _, _) = aufbau();

    manager.handle_pointer(a, press(Vec2::new(300.0, 300.0)), &mut surfaces);
    assert!(manager.session().is_free());
}

#[test]
fn test_globale_exklusivitaet_zweier_targets() {
    let (mut surfaces, a, mut manager, erster, _) = aufbau();
    let zweites_label = RecordingLabel::new();
    let zweiter = manager.add_target(
        Target::Circle(CircleTarget::new(300.0, 100.0, 20.0, ROT)),
        Box::new(zweites_label.clone()),
        &mut surfaces,
        a,
    );

    // Erster Kreis hält die Session
    manager.handle_pointer(a, press(Vec2::new(100.0, 100.0)), &mut surfaces);
    assert_eq!(manager.session().owner().unwrap().target_id, erster);

    // Press auf dem zweiten Kreis wird verworfen, nicht gequeued
    manager.handle_pointer(a, press(Vec2::new(300.0, 100.0)), &mut surfaces);
    assert_eq!(manager.session().owner().unwrap().target_id, erster);

    // Motion bewegt ausschließlich den Besitzer
    manager.handle_pointer(a, motion(Vec2::new(150.0, 150.0)), &mut surfaces);
    match manager.target(zweiter) {
        Some(Target::Circle(c)) => {
            assert_eq!((c.x, c.y), (300.0, 100.0), "zweiter Kreis darf sich nicht bewegen");
        }
        _ => panic!("Target muss ein Kreis sein"),
    }

    // Nach Release kann der zweite erworben werden
    manager.handle_pointer(a, PointerEvent::Release, &mut surfaces);
    manager.handle_pointer(a, press(Vec2::new(300.0, 100.0)), &mut surfaces);
    assert_eq!(manager.session().owner().unwrap().target_id, zweiter);
}

#[test]
fn test_motion_fremder_surface_haelt_session() {
    let (mut surfaces, a, mut manager, id, _) = aufbau();
    let b = surfaces.add_surface();
    manager.draw_target(id, &mut surfaces, b);

    manager.handle_pointer(a, press(Vec2::new(100.0, 100.0)), &mut surfaces);
    assert!(!manager.session().is_free());

    // Motion auf Surface b: ignoriert, Session bleibt gehalten
    manager.handle_pointer(b, motion(Vec2::new(500.0, 500.0)), &mut surfaces);
    assert!(!manager.session().is_free());
    match manager.target(id) {
        Some(Target::Circle(c)) => assert_eq!((c.x, c.y), (100.0, 100.0)),
        _ => panic!("Target muss ein Kreis sein"),
    }

    // Zurück auf der Press-Surface läuft der Drag weiter
    manager.handle_pointer(a, motion(Vec2::new(110.0, 90.0)), &mut surfaces);
    match manager.target(id) {
        Some(Target::Circle(c)) => assert_eq!((c.x, c.y), (110.0, 90.0)),
        _ => panic!("Target muss ein Kreis sein"),
    }
}

#[test]
fn test_release_ohne_drag_ist_noop() {
    let (mut surfaces, a, mut manager, _, _) = aufbau();

    manager.handle_pointer(a, PointerEvent::Release, &mut surfaces);
    manager.handle_pointer(a, PointerEvent::Release, &mut surfaces);
    assert!(manager.session().is_free());
}

#[test]
fn test_motion_ohne_drag_ist_noop() {
    let (mut surfaces, a, mut manager, id, label) = aufbau();

    manager.handle_pointer(a, motion(Vec2::new(50.0, 50.0)), &mut surfaces);
    match manager.target(id) {
        Some(Target::Circle(c)) => assert_eq!((c.x, c.y), (100.0, 100.0)),
        _ => panic!("Target muss ein Kreis sein"),
    }
    // Nur das initiale Label wurde geschrieben
    assert_eq!(label.texts().len(), 1);
}

#[test]
fn test_mehrfaches_zeichnen_erzeugt_keine_doppelte_zustellung() {
    let (mut surfaces, a, mut manager, id, _) = aufbau();

    // Erneutes Zeichnen auf derselben Surface: Abonnements bleiben einfach
    manager.draw_target(id, &mut surfaces, a);
    assert_eq!(manager.subscriptions().count(a), 2); // Center + Radius
}

#[test]
fn test_remove_target_beendet_laufenden_drag() {
    let (mut surfaces, a, mut manager, id, _) = aufbau();

    manager.handle_pointer(a, press(Vec2::new(100.0, 100.0)), &mut surfaces);
    assert!(!manager.session().is_free());

    manager.remove_target(id, &mut surfaces);

    assert!(manager.session().is_free());
    assert!(manager.is_empty());
    assert_eq!(manager.subscriptions().count(a), 0);
    assert_eq!(surfaces.get(a).unwrap().patch_count(), 0);
    assert_eq!(surfaces.get(a).unwrap().marker_count(), 0);
}

#[test]
fn test_detach_surface_beendet_dortigen_drag() {
    let (mut surfaces, a, mut manager, id, _) = aufbau();
    let b = surfaces.add_surface();
    manager.draw_target(id, &mut surfaces, b);

    manager.handle_pointer(b, press(Vec2::new(100.0, 100.0)), &mut surfaces);
    assert_eq!(manager.session().owner().unwrap().surface_id, b);

    manager.detach_surface(b, &mut surfaces);

    assert!(manager.session().is_free());
    assert_eq!(manager.subscriptions().count(b), 0);
    assert_eq!(surfaces.get(b).unwrap().patch_count(), 0);
    // Surface a bleibt vollständig
    assert_eq!(surfaces.get(a).unwrap().patch_count(), 1);
    assert_eq!(surfaces.get(a).unwrap().marker_count(), 2);
}
