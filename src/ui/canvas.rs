//! Zeichnet eine `SurfaceScene` mit dem egui-Painter und übersetzt
//! Pointer-Eingaben in die Press/Motion/Release-Events des Cores.
//!
//! Der Canvas hält keinerlei Geometrie-Zustand — er rendert ausschließlich
//! die retained Szene und reicht Eingaben als Intents weiter.

use eframe::egui;

use crate::app::AppIntent;
use crate::core::{Marker, MarkerSymbol, PatchShape, PointerEvent, SurfaceScene};

/// Farbkonvertierung RGBA-f32 → egui.
fn to_color32(c: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (c[0] * 255.0) as u8,
        (c[1] * 255.0) as u8,
        (c[2] * 255.0) as u8,
        (c[3] * 255.0) as u8,
    )
}

/// Zeichnet eine Surface und gibt die dort angefallenen Pointer-Intents zurück.
pub fn show_surface(
    ui: &mut egui::Ui,
    surface_id: u64,
    scene: &SurfaceScene,
    size: egui::Vec2,
) -> Vec<AppIntent> {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
    let painter = ui.painter_at(rect);

    // Hintergrund und Rahmen der Ansicht
    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(18));
    painter.rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::from_gray(70)),
        egui::StrokeKind::Inside,
    );

    let origin = rect.min;
    let to_screen = |p: glam::Vec2| egui::pos2(origin.x + p.x, origin.y + p.y);

    for (_, patch) in scene.patches() {
        let stroke = egui::Stroke::new(patch.line_width, to_color32(patch.color));
        match patch.shape {
            PatchShape::Circle { center, radius } => {
                painter.circle_stroke(to_screen(center), radius, stroke);
            }
            PatchShape::Rect {
                corner,
                width,
                height,
            } => {
                // from_two_pos richtet auch negative Breiten/Höhen korrekt aus
                let a = to_screen(corner);
                let b = to_screen(corner + glam::Vec2::new(width, height));
                painter.rect_stroke(
                    egui::Rect::from_two_pos(a, b),
                    0.0,
                    stroke,
                    egui::StrokeKind::Middle,
                );
            }
        }
    }

    for (_, marker) in scene.markers() {
        draw_marker(&painter, to_screen(marker.pos), marker);
    }

    let mut intents = Vec::new();
    if let Some(pointer) = response.interact_pointer_pos() {
        let local = glam::Vec2::new(pointer.x - origin.x, pointer.y - origin.y);
        if response.drag_started() {
            intents.push(AppIntent::Pointer {
                surface_id,
                event: PointerEvent::Press { pos: local },
            });
        } else if response.dragged() {
            intents.push(AppIntent::Pointer {
                surface_id,
                event: PointerEvent::Motion { pos: local },
            });
        }
    }
    if response.drag_stopped() {
        intents.push(AppIntent::Pointer {
            surface_id,
            event: PointerEvent::Release,
        });
    }
    intents
}

/// Zeichnet ein Marker-Handle in seinem Symbol.
fn draw_marker(painter: &egui::Painter, pos: egui::Pos2, marker: &Marker) {
    let stroke = egui::Stroke::new(1.5, to_color32(marker.color));
    let half = marker.size / 2.0;
    match marker.symbol {
        MarkerSymbol::Cross => {
            painter.line_segment(
                [
                    egui::pos2(pos.x - half, pos.y - half),
                    egui::pos2(pos.x + half, pos.y + half),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    egui::pos2(pos.x - half, pos.y + half),
                    egui::pos2(pos.x + half, pos.y - half),
                ],
                stroke,
            );
        }
        MarkerSymbol::Circle => {
            painter.circle_stroke(pos, half, stroke);
        }
        MarkerSymbol::Square => {
            painter.rect_stroke(
                egui::Rect::from_center_size(pos, egui::vec2(marker.size, marker.size)),
                0.0,
                stroke,
                egui::StrokeKind::Middle,
            );
        }
    }
}
