//! The drawing canvas.

use cushy::context::GraphicsContext;
use cushy::figures::units::Px;
use cushy::figures::{FloatConversion, Point};
use cushy::kludgine::app::winit::event::MouseButton;
use cushy::kludgine::shapes::{PathBuilder, StrokeOptions};
use cushy::kludgine::Color;
use cushy::value::{Destination, Dynamic, Source};
use cushy::widget::{MakeWidget, HANDLED, IGNORED};
use cushy::widgets::Custom;

use crate::session::Session;
use crate::settings::{Palette, Settings};

/// Returns a canvas widget that draws `session` and lets the user drag out a
/// new rectangle with the left mouse button.
///
/// `status` is updated with a description of each rectangle drawn.
pub fn canvas(
    session: &Dynamic<Session>,
    status: &Dynamic<String>,
    settings: &Settings,
) -> impl MakeWidget {
    let palette = settings.palette;
    let line_width = Px::new(i32::try_from(settings.stroke_width).unwrap_or(i32::MAX));
    let width = Px::new(i32::try_from(settings.canvas_width).unwrap_or(i32::MAX));
    let height = Px::new(i32::try_from(settings.canvas_height).unwrap_or(i32::MAX));

    Custom::empty()
        .background_color(palette.background)
        .on_hit_test(|_, _| true)
        .on_mouse_down({
            let session = session.clone();
            move |location, _device, button, _context| {
                if button != MouseButton::Left {
                    return IGNORED;
                }
                session.map_mut(|mut session| session.press(canvas_point(location)));
                HANDLED
            }
        })
        .on_mouse_drag({
            let session = session.clone();
            move |location, _device, _button, _context| {
                session.map_mut(|mut session| session.drag(canvas_point(location)));
            }
        })
        .on_mouse_up({
            let session = session.clone();
            let status = status.clone();
            move |location, _device, _button, _context| {
                let drawn = session
                    .map_mut(|mut session| session.release(location.map(canvas_point)));
                status.set(match drawn {
                    Some(rect) => format!("Rectangle drawn: {rect}"),
                    None => String::from("Drag on the canvas to draw a rectangle"),
                });
            }
        })
        .on_redraw({
            let session = session.clone();
            move |context| {
                let current = session.get_tracking_redraw(context);
                draw_session(&current, &palette, line_width, context);
            }
        })
        .width(width)
        .height(height)
}

fn canvas_point(location: Point<Px>) -> Point<f32> {
    Point::new(location.x.into_float(), location.y.into_float())
}

fn draw_session(
    session: &Session,
    palette: &Palette,
    line_width: Px,
    context: &mut GraphicsContext<'_, '_, '_, '_>,
) {
    if let Some(original) = session.original().or_else(|| session.preview()) {
        stroke_corners(original.corners(), palette.original, line_width, context);
    }

    for overlay in session.overlays() {
        stroke_corners(
            overlay.outline.corners(),
            palette.overlay(overlay.kind()),
            line_width,
            context,
        );
    }
}

fn stroke_corners(
    corners: [Point<f32>; 4],
    color: Color,
    line_width: Px,
    context: &mut GraphicsContext<'_, '_, '_, '_>,
) {
    let [a, b, c, d] =
        corners.map(|corner| Point::new(Px::from_float(corner.x), Px::from_float(corner.y)));
    let outline = PathBuilder::new(a).line_to(b).line_to(c).line_to(d).close();
    context
        .gfx
        .draw_shape(&outline.stroke(StrokeOptions::px_wide(line_width).colored(color)));
}
