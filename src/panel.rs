//! The control panel and the window that hosts it.

use std::ops::RangeInclusive;

use cushy::value::{Destination, Dynamic, Source};
use cushy::widget::MakeWidget;
use cushy::widgets::input::InputValue;
use cushy::widgets::slider::Slidable;
use cushy::Run;

use crate::canvas::canvas;
use crate::parameters::{
    parse_parameter, Parameters, TransformKind, ROTATE_RANGE, SCALE_RANGE, TRANSLATE_RANGE,
};
use crate::session::Session;
use crate::settings::Settings;

const INSTRUCTIONS: &str =
    "Drag on the canvas to draw a rectangle, then pick a transformation and press Apply.";

/// The values edited by the control panel.
#[derive(Debug, Clone)]
struct Controls {
    kind: Dynamic<TransformKind>,
    dx: Dynamic<f32>,
    dy: Dynamic<f32>,
    degrees: Dynamic<f32>,
    sx: Dynamic<f32>,
    sy: Dynamic<f32>,
}

impl Controls {
    fn new() -> Self {
        let defaults = Parameters::default();
        Self {
            kind: Dynamic::default(),
            dx: Dynamic::new(defaults.dx),
            dy: Dynamic::new(defaults.dy),
            degrees: Dynamic::new(defaults.degrees),
            sx: Dynamic::new(defaults.sx),
            sy: Dynamic::new(defaults.sy),
        }
    }

    fn parameters(&self) -> Parameters {
        Parameters {
            dx: self.dx.get(),
            dy: self.dy.get(),
            degrees: self.degrees.get(),
            sx: self.sx.get(),
            sy: self.sy.get(),
        }
    }

    /// Applies the selected transform to `session`, returning the status
    /// message to show.
    fn apply_to(&self, session: &Dynamic<Session>) -> String {
        let kind = self.kind.get();
        let transform = self.parameters().transform(kind);
        session.map_mut(|mut session| match session.apply(transform) {
            Ok(overlay) => format!("{kind}: {}", overlay.outline),
            Err(err) => err.to_string(),
        })
    }

    fn reset(&self) {
        let defaults = Parameters::default();
        self.kind.set(TransformKind::default());
        self.dx.set(defaults.dx);
        self.dy.set(defaults.dy);
        self.degrees.set(defaults.degrees);
        self.sx.set(defaults.sx);
        self.sy.set(defaults.sy);
    }
}

/// Opens the transformation window and blocks until it is closed.
///
/// # Errors
///
/// Returns an error if the windowing event loop could not be started.
pub fn run(settings: &Settings) -> cushy::Result {
    let session = Dynamic::new(Session::new());
    let status = Dynamic::new(String::from(INSTRUCTIONS));

    canvas(&session, &status, settings)
        .and(panel(&session, &status).pad())
        .into_columns()
        .into_window()
        .titled(settings.title.clone())
        .run()
}

fn panel(session: &Dynamic<Session>, status: &Dynamic<String>) -> impl MakeWidget {
    let controls = Controls::new();

    let mode = |kind: TransformKind| controls.kind.new_radio(kind, kind.label());
    let modes = mode(TransformKind::Translate)
        .and(mode(TransformKind::Rotate))
        .and(mode(TransformKind::Scale))
        .into_rows();

    let apply_button = "Apply".into_button().on_click({
        let controls = controls.clone();
        let session = session.clone();
        let status = status.clone();
        move |_| status.set(controls.apply_to(&session))
    });

    let reset_button = "Reset".into_button().on_click({
        let controls = controls.clone();
        let session = session.clone();
        let status = status.clone();
        move |_| reset(&controls, &session, &status)
    });

    "Transformations"
        .and(modes)
        .and(parameter("Translate X (dx)", "dx", &controls.dx, TRANSLATE_RANGE))
        .and(parameter("Translate Y (dy)", "dy", &controls.dy, TRANSLATE_RANGE))
        .and(parameter(
            "Rotate (degrees)",
            "angle",
            &controls.degrees,
            ROTATE_RANGE,
        ))
        .and(parameter("Scale X (sx)", "sx", &controls.sx, SCALE_RANGE))
        .and(parameter("Scale Y (sy)", "sy", &controls.sy, SCALE_RANGE))
        .and(apply_button.and(reset_button).into_columns())
        .and(status.clone())
        .into_rows()
}

fn reset(controls: &Controls, session: &Dynamic<Session>, status: &Dynamic<String>) {
    session.map_mut(|mut session| session.reset());
    controls.reset();
    status.set(String::from(INSTRUCTIONS));
}

/// Returns a labeled text input and slider that both edit `value`.
///
/// Text that isn't a finite number is flagged and leaves `value` unchanged.
fn parameter(
    label: &'static str,
    name: &'static str,
    value: &Dynamic<f32>,
    range: RangeInclusive<f32>,
) -> impl MakeWidget {
    let text = parameter_text(name, value);
    let validation =
        text.validate_with(move |text: &String| parse_parameter(name, text).map(|_| ()));

    label
        .and(text.into_input().validation(validation).expand())
        .into_columns()
        .and(value.clone().slider_between(*range.start(), *range.end()))
        .into_rows()
}

/// Returns text linked to `value`.
///
/// Editing the text stores it into `value` only when it parses as a finite
/// number, so rejected input leaves the previous value in place.
fn parameter_text(name: &'static str, value: &Dynamic<f32>) -> Dynamic<String> {
    value.linked(ToString::to_string, move |text: &String| {
        parse_parameter(name, text).ok()
    })
}

#[cfg(test)]
mod tests {
    use cushy::value::{Destination, Dynamic, Source};

    use super::{parameter_text, reset, Controls, INSTRUCTIONS};
    use crate::geometry::Rectangle;
    use crate::parameters::TransformKind;
    use crate::session::Session;

    #[test]
    fn text_edits_update_parameter() {
        let value = Dynamic::new(5.0_f32);
        let text = parameter_text("dx", &value);
        assert_eq!(text.get(), "5");

        text.set(String::from(" 12.5 "));
        assert_eq!(value.get(), 12.5);

        value.set(-3.);
        assert_eq!(text.get(), "-3");
    }

    #[test]
    fn rejected_text_keeps_previous_value() {
        let value = Dynamic::new(5.0_f32);
        let text = parameter_text("dx", &value);
        for input in ["inf", "-inf", "NaN", "1e39", "abc", ""] {
            text.set(String::from(input));
            assert_eq!(value.get(), 5., "{input:?} was stored");
        }
    }

    #[test]
    fn apply_uses_selected_kind() {
        let session = Dynamic::new(Session::new());
        let controls = Controls::new();

        assert_eq!(
            controls.apply_to(&session),
            "Please draw a rectangle first"
        );
        assert!(session.get().overlays().is_empty());

        session.map_mut(|mut session| {
            session.set_rectangle(Rectangle::from_coords(100., 100., 200., 150.));
        });
        controls.kind.set(TransformKind::Translate);
        controls.dx.set(50.);
        controls.dy.set(-20.);
        assert_eq!(
            controls.apply_to(&session),
            "Translate: (150.0, 80.0) (250.0, 80.0) (250.0, 130.0) (150.0, 130.0)"
        );

        controls.kind.set(TransformKind::Scale);
        controls.apply_to(&session);
        let session = session.get();
        assert_eq!(session.overlays().len(), 2);
        assert_eq!(session.overlays()[1].kind(), TransformKind::Scale);
    }

    #[test]
    fn reset_restores_defaults() {
        let session = Dynamic::new(Session::new());
        let status = Dynamic::new(String::from("Translate: ..."));
        let controls = Controls::new();
        session.map_mut(|mut session| {
            session.set_rectangle(Rectangle::from_coords(0., 0., 10., 10.));
        });
        controls.kind.set(TransformKind::Rotate);
        controls.degrees.set(45.);
        controls.apply_to(&session);

        reset(&controls, &session, &status);

        assert!(!session.get().has_rectangle());
        assert!(session.get().overlays().is_empty());
        assert_eq!(controls.kind.get(), TransformKind::Translate);
        assert_eq!(controls.degrees.get(), 0.);
        assert_eq!(status.get(), INSTRUCTIONS);
    }
}
