//! The state of a drawing canvas.
//!
//! A [`Session`] starts empty. Pressing the mouse anchors a new rectangle,
//! dragging previews it, and releasing it makes it the original rectangle that
//! transforms are applied to. Each applied transform adds an [`Overlay`]
//! computed from the original rectangle, so overlays never accumulate each
//! other's effects.

use cushy::figures::Point;

use crate::geometry::{Outline, Rectangle};
use crate::parameters::TransformKind;
use crate::transform::Transform;
use crate::Error;

/// A transformed copy of the original rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    /// The transform that produced this overlay.
    pub transform: Transform,
    /// The transformed outline.
    pub outline: Outline,
}

impl Overlay {
    /// Returns the kind of transform that produced this overlay.
    #[must_use]
    pub const fn kind(&self) -> TransformKind {
        self.transform.kind()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CanvasState {
    Empty,
    Dragging {
        anchor: Point<f32>,
        cursor: Option<Point<f32>>,
    },
    Drawn(Rectangle),
}

/// The canvas state shared by every front end.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    state: CanvasState,
    overlays: Vec<Overlay>,
    last_requested: Option<TransformKind>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Returns an empty session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: CanvasState::Empty,
            overlays: Vec::new(),
            last_requested: None,
        }
    }

    /// Clears the canvas and starts drawing a new rectangle at `location`.
    pub fn press(&mut self, location: Point<f32>) {
        self.reset();
        tracing::debug!(x = location.x, y = location.y, "rectangle anchored");
        self.state = CanvasState::Dragging {
            anchor: location,
            cursor: None,
        };
    }

    /// Moves the free corner of the rectangle being drawn to `location`.
    ///
    /// Does nothing if no rectangle is being drawn.
    pub fn drag(&mut self, location: Point<f32>) {
        if let CanvasState::Dragging { cursor, .. } = &mut self.state {
            *cursor = Some(location);
        }
    }

    /// Finishes drawing the current rectangle.
    ///
    /// `location` is where the button was released, or `None` if it was
    /// released outside of the canvas, in which case the last dragged location
    /// is used. If the cursor never moved while the button was held, no
    /// rectangle is created.
    pub fn release(&mut self, location: Option<Point<f32>>) -> Option<Rectangle> {
        let CanvasState::Dragging { anchor, cursor } = self.state else {
            return None;
        };

        match cursor.map(|cursor| location.unwrap_or(cursor)) {
            Some(corner) => {
                let rect = Rectangle::new(anchor, corner);
                self.set_rectangle(rect);
                Some(rect)
            }
            None => {
                self.state = CanvasState::Empty;
                None
            }
        }
    }

    /// Replaces the original rectangle with `rect`, clearing all overlays.
    pub fn set_rectangle(&mut self, rect: Rectangle) {
        tracing::debug!(%rect, "rectangle drawn");
        self.overlays.clear();
        self.state = CanvasState::Drawn(rect);
    }

    /// Records a request for a transform of `kind` and returns the original
    /// rectangle it should be applied to.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRectangle`] if no rectangle has been drawn.
    pub fn request(&mut self, kind: TransformKind) -> Result<Rectangle, Error> {
        self.last_requested = Some(kind);
        self.original().ok_or_else(|| {
            tracing::warn!(%kind, "transform requested without a rectangle");
            Error::NoRectangle
        })
    }

    /// Applies `transform` to the original rectangle and adds the result as a
    /// new overlay.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRectangle`] if no rectangle has been drawn.
    pub fn apply(&mut self, transform: Transform) -> Result<&Overlay, Error> {
        let original = self.request(transform.kind())?;
        let outline = transform.apply_to_rectangle(&original);
        tracing::info!(%transform, %outline, "transform applied");
        let index = self.overlays.len();
        self.overlays.push(Overlay { transform, outline });
        Ok(&self.overlays[index])
    }

    /// Removes the rectangle and every overlay.
    pub fn reset(&mut self) {
        self.state = CanvasState::Empty;
        self.overlays.clear();
        self.last_requested = None;
    }

    /// Returns the original rectangle, if one has been drawn.
    #[must_use]
    pub const fn original(&self) -> Option<Rectangle> {
        match self.state {
            CanvasState::Drawn(rect) => Some(rect),
            _ => None,
        }
    }

    /// Returns true if a rectangle has been drawn.
    #[must_use]
    pub const fn has_rectangle(&self) -> bool {
        self.original().is_some()
    }

    /// Returns true while a rectangle is being dragged out.
    #[must_use]
    pub const fn is_drawing(&self) -> bool {
        matches!(self.state, CanvasState::Dragging { .. })
    }

    /// Returns the rectangle currently being dragged out, if the cursor has
    /// moved since it was anchored.
    #[must_use]
    pub fn preview(&self) -> Option<Rectangle> {
        match self.state {
            CanvasState::Dragging {
                anchor,
                cursor: Some(cursor),
            } => Some(Rectangle::new(anchor, cursor)),
            _ => None,
        }
    }

    /// Returns the overlays in the order they were applied.
    #[must_use]
    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    /// Returns the kind of the most recently requested transform, including
    /// requests rejected because no rectangle was drawn.
    #[must_use]
    pub const fn last_requested(&self) -> Option<TransformKind> {
        self.last_requested
    }
}

#[cfg(test)]
mod tests {
    use cushy::figures::Point;

    use super::Session;
    use crate::geometry::{Outline, Rectangle};
    use crate::parameters::TransformKind;
    use crate::transform::Transform;
    use crate::Error;

    fn drawn(rect: Rectangle) -> Session {
        let mut session = Session::new();
        session.press(rect.first);
        session.drag(Point::new(0., 0.));
        assert_eq!(session.release(Some(rect.second)), Some(rect));
        session
    }

    #[test]
    fn transform_before_drawing_is_rejected() {
        let mut session = Session::new();
        assert_eq!(
            session.apply(Transform::translate(1., 1.)),
            Err(Error::NoRectangle)
        );
        assert!(session.overlays().is_empty());
        assert_eq!(session.last_requested(), Some(TransformKind::Translate));
    }

    #[test]
    fn drag_previews_then_commits() {
        let mut session = Session::new();
        session.press(Point::new(10., 10.));
        assert!(session.is_drawing());
        assert_eq!(session.preview(), None);

        session.drag(Point::new(40., 30.));
        assert_eq!(
            session.preview(),
            Some(Rectangle::from_coords(10., 10., 40., 30.))
        );
        assert!(!session.has_rectangle());

        let rect = session.release(Some(Point::new(50., 60.)));
        assert_eq!(rect, Some(Rectangle::from_coords(10., 10., 50., 60.)));
        assert!(!session.is_drawing());
        assert_eq!(session.original(), rect);
        assert_eq!(session.preview(), None);
    }

    #[test]
    fn release_outside_uses_last_drag() {
        let mut session = Session::new();
        session.press(Point::new(10., 10.));
        session.drag(Point::new(70., 80.));
        assert_eq!(
            session.release(None),
            Some(Rectangle::from_coords(10., 10., 70., 80.))
        );
    }

    #[test]
    fn click_without_drag_draws_nothing() {
        let mut session = drawn(Rectangle::from_coords(1., 1., 5., 5.));
        session.press(Point::new(10., 10.));
        assert_eq!(session.release(Some(Point::new(10., 10.))), None);
        assert!(!session.has_rectangle());
        assert!(!session.is_drawing());
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut session = Session::new();
        session.drag(Point::new(3., 3.));
        assert_eq!(session.release(Some(Point::new(5., 5.))), None);
        assert_eq!(session, Session::new());
    }

    #[test]
    fn overlays_use_the_original() {
        let rect = Rectangle::from_coords(100., 100., 200., 150.);
        let mut session = drawn(rect);
        session
            .apply(Transform::translate(50., -20.))
            .expect("rectangle drawn");
        let second = session
            .apply(Transform::translate(50., -20.))
            .expect("rectangle drawn");
        assert_eq!(
            second.outline,
            Outline::Rectangle(Rectangle::from_coords(150., 80., 250., 130.))
        );

        session.apply(Transform::rotate(90.)).expect("rectangle drawn");
        session
            .apply(Transform::scale(2., 2.))
            .expect("rectangle drawn");

        let kinds = session
            .overlays()
            .iter()
            .map(super::Overlay::kind)
            .collect::<Vec<_>>();
        assert_eq!(
            kinds,
            [
                TransformKind::Translate,
                TransformKind::Translate,
                TransformKind::Rotate,
                TransformKind::Scale
            ]
        );
        assert_eq!(session.original(), Some(rect));
        assert_eq!(session.last_requested(), Some(TransformKind::Scale));
    }

    #[test]
    fn pressing_clears_the_canvas() {
        let mut session = drawn(Rectangle::from_coords(0., 0., 10., 10.));
        session.apply(Transform::rotate(45.)).expect("rectangle drawn");
        session.press(Point::new(20., 20.));
        assert!(session.overlays().is_empty());
        assert!(!session.has_rectangle());
        assert_eq!(session.last_requested(), None);
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = drawn(Rectangle::from_coords(0., 0., 10., 10.));
        session
            .apply(Transform::scale(0., -1.))
            .expect("degenerate scales are allowed");
        session.reset();
        assert_eq!(session, Session::new());
        assert_eq!(
            session.apply(Transform::rotate(10.)),
            Err(Error::NoRectangle)
        );
    }

    #[test]
    fn new_rectangle_replaces_overlays() {
        let mut session = drawn(Rectangle::from_coords(0., 0., 10., 10.));
        session
            .apply(Transform::translate(1., 1.))
            .expect("rectangle drawn");
        let replacement = Rectangle::from_coords(5., 5., 6., 6.);
        session.set_rectangle(replacement);
        assert!(session.overlays().is_empty());
        assert_eq!(session.original(), Some(replacement));
    }

    #[test]
    fn apply_returns_the_new_overlay() {
        let mut session = Session::new();
        session.set_rectangle(Rectangle::from_coords(0., 0., 10., 10.));
        session
            .apply(Transform::translate(1., 1.))
            .expect("rectangle drawn");

        let returned = *session
            .apply(Transform::scale(2., 3.))
            .expect("rectangle drawn");
        assert_eq!(returned.transform, Transform::scale(2., 3.));
        assert_eq!(session.overlays().last(), Some(&returned));
    }
}
