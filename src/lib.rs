//! Draw a rectangle and overlay translated, rotated and scaled copies of it.
//!
//! The transform calculator in [`transform`] is a set of pure functions over
//! [`Outline`]s. A [`Session`] tracks the canvas: the rectangle being dragged
//! out, the original rectangle, and one overlay per applied transform. Two
//! front ends drive a session: a desktop window built with Cushy
//! ([`panel::run`]) and a line-oriented [`Console`].
//!
//! Rotations apply the standard rotation matrix to screen coordinates, where Y
//! grows downward, so positive angles turn shapes clockwise on screen:
//!
//! ```rust
//! use rect_transforms::{Rectangle, Transform};
//!
//! let square = Rectangle::from_coords(100., 100., 200., 200.);
//! let turned = Transform::rotate(90.).apply_to_rectangle(&square);
//! let top_left = turned.corners()[0];
//! assert!((top_left.x - 200.).abs() < 1e-3);
//! assert!((top_left.y - 100.).abs() < 1e-3);
//! ```
#![warn(clippy::pedantic, missing_docs)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

mod canvas;
pub mod console;
mod error;
pub mod geometry;
pub mod panel;
pub mod parameters;
pub mod session;
pub mod settings;
pub mod transform;

pub use self::console::Console;
pub use self::error::Error;
pub use self::geometry::{Outline, Rectangle};
pub use self::parameters::{Parameters, TransformKind};
pub use self::session::{Overlay, Session};
pub use self::settings::{Palette, Settings};
pub use self::transform::Transform;

/// Installs a global `tracing` subscriber that writes to the terminal.
///
/// Without `RUST_LOG`, events up to INFO are shown in debug builds and up to
/// ERROR in release builds. `RUST_LOG` directives replace that ceiling, so
/// `RUST_LOG=rect_transforms=debug` enables this crate's debug events. Does
/// nothing if a subscriber is already installed or the `tracing-output`
/// feature is disabled.
pub fn initialize_tracing() {
    #[cfg(feature = "tracing-output")]
    {
        use tracing::Level;
        use tracing_subscriber::filter::LevelFilter;
        use tracing_subscriber::util::SubscriberInitExt;
        use tracing_subscriber::EnvFilter;

        #[cfg(debug_assertions)]
        const MAX_LEVEL: Level = Level::INFO;
        #[cfg(not(debug_assertions))]
        const MAX_LEVEL: Level = Level::ERROR;

        let _result = tracing_subscriber::fmt::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::from_level(MAX_LEVEL).into())
                    .from_env_lossy(),
            )
            .finish()
            .try_init();
    }
}
