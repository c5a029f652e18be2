#![cfg(feature = "tracing-output")]

use tracing::Level;

#[test]
fn rust_log_enables_debug_events() {
    std::env::set_var("RUST_LOG", "rect_transforms=debug");
    rect_transforms::initialize_tracing();

    assert!(tracing::enabled!(target: "rect_transforms::session", Level::DEBUG));
    assert!(!tracing::enabled!(target: "rect_transforms::session", Level::TRACE));
}
