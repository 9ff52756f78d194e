//! Rendering Adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderer cannot mutate scene truth directly.
//! - Render output derives from scene state and view.

mod renderer;

pub use renderer::{DebugTextRenderer, RenderView, Renderer};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_view_default() {
        let view = RenderView::default();
        assert_eq!(view.fov_degrees, 55.0);
    }
}
