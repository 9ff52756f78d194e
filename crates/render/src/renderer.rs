use glam::Vec3;
use trinket_scene::SceneState;

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(27.0, 27.0, 27.0),
            target: Vec3::ZERO,
            fov_degrees: 55.0,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads scene state and a view configuration, then produces
/// output. It never mutates the scene — scene truth is state-owned.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given scene state and view.
    fn render(&self, scene: &SceneState, view: &RenderView) -> Self::Output;
}

/// Debug text renderer for CLI output, logging, and tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &SceneState, view: &RenderView) -> String {
        let mut out = String::new();
        let q = scene.orientation();
        out.push_str("=== Scene State ===\n");
        match scene.model() {
            Some(model) => out.push_str(&format!(
                "Model: {} ({} vertices, {} triangles)\n",
                model.name, model.vertex_count, model.triangle_count
            )),
            None => out.push_str("Model: <none>\n"),
        }
        out.push_str(&format!(
            "Orientation: ({:.4}, {:.4}, {:.4}, {:.4})\n",
            q.x, q.y, q.z, q.w
        ));
        if scene.is_animating() {
            out.push_str(&format!(
                "Tween: active, {:.4} rad remaining (face {})\n",
                scene.remaining_angle(),
                scene.face_cursor()
            ));
        } else {
            out.push_str("Tween: settled\n");
        }
        let m = scene.material();
        out.push_str(&format!(
            "Material: color=({:.3}, {:.3}, {:.3}) metalness={:.2} roughness={:.2}\n",
            m.base_color[0], m.base_color[1], m.base_color[2], m.metalness, m.roughness
        ));
        out.push_str(&format!(
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}\n",
            view.eye.x, view.eye.y, view.eye.z, view.target.x, view.target.y, view.target.z,
            view.fov_degrees
        ));
        out
    }
}
