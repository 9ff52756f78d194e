use anyhow::{Context, Result};
use clap::Parser;
use egui::Context as EguiContext;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use trinket_assets::{CpuMesh, CpuTexture, EnvironmentMap, load_gltf_model};
use trinket_common::{METALNESS_MAX, ViewerConfig};
use trinket_input::{Action, action_for_key};
use trinket_orientation::PRESET_COUNT;
use trinket_render_wgpu::{OrbitCamera, WgpuRenderer};
use trinket_scene::{ModelInfo, SceneState};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "trinket-viewer", about = "Desktop trinket viewer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to the glTF model
    #[arg(long)]
    model: Option<PathBuf>,

    /// Path to the Radiance HDR environment map
    #[arg(long)]
    environment: Option<PathBuf>,

    /// Path to a JSON config file (flags take precedence)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// CPU-side assets loaded before the event loop starts.
struct LoadedAssets {
    mesh: CpuMesh,
    texture: CpuTexture,
    environment: EnvironmentMap,
}

/// Application state.
struct AppState {
    scene: SceneState,
    camera: OrbitCamera,
    show_panel: bool,
    show_axes: bool,
    mouse_captured: bool,
}

impl AppState {
    fn new(config: &ViewerConfig) -> Self {
        Self {
            scene: SceneState::new(config.material, config.tween),
            camera: OrbitCamera::default(),
            show_panel: true,
            show_axes: config.show_axes,
            mouse_captured: false,
        }
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if !pressed {
            return;
        }
        if let Some(action) = action_for_key(key) {
            self.apply_action(action);
        }
    }

    fn apply_action(&mut self, action: Action) {
        match action {
            Action::SnapToFace(index) => {
                if self.scene.snap_to_face(index) {
                    tracing::debug!("snapping to face {index}");
                }
            }
            Action::CycleFace => {
                self.scene.cycle_face();
                tracing::debug!("cycling to face {}", self.scene.face_cursor());
            }
            Action::SpinRandom => {
                self.scene.spin_random(&mut rand::rng());
                tracing::debug!("random spin");
            }
            Action::ResetOrientation => {
                self.scene.reset_orientation();
                tracing::debug!("orientation reset");
            }
            Action::TogglePanel => {
                self.show_panel = !self.show_panel;
            }
        }
    }

    fn draw_ui(&mut self, ctx: &EguiContext) {
        if !self.show_panel {
            return;
        }

        egui::SidePanel::right("controls")
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.heading("Trinket Viewer");
                ui.separator();

                ui.heading("Material");
                let mut material = self.scene.material();
                let mut changed = false;
                ui.horizontal(|ui| {
                    ui.label("Color:");
                    changed |= ui.color_edit_button_rgb(&mut material.base_color).changed();
                });
                changed |= ui
                    .add(
                        egui::Slider::new(&mut material.metalness, 0.0..=METALNESS_MAX)
                            .text("metalness"),
                    )
                    .changed();
                changed |= ui
                    .add(egui::Slider::new(&mut material.roughness, 0.0..=1.0).text("roughness"))
                    .changed();
                if changed {
                    self.scene.set_material(material);
                }

                ui.separator();
                ui.heading("Orientation");
                ui.horizontal_wrapped(|ui| {
                    for index in 0..PRESET_COUNT {
                        if ui.button(format!("{}", index + 1)).clicked() {
                            self.scene.snap_to_face(index);
                        }
                    }
                });
                ui.horizontal(|ui| {
                    if ui.button("Cycle (I)").clicked() {
                        self.scene.cycle_face();
                    }
                    if ui.button("Random (R)").clicked() {
                        self.scene.spin_random(&mut rand::rng());
                    }
                    if ui.button("Reset (Home)").clicked() {
                        self.scene.reset_orientation();
                    }
                });
                ui.checkbox(&mut self.show_axes, "Show axes");

                ui.separator();
                if let Some(model) = self.scene.model() {
                    ui.label(format!(
                        "{}: {} vertices, {} triangles",
                        model.name, model.vertex_count, model.triangle_count
                    ));
                }
                let q = self.scene.orientation();
                ui.label(format!(
                    "Orientation: ({:.3}, {:.3}, {:.3}, {:.3})",
                    q.x, q.y, q.z, q.w
                ));
                if self.scene.is_animating() {
                    ui.label(format!(
                        "Settling: {:.3} rad to go",
                        self.scene.remaining_angle()
                    ));
                }

                ui.separator();
                ui.small("F1: Panel | 1-0: Faces | I: Cycle | R: Random | RMB: Orbit");
            });
    }
}

struct GpuApp {
    state: AppState,
    assets: LoadedAssets,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<WgpuRenderer>,
    egui_ctx: EguiContext,
    egui_winit: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,
}

impl GpuApp {
    fn new(state: AppState, assets: LoadedAssets) -> Self {
        Self {
            state,
            assets,
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
            egui_ctx: EguiContext::default(),
            egui_winit: None,
            egui_renderer: None,
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Trinket Viewer")
            .with_inner_size(PhysicalSize::new(1280u32, 720));
        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("find adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("trinket_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .expect("create device");

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        self.state.camera.aspect = size.width as f32 / size.height.max(1) as f32;

        let renderer = WgpuRenderer::new(
            &device,
            &queue,
            surface_format,
            size.width,
            size.height,
            &self.assets.mesh,
            &self.assets.texture,
            &self.assets.environment,
        );

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.renderer = Some(renderer);
        self.egui_winit = Some(egui_winit);
        self.egui_renderer = Some(egui_renderer);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(egui_winit) = &mut self.egui_winit {
            let response = egui_winit.on_window_event(self.window.as_ref().unwrap(), &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let (Some(surface), Some(device), Some(config)) =
                    (&self.surface, &self.device, &mut self.config)
                {
                    config.width = new_size.width.max(1);
                    config.height = new_size.height.max(1);
                    surface.configure(device, config);
                    self.state.camera.aspect = config.width as f32 / config.height.max(1) as f32;
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(device, config.width, config.height);
                    }
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                self.state
                    .handle_key(key, key_state == ElementState::Pressed);
            }
            WindowEvent::MouseInput {
                button: MouseButton::Right,
                state: btn_state,
                ..
            } => {
                self.state.mouse_captured = btn_state == ElementState::Pressed;
                if let Some(window) = &self.window {
                    window.set_cursor_visible(!self.state.mouse_captured);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let steps = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 60.0,
                };
                self.state.camera.zoom(steps);
            }
            WindowEvent::RedrawRequested => {
                self.state.scene.advance_frame();

                let (Some(surface), Some(device), Some(queue)) =
                    (&self.surface, &self.device, &self.queue)
                else {
                    return;
                };

                let output = match surface.get_current_texture() {
                    Ok(t) => t,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        if let Some(config) = &self.config {
                            surface.configure(device, config);
                        }
                        return;
                    }
                    Err(e) => {
                        tracing::error!("surface error: {e}");
                        return;
                    }
                };

                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                if let Some(renderer) = &self.renderer {
                    renderer.render(
                        device,
                        queue,
                        &view,
                        &self.state.camera,
                        &self.state.scene,
                        self.state.show_axes,
                    );
                }

                let raw_input = self
                    .egui_winit
                    .as_mut()
                    .unwrap()
                    .take_egui_input(self.window.as_ref().unwrap());
                let full_output = self.egui_ctx.run(raw_input, |ctx| {
                    self.state.draw_ui(ctx);
                });

                self.egui_winit.as_mut().unwrap().handle_platform_output(
                    self.window.as_ref().unwrap(),
                    full_output.platform_output,
                );

                let paint_jobs = self
                    .egui_ctx
                    .tessellate(full_output.shapes, full_output.pixels_per_point);

                let screen_descriptor = egui_wgpu::ScreenDescriptor {
                    size_in_pixels: [
                        self.config.as_ref().unwrap().width,
                        self.config.as_ref().unwrap().height,
                    ],
                    pixels_per_point: full_output.pixels_per_point,
                };

                {
                    let egui_renderer = self.egui_renderer.as_mut().unwrap();
                    for (id, image_delta) in &full_output.textures_delta.set {
                        egui_renderer.update_texture(device, queue, *id, image_delta);
                    }
                    let mut encoder =
                        device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("egui_encoder"),
                        });
                    egui_renderer.update_buffers(
                        device,
                        queue,
                        &mut encoder,
                        &paint_jobs,
                        &screen_descriptor,
                    );
                    {
                        let mut pass = encoder
                            .begin_render_pass(&wgpu::RenderPassDescriptor {
                                label: Some("egui_pass"),
                                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                                    view: &view,
                                    resolve_target: None,
                                    ops: wgpu::Operations {
                                        load: wgpu::LoadOp::Load,
                                        store: wgpu::StoreOp::Store,
                                    },
                                })],
                                depth_stencil_attachment: None,
                                ..Default::default()
                            })
                            .forget_lifetime();
                        egui_renderer.render(&mut pass, &paint_jobs, &screen_descriptor);
                    }
                    queue.submit(std::iter::once(encoder.finish()));
                    for id in &full_output.textures_delta.free {
                        egui_renderer.free_texture(id);
                    }
                }

                output.present();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.state.mouse_captured {
                self.state.camera.rotate(delta.0 as f32, delta.1 as f32);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Load model and environment per the config, with graceful fallbacks for
/// the optional pieces.
fn load_assets(config: &ViewerConfig) -> Result<(LoadedAssets, ModelInfo)> {
    let (mesh, texture, name) = match &config.model {
        Some(path) => {
            let (mesh, texture) = load_gltf_model(path)
                .with_context(|| format!("load model {}", path.display()))?;
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "model".to_string());
            (mesh, texture, name)
        }
        None => {
            tracing::warn!("no model given, showing the built-in cube");
            (CpuMesh::unit_cube(), CpuTexture::white(), "cube".to_string())
        }
    };

    let environment = match &config.environment {
        Some(path) => match EnvironmentMap::load(path) {
            Ok(env) => env,
            Err(e) => {
                tracing::error!("failed to load environment {}: {e}", path.display());
                EnvironmentMap::neutral()
            }
        },
        None => EnvironmentMap::neutral(),
    };

    let info = ModelInfo {
        name,
        vertex_count: mesh.vertex_count(),
        triangle_count: mesh.triangle_count(),
    };
    Ok((
        LoadedAssets {
            mesh,
            texture,
            environment,
        },
        info,
    ))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("trinket-viewer starting");

    let mut config = match &cli.config {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => ViewerConfig::default(),
    };
    if cli.model.is_some() {
        config.model = cli.model;
    }
    if cli.environment.is_some() {
        config.environment = cli.environment;
    }

    let (assets, info) = load_assets(&config)?;

    let mut state = AppState::new(&config);
    state.scene.attach_model(
        info,
        assets.mesh.face_normals(),
        assets.mesh.centroid(),
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(state, assets);
    event_loop.run_app(&mut app)?;

    Ok(())
}
