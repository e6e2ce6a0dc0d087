//! The viewer: one explicit scene plus everything that drives it
//!
//! A [`Viewer`] owns the active shape, its generated wireframe and the
//! [`SceneState`] read by every frame. Hosts call the `set_*` entry points
//! when controls change, [`Viewer::tick`] at their own cadence while
//! animating, and [`Viewer::render_frame`] whenever they want a picture.

use std::time::Instant;
use serde::Serialize;
use hyperview_core::{
    compute_stats, ExportError, NominalStats, ParseError, ProjectionMode, RotationPlane,
    RotationState, SceneChanges, SceneParameter, SceneParameters, SceneState, ShapeDescriptor,
    ShapeKind, Snapshot, Wireframe, WireframeStats,
};
use hyperview_input::RotationController;
use hyperview_render::{Canvas, FrameStats, WireframeRenderer};
use crate::config::AppConfig;
use crate::input::InputAction;
use crate::systems::{AnimationDriver, RegenerationScheduler};

/// Descriptor text plus the counts of what was actually generated
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShapeInfo {
    pub kind: ShapeKind,
    pub name: &'static str,
    pub description: &'static str,
    /// Counts of the ideal shape
    pub nominal: NominalStats,
    /// The generator only approximates the ideal shape
    pub approximate: bool,
    pub generated: WireframeStats,
}

/// Interactive 4D shape viewer
pub struct Viewer {
    shape: ShapeKind,
    wireframe: Wireframe,
    state: SceneState,
    quality_cap: usize,
    renderer: WireframeRenderer,
    animation: AnimationDriver,
    regeneration: RegenerationScheduler,
    pointer: RotationController,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewer {
    /// Viewer with the built-in defaults: tesseract, orthogonal, all angles 0
    pub fn new() -> Self {
        Self::from_config(&AppConfig::default())
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let state = SceneState {
            rotation: RotationState::IDENTITY,
            params: config.scene.to_scene_parameters(),
        };
        let shape = config.scene.shape;
        let wireframe = shape.generate(&state.params);
        log::info!(
            "Loaded {} with {} vertices, {} edges",
            shape,
            wireframe.vertex_count(),
            wireframe.edge_count()
        );

        Self {
            shape,
            wireframe,
            state,
            quality_cap: config.scene.quality_cap(),
            renderer: WireframeRenderer::new(),
            animation: AnimationDriver::from_config(&config.animation),
            regeneration: RegenerationScheduler::new(config.input.regenerate_debounce()),
            pointer: RotationController::new()
                .with_drag_sensitivity(config.input.drag_sensitivity)
                .with_wheel_step(config.input.wheel_step),
        }
    }

    /// Every selectable shape, in menu order
    pub fn list_shapes() -> &'static [ShapeDescriptor] {
        hyperview_core::list_shapes()
    }

    /// Generate a shape with the current parameters without selecting it
    pub fn generate(&self, kind: ShapeKind) -> Wireframe {
        kind.generate(&self.state.params)
    }

    /// Select a shape and regenerate immediately
    ///
    /// The rotation is kept.
    pub fn set_shape(&mut self, kind: ShapeKind) {
        self.shape = kind;
        self.regeneration.cancel();
        self.regenerate();
    }

    /// Select a shape by identifier (`"tesseract"`, `"duocylinder"`, ...)
    pub fn select_shape(&mut self, id: &str) -> Result<(), ParseError> {
        let kind = id.parse()?;
        self.set_shape(kind);
        Ok(())
    }

    /// Apply a control change
    ///
    /// Changes that affect the active shape's geometry schedule a debounced
    /// regeneration; call [`Viewer::update`] to let it run.
    pub fn set_parameter(&mut self, parameter: SceneParameter) -> SceneChanges {
        self.set_parameter_at(parameter, Instant::now())
    }

    /// [`Viewer::set_parameter`] with an explicit clock
    pub fn set_parameter_at(&mut self, parameter: SceneParameter, now: Instant) -> SceneChanges {
        let parameter = match parameter {
            SceneParameter::Quality(q) => SceneParameter::Quality(q.min(self.quality_cap)),
            other => other,
        };
        let changes = self.state.params.apply(parameter);
        if self.shape.is_affected_by(changes) {
            log::debug!("Scheduled regeneration of {}", self.shape);
            self.regeneration.request(now);
        }
        changes
    }

    /// Apply pending pointer input and run a scheduled regeneration if its
    /// quiet period has elapsed at `now`
    ///
    /// Returns true if the scene changed and should be redrawn.
    pub fn update(&mut self, now: Instant) -> bool {
        let rotated = self.pointer.update(&mut self.state.rotation);
        let regenerated = self.regeneration.poll(now);
        if regenerated {
            self.regenerate();
        }
        rotated || regenerated
    }

    /// Pointer state; feed window events here, then call [`Viewer::update`]
    pub fn pointer_mut(&mut self) -> &mut RotationController {
        &mut self.pointer
    }

    /// Run a scheduled regeneration right away
    pub fn flush_regeneration(&mut self) -> bool {
        if self.regeneration.flush() {
            self.regenerate();
            true
        } else {
            false
        }
    }

    pub fn has_pending_regeneration(&self) -> bool {
        self.regeneration.is_pending()
    }

    fn regenerate(&mut self) {
        self.wireframe = self.shape.generate(&self.state.params);
        log::info!(
            "Regenerated {}: {} vertices, {} edges",
            self.shape,
            self.wireframe.vertex_count(),
            self.wireframe.edge_count()
        );
    }

    /// Set one plane angle, wrapped into [0, 360)
    pub fn set_rotation(&mut self, plane: RotationPlane, degrees: f32) {
        self.state.rotation.set_angle(plane, degrees);
    }

    /// Set one plane angle by axis name (`"xy"` .. `"zw"`)
    ///
    /// Unknown names are ignored and return false.
    pub fn set_rotation_by_name(&mut self, axis: &str, degrees: f32) -> bool {
        match RotationPlane::from_name(axis) {
            Some(plane) => {
                self.set_rotation(plane, degrees);
                true
            }
            None => {
                log::warn!("Ignoring rotation for unknown axis '{}'", axis);
                false
            }
        }
    }

    /// Add to one plane angle
    pub fn rotate_by(&mut self, plane: RotationPlane, delta: f32) {
        self.state.rotation.add_angle(plane, delta);
    }

    /// Mutable rotation, for input controllers
    pub fn rotation_mut(&mut self) -> &mut RotationState {
        &mut self.state.rotation
    }

    /// Zero every angle and stop auto-rotation
    pub fn reset(&mut self) {
        self.state.rotation.reset();
        self.animation.set_enabled(false);
        log::info!("Rotation reset");
    }

    pub fn set_projection(&mut self, mode: ProjectionMode) {
        self.set_parameter(SceneParameter::Projection(mode));
        log::info!("Projection mode: {}", mode);
    }

    /// Switch projection mode and return the new one
    pub fn toggle_projection(&mut self) -> ProjectionMode {
        let mode = self.state.params.projection.toggled();
        self.set_projection(mode);
        mode
    }

    pub fn set_animation(&mut self, enabled: bool) {
        self.animation.set_enabled(enabled);
    }

    /// Start or stop auto-rotation and return whether it is running
    pub fn toggle_animation(&mut self) -> bool {
        let running = self.animation.toggle();
        log::info!("Animation {}", if running { "started" } else { "stopped" });
        running
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_enabled()
    }

    /// Advance auto-rotation by `dt` seconds
    ///
    /// Returns true if the rotation changed and a new frame should be drawn.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.animation.tick(&mut self.state.rotation, dt)
    }

    /// Perform a keyboard action; returns false once the host should exit
    pub fn handle_action(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleAnimation => {
                self.toggle_animation();
            }
            InputAction::ResetRotation => self.reset(),
            InputAction::ToggleProjection => {
                self.toggle_projection();
            }
            InputAction::Exit => return false,
        }
        true
    }

    /// Draw the current scene
    ///
    /// Failures never escape: a failed frame is logged, an empty geometry
    /// is replaced by the tesseract, and the frame is tried once more.
    /// Returns `None` if that also fails; the next call starts fresh.
    pub fn render_frame<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> Option<FrameStats> {
        match self.renderer.render_frame(canvas, &self.wireframe, &self.state) {
            Ok(stats) => Some(stats),
            Err(e) => {
                log::error!("Frame failed: {}", e);
                if self.wireframe.is_empty() {
                    log::warn!("No geometry loaded, falling back to tesseract");
                    self.set_shape(ShapeKind::Tesseract);
                }
                match self.renderer.render_frame(canvas, &self.wireframe, &self.state) {
                    Ok(stats) => Some(stats),
                    Err(e) => {
                        log::error!("Recovery failed, skipping frame: {}", e);
                        None
                    }
                }
            }
        }
    }

    /// Vertex and edge counts of the current wireframe
    pub fn compute_stats(&self) -> WireframeStats {
        compute_stats(&self.wireframe.vertices, &self.wireframe.edges)
    }

    pub fn shape_info(&self) -> ShapeInfo {
        let descriptor = self.shape.descriptor();
        ShapeInfo {
            kind: self.shape,
            name: descriptor.name,
            description: descriptor.description,
            nominal: descriptor.stats,
            approximate: descriptor.approximate,
            generated: self.compute_stats(),
        }
    }

    /// Shape, counts, projection mode and rotation
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self.shape, &self.wireframe, &self.state)
    }

    /// Current base vertices as a RON list of `(x, y, z, w)` tuples
    pub fn export_vertices(&self) -> Result<String, ExportError> {
        hyperview_core::export_vertices(&self.wireframe.vertices)
    }

    /// Current base vertices as raw `f32` bytes
    pub fn vertex_bytes(&self) -> &[u8] {
        self.wireframe.vertex_bytes()
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn wireframe(&self) -> &Wireframe {
        &self.wireframe
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    pub fn rotation(&self) -> &RotationState {
        &self.state.rotation
    }

    pub fn params(&self) -> &SceneParameters {
        &self.state.params
    }

    pub fn quality_cap(&self) -> usize {
        self.quality_cap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use hyperview_render::{CanvasError, CircleStyle, LineStyle, RecordingCanvas, Rect};
    use hyperview_core::Vec2;

    #[test]
    fn test_initial_state() {
        let viewer = Viewer::new();
        assert_eq!(viewer.shape(), ShapeKind::Tesseract);
        assert_eq!(viewer.params().projection, ProjectionMode::Orthogonal);
        assert_eq!(*viewer.rotation(), RotationState::IDENTITY);
        assert_eq!(viewer.compute_stats(), WireframeStats { vertex_count: 16, edge_count: 32 });
        assert!(!viewer.is_animating());
    }

    #[test]
    fn test_set_shape_keeps_rotation() {
        let mut viewer = Viewer::new();
        viewer.set_rotation(RotationPlane::XW, 45.0);
        viewer.set_shape(ShapeKind::Simplex);
        assert_eq!(viewer.compute_stats().vertex_count, 5);
        assert_eq!(viewer.rotation().xw, 45.0);
    }

    #[test]
    fn test_select_unknown_shape() {
        let mut viewer = Viewer::new();
        assert!(viewer.select_shape("klein").is_err());
        assert_eq!(viewer.shape(), ShapeKind::Tesseract);
        viewer.select_shape("hyperoctahedron").unwrap();
        assert_eq!(viewer.compute_stats().vertex_count, 8);
    }

    #[test]
    fn test_quality_change_is_debounced() {
        let mut viewer = Viewer::new();
        viewer.set_shape(ShapeKind::Duocylinder);
        let before = viewer.compute_stats();

        let start = Instant::now();
        let changes = viewer.set_parameter_at(SceneParameter::Quality(6), start);
        assert!(changes.contains(SceneChanges::QUALITY));
        assert_eq!(viewer.compute_stats(), before);

        assert!(!viewer.update(start + Duration::from_millis(100)));
        assert!(viewer.update(start + Duration::from_millis(300)));
        assert_eq!(viewer.compute_stats().vertex_count, 25);
    }

    #[test]
    fn test_quality_capped_by_config() {
        let mut viewer = Viewer::new();
        viewer.set_parameter(SceneParameter::Quality(1000));
        assert_eq!(viewer.params().quality, 30);
    }

    #[test]
    fn test_fixed_shape_ignores_quality() {
        let mut viewer = Viewer::new();
        viewer.set_parameter(SceneParameter::Quality(5));
        assert!(!viewer.has_pending_regeneration());
    }

    #[test]
    fn test_pointer_input_applied_on_update() {
        use winit::event::{ElementState, MouseButton, MouseScrollDelta};

        let mut viewer = Viewer::new();
        let pointer = viewer.pointer_mut();
        pointer.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        pointer.process_cursor_moved(0.0, 0.0);
        pointer.process_cursor_moved(40.0, 20.0);
        pointer.process_scroll(MouseScrollDelta::LineDelta(0.0, -1.0));

        assert_eq!(*viewer.rotation(), RotationState::IDENTITY);
        assert!(viewer.update(Instant::now()));
        assert_eq!(viewer.rotation().xy, 20.0);
        assert_eq!(viewer.rotation().xz, 10.0);
        assert_eq!(viewer.rotation().yw, 2.0);
        assert!(!viewer.update(Instant::now()));
    }

    #[test]
    fn test_set_rotation_by_name() {
        let mut viewer = Viewer::new();
        assert!(viewer.set_rotation_by_name("YW", 400.0));
        assert_eq!(viewer.rotation().yw, 40.0);
        assert!(!viewer.set_rotation_by_name("xq", 10.0));
    }

    #[test]
    fn test_reset_stops_animation() {
        let mut viewer = Viewer::new();
        viewer.set_animation(true);
        viewer.tick(1.0 / 60.0);
        assert!(viewer.rotation().xy > 0.0);

        viewer.reset();
        assert_eq!(*viewer.rotation(), RotationState::IDENTITY);
        assert!(!viewer.is_animating());
        assert!(!viewer.tick(1.0 / 60.0));
    }

    #[test]
    fn test_handle_action() {
        let mut viewer = Viewer::new();
        assert!(viewer.handle_action(InputAction::ToggleProjection));
        assert_eq!(viewer.params().projection, ProjectionMode::Perspective);
        assert!(viewer.handle_action(InputAction::ToggleAnimation));
        assert!(viewer.is_animating());
        assert!(!viewer.handle_action(InputAction::Exit));
    }

    #[test]
    fn test_shape_info_reports_generated_counts() {
        let mut viewer = Viewer::new();
        viewer.set_shape(ShapeKind::Hyperdodecahedron);
        let info = viewer.shape_info();
        assert!(info.approximate);
        assert_eq!(info.generated.vertex_count, 32);
        assert_eq!(info.name, "Hyperdodecahedron (120-cell)");
    }

    #[test]
    fn test_render_frame() {
        let mut viewer = Viewer::new();
        let mut canvas = RecordingCanvas::new(800.0, 600.0);
        let stats = viewer.render_frame(&mut canvas).unwrap();
        assert_eq!(stats.edges_drawn, 32);
        assert_eq!(stats.vertices_drawn, 16);
    }

    /// Fails the first `failures` line draws, then behaves
    struct FlakyCanvas {
        failures: usize,
    }

    impl Canvas for FlakyCanvas {
        fn width(&self) -> f32 { 800.0 }
        fn height(&self) -> f32 { 600.0 }
        fn clear(&mut self, _region: Rect) -> Result<(), CanvasError> { Ok(()) }
        fn draw_line(&mut self, _: Vec2, _: Vec2, _: &LineStyle) -> Result<(), CanvasError> {
            if self.failures > 0 {
                self.failures -= 1;
                return Err(CanvasError::Backend("busy".into()));
            }
            Ok(())
        }
        fn draw_filled_circle(&mut self, _: Vec2, _: f32, _: &CircleStyle) -> Result<(), CanvasError> {
            Ok(())
        }
    }

    #[test]
    fn test_render_retries_once() {
        let mut viewer = Viewer::new();
        let mut canvas = FlakyCanvas { failures: 1 };
        let stats = viewer.render_frame(&mut canvas).unwrap();
        assert_eq!(stats.edges_drawn, 32);

        let mut canvas = FlakyCanvas { failures: 2 };
        assert!(viewer.render_frame(&mut canvas).is_none());
        // The next frame gets a fresh chance
        assert!(viewer.render_frame(&mut canvas).is_some());
    }

    #[test]
    fn test_render_failure_with_empty_geometry_falls_back() {
        let mut viewer = Viewer::new();
        viewer.set_parameter(SceneParameter::Quality(1));
        viewer.set_shape(ShapeKind::Hypersphere);
        assert!(viewer.wireframe().is_empty());

        let mut canvas = RecordingCanvas::new(0.0, 0.0);
        assert!(viewer.render_frame(&mut canvas).is_none());
        assert_eq!(viewer.shape(), ShapeKind::Tesseract);
        assert_eq!(viewer.compute_stats().vertex_count, 16);
    }

    #[test]
    fn test_exports() {
        let viewer = Viewer::new();
        let text = viewer.export_vertices().unwrap();
        assert_eq!(hyperview_core::import_vertices(&text).unwrap().len(), 16);
        assert_eq!(viewer.vertex_bytes().len(), 16 * 16);

        let snapshot = viewer.snapshot();
        assert_eq!(snapshot.shape, ShapeKind::Tesseract);
        assert_eq!(snapshot.edges, 32);
    }
}
