//! Pointer-driven interaction state machine
//!
//! Owns the drag lifecycle (idle → armed → idle), the drag snapshot, and
//! the gizmo/target poses. All state lives on the [`Gizmo`] instance, so
//! several gizmos can coexist in one process.

use glam::{Mat3, Mat4, Vec2, Vec3};
use uuid::Uuid;

use crate::axis::GizmoAxis;
use crate::config::GizmoConfig;
use crate::drag::{self, DragSnapshot};
use crate::error::DragError;
use crate::framing;
use crate::mode::{GizmoMode, HandlePalette, ModeState};
use crate::scene::{PickTarget, SceneView};

/// Transform delta produced by one drag event.
///
/// The gizmo applies these to its own pose (and the bound target) itself;
/// hosts that mirror poses elsewhere can consume the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GizmoTransform {
    /// World-space translation since drag start
    Translation(Vec3),
    /// Rotation about the armed local axis for this event
    Rotation(Mat3),
    /// Per-axis scale factors measured from the drag snapshot
    Scale(Vec3),
}

/// Object bound to the gizmo for manipulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetBinding {
    pub id: Uuid,
    pub pose: Mat4,
}

/// Drag lifecycle state. The snapshot exists exactly as long as an axis is
/// armed.
#[derive(Debug, Clone, Copy)]
enum DragPhase {
    Idle,
    Armed {
        axis: GizmoAxis,
        snapshot: DragSnapshot,
        last_pointer: Vec2,
    },
}

/// Transform gizmo interaction core.
///
/// The host forwards pointer events (`pointer_down`, `pointer_move`,
/// `pointer_up`) together with its [`SceneView`]; the gizmo keeps its own
/// pose and the bound target's pose in sync during drags and exposes both
/// for the host to mirror into its scene graph.
pub struct Gizmo {
    pose: Mat4,
    target: Option<TargetBinding>,
    mode: ModeState,
    phase: DragPhase,
    config: GizmoConfig,
    handle_scale: f32,
    attached: bool,
}

impl Gizmo {
    pub fn new() -> Self {
        Self::with_config(GizmoConfig::default())
    }

    pub fn with_config(config: GizmoConfig) -> Self {
        Self {
            pose: Mat4::IDENTITY,
            target: None,
            mode: ModeState::default(),
            phase: DragPhase::Idle,
            config,
            handle_scale: 1.0,
            attached: false,
        }
    }

    pub fn with_palette(mut self, palette: HandlePalette) -> Self {
        self.mode = ModeState::new(palette);
        self
    }

    /// Attach to a scene: reset to translate mode with camera controls
    /// enabled
    pub fn attach<S: SceneView>(&mut self, scene: &mut S) {
        self.attached = true;
        self.phase = DragPhase::Idle;
        self.mode.set_mode(GizmoMode::Translate);
        self.mode.set_hovered(None);
        scene.set_camera_controls_enabled(true);
        tracing::debug!("gizmo attached");
    }

    /// Detach: drop drag state and the target binding, restore controls
    pub fn detach<S: SceneView>(&mut self, scene: &mut S) {
        self.phase = DragPhase::Idle;
        self.mode.set_hovered(None);
        self.target = None;
        self.attached = false;
        scene.set_camera_controls_enabled(true);
        tracing::debug!("gizmo detached");
    }

    /// Switch the manipulation mode.
    ///
    /// Rejected while a drag is armed; the in-flight drag keeps its mode.
    /// Returns whether the switch applied.
    pub fn set_mode(&mut self, mode: GizmoMode) -> bool {
        if self.is_dragging() {
            tracing::debug!(?mode, "mode switch rejected during drag");
            return false;
        }
        self.mode.set_mode(mode);
        true
    }

    pub fn mode(&self) -> GizmoMode {
        self.mode.mode()
    }

    /// Mode and hover state, for renderers binding handle colors
    pub fn mode_state(&self) -> &ModeState {
        &self.mode
    }

    /// The gizmo's own displayed pose
    pub fn pose(&self) -> Mat4 {
        self.pose
    }

    /// Bind a manipulation target; the gizmo jumps to its pose
    pub fn set_target(&mut self, id: Uuid, pose: Mat4) {
        self.target = Some(TargetBinding { id, pose });
        self.pose = pose;
    }

    pub fn clear_target(&mut self) {
        self.target = None;
    }

    pub fn target(&self) -> Option<&TargetBinding> {
        self.target.as_ref()
    }

    /// Current pose of the bound target, if any
    pub fn target_pose(&self) -> Option<Mat4> {
        self.target.map(|t| t.pose)
    }

    pub fn apply_to_target(&self) -> bool {
        self.config.apply_to_target
    }

    /// Control whether drag results propagate to the bound target
    pub fn set_apply_to_target(&mut self, apply: bool) {
        self.config.apply_to_target = apply;
    }

    pub fn config(&self) -> &GizmoConfig {
        &self.config
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Armed { .. })
    }

    /// Axis currently armed by a drag, if any
    pub fn armed_axis(&self) -> Option<GizmoAxis> {
        match self.phase {
            DragPhase::Armed { axis, .. } => Some(axis),
            DragPhase::Idle => None,
        }
    }

    /// Pointer-down: arm a handle, re-target to a picked object, or leave
    /// the state untouched
    pub fn pointer_down<S: SceneView>(&mut self, scene: &mut S, pointer: Vec2) {
        if !self.attached {
            return;
        }
        match scene.pick(pointer) {
            Some(pick) if self.mode.is_handle(&pick) => {
                let PickTarget::Handle(axis) = pick else {
                    return;
                };
                let target_pose = self.target.map(|t| t.pose).unwrap_or(self.pose);
                let snapshot = DragSnapshot::capture(pointer, self.pose, target_pose);
                self.phase = DragPhase::Armed {
                    axis,
                    snapshot,
                    last_pointer: pointer,
                };
                self.mode.set_hovered(Some(axis));
                // A gizmo drag and a camera drag must not compete
                scene.set_camera_controls_enabled(false);
            }
            Some(PickTarget::Object {
                id,
                pose: Some(pose),
            }) => {
                // Re-target: the gizmo adopts the picked object's pose
                self.set_target(id, pose);
                scene.set_camera_controls_enabled(true);
            }
            _ => {
                scene.set_camera_controls_enabled(true);
            }
        }
    }

    /// Pointer-move: drag math while armed, hover highlight while idle.
    ///
    /// Returns the transform delta applied this event, if any.
    pub fn pointer_move<S: SceneView>(
        &mut self,
        scene: &mut S,
        pointer: Vec2,
    ) -> Option<GizmoTransform> {
        if !self.attached {
            return None;
        }
        if self.is_dragging() {
            self.continue_drag(scene, pointer)
        } else {
            self.update_hover(scene, pointer);
            None
        }
    }

    /// Drag continuation for hosts that track pointer capture themselves.
    ///
    /// Arriving without an active drag means a pointer-up was missed: the
    /// event is a no-op and the state is forced back to idle.
    pub fn continue_drag<S: SceneView>(
        &mut self,
        scene: &mut S,
        pointer: Vec2,
    ) -> Option<GizmoTransform> {
        let DragPhase::Armed {
            axis,
            snapshot,
            last_pointer,
        } = self.phase
        else {
            tracing::warn!(error = %DragError::StaleDragState, "forcing idle");
            self.force_idle(scene);
            return None;
        };

        let result = self.drag_update(scene, axis, &snapshot, last_pointer, pointer);
        if let DragPhase::Armed { last_pointer, .. } = &mut self.phase {
            *last_pointer = pointer;
        }
        match result {
            Ok(update) => update,
            Err(err) => {
                tracing::debug!(error = %err, "drag update skipped");
                None
            }
        }
    }

    /// Pointer-up: clear any armed drag and re-enable camera controls,
    /// unconditionally; a missed event must never leave controls disabled
    pub fn pointer_up<S: SceneView>(&mut self, scene: &mut S) {
        self.force_idle(scene);
    }

    /// Cancellation path for unexpected loss of pointer capture
    pub fn cancel_drag<S: SceneView>(&mut self, scene: &mut S) {
        self.force_idle(scene);
    }

    /// Per-frame framing: recompute the screen-constant handle scale.
    /// Reads drag state, never writes it.
    pub fn update_frame<S: SceneView>(&mut self, scene: &S) {
        self.handle_scale =
            framing::scale_for_screen_size(scene, &self.pose, self.config.screen_length_px);
    }

    pub fn handle_scale(&self) -> f32 {
        self.handle_scale
    }

    /// Placement matrix for the currently visible handle-set
    pub fn handle_placement<S: SceneView>(&self, scene: &S) -> Mat4 {
        framing::handle_placement(scene, self.mode.mode(), &self.pose, self.handle_scale)
    }

    fn force_idle<S: SceneView>(&mut self, scene: &mut S) {
        if self.is_dragging() {
            self.mode.set_hovered(None);
        }
        self.phase = DragPhase::Idle;
        scene.set_camera_controls_enabled(true);
    }

    fn update_hover<S: SceneView>(&mut self, scene: &S, pointer: Vec2) {
        let hovered = match scene.pick(pointer) {
            Some(PickTarget::Handle(axis)) => Some(axis),
            _ => None,
        };
        self.mode.set_hovered(hovered);
    }

    fn drag_update<S: SceneView>(
        &mut self,
        scene: &mut S,
        axis: GizmoAxis,
        snapshot: &DragSnapshot,
        last_pointer: Vec2,
        pointer: Vec2,
    ) -> Result<Option<GizmoTransform>, DragError> {
        let delta = pointer - snapshot.pointer;
        if delta == Vec2::ZERO {
            return Ok(None);
        }

        match self.mode.mode() {
            GizmoMode::Translate => {
                let translation = drag::axis_translation(axis, snapshot, delta, scene)?;
                let new_translation = snapshot.gizmo_pose.w_axis.truncate() + translation;
                if !new_translation.is_finite() {
                    return Err(DragError::NonFiniteResult);
                }
                // Only the translation columns move; orientation and scale
                // stay untouched
                self.pose.w_axis = new_translation.extend(1.0);
                if self.config.apply_to_target
                    && let Some(target) = self.target.as_mut()
                {
                    target.pose.w_axis = new_translation.extend(1.0);
                }
                Ok(Some(GizmoTransform::Translation(translation)))
            }
            GizmoMode::Rotate => {
                let rotation = drag::axis_rotation(axis, snapshot, last_pointer, pointer, scene)?;
                let gizmo_pose = drag::rotated_gizmo_pose(snapshot, rotation);
                if !gizmo_pose.is_finite() {
                    return Err(DragError::NonFiniteResult);
                }
                let target_pose = if self.config.apply_to_target && self.target.is_some() {
                    let pose = drag::rotated_target_pose(snapshot, rotation, scene);
                    if !pose.is_finite() {
                        return Err(DragError::NonFiniteResult);
                    }
                    Some(pose)
                } else {
                    None
                };

                self.pose = gizmo_pose;
                if let Some(pose) = target_pose
                    && let Some(target) = self.target.as_mut()
                {
                    target.pose = pose;
                }
                // Per-event angle deltas compose against the evolving poses
                self.refresh_snapshot();
                Ok(Some(GizmoTransform::Rotation(rotation)))
            }
            GizmoMode::Scale => {
                let factors =
                    drag::axis_scale(axis, snapshot, delta, scene, self.config.scale_sensitivity)?;
                if !factors.is_finite() {
                    return Err(DragError::NonFiniteResult);
                }
                // The gizmo itself never scales; the target does, always
                // from its snapshot
                if self.config.apply_to_target
                    && let Some(target) = self.target.as_mut()
                {
                    let pose = drag::scaled_target_pose(snapshot, factors);
                    if !pose.is_finite() {
                        return Err(DragError::NonFiniteResult);
                    }
                    target.pose = pose;
                }
                Ok(Some(GizmoTransform::Scale(factors)))
            }
        }
    }

    fn refresh_snapshot(&mut self) {
        let pose = self.pose;
        let target_pose = self.target.map(|t| t.pose).unwrap_or(pose);
        if let DragPhase::Armed { snapshot, .. } = &mut self.phase {
            snapshot.gizmo_pose = pose;
            snapshot.target_pose = target_pose;
        }
    }
}

impl Default for Gizmo {
    fn default() -> Self {
        Self::new()
    }
}
