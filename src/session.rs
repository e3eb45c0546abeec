//! The single context object a host drives: one per interactive screen.

use crate::animation::scheduler::{AnimationPhase, AnimationScheduler};
use crate::config::VisualizerConfig;
use crate::foundation::core::{Axis, Basis, Matrix2, Point};
use crate::foundation::error::{LintransError, LintransResult};
use crate::input::matrix::{MatrixField, MatrixInput, MatrixReadout};
use crate::interaction::manipulator::{
    CursorShape, DirectManipulator, HandleActivation, InteractionMode,
};
use crate::render::scene::Scene;
use crate::render::view::{GridExtent, ViewTransform, Viewport};
use crate::render::{FrameSetup, Renderer};

/// What happened during one host tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Nothing changed since the last rendered frame; no draw calls were made.
    Skipped,
    /// A frame was painted.
    Rendered {
        /// Scheduler phase of the painted state.
        phase: AnimationPhase,
        /// More frames are needed (animation in progress).
        pending: bool,
    },
}

/// Owns the basis and all animation and manipulation state.
///
/// Every mutation path sets the dirty flag; it is cleared only after a frame renders with no
/// animation pending.
#[derive(Clone, Debug)]
pub struct Session {
    config: VisualizerConfig,
    basis: Basis,
    reference: Basis,
    scheduler: AnimationScheduler,
    manipulator: DirectManipulator,
    input: MatrixInput,
    mode: InteractionMode,
    viewport: Viewport,
    dirty: bool,
    /// The next frame shows the start of a fresh run instead of stepping it.
    hold_start: bool,
}

impl Session {
    /// Session in free-movement mode with the identity basis.
    pub fn new(config: VisualizerConfig, viewport: Viewport) -> LintransResult<Self> {
        config.validate()?;
        Ok(Self {
            scheduler: AnimationScheduler::new(config.steps)?,
            manipulator: DirectManipulator::new(config.tolerances)?,
            config,
            basis: Basis::IDENTITY,
            reference: Basis::IDENTITY,
            input: MatrixInput::default(),
            mode: InteractionMode::default(),
            viewport,
            dirty: true,
            hold_start: false,
        })
    }

    /// Convenience for a window size; padding comes from the config.
    pub fn with_window(
        config: VisualizerConfig,
        window_width: u32,
        window_height: u32,
    ) -> LintransResult<Self> {
        let viewport = Viewport::new(window_width, window_height, config.canvas_padding)?;
        Self::new(config, viewport)
    }

    /// Configuration in use.
    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Current basis.
    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    /// The identity frame drawn underneath.
    pub fn reference_basis(&self) -> &Basis {
        &self.reference
    }

    /// Current animation phase.
    pub fn phase(&self) -> AnimationPhase {
        self.scheduler.phase()
    }

    /// The animation scheduler.
    pub fn scheduler(&self) -> &AnimationScheduler {
        &self.scheduler
    }

    /// Current interaction mode.
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// A frame is needed.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Current window and canvas geometry.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// World to screen mapping for the current viewport.
    pub fn view_transform(&self) -> ViewTransform {
        self.viewport.view_transform(self.config.pixels_per_unit)
    }

    /// Grid cells needed to cover the canvas.
    pub fn grid_extent(&self) -> GridExtent {
        self.viewport.grid_extent(self.config.pixels_per_unit)
    }

    /// Handle hover state.
    pub fn hot_handles(&self) -> HandleActivation {
        self.manipulator.activation()
    }

    /// Cursor for the current mode and hover state.
    pub fn cursor(&self) -> CursorShape {
        match self.mode {
            InteractionMode::FreeMovement => self.manipulator.cursor(),
            InteractionMode::MatrixInput => CursorShape::Default,
        }
    }

    /// Matrix text fields.
    pub fn input(&self) -> &MatrixInput {
        &self.input
    }

    /// The current basis formatted for the matrix display.
    pub fn readout(&self) -> MatrixReadout {
        MatrixReadout::from_basis(&self.basis)
    }

    /// Playback needs matrix-input mode and four valid fields.
    pub fn playback_enabled(&self) -> bool {
        self.mode == InteractionMode::MatrixInput && self.input.is_valid()
    }

    /// Force the next frame to render.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// One host tick: advance the animation and paint, or skip when nothing changed.
    ///
    /// The first frame after a submission paints the identity start state without stepping.
    pub fn frame(&mut self, renderer: &mut dyn Renderer) -> LintransResult<FrameOutcome> {
        if !self.dirty {
            return Ok(FrameOutcome::Skipped);
        }

        let phase = if std::mem::take(&mut self.hold_start) {
            self.scheduler.phase()
        } else {
            self.scheduler.step(&mut self.basis).phase
        };
        self.paint(renderer)?;

        let pending = self.scheduler.is_animating();
        if !pending {
            self.dirty = false;
        }
        Ok(FrameOutcome::Rendered { phase, pending })
    }

    /// Paint the current state without stepping or touching the dirty flag.
    pub fn paint(&self, renderer: &mut dyn Renderer) -> LintransResult<()> {
        let (canvas_width, canvas_height) = self.viewport.canvas_size();
        let handles = match self.mode {
            InteractionMode::FreeMovement => Some(self.manipulator.activation()),
            InteractionMode::MatrixInput => None,
        };
        Scene {
            basis: &self.basis,
            reference: &self.reference,
            extent: self.grid_extent(),
            setup: FrameSetup {
                canvas_width,
                canvas_height,
                view: self.view_transform(),
                background: self.config.palette.space,
            },
            style: &self.config.style,
            palette: &self.config.palette,
            handles,
            cursor: self.cursor(),
        }
        .paint(renderer)
    }

    /// Pointer moved, in world units. Ignored in matrix-input mode.
    pub fn pointer_moved(&mut self, world: Point) {
        if self.mode != InteractionMode::FreeMovement {
            return;
        }
        if self.manipulator.pointer_moved(&self.basis, world) {
            self.dirty = true;
        }
    }

    /// Pointer dragged, in world units. Ignored in matrix-input mode.
    pub fn pointer_dragged(&mut self, world: Point) -> Option<Axis> {
        if self.mode != InteractionMode::FreeMovement {
            return None;
        }
        let moved = self.manipulator.pointer_dragged(&mut self.basis, world);
        if moved.is_some() {
            self.dirty = true;
        }
        moved
    }

    /// [`Session::pointer_moved`] with a screen-pixel position.
    pub fn pointer_moved_screen(&mut self, screen: Point) {
        let world = self.view_transform().screen_to_world(screen);
        self.pointer_moved(world);
    }

    /// [`Session::pointer_dragged`] with a screen-pixel position.
    pub fn pointer_dragged_screen(&mut self, screen: Point) -> Option<Axis> {
        let world = self.view_transform().screen_to_world(screen);
        self.pointer_dragged(world)
    }

    /// New window size. Animation state is left alone.
    pub fn resize(&mut self, window_width: u32, window_height: u32) -> LintransResult<()> {
        self.viewport = Viewport::new(window_width, window_height, self.config.canvas_padding)?;
        self.dirty = true;
        tracing::debug!(window_width, window_height, "viewport resized");
        Ok(())
    }

    /// Switch interaction mode; always resets the basis to identity.
    pub fn set_mode(&mut self, mode: InteractionMode) {
        self.scheduler.cancel();
        self.hold_start = false;
        self.manipulator.reset();
        self.basis.reset();
        if mode == InteractionMode::MatrixInput {
            self.input = MatrixInput::from_matrix(&self.basis.to_matrix());
        }
        self.mode = mode;
        self.dirty = true;
        tracing::debug!(?mode, "interaction mode changed");
    }

    /// Edit one matrix field.
    pub fn set_input_field(&mut self, field: MatrixField, text: impl Into<String>) {
        self.input.set_field(field, text);
    }

    /// Replace all matrix fields.
    pub fn set_input(&mut self, input: MatrixInput) {
        self.input = input;
    }

    /// Start playback of the typed matrix.
    ///
    /// Rejected without any state change when playback is disabled.
    pub fn play(&mut self) -> LintransResult<()> {
        if self.mode != InteractionMode::MatrixInput {
            return Err(LintransError::input("playback requires matrix input mode"));
        }
        let target = self.input.try_parse()?;
        self.submit(&target)
    }

    /// Animate from identity toward `target`, cancelling any run in progress.
    #[tracing::instrument(skip(self))]
    pub fn submit(&mut self, target: &Matrix2) -> LintransResult<()> {
        if self.mode != InteractionMode::MatrixInput {
            return Err(LintransError::input("playback requires matrix input mode"));
        }
        self.scheduler.start(target, &mut self.basis)?;
        self.hold_start = true;
        self.dirty = true;
        tracing::debug!(
            frames_hint = self.scheduler.frames_remaining_hint(),
            "animation started"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
