//! lintrans is an interactive 2D linear-transformation visualizer.
//!
//! A coordinate grid is spanned by two basis vectors. The user either drags the vector heads
//! directly, or types a target 2x2 matrix and watches the basis animate from the identity frame
//! toward it.
//!
//! # Pipeline overview
//!
//! 1. **Decompose**: `Matrix2 -> [AxisTarget; 2]` (per-axis rotation in degrees and length delta)
//! 2. **Animate**: `AnimationScheduler::step` rotates, then scales, each axis by bounded
//!    increments per frame, snapping exactly onto the target columns at the end
//! 3. **Project**: `GridProjector` turns the basis into grid segments in display space
//! 4. **Render**: a `Renderer` draws the scene (`CpuRenderer` rasterizes with `vello_cpu`)
//!
//! A [`Session`] owns all mutable state and is what a host loop talks to: one `frame` call per
//! display refresh, plus pointer, resize and mode-switch callbacks in between. Frames are only
//! painted while the session is dirty.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod foundation;
mod input;
mod interaction;
mod render;
mod session;

/// Per-axis rotation and scale helpers and the matrix decomposition.
pub mod transform;

pub use animation::scheduler::{AnimationPhase, AnimationScheduler, StepOutcome, StepSizes};
pub use config::{Palette, StrokeStyle, VisualizerConfig};
pub use foundation::core::{Affine, Axis, Basis, Matrix2, Point, Rgba8, Vec2};
pub use foundation::error::{LintransError, LintransResult};
pub use foundation::math::{snap_to_grid, wrap_degrees};
pub use input::matrix::{MatrixField, MatrixInput, MatrixReadout, format_entry};
pub use interaction::manipulator::{
    CursorShape, DirectManipulator, HandleActivation, InteractionMode, ManipulatorTolerances,
};
pub use render::cpu::CpuRenderer;
pub use render::grid::{GridLines, GridProjector, GridSegment, LineWeight};
pub use render::record::{DrawCommand, RecordingRenderer};
pub use render::scene::{Scene, arrow_head};
pub use render::view::{GridExtent, ViewTransform, Viewport};
pub use render::{FrameRgba, FrameSetup, Renderer};
pub use session::{FrameOutcome, Session};
pub use transform::decompose::{AxisTarget, decompose};
