use crate::foundation::core::{Axis, Basis, Point};
use crate::foundation::error::{LintransError, LintransResult};
use crate::foundation::math::snap_to_grid;

/// How the user drives the basis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InteractionMode {
    /// Basis handles are dragged directly.
    #[default]
    FreeMovement,
    /// A matrix is typed in and played back as an animation.
    MatrixInput,
}

/// Cursor feedback requested from the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CursorShape {
    /// Regular pointer.
    #[default]
    Default,
    /// A handle can be dragged.
    Grab,
}

/// Per-axis hover state, recomputed on every pointer move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HandleActivation {
    /// Pointer is over the first handle.
    pub axis0: bool,
    /// Pointer is over the second handle.
    pub axis1: bool,
}

impl HandleActivation {
    /// Hover state of `axis`.
    pub fn is_hot(&self, axis: Axis) -> bool {
        match axis {
            Axis::First => self.axis0,
            Axis::Second => self.axis1,
        }
    }

    /// Either handle is hovered.
    pub fn any(&self) -> bool {
        self.axis0 || self.axis1
    }

    /// The axis a drag would move; the first axis wins a tie.
    pub fn drag_axis(&self) -> Option<Axis> {
        Axis::ALL.into_iter().find(|&axis| self.is_hot(axis))
    }
}

/// Tolerances in world units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ManipulatorTolerances {
    /// Half-size of the square hit box around each handle.
    pub hit: f64,
    /// Distance within which a dragged coordinate snaps to the nearest integer.
    pub snap: f64,
}

impl Default for ManipulatorTolerances {
    fn default() -> Self {
        Self {
            hit: 0.2,
            snap: 0.1,
        }
    }
}

impl ManipulatorTolerances {
    /// `hit` must be positive and `snap` within `[0, 0.5]`.
    pub fn validate(&self) -> LintransResult<()> {
        if !(self.hit.is_finite() && self.hit > 0.0) {
            return Err(LintransError::validation("hit tolerance must be > 0"));
        }
        if !(self.snap.is_finite() && self.snap >= 0.0 && self.snap <= 0.5) {
            return Err(LintransError::validation(
                "snap tolerance must be within [0, 0.5]",
            ));
        }
        Ok(())
    }
}

/// Hover and drag handling for the basis handles (the axis endpoints).
#[derive(Clone, Debug, Default)]
pub struct DirectManipulator {
    tolerances: ManipulatorTolerances,
    active: HandleActivation,
}

impl DirectManipulator {
    /// Manipulator with nothing hovered.
    pub fn new(tolerances: ManipulatorTolerances) -> LintransResult<Self> {
        tolerances.validate()?;
        Ok(Self {
            tolerances,
            active: HandleActivation::default(),
        })
    }

    /// Tolerances in use.
    pub fn tolerances(&self) -> ManipulatorTolerances {
        self.tolerances
    }

    /// Current hover state.
    pub fn activation(&self) -> HandleActivation {
        self.active
    }

    /// Whether `pointer` lies inside the hit box of `axis`'s endpoint.
    ///
    /// The box is an AND of per-coordinate tests, not a radius.
    pub fn hit_test(&self, basis: &Basis, axis: Axis, pointer: Point) -> bool {
        let end = basis.axis(axis);
        (pointer.x - end.x).abs() < self.tolerances.hit
            && (pointer.y - end.y).abs() < self.tolerances.hit
    }

    /// Recompute hover state. Returns `true` when any axis changed between hot and cold.
    pub fn pointer_moved(&mut self, basis: &Basis, pointer: Point) -> bool {
        let next = HandleActivation {
            axis0: self.hit_test(basis, Axis::First, pointer),
            axis1: self.hit_test(basis, Axis::Second, pointer),
        };
        let changed = next != self.active;
        if changed {
            tracing::trace!(axis0 = next.axis0, axis1 = next.axis1, "handle activation changed");
        }
        self.active = next;
        changed
    }

    /// Move the hot axis to `pointer`, snapping each coordinate to the grid independently.
    ///
    /// Hover state is left as is, so a drag keeps its axis even when the pointer outruns the
    /// hit box. Returns the axis that moved, if any.
    pub fn pointer_dragged(&mut self, basis: &mut Basis, pointer: Point) -> Option<Axis> {
        let axis = self.active.drag_axis()?;
        let snap = self.tolerances.snap;
        basis.set_axis(
            axis,
            snap_to_grid(pointer.x, snap),
            snap_to_grid(pointer.y, snap),
        );
        Some(axis)
    }

    /// `Grab` while any handle is hovered.
    pub fn cursor(&self) -> CursorShape {
        if self.active.any() {
            CursorShape::Grab
        } else {
            CursorShape::Default
        }
    }

    /// Forget hover state.
    pub fn reset(&mut self) {
        self.active = HandleActivation::default();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/manipulator.rs"]
mod tests;
