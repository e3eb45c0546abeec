use crate::foundation::core::{Axis, Basis, Matrix2, Vec2};
use crate::foundation::error::{LintransError, LintransResult};
use crate::foundation::math::EPSILON;
use crate::transform::decompose::{AxisTarget, decompose};
use crate::transform::linear::{rotate_deg, scale_length_by, with_length};

/// Where the scheduler is in its rotate-then-scale cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AnimationPhase {
    /// No run in progress.
    Idle,
    /// Turning the axes toward their target directions.
    Rotating,
    /// Changing the axis lengths toward their targets.
    Scaling,
}

/// Per-frame increments. Both must be finite and > 0.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StepSizes {
    /// Degrees of rotation applied per frame.
    pub degrees: f64,
    /// Change in length (world units) applied per frame.
    pub scale: f64,
}

impl Default for StepSizes {
    fn default() -> Self {
        Self {
            degrees: 1.0,
            scale: 0.01,
        }
    }
}

impl StepSizes {
    /// Reject zero, negative and non-finite increments.
    pub fn validate(&self) -> LintransResult<()> {
        if !(self.degrees.is_finite() && self.degrees > 0.0) {
            return Err(LintransError::validation(
                "rotation step must be a finite number of degrees > 0",
            ));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(LintransError::validation(
                "scale step must be a finite length > 0",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
    Idle,
    Rotating([AxisTarget; 2]),
    Scaling([AxisTarget; 2]),
}

/// Result of one scheduler step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// The basis was mutated by this step.
    pub changed: bool,
    /// Phase after the step.
    pub phase: AnimationPhase,
}

/// Constant-rate animator from the identity frame to a target matrix.
///
/// A run rotates every axis toward its target direction, then changes every axis length toward
/// its target length, both by bounded increments per frame. The last increment of each axis snaps
/// it onto the target, and the run ends with the basis set to the literal target columns.
#[derive(Clone, Debug)]
pub struct AnimationScheduler {
    steps: StepSizes,
    state: State,
}

impl AnimationScheduler {
    /// Idle scheduler using `steps`.
    pub fn new(steps: StepSizes) -> LintransResult<Self> {
        steps.validate()?;
        Ok(Self {
            steps,
            state: State::Idle,
        })
    }

    /// Per-frame increments in use.
    pub fn steps(&self) -> StepSizes {
        self.steps
    }

    /// Current phase.
    pub fn phase(&self) -> AnimationPhase {
        match self.state {
            State::Idle => AnimationPhase::Idle,
            State::Rotating(_) => AnimationPhase::Rotating,
            State::Scaling(_) => AnimationPhase::Scaling,
        }
    }

    /// `true` until the run returns to idle.
    pub fn is_animating(&self) -> bool {
        self.state != State::Idle
    }

    /// Remaining per-axis work, `None` while idle.
    pub fn targets(&self) -> Option<&[AxisTarget; 2]> {
        match &self.state {
            State::Idle => None,
            State::Rotating(t) | State::Scaling(t) => Some(t),
        }
    }

    /// Begin animating toward `target`, discarding any run in progress.
    ///
    /// The basis is reset to identity first, so a run never blends with a previous one.
    #[tracing::instrument(skip(self, basis))]
    pub fn start(&mut self, target: &Matrix2, basis: &mut Basis) -> LintransResult<()> {
        target.validate()?;
        if self.is_animating() {
            tracing::debug!("discarding in-flight animation");
        }
        basis.reset();
        let targets = decompose(target);
        tracing::debug!(
            rot0 = targets[0].rotation_remaining_deg,
            rot1 = targets[1].rotation_remaining_deg,
            scale0 = targets[0].scale_remaining,
            scale1 = targets[1].scale_remaining,
            "decomposed target"
        );
        self.state = State::Rotating(targets);
        Ok(())
    }

    /// Stop without touching the basis.
    pub fn cancel(&mut self) {
        self.state = State::Idle;
    }

    /// Advance one frame.
    pub fn step(&mut self, basis: &mut Basis) -> StepOutcome {
        let steps = self.steps;
        let mut changed = false;

        if let State::Rotating(targets) = &mut self.state {
            for axis in Axis::ALL {
                changed |= rotate_axis(
                    basis.axis_mut(axis),
                    &mut targets[axis.index()],
                    steps.degrees,
                );
            }
            if targets.iter().all(AxisTarget::is_rotation_done) {
                let targets = *targets;
                tracing::debug!("rotation finished");
                self.state = State::Scaling(targets);
            }
        }

        // A frame that rotated does not also scale, but may still finish the run.
        if let State::Scaling(targets) = &mut self.state {
            if !changed {
                for axis in Axis::ALL {
                    changed |= scale_axis(
                        basis.axis_mut(axis),
                        &mut targets[axis.index()],
                        steps.scale,
                    );
                }
            }
            if targets.iter().all(AxisTarget::is_done) {
                let targets = *targets;
                for axis in Axis::ALL {
                    let column = targets[axis.index()].column;
                    let current = basis.axis_mut(axis);
                    changed |= *current != column;
                    *current = column;
                }
                tracing::debug!("scaling finished");
                self.state = State::Idle;
            }
        }

        self.outcome(changed)
    }

    /// Upper bound on the frames left in the current run.
    pub fn frames_remaining_hint(&self) -> u64 {
        fn frames(remaining: f64, step: f64) -> u64 {
            (remaining.abs() / step).ceil() as u64
        }

        let steps = self.steps;
        let rot = |t: &[AxisTarget; 2]| {
            t.iter()
                .map(|a| frames(a.rotation_remaining_deg, steps.degrees))
                .max()
                .unwrap_or(0)
        };
        let scale = |t: &[AxisTarget; 2]| {
            t.iter()
                .map(|a| frames(a.scale_remaining, steps.scale))
                .max()
                .unwrap_or(0)
        };

        match &self.state {
            State::Idle => 0,
            State::Rotating(t) => rot(t) + scale(t),
            State::Scaling(t) => scale(t),
        }
    }

    fn outcome(&self, changed: bool) -> StepOutcome {
        StepOutcome {
            changed,
            phase: self.phase(),
        }
    }
}

fn rotate_axis(v: &mut Vec2, target: &mut AxisTarget, step: f64) -> bool {
    let remaining = target.rotation_remaining_deg;
    if remaining == 0.0 {
        return false;
    }

    let applied = if remaining.abs() < step {
        remaining
    } else {
        step.copysign(remaining)
    };
    let left = remaining - applied;

    // `left == remaining` means the step vanished below the remainder's precision.
    if remaining.abs() < step || left == 0.0 || left == remaining {
        *v = with_length(target.column, v.length());
        target.rotation_remaining_deg = 0.0;
    } else {
        *v = rotate_deg(*v, applied);
        target.rotation_remaining_deg = left;
    }
    true
}

fn scale_axis(v: &mut Vec2, target: &mut AxisTarget, step: f64) -> bool {
    let remaining = target.scale_remaining;
    if remaining == 0.0 {
        return false;
    }

    let applied = step.copysign(remaining);
    let left = remaining - applied;

    if remaining.abs() < step || left == 0.0 || left == remaining || v.length() <= EPSILON {
        *v = target.column;
        target.scale_remaining = 0.0;
    } else {
        *v = scale_length_by(*v, applied);
        target.scale_remaining = left;
    }
    true
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scheduler.rs"]
mod tests;
