//! Enter/exit transition state machine driving animated mount and unmount.
//!
//! The machine never touches timers itself. [`reduce_transition`] returns
//! [`TransitionEffect`]s and the owning component schedules the frame and
//! timeout callbacks, feeding their completion back as actions tagged with
//! the generation they were scheduled for.

use thiserror::Error;

use crate::styles;

/// Default enter/exit duration in milliseconds.
pub const DEFAULT_TRANSITION_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Lifecycle phase of an animated element.
pub enum TransitionPhase {
    /// Not rendered.
    Exited,
    /// Mounted and animating in.
    Entering,
    /// Mounted and at rest.
    Entered,
    /// Mounted and animating out; unmounts when the timeout elapses.
    Exiting,
}

impl Default for TransitionPhase {
    fn default() -> Self {
        Self::Exited
    }
}

impl TransitionPhase {
    /// Stable token exposed through `data-ui-state`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Exited => "exited",
            Self::Entering => "entering",
            Self::Entered => "entered",
            Self::Exiting => "exiting",
        }
    }

    /// Whether the element belongs in the render tree.
    pub fn is_mounted(self) -> bool {
        !matches!(self, Self::Exited)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Transition record owned by one animated component instance.
pub struct TransitionState {
    /// Current phase.
    pub phase: TransitionPhase,
    /// Set once the first entering frame has painted.
    pub active: bool,
    /// Bumped on every phase change that schedules timers.
    pub generation: u32,
}

impl TransitionState {
    /// Lifecycle class for the current phase, if any.
    pub fn lifecycle_class(self) -> Option<&'static str> {
        match (self.phase, self.active) {
            (TransitionPhase::Exited, _) => None,
            (TransitionPhase::Entering, false) => Some(styles::MODAL_ENTER),
            (TransitionPhase::Entering, true) => Some(styles::MODAL_ENTER_ACTIVE),
            (TransitionPhase::Entered, _) => Some(styles::MODAL_ENTER_DONE),
            (TransitionPhase::Exiting, _) => Some(styles::MODAL_EXIT),
        }
    }

    /// Whether the visible overlay/panel combination applies.
    pub fn is_visible(self) -> bool {
        match self.phase {
            TransitionPhase::Entering => self.active,
            TransitionPhase::Entered => true,
            TransitionPhase::Exited | TransitionPhase::Exiting => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Inputs accepted by [`reduce_transition`].
pub enum TransitionAction {
    /// The owner asked for the element to be shown.
    Show,
    /// The owner asked for the element to be hidden.
    Hide,
    /// The animation frame requested for `generation` has painted.
    FrameElapsed {
        /// Generation the frame was requested for.
        generation: u32,
    },
    /// The timeout started for `generation` has elapsed.
    TimeoutElapsed {
        /// Generation the timer was started for.
        generation: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Scheduling work the owning component must perform.
pub enum TransitionEffect {
    /// Drop any pending timeout.
    CancelTimer,
    /// Request one animation frame, then dispatch [`TransitionAction::FrameElapsed`].
    RequestFrame {
        /// Generation to echo back.
        generation: u32,
    },
    /// Start the transition timeout, then dispatch [`TransitionAction::TimeoutElapsed`].
    StartTimer {
        /// Generation to echo back.
        generation: u32,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejected timer callbacks.
pub enum TransitionError {
    /// The callback was scheduled for a superseded generation.
    #[error("stale transition timer: expected generation {expected}, got {actual}")]
    StaleTimer {
        /// Current generation.
        expected: u32,
        /// Generation carried by the callback.
        actual: u32,
    },
    /// The callback does not apply to the current phase.
    #[error("unexpected transition timer while {}", .phase.token())]
    UnexpectedTimer {
        /// Phase at the time the callback arrived.
        phase: TransitionPhase,
    },
}

/// Applies a [`TransitionAction`] and returns the scheduling effects it requires.
///
/// `Show` while already entering/entered and `Hide` while already
/// exiting/exited are no-ops.
///
/// # Errors
///
/// Returns [`TransitionError`] for timer callbacks from an older generation or
/// for callbacks the current phase does not expect. The state is left
/// untouched in both cases.
pub fn reduce_transition(
    state: &mut TransitionState,
    action: TransitionAction,
) -> Result<Vec<TransitionEffect>, TransitionError> {
    let mut effects = Vec::new();
    match action {
        TransitionAction::Show => {
            if matches!(state.phase, TransitionPhase::Exited | TransitionPhase::Exiting) {
                let generation = begin(state, TransitionPhase::Entering);
                effects.push(TransitionEffect::CancelTimer);
                effects.push(TransitionEffect::RequestFrame { generation });
                effects.push(TransitionEffect::StartTimer { generation });
            }
        }
        TransitionAction::Hide => {
            if matches!(state.phase, TransitionPhase::Entering | TransitionPhase::Entered) {
                let generation = begin(state, TransitionPhase::Exiting);
                effects.push(TransitionEffect::CancelTimer);
                effects.push(TransitionEffect::StartTimer { generation });
            }
        }
        TransitionAction::FrameElapsed { generation } => {
            check_generation(state, generation)?;
            match state.phase {
                TransitionPhase::Entering => state.active = true,
                phase => return Err(TransitionError::UnexpectedTimer { phase }),
            }
        }
        TransitionAction::TimeoutElapsed { generation } => {
            check_generation(state, generation)?;
            match state.phase {
                TransitionPhase::Entering => {
                    state.phase = TransitionPhase::Entered;
                    state.active = true;
                }
                TransitionPhase::Exiting => {
                    state.phase = TransitionPhase::Exited;
                    state.active = false;
                }
                phase => return Err(TransitionError::UnexpectedTimer { phase }),
            }
        }
    }
    Ok(effects)
}

fn begin(state: &mut TransitionState, phase: TransitionPhase) -> u32 {
    state.phase = phase;
    state.active = false;
    state.generation = state.generation.wrapping_add(1);
    state.generation
}

fn check_generation(state: &TransitionState, generation: u32) -> Result<(), TransitionError> {
    if state.generation == generation {
        Ok(())
    } else {
        Err(TransitionError::StaleTimer {
            expected: state.generation,
            actual: generation,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn apply(state: &mut TransitionState, action: TransitionAction) -> Vec<TransitionEffect> {
        reduce_transition(state, action).expect("transition action")
    }

    fn shown() -> TransitionState {
        let mut state = TransitionState::default();
        apply(&mut state, TransitionAction::Show);
        let generation = state.generation;
        apply(&mut state, TransitionAction::FrameElapsed { generation });
        apply(&mut state, TransitionAction::TimeoutElapsed { generation });
        state
    }

    #[test]
    fn show_from_exited_mounts_and_schedules_frame_and_timer() {
        let mut state = TransitionState::default();
        let effects = apply(&mut state, TransitionAction::Show);

        assert_eq!(state.phase, TransitionPhase::Entering);
        assert!(state.phase.is_mounted());
        assert!(!state.is_visible());
        assert_eq!(state.lifecycle_class(), Some(styles::MODAL_ENTER));
        assert_eq!(
            effects,
            vec![
                TransitionEffect::CancelTimer,
                TransitionEffect::RequestFrame { generation: 1 },
                TransitionEffect::StartTimer { generation: 1 },
            ]
        );
    }

    #[test]
    fn entering_tail_and_entered_share_the_visible_combination() {
        let mut state = TransitionState::default();
        apply(&mut state, TransitionAction::Show);
        apply(&mut state, TransitionAction::FrameElapsed { generation: 1 });

        assert_eq!(state.phase, TransitionPhase::Entering);
        assert!(state.is_visible());
        assert_eq!(state.lifecycle_class(), Some(styles::MODAL_ENTER_ACTIVE));

        apply(&mut state, TransitionAction::TimeoutElapsed { generation: 1 });
        assert_eq!(state.phase, TransitionPhase::Entered);
        assert!(state.is_visible());
        assert_eq!(state.lifecycle_class(), Some(styles::MODAL_ENTER_DONE));
    }

    #[test]
    fn hide_runs_exit_then_unmounts() {
        let mut state = shown();
        let effects = apply(&mut state, TransitionAction::Hide);
        let generation = state.generation;

        assert_eq!(state.phase, TransitionPhase::Exiting);
        assert!(state.phase.is_mounted());
        assert!(!state.is_visible());
        assert_eq!(
            effects,
            vec![
                TransitionEffect::CancelTimer,
                TransitionEffect::StartTimer { generation },
            ]
        );

        apply(&mut state, TransitionAction::TimeoutElapsed { generation });
        assert_eq!(state.phase, TransitionPhase::Exited);
        assert!(!state.phase.is_mounted());
        assert_eq!(state.lifecycle_class(), None);
    }

    #[test]
    fn repeated_show_and_hide_are_no_ops() {
        let mut state = shown();
        assert_eq!(apply(&mut state, TransitionAction::Show), Vec::new());
        assert_eq!(state.phase, TransitionPhase::Entered);

        let mut hidden = TransitionState::default();
        assert_eq!(apply(&mut hidden, TransitionAction::Hide), Vec::new());
        assert_eq!(hidden, TransitionState::default());
    }

    #[test]
    fn stale_timer_from_interrupted_enter_is_rejected() {
        let mut state = TransitionState::default();
        apply(&mut state, TransitionAction::Show);
        let entering_generation = state.generation;
        apply(&mut state, TransitionAction::Hide);
        let before = state;

        let err = reduce_transition(
            &mut state,
            TransitionAction::TimeoutElapsed {
                generation: entering_generation,
            },
        )
        .expect_err("stale timer");

        assert_eq!(
            err,
            TransitionError::StaleTimer {
                expected: before.generation,
                actual: entering_generation,
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn show_during_exit_reenters_without_unmounting() {
        let mut state = shown();
        apply(&mut state, TransitionAction::Hide);
        let effects = apply(&mut state, TransitionAction::Show);

        assert_eq!(state.phase, TransitionPhase::Entering);
        assert!(state.phase.is_mounted());
        assert!(effects.contains(&TransitionEffect::RequestFrame {
            generation: state.generation
        }));
    }

    #[test]
    fn frame_after_enter_completed_is_unexpected() {
        let mut state = shown();
        let generation = state.generation;
        let err = reduce_transition(&mut state, TransitionAction::FrameElapsed { generation })
            .expect_err("unexpected frame");

        assert_eq!(
            err,
            TransitionError::UnexpectedTimer {
                phase: TransitionPhase::Entered
            }
        );
        assert_eq!(err.to_string(), "unexpected transition timer while entered");
    }
}
