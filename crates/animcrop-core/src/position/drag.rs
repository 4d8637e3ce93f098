//! Drag gesture state machine.
//!
//! A drag is modelled as a value ([`DragState`]) that is fed pointer events
//! and returns the next state together with the resulting crop position.
//! The transitions are pure, so a whole gesture can be replayed in a test
//! without a browser.
//!
//! # States
//!
//! ```text
//!            Press                 Move (offsets updated)
//!   Idle ───────────► Dragging ◄──────────┐
//!    ▲  ◄──────────── │   │ └─────────────┘
//!    │     Release    │   └── Press (re-baselined)
//!    └── Move / Release are no-ops while Idle
//! ```

use super::offset::{Offset, Point};
use serde::{Deserialize, Serialize};

/// The two offsets that are always kept in step: the on-screen preview and
/// the scaled generation-space position used for export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropPosition {
    pub preview: Offset,
    pub generation: Offset,
}

impl CropPosition {
    pub fn new(preview: Offset, generation: Offset) -> Self {
        Self {
            preview,
            generation,
        }
    }
}

/// Baselines captured when a press starts a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub pointer_start: Point,
    pub preview_baseline: Offset,
    pub gen_baseline: Offset,
}

impl DragSession {
    /// Start a session at `pointer`, taking the current position as baseline.
    pub fn begin(pointer: Point, position: CropPosition) -> Self {
        Self {
            pointer_start: pointer,
            preview_baseline: position.preview,
            gen_baseline: position.generation,
        }
    }

    /// Position for the pointer at `pointer`.
    ///
    /// Always computed from the baselines, never from the previous move, so
    /// repeated calls are idempotent and no rounding drift builds up.
    pub fn position_at(&self, pointer: Point, gen_scale: i32) -> CropPosition {
        let delta = pointer - self.pointer_start;
        CropPosition {
            preview: self.preview_baseline + delta,
            generation: self.gen_baseline + delta.scaled(gen_scale),
        }
    }
}

/// Raw gesture events as delivered by the pointer listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Press(Point),
    Move(Point),
    Release,
}

/// Whether the host should suppress the platform's default handling
/// (native image drag, text selection) for the event it just delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The event drove the gesture; call `preventDefault`.
    Handled,
    /// The event was ignored; leave default handling alone.
    Ignored,
}

impl Disposition {
    pub fn prevents_default(self) -> bool {
        matches!(self, Disposition::Handled)
    }
}

/// Drag state. `Idle` is the initial state and there is no terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Result of feeding one event into a [`DragState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: DragState,
    pub position: CropPosition,
    pub disposition: Disposition,
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    /// Active session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session),
        }
    }

    /// Apply `event` to this state given the current `position`.
    pub fn transition(self, event: PointerEvent, position: CropPosition, gen_scale: i32) -> Transition {
        match (self, event) {
            // A press always (re)starts, even mid-drag.
            (_, PointerEvent::Press(pointer)) => Transition {
                state: DragState::Dragging(DragSession::begin(pointer, position)),
                position,
                disposition: Disposition::Handled,
            },
            (DragState::Dragging(session), PointerEvent::Move(pointer)) => Transition {
                state: self,
                position: session.position_at(pointer, gen_scale),
                disposition: Disposition::Handled,
            },
            (DragState::Idle, PointerEvent::Move(_)) => Transition {
                state: DragState::Idle,
                position,
                disposition: Disposition::Ignored,
            },
            // Last computed offsets become the resting position.
            (_, PointerEvent::Release) => Transition {
                state: DragState::Idle,
                position,
                disposition: Disposition::Ignored,
            },
        }
    }
}
