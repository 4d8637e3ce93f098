//! Stateful drag engine used by the UI bindings.

use super::drag::{CropPosition, Disposition, DragState, PointerEvent};
use super::offset::{Offset, Point};
use crate::export::DisplayConstants;

/// Tracks the crop position across drag gestures.
///
/// Holds the current [`CropPosition`] and the [`DragState`] and routes every
/// call through [`DragState::transition`]. At most one drag is active.
#[derive(Debug, Clone)]
pub struct PositionEngine {
    gen_scale: i32,
    position: CropPosition,
    state: DragState,
}

impl Default for PositionEngine {
    fn default() -> Self {
        Self::new(DisplayConstants::default().gen_scale)
    }
}

impl PositionEngine {
    /// Create an idle engine at the origin with the given generation scale.
    pub fn new(gen_scale: i32) -> Self {
        Self {
            gen_scale,
            position: CropPosition::default(),
            state: DragState::Idle,
        }
    }

    pub fn gen_scale(&self) -> i32 {
        self.gen_scale
    }

    pub fn position(&self) -> CropPosition {
        self.position
    }

    pub fn preview_offset(&self) -> Offset {
        self.position.preview
    }

    pub fn gen_offset(&self) -> Offset {
        self.position.generation
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Begin (or restart) a drag with the pointer at `(x, y)`.
    ///
    /// The returned disposition is always [`Disposition::Handled`]: the
    /// host must suppress native image dragging for the press.
    pub fn start_drag(&mut self, x: i32, y: i32) -> Disposition {
        let disposition = self.apply(PointerEvent::Press(Point::new(x, y)));
        log::debug!(
            "drag started at ({x}, {y}) from preview {} / generation {}",
            self.position.preview,
            self.position.generation
        );
        disposition
    }

    /// Follow the pointer to `(x, y)`; returns the resulting offsets.
    ///
    /// Does nothing while no drag is active.
    pub fn on_pointer_move(&mut self, x: i32, y: i32) -> CropPosition {
        self.apply(PointerEvent::Move(Point::new(x, y)));
        self.position
    }

    /// Like [`on_pointer_move`](Self::on_pointer_move) but reports whether
    /// the host should suppress default handling of the move event.
    pub fn pointer_moved(&mut self, x: i32, y: i32) -> Disposition {
        let disposition = self.apply(PointerEvent::Move(Point::new(x, y)));
        log::trace!("pointer at ({x}, {y}): {disposition:?}");
        disposition
    }

    /// End the active drag. The current offsets become the resting position.
    pub fn end_drag(&mut self) {
        if self.is_dragging() {
            log::debug!(
                "drag ended at preview {} / generation {}",
                self.position.preview,
                self.position.generation
            );
        }
        self.apply(PointerEvent::Release);
    }

    /// Replace the resting preview offset. Ignored during a drag.
    pub fn set_preview_offset(&mut self, offset: Offset) {
        if !self.is_dragging() {
            self.position.preview = offset;
        }
    }

    /// Replace the resting generation offset. Ignored during a drag.
    pub fn set_gen_offset(&mut self, offset: Offset) {
        if !self.is_dragging() {
            self.position.generation = offset;
        }
    }

    /// Back to the origin, idle. Used when a new image is selected.
    pub fn reset(&mut self) {
        self.position = CropPosition::default();
        self.state = DragState::Idle;
    }

    fn apply(&mut self, event: PointerEvent) -> Disposition {
        let transition = self.state.transition(event, self.position, self.gen_scale);
        self.state = transition.state;
        self.position = transition.position;
        transition.disposition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_engine() {
        let engine = PositionEngine::default();
        assert_eq!(engine.gen_scale(), 2);
        assert!(!engine.is_dragging());
        assert_eq!(engine.preview_offset().to_string(), "0px 0px");
        assert_eq!(engine.gen_offset().to_string(), "0px 0px");
    }

    #[test]
    fn test_drag_scenario() {
        let mut engine = PositionEngine::default();
        assert!(engine.start_drag(100, 100).prevents_default());
        let pos = engine.on_pointer_move(130, 115);
        engine.end_drag();

        assert_eq!(pos.preview.to_string(), "30px 15px");
        assert_eq!(pos.generation.to_string(), "60px 30px");
        assert!(!engine.is_dragging());
        assert_eq!(engine.position(), pos);
    }

    #[test]
    fn test_move_without_drag_is_noop() {
        let mut engine = PositionEngine::default();
        let pos = engine.on_pointer_move(40, 40);
        assert_eq!(pos, CropPosition::default());
        assert_eq!(engine.pointer_moved(80, 80), Disposition::Ignored);
    }

    #[test]
    fn test_second_drag_rebaselines_from_resting_offset() {
        let mut engine = PositionEngine::default();
        engine.start_drag(0, 0);
        engine.on_pointer_move(10, 20);
        engine.end_drag();

        engine.start_drag(200, 200);
        let pos = engine.on_pointer_move(205, 190);
        assert_eq!(pos.preview, Offset::new(15, 10));
        assert_eq!(pos.generation, Offset::new(30, 20));
    }

    #[test]
    fn test_end_drag_twice_is_harmless() {
        let mut engine = PositionEngine::default();
        engine.start_drag(1, 1);
        engine.on_pointer_move(2, 3);
        engine.end_drag();
        engine.end_drag();
        assert_eq!(engine.preview_offset(), Offset::new(1, 2));
    }

    #[test]
    fn test_custom_gen_scale() {
        let mut engine = PositionEngine::new(4);
        engine.start_drag(0, 0);
        let pos = engine.on_pointer_move(-3, 2);
        assert_eq!(pos.generation, Offset::new(-12, 8));
    }

    #[test]
    fn test_set_offsets_only_while_idle() {
        let mut engine = PositionEngine::default();
        engine.set_preview_offset(Offset::new(7, 7));
        engine.set_gen_offset(Offset::new(14, 14));

        engine.start_drag(0, 0);
        engine.set_preview_offset(Offset::new(99, 99));
        assert_eq!(engine.preview_offset(), Offset::new(7, 7));

        let pos = engine.on_pointer_move(1, 1);
        assert_eq!(pos.preview, Offset::new(8, 8));
        assert_eq!(pos.generation, Offset::new(16, 16));
    }

    #[test]
    fn test_move_near_i32_bounds_saturates() {
        let mut engine = PositionEngine::default();
        engine.set_gen_offset("2147483000px 0px".parse().unwrap());
        engine.start_drag(0, 0);
        let pos = engine.on_pointer_move(1000, 0);
        assert_eq!(pos.generation, Offset::new(i32::MAX, 0));
        assert_eq!(pos.preview, Offset::new(1000, 0));

        let mut engine = PositionEngine::new(i32::MAX);
        engine.start_drag(0, 0);
        let pos = engine.on_pointer_move(-5, 3);
        assert_eq!(pos.generation, Offset::new(i32::MIN, i32::MAX));
    }

    #[test]
    fn test_reset() {
        let mut engine = PositionEngine::default();
        engine.start_drag(0, 0);
        engine.on_pointer_move(9, 9);
        engine.reset();
        assert!(!engine.is_dragging());
        assert_eq!(engine.position(), CropPosition::default());
    }
}
