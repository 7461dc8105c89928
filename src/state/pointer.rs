// Pointer event model shared by the touch adapter and the pinch scaler.
//
// Action codes follow the Android MotionEvent layout: the low byte carries the
// action kind, the next byte the index of the pointer that triggered it.

pub const ACTION_DOWN: u32 = 0;
pub const ACTION_UP: u32 = 1;
pub const ACTION_MOVE: u32 = 2;
pub const ACTION_CANCEL: u32 = 3;
pub const ACTION_POINTER_DOWN: u32 = 5;
pub const ACTION_POINTER_UP: u32 = 6;
pub const ACTION_MASK: u32 = 0xff;
pub const ACTION_POINTER_INDEX_SHIFT: u32 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerAction {
    Down,
    Up,
    Move,
    Cancel,
    PointerDown,
    PointerUp,
    Other(u32),
}

impl PointerAction {
    /// Decodes an action code, ignoring the pointer index bits.
    pub fn from_code(code: u32) -> Self {
        match code & ACTION_MASK {
            ACTION_DOWN => PointerAction::Down,
            ACTION_UP => PointerAction::Up,
            ACTION_MOVE => PointerAction::Move,
            ACTION_CANCEL => PointerAction::Cancel,
            ACTION_POINTER_DOWN => PointerAction::PointerDown,
            ACTION_POINTER_UP => PointerAction::PointerUp,
            other => PointerAction::Other(other),
        }
    }
}

/// Anything that looks like a host motion event.
pub trait MotionEvent {
    /// Raw action code, pointer index bits included.
    fn action(&self) -> u32;
    fn pointer_count(&self) -> usize;
    fn x(&self, index: usize) -> f32;
    fn y(&self, index: usize) -> f32;

    fn action_masked(&self) -> u32 {
        self.action() & ACTION_MASK
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub action: u32,
    pub pointers: Vec<Pointer>,
}

impl PointerEvent {
    pub fn new(action: u32, pointers: Vec<Pointer>) -> Self {
        Self { action, pointers }
    }

    /// Builds a `POINTER_DOWN`/`POINTER_UP` style code for the given pointer slot.
    pub fn indexed_action(kind: u32, index: usize) -> u32 {
        (kind & ACTION_MASK) | ((index as u32) << ACTION_POINTER_INDEX_SHIFT)
    }
}

impl MotionEvent for PointerEvent {
    fn action(&self) -> u32 {
        self.action
    }

    fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    fn x(&self, index: usize) -> f32 {
        self.pointers.get(index).map(|p| p.x).unwrap_or(0.0)
    }

    fn y(&self, index: usize) -> f32 {
        self.pointers.get(index).map(|p| p.y).unwrap_or(0.0)
    }
}
