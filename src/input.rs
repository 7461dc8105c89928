// DOM touch events -> pointer events with host-style action codes
use web_sys::{TouchEvent, TouchList};

use crate::state::pointer::{
    ACTION_CANCEL, ACTION_DOWN, ACTION_MOVE, ACTION_POINTER_DOWN, ACTION_POINTER_UP, ACTION_UP,
    Pointer, PointerEvent,
};

pub const TOUCH_EVENTS: [&str; 4] = ["touchstart", "touchmove", "touchend", "touchcancel"];

fn collect(list: &TouchList) -> Vec<Pointer> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| Pointer {
            x: t.client_x() as f32,
            y: t.client_y() as f32,
        })
        .collect()
}

/// Translates a touch event. Returns `None` for event types we do not track.
pub fn pointer_event_from_touch(e: &TouchEvent) -> Option<PointerEvent> {
    // Only fingers that started on this element count as its pointers.
    pointer_event_from_lists(
        &e.type_(),
        collect(&e.target_touches()),
        collect(&e.changed_touches()),
    )
}

/// Maps a touch event kind plus its active and changed touches to a pointer event.
///
/// `active` holds the touches still down on the element, `changed` the ones this
/// event is about.
pub fn pointer_event_from_lists(
    kind: &str,
    mut active: Vec<Pointer>,
    changed: Vec<Pointer>,
) -> Option<PointerEvent> {
    let count = active.len();
    let action = match kind {
        "touchstart" => {
            if count <= 1 {
                ACTION_DOWN
            } else {
                PointerEvent::indexed_action(ACTION_POINTER_DOWN, count - 1)
            }
        }
        "touchmove" => ACTION_MOVE,
        "touchend" => {
            // The host still counts the lifting pointer on its own up event, one
            // pointer per event, so fingers lifted in the same frame report as one.
            active.extend(changed.into_iter().take(1));
            if count == 0 {
                ACTION_UP
            } else {
                PointerEvent::indexed_action(ACTION_POINTER_UP, count)
            }
        }
        "touchcancel" => {
            active.extend(changed);
            ACTION_CANCEL
        }
        _ => return None,
    };
    Some(PointerEvent::new(action, active))
}
