//! Pinch gesture interpreter.
//!
//! Wraps a [`TextSurface`] and turns two-finger pinches into font size
//! changes. Each 200px (`step`) of extra finger spread doubles the ratio,
//! each 200px of contraction halves it. The rendered size is
//! `ratio + base_font_size`.

use super::pointer::{ACTION_CANCEL, ACTION_DOWN, ACTION_POINTER_DOWN, ACTION_UP, MotionEvent};
use super::surface::{RenderHints, TextSurface};
use super::touch::ScaleState;
use crate::config::ZoomConfig;

pub struct PinchScaler<S: TextSurface> {
    surface: S,
    state: ScaleState,
    config: ZoomConfig,
}

impl<S: TextSurface> PinchScaler<S> {
    pub fn new(surface: S, config: ZoomConfig) -> Self {
        let state = ScaleState {
            zoom_enabled: config.zoom_enabled,
            ..ScaleState::default()
        };
        Self {
            surface,
            state,
            config,
        }
    }

    pub fn set_zoom_enabled(&mut self, enabled: bool) {
        self.state.zoom_enabled = enabled;
    }

    pub fn zoom_enabled(&self) -> bool {
        self.state.zoom_enabled
    }

    pub fn ratio(&self) -> f32 {
        self.state.ratio
    }

    pub fn state(&self) -> &ScaleState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn rendered_font_size(&self) -> f32 {
        self.state.ratio + self.config.base_font_size
    }

    /// Pushes the current ratio to the surface without waiting for a gesture.
    pub fn sync_font_size(&mut self) {
        let size = self.rendered_font_size();
        self.surface.set_font_size(size);
    }

    /// Feeds one pointer event through the scaler. Always reports the event as handled.
    pub fn handle_touch_event<E: MotionEvent>(&mut self, event: Option<&E>) -> bool {
        let Some(event) = event else {
            return true;
        };

        match event.action() {
            ACTION_DOWN => self.surface.set_render_hints(RenderHints::SCALING),
            ACTION_UP | ACTION_CANCEL => self.surface.set_render_hints(RenderHints::NONE),
            _ => {}
        }

        if self.state.zoom_enabled && event.pointer_count() == 2 {
            let distance = pointer_distance(event);
            if event.action_masked() == ACTION_POINTER_DOWN {
                self.state.base_distance = distance;
                self.state.base_ratio = self.state.ratio;
                log::debug!(
                    "pinch start: distance={}px ratio={}",
                    distance,
                    self.state.ratio
                );
            } else {
                self.apply_distance(distance);
            }
        }

        true
    }

    fn apply_distance(&mut self, distance: i32) {
        let delta = (distance - self.state.base_distance) as f32 / self.config.step;
        let multiplier = 2f64.powf(delta as f64) as f32;
        let raw = self.state.base_ratio * multiplier;
        let ratio = raw.max(self.config.min_ratio).min(self.config.max_ratio);
        if ratio != raw {
            log::trace!("ratio {} clamped to {}", raw, ratio);
        }
        self.state.ratio = ratio;
        let size = self.rendered_font_size();
        self.surface.set_font_size(size);
    }
}

/// Distance between pointers 0 and 1, truncated to whole pixels.
pub fn pointer_distance<E: MotionEvent>(event: &E) -> i32 {
    let dx = event.x(0) - event.x(1);
    let dy = event.y(0) - event.y(1);
    let magnitude = (dx * dx + dy * dy) as f64;
    magnitude.sqrt() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::pointer::{ACTION_MOVE, ACTION_POINTER_UP, Pointer, PointerEvent};

    #[derive(Default)]
    struct RecordingSurface {
        font_size: f32,
        hints: RenderHints,
        font_writes: usize,
    }

    impl TextSurface for RecordingSurface {
        fn font_size(&self) -> f32 {
            self.font_size
        }
        fn set_font_size(&mut self, size: f32) {
            self.font_size = size;
            self.font_writes += 1;
        }
        fn set_render_hints(&mut self, hints: RenderHints) {
            self.hints = hints;
        }
    }

    fn scaler() -> PinchScaler<RecordingSurface> {
        PinchScaler::new(RecordingSurface::default(), ZoomConfig::default())
    }

    // Two pointers on a horizontal line, `distance` pixels apart.
    fn two(action: u32, distance: f32) -> PointerEvent {
        PointerEvent::new(
            action,
            vec![Pointer { x: 10.0, y: 50.0 }, Pointer { x: 10.0 + distance, y: 50.0 }],
        )
    }

    fn one(action: u32, x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(action, vec![Pointer { x, y }])
    }

    fn pointer_down(distance: f32) -> PointerEvent {
        two(PointerEvent::indexed_action(ACTION_POINTER_DOWN, 1), distance)
    }

    #[test]
    fn starts_at_unit_ratio() {
        let mut s = scaler();
        assert_eq!(s.ratio(), 1.0);
        assert_eq!(s.state().base_distance, 0);
        assert_eq!(s.state().base_ratio, 0.0);
        assert_eq!(s.rendered_font_size(), 14.0);
        s.sync_font_size();
        assert_eq!(s.surface().font_size(), 14.0);
    }

    #[test]
    fn gesture_start_snapshots_without_resizing() {
        let mut s = scaler();
        assert!(s.handle_touch_event(Some(&pointer_down(100.0))));
        assert_eq!(s.state().base_distance, 100);
        assert_eq!(s.state().base_ratio, 1.0);
        assert_eq!(s.ratio(), 1.0);
        assert_eq!(s.surface().font_writes, 0);
    }

    #[test]
    fn spreading_one_step_doubles_ratio() {
        let mut s = scaler();
        s.handle_touch_event(Some(&pointer_down(100.0)));
        s.handle_touch_event(Some(&two(ACTION_MOVE, 300.0)));
        assert_eq!(s.ratio(), 2.0);
        assert_eq!(s.surface().font_size(), 15.0);
    }

    #[test]
    fn contracting_one_step_halves_ratio() {
        let mut s = scaler();
        s.handle_touch_event(Some(&pointer_down(200.0)));
        s.handle_touch_event(Some(&two(ACTION_MOVE, 0.0)));
        assert_eq!(s.ratio(), 0.5);
        assert_eq!(s.surface().font_size(), 13.5);
    }

    #[test]
    fn extreme_zoom_clamps_to_bounds() {
        let mut s = scaler();
        s.handle_touch_event(Some(&pointer_down(0.0)));
        s.handle_touch_event(Some(&two(ACTION_MOVE, 2400.0)));
        assert_eq!(s.ratio(), 1024.0);
        assert_eq!(s.surface().font_size(), 1037.0);

        s.handle_touch_event(Some(&pointer_down(5000.0)));
        s.handle_touch_event(Some(&two(ACTION_MOVE, 0.0)));
        assert_eq!(s.ratio(), 0.1);
    }

    #[test]
    fn ratio_stays_in_bounds_over_many_gestures() {
        let mut s = scaler();
        let distances = [0.0, 37.0, 910.0, 5000.0, 3.0, 260.0, 1999.0, 0.0, 4411.0];
        for (i, start) in distances.iter().enumerate() {
            s.handle_touch_event(Some(&pointer_down(*start)));
            for end in distances.iter().skip(i) {
                s.handle_touch_event(Some(&two(ACTION_MOVE, *end)));
                assert!(s.ratio() >= 0.1 && s.ratio() <= 1024.0, "ratio {}", s.ratio());
            }
        }
    }

    #[test]
    fn disabled_zoom_consumes_without_scaling() {
        let mut s = scaler();
        s.set_zoom_enabled(false);
        assert!(!s.zoom_enabled());
        assert!(s.handle_touch_event(Some(&pointer_down(100.0))));
        assert!(s.handle_touch_event(Some(&two(ACTION_MOVE, 900.0))));
        assert_eq!(s.ratio(), 1.0);
        assert_eq!(s.state().base_distance, 0);
        assert_eq!(s.surface().font_writes, 0);
    }

    #[test]
    fn single_pointer_never_touches_scale_state() {
        for enabled in [true, false] {
            let mut s = scaler();
            s.set_zoom_enabled(enabled);
            s.handle_touch_event(Some(&pointer_down(120.0)));
            s.handle_touch_event(Some(&two(ACTION_MOVE, 320.0)));
            let before = s.state().clone();
            s.handle_touch_event(Some(&one(ACTION_MOVE, 500.0, 500.0)));
            s.handle_touch_event(Some(&one(ACTION_MOVE, 0.0, 0.0)));
            assert_eq!(s.state(), &before);
        }
    }

    #[test]
    fn render_hints_follow_down_and_up_even_when_disabled() {
        let mut s = scaler();
        s.set_zoom_enabled(false);
        s.handle_touch_event(Some(&one(ACTION_DOWN, 1.0, 1.0)));
        assert_eq!(s.surface().hints, RenderHints::SCALING);
        s.handle_touch_event(Some(&one(ACTION_UP, 1.0, 1.0)));
        assert_eq!(s.surface().hints, RenderHints::NONE);

        s.handle_touch_event(Some(&one(ACTION_DOWN, 1.0, 1.0)));
        s.handle_touch_event(Some(&one(ACTION_CANCEL, 1.0, 1.0)));
        assert_eq!(s.surface().hints, RenderHints::NONE);
    }

    #[test]
    fn missing_event_is_handled_without_effect() {
        let mut s = scaler();
        assert!(s.handle_touch_event::<PointerEvent>(None));
        assert_eq!(s.state(), &ScaleState::default());
        assert_eq!(s.surface().hints, RenderHints::NONE);
    }

    #[test]
    fn pointer_up_with_two_pointers_still_rescales() {
        let mut s = scaler();
        s.handle_touch_event(Some(&pointer_down(100.0)));
        s.handle_touch_event(Some(&two(
            PointerEvent::indexed_action(ACTION_POINTER_UP, 1),
            300.0,
        )));
        assert_eq!(s.ratio(), 2.0);
    }

    #[test]
    fn resuming_without_pointer_down_reuses_stale_base() {
        let mut s = scaler();
        s.handle_touch_event(Some(&pointer_down(100.0)));
        s.handle_touch_event(Some(&two(ACTION_MOVE, 300.0)));
        s.handle_touch_event(Some(&one(ACTION_MOVE, 0.0, 0.0)));
        // Second finger back down but reported as a plain move.
        s.handle_touch_event(Some(&two(ACTION_MOVE, 100.0)));
        assert_eq!(s.state().base_distance, 100);
        assert_eq!(s.ratio(), 1.0);
    }

    #[test]
    fn distance_truncates_to_whole_pixels() {
        let ev = PointerEvent::new(
            ACTION_MOVE,
            vec![Pointer { x: 0.0, y: 0.0 }, Pointer { x: 3.0, y: 4.9 }],
        );
        assert_eq!(pointer_distance(&ev), 5);
    }

    #[test]
    fn custom_step_changes_doubling_distance() {
        let cfg = ZoomConfig {
            step: 50.0,
            ..ZoomConfig::default()
        };
        let mut s = PinchScaler::new(RecordingSurface::default(), cfg);
        s.handle_touch_event(Some(&pointer_down(100.0)));
        s.handle_touch_event(Some(&two(ACTION_MOVE, 200.0)));
        assert_eq!(s.ratio(), 4.0);
        assert_eq!(s.into_surface().font_size, 17.0);
    }
}
