// Scale state tracked across pinch gestures
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleState {
    /// Current multiplier relative to the base font size. Kept within the configured bounds.
    pub ratio: f32,
    /// Pixel distance between the two pointers when the current gesture started.
    pub base_distance: i32,
    /// `ratio` at the moment the current gesture started.
    pub base_ratio: f32,
    pub zoom_enabled: bool,
}
impl Default for ScaleState {
    fn default() -> Self {
        Self {
            ratio: 1.0,
            base_distance: 0,
            base_ratio: 0.0,
            zoom_enabled: true,
        }
    }
}
