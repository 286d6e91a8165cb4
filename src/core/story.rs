//! Scroll-progress mapping for the lake story narrative
//!
//! The story container is much taller than the viewport and its content is
//! pinned while the user scrolls through it. How far the container has
//! travelled through the viewport is turned into:
//! - a continuous progress fraction in `[0, 1]`
//! - one of five discrete [`StoryPhase`]s
//!
//! # Example
//!
//! ```
//! use namma_lakes::core::story::{ContainerGeometry, StoryPhase, story_progress};
//!
//! let geometry = ContainerGeometry::new(-200.0, 400.0, 1000.0, 800.0);
//! let progress = story_progress(geometry);
//!
//! assert_eq!(progress, 1.0);
//! assert_eq!(StoryPhase::from_progress(progress), StoryPhase::Action);
//! ```

/// Tuning factor applied to the raw travel ratio so the last phase is reached
/// before the container leaves the viewport.
pub const STORY_PROGRESS_SCALE: f64 = 1.5;

/// Number of phases in the narrative
pub const STORY_PHASE_COUNT: usize = 5;

/// Upper progress bound (exclusive) of every phase except the last one
const PHASE_THRESHOLDS: [f64; STORY_PHASE_COUNT - 1] = [0.2, 0.4, 0.6, 0.8];

/// Bounding rectangle of the story container relative to the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerGeometry {
    pub top: f64,
    pub bottom: f64,
    pub height: f64,
    pub viewport_height: f64,
}

impl ContainerGeometry {
    pub fn new(top: f64, bottom: f64, height: f64, viewport_height: f64) -> Self {
        Self {
            top,
            bottom,
            height,
            viewport_height,
        }
    }

    /// Whether the container has scrolled completely above the viewport
    pub fn is_scrolled_past(&self) -> bool {
        self.bottom <= 0.0
    }
}

/// Compute how far the container has passed through the viewport.
///
/// Always returns a value in `[0, 1]`. Degenerate geometry (zero-sized
/// container and viewport) maps to `0.0`.
pub fn story_progress(geometry: ContainerGeometry) -> f64 {
    if geometry.is_scrolled_past() {
        return 1.0;
    }

    let travel = geometry.height + geometry.viewport_height;
    let raw = (1.0 - geometry.bottom / travel) * STORY_PROGRESS_SCALE;

    if raw.is_finite() {
        raw.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Discrete narrative phase selected by scroll progress
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum StoryPhase {
    /// The city and its historic lakes
    #[default]
    Origins,
    /// Sewage, encroachment and algal blooms
    Pressure,
    /// Sensors go into the water
    Sensing,
    /// Readings become open data
    Insight,
    /// Communities act on alerts
    Action,
}

impl StoryPhase {
    pub const ALL: [StoryPhase; STORY_PHASE_COUNT] = [
        StoryPhase::Origins,
        StoryPhase::Pressure,
        StoryPhase::Sensing,
        StoryPhase::Insight,
        StoryPhase::Action,
    ];

    /// Map a progress fraction to its phase bucket. No hysteresis.
    pub fn from_progress(progress: f64) -> Self {
        PHASE_THRESHOLDS
            .iter()
            .position(|&upper| progress < upper)
            .map(Self::from_index)
            .unwrap_or(StoryPhase::Action)
    }

    /// Phase for an index, saturating at the last phase
    pub fn from_index(index: usize) -> Self {
        Self::ALL
            .get(index)
            .copied()
            .unwrap_or(StoryPhase::Action)
    }

    pub fn index(&self) -> usize {
        match self {
            StoryPhase::Origins => 0,
            StoryPhase::Pressure => 1,
            StoryPhase::Sensing => 2,
            StoryPhase::Insight => 3,
            StoryPhase::Action => 4,
        }
    }
}

/// Progress and phase derived from one geometry reading
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StoryState {
    pub progress: f64,
    pub phase: StoryPhase,
}

impl StoryState {
    pub fn from_geometry(geometry: ContainerGeometry) -> Self {
        let progress = story_progress(geometry);
        Self {
            progress,
            phase: StoryPhase::from_progress(progress),
        }
    }

    /// Progress as a CSS percentage, e.g. for a progress bar width
    pub fn percent(&self) -> f64 {
        self.progress * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(top: f64, bottom: f64, height: f64, viewport: f64) -> ContainerGeometry {
        ContainerGeometry::new(top, bottom, height, viewport)
    }

    #[test]
    fn test_progress_is_one_once_scrolled_past() {
        for bottom in [0.0, -0.5, -100.0, -10_000.0] {
            let g = geometry(bottom - 1000.0, bottom, 1000.0, 800.0);
            assert_eq!(story_progress(g), 1.0, "bottom = {bottom}");
        }
    }

    #[test]
    fn test_progress_scenario_clamps_to_one() {
        // (1 - 400 / 1800) * 1.5 ≈ 1.17
        let g = geometry(-200.0, 400.0, 1000.0, 800.0);
        assert_eq!(story_progress(g), 1.0);
        assert_eq!(StoryState::from_geometry(g).phase, StoryPhase::Action);
    }

    #[test]
    fn test_progress_before_container_enters() {
        // Container entirely below the viewport
        let g = geometry(900.0, 4900.0, 4000.0, 800.0);
        assert_eq!(story_progress(g), 0.0);
    }

    #[test]
    fn test_progress_midway() {
        // (1 - 3200 / 4800) * 1.5 = 0.5
        let g = geometry(-800.0, 3200.0, 4000.0, 800.0);
        assert!((story_progress(g) - 0.5).abs() < 1e-9);
        assert_eq!(StoryPhase::from_progress(story_progress(g)), StoryPhase::Sensing);
    }

    #[test]
    fn test_progress_always_in_unit_range() {
        let viewports = [320.0, 800.0, 1440.0];
        let heights = [200.0, 1000.0, 5000.0];
        for &viewport in &viewports {
            for &height in &heights {
                let mut top = -2.0 * height;
                while top < 2.0 * viewport {
                    let g = geometry(top, top + height, height, viewport);
                    let p = story_progress(g);
                    assert!((0.0..=1.0).contains(&p), "progress {p} out of range for {g:?}");
                    top += 37.0;
                }
            }
        }
    }

    #[test]
    fn test_progress_degenerate_geometry() {
        let g = geometry(0.0, 0.0, 0.0, 0.0);
        // bottom <= 0 wins
        assert_eq!(story_progress(g), 1.0);

        let g = geometry(10.0, 10.0, 0.0, 0.0);
        assert_eq!(story_progress(g), 0.0);
    }

    #[test]
    fn test_progress_is_monotonic_while_scrolling_down() {
        let height = 3000.0;
        let viewport = 900.0;
        let mut last = 0.0;
        let mut top = viewport;
        while top > -height - 100.0 {
            let p = story_progress(geometry(top, top + height, height, viewport));
            assert!(p >= last);
            last = p;
            top -= 50.0;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn test_phase_examples() {
        assert_eq!(StoryPhase::from_progress(0.15), StoryPhase::Origins);
        assert_eq!(StoryPhase::from_progress(0.45), StoryPhase::Sensing);
        assert_eq!(StoryPhase::from_progress(0.95), StoryPhase::Action);
    }

    #[test]
    fn test_phase_boundaries() {
        assert_eq!(StoryPhase::from_progress(0.0), StoryPhase::Origins);
        assert_eq!(StoryPhase::from_progress(0.1999), StoryPhase::Origins);
        assert_eq!(StoryPhase::from_progress(0.2), StoryPhase::Pressure);
        assert_eq!(StoryPhase::from_progress(0.4), StoryPhase::Sensing);
        assert_eq!(StoryPhase::from_progress(0.6), StoryPhase::Insight);
        assert_eq!(StoryPhase::from_progress(0.7999), StoryPhase::Insight);
        assert_eq!(StoryPhase::from_progress(0.8), StoryPhase::Action);
        assert_eq!(StoryPhase::from_progress(1.0), StoryPhase::Action);
    }

    #[test]
    fn test_phase_index_roundtrip() {
        for (i, phase) in StoryPhase::ALL.iter().enumerate() {
            assert_eq!(phase.index(), i);
            assert_eq!(StoryPhase::from_index(i), *phase);
        }
        assert_eq!(StoryPhase::from_index(42), StoryPhase::Action);
    }

    #[test]
    fn test_phase_index_bounded() {
        let mut p = 0.0;
        while p <= 1.0 {
            assert!(StoryPhase::from_progress(p).index() < STORY_PHASE_COUNT);
            p += 0.01;
        }
    }

    #[test]
    fn test_story_state_percent() {
        let state = StoryState {
            progress: 0.25,
            phase: StoryPhase::Pressure,
        };
        assert_eq!(state.percent(), 25.0);
        assert_eq!(StoryState::default().phase, StoryPhase::Origins);
    }
}
