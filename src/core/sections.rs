//! Page sections tracked by the side navigation rail
//!
//! Sections are listed in a fixed priority order. When several of them are
//! in view at once, the first one in that order wins; when none is, the
//! previously active section stays highlighted.

/// Number of tracked sections
pub const SECTION_COUNT: usize = 5;

/// Visibility ratio the hero needs before it counts as in view
pub const HERO_THRESHOLD: f64 = 0.5;

/// Visibility ratio for every other section
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Named page region with a marker in the side rail
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PageSection {
    #[default]
    Hero,
    Mission,
    Features,
    Story,
    Contact,
}

impl PageSection {
    /// All sections in priority order
    pub const ALL: [PageSection; SECTION_COUNT] = [
        PageSection::Hero,
        PageSection::Mission,
        PageSection::Features,
        PageSection::Story,
        PageSection::Contact,
    ];

    pub fn index(&self) -> usize {
        match self {
            PageSection::Hero => 0,
            PageSection::Mission => 1,
            PageSection::Features => 2,
            PageSection::Story => 3,
            PageSection::Contact => 4,
        }
    }

    /// DOM id of the section element
    pub fn anchor_id(&self) -> &'static str {
        match self {
            PageSection::Hero => "hero",
            PageSection::Mission => "mission",
            PageSection::Features => "features",
            PageSection::Story => "story",
            PageSection::Contact => "contact",
        }
    }

    pub fn from_anchor_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor_id() == id)
    }

    /// Label shown next to the rail marker
    pub fn label(&self) -> &'static str {
        match self {
            PageSection::Hero => "Home",
            PageSection::Mission => "Mission",
            PageSection::Features => "Features",
            PageSection::Story => "Story",
            PageSection::Contact => "Get Involved",
        }
    }

    /// Fraction of the section that must be visible to count as in view
    pub fn threshold(&self) -> f64 {
        match self {
            PageSection::Hero => HERO_THRESHOLD,
            _ => DEFAULT_THRESHOLD,
        }
    }
}

/// Decide whether a region satisfies its in-view threshold.
///
/// The visible height is compared against the smaller of the region and the
/// viewport, so regions taller than the screen (the story) can still qualify.
pub fn is_in_view(
    intersection_height: f64,
    region_height: f64,
    viewport_height: f64,
    threshold: f64,
) -> bool {
    let reference = region_height.min(viewport_height);
    if reference <= 0.0 || intersection_height <= 0.0 {
        return false;
    }
    intersection_height / reference >= threshold
}

/// One in-view flag per section
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SectionVisibility {
    flags: [bool; SECTION_COUNT],
}

impl SectionVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, section: PageSection, in_view: bool) {
        self.flags[section.index()] = in_view;
    }

    pub fn is_visible(&self, section: PageSection) -> bool {
        self.flags[section.index()]
    }

    /// First visible section in priority order
    pub fn first_visible(&self) -> Option<PageSection> {
        PageSection::ALL
            .into_iter()
            .find(|section| self.is_visible(*section))
    }
}

/// Pick the active section, keeping `previous` when nothing is in view
pub fn resolve_active(previous: PageSection, visibility: &SectionVisibility) -> PageSection {
    visibility.first_visible().unwrap_or(previous)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        let order: Vec<usize> = PageSection::ALL.iter().map(|s| s.index()).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
        assert_eq!(PageSection::default(), PageSection::Hero);
    }

    #[test]
    fn test_anchor_ids_roundtrip() {
        for section in PageSection::ALL {
            assert_eq!(PageSection::from_anchor_id(section.anchor_id()), Some(section));
        }
        assert_eq!(PageSection::from_anchor_id("pricing"), None);
    }

    #[test]
    fn test_thresholds_within_range() {
        for section in PageSection::ALL {
            let t = section.threshold();
            assert!((0.3..=0.5).contains(&t));
        }
        assert_eq!(PageSection::Hero.threshold(), 0.5);
        assert_eq!(PageSection::Features.threshold(), 0.3);
    }

    #[test]
    fn test_is_in_view_short_region() {
        // 600px region, 300px visible = 50%
        assert!(is_in_view(300.0, 600.0, 800.0, 0.5));
        assert!(!is_in_view(170.0, 600.0, 800.0, 0.3));
        assert!(is_in_view(180.0, 600.0, 800.0, 0.3));
    }

    #[test]
    fn test_is_in_view_tall_region_uses_viewport() {
        // Story is 4000px tall; a full viewport of it is 100% of what can be seen
        assert!(is_in_view(800.0, 4000.0, 800.0, 0.3));
        assert!(is_in_view(240.0, 4000.0, 800.0, 0.3));
        assert!(!is_in_view(200.0, 4000.0, 800.0, 0.3));
    }

    #[test]
    fn test_is_in_view_degenerate() {
        assert!(!is_in_view(0.0, 600.0, 800.0, 0.3));
        assert!(!is_in_view(100.0, 0.0, 800.0, 0.3));
        assert!(!is_in_view(100.0, 600.0, 0.0, 0.3));
    }

    #[test]
    fn test_resolve_first_true_flag_wins() {
        let mut vis = SectionVisibility::new();
        vis.set(PageSection::Story, true);
        vis.set(PageSection::Features, true);
        assert_eq!(resolve_active(PageSection::Hero, &vis), PageSection::Features);

        vis.set(PageSection::Hero, true);
        assert_eq!(resolve_active(PageSection::Contact, &vis), PageSection::Hero);
    }

    #[test]
    fn test_resolve_keeps_previous_when_nothing_visible() {
        let vis = SectionVisibility::new();
        assert_eq!(vis.first_visible(), None);
        assert_eq!(resolve_active(PageSection::Story, &vis), PageSection::Story);
        assert_eq!(resolve_active(PageSection::Hero, &vis), PageSection::Hero);
    }

    #[test]
    fn test_visibility_set_and_clear() {
        let mut vis = SectionVisibility::new();
        vis.set(PageSection::Mission, true);
        assert!(vis.is_visible(PageSection::Mission));
        vis.set(PageSection::Mission, false);
        assert!(!vis.is_visible(PageSection::Mission));
        assert_eq!(vis.first_visible(), None);
    }

    #[test]
    fn test_scrolling_down_the_page() {
        let mut active = PageSection::Hero;
        let mut vis = SectionVisibility::new();

        vis.set(PageSection::Hero, true);
        active = resolve_active(active, &vis);
        assert_eq!(active, PageSection::Hero);

        vis.set(PageSection::Hero, false);
        vis.set(PageSection::Mission, true);
        active = resolve_active(active, &vis);
        assert_eq!(active, PageSection::Mission);

        // Gap between sections: nothing satisfies its threshold
        vis.set(PageSection::Mission, false);
        active = resolve_active(active, &vis);
        assert_eq!(active, PageSection::Mission);

        vis.set(PageSection::Contact, true);
        active = resolve_active(active, &vis);
        assert_eq!(active, PageSection::Contact);
    }
}
