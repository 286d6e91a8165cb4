//! Static copy rendered by the landing page
//!
//! Every record here is immutable and lives for the whole program. Icon
//! names refer to SVGs under `/icons`, image paths to files under the site
//! root.

use super::story::{STORY_PHASE_COUNT, StoryPhase};

pub const SITE_NAME: &str = "Namma Lakes";
pub const SITE_DESCRIPTION: &str =
    "Giving real-time updates on water parameters of lakes in Bangalore.";
pub const TAGLINE: &str = "Open-source, easy-to-deploy and affordable tech to monitor lake(s) at any scale";

/// Background video of the hero
pub const HERO_VIDEO: &str = "/bg.mp4";

/// Opaque external link targets
pub mod links {
    pub const REPOSITORY: &str = "https://github.com/namma-lakes/namma-lakes";
    pub const ISSUES: &str = "https://github.com/namma-lakes/namma-lakes/issues";
    pub const DOCS: &str = "https://github.com/namma-lakes/namma-lakes#readme";
}

/// Icon, title and description card (features and impact)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentCard {
    pub icon: &'static str,
    /// Tailwind text colour applied to the icon
    pub accent: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Copy and artwork for one story phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryChapter {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub image: &'static str,
    pub title: &'static str,
    pub quote: &'static str,
    pub author: &'static str,
}

/// One "how it works" step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// "Lakes" in the languages spoken around Bengaluru, cycled in the hero
pub const MORPHING_WORDS: &[&str] = &["Lakes", "ಕೆರೆಗಳು", "झीलें", "ஏரிகள்", "సరస్సులు"];

pub const MISSION_TITLE: &str = "A city of a thousand lakes";
pub const MISSION_BODY: &[&str] = &[
    "Bengaluru grew around a chain of man-made tanks that stored monsoon rain and fed its farms. Today most of them are choked by sewage, weeds and construction debris, and nobody can say how healthy the survivors really are.",
    "Namma Lakes puts affordable, open-source sensors into the water and publishes what they measure, so residents, researchers and the city can see problems the day they start instead of the season after.",
];

pub const FEATURES: &[ContentCard] = &[
    ContentCard {
        icon: "code",
        accent: "text-sky-600",
        title: "Open Source",
        description: "Hardware designs, firmware and dashboards are published under permissive licences. Fork them, fix them, deploy them.",
    },
    ContentCard {
        icon: "rocket",
        accent: "text-emerald-600",
        title: "Easy to Deploy",
        description: "A floating buoy, a solar panel and a SIM card. A volunteer team can put a station in the water in an afternoon.",
    },
    ContentCard {
        icon: "wallet",
        accent: "text-amber-600",
        title: "Affordable",
        description: "Built from off-the-shelf parts for a fraction of the cost of commercial monitoring stations.",
    },
    ContentCard {
        icon: "activity",
        accent: "text-rose-600",
        title: "Real-time Readings",
        description: "pH, dissolved oxygen, turbidity and temperature are sampled every few minutes and streamed as they arrive.",
    },
    ContentCard {
        icon: "database",
        accent: "text-indigo-600",
        title: "Open Data",
        description: "Every reading is available through a public dashboard and downloadable datasets. No sign-up walls.",
    },
    ContentCard {
        icon: "shield",
        accent: "text-teal-600",
        title: "Early Warnings",
        description: "Thresholds trigger alerts for sewage inflow and oxygen crashes before fish kills make the news.",
    },
];

pub const IMPACT: &[ContentCard] = &[
    ContentCard {
        icon: "heart",
        accent: "text-red-500",
        title: "Community Impact",
        description: "Supporting over 100,000 residents with clean and monitored water bodies.",
    },
    ContentCard {
        icon: "droplets",
        accent: "text-blue-500",
        title: "Water Quality",
        description: "Maintaining optimal water quality through 24/7 monitoring and quick response systems.",
    },
    ContentCard {
        icon: "users",
        accent: "text-green-500",
        title: "Local Engagement",
        description: "Empowering communities with real-time data and educational initiatives.",
    },
    ContentCard {
        icon: "line-chart",
        accent: "text-purple-500",
        title: "Sustainable Future",
        description: "Building a data-driven approach to water resource management.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[Testimonial {
    image: "/images/heritage.jpg",
    title: "Preserving Our Heritage",
    quote: "These lakes have been our community's lifeline for generations. Now we can protect them better than ever.",
    author: "- Local Environmental Activist",
}];

pub const STEPS: &[Step] = &[
    Step {
        title: "Drop a buoy",
        description: "Anchor a sensor buoy near the inlet of the lake. It powers itself from a small solar panel.",
    },
    Step {
        title: "Stream the readings",
        description: "Measurements travel over the mobile network to an open server every few minutes.",
    },
    Step {
        title: "Watch the lake",
        description: "Follow live charts on the dashboard and subscribe to alerts for the lakes you care about.",
    },
];

const STORY: [StoryChapter; STORY_PHASE_COUNT] = [
    StoryChapter {
        eyebrow: "Then",
        title: "Built around water",
        body: "For centuries, linked tanks caught the monsoon and carried it from one valley to the next. Every neighbourhood had its kere.",
        image: "/images/story-origins.jpg",
    },
    StoryChapter {
        eyebrow: "Now",
        title: "Lakes under pressure",
        body: "Untreated sewage, encroachment and invasive weeds starve the water of oxygen. Problems are noticed only when the foam or the dead fish appear.",
        image: "/images/story-pressure.jpg",
    },
    StoryChapter {
        eyebrow: "Step one",
        title: "Sensors in the water",
        body: "Low-cost buoys measure pH, dissolved oxygen, turbidity and temperature around the clock.",
        image: "/images/story-sensing.jpg",
    },
    StoryChapter {
        eyebrow: "Step two",
        title: "Data everyone can read",
        body: "Readings land on an open dashboard within minutes, with history that anyone can download and analyse.",
        image: "/images/story-insight.jpg",
    },
    StoryChapter {
        eyebrow: "Step three",
        title: "Communities take action",
        body: "Alerts reach lake groups and officials the moment a reading goes wrong, turning data into clean-ups, complaints and repairs.",
        image: "/images/story-action.jpg",
    },
];

/// Chapter rendered for a story phase
pub fn story_chapter(phase: StoryPhase) -> &'static StoryChapter {
    &STORY[phase.index()]
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "What does a Namma Lakes station measure?",
        answer: "Each buoy measures pH, dissolved oxygen, turbidity, conductivity and water temperature. The sensor bay is modular, so extra probes can be added.",
    },
    FaqEntry {
        question: "How much does a station cost?",
        answer: "The reference build uses off-the-shelf parts and costs a small fraction of a commercial station. The bill of materials is published in the repository.",
    },
    FaqEntry {
        question: "Who can access the data?",
        answer: "Everyone. Readings are published on the public dashboard as soon as they arrive and can be downloaded as open datasets.",
    },
    FaqEntry {
        question: "Can we set this up on our lake?",
        answer: "Yes. The hardware and deployment guides are open source. Reach out through the repository and we will help your group get started.",
    },
    FaqEntry {
        question: "How can I contribute?",
        answer: "Volunteer for deployments, improve the firmware or dashboards, translate the site, or report issues you notice on your local lake.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_phase_has_a_chapter() {
        for phase in StoryPhase::ALL {
            let chapter = story_chapter(phase);
            assert!(!chapter.title.is_empty());
            assert!(chapter.image.starts_with("/images/"));
        }
        assert_ne!(
            story_chapter(StoryPhase::Origins).title,
            story_chapter(StoryPhase::Action).title
        );
    }

    #[test]
    fn test_morphing_words_start_in_english() {
        assert_eq!(MORPHING_WORDS[0], "Lakes");
        assert!(MORPHING_WORDS.len() > 1);
    }

    #[test]
    fn test_cards_are_filled_in() {
        for card in FEATURES.iter().chain(IMPACT) {
            assert!(!card.icon.is_empty());
            assert!(card.accent.starts_with("text-"));
            assert!(!card.title.is_empty());
            assert!(!card.description.is_empty());
        }
    }

    #[test]
    fn test_faq_questions_are_unique() {
        let mut questions: Vec<&str> = FAQ.iter().map(|f| f.question).collect();
        questions.sort();
        questions.dedup();
        assert_eq!(questions.len(), FAQ.len());
    }
}
