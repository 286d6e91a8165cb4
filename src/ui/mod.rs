pub mod accordion;
pub mod hover_button;
pub mod icon;
pub mod morphing_text;
pub mod pages;
pub mod pointer_glow;
pub mod section_rail;
pub mod story;

pub use accordion::Accordion;
pub use hover_button::{ButtonIcon, InteractiveHoverButton};
pub use icon::{Icon, icons};
pub use morphing_text::MorphingText;
pub use pointer_glow::PointerGlow;
pub use section_rail::SectionRail;
pub use story::ScrollStory;
