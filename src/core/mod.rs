//! Page logic that does not touch the DOM: scroll, pointer and visibility
//! signals go in, view state comes out.

pub mod accordion;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod morph;
pub mod pointer;
pub mod sections;
pub mod story;

pub use accordion::{AccordionState, ExpandMode};
pub use morph::TextCycle;
pub use pointer::PointerPosition;
pub use sections::{PageSection, SectionVisibility, resolve_active};
pub use story::{ContainerGeometry, StoryPhase, StoryState, story_progress};
