//! Scroll-driven lake story
//!
//! A tall section whose content stays pinned while the user scrolls through
//! it. Scroll and resize events are turned into a [`StoryState`] that picks
//! the chapter on screen and fills the progress bar.

use leptos::html;
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

use crate::core::content::story_chapter;
use crate::core::sections::PageSection;
#[cfg(not(feature = "ssr"))]
use crate::core::story::ContainerGeometry;
use crate::core::story::{StoryPhase, StoryState};

/// Pinned, five-chapter narrative driven by scroll position
#[component]
pub fn ScrollStory() -> impl IntoView {
    let container_ref = NodeRef::<html::Section>::new();
    let state = RwSignal::new(StoryState::default());
    let phase = Memo::new(move |_| state.get().phase);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::{resize, scroll};

        let update = move || {
            // Not mounted yet: nothing to measure
            let Some(geometry) = read_geometry(container_ref) else {
                return;
            };
            let next = StoryState::from_geometry(geometry);
            if state.get_untracked() != next {
                state.set(next);
            }
        };

        // Initial measurement once the section is in the DOM
        Effect::new(move |_| update());

        let scroll_handle = window_event_listener(scroll, move |_| update());
        let resize_handle = window_event_listener(resize, move |_| update());

        on_cleanup(move || {
            scroll_handle.remove();
            resize_handle.remove();
        });
    }

    view! {
        <section
            id=PageSection::Story.anchor_id()
            node_ref=container_ref
            class="relative h-[500vh] bg-slate-950 text-white"
            data-phase=move || phase.get().index().to_string()
        >
            <div class="sticky top-0 h-screen overflow-hidden">
                {StoryPhase::ALL
                    .into_iter()
                    .map(|p| view! { <Chapter phase=p current=phase /> })
                    .collect_view()}

                // Progress bar
                <div class="absolute bottom-0 left-0 right-0 h-1 bg-white/10" aria-hidden="true">
                    <div
                        class="h-full bg-sky-400 transition-[width] duration-150 ease-out"
                        style:width=move || format!("{:.1}%", state.get().percent())
                    ></div>
                </div>

                <PhaseDots current=phase />
            </div>
        </section>
    }
}

/// One full-screen chapter; only the current one is visible
#[component]
fn Chapter(phase: StoryPhase, current: Memo<StoryPhase>) -> impl IntoView {
    let chapter = story_chapter(phase);
    let is_current = move || current.get() == phase;

    view! {
        <article
            class="story-chapter absolute inset-0"
            class:story-chapter-active=is_current
            aria-hidden=move || if is_current() { "false" } else { "true" }
        >
            <img
                src=chapter.image
                alt=chapter.title
                class="absolute inset-0 w-full h-full object-cover"
                loading="lazy"
            />
            <div class="absolute inset-0 bg-gradient-to-t from-black/80 via-black/40 to-transparent"></div>

            <div class="relative z-10 h-full max-w-3xl mx-auto px-6 flex flex-col justify-end pb-32">
                <p class="text-sm uppercase tracking-[0.3em] text-sky-300 mb-3">{chapter.eyebrow}</p>
                <h2 class="text-4xl md:text-6xl font-bold mb-6">{chapter.title}</h2>
                <p class="text-lg md:text-xl text-blue-100 leading-relaxed">{chapter.body}</p>
            </div>
        </article>
    }
}

#[component]
fn PhaseDots(current: Memo<StoryPhase>) -> impl IntoView {
    view! {
        <ol class="absolute left-6 top-1/2 -translate-y-1/2 z-20 flex flex-col gap-3" aria-label="Story progress">
            {StoryPhase::ALL
                .into_iter()
                .map(|p| {
                    view! {
                        <li
                            class="w-2 h-2 rounded-full bg-white/30 transition-all duration-300"
                            class=("bg-white", move || current.get() >= p)
                            class=("scale-150", move || current.get() == p)
                            aria-label=format!("Chapter {}", p.index() + 1)
                        ></li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

/// Read the container rectangle and viewport height, if both are available
#[cfg(not(feature = "ssr"))]
fn read_geometry(container_ref: NodeRef<html::Section>) -> Option<ContainerGeometry> {
    let element = container_ref.get_untracked()?;
    let viewport_height = web_sys::window()?.inner_height().ok()?.as_f64()?;
    let rect = element.get_bounding_client_rect();

    Some(ContainerGeometry::new(
        rect.top(),
        rect.bottom(),
        rect.height(),
        viewport_height,
    ))
}
