//! Fixed side navigation highlighting the section currently in view

use leptos::prelude::*;

use crate::core::sections::{PageSection, SectionVisibility};

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Visibility ratios at which the observer reports back
#[cfg(not(feature = "ssr"))]
const OBSERVER_STEPS: usize = 10;

/// Side rail with one marker per [`PageSection`]
#[component]
pub fn SectionRail() -> impl IntoView {
    let visibility = RwSignal::new(SectionVisibility::new());
    let active = RwSignal::new(PageSection::default());

    #[cfg(not(feature = "ssr"))]
    {
        use send_wrapper::SendWrapper;

        Effect::new(move |_| {
            let Some(observer) = observe_sections(visibility, active) else {
                return;
            };
            let observer = SendWrapper::new(observer);
            on_cleanup(move || {
                let (observer, _callback) = observer.take();
                observer.disconnect();
            });
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = visibility;
    }

    view! {
        <nav
            class="fixed right-6 top-1/2 -translate-y-1/2 z-40 hidden md:flex flex-col gap-4 rounded-2xl bg-slate-900/50 backdrop-blur-sm px-3 py-4 shadow-lg"
            aria-label="Page sections"
        >
            {PageSection::ALL
                .into_iter()
                .map(|section| view! { <RailMarker section=section active=active /> })
                .collect_view()}
        </nav>
    }
}

#[component]
fn RailMarker(section: PageSection, active: RwSignal<PageSection>) -> impl IntoView {
    let is_active = move || active.get() == section;

    view! {
        <button
            class="group flex items-center justify-end gap-3"
            on:click=move |_| scroll_to_section(section)
            aria-label=format!("Go to {}", section.label())
            aria-current=move || is_active().then_some("true")
        >
            <span
                class="text-xs font-medium text-white/0 group-hover:text-white/80 transition-colors"
                class=("text-white", is_active)
            >
                {section.label()}
            </span>
            <span
                class="block w-2.5 h-2.5 rounded-full border border-white/70 transition-all duration-300"
                class=("bg-white", is_active)
                class=("scale-125", is_active)
            ></span>
        </button>
    }
}

/// Smooth-scroll the section element into view. Missing elements are ignored.
fn scroll_to_section(section: PageSection) {
    #[cfg(not(feature = "ssr"))]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section.anchor_id()))
        else {
            return;
        };

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    #[cfg(feature = "ssr")]
    {
        let _ = section;
    }
}

#[cfg(not(feature = "ssr"))]
type ObserverCallback =
    wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// Start observing every section element that is mounted.
///
/// Returns the observer together with its callback, which must stay alive
/// until the observer is disconnected.
#[cfg(not(feature = "ssr"))]
fn observe_sections(
    visibility: RwSignal<SectionVisibility>,
    active: RwSignal<PageSection>,
) -> Option<(web_sys::IntersectionObserver, ObserverCallback)> {
    use crate::core::sections::{is_in_view, resolve_active};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let document = web_sys::window()?.document()?;

    let callback: ObserverCallback = Closure::new(
        move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            let fallback_height = viewport_height();

            visibility.update(|vis| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let Some(section) = PageSection::from_anchor_id(&entry.target().id()) else {
                        continue;
                    };

                    let viewport = entry
                        .root_bounds()
                        .map(|bounds| bounds.height())
                        .unwrap_or(fallback_height);
                    let in_view = entry.is_intersecting()
                        && is_in_view(
                            entry.intersection_rect().height(),
                            entry.bounding_client_rect().height(),
                            viewport,
                            section.threshold(),
                        );
                    vis.set(section, in_view);
                }
            });

            let next = resolve_active(active.get_untracked(), &visibility.get_untracked());
            if active.get_untracked() != next {
                active.set(next);
            }
        },
    );

    let thresholds = js_sys::Array::new();
    for step in 0..=OBSERVER_STEPS {
        thresholds.push(&(step as f64 / OBSERVER_STEPS as f64).into());
    }
    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&thresholds);

    let observer =
        match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        {
            Ok(observer) => observer,
            Err(err) => {
                leptos::logging::warn!("section rail: IntersectionObserver unavailable: {err:?}");
                return None;
            }
        };

    for section in PageSection::ALL {
        if let Some(element) = document.get_element_by_id(section.anchor_id()) {
            observer.observe(&element);
        }
    }

    Some((observer, callback))
}

#[cfg(not(feature = "ssr"))]
fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}
