//! Collapsible question/answer list

use leptos::prelude::*;

use crate::core::accordion::{AccordionState, ExpandMode};
use crate::core::content::FaqEntry;
use crate::ui::icon::{Icon, icons};

/// Accordion over static FAQ entries
#[component]
pub fn Accordion(
    entries: &'static [FaqEntry],
    /// Whether opening an item collapses the others
    #[prop(default = ExpandMode::Multiple)]
    mode: ExpandMode,
) -> impl IntoView {
    let state = RwSignal::new(AccordionState::new(mode));

    view! {
        <div class="space-y-4">
            {entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    view! {
                        <AccordionItem
                            index=index
                            question=entry.question
                            answer=entry.answer
                            state=state
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

/// FAQ accordion item component
#[component]
fn AccordionItem(
    index: usize,
    question: &'static str,
    answer: &'static str,
    state: RwSignal<AccordionState>,
) -> impl IntoView {
    let is_open = move || state.with(|s| s.is_open(index));
    let panel_id = format!("faq-panel-{index}");

    view! {
        <div class="reveal border border-slate-200 rounded-xl overflow-hidden bg-white">
            <button
                class="w-full px-6 py-4 flex items-center justify-between gap-4 text-left hover:bg-slate-50 transition-colors"
                on:click=move |_| {
                    state.update(|s| {
                        s.toggle(index);
                    })
                }
                aria-expanded=move || is_open().to_string()
                aria-controls=panel_id.clone()
            >
                <span class="font-semibold text-slate-900">{question}</span>
                <div
                    class="flex items-center justify-center w-5 h-5 text-slate-400 flex-shrink-0 transition-transform duration-300"
                    class=("rotate-180", is_open)
                >
                    <Icon name=icons::CHEVRON_DOWN class="w-5 h-5" />
                </div>
            </button>
            <div
                id=panel_id
                class="overflow-hidden transition-all duration-300"
                class:max-h-0=move || !is_open()
                class:max-h-96=is_open
            >
                <div class="px-6 pb-4 text-slate-600 leading-relaxed">
                    {answer}
                </div>
            </div>
        </div>
    }
}
