//! Word that cycles through translations with a blur cross-fade

use leptos::prelude::*;

use crate::core::morph::TextCycle;

#[component]
pub fn MorphingText(
    /// Words shown in order, looping forever
    words: &'static [&'static str],
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let cycle = RwSignal::new(TextCycle::new(words.len()));

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::morph::MORPH_INTERVAL_MS;
        use gloo_timers::callback::Interval;
        use send_wrapper::SendWrapper;

        Effect::new(move |_| {
            if words.len() < 2 {
                return;
            }
            let interval = Interval::new(MORPH_INTERVAL_MS, move || {
                cycle.update(|c| {
                    c.advance();
                });
            });
            // Dropping the interval cancels it
            let interval = SendWrapper::new(interval);
            on_cleanup(move || drop(interval.take()));
        });
    }

    let label = words.first().copied().unwrap_or_default();

    view! {
        <span class=format!("morph-text relative inline-grid {}", class) aria-label=label>
            {words
                .iter()
                .enumerate()
                .map(|(i, word)| {
                    view! {
                        <span
                            class="morph-word col-start-1 row-start-1"
                            class:morph-word-active=move || cycle.get().current() == i
                            data-text={*word}
                            aria-hidden="true"
                        >
                            {*word}
                        </span>
                    }
                })
                .collect_view()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::MORPHING_WORDS;

    /// `(data-text, text content)` of every rendered word span
    fn rendered_words(html: &str) -> Vec<(String, String)> {
        html.split("data-text=\"")
            .skip(1)
            .map(|chunk| {
                let (attr, rest) = chunk.split_once('"').unwrap();
                let (_, after_tag) = rest.split_once('>').unwrap();
                let (text, _) = after_tag.split_once('<').unwrap();
                (attr.to_string(), text.to_string())
            })
            .collect()
    }

    #[test]
    fn test_each_word_carries_its_own_shadow_text() {
        let html = Owner::new().with(|| {
            view! { <MorphingText words=MORPHING_WORDS class="line-shadow" /> }.to_html()
        });

        let words = rendered_words(&html);
        assert_eq!(words.len(), MORPHING_WORDS.len());
        for ((attr, text), expected) in words.iter().zip(MORPHING_WORDS) {
            assert_eq!(attr, expected);
            assert_eq!(text, expected);
        }
    }

    #[test]
    fn test_first_word_starts_active() {
        let html = Owner::new().with(|| view! { <MorphingText words=MORPHING_WORDS /> }.to_html());

        assert_eq!(html.matches("morph-word-active").count(), 1);
        let (_, active) = html.split_once("morph-word-active").unwrap();
        let (_, text) = active.split_once('>').unwrap();
        assert!(text.starts_with(MORPHING_WORDS[0]));
    }
}
