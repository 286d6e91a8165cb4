//! Landing page component
//!
//! The whole public site of Namma Lakes:
//! - SEO meta tags and JSON-LD structured data
//! - Hero with background video, pointer glow and cycling translated heading
//! - Mission statement with real stories
//! - Features, how it works and impact grid
//! - Scroll-driven lake story
//! - FAQ accordion
//! - Call-to-action and footer
//!
//! A fixed rail on the right marks the section currently in view.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use serde::Serialize;

use crate::core::accordion::ExpandMode;
use crate::core::content::{
    self, ContentCard, FAQ, FEATURES, IMPACT, MISSION_BODY, MISSION_TITLE, MORPHING_WORDS, STEPS,
    TESTIMONIALS, Testimonial, links,
};
use crate::core::sections::PageSection;
use crate::ui::accordion::Accordion;
use crate::ui::hover_button::{ButtonIcon, InteractiveHoverButton};
use crate::ui::icon::{Icon, icons};
use crate::ui::morphing_text::MorphingText;
use crate::ui::pointer_glow::PointerGlow;
use crate::ui::section_rail::SectionRail;
use crate::ui::story::ScrollStory;

/// Stagger between cards revealed together, in milliseconds
const REVEAL_STAGGER_MS: usize = 100;

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="min-h-screen overflow-x-clip font-sans">
            <SectionRail />

            <Hero />
            <MissionSection />
            <FeaturesSection />
            <ScrollStory />
            <FaqSection />
            <ContactSection />

            <LandingStyles />
            <RevealScript />
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    let title = format!("{} - Smarter Lakes", content::SITE_NAME);

    view! {
        <Title text=title.clone() />
        <Meta name="description" content=content::SITE_DESCRIPTION />
        <Meta name="keywords" content="lake monitoring, water quality, Bangalore, Bengaluru, open source, IoT, sensors, environment" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=title />
        <Meta property="og:description" content=content::SITE_DESCRIPTION />
        <Meta property="og:image" content="/images/og-image.jpg" />

        <Meta name="theme-color" content="#1e3a8a" />
        <Link rel="preload" href=content::HERO_VIDEO as_="video" />

        <script type="application/ld+json" inner_html=StructuredData::organization().to_json()></script>
    }
}

/// schema.org description of the initiative
#[derive(Debug, Serialize)]
struct StructuredData {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    description: &'static str,
    slogan: &'static str,
    #[serde(rename = "sameAs")]
    same_as: Vec<&'static str>,
    #[serde(rename = "knowsAbout")]
    knows_about: Vec<&'static str>,
}

impl StructuredData {
    fn organization() -> Self {
        Self {
            context: "https://schema.org",
            kind: "Organization",
            name: content::SITE_NAME,
            description: content::SITE_DESCRIPTION,
            slogan: content::TAGLINE,
            same_as: vec![links::REPOSITORY],
            knows_about: FEATURES.iter().map(|f| f.title).collect(),
        }
    }

    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section
            id=PageSection::Hero.anchor_id()
            class="relative min-h-screen flex items-center justify-center overflow-hidden text-white"
        >
            // Video background
            <div class="absolute inset-0 z-0">
                <video
                    autoplay=true
                    loop=true
                    muted=true
                    playsinline=true
                    class="w-full h-full object-cover blur-xs"
                >
                    <source src=content::HERO_VIDEO type="video/mp4" />
                </video>
                <div class="absolute inset-0 bg-blue-950/40"></div>
            </div>

            <PointerGlow />

            <div class="container mx-auto px-4 z-10 flex flex-col items-center justify-center">
                <div class="text-center">
                    <h1 class="text-5xl md:text-7xl font-bold mb-6 landing-fade-in-up">
                        "Smarter"
                        <br />
                        <MorphingText words=MORPHING_WORDS class="line-shadow italic font-extrabold" />
                    </h1>

                    <p class="text-xl md:text-2xl mb-10 max-w-3xl mx-auto text-blue-100 landing-fade-in-up landing-delay-200">
                        "Open-source, easy-to-deploy and affordable "
                        <em>"tech"</em>
                        " to monitor lake(s) at any scale"
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center landing-fade-in-up landing-delay-400">
                        <InteractiveHoverButton
                            label="Get Started"
                            href="#contact"
                        />
                        <InteractiveHoverButton
                            label="Read Docs"
                            href=links::DOCS
                            icon=ButtonIcon::Book
                            external=true
                        />
                    </div>
                </div>

                // Scroll indicator
                <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce">
                    <Icon name=icons::CHEVRON_DOWN class="w-6 h-6 invert" />
                </div>
            </div>
        </section>
    }
}

#[component]
fn MissionSection() -> impl IntoView {
    view! {
        <section id=PageSection::Mission.anchor_id() class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <div class="max-w-3xl mx-auto text-center mb-20 reveal">
                    <h2 class="text-3xl md:text-4xl font-bold mb-6 text-gray-900">{MISSION_TITLE}</h2>
                    {MISSION_BODY
                        .iter()
                        .map(|paragraph| view! { <p class="text-lg text-gray-600 leading-relaxed mb-4">{*paragraph}</p> })
                        .collect_view()}
                </div>

                <h2 class="text-3xl md:text-4xl font-bold text-center mb-16 text-gray-900 reveal">
                    "Real Stories, Real Impact"
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(index, story)| view! { <StoryCard story=story index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StoryCard(story: &'static Testimonial, index: usize) -> impl IntoView {
    view! {
        <div class="relative group reveal" style=reveal_delay(index)>
            <div class="relative h-96 overflow-hidden rounded-lg">
                <img
                    src=story.image
                    alt=story.title
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                    loading="lazy"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/70 to-transparent">
                    <div class="absolute bottom-0 p-6 text-white">
                        <h3 class="text-2xl font-bold mb-2">{story.title}</h3>
                        <p class="text-sm italic mb-2">{story.quote}</p>
                        <p class="text-sm text-blue-200">{story.author}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section id=PageSection::Features.anchor_id() class="py-20 bg-blue-50">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16 reveal">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">"Why Namma Lakes?"</h2>
                    <p class="text-lg text-gray-600 max-w-2xl mx-auto">
                        "Everything a neighbourhood needs to keep an eye on its lake."
                    </p>
                </div>

                <div class="grid md:grid-cols-3 gap-8 mb-24">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, card)| view! { <FeatureCard card=card index=index /> })
                        .collect_view()}
                </div>

                // How it works
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-12 text-gray-900 reveal">
                    "How it works"
                </h2>
                <ol class="grid md:grid-cols-3 gap-8 mb-24">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| {
                            view! {
                                <li class="reveal text-center" style=reveal_delay(index)>
                                    <div class="w-12 h-12 mx-auto mb-4 rounded-full bg-blue-600 text-white text-xl font-bold flex items-center justify-center">
                                        {index + 1}
                                    </div>
                                    <h3 class="text-xl font-semibold mb-2 text-gray-900">{step.title}</h3>
                                    <p class="text-gray-600">{step.description}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>

                <h2 class="text-3xl md:text-4xl font-bold text-center mb-16 text-gray-900 reveal">
                    "Making a Difference Together"
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {IMPACT
                        .iter()
                        .enumerate()
                        .map(|(index, card)| view! { <ImpactCard card=card index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Feature card component
#[component]
fn FeatureCard(card: &'static ContentCard, index: usize) -> impl IntoView {
    view! {
        <div
            class="reveal bg-white p-6 rounded-xl border border-blue-100 hover:border-blue-300
                   transition-all duration-300 hover:shadow-lg hover:-translate-y-1"
            style=reveal_delay(index)
        >
            <div class=format!("w-12 h-12 rounded-lg bg-blue-50 flex items-center justify-center mb-4 {}", card.accent)>
                <Icon name=card.icon class="w-6 h-6" />
            </div>
            <h3 class="text-lg font-semibold text-gray-900 mb-2">{card.title}</h3>
            <p class="text-gray-600 text-sm leading-relaxed">{card.description}</p>
        </div>
    }
}

#[component]
fn ImpactCard(card: &'static ContentCard, index: usize) -> impl IntoView {
    view! {
        <div class="reveal" style=reveal_delay(index)>
            <div class="p-6 h-full rounded-xl bg-white shadow-sm hover:shadow-lg transition-shadow duration-300 text-center">
                <div class=format!("flex justify-center mb-4 {}", card.accent)>
                    <Icon name=card.icon class="w-6 h-6" />
                </div>
                <h3 class="text-xl font-semibold mb-2">{card.title}</h3>
                <p class="text-gray-600">{card.description}</p>
            </div>
        </div>
    }
}

/// FAQ section component
#[component]
fn FaqSection() -> impl IntoView {
    view! {
        <section id="faq" class="py-20 px-4 bg-slate-50">
            <div class="max-w-3xl mx-auto">
                <div class="text-center mb-16 reveal">
                    <h2 class="text-3xl sm:text-4xl font-bold text-gray-900 mb-4">
                        "Frequently Asked Questions"
                    </h2>
                    <p class="text-lg text-gray-600">
                        "Got questions? We've got answers."
                    </p>
                </div>

                <Accordion entries=FAQ mode=ExpandMode::Single />
            </div>
        </section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id=PageSection::Contact.anchor_id() class="bg-blue-900 text-white">
            <div class="py-20 container mx-auto px-4 text-center">
                <div class="max-w-3xl mx-auto reveal">
                    <h2 class="text-3xl md:text-4xl font-bold mb-6">"Be Part of the Change"</h2>
                    <p class="text-xl mb-8 text-blue-100">
                        "Join our community of lake guardians and help protect our water resources for future generations"
                    </p>
                    <a
                        href=links::REPOSITORY
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-block bg-white text-blue-900 hover:bg-blue-50 px-8 py-4 text-lg font-semibold rounded-full transition-colors"
                    >
                        "Get Involved Today"
                    </a>
                </div>
            </div>

            <Footer />
        </section>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-10 border-t border-white/10">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex flex-col sm:flex-row items-center justify-between gap-4">
                <span class="text-sm text-blue-200">
                    {format!("{} - open-source lake monitoring for Bengaluru.", content::SITE_NAME)}
                </span>
                <nav class="flex items-center gap-6 text-sm">
                    <a href=links::REPOSITORY target="_blank" rel="noopener noreferrer"
                       class="text-blue-200 hover:text-white transition-colors">
                        "Source"
                    </a>
                    <a href=links::DOCS target="_blank" rel="noopener noreferrer"
                       class="text-blue-200 hover:text-white transition-colors">
                        "Docs"
                    </a>
                    <a href=links::ISSUES target="_blank" rel="noopener noreferrer"
                       class="text-blue-200 hover:text-white transition-colors">
                        "Report Issue"
                    </a>
                </nav>
            </div>
        </footer>
    }
}

/// Inline style delaying a reveal so cards in a row appear one after another
fn reveal_delay(index: usize) -> String {
    format!("transition-delay: {}ms;", index * REVEAL_STAGGER_MS)
}

/// CSS styles for landing page animations
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            /* Fade in up animation */
            @keyframes landing-fade-in-up {
                from {
                    opacity: 0;
                    transform: translateY(20px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }

            .landing-fade-in-up {
                animation: landing-fade-in-up 0.6s ease-out forwards;
            }

            .landing-delay-200 {
                animation-delay: 0.2s;
                opacity: 0;
            }

            .landing-delay-400 {
                animation-delay: 0.4s;
                opacity: 0;
            }

            /* Reveal once in view */
            .reveal {
                opacity: 0;
                transform: translateY(20px);
                transition: opacity 0.5s ease-out, transform 0.5s ease-out;
            }

            .reveal.visible {
                opacity: 1;
                transform: translateY(0);
            }

            /* Line shadow accent, drawn behind each cycling word */
            .line-shadow .morph-word {
                position: relative;
                z-index: 0;
            }
            .line-shadow .morph-word::after {
                content: attr(data-text);
                position: absolute;
                left: 0.04em;
                top: 0.04em;
                z-index: -1;
                background-image: linear-gradient(45deg, transparent 45%, white 45%, white 55%, transparent 0);
                background-size: 0.06em 0.06em;
                -webkit-background-clip: text;
                background-clip: text;
                color: transparent;
                animation: line-shadow 15s linear infinite;
            }
            @keyframes line-shadow {
                0% { background-position: 0 0; }
                100% { background-position: 100% -100%; }
            }

            /* Morphing word */
            .morph-word {
                opacity: 0;
                filter: blur(8px);
                transition: opacity 0.8s ease, filter 0.8s ease;
            }
            .morph-word.morph-word-active {
                opacity: 1;
                filter: blur(0);
            }

            /* Story chapters */
            .story-chapter {
                opacity: 0;
                transform: scale(1.04);
                transition: opacity 0.7s ease, transform 0.7s ease;
            }
            .story-chapter.story-chapter-active {
                opacity: 1;
                transform: scale(1);
            }

            /* Pointer glow */
            .pointer-glow {
                background: radial-gradient(
                    600px circle at var(--pointer-x-pct, 50%) var(--pointer-y-pct, 50%),
                    rgba(56, 189, 248, 0.18),
                    transparent 40%
                );
            }

            @media (prefers-reduced-motion: reduce) {
                .reveal, .morph-word, .story-chapter {
                    transition: none;
                }
                .landing-fade-in-up, .line-shadow .morph-word::after {
                    animation: none;
                    opacity: 1;
                }
            }
            "#
        </style>
    }
}

/// Script for scroll-triggered reveals using IntersectionObserver
#[component]
fn RevealScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initReveals() {
                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                                observer.unobserve(entry.target);
                            }
                        });
                    }, {
                        threshold: 0.1
                    });

                    document.querySelectorAll('.reveal').forEach(el => {
                        observer.observe(el);
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initReveals);
                } else {
                    initReveals();
                }
            })();
            "#
        </script>
    }
}
