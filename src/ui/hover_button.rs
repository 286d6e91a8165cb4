//! Pill link whose label slides away on hover to reveal an icon

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Icon revealed on hover
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonIcon {
    #[default]
    Arrow,
    Book,
}

impl ButtonIcon {
    pub fn icon_name(&self) -> &'static str {
        match self {
            ButtonIcon::Arrow => icons::ARROW_RIGHT,
            ButtonIcon::Book => icons::BOOK,
        }
    }
}

#[component]
pub fn InteractiveHoverButton(
    label: &'static str,
    href: &'static str,
    #[prop(optional)] icon: ButtonIcon,
    #[prop(default = "bg-white text-blue-600")] class: &'static str,
    /// Open in a new tab (external links)
    #[prop(optional)]
    external: bool,
) -> impl IntoView {
    let (target, rel) = if external {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    };

    view! {
        <a
            href=href
            target=target
            rel=rel
            class=format!(
                "group relative inline-block w-auto cursor-pointer overflow-hidden rounded-full p-2 px-6 text-center font-semibold {}",
                class,
            )
        >
            <div class="flex items-center gap-2">
                <div class="h-2 w-2 rounded-full bg-blue-600 transition-all duration-300 group-hover:scale-[100.8]"></div>
                <span class="inline-block transition-all duration-300 group-hover:translate-x-12 group-hover:opacity-0">
                    {label}
                </span>
            </div>
            <div class="absolute top-0 z-10 flex h-full w-full translate-x-12 items-center justify-center gap-2 text-white opacity-0 transition-all duration-300 group-hover:-translate-x-5 group-hover:opacity-100 bg-blue-600">
                <span>{label}</span>
                <Icon name=icon.icon_name() class="w-4 h-4 invert" />
            </div>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_icons_resolve_to_icon_files() {
        assert_eq!(ButtonIcon::default().icon_name(), "arrow-right");
        assert_eq!(ButtonIcon::Book.icon_name(), "book");
    }

    #[test]
    fn test_external_link_opens_new_tab() {
        let html = Owner::new().with(|| {
            view! { <InteractiveHoverButton label="Read Docs" href="/docs" icon=ButtonIcon::Book external=true /> }
                .to_html()
        });

        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("/icons/book.svg"));
    }
}
