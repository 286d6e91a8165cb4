use leptos::prelude::*;

/// SVG icon served from `/icons`
#[component]
pub fn Icon(
    /// Icon file name without the .svg extension
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons used by the page chrome. Card icons are named in their content records.
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const BOOK: &str = "book";
    pub const CHEVRON_DOWN: &str = "chevron-down";
}
