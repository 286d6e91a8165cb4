//! Ambient gradient following the pointer
//!
//! Pointer moves are written to CSS custom properties on the root element;
//! the glow layer (and any other styles) read them with `var(--pointer-x)`.

use leptos::prelude::*;

#[component]
pub fn PointerGlow() -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::pointer::PointerPosition;
        use leptos::ev::pointermove;
        use leptos::web_sys;
        use wasm_bindgen::JsCast;

        let handle = window_event_listener(pointermove, move |ev| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(root) = window
                .document()
                .and_then(|d| d.document_element())
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            else {
                return;
            };

            let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let position =
                PointerPosition::from_client(ev.client_x() as f64, ev.client_y() as f64, width, height);

            let style = root.style();
            for (name, value) in position.css_properties() {
                let _ = style.set_property(name, &value);
            }
        });

        on_cleanup(move || handle.remove());
    }

    view! {
        <div class="pointer-glow pointer-events-none absolute inset-0 z-[1]" aria-hidden="true"></div>
    }
}
