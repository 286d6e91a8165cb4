//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::SITE_NAME;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;

        if let Some(response) = use_context::<ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="min-h-screen bg-blue-950 text-white flex flex-col items-center justify-center p-4">
            <div class="text-center">
                // Error code
                <h1 class="text-6xl font-bold mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold mb-2">
                    "This shore is empty"
                </h2>

                <p class="text-blue-200 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="px-6 py-3 bg-white text-blue-900 hover:bg-blue-50 font-medium rounded-full transition-colors"
                >
                    "Back to the lakes"
                </A>
            </div>

            // Footer
            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-blue-300">
                    {SITE_NAME}
                </p>
            </div>
        </div>
    }
}
