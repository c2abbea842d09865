use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="inline-block h-4 w-4 animate-spin rounded-full border-2 border-blue-200 border-t-white"
            role="status"
            aria-live="polite"
            aria-label="Cargando"
        ></div>
    }
}
