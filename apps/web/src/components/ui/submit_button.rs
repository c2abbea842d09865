use super::Spinner;
use leptos::prelude::*;

/// Form submit button that locks itself while a lookup is in flight, so a
/// second click cannot race the first request.
#[component]
pub fn SubmitButton(
    #[prop(into)] pending: Signal<bool>,
    label: &'static str,
    busy_label: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="inline-flex items-center gap-2 text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm w-full sm:w-auto px-5 py-2.5 dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800"
            class:cursor-wait=move || pending.get()
            class:opacity-70=move || pending.get()
            disabled=move || pending.get()
            aria-busy=move || pending.get().to_string()
        >
            <Show when=move || pending.get() fallback=move || label>
                <Spinner />
                {busy_label}
            </Show>
        </button>
    }
}
