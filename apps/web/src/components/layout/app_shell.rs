//! Page chrome: title header, content container and a footer carrying the
//! build commit so a published page can be traced back to its source.

use crate::app_lib::build_info;
use leptos::prelude::*;

/// Wraps the page with a header, main container and build footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let build = build_info::build_label();

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:border-gray-700 dark:bg-gray-900">
                <div class="max-w-screen-xl mx-auto p-4">
                    <span class="font-semibold whitespace-nowrap dark:text-white">
                        "Portal de notas"
                    </span>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
            <footer class="p-4 text-center text-xs text-gray-400 dark:text-gray-500">
                <span class="font-mono">{build}</span>
            </footer>
        </div>
    }
}
