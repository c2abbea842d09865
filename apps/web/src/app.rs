use crate::components::AppShell;
use crate::routes::GradesPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AppShell>
            <GradesPage />
        </AppShell>
    }
}
