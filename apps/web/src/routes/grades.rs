//! The grade lookup page: a class selector filled from the manifest, a password
//! field and a result area. Element ids (`loginForm`, `classSelect`,
//! `passwordInput`, `result`) are stable so the published markup and styles can
//! target them.

use crate::components::{Alert, AlertKind, SubmitButton};
use crate::features::grades::client;
use grade_core::{ClassManifestEntry, Error, GradeReport, Submission, SubmissionGuard, Ticket};
use leptos::ev::SubmitEvent;
use leptos::logging::error;
use leptos::{prelude::*, task::spawn_local};

type Outcome = Result<GradeReport, Error>;

#[derive(Clone)]
struct LookupInput {
    ticket: Ticket,
    class_file: String,
    password: String,
}

#[component]
pub fn GradesPage() -> impl IntoView {
    let classes = RwSignal::new(Vec::<ClassManifestEntry>::new());
    let (class_file, set_class_file) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let result = RwSignal::new(None::<Outcome>);
    let guard = StoredValue::new(SubmissionGuard::new());

    // Class directory: one fetch on mount, blocking alert on failure.
    spawn_local(async move {
        match client::load_classes().await {
            Ok(manifest) => {
                if let Some(first) = manifest.classes.first() {
                    set_class_file.set(first.file.clone());
                }
                classes.set(manifest.classes);
            }
            Err(err) => {
                error!("{}", err.detail());
                if let Err(alert_err) = window().alert_with_message(&err.to_string()) {
                    error!("failed to show alert: {alert_err:?}");
                }
            }
        }
    });

    let lookup_action = Action::new_local(move |input: &LookupInput| {
        let input = input.clone();
        async move {
            let outcome = client::lookup_grades(&input.class_file, &input.password).await;
            (input.ticket, outcome)
        }
    });

    Effect::new(move |_| {
        if let Some((ticket, outcome)) = lookup_action.value().get() {
            // A newer submission owns the result area.
            let Some(outcome) = guard.with_value(|guard| guard.accept(ticket, outcome)) else {
                return;
            };
            if let Err(err) = &outcome {
                if err.should_log() {
                    error!("{}", err.detail());
                }
            }
            result.set(Some(outcome));
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        result.set(None);
        let class_value = class_file.get_untracked();
        let password_value = password.get_untracked();
        match guard.with_value(|guard| guard.submit(&class_value, &password_value)) {
            Submission::Rejected(err) => result.set(Some(Err(err))),
            Submission::Dispatch(ticket) => {
                lookup_action.dispatch(LookupInput {
                    ticket,
                    class_file: class_value,
                    password: password_value,
                });
            }
        }
    };

    view! {
        <form id="loginForm" class="max-w-sm mx-auto" on:submit=on_submit>
            <div class="mb-5">
                <label
                    class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                    for="classSelect"
                >
                    "Clase"
                </label>
                <select
                    id="classSelect"
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                    on:change=move |event| set_class_file.set(event_target_value(&event))
                >
                    {move || {
                        classes
                            .get()
                            .into_iter()
                            .map(|entry| view! { <option value=entry.file>{entry.name}</option> })
                            .collect_view()
                    }}
                </select>
            </div>
            <div class="mb-5">
                <label
                    class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                    for="passwordInput"
                >
                    "Contraseña"
                </label>
                <input
                    id="passwordInput"
                    type="password"
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                    autocomplete="current-password"
                    on:input=move |event| set_password.set(event_target_value(&event))
                />
            </div>
            <SubmitButton pending=lookup_action.pending() label="Ver notas" busy_label="Consultando" />
        </form>
        <div id="result" class="max-w-sm mx-auto mt-6">
            {move || result.get().map(render_outcome)}
        </div>
    }
}

fn render_outcome(outcome: Outcome) -> AnyView {
    match outcome {
        Ok(report) => {
            let heading = report.heading();
            view! {
                <h2 class="mb-3 text-lg font-semibold text-gray-900 dark:text-white">{heading}</h2>
                <ul class="space-y-1 text-gray-700 dark:text-gray-300">
                    {report
                        .lines
                        .into_iter()
                        .map(|line| {
                            view! {
                                <li>
                                    <strong>{format!("{}:", line.activity)}</strong>
                                    " "
                                    {line.grade}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            }
                .into_any()
        }
        Err(Error::Validation) => {
            view! { <Alert kind=AlertKind::Info message=Error::Validation.to_string() /> }.into_any()
        }
        Err(err) => view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any(),
    }
}
