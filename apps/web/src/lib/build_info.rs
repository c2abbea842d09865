const UNKNOWN: &str = "unknown";

fn commit() -> &'static str {
    match option_env!("GRADEBOOK_WEB_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => UNKNOWN,
    }
}

/// Footer label identifying the published build, e.g. `v0.1.0 (3f2a9c1)`.
pub fn build_label() -> String {
    format!("v{} ({})", env!("CARGO_PKG_VERSION"), commit())
}
