//! Layout components shared by the page.

mod app_shell;

pub(crate) use app_shell::AppShell;
