mod alert;
mod spinner;
mod submit_button;

pub(crate) use alert::{Alert, AlertKind};
pub(super) use spinner::Spinner;
pub(crate) use submit_button::SubmitButton;
