use grade_core::FetchError;
use std::fmt;

#[derive(Clone, Debug)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16 },
    Parse(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Error de configuración: {message}"),
            AppError::Network(message) => write!(formatter, "Error de red: {message}"),
            AppError::Timeout(message) => write!(formatter, "{message}"),
            AppError::Http { status } => write!(formatter, "HTTP {status}"),
            AppError::Parse(message) => write!(formatter, "Respuesta no válida: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<AppError> for FetchError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Http { status } => FetchError::Status(status),
            other => FetchError::Transport(other.to_string()),
        }
    }
}
