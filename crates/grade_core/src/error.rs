use thiserror::Error;

/// Failures of the directory and lookup flows.
///
/// `Display` yields the exact message shown to the student. Underlying detail
/// that must not reach the page (digest primitive failures) is kept separately
/// and exposed through [`Error::detail`] for diagnostics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Error al cargar las clases: {0}")]
    ManifestLoad(String),
    #[error("Debes seleccionar una clase e introducir tu contraseña.")]
    Validation,
    #[error("Error al calcular el hash de la contraseña.")]
    Digest(String),
    #[error("Error al cargar los datos de la clase: {0}")]
    RosterLoad(String),
    /// Wrong password and unknown student are indistinguishable on purpose.
    #[error("Contraseña incorrecta o estudiante no encontrado.")]
    NoMatch,
}

impl Error {
    /// Validation failures are shown inline only; everything else is also logged.
    #[must_use]
    pub fn should_log(&self) -> bool {
        !matches!(self, Error::Validation)
    }

    /// Diagnostic text for logs. Never includes passwords or digests.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Error::Digest(detail) => format!("{self} ({detail})"),
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::ManifestLoad("boom".to_string()).to_string(),
            "Error al cargar las clases: boom"
        );
        assert_eq!(
            Error::Validation.to_string(),
            "Debes seleccionar una clase e introducir tu contraseña."
        );
        assert_eq!(
            Error::Digest("no subtle crypto".to_string()).to_string(),
            "Error al calcular el hash de la contraseña."
        );
        assert_eq!(
            Error::RosterLoad("boom".to_string()).to_string(),
            "Error al cargar los datos de la clase: boom"
        );
        assert_eq!(
            Error::NoMatch.to_string(),
            "Contraseña incorrecta o estudiante no encontrado."
        );
    }

    #[test]
    fn only_validation_skips_logging() {
        assert!(!Error::Validation.should_log());
        assert!(Error::NoMatch.should_log());
        assert!(Error::Digest(String::new()).should_log());
        assert!(Error::RosterLoad(String::new()).should_log());
        assert!(Error::ManifestLoad(String::new()).should_log());
    }

    #[test]
    fn detail_carries_digest_cause() {
        let err = Error::Digest("crypto.subtle unavailable".to_string());
        assert!(err.detail().contains("crypto.subtle unavailable"));
        assert!(!err.to_string().contains("crypto.subtle"));
    }
}
