//! Repository error type
//!
//! Constraint failures reported by PostgreSQL are split out of the generic
//! sqlx error so the HTTP layer can answer them as client errors.

use sqlx::error::ErrorKind;

/// Which kind of constraint rejected a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityKind {
    ForeignKey,
    Unique,
    Check,
    NotNull,
}

impl IntegrityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ForeignKey => "foreign key",
            Self::Unique => "unique",
            Self::Check => "check",
            Self::NotNull => "not null",
        }
    }
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: i32 },

    #[error("{} constraint violated{}", .kind.as_str(), constraint_suffix(.constraint))]
    Integrity {
        kind: IntegrityKind,
        constraint: Option<String>,
    },
}

fn constraint_suffix(constraint: &Option<String>) -> String {
    constraint
        .as_deref()
        .map(|c| format!(" ({c})"))
        .unwrap_or_default()
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        let kind = match &err {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::ForeignKeyViolation => Some(IntegrityKind::ForeignKey),
                ErrorKind::UniqueViolation => Some(IntegrityKind::Unique),
                ErrorKind::CheckViolation => Some(IntegrityKind::Check),
                ErrorKind::NotNullViolation => Some(IntegrityKind::NotNull),
                _ => None,
            },
            _ => None,
        };

        match kind {
            Some(kind) => {
                let constraint = err
                    .as_database_error()
                    .and_then(|db_err| db_err.constraint())
                    .map(str::to_owned);
                tracing::debug!(kind = kind.as_str(), ?constraint, "integrity violation");
                Self::Integrity { kind, constraint }
            }
            None => Self::Sqlx(err),
        }
    }
}

impl DbError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_integrity(&self) -> bool {
        matches!(self, Self::Integrity { .. })
    }
}
