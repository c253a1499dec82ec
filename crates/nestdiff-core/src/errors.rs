use thiserror::Error;

/// Result type alias using NestError
pub type Result<T> = std::result::Result<T, NestError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and log assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// A value of an unsupported type was met during path enumeration
    TypeCondition,
    /// A caller-side precondition (e.g. equal lengths) does not hold
    PreconditionViolation,
    /// Input has the wrong overall shape (e.g. not a mapping)
    InvalidInput,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::TypeCondition => "ERR_TYPE_CONDITION",
            ExErrorKind::PreconditionViolation => "ERR_PRECONDITION_VIOLATION",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation name, offending key) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    key: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            key: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the mapping key the error refers to
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the key context, if any
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(key) = &self.key {
            write!(f, " (key: {})", key)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for nestdiff operations
///
/// Structural mismatches found while diffing are never errors; they are
/// reported as [`crate::diff::DiffRecord`]s.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NestError {
    /// Path enumeration met a value that is not a string, sequence of
    /// strings, or mapping
    #[error(
        "Acceptable types are string, sequence of strings, mapping; got {type_name} at key '{key}': {value}"
    )]
    UnsupportedValueType {
        key: String,
        type_name: &'static str,
        value: String,
    },

    /// The list-of-mappings comparator requires equal lengths
    #[error("Lists must have equal length: first has {first_len}, second has {second_len}")]
    LengthMismatch { first_len: usize, second_len: usize },

    /// Input had the wrong overall shape
    #[error("Expected {what}, got {type_name}")]
    UnexpectedShape {
        what: &'static str,
        type_name: &'static str,
    },

    /// JSON (de)serialization failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from NestError to the canonical ExError
impl From<NestError> for ExError {
    fn from(err: NestError) -> Self {
        match err {
            NestError::UnsupportedValueType {
                key,
                type_name,
                value,
            } => ExError::new(ExErrorKind::TypeCondition)
                .with_op(nestdiff_core_types::schema::OP_ENUMERATE_PATHS)
                .with_key(key)
                .with_message(format!("unsupported {} value: {}", type_name, value)),

            NestError::LengthMismatch {
                first_len,
                second_len,
            } => ExError::new(ExErrorKind::PreconditionViolation)
                .with_op(nestdiff_core_types::schema::OP_COMPARE_MAPPING_LISTS)
                .with_message(format!(
                    "lengths differ: {} != {}",
                    first_len, second_len
                )),

            err @ NestError::UnexpectedShape { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(err.to_string())
            }

            NestError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to NestError
impl From<serde_json::Error> for NestError {
    fn from(err: serde_json::Error) -> Self {
        NestError::Serialization {
            message: err.to_string(),
        }
    }
}
