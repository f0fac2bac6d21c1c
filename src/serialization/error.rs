use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("field '{field}': expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("field '{field}': invalid {expected} value '{value}'")]
    InvalidValue {
        field: String,
        expected: &'static str,
        value: String,
    },
    #[error("expected the payload to be an object, found {0}")]
    NotAnObject(&'static str),
    #[error("json deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DecodeError {
    pub(crate) fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        DecodeError::TypeMismatch {
            field: String::new(),
            expected,
            found,
        }
    }

    pub(crate) fn invalid_value(expected: &'static str, value: impl Into<String>) -> Self {
        DecodeError::InvalidValue {
            field: String::new(),
            expected,
            value: value.into(),
        }
    }

    /// Prefixes the path of the offending field with the wire name of its parent.
    pub fn at(self, name: &str) -> Self {
        self.prefixed(name)
    }

    pub fn at_index(self, index: usize) -> Self {
        self.prefixed(&format!("[{}]", index))
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            DecodeError::TypeMismatch { field, .. } | DecodeError::InvalidValue { field, .. } => Some(field),
            DecodeError::NotAnObject(_) | DecodeError::Json(_) => None,
        }
    }

    fn prefixed(self, segment: &str) -> Self {
        match self {
            DecodeError::TypeMismatch { field, expected, found } => DecodeError::TypeMismatch {
                field: join_path(segment, &field),
                expected,
                found,
            },
            DecodeError::InvalidValue { field, expected, value } => DecodeError::InvalidValue {
                field: join_path(segment, &field),
                expected,
                value,
            },
            other => other,
        }
    }
}

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("field '{field}' is written more than once")]
    InvariantViolation { field: String },
    #[error("field '{field}': {value} cannot be represented on the wire")]
    NonFiniteNumber { field: String, value: f64 },
    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EncodeError {
    pub fn at(self, name: &str) -> Self {
        self.prefixed(name)
    }

    pub fn at_index(self, index: usize) -> Self {
        self.prefixed(&format!("[{}]", index))
    }

    fn prefixed(self, segment: &str) -> Self {
        match self {
            EncodeError::InvariantViolation { field } => EncodeError::InvariantViolation {
                field: join_path(segment, &field),
            },
            EncodeError::NonFiniteNumber { field, value } => EncodeError::NonFiniteNumber {
                field: join_path(segment, &field),
                value,
            },
            other => other,
        }
    }
}

fn join_path(segment: &str, rest: &str) -> String {
    if rest.is_empty() {
        segment.to_owned()
    } else if rest.starts_with('[') {
        format!("{}{}", segment, rest)
    } else {
        format!("{}.{}", segment, rest)
    }
}
