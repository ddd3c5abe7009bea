use thiserror::Error;

/// Result type alias using ContrastError
pub type Result<T> = std::result::Result<T, ContrastError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure in contrast maps to one of these kinds, and each kind has a
/// stable code usable in logs, tests and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Model construction (ConfigError class)
    InvalidIndent,
    MissingLabel,
    MissingTitle,
    MissingContractId,
    IndexMismatch,

    // Diff input
    InvalidInput,

    // Integration/IO
    Io,
    Serialization,
    InvalidConfig,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidIndent => "ERR_INVALID_INDENT",
            ExErrorKind::MissingLabel => "ERR_MISSING_LABEL",
            ExErrorKind::MissingTitle => "ERR_MISSING_TITLE",
            ExErrorKind::MissingContractId => "ERR_MISSING_CONTRACT_ID",
            ExErrorKind::IndexMismatch => "ERR_INDEX_MISMATCH",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
        }
    }

    /// True for construction-time validation failures of the report model
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            ExErrorKind::InvalidIndent
                | ExErrorKind::MissingLabel
                | ExErrorKind::MissingTitle
                | ExErrorKind::MissingContractId
                | ExErrorKind::IndexMismatch
        )
    }
}

/// Canonical structured error type
///
/// Carries the classification plus enough context (operation, offending
/// label or path) to be logged without re-matching on [`ContrastError`].
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    label: Option<String>,
    path: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            label: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the label of the offending row or section
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Add the tree path of the offending node
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

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
        if let Some(label) = &self.label {
            write!(f, " (label: {})", label)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for report construction, diff loading and output
#[derive(Error, Debug)]
pub enum ContrastError {
    // ===== Model construction =====
    /// Row indent below zero
    #[error("Row '{label}' has negative indent {indent}")]
    NegativeIndent { label: String, indent: i64 },

    /// Row indent too large to store
    #[error("Row '{label}' has indent {indent} above the maximum {max}", max = u32::MAX)]
    IndentOutOfRange { label: String, indent: i64 },

    /// Row label is empty or whitespace
    #[error("Row label cannot be empty (indent {indent})")]
    EmptyLabel { indent: i64 },

    /// Section or index entry title is empty or whitespace
    #[error("{entity} title cannot be empty")]
    EmptyTitle { entity: &'static str },

    /// Old or new contract identifier is empty
    #[error("The {side} contract identifier cannot be empty")]
    EmptyContractId { side: &'static str },

    /// Index and body have a different number of entries at some level
    #[error("Index has {index_len} entries but body has {body_len} at {path}")]
    IndexCountMismatch {
        path: String,
        index_len: usize,
        body_len: usize,
    },

    /// Index entry title differs from the body section at the same position
    #[error("Index entry '{index_title}' does not match section '{section_title}' at {path}")]
    IndexTitleMismatch {
        path: String,
        index_title: String,
        section_title: String,
    },

    // ===== Diff input =====
    /// Contract element JSON could not be turned into an element tree
    #[error("Invalid contract element at {path}: {reason}")]
    InvalidElement { path: String, reason: String },

    // ===== Integration =====
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl ContrastError {
    /// True when the failure is a construction-time validation error of the model
    pub fn is_config_error(&self) -> bool {
        ExErrorKind::from(self).is_config()
    }
}

impl From<&ContrastError> for ExErrorKind {
    fn from(err: &ContrastError) -> Self {
        match err {
            ContrastError::NegativeIndent { .. } | ContrastError::IndentOutOfRange { .. } => {
                ExErrorKind::InvalidIndent
            }
            ContrastError::EmptyLabel { .. } => ExErrorKind::MissingLabel,
            ContrastError::EmptyTitle { .. } => ExErrorKind::MissingTitle,
            ContrastError::EmptyContractId { .. } => ExErrorKind::MissingContractId,
            ContrastError::IndexCountMismatch { .. } | ContrastError::IndexTitleMismatch { .. } => {
                ExErrorKind::IndexMismatch
            }
            ContrastError::InvalidElement { .. } => ExErrorKind::InvalidInput,
            ContrastError::Io(_) => ExErrorKind::Io,
            ContrastError::Serialization(_) => ExErrorKind::Serialization,
            ContrastError::Config(_) => ExErrorKind::InvalidConfig,
        }
    }
}

impl From<ContrastError> for ExError {
    fn from(err: ContrastError) -> Self {
        ExError::from(&err)
    }
}

impl From<&ContrastError> for ExError {
    fn from(err: &ContrastError) -> Self {
        let ex = ExError::new(ExErrorKind::from(err)).with_message(err.to_string());
        match err {
            ContrastError::NegativeIndent { label, .. }
            | ContrastError::IndentOutOfRange { label, .. } => ex.with_label(label.clone()),
            ContrastError::IndexCountMismatch { path, .. }
            | ContrastError::IndexTitleMismatch { path, .. }
            | ContrastError::InvalidElement { path, .. } => ex.with_path(path.clone()),
            _ => ex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_indent_is_config_error() {
        let err = ContrastError::NegativeIndent {
            label: "size".to_string(),
            indent: -1,
        };
        assert!(err.is_config_error());

        let ex: ExError = err.into();
        assert_eq!(ex.kind(), ExErrorKind::InvalidIndent);
        assert_eq!(ex.code(), "ERR_INVALID_INDENT");
        assert_eq!(ex.label(), Some("size"));
    }

    #[test]
    fn test_indent_out_of_range_is_invalid_indent() {
        let err = ContrastError::IndentOutOfRange {
            label: "depth".to_string(),
            indent: i64::from(u32::MAX) + 1,
        };
        assert!(err.is_config_error());
        assert!(err.to_string().contains("above the maximum 4294967295"));

        let ex: ExError = err.into();
        assert_eq!(ex.code(), "ERR_INVALID_INDENT");
        assert_eq!(ex.label(), Some("depth"));
    }

    #[test]
    fn test_io_is_not_config_error() {
        let err = ContrastError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(!err.is_config_error());
        assert_eq!(ExErrorKind::from(&err), ExErrorKind::Io);
    }

    #[test]
    fn test_display_includes_code_and_path() {
        let err = ContrastError::IndexTitleMismatch {
            path: "sections[1]".to_string(),
            index_title: "Types".to_string(),
            section_title: "Commands".to_string(),
        };
        let ex: ExError = (&err).into();
        let rendered = ex.to_string();
        assert!(rendered.starts_with("[ERR_INDEX_MISMATCH]"));
        assert!(rendered.contains("(path: sections[1])"));
    }
}
