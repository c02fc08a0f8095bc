use thiserror::Error;

/// Why a message could not be turned into a record.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Nothing but numbers or punctuation was sent.
    #[error("Không tìm thấy họ tên! Vui lòng nhập lại.")]
    NameNotFound,

    #[error("{0}")]
    Store(anyhow::Error),
}

impl ProcessError {
    /// Whether the user can fix this by resending the input.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::NameNotFound)
    }
}
