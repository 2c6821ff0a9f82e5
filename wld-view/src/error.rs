use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum ViewError {
    /// No record carried a parseable date.
    #[error("no loss record has a parseable date")]
    EmptyInput,
}
