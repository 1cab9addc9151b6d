use thiserror::Error;

/// Errors surfaced while producing or handing off an invoice.
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// Template rendering error.
    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    /// The print surface refused the document.
    #[error("print surface error: {0}")]
    Print(#[source] Box<dyn std::error::Error + Send + Sync>),
}
