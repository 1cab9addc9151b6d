//! Invoicing module.
//!
//! Turns an order into a printable commercial invoice: a fully formatted
//! projection ([`InvoiceDocument`]) rendered to a self-contained HTML page.
//! Pure: the only side effect is the optional hand-off to a [`PrintSurface`].

pub mod company;
pub mod document;
pub mod error;
pub mod render;

pub use company::CompanyProfile;
pub use document::{
    COLUMNS, InvoiceDetails, InvoiceDocument, InvoiceRow, InvoiceSummary, format_amount,
};
pub use error::InvoiceError;
pub use render::{InvoiceRenderer, PrintSurface};
