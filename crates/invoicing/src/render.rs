//! HTML invoice rendering.

use askama::Template;

use orderdesk_sales::Order;

use crate::company::CompanyProfile;
use crate::document::{COLUMNS, InvoiceDocument};
use crate::error::InvoiceError;

/// Self-contained invoice page: inline CSS, A4 print layout.
#[derive(Template)]
#[template(path = "invoice.html")]
struct InvoiceTemplate<'a> {
    company: &'a CompanyProfile,
    doc: &'a InvoiceDocument,
    columns: &'a [&'a str],
}

/// Where a rendered invoice goes to be printed (browser print dialog,
/// spooler, PDF converter).
pub trait PrintSurface {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Hand over one complete document.
    fn submit(&mut self, title: &str, html: &str) -> Result<(), Self::Error>;
}

/// Renders orders into printable HTML invoices.
///
/// Rendering is a pure projection: no clock, no randomness, no IO. The same
/// order always yields byte-identical output.
#[derive(Debug, Clone, Default)]
pub struct InvoiceRenderer {
    company: CompanyProfile,
}

impl InvoiceRenderer {
    pub fn new(company: CompanyProfile) -> Self {
        Self { company }
    }

    pub fn company(&self) -> &CompanyProfile {
        &self.company
    }

    /// Render `order` as a complete HTML document.
    pub fn render(&self, order: &Order) -> Result<String, InvoiceError> {
        self.render_document(&InvoiceDocument::from_order(order))
    }

    /// Render an already-built projection.
    pub fn render_document(&self, doc: &InvoiceDocument) -> Result<String, InvoiceError> {
        let html = InvoiceTemplate {
            company: &self.company,
            doc,
            columns: &COLUMNS,
        }
        .render()?;

        tracing::debug!(
            invoice = %doc.details.invoice_number,
            rows = doc.rows.len(),
            bytes = html.len(),
            "invoice rendered"
        );
        Ok(html)
    }

    /// Render `order` and submit it to `surface`.
    pub fn print<P: PrintSurface>(&self, order: &Order, surface: &mut P) -> Result<(), InvoiceError> {
        let doc = InvoiceDocument::from_order(order);
        let html = self.render_document(&doc)?;
        let title = format!("Invoice {}", doc.details.invoice_number);
        surface
            .submit(&title, &html)
            .map_err(|e| InvoiceError::Print(Box::new(e)))
    }
}
