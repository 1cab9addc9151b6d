//! Issuing company identity printed in the invoice header.

use serde::{Deserialize, Serialize};

pub const ENV_COMPANY_NAME: &str = "ORDERDESK_COMPANY_NAME";
pub const ENV_COMPANY_ADDRESS: &str = "ORDERDESK_COMPANY_ADDRESS";
pub const ENV_COMPANY_PHONE: &str = "ORDERDESK_COMPANY_PHONE";
pub const ENV_COMPANY_NTN: &str = "ORDERDESK_COMPANY_NTN";
pub const ENV_COMPANY_STRN: &str = "ORDERDESK_COMPANY_STRN";
pub const ENV_INVOICE_FOOTER: &str = "ORDERDESK_INVOICE_FOOTER";

/// Static header and footer text of the invoice. Never derived from an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub address: String,
    pub phone: String,
    /// National tax number.
    pub ntn: String,
    /// Sales tax registration number.
    pub strn: String,
    pub footer: String,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            name: "Crescent Trading Company".to_string(),
            address: "14-B Industrial Estate, Kot Lakhpat, Lahore".to_string(),
            phone: "042-35210000".to_string(),
            ntn: "4219873-6".to_string(),
            strn: "03-00-3900-112-74".to_string(),
            footer: "This is a computer generated invoice and needs no signature.".to_string(),
        }
    }
}

impl CompanyProfile {
    /// Defaults overridden by any `ORDERDESK_*` variable that is set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let pick = |key: &str, fallback: String| lookup(key).unwrap_or(fallback);

        Self {
            name: pick(ENV_COMPANY_NAME, defaults.name),
            address: pick(ENV_COMPANY_ADDRESS, defaults.address),
            phone: pick(ENV_COMPANY_PHONE, defaults.phone),
            ntn: pick(ENV_COMPANY_NTN, defaults.ntn),
            strn: pick(ENV_COMPANY_STRN, defaults.strn),
            footer: pick(ENV_INVOICE_FOOTER, defaults.footer),
        }
    }
}
