//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Inbound payloads that can
//! be partially filled by the backend use `#[serde(default)]` so missing
//! fields decode as zero/absent instead of failing the whole response.
//! Dashboard figures go further: an explicit `null` also reads as zero, and
//! counts accept any JSON number (`5.0` is `5`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Authenticated identity as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Tenant context the session is scoped to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Backend organization identifier.
    pub id: String,
    /// Legal or trading name shown in the shell header.
    pub name: String,
    /// GST identification number, when registered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gstin: Option<String>,
}

/// Unvalidated session data as handed over by a login response.
///
/// Every field is optional on the wire; [`crate::state::session::Session`]
/// decides which combinations are acceptable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPayload {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub organization: Option<Organization>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Body of `GET /api/dashboard/stats`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    #[serde(deserialize_with = "lenient_count")]
    pub total_invoices: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub total_clients: u64,
    /// Outstanding receivables in rupees.
    #[serde(deserialize_with = "lenient_amount")]
    pub outstanding_amount: f64,
    #[serde(deserialize_with = "lenient_count")]
    pub overdue_invoices: u64,
}

/// `null` → 0; integral or fractional numbers truncate toward zero; negative
/// and non-finite values clamp to 0.
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(0);
    };
    if let Some(n) = number.as_u64() {
        return Ok(n);
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = number.as_f64().filter(|f| f.is_finite() && *f > 0.0).map_or(0, |f| f as u64);
    Ok(count)
}

/// `null` → 0.0.
fn lenient_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
