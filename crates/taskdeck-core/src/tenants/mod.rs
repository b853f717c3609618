//! Tenants (registered organizations) as seen by the admin list.

use chrono::DateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Account status of a tenant.
///
/// Only `active` is distinguished; any other value is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TenantStatus {
    Active,
    Other(String),
}

impl TenantStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TenantStatus::Active => "active",
            TenantStatus::Other(s) => s,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, TenantStatus::Active)
    }
}

impl From<&str> for TenantStatus {
    fn from(s: &str) -> Self {
        if s == "active" {
            TenantStatus::Active
        } else {
            TenantStatus::Other(s.to_string())
        }
    }
}

impl std::fmt::Display for TenantStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TenantStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TenantStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(TenantStatus::from(raw.as_str()))
    }
}

/// A tenant as returned by the tenants collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    #[serde(deserialize_with = "crate::projects::types::deserialize_id")]
    pub id: String,
    pub name: String,
    pub subdomain: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subscription_plan: String,
    pub status: TenantStatus,
    pub created_at: String,
}

impl Tenant {
    /// Login link for this tenant: `{origin}/login?subdomain={subdomain}`.
    pub fn login_url(&self, origin: &str) -> String {
        login_url(origin, &self.subdomain)
    }

    /// Registration date as `YYYY-MM-DD`, or the raw timestamp if it does
    /// not parse as RFC 3339.
    pub fn registered_date(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.created_at) {
            Ok(ts) => ts.date_naive().format("%Y-%m-%d").to_string(),
            Err(_) => self.created_at.clone(),
        }
    }
}

/// A `null` plan renders as an empty cell, same as a missing one.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Build a tenant login link. A trailing slash on `origin` is dropped.
pub fn login_url(origin: &str, subdomain: &str) -> String {
    format!(
        "{}/login?subdomain={}",
        origin.trim_end_matches('/'),
        subdomain
    )
}
