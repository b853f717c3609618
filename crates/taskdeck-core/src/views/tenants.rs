//! Tenants view: a read-only table of registered organizations.

use super::collection::{CollectionView, LoadOutcome};
use crate::api::WorkspaceApi;
use crate::config::TenantsConfig;
use crate::notify::Notifier;
use crate::tenants::Tenant;

pub const TITLE: &str = "Registered Organizations (Tenants)";
pub const LOADING_LABEL: &str = "Loading Tenants...";
pub const LOAD_FAILED: &str = "Failed to load tenants. Are you Super Admin?";
pub const COLUMNS: [&str; 5] = [
    "Organization Name",
    "Subdomain",
    "Plan",
    "Admin Status",
    "Registered Date",
];

/// Display values derived for one tenant row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TenantRow {
    pub name: String,
    pub subdomain: String,
    pub login_url: String,
    pub plan: String,
    pub plan_badge_class: &'static str,
    pub status: String,
    pub status_badge_class: &'static str,
    pub registered: String,
}

impl TenantRow {
    pub fn new(tenant: &Tenant, login_origin: &str) -> Self {
        Self {
            name: tenant.name.clone(),
            subdomain: tenant.subdomain.clone(),
            login_url: tenant.login_url(login_origin),
            plan: tenant.subscription_plan.clone(),
            plan_badge_class: "active",
            status: tenant.status.to_string(),
            status_badge_class: status_badge_class(tenant),
            registered: tenant.registered_date(),
        }
    }
}

/// `active` tenants get the `completed` badge, everything else `archived`.
pub fn status_badge_class(tenant: &Tenant) -> &'static str {
    if tenant.status.is_active() {
        "completed"
    } else {
        "archived"
    }
}

pub struct TenantsView<A, N> {
    api: A,
    notifier: N,
    tenants: CollectionView<Tenant>,
    page_size: u32,
    login_origin: String,
}

impl<A: WorkspaceApi, N: Notifier> TenantsView<A, N> {
    pub fn new(api: A, notifier: N, config: &TenantsConfig) -> Self {
        Self {
            api,
            notifier,
            tenants: CollectionView::new("tenants", LOAD_FAILED),
            page_size: config.page_size,
            login_origin: config.login_origin.clone(),
        }
    }

    /// Fetch one page of tenants.
    pub async fn load(&mut self) -> LoadOutcome {
        self.tenants
            .load(self.api.list_tenants(self.page_size), &self.notifier)
            .await
    }

    pub fn tenants(&self) -> &[Tenant] {
        self.tenants.items()
    }

    pub fn rows(&self) -> Vec<TenantRow> {
        self.tenants
            .items()
            .iter()
            .map(|t| TenantRow::new(t, &self.login_origin))
            .collect()
    }

    pub fn is_loading(&self) -> bool {
        self.tenants.is_loading()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn api(&self) -> &A {
        &self.api
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{Notification, RecordingNotifier};
    use crate::views::fake::{Call, ScriptedApi, server_error, tenant};

    fn view(api: ScriptedApi) -> TenantsView<ScriptedApi, RecordingNotifier> {
        TenantsView::new(api, RecordingNotifier::new(), &TenantsConfig::default())
    }

    #[tokio::test]
    async fn test_load_requests_fixed_page_size() {
        let mut v = view(ScriptedApi::new().tenants(Ok(vec![tenant("Acme", "acme", "active")])));

        assert_eq!(v.load().await, LoadOutcome::Loaded(1));
        assert_eq!(v.api().calls(), vec![Call::ListTenants(100)]);
        assert!(!v.is_loading());
    }

    #[tokio::test]
    async fn test_custom_page_size() {
        let config = TenantsConfig {
            page_size: 25,
            ..TenantsConfig::default()
        };
        let mut v = TenantsView::new(
            ScriptedApi::new().tenants(Ok(vec![])),
            RecordingNotifier::new(),
            &config,
        );
        v.load().await;
        assert_eq!(v.api().calls(), vec![Call::ListTenants(25)]);
    }

    #[tokio::test]
    async fn test_load_failure_notifies_super_admin_hint() {
        let mut v = view(ScriptedApi::new().tenants(Err(server_error(
            "/tenants?limit=100",
            Some("Forbidden"),
        ))));

        assert_eq!(v.load().await, LoadOutcome::Failed);
        assert!(!v.is_loading());
        assert!(v.rows().is_empty());
        assert_eq!(
            v.notifier().notifications(),
            vec![Notification::error(LOAD_FAILED)]
        );
    }

    #[tokio::test]
    async fn test_rows() {
        let mut v = view(ScriptedApi::new().tenants(Ok(vec![
            tenant("Acme", "acme", "active"),
            tenant("Globex", "globex", "suspended"),
        ])));
        v.load().await;

        let rows = v.rows();
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].login_url, "http://localhost:3000/login?subdomain=acme");
        assert_eq!(rows[0].status_badge_class, "completed");
        assert_eq!(rows[0].plan_badge_class, "active");
        assert_eq!(rows[0].registered, "2024-05-06");

        assert_eq!(rows[1].status, "suspended");
        assert_eq!(rows[1].status_badge_class, "archived");
    }
}
