//! Capability check used to gate the admin screens.
//!
//! This only decides what the UI shows. Data access is still enforced by the
//! gateway and by the content store on every call.

use serde::Serialize;

use crate::domain::Role;
use crate::error::AdminError;
use crate::ports::ContentService;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Access {
    pub authenticated: bool,
    pub is_admin: bool,
}

/// Resolve what the holder of `credential` may see. Failures degrade to less access.
pub async fn check_access(content: &dyn ContentService, credential: Option<&str>) -> Access {
    let Some(credential) = credential.map(str::trim).filter(|c| !c.is_empty()) else {
        return Access::default();
    };

    let identity = match content.get_identity(credential).await {
        Ok(identity) => identity,
        Err(e) => {
            tracing::debug!(error = %e, "Access check with unusable credential");
            return Access::default();
        }
    };

    let is_admin = content
        .has_role(identity.id, Role::Admin)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!(user_id = %identity.id, error = %e, "Role lookup failed during access check");
            false
        });

    Access {
        authenticated: true,
        is_admin,
    }
}

/// Figures shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub blogs: u64,
}

/// Dashboard figures for an admin caller.
///
/// Unlike [`check_access`] this gates data: a failed role lookup is `Forbidden`.
pub async fn dashboard_stats(
    content: &dyn ContentService,
    credential: Option<&str>,
) -> Result<DashboardStats, AdminError> {
    let access = check_access(content, credential).await;
    if !access.authenticated {
        return Err(AdminError::Unauthenticated);
    }
    if !access.is_admin {
        return Err(AdminError::Forbidden);
    }

    let blogs = content.count_posts().await?;
    Ok(DashboardStats { blogs })
}
