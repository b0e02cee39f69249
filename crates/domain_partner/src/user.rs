//! Users, roles, and claim visibility scoping

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{PartnerServiceId, UserId};

use crate::error::PartnerError;

/// Role of a portal user
///
/// Partner-side roles act for exactly one partner service; SSH roles are
/// the central authority reviewing claims across all partners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Partner staff: files and revises claims for their own partner
    Partner,
    /// Partner administrator: Partner plus customer/user management
    PartnerAdmin,
    /// Central service staff: reviews claims across all partners
    Ssh,
    /// Central administrator: Ssh plus partner management
    SshAdmin,
}

impl UserRole {
    /// Stable token used in JWT claims and the database
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Partner => "partner",
            UserRole::PartnerAdmin => "partner_admin",
            UserRole::Ssh => "ssh",
            UserRole::SshAdmin => "ssh_admin",
        }
    }

    /// True for roles acting on behalf of a single partner service
    pub fn is_partner(&self) -> bool {
        matches!(self, UserRole::Partner | UserRole::PartnerAdmin)
    }

    /// Claims from every partner are visible to central roles
    pub fn can_view_all_claims(&self) -> bool {
        matches!(self, UserRole::Ssh | UserRole::SshAdmin)
    }

    /// Only partner roles file claims
    pub fn can_create_claims(&self) -> bool {
        self.is_partner()
    }

    /// Only central roles decide review outcomes
    pub fn can_review_claims(&self) -> bool {
        matches!(self, UserRole::Ssh | UserRole::SshAdmin)
    }

    /// Partner service records are managed centrally
    pub fn can_manage_partners(&self) -> bool {
        matches!(self, UserRole::SshAdmin)
    }

    /// The priced catalog is maintained centrally
    pub fn can_manage_catalog(&self) -> bool {
        matches!(self, UserRole::SshAdmin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = PartnerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "partner" => Ok(UserRole::Partner),
            "partner_admin" => Ok(UserRole::PartnerAdmin),
            "ssh" => Ok(UserRole::Ssh),
            "ssh_admin" => Ok(UserRole::SshAdmin),
            other => Err(PartnerError::UnknownRole(other.to_string())),
        }
    }
}

/// A portal user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub role: UserRole,
    /// Required for partner roles, absent for central roles
    pub partner_service_id: Option<PartnerServiceId>,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        role: UserRole,
        partner_service_id: Option<PartnerServiceId>,
    ) -> Self {
        Self {
            id: UserId::new_v7(),
            username: username.into(),
            role,
            partner_service_id,
        }
    }

    /// The partner service this user acts for
    ///
    /// Fails for a partner-role user with no affiliation; central roles
    /// have none by design.
    pub fn partner_affiliation(&self) -> Result<Option<PartnerServiceId>, PartnerError> {
        if self.role.is_partner() && self.partner_service_id.is_none() {
            return Err(PartnerError::MissingPartnerAffiliation(
                self.username.clone(),
            ));
        }
        Ok(self.partner_service_id)
    }
}

/// Row filter applied to claim queries, derived from the requesting user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimScope {
    /// Only claims owned by this partner service
    Partner(PartnerServiceId),
    /// Claims across all partners
    All,
}

impl ClaimScope {
    /// Derives the scope the user is allowed to query with
    pub fn for_user(user: &User) -> Result<Self, PartnerError> {
        if user.role.can_view_all_claims() {
            return Ok(ClaimScope::All);
        }
        match user.partner_affiliation()? {
            Some(partner_id) => Ok(ClaimScope::Partner(partner_id)),
            None => Err(PartnerError::MissingPartnerAffiliation(
                user.username.clone(),
            )),
        }
    }

    /// True if a claim owned by `owner` is visible under this scope
    pub fn allows(&self, owner: PartnerServiceId) -> bool {
        match self {
            ClaimScope::All => true,
            ClaimScope::Partner(own) => *own == owner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partner_roles_are_scoped() {
        let partner_id = PartnerServiceId::new_v7();
        let user = User::new("demir.usta", UserRole::Partner, Some(partner_id));

        let scope = ClaimScope::for_user(&user).unwrap();
        assert_eq!(scope, ClaimScope::Partner(partner_id));
        assert!(scope.allows(partner_id));
        assert!(!scope.allows(PartnerServiceId::new_v7()));
    }

    #[test]
    fn test_central_roles_see_everything() {
        let user = User::new("reviewer", UserRole::Ssh, None);

        let scope = ClaimScope::for_user(&user).unwrap();
        assert_eq!(scope, ClaimScope::All);
        assert!(scope.allows(PartnerServiceId::new_v7()));
    }

    #[test]
    fn test_partner_without_affiliation_has_no_scope() {
        let user = User::new("orphan", UserRole::PartnerAdmin, None);

        let result = ClaimScope::for_user(&user);
        assert!(matches!(
            result,
            Err(PartnerError::MissingPartnerAffiliation(_))
        ));
    }

    #[test]
    fn test_role_permissions() {
        assert!(UserRole::Partner.can_create_claims());
        assert!(UserRole::PartnerAdmin.can_create_claims());
        assert!(!UserRole::Ssh.can_create_claims());

        assert!(UserRole::Ssh.can_review_claims());
        assert!(UserRole::SshAdmin.can_review_claims());
        assert!(!UserRole::Partner.can_review_claims());

        assert!(UserRole::SshAdmin.can_manage_partners());
        assert!(!UserRole::Ssh.can_manage_partners());
    }

    #[test]
    fn test_role_round_trips_through_str() {
        for role in [
            UserRole::Partner,
            UserRole::PartnerAdmin,
            UserRole::Ssh,
            UserRole::SshAdmin,
        ] {
            let parsed: UserRole = role.as_str().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }
}
