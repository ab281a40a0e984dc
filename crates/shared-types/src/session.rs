use serde::{Deserialize, Serialize};

/// Role carried by a signed-in user.
///
/// - `Candidate`: job seeker; sees the candidate dashboard.
/// - `Recruiter`: manages requisitions.
/// - `Other`: any role string this front end does not know about. Never
///   satisfies a role gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    Candidate,
    Recruiter,
    Other(String),
}

impl UserRole {
    /// Parse a role string. Only the exact lowercase names are known roles;
    /// anything else, including "Recruiter", is kept verbatim as `Other`.
    pub fn parse(s: &str) -> Self {
        match s {
            "candidate" => UserRole::Candidate,
            "recruiter" => UserRole::Recruiter,
            _ => UserRole::Other(s.to_string()),
        }
    }

    /// Lowercase string for configuration and the wire format.
    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Candidate => "candidate",
            UserRole::Recruiter => "recruiter",
            UserRole::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for UserRole {
    fn from(s: String) -> Self {
        UserRole::parse(&s)
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

/// Identity of the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthUser {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "recruiter"))]
    pub role: UserRole,
}

/// Snapshot of the session as exposed to pages.
///
/// `is_authenticated` and `user` are reported independently: a session can
/// claim to be authenticated without a user record, which role gates treat as
/// a role mismatch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Session {
    pub is_authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthUser>,
}

impl Session {
    /// A session with no signed-in user.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// An authenticated session for `user`.
    pub fn signed_in(user: AuthUser) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
        }
    }

    /// Role of the current user, if any.
    pub fn role(&self) -> Option<&UserRole> {
        self.user.as_ref().map(|u| &u.role)
    }
}
