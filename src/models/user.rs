use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student,
    Admin,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UserRole::Student => "student",
            UserRole::Admin => "admin",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for UserRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(UserRole::Student),
            "admin" => Ok(UserRole::Admin),
            _ => Err(anyhow::anyhow!("Unknown role: {s}")),
        }
    }
}

/// Profile snapshot cached at login/registration time. The role is kept as the
/// raw server string so an unrecognized value degrades to "no role" instead of
/// invalidating the whole stored session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: i64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserProfile {
    pub fn role(&self) -> Option<UserRole> {
        self.role.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(f), Some(l)) => format!("{f} {l}"),
            (Some(f), None) => f.clone(),
            (None, Some(l)) => l.clone(),
            (None, None) => self
                .email
                .clone()
                .unwrap_or_else(|| format!("user #{}", self.id)),
        }
    }
}

// Request/Response DTOs
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub date_of_birth: String,
    pub address: String,
    /// Only sent when registering an admin account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_secret: Option<String>,
}

/// Successful login/registration response. The profile is held as a raw JSON
/// value so a malformed `user` object degrades to an absent profile rather
/// than failing the whole response.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub access: String,
    #[serde(default)]
    pub refresh: String,
    #[serde(default)]
    pub user: Option<serde_json::Value>,
}

impl AuthResponse {
    pub fn profile(&self) -> Option<UserProfile> {
        self.user
            .clone()
            .and_then(|v| serde_json::from_value(v).ok())
    }
}
