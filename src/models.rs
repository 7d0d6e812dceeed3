use serde::Deserialize;

/// GitHub user as returned by `GET /users/{username}`.
///
/// Only the fields the card renders are kept; everything else in the
/// response is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub avatar_url: String,
    pub followers: u64,
    /// Endpoint for this user's repositories, reported by the API itself.
    pub repos_url: String,
}

/// Repository summary as returned by the profile's `repos_url`.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    pub html_url: String,
    pub stargazers_count: u64,
}
