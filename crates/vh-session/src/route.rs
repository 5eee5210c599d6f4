use serde::Serialize;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";

/// Every view the application can show.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Route {
    Login,
    Register,
    Home,
    Video { id: String },
    Upload,
    Profile,
    NotFound { path: String },
}

impl Route {
    /// Maps a location path to a route. Query strings, fragments and a
    /// trailing slash are ignored; anything unrecognised is `NotFound`.
    pub fn parse(location: &str) -> Self {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

        match (path.starts_with('/'), segments.as_slice()) {
            (true, []) => Self::Home,
            (true, ["login"]) => Self::Login,
            (true, ["register"]) => Self::Register,
            (true, ["upload"]) => Self::Upload,
            (true, ["profile"]) => Self::Profile,
            (true, ["video", id]) if !id.is_empty() => Self::Video {
                id: (*id).to_string(),
            },
            _ => Self::NotFound {
                path: path.to_string(),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Login => String::from(LOGIN_PATH),
            Self::Register => String::from(REGISTER_PATH),
            Self::Home => String::from("/"),
            Self::Video { id } => format!("/video/{id}"),
            Self::Upload => String::from("/upload"),
            Self::Profile => String::from("/profile"),
            Self::NotFound { path } => path.clone(),
        }
    }

    /// Protected views require a current identity to render.
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Self::Home | Self::Video { .. } | Self::Upload | Self::Profile
        )
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
