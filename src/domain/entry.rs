use super::{LocalUser, RemoteUser, UserId};

/// One row of the display list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryEntry {
    Remote(RemoteUser),
    Local(LocalUser),
}

impl DirectoryEntry {
    pub fn id(&self) -> UserId {
        match self {
            Self::Remote(user) => user.id,
            Self::Local(user) => user.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Remote(user) => &user.name,
            Self::Local(user) => &user.name,
        }
    }

    pub fn job(&self) -> &str {
        match self {
            Self::Remote(user) => &user.job,
            Self::Local(user) => &user.job,
        }
    }

    pub fn country(&self) -> &str {
        match self {
            Self::Remote(user) => &user.country,
            Self::Local(user) => &user.country,
        }
    }

    pub fn age(&self) -> u8 {
        match self {
            Self::Remote(user) => user.estimated_age,
            Self::Local(user) => user.age,
        }
    }

    /// Whether [`age`](Self::age) is a generated placeholder.
    pub fn age_is_estimated(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Remote(user) => &user.description,
            Self::Local(user) => &user.description,
        }
    }

    /// Uppercased first character of the name, used as the card avatar.
    pub fn initial(&self) -> Option<char> {
        self.name().chars().next().map(|c| c.to_uppercase().next().unwrap_or(c))
    }

    /// Case-insensitive substring match against the name. An empty term matches.
    pub fn matches(&self, term: &str) -> bool {
        term.is_empty() || self.name().to_lowercase().contains(&term.to_lowercase())
    }
}
