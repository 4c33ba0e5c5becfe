use std::fmt;

/// Identity of a directory record.
///
/// The source is part of the identity, so a locally added user and a fetched
/// user can never be mistaken for one another even when their numbers match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UserId {
    /// Assigned by the local user store at creation time.
    Local(u64),
    /// Assigned by the remote listing service.
    Remote(u64),
}

impl UserId {
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(id) => write!(f, "local-{}", id),
            Self::Remote(id) => write!(f, "remote-{}", id),
        }
    }
}

/// Payload emitted by a successful form submission.
///
/// Text fields hold the values exactly as typed; validation only guarantees
/// they are non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub job: String,
    pub country: String,
    pub age: u8,
    pub description: String,
}

/// A user created through the form during this session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalUser {
    pub id: UserId,
    pub name: String,
    pub job: String,
    pub country: String,
    pub age: u8,
    pub description: String,
}

impl LocalUser {
    /// Attaches an identifier to a validated payload.
    pub fn new(id: UserId, user: NewUser) -> Self {
        Self {
            id,
            name: user.name,
            job: user.job,
            country: user.country,
            age: user.age,
            description: user.description,
        }
    }
}
