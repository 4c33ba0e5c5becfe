use super::UserId;

/// Job shown when the remote record carries no company name.
pub const FALLBACK_JOB: &str = "Software Developer";
/// Country shown when the remote record carries no address country.
pub const FALLBACK_COUNTRY: &str = "USA";
/// Description shown when the remote record carries no company catchphrase.
pub const FALLBACK_DESCRIPTION: &str = "Professional user";

/// A user fetched from the listing service and enriched for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUser {
    pub id: UserId,
    pub name: String,
    pub job: String,
    pub country: String,
    /// Placeholder drawn at random from 20..=59 when the record is mapped.
    /// The service does not report ages.
    pub estimated_age: u8,
    pub description: String,
    pub email: String,
    pub phone: String,
}
