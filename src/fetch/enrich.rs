use std::ops::RangeInclusive;

use rand::Rng;

use super::RawUser;
use crate::domain::{RemoteUser, UserId, FALLBACK_COUNTRY, FALLBACK_DESCRIPTION, FALLBACK_JOB};

/// Range the placeholder age of a fetched user is drawn from.
pub const ESTIMATED_AGE_RANGE: RangeInclusive<u8> = 20..=59;

/// Maps a fetched listing for display, drawing ages from the thread RNG.
pub fn enrich_users(raw: Vec<RawUser>) -> Vec<RemoteUser> {
    let mut rng = rand::thread_rng();
    enrich_users_with(raw, &mut rng)
}

/// Maps a fetched listing for display with a caller-supplied RNG.
pub fn enrich_users_with<R: Rng>(raw: Vec<RawUser>, rng: &mut R) -> Vec<RemoteUser> {
    raw.into_iter().map(|user| enrich_user(user, rng)).collect()
}

fn enrich_user<R: Rng>(raw: RawUser, rng: &mut R) -> RemoteUser {
    let company = raw.company.unwrap_or_default();
    let address = raw.address.unwrap_or_default();

    RemoteUser {
        id: UserId::Remote(raw.id),
        name: raw.name,
        job: non_empty_or(company.name, FALLBACK_JOB),
        country: non_empty_or(address.country, FALLBACK_COUNTRY),
        estimated_age: rng.gen_range(ESTIMATED_AGE_RANGE),
        description: non_empty_or(company.catch_phrase, FALLBACK_DESCRIPTION),
        email: raw.email,
        phone: raw.phone,
    }
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
