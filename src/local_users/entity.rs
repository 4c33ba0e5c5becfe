use crate::actor_framework::Entity;
use crate::domain::{LocalUser, NewUser, UserId};

impl Entity for LocalUser {
    type Id = UserId;
    type CreatePayload = NewUser;

    fn id(&self) -> &UserId {
        &self.id
    }

    /// Only local ids may be minted by the local store.
    fn from_create(id: UserId, payload: NewUser) -> Result<Self, String> {
        if !id.is_local() {
            return Err(format!("Refusing non-local id: {}", id));
        }
        Ok(LocalUser::new(id, payload))
    }
}
