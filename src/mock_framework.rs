//! # Mock Framework
//!
//! Utilities for testing components against a resource store they do not own.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_retain`] to assert behavior.

use crate::actor_framework::{Entity, FrameworkError, Keep, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

/// Creates a mock client and a receiver for asserting requests.
///
/// The component under test talks to a channel the test controls, so the test
/// decides what the store answers and can prove that nothing was sent at all.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreatePayload, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Retain request
pub async fn expect_retain<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Keep<T>, oneshot::Sender<Result<usize, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Retain { keep, respond_to }) => Some((keep, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::LocalUsersClient;
    use crate::domain::{LocalUser, NewUser, UserId};

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client::<LocalUser>(10);
        let client = LocalUsersClient::new(inner);

        let create_task = tokio::spawn(async move {
            let user = NewUser {
                name: "Test".to_string(),
                job: "Tester".to_string(),
                country: "NZ".to_string(),
                age: 30,
                description: "Tests things".to_string(),
            };
            client.add_user(user).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.name, "Test");
        responder.send(Ok(UserId::Local(1))).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(UserId::Local(1)));
    }
}
