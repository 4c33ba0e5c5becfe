//! Client handles for every service. Cloneable, cheap, and the only way to
//! reach a service's state.

/// Generate client methods with oneshot channel boilerplate and automatic tracing.
/// Channel failures map to the error type's `ActorCommunicationError` variant.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

mod directory_client;
mod form_client;
mod local_users_client;

pub use directory_client::DirectoryClient;
pub use form_client::FormClient;
pub use local_users_client::LocalUsersClient;
