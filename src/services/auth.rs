//! Login, registration and logout orchestration.
//!
//! These are the only paths that mutate the credential store. Both success
//! paths persist the session first and then resolve the landing destination
//! from the freshly stored state, so what the router sees is exactly what
//! later commands will read back.

use tracing::info;

use crate::api::ApiClient;
use crate::models::user::{LoginRequest, RegisterRequest};
use crate::routing::{self, Route};
use crate::session::{self, Session, SessionState};
use crate::session::store::CredentialStore;

pub struct AuthService;

impl AuthService {
    pub async fn login(
        api: &ApiClient,
        email: &str,
        password: &str,
    ) -> anyhow::Result<(SessionState, Route)> {
        let auth = api
            .login(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;
        Self::establish(api, auth)
    }

    pub async fn register(
        api: &ApiClient,
        request: RegisterRequest,
    ) -> anyhow::Result<(SessionState, Route)> {
        let auth = api.register(&request).await?;
        Self::establish(api, auth)
    }

    fn establish(
        api: &ApiClient,
        auth: crate::models::user::AuthResponse,
    ) -> anyhow::Result<(SessionState, Route)> {
        let session = Session {
            access_token: auth.access.clone(),
            refresh_token: auth.refresh.clone(),
            user: auth.profile(),
        };
        api.store().set(&session)?;
        let state = session::resolve(api.store());
        let route = routing::destination_for(state.role());
        info!("session established, landing on {}", route.describe());
        Ok((state, route))
    }

    /// Clear the store in full and send the user to the login entry point.
    pub fn logout(store: &CredentialStore) -> anyhow::Result<Route> {
        store.clear()?;
        info!("session cleared");
        Ok(Route::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logout_clears_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("session.json"));
        store
            .set(&Session {
                access_token: "tok".into(),
                refresh_token: "ref".into(),
                user: None,
            })
            .unwrap();
        let route = AuthService::logout(&store).unwrap();
        assert_eq!(route, Route::Login);
        assert!(store.get().is_none());
    }
}
