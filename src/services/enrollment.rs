//! Enrollment requests and the admin approve/reject transitions.

use anyhow::bail;

use crate::api::ApiClient;
use crate::models::enrollment::{NewEnrollment, PendingApproval};
use crate::session::SessionState;

pub struct EnrollmentService;

impl EnrollmentService {
    /// Request enrollment for the acting student. The student id is read from
    /// the resolved session and sent explicitly; the request must be
    /// attributable to the acting user, never left for the server to fill in.
    pub async fn request(
        api: &ApiClient,
        session: &SessionState,
        course_id: i64,
    ) -> anyhow::Result<()> {
        let Some(profile) = session.profile() else {
            bail!("no student identity in the current session — please log in again");
        };
        api.create_enrollment(&NewEnrollment {
            course: course_id,
            student: profile.id,
        })
        .await?;
        Ok(())
    }

    pub async fn pending(api: &ApiClient) -> anyhow::Result<Vec<PendingApproval>> {
        Ok(api.pending_approvals().await?)
    }

    pub async fn approve(api: &ApiClient, enrollment_id: i64) -> anyhow::Result<()> {
        api.approve_enrollment(enrollment_id).await?;
        Ok(())
    }

    pub async fn reject(api: &ApiClient, enrollment_id: i64) -> anyhow::Result<()> {
        api.reject_enrollment(enrollment_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::session::store::CredentialStore;

    #[tokio::test]
    async fn request_without_identity_fails_before_any_network_call() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            api_base_url: "http://localhost:0/api".into(),
            session_file: dir.path().join("session.json"),
            request_timeout_secs: 1,
        };
        let store = CredentialStore::new(config.session_file.clone());
        let api = ApiClient::new(&config, store).unwrap();

        let err = EnrollmentService::request(&api, &SessionState::UnknownRole, 42)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("log in again"));
    }
}
