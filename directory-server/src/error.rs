//! Unified service-layer error type
//!
//! `ServiceError` bridges repository errors (`RepoError`) and the API-layer
//! error (`AppError`). Handlers use `?` on both and convert once at the route
//! boundary with a fixed, operation-specific message for the 500 case.

use shared::error::AppError;

use crate::db::RepoError;

#[derive(Debug)]
pub enum ServiceError {
    /// Repository or infrastructure error
    Repo(RepoError),
    /// Business-rule error (already an AppError with the correct ErrorCode)
    App(AppError),
}

impl From<RepoError> for ServiceError {
    fn from(e: RepoError) -> Self {
        ServiceError::Repo(e)
    }
}

impl From<AppError> for ServiceError {
    fn from(e: AppError) -> Self {
        ServiceError::App(e)
    }
}

impl ServiceError {
    /// Convert to the client-facing error
    ///
    /// A storage-level unique violation is a conflict, not a failure. Every
    /// other repository error is logged and replaced by `failure_message`.
    pub fn into_app_error(self, failure_message: &'static str) -> AppError {
        match self {
            ServiceError::App(app_err) => app_err,
            ServiceError::Repo(RepoError::EmailTaken) => AppError::email_taken(),
            ServiceError::Repo(repo_err) => {
                tracing::error!(error = %repo_err, "{failure_message}");
                AppError::internal(failure_message)
            }
        }
    }
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;
    use http::StatusCode;
    use shared::error::ErrorCode;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Counts every emitted event
    struct EventCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for EventCounter {
        fn on_event(&self, _event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn app_errors_pass_through() {
        let err = ServiceError::from(AppError::employee_not_found());
        let app = err.into_app_error("Failed to fetch employee");
        assert_eq!(app.code, ErrorCode::EmployeeNotFound);
    }

    #[test]
    fn unique_violation_becomes_conflict() {
        let err = ServiceError::from(RepoError::EmailTaken);
        let app = err.into_app_error("Failed to create employee");
        assert_eq!(app.code, ErrorCode::EmployeeEmailExists);
        assert_eq!(app.field.as_deref(), Some("email"));
    }

    #[test]
    fn storage_failures_get_the_fixed_message() {
        let err = ServiceError::from(RepoError::Database(sqlx::Error::PoolTimedOut));
        let app = err.into_app_error("Failed to delete employee");
        assert_eq!(app.code, ErrorCode::InternalError);
        assert_eq!(app.message, "Failed to delete employee");
        assert!(app.field.is_none());
    }

    #[test]
    fn storage_failure_is_logged_once_through_the_response() {
        let events = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(EventCounter(events.clone()));

        tracing::subscriber::with_default(subscriber, || {
            let response = ServiceError::from(RepoError::Database(sqlx::Error::PoolTimedOut))
                .into_app_error("Failed to fetch employees")
                .into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        });

        assert_eq!(events.load(Ordering::SeqCst), 1);
    }
}
