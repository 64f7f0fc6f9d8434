//! Role-based destinations and view gating.
//!
//! `destination_for` runs exactly twice in the control flow: right after a
//! successful login and right after a successful registration. Direct
//! navigation to a gated view is handled by `gate`, which each view applies
//! against the freshly resolved session.

use crate::models::user::UserRole;
use crate::session::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    CourseBrowse,
    CourseDetail(i64),
    AdminDashboard,
}

impl Route {
    pub fn describe(&self) -> String {
        match self {
            Route::Home => "home".into(),
            Route::Login => "login".into(),
            Route::Register => "register".into(),
            Route::CourseBrowse => "course catalog".into(),
            Route::CourseDetail(id) => format!("course {id}"),
            Route::AdminDashboard => "admin dashboard".into(),
        }
    }
}

/// Post-auth landing destination. Pure function of the role alone.
pub fn destination_for(role: Option<UserRole>) -> Route {
    match role {
        Some(UserRole::Student) => Route::CourseBrowse,
        Some(UserRole::Admin) => Route::AdminDashboard,
        None => Route::Home,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Allow,
    Redirect(Route),
}

/// Decide whether the resolved session may see `target`. A session with no
/// defined role is sent to login; a session with the wrong role is sent to
/// its own landing destination.
pub fn gate(target: Route, session: &SessionState) -> Gate {
    match target {
        Route::Home | Route::Login | Route::Register => Gate::Allow,
        Route::CourseBrowse | Route::CourseDetail(_) => match session {
            SessionState::Student(_) => Gate::Allow,
            SessionState::Admin(_) => Gate::Redirect(Route::AdminDashboard),
            SessionState::Unauthenticated | SessionState::UnknownRole => {
                Gate::Redirect(Route::Login)
            }
        },
        Route::AdminDashboard => match session {
            SessionState::Admin(_) => Gate::Allow,
            SessionState::Student(_) => Gate::Redirect(Route::CourseBrowse),
            SessionState::Unauthenticated | SessionState::UnknownRole => {
                Gate::Redirect(Route::Login)
            }
        },
    }
}
