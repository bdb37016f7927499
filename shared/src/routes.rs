use crate::api::endpoints::{decode_segment, encode_segment};

/// Roles the backend issues (`ROLE_ADMIN`). Admin pages are restricted to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
}

const ADMIN_ONLY: &[Role] = &[Role::Admin];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    CreateDrive,
    UpdateDrive(String),
    CreateStudent,
    UpdateStudent(String),
    BulkUpload,
    NotFound,
}

impl Route {
    /// Ids are percent-decoded; a malformed escape makes the path unknown.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] | ["login"] => Route::Login,
            ["admin", "dashboard"] => Route::Dashboard,
            ["admin", "create-drive"] => Route::CreateDrive,
            ["admin", "update-drive", id] => {
                decode_segment(id).map_or(Route::NotFound, Route::UpdateDrive)
            }
            ["admin", "create-student"] => Route::CreateStudent,
            ["admin", "update-student", id] => {
                decode_segment(id).map_or(Route::NotFound, Route::UpdateStudent)
            }
            ["admin", "bulk-upload"] => Route::BulkUpload,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Dashboard => "/admin/dashboard".to_string(),
            Route::CreateDrive => "/admin/create-drive".to_string(),
            Route::UpdateDrive(id) => format!("/admin/update-drive/{}", encode_segment(id)),
            Route::CreateStudent => "/admin/create-student".to_string(),
            Route::UpdateStudent(id) => format!("/admin/update-student/{}", encode_segment(id)),
            Route::BulkUpload => "/admin/bulk-upload".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Roles allowed to see the page; empty for public pages.
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Route::Login | Route::NotFound => &[],
            Route::Dashboard
            | Route::CreateDrive
            | Route::UpdateDrive(_)
            | Route::CreateStudent
            | Route::UpdateStudent(_)
            | Route::BulkUpload => ADMIN_ONLY,
        }
    }
}

/// The signed-in user's credentials, passed explicitly to everything that
/// talks to the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Blank tokens are treated as no token.
    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        if token.trim().is_empty() {
            Self::anonymous()
        } else {
            Self { token: Some(token) }
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn authorization_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Render,
    Redirect(Route),
}

/// Route guard. The token is not decoded, so `allowed_roles` only decides
/// whether the page is protected at all; any token passes a protected page.
pub fn guard(allowed_roles: &[Role], session: &Session) -> Access {
    if allowed_roles.is_empty() || session.is_authenticated() {
        Access::Render
    } else {
        Access::Redirect(Route::Login)
    }
}

pub fn resolve(route: &Route, session: &Session) -> Access {
    guard(route.allowed_roles(), session)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::Login);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/admin/dashboard/"), Route::Dashboard);
        assert_eq!(Route::parse("/admin/update-drive/12"), Route::UpdateDrive("12".into()));
        assert_eq!(
            Route::parse("/admin/update-student/S004"),
            Route::UpdateStudent("S004".into())
        );
        assert_eq!(Route::parse("/admin/update-drive"), Route::NotFound);
        assert_eq!(Route::parse("/elsewhere"), Route::NotFound);
    }

    #[test]
    fn test_path_round_trip() {
        let routes = [
            Route::Login,
            Route::Dashboard,
            Route::CreateDrive,
            Route::UpdateDrive("3".into()),
            Route::CreateStudent,
            Route::UpdateStudent("S001".into()),
            Route::BulkUpload,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_ids_with_reserved_characters_round_trip() {
        let route = Route::UpdateStudent("S 1/b".into());
        assert_eq!(route.path(), "/admin/update-student/S%201%2Fb");
        assert_eq!(Route::parse(&route.path()), route);
        assert_eq!(Route::parse("/admin/update-student/S%201"), Route::UpdateStudent("S 1".into()));
        assert_eq!(Route::parse("/admin/update-drive/%G1"), Route::NotFound);
    }

    #[test]
    fn test_guard_redirects_without_token() {
        let anonymous = Session::anonymous();
        assert_eq!(resolve(&Route::Dashboard, &anonymous), Access::Redirect(Route::Login));
        assert_eq!(resolve(&Route::BulkUpload, &anonymous), Access::Redirect(Route::Login));
        assert_eq!(resolve(&Route::Login, &anonymous), Access::Render);
    }

    #[test]
    fn test_guard_renders_with_token() {
        let session = Session::with_token("abc.def.ghi");
        assert_eq!(resolve(&Route::UpdateDrive("1".into()), &session), Access::Render);
        assert_eq!(session.authorization_header().as_deref(), Some("Bearer abc.def.ghi"));
    }

    #[test]
    fn test_blank_token_is_anonymous() {
        assert!(!Session::with_token("  ").is_authenticated());
        assert_eq!(Session::anonymous().authorization_header(), None);
    }

    #[test]
    fn test_admin_routes_require_admin_role() {
        assert_eq!(Route::CreateDrive.allowed_roles(), &[Role::Admin]);
        assert!(Route::Login.allowed_roles().is_empty());
    }
}
