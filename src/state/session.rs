//! Session Store
//!
//! Authentication state and the signed-in user record. The store is created
//! once at the application root and handed to the component tree through
//! context; `restore()` runs before the first protected route renders and
//! `logout()` tears the session down.

use leptos::*;

use crate::api;

/// Account role, as a closed enumeration. The wire format keeps the
/// server's `ROLE_` prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    #[serde(rename = "ROLE_EMPLOYEE")]
    Employee,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Employee => "Employee",
        }
    }
}

/// The signed-in user record as returned by the API.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
}

impl User {
    /// Initials shown in the navigation chip.
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .next()
            .into_iter()
            .chain(self.last_name.chars().next())
            .collect()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Authentication lifecycle. `Restoring` only exists between startup and the
/// first validation result, so protected routes can defer instead of
/// flashing content.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthState {
    Restoring,
    SignedIn(User),
    SignedOut,
}

/// Session store provided to the component tree.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<AuthState>,
}

/// Create the session store and provide it via context.
pub fn provide_session() -> Session {
    let session = Session {
        state: create_rw_signal(AuthState::Restoring),
    };
    provide_context(session);
    session
}

impl Session {
    pub fn snapshot(&self) -> AuthState {
        self.state.get()
    }

    pub fn user(&self) -> Option<User> {
        match self.state.get() {
            AuthState::SignedIn(user) => Some(user),
            AuthState::Restoring | AuthState::SignedOut => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user().map(|user| user.role.is_admin()).unwrap_or(false)
    }

    /// Validate any persisted credential. Every failure mode degrades to a
    /// signed-out session; callers never see an error.
    pub async fn restore(&self) {
        let Some(token) = api::stored_token() else {
            self.state.set(AuthState::SignedOut);
            return;
        };

        match api::validate_token(&token).await {
            Ok(user) => self.state.set(AuthState::SignedIn(user)),
            Err(_) => {
                api::clear_token();
                self.state.set(AuthState::SignedOut);
            }
        }
    }

    /// Exchange credentials for a token and user record. On failure the
    /// session stays signed out and the server's message is returned.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), String> {
        let auth = api::login(username, password).await?;
        api::store_token(&auth.token);
        self.state.set(AuthState::SignedIn(auth.user));
        Ok(())
    }

    /// Clear the persisted credential and in-memory user. Never fails.
    pub fn logout(&self) {
        api::clear_token();
        self.state.set(AuthState::SignedOut);
    }

    /// Replace the stored user record with the server's updated copy.
    pub async fn update_profile(&self, update: &api::ProfileUpdate) -> Result<(), String> {
        let user = api::update_profile(update).await?;
        self.state.set(AuthState::SignedIn(user));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee() -> User {
        User {
            id: 7,
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            role: Role::Employee,
            department: Some("IT".to_string()),
            position: Some("Developer".to_string()),
            hourly_rate: Some(25.0),
        }
    }

    #[test]
    fn admin_check_matches_role() {
        assert!(Role::Admin.is_admin());
        assert!(!Role::Employee.is_admin());
    }

    #[test]
    fn role_keeps_server_spelling_on_the_wire() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ROLE_ADMIN\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"ROLE_EMPLOYEE\"").unwrap(),
            Role::Employee
        );
    }

    #[test]
    fn user_deserializes_from_camel_case() {
        let user: User = serde_json::from_str(
            r#"{
                "id": 1,
                "username": "admin",
                "email": "admin@example.com",
                "firstName": "Ada",
                "lastName": "Admin",
                "role": "ROLE_ADMIN"
            }"#,
        )
        .unwrap();

        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.department, None);
    }

    #[test]
    fn initials_come_from_both_names() {
        assert_eq!(employee().initials(), "JD");

        let mut nameless = employee();
        nameless.first_name.clear();
        assert_eq!(nameless.initials(), "D");
    }

    #[test]
    fn role_labels() {
        assert_eq!(Role::Admin.label(), "Administrator");
        assert_eq!(Role::Employee.label(), "Employee");
    }
}
