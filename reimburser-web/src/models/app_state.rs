use shared::models::{Reimbursement, User, UserRole};
use yewdux::Store;

/// Process-wide session state.
///
/// Default-empty at startup, replaced wholesale on login, reset to default on
/// logout, lost on page reload. The parsed role is the only authorization
/// signal the client trusts.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    /// The authenticated user, as returned by the login response.
    pub user: Option<User>,
    /// The most recently submitted reimbursement, before any server refresh.
    pub last_submitted: Option<Reimbursement>,
}

impl AppState {
    /// The state written on a successful login.
    #[must_use]
    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            last_submitted: None,
        }
    }

    /// The session's role, parsed through the closed [`UserRole`] set.
    ///
    /// `None` for anonymous sessions and for unrecognized role strings alike.
    #[must_use]
    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().and_then(User::role)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.role().is_some()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;
    use yewdux::{Context, Dispatch};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_store_login_logout_cycle() {
        let cx = Context::new();
        let dispatch = Dispatch::<AppState>::new(&cx);
        assert!(!dispatch.get().is_authenticated());

        dispatch.set(AppState::signed_in(User {
            user_id: Some(1),
            username: "alice".to_string(),
            first_name: None,
            last_name: None,
            role: Some("manager".to_string()),
        }));
        assert_eq!(dispatch.get().role(), Some(UserRole::Manager));

        dispatch.set(AppState::default());
        assert!(!dispatch.get().is_authenticated());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ReimbursementStatus;

    fn employee() -> User {
        User {
            user_id: Some(7),
            username: "alice".to_string(),
            first_name: Some("A".to_string()),
            last_name: Some("L".to_string()),
            role: Some("employee".to_string()),
        }
    }

    #[test]
    fn test_default_state_is_anonymous() {
        let state = AppState::default();
        assert_eq!(state.user, None);
        assert_eq!(state.last_submitted, None);
        assert_eq!(state.role(), None);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_signed_in_carries_the_login_role() {
        let state = AppState::signed_in(employee());
        assert_eq!(state.role(), Some(UserRole::Employee));
        assert!(state.is_authenticated());
    }

    #[test]
    fn test_unrecognized_role_is_not_authenticated() {
        let mut user = employee();
        user.role = Some("superuser".to_string());

        let state = AppState::signed_in(user);
        assert_eq!(state.role(), None);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_logout_resets_everything() {
        let submitted = Reimbursement {
            reimb_id: Some(3),
            description: "Taxi".to_string(),
            amount: 42.0,
            status: ReimbursementStatus::Pending,
            user_id: Some(7),
        };
        let state = AppState {
            user: Some(employee()),
            last_submitted: Some(submitted),
        };
        assert!(state.is_authenticated());

        // Logout replaces the store with the default state.
        let cleared = AppState::default();
        assert_eq!(cleared.user, None);
        assert_eq!(cleared.last_submitted, None);
        assert!(!cleared.is_authenticated());
    }
}
