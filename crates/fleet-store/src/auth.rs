//! State container for the sign-in / sign-up / OTP flow.

use fleet_core::entities::User;
use fleet_core::enums::OpStatus;

/// One of the four auth actions the backend exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    SignIn,
    SignUp,
    VerifyOtp,
    ResendOtp,
}

/// Tracks the bearer token, the signed-in user, and one status per auth
/// action.
#[derive(Debug, Clone, Default)]
pub struct AuthStore {
    pub token: Option<String>,
    pub user: Option<User>,
    pub sign_in_status: OpStatus,
    pub sign_up_status: OpStatus,
    pub verify_otp_status: OpStatus,
    pub resend_otp_status: OpStatus,
    /// Message from the most recent failed action.
    pub error: Option<String>,
}

impl AuthStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a token persisted by a previous session.
    #[must_use]
    pub fn with_token(token: Option<String>) -> Self {
        Self {
            token,
            ..Self::default()
        }
    }

    /// Whether a bearer token is present.
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    /// Mark `action` as in flight and clear any stale error.
    pub fn begin(&mut self, action: AuthAction) {
        *self.status_mut(action) = OpStatus::IsLoading;
        self.error = None;
    }

    /// Mark `action` as failed and record its message.
    pub fn fail(&mut self, action: AuthAction, message: impl Into<String>) {
        *self.status_mut(action) = OpStatus::Failed;
        self.error = Some(message.into());
    }

    /// Sign-in succeeded: keep the token and the signed-in user.
    pub fn complete_sign_in(&mut self, token: String, user: User) {
        self.sign_in_status = OpStatus::Succeeded;
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Sign-up succeeded; the account still awaits OTP verification.
    pub fn complete_sign_up(&mut self) {
        self.sign_up_status = OpStatus::Succeeded;
    }

    /// OTP verification succeeded; the account can now sign in.
    pub fn complete_verify_otp(&mut self) {
        self.verify_otp_status = OpStatus::Succeeded;
    }

    /// A fresh OTP was sent.
    pub fn complete_resend_otp(&mut self) {
        self.resend_otp_status = OpStatus::Succeeded;
    }

    /// Drop the session: token, user, and error.
    pub fn sign_out(&mut self) {
        self.token = None;
        self.user = None;
        self.error = None;
    }

    /// Status of the given action.
    #[must_use]
    pub fn status(&self, action: AuthAction) -> OpStatus {
        match action {
            AuthAction::SignIn => self.sign_in_status,
            AuthAction::SignUp => self.sign_up_status,
            AuthAction::VerifyOtp => self.verify_otp_status,
            AuthAction::ResendOtp => self.resend_otp_status,
        }
    }

    fn status_mut(&mut self, action: AuthAction) -> &mut OpStatus {
        match action {
            AuthAction::SignIn => &mut self.sign_in_status,
            AuthAction::SignUp => &mut self.sign_up_status,
            AuthAction::VerifyOtp => &mut self.verify_otp_status,
            AuthAction::ResendOtp => &mut self.resend_otp_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn user() -> User {
        serde_json::from_str(
            r#"{
                "_id": "usr_1",
                "first_name": "Amina",
                "last_name": "Yusuf",
                "role": "driver",
                "designation": "Lead Driver",
                "email": "amina@example.com"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn starts_signed_out() {
        let store = AuthStore::new();
        assert!(!store.is_signed_in());
        assert_eq!(store.sign_in_status, OpStatus::Idle);
    }

    #[test]
    fn persisted_token_counts_as_signed_in() {
        let store = AuthStore::with_token(Some("jwt-abc".into()));
        assert!(store.is_signed_in());
        assert!(store.user.is_none());
    }

    #[test]
    fn sign_in_keeps_token_and_user() {
        let mut store = AuthStore::new();
        store.begin(AuthAction::SignIn);
        assert_eq!(store.sign_in_status, OpStatus::IsLoading);

        store.complete_sign_in("jwt-abc".into(), user());
        assert_eq!(store.sign_in_status, OpStatus::Succeeded);
        assert_eq!(store.token.as_deref(), Some("jwt-abc"));
        assert_eq!(store.user.as_ref().unwrap().email, "amina@example.com");
    }

    #[test]
    fn failure_records_message_without_touching_token() {
        let mut store = AuthStore::with_token(Some("jwt-abc".into()));
        store.begin(AuthAction::VerifyOtp);
        store.fail(AuthAction::VerifyOtp, "OTP expired");

        assert_eq!(store.verify_otp_status, OpStatus::Failed);
        assert_eq!(store.error.as_deref(), Some("OTP expired"));
        assert!(store.is_signed_in());
    }

    #[test]
    fn sign_out_drops_the_session() {
        let mut store = AuthStore::new();
        store.complete_sign_in("jwt-abc".into(), user());
        store.sign_out();

        assert!(!store.is_signed_in());
        assert!(store.user.is_none());
    }

    #[test]
    fn statuses_are_tracked_independently() {
        let mut store = AuthStore::new();
        store.begin(AuthAction::ResendOtp);
        store.complete_sign_up();

        assert_eq!(store.status(AuthAction::ResendOtp), OpStatus::IsLoading);
        assert_eq!(store.status(AuthAction::SignUp), OpStatus::Succeeded);
        assert_eq!(store.status(AuthAction::SignIn), OpStatus::Idle);
    }
}
