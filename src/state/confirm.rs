//! One-shot state machine for the email-confirmation landing page.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

/// Message shown when the link carries no token.
const INVALID_LINK: &str = "Invalid confirmation link";
/// Fallback when the backend rejects the token without a detail.
const CONFIRMATION_FAILED: &str = "Confirmation failed";

/// Where the confirmation attempt currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfirmStatus {
    /// The single confirmation call has not completed.
    #[default]
    Loading,
    /// The account is confirmed; the page is navigating to login.
    Success,
    /// The link was invalid or the backend rejected the token.
    Error,
}

/// State for one visit to the confirmation page.
///
/// The dispatch latch lives in the state itself rather than in a flag
/// captured by a closure: the confirmation request fires at most once per
/// page load, however often the view re-renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfirmState {
    pub status: ConfirmStatus,
    pub message: String,
    dispatched: bool,
}

impl ConfirmState {
    /// Claim the single outbound confirmation call. Returns `true` for the
    /// first caller only; everyone after that must not dispatch.
    pub fn try_dispatch(&mut self) -> bool {
        if self.dispatched {
            return false;
        }
        self.dispatched = true;
        true
    }

    /// The page was opened without a `token` query parameter. No network
    /// call is made; the latch stays claimed so a re-render cannot fire
    /// one either.
    pub fn invalid_link(&mut self) {
        self.dispatched = true;
        self.status = ConfirmStatus::Error;
        self.message = INVALID_LINK.to_owned();
    }

    /// The backend confirmed the account.
    pub fn succeed(&mut self) {
        self.status = ConfirmStatus::Success;
    }

    /// The backend rejected the token; its detail is shown verbatim when
    /// present.
    pub fn fail(&mut self, detail: Option<String>) {
        self.status = ConfirmStatus::Error;
        self.message = detail.unwrap_or_else(|| CONFIRMATION_FAILED.to_owned());
    }

    /// Whether the single call has been claimed.
    pub fn dispatched(&self) -> bool {
        self.dispatched
    }
}
