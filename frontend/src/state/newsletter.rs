use log::info;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubscribeError {
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("the subscription service is unavailable, please try again later")]
    SubscriptionServiceUnavailable,
}

/// Whatever ends up storing newsletter addresses.
pub trait SubscriptionService {
    fn subscribe(&self, email: &str) -> Result<(), SubscribeError>;
}

/// Stand-in until there is a real subscription backend: logs and succeeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoggingSubscription;

impl SubscriptionService for LoggingSubscription {
    fn subscribe(&self, email: &str) -> Result<(), SubscribeError> {
        info!("Subscribed: {}", email);
        Ok(())
    }
}

/// Same shape check an `<input type="email" required>` does before the
/// browser lets the form submit.
pub fn validate_email(email: &str) -> Result<(), SubscribeError> {
    let (local, domain) = email.split_once('@').ok_or(SubscribeError::InvalidEmail)?;
    let well_formed = !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain.split('.').all(|label| !label.is_empty());
    if well_formed {
        Ok(())
    } else {
        Err(SubscribeError::InvalidEmail)
    }
}

/// Contents of a newsletter email field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailDraft(String);

impl EmailDraft {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hands the address to `service` and clears the field on success.
    /// On failure the draft is left as typed.
    pub fn submit<S: SubscriptionService>(&mut self, service: &S) -> Result<String, SubscribeError> {
        let email = self.0.trim();
        validate_email(email)?;
        service.subscribe(email)?;
        let email = email.to_string();
        self.0.clear();
        Ok(email)
    }
}

impl From<String> for EmailDraft {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recording(RefCell<Vec<String>>);

    impl SubscriptionService for Recording {
        fn subscribe(&self, email: &str) -> Result<(), SubscribeError> {
            self.0.borrow_mut().push(email.to_string());
            Ok(())
        }
    }

    struct Down;

    impl SubscriptionService for Down {
        fn subscribe(&self, _email: &str) -> Result<(), SubscribeError> {
            Err(SubscribeError::SubscriptionServiceUnavailable)
        }
    }

    #[test]
    fn submit_clears_the_draft() {
        let mut draft = EmailDraft::from("a@b.com".to_string());
        assert_eq!(draft.submit(&LoggingSubscription), Ok("a@b.com".to_string()));
        assert_eq!(draft.as_str(), "");
    }

    #[test]
    fn submit_passes_trimmed_address_to_service() {
        let service = Recording::default();
        let mut draft = EmailDraft::from("  someone@example.org ".to_string());
        draft.submit(&service).unwrap();
        assert_eq!(*service.0.borrow(), vec!["someone@example.org".to_string()]);
    }

    #[test]
    fn empty_draft_is_rejected_without_calling_service() {
        let service = Recording::default();
        let mut draft = EmailDraft::default();
        assert_eq!(draft.submit(&service), Err(SubscribeError::InvalidEmail));
        assert!(service.0.borrow().is_empty());
    }

    #[test]
    fn failed_subscription_keeps_what_was_typed() {
        let mut draft = EmailDraft::from("a@b.com".to_string());
        assert_eq!(draft.submit(&Down), Err(SubscribeError::SubscriptionServiceUnavailable));
        assert_eq!(draft.as_str(), "a@b.com");
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("a@b").is_ok());
        assert!(validate_email("first.last@mail.example.com").is_ok());
        for bad in ["", "plain", "@b.com", "a@", "a@@b.com", "a b@c.com", "a@b..com", "a@.com"] {
            assert_eq!(validate_email(bad), Err(SubscribeError::InvalidEmail), "{:?}", bad);
        }
    }
}
