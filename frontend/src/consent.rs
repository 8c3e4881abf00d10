//! The single persisted browser flag: whether the visitor accepted cookies.

use thiserror::Error;
use web_sys::{window, Storage};

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentChoice {
    Accepted,
    Rejected,
}

impl ConsentChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentChoice::Accepted => "accepted",
            ConsentChoice::Rejected => "rejected",
        }
    }

    /// Unknown stored values count as "never asked".
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "accepted" => Some(ConsentChoice::Accepted),
            "rejected" => Some(ConsentChoice::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsentError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("local storage rejected the operation")]
    Storage,
}

fn local_storage() -> Result<Storage, ConsentError> {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .ok_or(ConsentError::Unavailable)
}

pub fn stored_choice() -> Result<Option<ConsentChoice>, ConsentError> {
    let value = local_storage()?
        .get_item(config::COOKIE_CONSENT_KEY)
        .map_err(|_| ConsentError::Storage)?;
    Ok(value.as_deref().and_then(ConsentChoice::from_stored))
}

pub fn record_choice(choice: ConsentChoice) -> Result<(), ConsentError> {
    local_storage()?
        .set_item(config::COOKIE_CONSENT_KEY, choice.as_str())
        .map_err(|_| ConsentError::Storage)
}

/// Only ask when storage works and holds no answer yet.
pub fn should_ask(stored: &Result<Option<ConsentChoice>, ConsentError>) -> bool {
    matches!(stored, Ok(None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_values_map_to_choices() {
        for choice in [ConsentChoice::Accepted, ConsentChoice::Rejected] {
            assert_eq!(ConsentChoice::from_stored(choice.as_str()), Some(choice));
        }
        assert_eq!(ConsentChoice::from_stored("yes"), None);
        assert_eq!(ConsentChoice::from_stored(""), None);
    }

    #[test]
    fn asks_only_when_nothing_is_stored() {
        assert!(should_ask(&Ok(None)));
        assert!(!should_ask(&Ok(Some(ConsentChoice::Rejected))));
        assert!(!should_ask(&Err(ConsentError::Unavailable)));
    }
}
