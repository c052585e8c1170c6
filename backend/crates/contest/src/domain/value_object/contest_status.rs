use serde::{Deserialize, Serialize};
use std::fmt;

/// Moderation status of a contest
///
/// New contests start pending and only appear on public surfaces after
/// an admin accepts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum ContestStatus {
    #[default]
    Pending = 0,
    Accepted = 1,
}

impl ContestStatus {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            ContestStatus::Pending => "pending",
            ContestStatus::Accepted => "accepted",
        }
    }

    #[inline]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, ContestStatus::Accepted)
    }

    #[inline]
    pub fn from_id(id: i16) -> Self {
        match id {
            0 => ContestStatus::Pending,
            1 => ContestStatus::Accepted,
            _ => {
                tracing::error!("Invalid ContestStatus id: {}", id);
                unreachable!("Invalid ContestStatus id: {}", id)
            }
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(ContestStatus::Pending),
            "accepted" => Some(ContestStatus::Accepted),
            _ => None,
        }
    }
}

impl fmt::Display for ContestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pending() {
        assert_eq!(ContestStatus::default(), ContestStatus::Pending);
        assert!(!ContestStatus::Pending.is_accepted());
        assert!(ContestStatus::Accepted.is_accepted());
    }

    #[test]
    fn test_from_code() {
        assert_eq!(
            ContestStatus::from_code("pending"),
            Some(ContestStatus::Pending)
        );
        assert_eq!(
            ContestStatus::from_code("accepted"),
            Some(ContestStatus::Accepted)
        );
        assert_eq!(ContestStatus::from_code("rejected"), None);
    }
}
