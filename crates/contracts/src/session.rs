use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// How long an admin session stays valid after login.
pub const SESSION_TTL_HOURS: i64 = 12;

/// Client-side admin session.
///
/// This is not real authentication: there is no token and nothing is verified
/// server-side. It exists to gate navigation to the admin views, carried
/// through context instead of being re-read from storage by every view, and
/// it expires instead of living forever.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    pub started_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn start(now: DateTime<Utc>) -> Self {
        Self {
            started_at: now,
            expires_at: now + Duration::hours(SESSION_TTL_HOURS),
        }
    }

    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 15, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_session_active_before_expiry() {
        let session = AdminSession::start(at(8));
        assert!(session.is_active(at(8)));
        assert!(session.is_active(at(19)));
    }

    #[test]
    fn test_session_inactive_after_expiry() {
        let session = AdminSession::start(at(8));
        assert!(!session.is_active(at(20)));
        assert!(!session.is_active(at(23)));
    }

    #[test]
    fn test_session_round_trips_through_json() {
        let session = AdminSession::start(at(8));
        let json = serde_json::to_string(&session).unwrap();
        let restored: AdminSession = serde_json::from_str(&json).unwrap();
        assert_eq!(session, restored);
    }
}
