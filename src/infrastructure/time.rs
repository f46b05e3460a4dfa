use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

/// Wall-clock source wired in at startup. Stamps `registered_at` on new
/// users, `created_at` on new articles, and the issue/expiry instants on
/// session tokens; tests substitute a frozen clock through the same port.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
