//! Time source for the services.
//!
//! Every timestamp the backend writes, and every expiry check it makes, reads
//! "now" through a [`Clock`] so that tests can move time forward.

use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
