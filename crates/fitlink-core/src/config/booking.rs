//! Instructor booking configuration.

use serde::{Deserialize, Serialize};

/// Settings applied when members book instructor sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Hourly rate (NGN) assigned to instructors created without one.
    #[serde(default = "default_hourly_rate")]
    pub default_hourly_rate: u64,
    /// Session lengths in minutes a booking may have.
    #[serde(default = "default_session_durations")]
    pub session_durations: Vec<i32>,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            default_hourly_rate: default_hourly_rate(),
            session_durations: default_session_durations(),
        }
    }
}

impl BookingConfig {
    /// Whether a session of `minutes` may be booked.
    pub fn allows_duration(&self, minutes: i32) -> bool {
        self.session_durations.contains(&minutes)
    }
}

fn default_hourly_rate() -> u64 {
    5000
}

fn default_session_durations() -> Vec<i32> {
    vec![30, 60, 90, 120]
}
