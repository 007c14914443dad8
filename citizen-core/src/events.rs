use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventStatus {
    Upcoming,
    Completed,
}

impl EventStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Completed => "Completed",
        }
    }
}

/// Community event citizens can register for to earn points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CivicEvent {
    pub id: u32,
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub participants: u32,
    pub max_participants: u32,
    pub points: u32,
    pub description: String,
    pub status: EventStatus,
    #[serde(default)]
    pub registered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("This event is already full")]
    Full,
    #[error("You are already registered")]
    AlreadyRegistered,
    #[error("This event has already taken place")]
    Completed,
}

impl CivicEvent {
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.participants >= self.max_participants
    }

    /// Spots filled, as a clamped percentage for the progress bar.
    #[must_use]
    pub fn capacity_pct(&self) -> u8 {
        if self.max_participants == 0 {
            return 100;
        }
        let pct = (u64::from(self.participants) * 100) / u64::from(self.max_participants);
        u8::try_from(pct.min(100)).unwrap_or(100)
    }

    /// Register the current user, taking one spot.
    ///
    /// # Errors
    /// Fails when the event is over, full, or already registered.
    pub fn register(&mut self) -> Result<(), RegistrationError> {
        if self.status == EventStatus::Completed {
            return Err(RegistrationError::Completed);
        }
        if self.registered {
            return Err(RegistrationError::AlreadyRegistered);
        }
        if self.is_full() {
            return Err(RegistrationError::Full);
        }
        self.participants += 1;
        self.registered = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(participants: u32, max: u32, status: EventStatus, registered: bool) -> CivicEvent {
        CivicEvent {
            id: 1,
            title: String::from("Community Cleanup Drive"),
            date: NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
            time: String::from("9:00 AM - 12:00 PM"),
            location: String::from("Cubbon Park"),
            participants,
            max_participants: max,
            points: 100,
            description: String::new(),
            status,
            registered,
        }
    }

    #[test]
    fn registration_takes_a_spot() {
        let mut upcoming = event(45, 100, EventStatus::Upcoming, false);
        upcoming.register().expect("spots available");
        assert!(upcoming.registered);
        assert_eq!(upcoming.participants, 46);
    }

    #[test]
    fn registration_failures_are_typed() {
        let mut full = event(50, 50, EventStatus::Upcoming, false);
        assert_eq!(full.register(), Err(RegistrationError::Full));

        let mut done = event(75, 75, EventStatus::Completed, true);
        assert_eq!(done.register(), Err(RegistrationError::Completed));

        let mut dup = event(28, 50, EventStatus::Upcoming, true);
        assert_eq!(dup.register(), Err(RegistrationError::AlreadyRegistered));
    }

    #[test]
    fn capacity_pct_is_clamped() {
        assert_eq!(event(45, 100, EventStatus::Upcoming, false).capacity_pct(), 45);
        assert_eq!(event(80, 75, EventStatus::Upcoming, false).capacity_pct(), 100);
        assert_eq!(event(1, 0, EventStatus::Upcoming, false).capacity_pct(), 100);
    }
}
