//! Transient, user-visible status messages.

use crate::executor::MutationOutcome;
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    pub fn saved() -> Self {
        Self::success("Students saved successfully!")
    }

    /// Message for a finished mutation.
    ///
    /// `NotFound` yields nothing: whether a missing id deserves a message
    /// depends on which intent asked for it.
    pub fn for_outcome(outcome: &MutationOutcome) -> Option<Self> {
        match outcome {
            MutationOutcome::Added(record) => Some(Self::success(format!(
                "Student '{}' added successfully",
                record.name()
            ))),
            MutationOutcome::Updated(record) => Some(Self::success(format!(
                "Student '{}' updated successfully",
                record.name()
            ))),
            MutationOutcome::Deleted(record) => Some(Self::info(format!(
                "Student '{}' deleted",
                record.name()
            ))),
            MutationOutcome::Rejected(err) => Some(Self::warning(err.to_string())),
            MutationOutcome::NotFound(_) => None,
        }
    }
}

/// At most one visible notification; a new one replaces the old.
#[derive(Debug, Clone)]
pub struct NotificationSlot {
    current: Option<(Notification, Instant)>,
    ttl: Duration,
}

impl NotificationSlot {
    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    pub fn show(&mut self, notification: Notification, now: Instant) {
        self.current = Some((notification, now));
    }

    /// The notification still visible at `now`, if any
    pub fn current(&self, now: Instant) -> Option<&Notification> {
        self.current
            .as_ref()
            .filter(|(_, shown_at)| now.saturating_duration_since(*shown_at) < self.ttl)
            .map(|(notification, _)| notification)
    }

    /// Most recent notification regardless of age
    pub fn last(&self) -> Option<&Notification> {
        self.current.as_ref().map(|(notification, _)| notification)
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

impl Default for NotificationSlot {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Record, RecordDraft, RecordSchema, ValidationError};
    use crate::validation::Validator;

    fn ana() -> Record {
        let valid = Validator::new(RecordSchema::Minimal)
            .validate(&RecordDraft::new("Ana", "20"))
            .unwrap();
        Record::new(1, valid)
    }

    #[test]
    fn test_messages_for_outcomes() {
        let added = Notification::for_outcome(&MutationOutcome::Added(ana())).unwrap();
        assert_eq!(added.severity, Severity::Success);
        assert_eq!(added.message, "Student 'Ana' added successfully");

        let deleted = Notification::for_outcome(&MutationOutcome::Deleted(ana())).unwrap();
        assert_eq!(deleted.severity, Severity::Info);

        let rejected =
            Notification::for_outcome(&MutationOutcome::Rejected(ValidationError::InvalidMobile))
                .unwrap();
        assert_eq!(rejected.severity, Severity::Warning);
        assert_eq!(rejected.message, "Mobile number must contain digits only");

        assert!(Notification::for_outcome(&MutationOutcome::NotFound(9)).is_none());
    }

    #[test]
    fn test_slot_expires_after_ttl() {
        let start = Instant::now();
        let mut slot = NotificationSlot::new(Duration::from_secs(3));
        slot.show(Notification::saved(), start);

        assert!(slot.current(start + Duration::from_secs(2)).is_some());
        assert!(slot.current(start + Duration::from_secs(3)).is_none());
        assert!(slot.last().is_some());
    }

    #[test]
    fn test_new_notification_replaces_old() {
        let now = Instant::now();
        let mut slot = NotificationSlot::default();
        slot.show(Notification::info("first"), now);
        slot.show(Notification::error("second"), now);

        assert_eq!(slot.current(now).unwrap().message, "second");
        slot.dismiss();
        assert!(slot.current(now).is_none());
    }
}
