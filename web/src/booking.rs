//! Transient state of one booking-modal session: the phase machine, the
//! form field bundle, and the user-facing submit notices.

use leptos::prelude::*;
use shared_types::{BookingRequest, ServiceKind};

/// Lifecycle of the booking modal. A single tagged value rather than
/// separate visible/submitting flags, so states like submitting-while-closed
/// cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingPhase {
    #[default]
    Closed,
    Editing,
    Submitting,
}

impl BookingPhase {
    pub fn is_open(self) -> bool {
        !matches!(self, BookingPhase::Closed)
    }
}

/// Result banner shown inside the modal after a submit attempt. Transport
/// and application failures surface as the same error notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitNotice {
    Success,
    Error,
}

impl SubmitNotice {
    pub fn message(self) -> &'static str {
        match self {
            SubmitNotice::Success => "Booking submitted successfully! We will contact you soon.",
            SubmitNotice::Error => "Error submitting booking. Please try again.",
        }
    }
}

/// Per-field signals backing the controlled form. Created empty, cleared on
/// every close, and kept intact across failed submits so the user can retry.
#[derive(Clone, Copy)]
pub struct BookingFields {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub date: RwSignal<String>,
    pub start_time: RwSignal<String>,
    pub end_time: RwSignal<String>,
    pub notes: RwSignal<String>,
}

impl BookingFields {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            date: RwSignal::new(String::new()),
            start_time: RwSignal::new(String::new()),
            end_time: RwSignal::new(String::new()),
            notes: RwSignal::new(String::new()),
        }
    }

    pub fn clear(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.phone.set(String::new());
        self.date.set(String::new());
        self.start_time.set(String::new());
        self.end_time.set(String::new());
        self.notes.set(String::new());
    }

    /// Required-field gate for the submit button. Notes are optional;
    /// everything else must be non-blank. No format or cross-field checks
    /// happen here (end time is allowed to precede start time).
    pub fn is_complete(&self) -> bool {
        !self.name.get().trim().is_empty()
            && !self.email.get().trim().is_empty()
            && !self.phone.get().trim().is_empty()
            && !self.date.get().trim().is_empty()
            && !self.start_time.get().trim().is_empty()
            && !self.end_time.get().trim().is_empty()
    }

    pub fn to_request(&self, service: ServiceKind) -> BookingRequest {
        BookingRequest {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
            date: self.date.get_untracked(),
            start_time: self.start_time.get_untracked(),
            end_time: self.end_time.get_untracked(),
            notes: self.notes.get_untracked(),
            service_type: service,
        }
    }
}

impl Default for BookingFields {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_fields() -> BookingFields {
        let fields = BookingFields::new();
        fields.name.set("A".to_string());
        fields.email.set("a@x.com".to_string());
        fields.phone.set("555".to_string());
        fields.date.set("2025-01-01".to_string());
        fields.start_time.set("10:00".to_string());
        fields.end_time.set("11:00".to_string());
        fields
    }

    #[test]
    fn test_phase_starts_closed() {
        assert_eq!(BookingPhase::default(), BookingPhase::Closed);
        assert!(!BookingPhase::Closed.is_open());
        assert!(BookingPhase::Editing.is_open());
        assert!(BookingPhase::Submitting.is_open());
    }

    #[test]
    fn test_notice_messages() {
        assert_eq!(
            SubmitNotice::Success.message(),
            "Booking submitted successfully! We will contact you soon."
        );
        assert_eq!(
            SubmitNotice::Error.message(),
            "Error submitting booking. Please try again."
        );
    }

    #[test]
    fn test_fields_complete_only_with_all_required_values() {
        let fields = BookingFields::new();
        assert!(!fields.is_complete());

        let fields = filled_fields();
        assert!(fields.is_complete());

        // notes stay optional
        assert!(fields.notes.get_untracked().is_empty());

        fields.end_time.set("   ".to_string());
        assert!(!fields.is_complete());
    }

    #[test]
    fn test_clear_resets_every_field() {
        let fields = filled_fields();
        fields.notes.set("bring the tape machine".to_string());
        fields.clear();
        assert!(fields.name.get_untracked().is_empty());
        assert!(fields.email.get_untracked().is_empty());
        assert!(fields.phone.get_untracked().is_empty());
        assert!(fields.date.get_untracked().is_empty());
        assert!(fields.start_time.get_untracked().is_empty());
        assert!(fields.end_time.get_untracked().is_empty());
        assert!(fields.notes.get_untracked().is_empty());
    }

    #[test]
    fn test_to_request_carries_fields_and_service() {
        let fields = filled_fields();
        let request = fields.to_request(ServiceKind::Mixing);
        assert_eq!(request.name, "A");
        assert_eq!(request.email, "a@x.com");
        assert_eq!(request.phone, "555");
        assert_eq!(request.date, "2025-01-01");
        assert_eq!(request.start_time, "10:00");
        assert_eq!(request.end_time, "11:00");
        assert_eq!(request.notes, "");
        assert_eq!(request.service_type, ServiceKind::Mixing);
    }
}
