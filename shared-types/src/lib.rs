use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of bookable services. The serialized form is the wire id
/// used by the booking endpoint (`studio-access`, `engineer-request`,
/// `mixing`).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    StudioAccess,
    EngineerRequest,
    Mixing,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 3] = [
        ServiceKind::StudioAccess,
        ServiceKind::EngineerRequest,
        ServiceKind::Mixing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::StudioAccess => "studio-access",
            ServiceKind::EngineerRequest => "engineer-request",
            ServiceKind::Mixing => "mixing",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of `POST /api/submit-booking`. Member names on the wire are
/// camelCase; `date` is `YYYY-MM-DD`, the times are `HH:MM`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub notes: String,
    pub service_type: ServiceKind,
}

/// Response envelope of the booking endpoint. Only `success` is required;
/// the backend may attach a human-readable message and the id it assigned,
/// and anything else it sends is ignored.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BookingResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_request() -> BookingRequest {
        BookingRequest {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            phone: "555".to_string(),
            date: "2025-01-01".to_string(),
            start_time: "10:00".to_string(),
            end_time: "11:00".to_string(),
            notes: String::new(),
            service_type: ServiceKind::Mixing,
        }
    }

    #[test]
    fn test_request_uses_wire_member_names() {
        let value = serde_json::to_value(sample_request()).unwrap();
        assert_eq!(value["startTime"], "10:00");
        assert_eq!(value["endTime"], "11:00");
        assert_eq!(value["serviceType"], "mixing");
        assert!(value.get("start_time").is_none());
    }

    #[test]
    fn test_service_kind_wire_ids() {
        for kind in ServiceKind::ALL {
            let encoded = serde_json::to_value(kind).unwrap();
            assert_eq!(encoded, json!(kind.as_str()));
        }
        let decoded: ServiceKind = serde_json::from_value(json!("studio-access")).unwrap();
        assert_eq!(decoded, ServiceKind::StudioAccess);
    }

    #[test]
    fn test_response_tolerates_extra_and_missing_fields() {
        let full: BookingResponse = serde_json::from_value(json!({
            "success": true,
            "message": "Booking submitted successfully!",
            "booking_id": 42,
            "server_time": "2025-01-01T10:00:00Z"
        }))
        .unwrap();
        assert!(full.success);
        assert_eq!(full.booking_id, Some(42));

        let bare: BookingResponse = serde_json::from_value(json!({ "success": false })).unwrap();
        assert!(!bare.success);
        assert_eq!(bare.message, None);
        assert_eq!(bare.booking_id, None);
    }
}
