use serde::Deserialize;
use thiserror::Error;

/// Backend paths. Functions take raw user values and percent-encode them
/// as path segments.
pub mod endpoints {
    pub const LOGIN: &str = "/api/auth/login";
    pub const STATS: &str = "/api/reports/stats";
    pub const DRIVES: &str = "/api/vaccination/drives";
    pub const CREATE_DRIVE: &str = "/api/vaccination/drive";
    pub const STUDENTS: &str = "/api/students";
    pub const STUDENT_SEARCH: &str = "/api/students/search";
    pub const BULK_UPLOAD: &str = "/api/students/bulk-upload";
    pub const DRIVE_SUMMARY_REPORT: &str = "/api/reports/drive-summary";
    pub const MISSED_VACCINATIONS_REPORT: &str = "/api/reports/missed-vaccinations";
    pub const REPORT_EXPORT: &str = "/api/reports/export";

    /// Multipart field name the bulk upload endpoint reads.
    pub const BULK_UPLOAD_FIELD: &str = "file";

    pub fn drive(id: &str) -> String {
        format!("{}/{}", CREATE_DRIVE, encode_segment(id))
    }

    pub fn drive_status(id: &str) -> String {
        format!("{}/status", drive(id))
    }

    pub fn vaccinate(student_id: &str, drive_id: &str) -> String {
        format!(
            "/api/vaccination/students/{}/drives/{}/vaccinate",
            encode_segment(student_id),
            encode_segment(drive_id)
        )
    }

    pub fn student(id: &str) -> String {
        format!("{}/{}", STUDENTS, encode_segment(id))
    }

    pub fn drive_report(drive_id: &str) -> String {
        format!("/api/reports/drive/{}", encode_segment(drive_id))
    }

    pub fn class_report(class_name: &str) -> String {
        format!("/api/reports/class/{}", encode_segment(class_name))
    }

    /// Append a URL-encoded query string; `path` is returned unchanged when
    /// there are no pairs.
    pub fn with_query(path: &str, pairs: &[(&'static str, String)]) -> String {
        if pairs.is_empty() {
            return path.to_string();
        }
        match serde_urlencoded::to_string(pairs) {
            Ok(query) => format!("{}?{}", path, query),
            Err(_) => path.to_string(),
        }
    }

    /// RFC 3986 path segment encoding: unreserved characters pass through,
    /// every other byte becomes `%XX`.
    pub fn encode_segment(raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        for byte in raw.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                    out.push(byte as char)
                }
                _ => out.push_str(&format!("%{:02X}", byte)),
            }
        }
        out
    }

    /// Inverse of [`encode_segment`]. `None` for a malformed escape or bytes
    /// that are not UTF-8.
    pub fn decode_segment(encoded: &str) -> Option<String> {
        let bytes = encoded.as_bytes();
        let mut out = Vec::with_capacity(bytes.len());
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'%' {
                let hex = encoded.get(i + 1..i + 3)?;
                out.push(u8::from_str_radix(hex, 16).ok()?);
                i += 3;
            } else {
                out.push(bytes[i]);
                i += 1;
            }
        }
        String::from_utf8(out).ok()
    }
}

/// Failure of a single backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text the backend sent with a non-2xx response. A JSON body with a
    /// `message` field yields that field; a blank body yields `None`.
    pub fn server_message(&self) -> Option<String> {
        let ApiError::Status { body, .. } = self else {
            return None;
        };
        let body = body.trim();
        if body.is_empty() {
            return None;
        }
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) if !parsed.message.trim().is_empty() => Some(parsed.message),
            _ => Some(body.to_string()),
        }
    }

    /// The server's message when there is one, `fallback` otherwise.
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or_else(|| fallback.to_string())
    }
}

/// Message shown when adding a student fails.
pub fn add_student_error(err: &ApiError) -> String {
    match (err.status(), err.server_message()) {
        (_, Some(message)) => message,
        (Some(400), None) => "Student Id already exists.".to_string(),
        _ => "Failed to add student".to_string(),
    }
}

/// Shown when a request never produced a usable response.
pub const GENERIC_FAILURE: &str = "Something went wrong";

/// `prefix` followed by the backend's text for a rejected request; the
/// generic message when the request did not complete.
pub fn prefixed_error(prefix: &str, err: &ApiError) -> String {
    match err {
        ApiError::Status { .. } => format!("{}{}", prefix, err.server_message().unwrap_or_default()),
        _ => GENERIC_FAILURE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::endpoints::*;
    use super::*;

    fn status(status: u16, body: &str) -> ApiError {
        ApiError::Status {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_paths() {
        assert_eq!(drive("4"), "/api/vaccination/drive/4");
        assert_eq!(drive_status("4"), "/api/vaccination/drive/4/status");
        assert_eq!(
            vaccinate("S001", "4"),
            "/api/vaccination/students/S001/drives/4/vaccinate"
        );
        assert_eq!(student("S010"), "/api/students/S010");
        assert_eq!(drive_report("12"), "/api/reports/drive/12");
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("5A"), "5A");
        assert_eq!(encode_segment("a b/c?"), "a%20b%2Fc%3F");
        assert_eq!(encode_segment("é"), "%C3%A9");
    }

    #[test]
    fn test_decode_segment() {
        assert_eq!(decode_segment("S%201").as_deref(), Some("S 1"));
        assert_eq!(decode_segment("%C3%A9").as_deref(), Some("é"));
        assert_eq!(decode_segment("plain").as_deref(), Some("plain"));
        assert_eq!(decode_segment("bad%2"), None);
        assert_eq!(decode_segment("%zz"), None);
        assert_eq!(decode_segment("%FF"), None);
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query(STUDENT_SEARCH, &[]), "/api/students/search");
        assert_eq!(
            with_query(
                STUDENT_SEARCH,
                &[("name", "Anna Maria".to_string()), ("vaccinated", "true".to_string())]
            ),
            "/api/students/search?name=Anna+Maria&vaccinated=true"
        );
    }

    #[test]
    fn test_server_message_prefers_json_message() {
        assert_eq!(
            status(400, r#"{"message":"Class is full"}"#).server_message(),
            Some("Class is full".to_string())
        );
        assert_eq!(
            status(409, "Drive already exists").server_message(),
            Some("Drive already exists".to_string())
        );
        assert_eq!(status(500, "  ").server_message(), None);
        assert_eq!(ApiError::Network("offline".into()).server_message(), None);
    }

    #[test]
    fn test_message_or_fallback() {
        assert_eq!(status(500, "").message_or("Bulk upload failed"), "Bulk upload failed");
        assert_eq!(
            ApiError::Decode("eof".into()).message_or("Failed to load report"),
            "Failed to load report"
        );
    }

    #[test]
    fn test_add_student_error_messages() {
        assert_eq!(add_student_error(&status(400, "")), "Student Id already exists.");
        assert_eq!(add_student_error(&status(400, "Duplicate id S004")), "Duplicate id S004");
        assert_eq!(add_student_error(&status(500, "")), "Failed to add student");
        assert_eq!(
            add_student_error(&ApiError::Network("offline".into())),
            "Failed to add student"
        );
    }

    #[test]
    fn test_prefixed_error() {
        assert_eq!(
            prefixed_error("Creation failed: ", &status(400, "Drive date is taken")),
            "Creation failed: Drive date is taken"
        );
        assert_eq!(prefixed_error("Update failed: ", &status(500, "")), "Update failed: ");
        assert_eq!(
            prefixed_error("Update failed: ", &ApiError::Network("offline".into())),
            GENERIC_FAILURE
        );
    }
}
