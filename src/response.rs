use crate::transport::RawResponse;

const NO_CONTENT: u16 = 204;
const NOT_FOUND: u16 = 404;
const CONTENT_TYPE: &str = "Content-Type";
const JSON_MIME: &str = "application/json";

/// Classified result of a raw response, before any body is read.
#[derive(Debug)]
pub enum ResponseOutcome {
    /// 204, nothing to read
    NoContent,
    /// all checks passed, body still unread
    Parse(Box<dyn RawResponse>),
    Failure(FailureInfo),
}

#[derive(Debug)]
pub struct FailureInfo {
    pub reason: FailureReason,
    pub status: u16,
    pub status_text: String,
    pub response: Box<dyn RawResponse>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureReason {
    /// explicit early 404 branch, kept distinct so callers can special-case it
    NotFound,
    /// response is not application/json, whatever the status
    InvalidContentType,
    /// status outside the 2xx success range
    Status,
}

/// Classifies a raw response. First match wins, so a 204 is never a
/// content-type failure and a non-JSON content type fails even a success
/// status. No I/O here; body reading is left to the caller on `Parse`.
pub fn validate(response: Box<dyn RawResponse>) -> ResponseOutcome {
    let status = response.status();
    if status == NO_CONTENT {
        return ResponseOutcome::NoContent;
    }

    let status_text = response.status_text().to_string();
    if status == NOT_FOUND {
        return ResponseOutcome::Failure(FailureInfo {
            reason: FailureReason::NotFound,
            status,
            status_text,
            response,
        });
    }

    let json_content = response.has_header(CONTENT_TYPE)
        && response
            .header(CONTENT_TYPE)
            .is_some_and(|value| value.contains(JSON_MIME));
    if !json_content {
        return ResponseOutcome::Failure(FailureInfo {
            reason: FailureReason::InvalidContentType,
            status,
            status_text,
            response,
        });
    }

    if !(200..300).contains(&status) {
        return ResponseOutcome::Failure(FailureInfo {
            reason: FailureReason::Status,
            status,
            status_text,
            response,
        });
    }

    ResponseOutcome::Parse(response)
}
