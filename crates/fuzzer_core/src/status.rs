use std::fmt;

/// How alarming an HTTP stop condition is. Only affects presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    Warning,
    Notice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusExplanation {
    pub status: u16,
    /// `None` for codes outside the lookup table.
    pub title: Option<&'static str>,
    pub detail: Option<&'static str>,
    pub severity: Severity,
}

/// Maps a non-200 status to the text shown when the run stops.
pub fn explain_status(status: u16) -> StatusExplanation {
    let (title, detail, severity) = match lookup(status) {
        Some((title, detail, severity)) => (Some(title), detail, severity),
        None => (None, None, Severity::Critical),
    };
    StatusExplanation {
        status,
        title,
        detail,
        severity,
    }
}

fn lookup(status: u16) -> Option<(&'static str, Option<&'static str>, Severity)> {
    let entry = match status {
        400 => (
            "Bad Request",
            Some("Server cannot process the request"),
            Severity::Critical,
        ),
        401 => ("Unauthorized", Some("Authentication required"), Severity::Warning),
        403 => ("Forbidden", Some("Access denied"), Severity::Critical),
        404 => ("Not Found", Some("Resource not found"), Severity::Notice),
        429 => ("Too Many Requests", Some("Rate limit exceeded"), Severity::Warning),
        500 => ("Internal Server Error", None, Severity::Critical),
        502 => ("Bad Gateway", None, Severity::Critical),
        503 => ("Service Unavailable", None, Severity::Warning),
        _ => return None,
    };
    Some(entry)
}

impl StatusExplanation {
    /// Headline text, e.g. `Forbidden` or `Unknown error`.
    pub fn headline(&self) -> &'static str {
        self.title.unwrap_or("Unknown error")
    }

    /// Text following the headline, e.g. ` - Access denied` or ` with code 418`.
    pub fn trailer(&self) -> String {
        match (self.title, self.detail) {
            (None, _) => format!(" with code {}", self.status),
            (Some(_), Some(detail)) => format!(" - {detail}"),
            (Some(_), None) => String::new(),
        }
    }
}

impl fmt::Display for StatusExplanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.headline(), self.trailer())
    }
}
