// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;
use url::Url;

/// Bearer credential for the GitHub GraphQL API.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Create a new token with validation.
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        let token = token.into().trim().to_string();

        if token.is_empty() {
            return Err(ValidationError::InvalidApiToken {
                reason: "token cannot be empty".to_string(),
            });
        }

        if token.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(ValidationError::InvalidApiToken {
                reason: "token must not contain whitespace or control characters".to_string(),
            });
        }

        Ok(Self(token))
    }

    /// Get the token as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Redact everything past the token type prefix
        let visible: String = self.0.chars().take(4).collect();
        write!(f, "{}...", visible)
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiToken({})", self)
    }
}

/// GitHub organization login whose projects are reported on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrgLogin(String);

impl OrgLogin {
    /// GitHub logins are at most 39 characters.
    const MAX_LENGTH: usize = 39;

    pub fn new(login: impl Into<String>) -> Result<Self, ValidationError> {
        let login = login.into().trim().to_string();
        let invalid = |reason: &str| ValidationError::InvalidOrganization {
            login: login.clone(),
            reason: reason.to_string(),
        };

        if login.is_empty() {
            return Err(ValidationError::EmptyField("organization"));
        }
        if login.chars().count() > Self::MAX_LENGTH {
            return Err(invalid("longer than 39 characters"));
        }
        if !login.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(invalid("only ASCII letters, digits and '-' are allowed"));
        }
        if login.starts_with('-') || login.ends_with('-') {
            return Err(invalid("cannot start or end with '-'"));
        }

        Ok(Self(login))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrgLogin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inclusive calendar-day window a report covers.
///
/// The window has date granularity: a timestamp is inside when its UTC date
/// lies in `start..=end`, so the whole end day counts. The start day also acts
/// as the project watermark for discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl ReportWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvertedWindow {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Parses a window from two `YYYY-MM-DD` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, ValidationError> {
        Self::new(parse_day(start)?, parse_day(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `timestamp` falls on a day inside the window.
    pub fn contains(&self, timestamp: &DateTime<Utc>) -> bool {
        let day = timestamp.date_naive();
        self.start <= day && day <= self.end
    }

    /// Midnight UTC of the first day; the recency cut-off for projects.
    pub fn watermark(&self) -> DateTime<Utc> {
        self.start.and_time(chrono::NaiveTime::MIN).and_utc()
    }

    /// `{start}_{end}`, as used in generated file names.
    pub fn label(&self) -> String {
        format!("{}_{}", self.start, self.end)
    }
}

impl fmt::Display for ReportWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

fn parse_day(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate {
        input: input.to_string(),
    })
}

/// Validated GraphQL endpoint URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint(Url);

impl ApiEndpoint {
    pub fn parse(url: &str) -> Result<Self, ValidationError> {
        match Url::parse(url) {
            Ok(parsed_url) => {
                if parsed_url.scheme() != "http" && parsed_url.scheme() != "https" {
                    return Err(ValidationError::InvalidUrl {
                        url: url.to_string(),
                        reason: "Only HTTP and HTTPS URLs are supported".to_string(),
                    });
                }
                Ok(Self(parsed_url))
            }
            Err(e) => Err(ValidationError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for ApiEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
