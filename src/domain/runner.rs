use chrono::{DateTime, Utc};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::domain::ids::RunnerId;
use crate::utils::error::{Result, TrackerError};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
});

/// A syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(email: &str) -> Result<Self> {
        if !EMAIL_PATTERN.is_match(email) {
            return Err(TrackerError::InvalidEmail);
        }
        Ok(Self(email.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered participant.
///
/// The email address and identity are fixed at construction; only the name
/// can change, through [`Runner::rename`].
#[derive(Debug, Clone, PartialEq)]
pub struct Runner {
    id: RunnerId,
    name: String,
    email_address: EmailAddress,
    created_at: DateTime<Utc>,
}

impl Runner {
    pub fn new(name: &str, email_address: &str) -> Result<Self> {
        validate_name(name)?;
        let email_address = EmailAddress::parse(email_address)?;

        Ok(Self {
            id: RunnerId::new(),
            name: name.to_string(),
            email_address,
            created_at: Utc::now(),
        })
    }

    pub fn rename(&mut self, new_name: &str) -> Result<()> {
        validate_name(new_name)?;
        self.name = new_name.to_string();
        Ok(())
    }

    pub fn id(&self) -> RunnerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email_address(&self) -> &str {
        self.email_address.as_str()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(TrackerError::EmptyName);
    }
    Ok(())
}
