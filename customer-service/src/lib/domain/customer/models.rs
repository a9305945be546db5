use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::customer::errors::CustomerIdError;
use crate::domain::customer::errors::CustomerNameError;
use crate::domain::customer::errors::PhoneError;

/// Customer aggregate entity.
///
/// Carries no password hash: it only ever travels inside a
/// `CustomerDraft` on the way in and a `CredentialRecord` on the way out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: CustomerName,
    pub phone: Phone,
    pub active: bool,
    pub created: DateTime<Utc>,
}

/// Customer unique identifier, assigned by the customer store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomerId(pub i64);

impl CustomerId {
    /// Parse a customer ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not an integer
    /// * `NotPositive` - Integer is zero or negative
    pub fn from_string(s: &str) -> Result<Self, CustomerIdError> {
        let id = s
            .parse::<i64>()
            .map_err(|e| CustomerIdError::InvalidFormat(e.to_string()))?;

        if id <= 0 {
            return Err(CustomerIdError::NotPositive(id));
        }

        Ok(Self(id))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Customer display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerName(String);

impl CustomerName {
    const MAX_LENGTH: usize = 255;

    /// Create a validated customer name (surrounding whitespace is trimmed).
    ///
    /// # Errors
    /// * `Empty` - Name is blank
    /// * `TooLong` - Name exceeds 255 characters
    pub fn new(name: String) -> Result<Self, CustomerNameError> {
        let name = name.trim().to_string();
        let length = name.chars().count();

        if length == 0 {
            Err(CustomerNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(CustomerNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Customer phone number, which doubles as the login.
///
/// Logins are case-sensitive and compared exactly, so no normalisation
/// happens beyond trimming surrounding whitespace. The format is otherwise
/// free: existing records hold plain login names as well as numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone(String);

impl Phone {
    const MAX_LENGTH: usize = 64;

    /// Create a validated phone number.
    ///
    /// # Errors
    /// * `Empty` - Phone is blank
    /// * `TooLong` - Phone exceeds 64 characters
    pub fn new(phone: String) -> Result<Self, PhoneError> {
        let phone = phone.trim().to_string();
        let length = phone.chars().count();

        if length == 0 {
            Err(PhoneError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(PhoneError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(phone))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Customer fields as written to the store.
///
/// `password_hash` is `None` on updates that leave the password untouched.
#[derive(Clone)]
pub struct CustomerDraft {
    pub name: CustomerName,
    pub phone: Phone,
    pub password_hash: Option<String>,
}

impl fmt::Debug for CustomerDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomerDraft")
            .field("name", &self.name)
            .field("phone", &self.phone)
            .field(
                "password_hash",
                &self.password_hash.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Command for inserting (no id) or updating (with id) a customer.
#[derive(Clone)]
pub struct SaveCustomerCommand {
    pub id: Option<CustomerId>,
    pub name: CustomerName,
    pub phone: Phone,
    pub password: Option<String>,
}

impl SaveCustomerCommand {
    pub fn new(
        id: Option<CustomerId>,
        name: CustomerName,
        phone: Phone,
        password: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            phone,
            password,
        }
    }
}

/// Command for registering a new customer with a login password.
#[derive(Clone)]
pub struct RegisterCustomerCommand {
    pub name: CustomerName,
    pub phone: Phone,
    pub password: String,
}

impl RegisterCustomerCommand {
    pub fn new(name: CustomerName, phone: Phone, password: String) -> Self {
        Self {
            name,
            phone,
            password,
        }
    }
}
