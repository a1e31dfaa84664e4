//! Buyer details submitted at checkout.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::orders::PaymentMethod;

/// Longest accepted first name, last name or city.
pub const NAME_MAX_LENGTH: usize = 100;

/// Longest accepted phone number or postal code.
pub const CODE_MAX_LENGTH: usize = 20;

/// Longest accepted email address.
pub const EMAIL_MAX_LENGTH: usize = 254;

/// Checkout form fields as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuyerDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub payment_method: String,
    pub notes: Option<String>,
}

/// Validated buyer, shipping and payment details stored on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buyer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub payment_method: PaymentMethod,
    pub notes: String,
}

impl Buyer {
    /// `first_name last_name`
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Form field name
    pub field: String,

    /// What is wrong with it
    pub message: String,
}

/// Every field that failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{} buyer field(s) failed validation", .fields.len())]
pub struct ValidationErrors {
    /// Rejected fields, in form order
    pub fields: Vec<FieldError>,
}

impl ValidationErrors {
    fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// Whether `field` was rejected.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|error| error.field == field)
    }

    /// Whether no field was rejected.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl BuyerDetails {
    /// Check required fields, lengths, email shape and payment method.
    ///
    /// Surrounding whitespace is trimmed from every field.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once.
    pub fn validate(&self) -> Result<Buyer, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let first_name = required(&mut errors, "first_name", &self.first_name, NAME_MAX_LENGTH);
        let last_name = required(&mut errors, "last_name", &self.last_name, NAME_MAX_LENGTH);
        let email = required(&mut errors, "email", &self.email, EMAIL_MAX_LENGTH);
        let phone = required(&mut errors, "phone", &self.phone, CODE_MAX_LENGTH);
        let address = required(&mut errors, "address", &self.address, usize::MAX);
        let city = required(&mut errors, "city", &self.city, NAME_MAX_LENGTH);
        let postal_code = required(&mut errors, "postal_code", &self.postal_code, CODE_MAX_LENGTH);

        if !email.is_empty() && !errors.contains("email") && !looks_like_email(&email) {
            errors.add("email", "enter a valid email address");
        }

        let payment_method = self.payment_method.trim().parse().ok();

        if payment_method.is_none() {
            errors.add("payment_method", "choose card, cash or bank");
        }

        let notes = self
            .notes
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();

        match payment_method {
            Some(payment_method) if errors.is_empty() => Ok(Buyer {
                first_name,
                last_name,
                email,
                phone,
                address,
                city,
                postal_code,
                payment_method,
                notes,
            }),
            _ => Err(errors),
        }
    }
}

fn required(errors: &mut ValidationErrors, field: &str, value: &str, max_length: usize) -> String {
    let value = value.trim();

    if value.is_empty() {
        errors.add(field, "this field is required");
    } else if value.chars().count() > max_length {
        errors.add(
            field,
            format!("must be at most {max_length} characters long"),
        );
    }

    value.to_string()
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn details() -> BuyerDetails {
        BuyerDetails {
            first_name: " Ada ".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 20 7946 0000".to_string(),
            address: "12 St James's Square".to_string(),
            city: "London".to_string(),
            postal_code: "SW1Y 4JH".to_string(),
            payment_method: "cash".to_string(),
            notes: None,
        }
    }

    #[test]
    fn valid_details_are_trimmed_and_typed() -> TestResult {
        let buyer = details().validate()?;

        assert_eq!(buyer.first_name, "Ada");
        assert_eq!(buyer.payment_method, PaymentMethod::Cash);
        assert_eq!(buyer.notes, "");
        assert_eq!(buyer.full_name(), "Ada Lovelace");

        Ok(())
    }

    #[test]
    fn every_failing_field_is_reported() -> TestResult {
        let mut details = details();

        details.first_name = "   ".to_string();
        details.email = "not-an-email".to_string();
        details.postal_code = "1".repeat(CODE_MAX_LENGTH + 1);
        details.payment_method = "cheque".to_string();

        let Err(errors) = details.validate() else {
            return Err("details should be rejected".into());
        };

        let fields: Vec<&str> = errors.fields.iter().map(|error| error.field.as_str()).collect();

        assert_eq!(fields, ["first_name", "postal_code", "email", "payment_method"]);

        Ok(())
    }

    #[test]
    fn email_shapes() {
        assert!(looks_like_email("a@b.co"), "plain address");
        assert!(!looks_like_email("a@b"), "no dot in domain");
        assert!(!looks_like_email("@b.co"), "empty local part");
        assert!(!looks_like_email("a@@b.co"), "double at");
        assert!(!looks_like_email("a b@c.co"), "whitespace");
    }

    #[test]
    fn name_length_counts_characters() -> TestResult {
        let mut details = details();

        details.city = "Ж".repeat(NAME_MAX_LENGTH);

        details.validate()?;

        Ok(())
    }
}
