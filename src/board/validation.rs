//! Client-side form validation

use std::fmt;

use thiserror::Error;

/// Form fields that can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Company,
    Location,
    Salary,
    JobType,
    Name,
    Email,
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::Company => "company",
            Field::Location => "location",
            Field::Salary => "salary",
            Field::JobType => "job type",
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
        };
        f.write_str(name)
    }
}

/// Fields that are empty or hold an unacceptable value
#[derive(Debug, Clone, Default, PartialEq, Error)]
pub struct ValidationError {
    /// Required fields left empty, in form order
    pub missing: Vec<Field>,
    /// Fields with a value that was rejected, with the reason
    pub invalid: Vec<(Field, String)>,
}

impl ValidationError {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.invalid.is_empty()
    }

    /// Record `field` as missing when `value` is blank
    pub fn require(&mut self, field: Field, value: &str) {
        if value.trim().is_empty() {
            self.missing.push(field);
        }
    }

    pub fn reject(&mut self, field: Field, reason: impl Into<String>) {
        self.invalid.push((field, reason.into()));
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            let names: Vec<String> = self.missing.iter().map(Field::to_string).collect();
            parts.push(format!("Missing required fields: {}", names.join(", ")));
        }
        for (field, reason) in &self.invalid {
            parts.push(format!("{} {}", field, reason));
        }
        write!(f, "{}", parts.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_flags_blank_values() {
        let mut v = ValidationError::default();
        v.require(Field::Title, "Engineer");
        v.require(Field::Company, "   ");
        v.require(Field::Location, "");
        assert_eq!(v.missing, vec![Field::Company, Field::Location]);
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationError::default().into_result().is_ok());

        let mut v = ValidationError::default();
        v.reject(Field::Salary, "must not be negative");
        assert!(v.into_result().is_err());
    }

    #[test]
    fn test_display_lists_fields() {
        let mut v = ValidationError::default();
        v.require(Field::Title, "");
        v.require(Field::JobType, "");
        v.reject(Field::Salary, "must be a whole number");

        assert_eq!(
            v.to_string(),
            "Missing required fields: title, job type; salary must be a whole number"
        );
    }
}
