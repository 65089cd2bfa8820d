//! Validation helpers and the validating JSON extractor.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use std::borrow::Cow;
use std::fmt;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::ProductError;

/// Fails unless `value` has at least one non-whitespace character.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank")
            .with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

/// Reads a missing-or-null value as `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One violated constraint, keyed by the wire (camelCase) field name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Flattens every field error, sorted by field then message.
pub fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = to_camel_case(&field);
            errs.iter().map(move |err| FieldViolation {
                field: field.clone(),
                message: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string()),
            })
        })
        .collect();

    violations.sort();
    violations
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// JSON body extractor that runs `Validate` before the handler.
///
/// Rejections surface as [`ProductError`] so malformed bodies and
/// constraint violations share the domain's error body. Wrong value types
/// are a 400; syntax errors and a missing content type keep the
/// extractor's status.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ProductError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                let status = match &rejection {
                    JsonRejection::JsonDataError(_) => StatusCode::BAD_REQUEST,
                    other => other.status(),
                };
                ProductError::InvalidBody {
                    status,
                    message: rejection.body_text(),
                }
            })?;

        data.validate()
            .map_err(|e| ProductError::Validation(collect_violations(&e)))?;

        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateProductDto, UpdateProductDto};

    fn messages(errors: &ValidationErrors) -> Vec<String> {
        collect_violations(errors)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("x").is_ok());
        assert!(not_blank("  a ").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank(" \t\n").is_err());
    }

    #[test]
    fn test_create_dto_reports_every_field() {
        let dto = CreateProductDto {
            name: String::new(),
            description: String::new(),
            price: 0.0,
            stock_quantity: 0,
        };
        let errors = dto.validate().unwrap_err();

        assert_eq!(
            messages(&errors),
            vec![
                "description: must not be blank",
                "name: must not be blank",
                "price: must be greater than or equal to 0.1",
                "stockQuantity: must be greater than or equal to 1",
            ]
        );
    }

    #[test]
    fn test_empty_create_body_reports_every_field() {
        let dto: CreateProductDto = serde_json::from_str("{}").unwrap();
        let errors = dto.validate().unwrap_err();

        assert_eq!(
            messages(&errors),
            vec![
                "description: must not be blank",
                "name: must not be blank",
                "price: must be greater than or equal to 0.1",
                "stockQuantity: must be greater than or equal to 1",
            ]
        );
    }

    #[test]
    fn test_null_name_is_blank() {
        let dto: CreateProductDto = serde_json::from_str(
            r#"{"name":null,"description":"d","price":10.0,"stockQuantity":1}"#,
        )
        .unwrap();
        let errors = dto.validate().unwrap_err();
        assert_eq!(messages(&errors), vec!["name: must not be blank"]);
    }

    #[test]
    fn test_create_dto_boundary_price_is_valid() {
        let dto = CreateProductDto {
            name: "n".into(),
            description: "d".into(),
            price: 0.1,
            stock_quantity: 1,
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_update_dto_blank_text_fields() {
        let dto = UpdateProductDto {
            id: "id1".into(),
            name: "   ".into(),
            description: String::new(),
            price: 10.0,
            stock_quantity: 1,
        };
        let errors = dto.validate().unwrap_err();

        assert_eq!(
            messages(&errors),
            vec![
                "description: must not be blank",
                "name: must not be blank"
            ]
        );
    }

    #[test]
    fn test_update_dto_price_floor_is_one() {
        let dto = UpdateProductDto {
            id: "id1".into(),
            name: "n".into(),
            description: "d".into(),
            price: 0.5,
            stock_quantity: 1,
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(
            messages(&errors),
            vec!["price: must be greater than or equal to 1"]
        );
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("stock_quantity"), "stockQuantity");
        assert_eq!(to_camel_case("name"), "name");
    }
}
