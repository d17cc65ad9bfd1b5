//! Accepted request bodies for creating and updating adverts.
//!
//! Both shapes go through [`normalize`], which keeps only the string fields a
//! client actually supplied. A `null` counts as not supplied and keys other than
//! the advert fields are ignored.

use crate::utils::validation::{self, FieldError};
use serde_json::Value;
use validator::Validate;

const FIELDS: [&str; 3] = ["title", "description", "owner"];

#[derive(Debug, Clone, PartialEq)]
pub struct CreateAdvert {
    pub title: String,
    pub description: String,
    pub owner: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateAdvert {
    pub title: Option<String>,
    pub description: Option<String>,
    pub owner: Option<String>,
}

#[derive(Default, Validate)]
struct SuppliedFields {
    #[validate(required(code = "missing", message = "Field required"))]
    title: Option<String>,
    #[validate(required(code = "missing", message = "Field required"))]
    description: Option<String>,
    #[validate(required(code = "missing", message = "Field required"))]
    owner: Option<String>,
}

impl SuppliedFields {
    fn slot(&mut self, field: &str) -> Option<&mut Option<String>> {
        match field {
            "title" => Some(&mut self.title),
            "description" => Some(&mut self.description),
            "owner" => Some(&mut self.owner),
            _ => None,
        }
    }
}

fn normalize(raw: &Value) -> (SuppliedFields, Vec<FieldError>) {
    let mut supplied = SuppliedFields::default();
    let mut errors = vec![];

    let Value::Object(map) = raw else {
        errors.push(FieldError::new(
            None,
            "model_type",
            "Input should be a valid dictionary",
        ));
        return (supplied, errors);
    };

    for field in FIELDS {
        match map.get(field) {
            None | Some(Value::Null) => {}
            Some(Value::String(value)) => {
                if let Some(slot) = supplied.slot(field) {
                    *slot = Some(value.clone());
                }
            }
            Some(_) => errors.push(FieldError::new(
                Some(field),
                "string_type",
                "Input should be a valid string",
            )),
        }
    }

    (supplied, errors)
}

fn field_order(error: &FieldError) -> usize {
    error
        .field()
        .and_then(|field| FIELDS.iter().position(|known| *known == field))
        .unwrap_or(FIELDS.len())
}

pub fn validate_create(raw: &Value) -> Result<CreateAdvert, Vec<FieldError>> {
    let (supplied, mut errors) = normalize(raw);

    if let Err(missing) = supplied.validate() {
        // A field with the wrong type is already reported and also left unset.
        let missing: Vec<FieldError> = validation::from_validation_errors(&missing)
            .into_iter()
            .filter(|error| !errors.iter().any(|known| known.loc == error.loc))
            .collect();
        errors.extend(missing);
    }

    match (supplied.title, supplied.description, supplied.owner) {
        (Some(title), Some(description), Some(owner)) if errors.is_empty() => Ok(CreateAdvert {
            title,
            description,
            owner,
        }),
        _ => {
            errors.sort_by_key(field_order);
            Err(errors)
        }
    }
}

pub fn validate_update(raw: &Value) -> Result<UpdateAdvert, Vec<FieldError>> {
    let (supplied, errors) = normalize(raw);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(UpdateAdvert {
        title: supplied.title,
        description: supplied.description,
        owner: supplied.owner,
    })
}
