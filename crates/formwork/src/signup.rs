//! The signup form preset
//!
//! The concrete form the original single-page demo implements: a name, a
//! domain-restricted email, a password, and a dynamic list of technologies
//! with a knowledge score each.

use std::collections::HashMap;

use formwork_schema::{CollectionSchema, NumberSchema, ObjectSchema, Schema, StringSchema};
use formwork_store::FormStore;

/// Email domain signups must belong to.
pub const EMAIL_DOMAIN: &str = "@rocketseat.com.br";

/// Schema for the signup form.
pub fn signup_schema() -> Schema {
    let tech = ObjectSchema::new()
        .field("title", StringSchema::new().non_empty("Title is required"))
        .field(
            "knowledge",
            NumberSchema::new()
                .coerce_message("Knowledge must be a number")
                .min(1.0, "Knowledge must be between 1 and 100")
                .max(100.0, "Knowledge must be between 1 and 100"),
        );

    ObjectSchema::new()
        .field(
            "name",
            StringSchema::new()
                .non_empty("Name is required")
                .trim()
                .capitalize_words(),
        )
        .field(
            "email",
            StringSchema::new()
                .non_empty("E-mail is required")
                .email("Invalid e-mail format")
                .trim()
                .lowercase()
                .refine(
                    |email| email.ends_with(EMAIL_DOMAIN),
                    "E-mail must belong to rocketseat.com.br",
                ),
        )
        .field(
            "password",
            StringSchema::new().min_chars(6, "Password must be at least 6 characters"),
        )
        .field(
            "techs",
            CollectionSchema::of(tech).min_items(2, "Add at least 2 technologies"),
        )
        .into()
}

/// Default values for a freshly appended tech entry: empty title, zero
/// knowledge.
pub fn default_tech_entry() -> formwork_schema::Value {
    let mut entry = HashMap::new();
    entry.insert("title".to_string(), "".into());
    entry.insert("knowledge".to_string(), 0.into());
    entry.into()
}

/// A ready-to-use store for the signup form.
pub fn signup_form() -> FormStore {
    FormStore::new(signup_schema())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_schema_is_well_formed() {
        assert!(signup_schema().ensure_well_formed().is_ok());
    }

    #[test]
    fn test_default_tech_entry_shape() {
        let entry = default_tech_entry();
        let map = entry.as_object().unwrap();
        assert_eq!(map.get("title").and_then(|v| v.as_str()), Some(""));
        assert_eq!(map.get("knowledge").and_then(|v| v.as_f64()), Some(0.0));
    }
}
