use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

static EMAIL_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^[a-z0-9_'+\-.]*[a-z0-9_+-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .case_insensitive(true)
        .build()
        .expect("email pattern is valid")
});

/// One of the four slots of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Validation messages keyed by the field that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Removes the entry for `field`, returning whether there was one.
    pub fn clear(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    // first message recorded for a field sticks
    fn record(&mut self, field: Field, message: &str) {
        self.0.entry(field).or_insert_with(|| message.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// At least this many characters (Unicode scalar values).
    MinLength(usize),
    Email,
}

impl Rule {
    pub fn check(&self, value: &str) -> bool {
        match self {
            Rule::MinLength(min) => value.chars().count() >= *min,
            Rule::Email => is_email(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub field: Field,
    pub rule: Rule,
    pub message: &'static str,
}

/// Ordered rule set; for every field the first failing rule wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    rules: Vec<FieldRule>,
}

impl Schema {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    pub fn contact() -> Self {
        Self::new(vec![
            FieldRule {
                field: Field::Name,
                rule: Rule::MinLength(2),
                message: "Name must be at least 2 characters",
            },
            FieldRule {
                field: Field::Email,
                rule: Rule::Email,
                message: "Please enter a valid email address",
            },
            FieldRule {
                field: Field::Subject,
                rule: Rule::MinLength(5),
                message: "Subject must be at least 5 characters",
            },
            FieldRule {
                field: Field::Message,
                rule: Rule::MinLength(10),
                message: "Message must be at least 10 characters",
            },
        ])
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Checks every rule against `data`. An empty result means valid.
    pub fn validate(&self, data: &FormData) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for FieldRule {
            field,
            rule,
            message,
        } in &self.rules
        {
            if !rule.check(data.get(*field)) {
                errors.record(*field, message);
            }
        }
        errors
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::contact()
    }
}

fn is_email(value: &str) -> bool {
    let Some((local, _)) = value.split_once('@') else {
        return false;
    };
    !local.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid() -> FormData {
        FormData {
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            subject: "Hello there".to_string(),
            message: "This is a test message".to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let errors = Schema::contact().validate(&valid());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_single_failing_field() {
        let data = FormData {
            name: "A".to_string(),
            ..valid()
        };
        let errors = Schema::contact().validate(&data);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::Name),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn test_every_failing_field_is_reported() {
        let errors = Schema::contact().validate(&FormData::default());
        let got = errors.iter().collect::<Vec<_>>();
        assert_eq!(
            got,
            vec![
                (Field::Name, "Name must be at least 2 characters"),
                (Field::Email, "Please enter a valid email address"),
                (Field::Subject, "Subject must be at least 5 characters"),
                (Field::Message, "Message must be at least 10 characters"),
            ]
        );
    }

    #[test]
    fn test_length_boundaries() {
        let schema = Schema::contact();

        let mut data = valid();
        data.name = "Al".to_string();
        data.message = "0123456789".to_string();
        data.subject = "Hello".to_string();
        assert!(schema.validate(&data).is_empty());

        data.name = "A".to_string();
        data.message = "012345678".to_string();
        data.subject = "Hell".to_string();
        let errors = schema.validate(&data);
        assert!(errors.contains(Field::Name));
        assert!(errors.contains(Field::Message));
        assert!(errors.contains(Field::Subject));
        assert!(!errors.contains(Field::Email));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        assert!(!Rule::MinLength(2).check("é"));
        assert!(Rule::MinLength(2).check("éé"));
    }

    #[test]
    fn test_astral_characters_count_once() {
        // one scalar value even though it is two UTF-16 units
        let data = FormData {
            name: "😀".to_string(),
            ..valid()
        };
        let errors = Schema::contact().validate(&data);
        assert_eq!(
            errors.get(Field::Name),
            Some("Name must be at least 2 characters")
        );

        let data = FormData {
            name: "😀😀".to_string(),
            ..valid()
        };
        assert!(Schema::contact().validate(&data).is_empty());
    }

    #[test]
    fn test_email_format() {
        for ok in [
            "jo@x.com",
            "first.last@example.co.uk",
            "a+tag@sub-domain.example.org",
            "O'Brien@Example.COM",
        ] {
            assert!(is_email(ok), "{ok} should be accepted");
        }
        for bad in [
            "",
            "plain",
            "@x.com",
            "jo@",
            "jo@x",
            "jo@x.c",
            ".jo@x.com",
            "jo.@x.com",
            "j..o@x.com",
            "jo@-x.com",
            "jo@x..com",
            "jo @x.com",
            "jo@x.com ",
        ] {
            assert!(!is_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let schema = Schema::new(vec![
            FieldRule {
                field: Field::Name,
                rule: Rule::MinLength(2),
                message: "too short",
            },
            FieldRule {
                field: Field::Name,
                rule: Rule::MinLength(4),
                message: "still too short",
            },
        ]);
        let data = FormData {
            name: "A".to_string(),
            ..valid()
        };
        assert_eq!(schema.validate(&data).get(Field::Name), Some("too short"));

        let data = FormData {
            name: "Abc".to_string(),
            ..valid()
        };
        assert_eq!(
            schema.validate(&data).get(Field::Name),
            Some("still too short")
        );
    }

    #[test]
    fn test_form_data_get_set() {
        let mut data = FormData::default();
        assert!(data.is_empty());
        for field in Field::ALL {
            data.set(field, field.to_string());
        }
        assert_eq!(data.get(Field::Subject), "subject");
        assert!(!data.is_empty());
    }

    #[test]
    fn test_field_errors_clear() {
        let mut errors = Schema::contact().validate(&FormData::default());
        assert!(errors.clear(Field::Email));
        assert!(!errors.clear(Field::Email));
        assert_eq!(errors.len(), 3);
    }
}
