// src/presentation/http/forms.rs
//
// Declarative per-field validation for form submissions. Each form names its
// fields and rules once; validation is a single synchronous pass that
// accumulates every failure so the page can show them all at once.
use serde::Deserialize;

#[derive(Debug, Clone, Copy)]
pub enum Rule {
    Required,
    Length { min: usize, max: usize },
    MinLength(usize),
    EqualTo { field: &'static str, message: &'static str },
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: &'static str,
    pub label: &'static str,
    pub rules: &'static [Rule],
}

#[derive(Debug, Clone)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn for_field(&self, field: &str) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(move |err| err.field == field)
            .map(|err| err.message.as_str())
    }
}

fn apply_rule(
    spec: &FieldSpec,
    rule: &Rule,
    value: &str,
    lookup: &dyn Fn(&str) -> String,
    errors: &mut FormErrors,
) {
    match rule {
        Rule::Required => {
            if value.is_empty() {
                errors.push(spec.field, format!("{} is required", spec.label));
            }
        }
        Rule::Length { min, max } => {
            let count = value.chars().count();
            if count < *min || count > *max {
                errors.push(
                    spec.field,
                    format!("{} must be between {min} and {max} characters", spec.label),
                );
            }
        }
        Rule::MinLength(min) => {
            if value.chars().count() < *min {
                errors.push(
                    spec.field,
                    format!("{} must be at least {min} characters", spec.label),
                );
            }
        }
        Rule::EqualTo { field, message } => {
            if value != lookup(field) {
                errors.push(spec.field, *message);
            }
        }
    }
}

/// Evaluate every rule of every field against the submitted values.
pub fn validate(specs: &[FieldSpec], lookup: &dyn Fn(&str) -> String) -> FormErrors {
    let mut errors = FormErrors::default();
    for spec in specs {
        let value = lookup(spec.field);
        for rule in spec.rules {
            apply_rule(spec, rule, &value, lookup, &mut errors);
        }
    }
    errors
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm: String,
}

const REGISTER_SPECS: &[FieldSpec] = &[
    FieldSpec {
        field: "name",
        label: "Name",
        rules: &[Rule::Length { min: 1, max: 50 }],
    },
    FieldSpec {
        field: "username",
        label: "Username",
        rules: &[Rule::Length { min: 4, max: 25 }],
    },
    FieldSpec {
        field: "email",
        label: "Email",
        rules: &[Rule::Length { min: 6, max: 50 }],
    },
    FieldSpec {
        field: "password",
        label: "Password",
        rules: &[
            Rule::Required,
            Rule::EqualTo {
                field: "confirm",
                message: "Passwords do not match",
            },
        ],
    },
];

impl RegisterForm {
    pub fn validate(&self) -> FormErrors {
        validate(REGISTER_SPECS, &|field| match field {
            "name" => self.name.clone(),
            "username" => self.username.clone(),
            "email" => self.email.clone(),
            "password" => self.password.clone(),
            "confirm" => self.confirm.clone(),
            _ => String::new(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

const ARTICLE_SPECS: &[FieldSpec] = &[
    FieldSpec {
        field: "title",
        label: "Title",
        rules: &[Rule::Length { min: 1, max: 200 }],
    },
    FieldSpec {
        field: "body",
        label: "Body",
        rules: &[Rule::MinLength(30)],
    },
];

impl ArticleForm {
    pub fn validate(&self) -> FormErrors {
        validate(ARTICLE_SPECS, &|field| match field {
            "title" => self.title.clone(),
            "body" => self.body.clone(),
            _ => String::new(),
        })
    }
}
