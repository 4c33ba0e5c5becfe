use std::collections::BTreeMap;
use std::fmt;

use crate::domain::NewUser;

pub const MIN_AGE: u8 = 18;
pub const MAX_AGE: u8 = 100;

pub const NAME_REQUIRED: &str = "Name is required";
pub const JOB_REQUIRED: &str = "Job title is required";
pub const COUNTRY_REQUIRED: &str = "Country is required";
pub const AGE_OUT_OF_RANGE: &str = "Age must be between 18 and 100";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";

/// The five inputs of the add-user form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Job,
    Country,
    Age,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Job,
        FormField::Country,
        FormField::Age,
        FormField::Description,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Job => "job",
            Self::Country => "country",
            Self::Age => "age",
            Self::Description => "description",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full Name *",
            Self::Job => "Job Title *",
            Self::Country => "Country *",
            Self::Age => "Age *",
            Self::Description => "Description *",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "John Doe",
            Self::Job => "Software Engineer",
            Self::Country => "United States",
            Self::Age => "30",
            Self::Description => "Tell us about this user...",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-field error messages. Only fields with a problem have an entry.
pub type FieldErrors = BTreeMap<FormField, &'static str>;

/// Raw input exactly as typed, age included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub job: String,
    pub country: String,
    pub age: String,
    pub description: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Job => &self.job,
            FormField::Country => &self.country,
            FormField::Age => &self.age,
            FormField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Job => &mut self.job,
            FormField::Country => &mut self.country,
            FormField::Age => &mut self.age,
            FormField::Description => &mut self.description,
        };
        *slot = value;
    }
}

/// Checks every field and either builds the payload or reports every violation.
///
/// Text values are passed through untrimmed; trimming only decides blankness.
pub fn validate(fields: &FormFields) -> Result<NewUser, FieldErrors> {
    let mut errors = FieldErrors::new();

    if fields.name.trim().is_empty() {
        errors.insert(FormField::Name, NAME_REQUIRED);
    }
    if fields.job.trim().is_empty() {
        errors.insert(FormField::Job, JOB_REQUIRED);
    }
    if fields.country.trim().is_empty() {
        errors.insert(FormField::Country, COUNTRY_REQUIRED);
    }
    let age = parse_age(&fields.age);
    if age.is_none() {
        errors.insert(FormField::Age, AGE_OUT_OF_RANGE);
    }
    if fields.description.trim().is_empty() {
        errors.insert(FormField::Description, DESCRIPTION_REQUIRED);
    }

    match age {
        Some(age) if errors.is_empty() => Ok(NewUser {
            name: fields.name.clone(),
            job: fields.job.clone(),
            country: fields.country.clone(),
            age,
            description: fields.description.clone(),
        }),
        _ => Err(errors),
    }
}

/// Whole numbers within [`MIN_AGE`, `MAX_AGE`]; anything else is rejected.
fn parse_age(raw: &str) -> Option<u8> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .filter(|age| (MIN_AGE..=MAX_AGE).contains(age))
}
