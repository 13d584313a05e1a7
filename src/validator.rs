use crate::access::AccessType;
use crate::identifier::{is_valid_identifier, is_valid_namespace};
use crate::spec::{EnumSpecification, ValueName};
use std::ops::Deref;
use thiserror::Error;

/// Characters that may not appear in an output file stem on any host
const INVALID_FILE_NAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// A single problem found in an enum specification.
///
/// The `Display` text is meant to be shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("File name is empty")]
    EmptyFileName,

    #[error("File name \"{0}\" is not a valid name")]
    InvalidFileName(String),

    #[error("Namespace name \"{0}\" is not a valid name")]
    InvalidNamespace(String),

    #[error("Class name \"{0}\" is not a valid name")]
    InvalidClassName(String),

    #[error("Class can only be none, public, or internal access")]
    ClassAccess(AccessType),

    #[error("Enumerator name \"{0}\" is not a valid name")]
    InvalidEnumName(String),

    #[error("Enum not in a class can only be none, public, or internal access")]
    EnumAccess(AccessType),

    #[error("There are no value names")]
    NoValues,

    #[error("Value name {index} \"{name}\" is not a valid name")]
    InvalidValueName { index: usize, name: String },

    #[error("Value names {first} and {second} both are {name}")]
    DuplicateValue {
        first: usize,
        second: usize,
        name: String,
    },
}

/// Outcome of validating one specification. Diagnostics keep check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }

    fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// A specification that passed every check. Only `check` hands these out.
#[derive(Debug)]
pub struct Validated<'a, V> {
    spec: &'a EnumSpecification<V>,
}

impl<'a, V> Validated<'a, V> {
    pub fn spec(&self) -> &'a EnumSpecification<V> {
        self.spec
    }
}

impl<V> Deref for Validated<'_, V> {
    type Target = EnumSpecification<V>;

    fn deref(&self) -> &Self::Target {
        self.spec
    }
}

/// Run every check and collect all failures; nothing short-circuits.
pub fn validate<V: ValueName>(spec: &EnumSpecification<V>) -> ValidationReport {
    let mut report = ValidationReport::default();

    // file name
    if spec.file_name.is_empty() {
        report.push(Diagnostic::EmptyFileName);
    } else if spec
        .file_name
        .chars()
        .any(|c| c.is_control() || INVALID_FILE_NAME_CHARS.contains(&c))
    {
        report.push(Diagnostic::InvalidFileName(spec.file_name.clone()));
    }

    // namespace levels
    if spec.has_namespace() && !is_valid_namespace(&spec.namespace_name) {
        report.push(Diagnostic::InvalidNamespace(spec.namespace_name.clone()));
    }

    // class
    if spec.has_class() {
        if !is_valid_identifier(&spec.class_name) {
            report.push(Diagnostic::InvalidClassName(spec.class_name.clone()));
        }
        if !spec.class_access_type.is_public() {
            report.push(Diagnostic::ClassAccess(spec.class_access_type));
        }
    }

    // enumerator
    if !is_valid_identifier(&spec.enumerator_name) {
        report.push(Diagnostic::InvalidEnumName(spec.enumerator_name.clone()));
    }
    if !spec.has_class() && !spec.enum_access_type.is_public() {
        report.push(Diagnostic::EnumAccess(spec.enum_access_type));
    }

    // values
    if spec.values.is_empty() {
        report.push(Diagnostic::NoValues);
    }

    let names = spec.value_names();
    for (index, name) in names.iter().enumerate() {
        if !is_valid_identifier(name) {
            report.push(Diagnostic::InvalidValueName {
                index,
                name: name.to_string(),
            });
        }
    }

    for (first, name) in names.iter().enumerate() {
        for (second, other) in names.iter().enumerate().skip(first + 1) {
            if name == other {
                report.push(Diagnostic::DuplicateValue {
                    first,
                    second,
                    name: name.to_string(),
                });
            }
        }
    }

    report
}

/// Gate generation on a clean validation.
pub fn check<V: ValueName>(
    spec: &EnumSpecification<V>,
) -> Result<Validated<'_, V>, ValidationReport> {
    let report = validate(spec);
    if report.is_ok() {
        Ok(Validated { spec })
    } else {
        Err(report)
    }
}
