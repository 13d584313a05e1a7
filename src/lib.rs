pub mod access;
pub mod asset;
pub mod config;
pub mod error;
pub mod generator;
pub mod identifier;
pub mod output;
pub mod scanner;
pub mod spec;
pub mod validator;

pub use access::AccessType;
pub use error::{Error, Result};
pub use generator::{generate_code, EnumGenerator};
pub use spec::{EnumSpecification, ValueEntry, ValueName};
pub use validator::{check, validate, Diagnostic, Validated, ValidationReport};
