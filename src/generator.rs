use crate::spec::{EnumSpecification, ValueName};
use crate::validator::Validated;

const INDENT: &str = "\t";

/// Renders C# enum declarations from validated specifications
#[derive(Debug, Default, Clone, Copy)]
pub struct EnumGenerator;

impl EnumGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate<V: ValueName>(&self, spec: &Validated<'_, V>) -> String {
        generate_code(spec.spec())
    }
}

fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

/// Render `spec` without validating it first.
///
/// Output is `namespace { class { enum { values } } }` with the optional
/// scopes left out, one tab per nesting level and a newline after every
/// line. Prefer `EnumGenerator::generate`, which only accepts checked specs.
pub fn generate_code<V: ValueName>(spec: &EnumSpecification<V>) -> String {
    let mut lines = Vec::new();
    let mut depth = 0;

    if spec.has_namespace() {
        lines.push(format!("namespace {}{{", spec.namespace_name));
        depth += 1;
    }

    if spec.has_class() {
        let partial = if spec.is_partial { "partial " } else { "" };
        lines.push(format!(
            "{}{}{}class {}{{",
            indent(depth),
            spec.class_access_type.keyword(),
            partial,
            spec.class_name
        ));
        depth += 1;
    }

    lines.push(format!(
        "{}{}enum {}{{",
        indent(depth),
        spec.enum_access_type.keyword(),
        spec.enumerator_name
    ));
    depth += 1;

    let names = spec.value_names();
    let last = names.len().saturating_sub(1);
    for (i, name) in names.iter().enumerate() {
        let separator = if i < last { "," } else { "" };
        lines.push(format!("{}{}{}", indent(depth), name, separator));
    }

    // close scopes innermost first
    for level in (0..depth).rev() {
        lines.push(format!("{}}}", indent(level)));
    }

    let mut code = lines.join("\n");
    code.push('\n');
    code
}
