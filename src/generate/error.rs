//! Errors that can occur while reading a grammar description.

/// A malformed grammar description.
///
/// Every variant except [`GrammarError::EmptyGrammar`], [`GrammarError::InvalidImport`] and
/// [`GrammarError::InvalidBaseName`] carries the 1-based line number of the offending rule.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    /// The rule has no `:` between the variant name and its fields.
    #[error("line {line_number}: missing `:` between variant name and fields in `{line}`")]
    MissingSeparator {
        /// Line of the rule.
        line_number: usize,
        /// Text of the rule.
        line: String,
    },
    /// Nothing precedes the `:`.
    #[error("line {line_number}: missing variant name in `{line}`")]
    EmptyVariantName {
        /// Line of the rule.
        line_number: usize,
        /// Text of the rule.
        line: String,
    },
    /// A field descriptor is not exactly a type followed by a name.
    #[error("line {line_number}: field `{field}` must be written as `Type name`")]
    MalformedField {
        /// Line of the rule.
        line_number: usize,
        /// The offending field descriptor.
        field: String,
    },
    /// A variant or field name is not a valid identifier.
    #[error("line {line_number}: `{identifier}` is not a valid identifier")]
    InvalidIdentifier {
        /// Line of the rule.
        line_number: usize,
        /// The offending name.
        identifier: String,
    },
    /// A field type is not a valid Rust type, as written or after mapping.
    #[error("line {line_number}: `{ty}` is not a valid type")]
    InvalidType {
        /// Line of the rule.
        line_number: usize,
        /// The offending type.
        ty: String,
    },
    /// A field name collides with a method every node already has.
    #[error("line {line_number}: field `{name}` collides with the generated `{name}` method")]
    ReservedFieldName {
        /// Line of the rule.
        line_number: usize,
        /// The offending field name.
        name: String,
    },
    /// A variant name is already taken by the base type, the visitor, an import or a type the
    /// generated code refers to.
    #[error("line {line_number}: variant `{name}` collides with a name already in scope")]
    NameClash {
        /// Line of the rule.
        line_number: usize,
        /// The offending variant name.
        name: String,
    },
    /// Two variants map to the same visitor method.
    #[error(
        "line {line_number}: variant `{name}` and variant `{other}` on line {first_line_number} \
         both need the visitor method `visit_{method}`"
    )]
    VisitMethodClash {
        /// Line of the later rule.
        line_number: usize,
        /// The later variant name.
        name: String,
        /// The earlier variant name.
        other: String,
        /// Line of the earlier rule.
        first_line_number: usize,
        /// The shared method name without the `visit_` prefix.
        method: String,
    },
    /// The variant name was already declared by an earlier rule.
    #[error("line {line_number}: variant `{name}` is already declared on line {first_line_number}")]
    DuplicateVariant {
        /// Line of the repeated rule.
        line_number: usize,
        /// The repeated variant name.
        name: String,
        /// Line of the first declaration.
        first_line_number: usize,
    },
    /// Two fields of one rule end up with the same name.
    #[error("line {line_number}: field `{name}` is declared more than once")]
    DuplicateField {
        /// Line of the rule.
        line_number: usize,
        /// The repeated field name.
        name: String,
    },
    /// A configured import is not a valid `use` tree.
    #[error("`{import}` is not a valid import")]
    InvalidImport {
        /// The offending import.
        import: String,
    },
    /// The configured base name is not a valid identifier.
    #[error("`{name}` is not a valid base type name")]
    InvalidBaseName {
        /// The offending base name.
        name: String,
    },
    /// The grammar contains no rules at all.
    #[error("the grammar does not declare any rules")]
    EmptyGrammar,
}

impl GrammarError {
    /// The line of the grammar the error was found on, if any.
    #[must_use]
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::MissingSeparator { line_number, .. }
            | Self::EmptyVariantName { line_number, .. }
            | Self::MalformedField { line_number, .. }
            | Self::InvalidIdentifier { line_number, .. }
            | Self::DuplicateVariant { line_number, .. }
            | Self::DuplicateField { line_number, .. }
            | Self::InvalidType { line_number, .. }
            | Self::ReservedFieldName { line_number, .. }
            | Self::NameClash { line_number, .. }
            | Self::VisitMethodClash { line_number, .. } => Some(*line_number),
            Self::EmptyGrammar | Self::InvalidImport { .. } | Self::InvalidBaseName { .. } => None,
        }
    }
}
