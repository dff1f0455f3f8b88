//! In-memory model of a grammar description.

use std::{collections::HashMap, str::FromStr};

use getset::{CopyGetters, Getters};

use crate::util;

use super::{config::GeneratorConfig, error::GrammarError};

/// Names the generated code refers to unqualified, or uses as generic parameters.
const GENERATED_CODE_NAMES: &[&str] = &["Box", "Option", "From", "T", "V"];

/// Methods every generated node has, which a field getter would collide with.
const NODE_METHOD_NAMES: &[&str] = &["new", "accept"];

/// An ordered list of rules, one per node variant.
///
/// Syntax Synopsis:
///
/// ```ebnf
/// Grammar:
///     (Rule | Comment | EmptyLine)*
///     ;
/// Rule:
///     Identifier ':' Field (',' Field)*
///     ;
/// Field:
///     Type Identifier
///     ;
/// Comment:
///     '#' .*
///     ;
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Grammar {
    /// The rules in declaration order.
    #[get = "pub"]
    rules: Vec<Rule>,
}

/// A single node variant and its fields.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct Rule {
    /// The variant name.
    #[get = "pub"]
    name: String,
    /// The fields in declaration order.
    #[get = "pub"]
    fields: Vec<Field>,
    /// The line (starting at 1) the rule was declared on.
    #[get_copy = "pub"]
    line_number: usize,
}

/// A typed field of a [`Rule`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct Field {
    /// The field type, as written in the grammar.
    #[get = "pub"]
    ty: String,
    /// The field name, as written in the grammar.
    #[get = "pub"]
    name: String,
}

impl Grammar {
    /// Parses a grammar description.
    ///
    /// The whole input is validated before anything is returned.
    ///
    /// # Errors
    /// - [`GrammarError`] describing the first malformed line.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse(source: &str) -> Result<Self, GrammarError> {
        let mut rules = Vec::new();
        let mut declared_on = HashMap::new();
        let mut visit_methods = HashMap::<String, (String, usize)>::new();

        for (index, line) in source.lines().enumerate() {
            let line_number = index + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let rule = Rule::parse(line_number, trimmed)?;
            tracing::trace!(name = %rule.name, fields = rule.fields.len(), "Parsed rule");

            if let Some(&first_line_number) = declared_on.get(&rule.name) {
                return Err(GrammarError::DuplicateVariant {
                    line_number,
                    name: rule.name,
                    first_line_number,
                });
            }
            declared_on.insert(rule.name.clone(), line_number);

            if let Some((other, first_line_number)) = visit_methods.get(&rule.snake_name()) {
                return Err(GrammarError::VisitMethodClash {
                    line_number,
                    method: rule.snake_name(),
                    name: rule.name,
                    other: other.clone(),
                    first_line_number: *first_line_number,
                });
            }
            visit_methods.insert(rule.snake_name(), (rule.name.clone(), line_number));

            rules.push(rule);
        }

        if rules.is_empty() {
            return Err(GrammarError::EmptyGrammar);
        }

        tracing::debug!(rules = rules.len(), "Parsed grammar");

        Ok(Self { rules })
    }

    /// Checks that the rules render to code that compiles next to the configured base type and
    /// imports.
    ///
    /// # Errors
    /// - [`GrammarError::InvalidBaseName`] if the base name is not a usable identifier.
    /// - [`GrammarError::InvalidImport`] if an import is not a valid `use` tree.
    /// - [`GrammarError::NameClash`] if a variant is named like the base type, the visitor, an
    ///   imported name or a name the generated code refers to.
    /// - [`GrammarError::InvalidType`] if a mapped field type is not a valid type.
    pub fn validate(&self, config: &GeneratorConfig) -> Result<(), GrammarError> {
        let base_name = config.base_name();
        if !util::is_identifier(base_name) || util::is_rust_keyword(base_name) {
            return Err(GrammarError::InvalidBaseName {
                name: base_name.clone(),
            });
        }

        let visitor_name = config.visitor_name();
        let imported_names = config.imported_names()?;

        for rule in &self.rules {
            let name = rule.name.as_str();
            if name == base_name
                || name == visitor_name
                || imported_names.iter().any(|imported| imported == name)
                || GENERATED_CODE_NAMES.contains(&name)
            {
                return Err(GrammarError::NameClash {
                    line_number: rule.line_number,
                    name: rule.name.clone(),
                });
            }

            for field in &rule.fields {
                let field_type = config.field_type(&field.ty);
                if !is_type(&field_type) {
                    return Err(GrammarError::InvalidType {
                        line_number: rule.line_number,
                        ty: field_type,
                    });
                }
            }
        }

        Ok(())
    }
}

impl FromStr for Grammar {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Rule {
    /// Parses one `Name : Type field, Type field` line.
    fn parse(line_number: usize, line: &str) -> Result<Self, GrammarError> {
        let (name, field_list) = line
            .split_once(':')
            .ok_or_else(|| GrammarError::MissingSeparator {
                line_number,
                line: line.to_string(),
            })?;

        let name = name.trim();
        if name.is_empty() {
            return Err(GrammarError::EmptyVariantName {
                line_number,
                line: line.to_string(),
            });
        }
        if !util::is_identifier(name) || util::is_rust_keyword(name) {
            return Err(GrammarError::InvalidIdentifier {
                line_number,
                identifier: name.to_string(),
            });
        }

        let mut fields = Vec::new();
        for descriptor in field_list.split(',') {
            let field = Field::parse(line_number, descriptor.trim())?;

            let snake_name = util::to_snake_case(&field.name);
            if fields
                .iter()
                .any(|other: &Field| util::to_snake_case(&other.name) == snake_name)
            {
                return Err(GrammarError::DuplicateField {
                    line_number,
                    name: field.name,
                });
            }

            fields.push(field);
        }

        Ok(Self {
            name: name.to_string(),
            fields,
            line_number,
        })
    }

    /// The variant name in `snake_case`, used for visitor method names.
    #[must_use]
    pub fn snake_name(&self) -> String {
        util::to_snake_case(&self.name).into_owned()
    }
}

impl Field {
    /// Parses one `Type name` descriptor.
    fn parse(line_number: usize, descriptor: &str) -> Result<Self, GrammarError> {
        let malformed = || GrammarError::MalformedField {
            line_number,
            field: descriptor.to_string(),
        };

        let (ty, name) = descriptor.split_once(char::is_whitespace).ok_or_else(malformed)?;
        let (ty, name) = (ty.trim(), name.trim());
        if ty.is_empty() || name.is_empty() || name.contains(char::is_whitespace) {
            return Err(malformed());
        }
        if !util::is_identifier(name) {
            return Err(GrammarError::InvalidIdentifier {
                line_number,
                identifier: name.to_string(),
            });
        }
        if NODE_METHOD_NAMES.contains(&&*util::to_snake_case(name)) {
            return Err(GrammarError::ReservedFieldName {
                line_number,
                name: name.to_string(),
            });
        }
        if !is_type(ty) {
            return Err(GrammarError::InvalidType {
                line_number,
                ty: ty.to_string(),
            });
        }

        Ok(Self {
            ty: ty.to_string(),
            name: name.to_string(),
        })
    }

    /// The field name in `snake_case`, escaped if it collides with a Rust keyword.
    #[must_use]
    pub fn rust_name(&self) -> String {
        util::escape_keyword(&util::to_snake_case(&self.name)).into_owned()
    }
}

fn is_type(ty: &str) -> bool {
    syn::parse_str::<syn::Type>(ty).is_ok()
}
