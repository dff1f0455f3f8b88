//! Renders a [`Grammar`] as Rust source.

use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use super::{
    config::GeneratorConfig,
    grammar::{Grammar, Rule},
};

/// Returns the generated source for the grammar.
///
/// The output depends only on the grammar and the configuration.
#[must_use]
pub fn render(grammar: &Grammar, config: &GeneratorConfig) -> String {
    SchemaDisplay::new(grammar, config).to_string()
}

/// Structure implementing [`Display`] that writes the whole generated node hierarchy.
#[derive(Debug, Clone, Copy)]
pub struct SchemaDisplay<'a> {
    grammar: &'a Grammar,
    config: &'a GeneratorConfig,
}

impl<'a> SchemaDisplay<'a> {
    /// Creates a display for the given grammar and configuration.
    #[must_use]
    pub fn new(grammar: &'a Grammar, config: &'a GeneratorConfig) -> Self {
        Self { grammar, config }
    }

    fn fmt_derives(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.config.derives().is_empty() {
            return Ok(());
        }
        writeln!(f, "#[derive({})]", self.config.derives().iter().join(", "))
    }

    fn fmt_visitor(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let base = self.config.base_name();

        writeln!(f, "/// Visitor over every [`{base}`] variant.")?;
        writeln!(f, "pub trait {}<T> {{", self.config.visitor_name())?;
        for rule in self.grammar.rules() {
            writeln!(f, "    /// Visits a [`{}`] node.", rule.name())?;
            writeln!(
                f,
                "    fn visit_{}(&mut self, node: &{}) -> T;",
                rule.snake_name(),
                rule.name()
            )?;
        }
        writeln!(f, "}}")
    }

    fn fmt_base(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let base = self.config.base_name();

        writeln!(f, "/// Closed set of `{base}` nodes.")?;
        self.fmt_derives(f)?;
        writeln!(f, "pub enum {base} {{")?;
        for rule in self.grammar.rules() {
            writeln!(f, "    /// A [`{}`] node.", rule.name())?;
            writeln!(f, "    {0}({0}),", rule.name())?;
        }
        writeln!(f, "}}")?;
        writeln!(f)?;

        writeln!(f, "impl {base} {{")?;
        writeln!(f, "    /// Calls the visitor method matching the concrete node.")?;
        self.fmt_accept_signature(f)?;
        writeln!(f, "        match self {{")?;
        for rule in self.grammar.rules() {
            writeln!(f, "            Self::{}(node) => node.accept(visitor),", rule.name())?;
        }
        writeln!(f, "        }}")?;
        writeln!(f, "    }}")?;
        writeln!(f, "}}")
    }

    fn fmt_accept_signature(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "    pub fn accept<T, V: {}<T> + ?Sized>(&self, visitor: &mut V) -> T {{",
            self.config.visitor_name()
        )
    }

    fn fmt_rule(&self, f: &mut Formatter<'_>, rule: &Rule) -> fmt::Result {
        let name = rule.name();
        let fields = rule
            .fields()
            .iter()
            .map(|field| {
                (
                    field.rust_name(),
                    self.config.field_type(field.ty()),
                    self.config.getter_type(field.ty()),
                )
            })
            .collect::<Vec<_>>();

        // struct
        writeln!(f, "/// `{name}` node.")?;
        self.fmt_derives(f)?;
        writeln!(f, "pub struct {name} {{")?;
        for (field_name, field_type, _) in &fields {
            writeln!(f, "    {field_name}: {field_type},")?;
        }
        writeln!(f, "}}")?;
        writeln!(f)?;

        // constructor
        writeln!(f, "impl {name} {{")?;
        writeln!(f, "    /// Creates a new [`{name}`] node.")?;
        writeln!(f, "    #[must_use]")?;
        if fields.len() > 7 {
            writeln!(f, "    #[allow(clippy::too_many_arguments)]")?;
        }
        writeln!(
            f,
            "    pub fn new({}) -> Self {{",
            fields
                .iter()
                .map(|(field_name, field_type, _)| format!("{field_name}: {field_type}"))
                .join(", ")
        )?;
        writeln!(f, "        Self {{")?;
        for (field_name, _, _) in &fields {
            writeln!(f, "            {field_name},")?;
        }
        writeln!(f, "        }}")?;
        writeln!(f, "    }}")?;

        // getters
        for (field_name, _, getter_type) in &fields {
            writeln!(f)?;
            writeln!(
                f,
                "    /// Gets the `{}` field.",
                field_name.trim_start_matches("r#")
            )?;
            writeln!(f, "    #[must_use]")?;
            writeln!(f, "    pub fn {field_name}(&self) -> {getter_type} {{")?;
            writeln!(f, "        &self.{field_name}")?;
            writeln!(f, "    }}")?;
        }

        // double dispatch
        writeln!(f)?;
        writeln!(
            f,
            "    /// Calls [`{}::visit_{}`] with this node.",
            self.config.visitor_name(),
            rule.snake_name()
        )?;
        self.fmt_accept_signature(f)?;
        writeln!(f, "        visitor.visit_{}(self)", rule.snake_name())?;
        writeln!(f, "    }}")?;
        writeln!(f, "}}")?;
        writeln!(f)?;

        let base = self.config.base_name();
        writeln!(f, "impl From<{name}> for {base} {{")?;
        writeln!(f, "    fn from(node: {name}) -> Self {{")?;
        writeln!(f, "        Self::{name}(node)")?;
        writeln!(f, "    }}")?;
        writeln!(f, "}}")
    }
}

impl Display for SchemaDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "// @generated by `generate_ast` from a grammar description. Do not edit by hand."
        )?;

        if !self.config.imports().is_empty() {
            writeln!(f)?;
            for import in self.config.imports() {
                writeln!(f, "use {import};")?;
            }
        }

        writeln!(f)?;
        self.fmt_visitor(f)?;
        writeln!(f)?;
        self.fmt_base(f)?;

        for rule in self.grammar.rules() {
            writeln!(f)?;
            self.fmt_rule(f, rule)?;
        }

        Ok(())
    }
}
