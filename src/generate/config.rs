//! Configuration of the generated node hierarchy.

use std::collections::BTreeMap;

use getset::Getters;

use crate::util;

use super::GrammarError;

/// Settings that shape the generated source.
///
/// Type mappings are kept ordered so the output never depends on hashing.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GeneratorConfig {
    /// Get the name of the generated sum type.
    #[get = "pub"]
    base_name: String,
    /// Get the paths emitted as `use` declarations at the top of the file.
    #[get = "pub"]
    imports: Vec<String>,
    /// Get the mapping from grammar field types to Rust types.
    #[get = "pub"]
    type_map: BTreeMap<String, String>,
    /// Get the traits derived by every generated type.
    #[get = "pub"]
    derives: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_name: "Expression".to_string(),
            imports: vec!["crate::lexical::token::{self, Token}".to_string()],
            type_map: BTreeMap::from([(
                "Object".to_string(),
                "Option<token::Literal>".to_string(),
            )]),
            derives: vec![
                "Debug".to_string(),
                "Clone".to_string(),
                "PartialEq".to_string(),
            ],
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name of the generated sum type.
    #[must_use]
    pub fn with_base_name(mut self, base_name: impl Into<String>) -> Self {
        self.base_name = base_name.into();
        self
    }

    /// Replaces the emitted `use` declarations.
    #[must_use]
    pub fn with_imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports = imports.into_iter().map(Into::into).collect();
        self
    }

    /// Maps a grammar type to a Rust type, replacing an earlier mapping of the same type.
    #[must_use]
    pub fn with_type_mapping(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.type_map.insert(from.into(), to.into());
        self
    }

    /// Replaces the traits derived by every generated type.
    #[must_use]
    pub fn with_derives<I, S>(mut self, derives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.derives = derives.into_iter().map(Into::into).collect();
        self
    }

    /// Name of the generated visitor trait.
    #[must_use]
    pub fn visitor_name(&self) -> String {
        format!("{}Visitor", self.base_name)
    }

    /// Name of the generated file.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.rs", util::to_snake_case(&self.base_name))
    }

    /// Resolves the Rust type of a field declared with the given grammar type.
    ///
    /// Fields holding the base type directly or through an `Option` are boxed, since the node
    /// types are recursive. Arrays or tuples holding the base type by value are not rewritten.
    #[must_use]
    pub fn field_type(&self, ty: &str) -> String {
        let resolved = self.type_map.get(ty).map_or(ty, String::as_str);
        let compact = resolved.split_whitespace().collect::<String>();

        if compact == self.base_name {
            format!("Box<{}>", self.base_name)
        } else if compact == format!("Option<{}>", self.base_name) {
            format!("Option<Box<{}>>", self.base_name)
        } else {
            resolved.to_string()
        }
    }

    /// Resolves the type returned by the getter of a field declared with the given grammar type.
    #[must_use]
    pub fn getter_type(&self, ty: &str) -> String {
        let field_type = self.field_type(ty);
        if field_type == format!("Box<{}>", self.base_name) {
            format!("&{}", self.base_name)
        } else {
            format!("&{field_type}")
        }
    }

    /// Names the configured imports bring into scope.
    ///
    /// # Errors
    /// - [`GrammarError::InvalidImport`] if an import is not a valid `use` tree.
    pub fn imported_names(&self) -> Result<Vec<String>, GrammarError> {
        let mut names = Vec::new();
        for import in &self.imports {
            let tree = syn::parse_str::<syn::UseTree>(import).map_err(|_| {
                GrammarError::InvalidImport {
                    import: import.clone(),
                }
            })?;
            collect_use_names(&tree, None, &mut names);
        }

        Ok(names)
    }
}

fn collect_use_names(tree: &syn::UseTree, parent: Option<&syn::Ident>, names: &mut Vec<String>) {
    match tree {
        syn::UseTree::Path(path) => collect_use_names(&path.tree, Some(&path.ident), names),
        syn::UseTree::Name(name) if name.ident == "self" => {
            // `module::{self}` brings `module` itself into scope
            if let Some(parent) = parent {
                names.push(parent.to_string());
            }
        }
        syn::UseTree::Name(name) => names.push(name.ident.to_string()),
        syn::UseTree::Rename(rename) => names.push(rename.rename.to_string()),
        syn::UseTree::Glob(_) => {}
        syn::UseTree::Group(group) => {
            for item in &group.items {
                collect_use_names(item, parent, names);
            }
        }
    }
}
