use rustc_hash::FxHashSet;

use shmin_core::{is_constant_like, is_prefixed_camel};

use crate::collector::ProtectedNames;

pub struct IdentItem<'a> {
    pub ident: &'a str,
    /// How many rename sites spell this identifier.
    pub sites: usize,
}

/// Decides which identifiers keep their original spelling.
pub trait IdentFilterPlugin {
    /// `true` keeps the identifier out of the rename set.
    fn filter_ident(&self, ident: &IdentItem<'_>) -> bool;
}

pub struct IdentFilterPluginAdapter<'a> {
    plugin: Vec<Box<dyn IdentFilterPlugin + 'a>>,
}

impl<'a> IdentFilterPluginAdapter<'a> {
    pub fn new(plugin: Vec<Box<dyn IdentFilterPlugin + 'a>>) -> Self {
        Self { plugin }
    }

    pub fn with_plugin(mut self, plugin: Box<dyn IdentFilterPlugin + 'a>) -> Self {
        self.plugin.push(plugin);
        self
    }
}

impl IdentFilterPlugin for IdentFilterPluginAdapter<'_> {
    fn filter_ident(&self, ident: &IdentItem<'_>) -> bool {
        self.plugin.iter().any(|v| v.filter_ident(ident))
    }
}

pub struct ProtectedNamesFilter<'a>(pub &'a ProtectedNames);

impl IdentFilterPlugin for ProtectedNamesFilter<'_> {
    fn filter_ident(&self, ident: &IdentItem<'_>) -> bool {
        self.0.contains(ident.ident)
    }
}

/// Leaves alone the names that look like host-visible symbols or macro
/// constants: `uTime`, `PI`, `NUM_LIGHTS`.
pub struct NamingConventionFilter;

impl IdentFilterPlugin for NamingConventionFilter {
    fn filter_ident(&self, ident: &IdentItem<'_>) -> bool {
        is_prefixed_camel(ident.ident) || is_constant_like(ident.ident)
    }
}

pub struct PreserveNamesFilter {
    names: FxHashSet<String>,
}

impl PreserveNamesFilter {
    pub fn new<I: IntoIterator<Item = String>>(names: I) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }
}

impl IdentFilterPlugin for PreserveNamesFilter {
    fn filter_ident(&self, ident: &IdentItem<'_>) -> bool {
        self.names.contains(ident.ident)
    }
}
