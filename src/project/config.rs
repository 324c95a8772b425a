//! Extractor configuration.
//!
//! One `ExtractorConfig` is built per process and shared read-only by
//! every extraction, typically behind an `Arc`.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Names and switches that steer symbol extraction.
///
/// Decorator lists are matched against the decorator's reference text:
/// static and class method names must match exactly, the other lists
/// match the last dotted segment (`abc.abstractmethod` matches
/// `abstractmethod`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractorConfig {
    pub static_method_decorators: Vec<SmolStr>,
    pub class_method_decorators: Vec<SmolStr>,
    pub abstract_method_decorators: Vec<SmolStr>,
    pub property_decorators: Vec<SmolStr>,
    /// Base or metaclass names that make a class abstract
    pub abstract_bases: Vec<SmolStr>,
    /// Record assignments inside function bodies as variables
    pub record_local_variables: bool,
    /// Attach each declaration's source text to its symbol
    pub include_content: bool,
    /// Attach preceding `#` comment lines to definitions
    pub include_comments: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            static_method_decorators: vec![SmolStr::new_static("staticmethod")],
            class_method_decorators: vec![SmolStr::new_static("classmethod")],
            abstract_method_decorators: [
                "abstractmethod",
                "abstractproperty",
                "abstractclassmethod",
                "abstractstaticmethod",
            ]
            .into_iter()
            .map(SmolStr::new_static)
            .collect(),
            property_decorators: ["property", "cached_property"]
                .into_iter()
                .map(SmolStr::new_static)
                .collect(),
            abstract_bases: ["ABC", "ABCMeta"]
                .into_iter()
                .map(SmolStr::new_static)
                .collect(),
            record_local_variables: false,
            include_content: false,
            include_comments: true,
        }
    }
}

impl ExtractorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_static_method_decorator(mut self, name: impl Into<SmolStr>) -> Self {
        self.static_method_decorators.push(name.into());
        self
    }

    pub fn with_class_method_decorator(mut self, name: impl Into<SmolStr>) -> Self {
        self.class_method_decorators.push(name.into());
        self
    }

    pub fn with_abstract_method_decorator(mut self, name: impl Into<SmolStr>) -> Self {
        self.abstract_method_decorators.push(name.into());
        self
    }

    pub fn with_property_decorator(mut self, name: impl Into<SmolStr>) -> Self {
        self.property_decorators.push(name.into());
        self
    }

    pub fn with_abstract_base(mut self, name: impl Into<SmolStr>) -> Self {
        self.abstract_bases.push(name.into());
        self
    }

    pub fn record_local_variables(mut self, enabled: bool) -> Self {
        self.record_local_variables = enabled;
        self
    }

    pub fn include_content(mut self, enabled: bool) -> Self {
        self.include_content = enabled;
        self
    }

    pub fn include_comments(mut self, enabled: bool) -> Self {
        self.include_comments = enabled;
        self
    }

    // ========================================================================
    // Decorator classification
    // ========================================================================

    pub fn is_static_method(&self, decorator: &str) -> bool {
        self.static_method_decorators.iter().any(|n| n == decorator)
    }

    pub fn is_class_method(&self, decorator: &str) -> bool {
        self.class_method_decorators.iter().any(|n| n == decorator)
    }

    pub fn is_abstract_method(&self, decorator: &str) -> bool {
        let last = last_segment(decorator);
        self.abstract_method_decorators.iter().any(|n| n == last)
    }

    /// Property decorators, plus accessor forms like `@name.setter`
    pub fn is_property(&self, decorator: &str) -> bool {
        let last = last_segment(decorator);
        self.property_decorators.iter().any(|n| n == last)
            || (decorator.contains('.') && matches!(last, "setter" | "getter" | "deleter"))
    }

    pub fn is_abstract_base(&self, name: &str) -> bool {
        let last = last_segment(name);
        self.abstract_bases.iter().any(|n| n == last)
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classification() {
        let config = ExtractorConfig::default();
        assert!(config.is_static_method("staticmethod"));
        assert!(!config.is_static_method("builtins.staticmethod"));
        assert!(config.is_class_method("classmethod"));
        assert!(config.is_abstract_method("abc.abstractmethod"));
        assert!(config.is_property("functools.cached_property"));
        assert!(config.is_property("value.setter"));
        assert!(!config.is_property("setter"));
        assert!(config.is_abstract_base("abc.ABC"));
        assert!(!config.is_abstract_base("Base"));
    }

    #[test]
    fn test_builder() {
        let config = ExtractorConfig::new()
            .with_static_method_decorator("static")
            .record_local_variables(true)
            .include_comments(false);
        assert!(config.is_static_method("static"));
        assert!(config.record_local_variables);
        assert!(!config.include_comments);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ExtractorConfig =
            serde_json::from_str(r#"{"recordLocalVariables": true}"#).unwrap();
        assert!(config.record_local_variables);
        assert!(config.is_static_method("staticmethod"));
    }
}
