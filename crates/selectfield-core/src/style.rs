//! Class-scoped stylesheets.
//!
//! A [`Stylesheet`] owns a scope and a list of rules keyed by local class
//! names. Widgets reference classes through [`Stylesheet::class_name`], so
//! the emitted CSS and the rendered `class` attributes always agree and
//! never collide with host styles.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// One rule: a local class, an optional pseudo-class, and declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRule {
    class: String,
    pseudo: Option<String>,
    declarations: Vec<(String, String)>,
}

impl StyleRule {
    /// Create a rule for a local class name.
    #[must_use]
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            pseudo: None,
            declarations: Vec::new(),
        }
    }

    /// Restrict the rule to a pseudo-class (e.g. `focus`, `disabled`).
    #[must_use]
    pub fn pseudo(mut self, pseudo: impl Into<String>) -> Self {
        self.pseudo = Some(pseudo.into());
        self
    }

    /// Add a declaration.
    #[must_use]
    pub fn declare(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push((property.into(), value.into()));
        self
    }

    /// Add a color declaration.
    #[must_use]
    pub fn color(self, property: impl Into<String>, color: Color) -> Self {
        self.declare(property, color.to_css())
    }

    /// Local class name.
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Declarations in order.
    #[must_use]
    pub fn declarations(&self) -> &[(String, String)] {
        &self.declarations
    }
}

/// A set of rules sharing one class scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stylesheet {
    scope: String,
    rules: Vec<StyleRule>,
}

impl Stylesheet {
    /// Create an empty stylesheet for a scope.
    #[must_use]
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            rules: Vec::new(),
        }
    }

    /// Add a rule.
    #[must_use]
    pub fn rule(mut self, rule: StyleRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Scope prefix.
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Rules in order.
    #[must_use]
    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    /// Scoped class name for a local class.
    #[must_use]
    pub fn class_name(&self, class: &str) -> String {
        scoped_class(&self.scope, class)
    }

    /// Emit CSS text.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for rule in &self.rules {
            out.push('.');
            out.push_str(&self.class_name(&rule.class));
            if let Some(pseudo) = &rule.pseudo {
                out.push(':');
                out.push_str(pseudo);
            }
            out.push_str(" {\n");
            for (property, value) in &rule.declarations {
                out.push_str("  ");
                out.push_str(property);
                out.push_str(": ");
                out.push_str(value);
                out.push_str(";\n");
            }
            out.push_str("}\n");
        }
        out
    }

    /// Emit several stylesheets as one combined CSS document.
    #[must_use]
    pub fn combine<'a>(sheets: impl IntoIterator<Item = &'a Self>) -> String {
        sheets
            .into_iter()
            .map(|sheet| format!("/* {} */\n{}", sheet.scope, sheet.to_css()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Scoped class name (`scope__class`).
#[must_use]
pub fn scoped_class(scope: &str, class: &str) -> String {
    format!("{scope}__{class}")
}
