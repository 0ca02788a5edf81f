//! Accessibility checks for rendered widgets.
//!
//! Covers the WCAG 2.1 rules that apply to form controls:
//! - Name/role/value (4.1.2)
//! - Keyboard accessibility (2.1.1)
//! - Labels or instructions (3.3.2)

use crate::selector::Selector;
use selectfield_core::{AccessibleRole, Element, Widget};
use std::collections::HashSet;

/// Violation impact level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Impact {
    /// Minor inconvenience
    Minor,
    /// Some users affected
    Moderate,
    /// Many users affected
    Serious,
    /// Blocks access
    Critical,
}

/// One accessibility violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A11yViolation {
    /// Rule identifier
    pub rule: String,
    /// Human-readable message
    pub message: String,
    /// WCAG success criterion
    pub wcag: String,
    /// Impact level
    pub impact: Impact,
}

/// Result of an accessibility check.
#[derive(Debug, Clone, Default)]
pub struct A11yReport {
    /// All violations found
    pub violations: Vec<A11yViolation>,
}

impl A11yReport {
    /// Check if there are no violations.
    #[must_use]
    pub fn is_passing(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations at or above an impact level.
    #[must_use]
    pub fn at_least(&self, impact: Impact) -> Vec<&A11yViolation> {
        self.violations.iter().filter(|v| v.impact >= impact).collect()
    }

    /// Check whether a rule was violated.
    #[must_use]
    pub fn has_rule(&self, rule: &str) -> bool {
        self.violations.iter().any(|v| v.rule == rule)
    }

    /// Panic with a readable list if anything failed.
    pub fn assert_pass(&self) {
        if !self.is_passing() {
            let lines: Vec<String> = self
                .violations
                .iter()
                .map(|v| format!("  [{:?}] {} ({}): {}", v.impact, v.rule, v.wcag, v.message))
                .collect();
            panic!("Accessibility violations:\n{}", lines.join("\n"));
        }
    }
}

/// Accessibility checker.
pub struct A11yChecker;

impl A11yChecker {
    /// Check a widget and its rendered tree.
    #[must_use]
    pub fn check<W: Widget>(widget: &W) -> A11yReport {
        let mut violations = Vec::new();

        if widget.is_interactive() && widget.accessible_name().is_none() {
            violations.push(A11yViolation {
                rule: "label".to_string(),
                message: "Interactive element missing accessible name".to_string(),
                wcag: "4.1.2".to_string(),
                impact: Impact::Critical,
            });
        }

        if widget.is_interactive() && !widget.is_focusable() {
            violations.push(A11yViolation {
                rule: "keyboard".to_string(),
                message: "Interactive element is not keyboard focusable".to_string(),
                wcag: "2.1.1".to_string(),
                impact: Impact::Critical,
            });
        }

        let tree = widget.render();
        if widget.accessible_role() == AccessibleRole::ComboBox {
            Self::check_options(&tree, &mut violations);
            if widget.accessible_name().is_some() && !tree.has_attribute("id") {
                violations.push(A11yViolation {
                    rule: "label-association".to_string(),
                    message: "Named control has no id for <label for> association".to_string(),
                    wcag: "3.3.2".to_string(),
                    impact: Impact::Serious,
                });
            }
        }

        A11yReport { violations }
    }

    fn check_options(tree: &Element, violations: &mut Vec<A11yViolation>) {
        let options = Selector::Type("option".to_string()).select_all(tree);
        let mut seen = HashSet::new();

        for option in options {
            if option.text_content().trim().is_empty() {
                violations.push(A11yViolation {
                    rule: "option-name".to_string(),
                    message: "Option has no visible text".to_string(),
                    wcag: "4.1.2".to_string(),
                    impact: Impact::Serious,
                });
            }
            if let Some(value) = option.attribute("value") {
                if !seen.insert(value) {
                    violations.push(A11yViolation {
                        rule: "duplicate-value".to_string(),
                        message: format!("Option value '{value}' is not unique"),
                        wcag: "4.1.2".to_string(),
                        impact: Impact::Moderate,
                    });
                }
            }
        }
    }
}
