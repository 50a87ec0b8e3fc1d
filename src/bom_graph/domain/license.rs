use serde::{Serialize, Serializer};
use std::fmt;

/// Normalized boolean license expression.
///
/// `None` represents the absence of any license and acts as the algebraic
/// identity for both [`and`](Self::and) and [`or`](Self::or), so folding an
/// empty or filtered-out license list never produces spurious empty terms.
///
/// Expressions are structurally comparable, which the tests rely on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LicenseExpression {
    None,
    Leaf(String),
    And(Box<LicenseExpression>, Box<LicenseExpression>),
    Or(Box<LicenseExpression>, Box<LicenseExpression>),
}

impl LicenseExpression {
    pub fn leaf(identifier: impl Into<String>) -> Self {
        LicenseExpression::Leaf(identifier.into())
    }

    /// Conjunction with `None` as identity element.
    pub fn and(self, other: LicenseExpression) -> Self {
        match (self, other) {
            (LicenseExpression::None, other) => other,
            (this, LicenseExpression::None) => this,
            (this, other) => LicenseExpression::And(Box::new(this), Box::new(other)),
        }
    }

    /// Disjunction with `None` as identity element.
    pub fn or(self, other: LicenseExpression) -> Self {
        match (self, other) {
            (LicenseExpression::None, other) => other,
            (this, LicenseExpression::None) => this,
            (this, other) => LicenseExpression::Or(Box::new(this), Box::new(other)),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, LicenseExpression::None)
    }

    /// Renders a sub-expression, parenthesizing when the child combines with
    /// the other operator so the rendering stays unambiguous.
    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, parent_is_and: bool) -> fmt::Result {
        let needs_parens = matches!(
            (self, parent_is_and),
            (LicenseExpression::Or(_, _), true) | (LicenseExpression::And(_, _), false)
        );
        if needs_parens {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

impl fmt::Display for LicenseExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LicenseExpression::None => write!(f, "NOASSERTION"),
            LicenseExpression::Leaf(identifier) => write!(f, "{}", identifier),
            LicenseExpression::And(left, right) => {
                left.fmt_operand(f, true)?;
                write!(f, " AND ")?;
                right.fmt_operand(f, true)
            }
            LicenseExpression::Or(left, right) => {
                left.fmt_operand(f, false)?;
                write!(f, " OR ")?;
                right.fmt_operand(f, false)
            }
        }
    }
}

impl Serialize for LicenseExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Combination semantics for a set of applicable license terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LicenseCombinator {
    Conjunctive,
    Disjunctive,
}

/// Raw nested license payload as delivered by the product-tracking service.
///
/// A description with no children is a single identifier; otherwise the
/// children combine under the given combinator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LicenseDescription {
    pub display_name: String,
    pub spdx_id: Option<String>,
    pub combinator: LicenseCombinator,
    pub children: Vec<LicenseDescription>,
}

impl LicenseDescription {
    /// A single-identifier description.
    pub fn single(display_name: impl Into<String>, spdx_id: Option<String>) -> Self {
        Self {
            display_name: display_name.into(),
            spdx_id,
            combinator: LicenseCombinator::Conjunctive,
            children: Vec::new(),
        }
    }

    /// A composite description combining its children.
    pub fn composite(combinator: LicenseCombinator, children: Vec<LicenseDescription>) -> Self {
        Self {
            display_name: String::new(),
            spdx_id: None,
            combinator,
            children,
        }
    }
}
