use crate::bom_graph::domain::{LicenseCombinator, LicenseDescription, LicenseExpression};
use crate::ports::outbound::LicenseIdentifierParser;

/// Folds the tracker's nested license descriptions into expressions.
///
/// A description either names a single license or composes child
/// descriptions with a combinator. Leaves go through the identifier
/// parser; composites fold their children left to right.
pub struct LicenseExpressionBuilder<'a, P: LicenseIdentifierParser> {
    parser: &'a P,
}

impl<'a, P: LicenseIdentifierParser> LicenseExpressionBuilder<'a, P> {
    pub fn new(parser: &'a P) -> Self {
        Self { parser }
    }

    pub fn build(&self, description: &LicenseDescription) -> LicenseExpression {
        if description.children.is_empty() {
            let identifier = description
                .spdx_id
                .as_deref()
                .unwrap_or(&description.display_name);
            return self.parser.parse(identifier);
        }

        description
            .children
            .iter()
            .map(|child| self.build(child))
            .fold(LicenseExpression::None, |acc, expr| {
                match description.combinator {
                    LicenseCombinator::Conjunctive => acc.and(expr),
                    LicenseCombinator::Disjunctive => acc.or(expr),
                }
            })
    }
}
