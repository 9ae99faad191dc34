//! Postfix `where` tokens to filter tree.

use super::error::GrammarError;
use crate::ast::FilterNode;
use crate::lexer::Token;
use alloc::string::String;
use alloc::vec::Vec;
use sift_core::Value;

/// Assembles a filter tree from `where` tokens in postfix order.
///
/// Literals and identifiers wait on an operand stack until a comparison consumes
/// them; comparisons and logical operators push finished nodes onto a node stack.
/// For `and`/`or` the most recent node becomes `left`. The operator of a comparison
/// is kept as written even when the literal precedes the field.
pub fn build_filter(tokens: &[Token]) -> Result<FilterNode, GrammarError> {
    let mut operands: Vec<&Token> = Vec::new();
    let mut nodes: Vec<FilterNode> = Vec::new();

    for token in tokens {
        match token {
            Token::Compare(op) => {
                let (Some(last), Some(prev)) = (operands.pop(), operands.pop()) else {
                    return Err(GrammarError::InvalidWhere);
                };
                let (field, literal) = split_operands(prev, last)?;
                nodes.push(FilterNode::Compare {
                    field,
                    op: *op,
                    literal,
                });
            }
            Token::And | Token::Or => {
                let (Some(left), Some(right)) = (nodes.pop(), nodes.pop()) else {
                    return Err(GrammarError::InvalidWhere);
                };
                nodes.push(if matches!(token, Token::And) {
                    FilterNode::and(left, right)
                } else {
                    FilterNode::or(left, right)
                });
            }
            other => operands.push(other),
        }
    }

    if nodes.len() != 1 {
        return Err(GrammarError::MalformedExpression { roots: nodes.len() });
    }
    nodes.pop().ok_or(GrammarError::MalformedExpression { roots: 0 })
}

/// Isolates the identifier of a comparison pair. Exactly one side must be an
/// identifier and the other a number or string literal.
fn split_operands(a: &Token, b: &Token) -> Result<(String, Value), GrammarError> {
    let (field, literal) = match (a, b) {
        (Token::Identifier(field), other) | (other, Token::Identifier(field)) => (field, other),
        _ => return Err(GrammarError::InvalidWhere),
    };
    let literal = match literal {
        Token::Number(n) => Value::Number(*n),
        Token::String(s) => Value::String(s.clone()),
        _ => return Err(GrammarError::InvalidWhere),
    };
    Ok((field.clone(), literal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use sift_core::CompareOp;

    fn ident(name: &str) -> Token {
        Token::Identifier(name.into())
    }

    #[test]
    fn test_single_condition() {
        let tokens = vec![ident("col_1"), Token::Number(2.0), Token::Compare(CompareOp::Gt)];
        assert_eq!(
            build_filter(&tokens).unwrap(),
            FilterNode::compare("col_1", CompareOp::Gt, 2.0)
        );
    }

    #[test]
    fn test_literal_before_field() {
        let tokens = vec![
            Token::String("Mike".into()),
            ident("fullname"),
            Token::Compare(CompareOp::Eq),
        ];
        assert_eq!(
            build_filter(&tokens).unwrap(),
            FilterNode::compare("fullname", CompareOp::Eq, "Mike")
        );
    }

    #[test]
    fn test_two_conditions_left_is_last_built() {
        let tokens = vec![
            ident("fullname"),
            Token::String("Mike Smith".into()),
            Token::Compare(CompareOp::Eq),
            ident("age"),
            Token::Number(18.0),
            Token::Compare(CompareOp::Gt),
            Token::And,
        ];
        assert_eq!(
            build_filter(&tokens).unwrap(),
            FilterNode::and(
                FilterNode::compare("age", CompareOp::Gt, 18.0),
                FilterNode::compare("fullname", CompareOp::Eq, "Mike Smith"),
            )
        );
    }

    #[test]
    fn test_three_conditions() {
        let tokens = vec![
            ident("fullname"),
            Token::String("Mike Smith".into()),
            Token::Compare(CompareOp::Eq),
            ident("age"),
            Token::Number(18.0),
            Token::Compare(CompareOp::Gt),
            ident("salary"),
            Token::Number(15000.99),
            Token::Compare(CompareOp::Gt),
            Token::Or,
            Token::And,
        ];
        assert_eq!(
            build_filter(&tokens).unwrap(),
            FilterNode::and(
                FilterNode::or(
                    FilterNode::compare("salary", CompareOp::Gt, 15000.99),
                    FilterNode::compare("age", CompareOp::Gt, 18.0),
                ),
                FilterNode::compare("fullname", CompareOp::Eq, "Mike Smith"),
            )
        );
    }

    #[test]
    fn test_unclosed_paren_is_ignored() {
        let tokens = vec![
            ident("a"),
            Token::Number(1.0),
            Token::Compare(CompareOp::Eq),
            Token::OpenParen,
        ];
        assert_eq!(
            build_filter(&tokens).unwrap(),
            FilterNode::compare("a", CompareOp::Eq, 1.0)
        );
    }

    #[test]
    fn test_invalid_operands() {
        let two_fields = vec![ident("a"), ident("b"), Token::Compare(CompareOp::Eq)];
        assert_eq!(build_filter(&two_fields), Err(GrammarError::InvalidWhere));

        let two_literals = vec![Token::Number(1.0), Token::Number(2.0), Token::Compare(CompareOp::Lt)];
        assert_eq!(build_filter(&two_literals), Err(GrammarError::InvalidWhere));

        let missing = vec![ident("a"), Token::Compare(CompareOp::Eq)];
        assert_eq!(build_filter(&missing), Err(GrammarError::InvalidWhere));

        let unknown = vec![ident("a"), Token::Unknown("x.y".into()), Token::Compare(CompareOp::Eq)];
        assert_eq!(build_filter(&unknown), Err(GrammarError::InvalidWhere));
    }

    #[test]
    fn test_logical_operator_without_operands() {
        let tokens = vec![ident("a"), Token::Number(1.0), Token::Compare(CompareOp::Eq), Token::Or];
        assert_eq!(build_filter(&tokens), Err(GrammarError::InvalidWhere));
    }

    #[test]
    fn test_root_count() {
        assert_eq!(
            build_filter(&[ident("a")]),
            Err(GrammarError::MalformedExpression { roots: 0 })
        );
        let tokens = vec![
            ident("a"),
            Token::Number(1.0),
            Token::Compare(CompareOp::Eq),
            ident("b"),
            Token::Number(2.0),
            Token::Compare(CompareOp::Eq),
        ];
        assert_eq!(
            build_filter(&tokens),
            Err(GrammarError::MalformedExpression { roots: 2 })
        );
    }
}
