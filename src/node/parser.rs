use num_traits::Zero;
use rust_decimal::Decimal;

use crate::error::NodeError;

use super::{
    function::{Function, FunctionCommand},
    markup::{MarkupNode, Token, Upgradable},
    structured::{Constant, StructuredNode},
};

/// Converts a list of markup nodes into a single structured node. Used to
/// implement `Upgradable` for `MarkupNodeList`.
pub struct Parser<'a> {
    pub nodes: &'a [MarkupNode],
    pub index: usize,
}

impl<'a> Parser<'a> {
    pub fn parse(&mut self) -> Result<StructuredNode, NodeError> {
        let result = self.parse_level1()?;

        // Leftover nodes is an error
        if self.index < self.nodes.len() {
            Err(NodeError::UnexpectedNodesAtEnd)
        } else {
            Ok(result)
        }
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn current(&mut self) -> Option<&'a MarkupNode> {
        self.nodes.get(self.index)
    }

    fn current_token(&mut self) -> Option<Token> {
        if let Some(MarkupNode::Token(t)) = self.current() {
            Some(*t)
        } else {
            None
        }
    }

    fn eoi(&mut self) -> bool {
        self.index >= self.nodes.len()
    }

    /// Designed to wrap the return value of a `parse_xxx` function, indicating
    /// that this node type can have a power bound to it. If a Power is the
    /// next markup node, returns a Power structured node. Otherwise returns
    /// the original node parameter.
    ///
    /// Returns a Result since the exponent node will need to be upgraded if a
    /// Power is found.
    fn accepts_power(&mut self, node: StructuredNode) -> Result<StructuredNode, NodeError> {
        let mut result = node;
        while let Some(MarkupNode::Power(exp)) = self.current() {
            self.advance();
            result = StructuredNode::Power(Box::new(result), Box::new(exp.upgrade()?));
        }

        Ok(result)
    }

    fn parse_level1(&mut self) -> Result<StructuredNode, NodeError> {
        let mut out = self.parse_level2()?;

        while !self.eoi() {
            if let Some(op @ (Token::Add | Token::Subtract)) = self.current_token() {
                self.advance();

                let left = Box::new(out);
                let right = Box::new(self.parse_level2()?);
                out = if op == Token::Add {
                    StructuredNode::Add(left, right)
                } else {
                    StructuredNode::Subtract(left, right)
                };
            } else {
                break;
            }
        }

        Ok(out)
    }

    fn parse_level2(&mut self) -> Result<StructuredNode, NodeError> {
        let mut out = self.parse_level3()?;

        while !self.eoi() {
            if let Some(op @ (Token::Multiply | Token::Divide)) = self.current_token() {
                self.advance();

                let left = Box::new(out);
                let right = Box::new(self.parse_level3()?);
                out = if op == Token::Multiply {
                    StructuredNode::Multiply(left, right)
                } else {
                    StructuredNode::Divide(left, right)
                };
            } else {
                break;
            }
        }

        Ok(out)
    }

    fn parse_level3(&mut self) -> Result<StructuredNode, NodeError> {
        // while loop and flipping allows multiple unary minuses
        let mut parsed_unit_is_negative = false;
        while let Some(Token::Subtract) = self.current_token() {
            self.advance();
            parsed_unit_is_negative = !parsed_unit_is_negative;
        }

        let mut result = if let Some(Token::Digit(_)) = self.current_token() {
            let number = self.parse_number()?;
            self.accepts_power(StructuredNode::Number(number))?
        } else if let Some(MarkupNode::Fraction(a, b)) = self.current() {
            self.advance();
            // Fractions keep parentheses around both halves in the output, so
            // the wrapping happens here rather than in the emitters
            self.accepts_power(StructuredNode::Divide(
                Box::new(a.upgrade()?.in_parentheses()),
                Box::new(b.upgrade()?.in_parentheses()),
            ))?
        } else if let Some(MarkupNode::Root(index, arg)) = self.current() {
            self.advance();
            let node = match index {
                None => StructuredNode::Sqrt(Box::new(arg.upgrade()?)),
                Some(index) => StructuredNode::Root(
                    Box::new(index.upgrade()?),
                    Box::new(arg.upgrade()?),
                ),
            };
            self.accepts_power(node)?
        } else if let Some(MarkupNode::Parentheses(inner)) = self.current() {
            self.advance();
            self.accepts_power(StructuredNode::Parentheses(Box::new(inner.upgrade()?)))?
        } else if let Some(MarkupNode::Power(_)) = self.current() {
            return Err(NodeError::PowerMissingBase);
        } else if let Some(MarkupNode::Subscript(_)) = self.current() {
            return Err(NodeError::StraySubscript);
        } else if let Some(Token::Variable('e')) = self.current_token() {
            self.parse_euler()?
        } else if let Some(Token::Variable(v)) = self.current_token() {
            self.advance();
            self.accepts_power(StructuredNode::Variable(v))?
        } else if let Some(Token::Pi) = self.current_token() {
            self.advance();
            self.accepts_power(StructuredNode::Constant(Constant::Pi))?
        } else if let Some(Token::Infinity) = self.current_token() {
            self.advance();
            self.accepts_power(StructuredNode::Constant(Constant::Infinity))?
        } else if let Some(MarkupNode::Function(command)) = self.current() {
            let command = *command;
            self.advance();
            self.parse_function_call(command)?
        } else if let Some(MarkupNode::Raw(text)) = self.current() {
            return Err(NodeError::RawMarkup(text.clone()));
        } else {
            return Err(NodeError::ExpectedUnit);
        };

        if parsed_unit_is_negative {
            if let StructuredNode::Number(number) = &mut result {
                *number = -*number;
            } else {
                result = StructuredNode::Multiply(
                    Box::new(StructuredNode::Number(-Decimal::ONE)),
                    Box::new(result),
                );
            }
        }

        // Construct implicit multiplications as long as the next node is one
        // which can be implicitly multiplied with. "2x" will initially parse
        // as "2", then this pass can pick up the "x" and form a
        // multiplication.
        while matches!(
            self.current(),
            Some(
                MarkupNode::Fraction(_, _)
                    | MarkupNode::Root(_, _)
                    | MarkupNode::Parentheses(_)
                    | MarkupNode::Function(_)
                    | MarkupNode::Token(
                        Token::Variable(_) | Token::Digit(_) | Token::Pi | Token::Infinity
                    )
            )
        ) {
            result = StructuredNode::Multiply(Box::new(result), Box::new(self.parse_level3()?));
        }

        Ok(result)
    }

    /// Parses a number made of digit tokens, with an optional decimal part.
    /// The literal's spelling is preserved: collecting "1.50" produces a
    /// Decimal with a scale of 2.
    fn parse_number(&mut self) -> Result<Decimal, NodeError> {
        let mut number = Decimal::zero();

        let mut collect_digits = |parser: &mut Self| -> Result<u32, NodeError> {
            let mut count = 0;
            while let Some(Token::Digit(d)) = parser.current_token() {
                number = number
                    .checked_mul(Decimal::from(10u8))
                    .ok_or(NodeError::Overflow)?;
                number = number
                    .checked_add(Decimal::from(d))
                    .ok_or(NodeError::Overflow)?;

                count += 1;
                parser.advance();
            }
            Ok(count)
        };

        collect_digits(self)?;

        // Is the next token a decimal point? If there is no digit after it,
        // that's fine - we accept "3."
        if let Some(Token::Point) = self.current_token() {
            self.advance();

            let scale = collect_digits(self)?;
            if scale > 0 {
                number.set_scale(scale).map_err(|_| NodeError::Overflow)?;
            }
        }

        Ok(number)
    }

    /// Parses an `e`, which is one of three things: the base of an `exp` call
    /// when an exponent follows it, Euler's number when it stands alone, or a
    /// plain variable when a digit or another letter touches it (an `e`
    /// inside a longer word is not the constant).
    fn parse_euler(&mut self) -> Result<StructuredNode, NodeError> {
        let at = self.index;
        self.advance();

        if let Some(MarkupNode::Power(exp)) = self.current() {
            self.advance();
            let call = StructuredNode::FunctionCall(Function::Exp, vec![exp.upgrade()?]);
            return self.accepts_power(call);
        }

        let touches_word_character = |node: Option<&MarkupNode>| {
            matches!(
                node,
                Some(MarkupNode::Token(Token::Variable(_) | Token::Digit(_)))
            )
        };

        let isolated = !touches_word_character(if at == 0 { None } else { self.nodes.get(at - 1) })
            && !touches_word_character(self.nodes.get(at + 1));

        if isolated {
            Ok(StructuredNode::Constant(Constant::Euler))
        } else {
            self.accepts_power(StructuredNode::Variable('e'))
        }
    }

    /// Parses a function command and binds its argument: the parenthesised
    /// group following it, or failing that the next unit. A `^{-1}` between
    /// the command and the argument selects the function's inverse; the
    /// reciprocal commands become a division by the plain call.
    fn parse_function_call(&mut self, command: FunctionCommand) -> Result<StructuredNode, NodeError> {
        let mut inverse = false;

        if let Some(MarkupNode::Power(exp)) = self.current() {
            if exp.is_negative_one() {
                if command.inverse().is_none() {
                    return Err(NodeError::UnsupportedInverse);
                }
                inverse = true;
                self.advance();
            }
        }

        // A subscript selects a logarithm base; only base 10 exists in the
        // output dialects. The keyboard inserts `\log_{}`, so an empty base
        // means base 10 as well.
        if let Some(MarkupNode::Subscript(base)) = self.current() {
            if command != FunctionCommand::Log {
                return Err(NodeError::StraySubscript);
            }
            let base_is_10 = base.items.is_empty()
                || base.items
                    == [
                        MarkupNode::Token(Token::Digit(1)),
                        MarkupNode::Token(Token::Digit(0)),
                    ];
            if !base_is_10 {
                return Err(NodeError::UnsupportedLogBase);
            }
            self.advance();
        }

        let argument = if let Some(MarkupNode::Parentheses(inner)) = self.current() {
            self.advance();
            inner.upgrade()?
        } else {
            self.parse_level3()?
        };

        let call = if inverse {
            // Checked above
            StructuredNode::FunctionCall(command.inverse().unwrap(), vec![argument])
        } else if let Some(function) = command.reciprocal_of() {
            StructuredNode::Divide(
                Box::new(StructuredNode::Number(Decimal::ONE)),
                Box::new(StructuredNode::FunctionCall(function, vec![argument])),
            )
        } else {
            // Every command either resolves directly or is a reciprocal
            StructuredNode::FunctionCall(command.resolved().unwrap(), vec![argument])
        };

        self.accepts_power(call)
    }
}
