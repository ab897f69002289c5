//! The definition of the markup node tree itself.

use crate::node::function::FunctionCommand;

/// A token which may appear in a markup node tree. These are simple,
/// character-sized items with no further nodes nested inside them.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Token {
    /// An addition symbol.
    Add,

    /// A subtraction symbol.
    Subtract,

    /// A multiplication symbol, written in markup as `\cdot` or `\times`.
    Multiply,

    /// A division symbol, written in markup as `/` or `\div`. (Divisions
    /// entered as fractions appear as [MarkupNode::Fraction] instead.)
    Divide,

    /// A base-10 digit.
    Digit(u8),

    /// A decimal point.
    Point,

    /// A variable, denoted by a particular character. The letter `e` also
    /// arrives as a variable; whether it means Euler's number is only decided
    /// when the tree is upgraded, by looking at its neighbours.
    Variable(char),

    /// The circle-ratio constant, written in markup as `\pi`.
    Pi,

    /// The infinity symbol, written in markup as `\infty`.
    Infinity,
}

impl Token {
    /// Attempts to convert the given character to a `Token`, or returns
    /// `None` if this is not possible.
    ///
    /// Because any character value could be considered valid, this function
    /// will not return a [Token::Variable].
    pub fn from_char(c: char) -> Option<Token> {
        match c {
            '+' => Some(Token::Add),
            '-' => Some(Token::Subtract),
            '*' => Some(Token::Multiply),
            '/' => Some(Token::Divide),
            '.' => Some(Token::Point),
            _ if c.is_ascii_digit() => Some(Token::Digit(c.to_digit(10).unwrap() as u8)),

            _ => None,
        }
    }
}

/// A markup node in the tree. See the
/// [module-level documentation](crate::node::markup) for more information.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum MarkupNode {
    /// A plain token.
    Token(Token),

    /// A fraction, with two other lists of markup nodes as the numerator and
    /// denominator.
    Fraction(MarkupNodeList, MarkupNodeList),

    /// A root. The first list is the optional index (`\sqrt[3]{..}`); a root
    /// without an index is a square root.
    Root(Option<MarkupNodeList>, MarkupNodeList),

    /// An exponent. This node does not encode the base of the power; the base
    /// is only discovered by upgrading the tree.
    Power(MarkupNodeList),

    /// A subscript, such as the base of `\log_{10}`. Like [Self::Power], the
    /// node it attaches to is discovered during the upgrade.
    Subscript(MarkupNodeList),

    /// A set of parentheses containing other markup nodes.
    Parentheses(MarkupNodeList),

    /// A function command. Its argument is not part of the node; the group
    /// following it is bound as the argument during the upgrade.
    Function(FunctionCommand),

    /// Markup with no structural meaning here, kept with its original
    /// spelling: an unrecognised command, an unmatched delimiter, or a
    /// character like `=` which the dialects pass through untouched.
    Raw(String),
}

/// An ordered sequence of markup nodes.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct MarkupNodeList {
    pub items: Vec<MarkupNode>,
}

impl MarkupNodeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this list is a bare `-1`, the marker which turns a function
    /// command into its inverse (`\sin^{-1}`).
    pub fn is_negative_one(&self) -> bool {
        self.items == [
            MarkupNode::Token(Token::Subtract),
            MarkupNode::Token(Token::Digit(1)),
        ]
    }
}

/// The root of a tree of markup nodes.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct MarkupNodeRoot {
    pub root: MarkupNodeList,
}

impl MarkupNodeRoot {
    pub fn new() -> Self {
        Self::default()
    }
}
