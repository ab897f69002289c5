//! The markup lexer, which splits formula text into [Lexeme]s.

use crate::node::function::FunctionCommand;

use super::Token;

/// A single meaningful piece of markup text. Lexemes are flat; bracket
/// matching and command-argument grouping happen in the tree builder.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Lexeme {
    /// A character-sized token, including the operator words (`\cdot`,
    /// `\times`, `\div`) and constants (`\pi`, `\infty`) already reduced to
    /// their token form.
    Token(Token),

    /// A function command such as `\sin`.
    Function(FunctionCommand),

    /// A `\frac` command. Its two groups follow as separate lexemes.
    Frac,

    /// A `\sqrt` command. An optional bracketed index and its group follow as
    /// separate lexemes.
    Sqrt,

    /// `^`.
    Caret,

    /// `_`.
    Underscore,

    /// `{` and `}`, the argument delimiters of grouping commands.
    GroupOpen,
    GroupClose,

    /// `(` and `)`, including the `\left(`/`\right)` sized forms.
    ParenOpen,
    ParenClose,

    /// `[` and `]`.
    BracketOpen,
    BracketClose,

    /// Anything else, kept with its original spelling so that it can be
    /// passed through to the output unchanged.
    Raw(String),
}

/// Splits markup text into lexemes. Whitespace is dropped here; neither
/// output dialect may contain any.
pub fn lex(markup: &str) -> Vec<Lexeme> {
    let mut chars = markup.chars().peekable();
    let mut lexemes = Vec::new();

    while let Some(c) = chars.next() {
        match c {
            _ if c.is_whitespace() => (),

            '\\' => lexemes.push(lex_command(&mut chars)),

            '^' => lexemes.push(Lexeme::Caret),
            '_' => lexemes.push(Lexeme::Underscore),
            '{' => lexemes.push(Lexeme::GroupOpen),
            '}' => lexemes.push(Lexeme::GroupClose),
            '(' => lexemes.push(Lexeme::ParenOpen),
            ')' => lexemes.push(Lexeme::ParenClose),
            '[' => lexemes.push(Lexeme::BracketOpen),
            ']' => lexemes.push(Lexeme::BracketClose),

            _ if c.is_alphabetic() => lexemes.push(Lexeme::Token(Token::Variable(c))),

            _ => lexemes.push(match Token::from_char(c) {
                Some(t) => Lexeme::Token(t),
                None => Lexeme::Raw(c.to_string()),
            }),
        }
    }

    lexemes
}

/// Lexes one backslash command, with the backslash already consumed.
fn lex_command(chars: &mut core::iter::Peekable<core::str::Chars<'_>>) -> Lexeme {
    // An escaped brace, as inserted by the keyboard's { and } keys
    if let Some(&delim @ ('{' | '}')) = chars.peek() {
        chars.next();
        return Lexeme::Raw(format!("\\{}", delim));
    }

    let mut word = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_alphabetic() {
            word.push(c);
            chars.next();
        } else {
            break;
        }
    }

    match word.as_str() {
        "cdot" | "times" => Lexeme::Token(Token::Multiply),
        "div" => Lexeme::Token(Token::Divide),
        "pi" => Lexeme::Token(Token::Pi),
        "infty" => Lexeme::Token(Token::Infinity),

        "frac" => Lexeme::Frac,
        "sqrt" => Lexeme::Sqrt,

        "left" | "right" => lex_sized_delimiter(chars, &word),

        _ => match FunctionCommand::from_command_word(&word) {
            Some(func) => Lexeme::Function(func),
            None => Lexeme::Raw(format!("\\{}", word)),
        },
    }
}

/// Lexes the delimiter following a `\left` or `\right`. The parenthesis forms
/// collapse to plain parentheses; every other delimiter is passed through
/// with the size command dropped.
fn lex_sized_delimiter(
    chars: &mut core::iter::Peekable<core::str::Chars<'_>>,
    command: &str,
) -> Lexeme {
    match chars.peek() {
        Some('(') => {
            chars.next();
            Lexeme::ParenOpen
        }
        Some(')') => {
            chars.next();
            Lexeme::ParenClose
        }
        Some('[') => {
            chars.next();
            Lexeme::BracketOpen
        }
        Some(']') => {
            chars.next();
            Lexeme::BracketClose
        }
        Some(&delim @ ('|' | '.')) => {
            chars.next();
            Lexeme::Raw(delim.to_string())
        }
        Some('\\') => {
            chars.next();
            match chars.peek() {
                Some(&delim @ ('{' | '}')) => {
                    chars.next();
                    Lexeme::Raw(delim.to_string())
                }
                // Not a delimiter escape; restore the consumed backslash in
                // the raw spelling so the following command keeps its shape
                _ => Lexeme::Raw(format!("\\{}\\", command)),
            }
        }

        _ => Lexeme::Raw(format!("\\{}", command)),
    }
}
