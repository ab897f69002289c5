//! The markup tree builder, which turns a lexeme stream into a
//! [MarkupNodeRoot].
//!
//! Building a tree never fails. Grouping commands only become grouping nodes
//! when their argument groups are actually present and balanced; anything
//! else degrades to a [MarkupNode::Raw] carrying its original spelling, so
//! that malformed input flows through to the output instead of raising an
//! error.

use super::{lex, Lexeme, MarkupNode, MarkupNodeList, MarkupNodeRoot, Token};

impl MarkupNodeRoot {
    /// Parses markup text into a markup node tree.
    pub fn parse(markup: &str) -> MarkupNodeRoot {
        let lexemes = lex(markup);
        let mut builder = TreeBuilder {
            lexemes: &lexemes,
            index: 0,
        };

        MarkupNodeRoot {
            root: builder.build_list(None),
        }
    }
}

/// Converts a slice of lexemes into a markup node list.
struct TreeBuilder<'a> {
    lexemes: &'a [Lexeme],
    index: usize,
}

impl<'a> TreeBuilder<'a> {
    fn current(&self) -> Option<&'a Lexeme> {
        self.lexemes.get(self.index)
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    /// Builds nodes until the terminator lexeme (consumed) or the end of the
    /// stream.
    fn build_list(&mut self, terminator: Option<&Lexeme>) -> MarkupNodeList {
        let mut items = Vec::new();

        while let Some(lexeme) = self.current() {
            if terminator == Some(lexeme) {
                self.advance();
                break;
            }
            items.push(self.build_node());
        }

        MarkupNodeList { items }
    }

    fn build_node(&mut self) -> MarkupNode {
        match self.current().unwrap() {
            Lexeme::Token(t) => {
                let t = *t;
                self.advance();
                MarkupNode::Token(t)
            }

            Lexeme::Function(f) => {
                let f = *f;
                self.advance();
                MarkupNode::Function(f)
            }

            Lexeme::Frac => self.build_fraction(),
            Lexeme::Sqrt => self.build_root(),

            Lexeme::Caret => self.build_script("^", MarkupNode::Power),
            Lexeme::Underscore => self.build_script("_", MarkupNode::Subscript),

            Lexeme::ParenOpen => {
                if self.span(self.index, &Lexeme::ParenOpen, &Lexeme::ParenClose).is_some() {
                    self.advance();
                    MarkupNode::Parentheses(self.build_list(Some(&Lexeme::ParenClose)))
                } else {
                    self.advance();
                    MarkupNode::Raw("(".into())
                }
            }

            // A close delimiter with a matching open is consumed as a list
            // terminator before reaching here, so these are all strays
            Lexeme::ParenClose => self.raw(")"),
            Lexeme::GroupOpen => self.raw("{"),
            Lexeme::GroupClose => self.raw("}"),
            Lexeme::BracketOpen => self.raw("["),
            Lexeme::BracketClose => self.raw("]"),

            Lexeme::Raw(s) => {
                let s = s.clone();
                self.advance();
                MarkupNode::Raw(s)
            }
        }
    }

    /// Builds a `\frac`. Both brace groups must be present and balanced,
    /// otherwise the command degrades to raw text.
    fn build_fraction(&mut self) -> MarkupNode {
        let first = self.span(self.index + 1, &Lexeme::GroupOpen, &Lexeme::GroupClose);
        let second = first
            .map(|close| self.span(close + 1, &Lexeme::GroupOpen, &Lexeme::GroupClose));

        if first.is_some() && second.flatten().is_some() {
            self.advance();
            self.advance();
            let numerator = self.build_list(Some(&Lexeme::GroupClose));
            self.advance();
            let denominator = self.build_list(Some(&Lexeme::GroupClose));
            MarkupNode::Fraction(numerator, denominator)
        } else {
            self.advance();
            MarkupNode::Raw("\\frac".into())
        }
    }

    /// Builds a `\sqrt`, with or without a bracketed index.
    fn build_root(&mut self) -> MarkupNode {
        let bracket = self.span(self.index + 1, &Lexeme::BracketOpen, &Lexeme::BracketClose);
        let group_at = match bracket {
            Some(close) => close + 1,
            None => self.index + 1,
        };

        if self.span(group_at, &Lexeme::GroupOpen, &Lexeme::GroupClose).is_none() {
            self.advance();
            return MarkupNode::Raw("\\sqrt".into());
        }

        self.advance();
        let index = bracket.map(|_| {
            self.advance();
            self.build_list(Some(&Lexeme::BracketClose))
        });
        self.advance();
        let argument = self.build_list(Some(&Lexeme::GroupClose));

        MarkupNode::Root(index, argument)
    }

    /// Builds a `^` or `_` script node. The script body is either a brace
    /// group or a single digit or letter; a bare script character degrades to
    /// raw text.
    fn build_script(
        &mut self,
        spelling: &str,
        construct: fn(MarkupNodeList) -> MarkupNode,
    ) -> MarkupNode {
        if self.span(self.index + 1, &Lexeme::GroupOpen, &Lexeme::GroupClose).is_some() {
            self.advance();
            self.advance();
            return construct(self.build_list(Some(&Lexeme::GroupClose)));
        }

        if let Some(Lexeme::Token(t @ (Token::Digit(_) | Token::Variable(_)))) =
            self.lexemes.get(self.index + 1)
        {
            let t = *t;
            self.advance();
            self.advance();
            return construct(MarkupNodeList {
                items: vec![MarkupNode::Token(t)],
            });
        }

        self.advance();
        MarkupNode::Raw(spelling.into())
    }

    /// If `at` holds `open`, returns the index of its balanced matching
    /// `close`.
    fn span(&self, at: usize, open: &Lexeme, close: &Lexeme) -> Option<usize> {
        if self.lexemes.get(at) != Some(open) {
            return None;
        }

        let mut depth = 0usize;
        for (offset, lexeme) in self.lexemes[at..].iter().enumerate() {
            if lexeme == open {
                depth += 1;
            } else if lexeme == close {
                depth -= 1;
                if depth == 0 {
                    return Some(at + offset);
                }
            }
        }

        None
    }

    fn raw(&mut self, spelling: &str) -> MarkupNode {
        self.advance();
        MarkupNode::Raw(spelling.into())
    }
}
