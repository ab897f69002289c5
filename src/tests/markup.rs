use crate::{
    node::{
        function::FunctionCommand,
        markup::{lex, Lexeme},
    },
    MarkupNode, MarkupNodeRoot, Token,
};

#[test]
fn test_lex_tokens() {
    assert_eq!(
        lex("2 + 3\\cdot x"),
        vec![
            Lexeme::Token(Token::Digit(2)),
            Lexeme::Token(Token::Add),
            Lexeme::Token(Token::Digit(3)),
            Lexeme::Token(Token::Multiply),
            Lexeme::Token(Token::Variable('x')),
        ],
    );
}

#[test]
fn test_lex_commands() {
    assert_eq!(
        lex("\\div\\pi\\infty\\sin\\theta"),
        vec![
            Lexeme::Token(Token::Divide),
            Lexeme::Token(Token::Pi),
            Lexeme::Token(Token::Infinity),
            Lexeme::Function(FunctionCommand::Sine),
            Lexeme::Raw("\\theta".into()),
        ],
    );
}

#[test]
fn test_lex_sized_delimiters() {
    assert_eq!(
        lex("\\left(x\\right)"),
        vec![
            Lexeme::ParenOpen,
            Lexeme::Token(Token::Variable('x')),
            Lexeme::ParenClose,
        ],
    );

    // Only the parenthesis forms collapse; other delimiters pass through
    assert_eq!(
        lex("\\left|x\\right|"),
        vec![
            Lexeme::Raw("|".into()),
            Lexeme::Token(Token::Variable('x')),
            Lexeme::Raw("|".into()),
        ],
    );
}

#[test]
fn test_parse_fraction() {
    assert_eq!(
        MarkupNodeRoot::parse("\\frac{1}{2}").root,
        markup_list![frac!(tokens!(1), tokens!(2))],
    );
}

#[test]
fn test_parse_roots() {
    assert_eq!(
        MarkupNodeRoot::parse("\\sqrt{4}").root,
        markup_list![MarkupNode::Root(None, tokens!(4))],
    );
    assert_eq!(
        MarkupNodeRoot::parse("\\sqrt[3]{x}").root,
        markup_list![MarkupNode::Root(
            Some(tokens!(3)),
            markup_list![token!(var x)],
        )],
    );
}

#[test]
fn test_parse_power_forms() {
    // Both the braced and the bare single-digit exponent forms
    assert_eq!(
        MarkupNodeRoot::parse("x^2").root,
        markup_list![token!(var x), MarkupNode::Power(tokens!(2))],
    );
    assert_eq!(
        MarkupNodeRoot::parse("x^{10}").root,
        markup_list![token!(var x), MarkupNode::Power(tokens!(1 0))],
    );

    // A trailing caret has no body to attach
    assert_eq!(
        MarkupNodeRoot::parse("x^").root,
        markup_list![token!(var x), MarkupNode::Raw("^".into())],
    );
}

#[test]
fn test_parse_degrades_unmatched_delimiters() {
    assert_eq!(
        MarkupNodeRoot::parse("(x+1").root,
        markup_list![
            MarkupNode::Raw("(".into()),
            token!(var x),
            token!(+),
            token!(1),
        ],
    );

    assert_eq!(
        MarkupNodeRoot::parse("\\frac{1}").root,
        markup_list![
            MarkupNode::Raw("\\frac".into()),
            MarkupNode::Raw("{".into()),
            token!(1),
            MarkupNode::Raw("}".into()),
        ],
    );
}

#[test]
fn test_parse_nested_groups() {
    assert_eq!(
        MarkupNodeRoot::parse("\\frac{\\sqrt{x}}{2}").root,
        markup_list![frac!(
            markup_list![MarkupNode::Root(None, markup_list![token!(var x)])],
            tokens!(2),
        )],
    );
}

#[test]
fn test_parse_subscript() {
    assert_eq!(
        MarkupNodeRoot::parse("\\log_{10}(x)").root,
        markup_list![
            MarkupNode::Function(FunctionCommand::Log),
            MarkupNode::Subscript(tokens!(1 0)),
            MarkupNode::Parentheses(markup_list![token!(var x)]),
        ],
    );
}
