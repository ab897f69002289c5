//! Best-effort printing of a markup tree in the solver dialect.
//!
//! This is the fallback used by the conversion entry points when an upgrade
//! fails: every grouping command still converts, raw markup flows through
//! with its original spelling, and the result may or may not be a valid
//! expression. Invalid output is only detected downstream, when the solver
//! rejects it.

use crate::node::function::FunctionCommand;

use super::{MarkupNode, MarkupNodeList, MarkupNodeRoot, Token};

impl MarkupNodeRoot {
    /// Prints this tree in the solver dialect without upgrading it,
    /// converting whatever can be converted and passing the rest through.
    pub fn best_effort_evaluable(&self) -> String {
        emit_list(&self.root)
    }
}

fn emit_list(list: &MarkupNodeList) -> String {
    let items = &list.items[..];
    let mut out = String::new();
    let mut index = 0;

    while index < items.len() {
        let consumed = emit_node(&mut out, items, index);
        index += consumed;
    }

    out
}

/// Emits the node at `index`, returning how many nodes were consumed (more
/// than one when a neighbouring script node is folded in).
fn emit_node(out: &mut String, items: &[MarkupNode], index: usize) -> usize {
    match &items[index] {
        MarkupNode::Token(Token::Variable('e')) => return emit_euler(out, items, index),

        MarkupNode::Token(t) => {
            match t {
                Token::Add => out.push('+'),
                Token::Subtract => out.push('-'),
                Token::Multiply => out.push('*'),
                Token::Divide => out.push('/'),
                Token::Point => out.push('.'),
                Token::Digit(d) => {
                    out.push_str(&d.to_string());
                    // A digit running into a letter is an implicit
                    // multiplication; make it explicit
                    if begins_with_letter(items.get(index + 1)) {
                        out.push('*');
                    }
                }
                Token::Variable(v) => out.push(*v),
                Token::Pi => out.push_str("pi"),
                Token::Infinity => out.push_str("inf"),
            }
        }

        MarkupNode::Fraction(a, b) => {
            out.push('(');
            out.push_str(&emit_list(a));
            out.push_str(")/(");
            out.push_str(&emit_list(b));
            out.push(')');
        }

        MarkupNode::Root(None, arg) => {
            out.push_str("sqrt(");
            out.push_str(&emit_list(arg));
            out.push(')');
        }

        MarkupNode::Root(Some(root_index), arg) => {
            out.push_str("pow(");
            out.push_str(&emit_list(arg));
            out.push_str(",1/");
            out.push_str(&script_body(root_index));
            out.push(')');
        }

        MarkupNode::Power(exp) => {
            out.push_str("**");
            out.push_str(&script_body(exp));
        }

        MarkupNode::Subscript(sub) => {
            out.push_str("_{");
            out.push_str(&emit_list(sub));
            out.push('}');
        }

        MarkupNode::Parentheses(inner) => {
            out.push('(');
            out.push_str(&emit_list(inner));
            out.push(')');
        }

        MarkupNode::Function(command) => return emit_function(out, items, index, *command),

        MarkupNode::Raw(text) => out.push_str(text),
    }

    1
}

/// Prints a script (exponent or root index) body: a lone digit stays bare,
/// anything longer is parenthesised.
fn script_body(list: &MarkupNodeList) -> String {
    if let [MarkupNode::Token(Token::Digit(d))] = &list.items[..] {
        return d.to_string();
    }

    format!("({})", emit_list(list))
}

/// Prints an `e`, which becomes an `exp` call when an exponent follows it,
/// the Euler constant reference when it stands alone, and a plain variable
/// when another word character touches it.
fn emit_euler(out: &mut String, items: &[MarkupNode], index: usize) -> usize {
    if let Some(MarkupNode::Power(exp)) = items.get(index + 1) {
        out.push_str("exp(");
        out.push_str(&emit_list(exp));
        out.push(')');
        return 2;
    }

    let touches_word_character = |node: Option<&MarkupNode>| {
        matches!(
            node,
            Some(MarkupNode::Token(Token::Variable(_) | Token::Digit(_)))
        )
    };

    let isolated = !(index > 0 && touches_word_character(items.get(index - 1)))
        && !touches_word_character(items.get(index + 1));

    if isolated {
        out.push_str("math.e");
    } else {
        out.push('e');
    }

    1
}

/// Prints a function command name. A following `^{-1}` folds into the inverse
/// name where one exists; a following base-10 or empty subscript folds into
/// `log10`. The function's argument is not this node's concern - the group
/// after it prints itself.
fn emit_function(
    out: &mut String,
    items: &[MarkupNode],
    index: usize,
    command: FunctionCommand,
) -> usize {
    if let Some(MarkupNode::Power(exp)) = items.get(index + 1) {
        if exp.is_negative_one() {
            if let Some(inverse) = command.inverse() {
                out.push_str(inverse.name());
                return 2;
            }
        }
    }

    if let Some(function) = command.reciprocal_of() {
        out.push_str("1/");
        out.push_str(function.name());
        return 1;
    }

    // Every non-reciprocal command resolves directly
    let function = command.resolved().unwrap();
    out.push_str(function.name());

    // Any base-10 subscript is already implied by the resolved name; other
    // bases are left to print themselves after it
    if command == FunctionCommand::Log {
        if let Some(MarkupNode::Subscript(base)) = items.get(index + 1) {
            let base_is_10 = base.items.is_empty()
                || base.items
                    == [
                        MarkupNode::Token(Token::Digit(1)),
                        MarkupNode::Token(Token::Digit(0)),
                    ];
            if base_is_10 {
                return 2;
            }
        }
    }

    1
}

/// Whether this node prints something starting with a letter, for implicit
/// multiplication after a digit. Roots count: they print as `sqrt` or `pow`.
fn begins_with_letter(node: Option<&MarkupNode>) -> bool {
    match node {
        Some(MarkupNode::Token(Token::Variable(_) | Token::Pi | Token::Infinity)) => true,
        Some(MarkupNode::Function(_) | MarkupNode::Root(_, _)) => true,
        _ => false,
    }
}
