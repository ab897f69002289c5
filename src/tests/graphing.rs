use crate::{evaluable_to_graphing, markup_to_evaluable, tests::util::gr};

#[test]
fn test_exponent_rewrite() {
    assert_eq!(evaluable_to_graphing("x**2-4").as_str(), "x^2-4");
    assert_eq!(evaluable_to_graphing("x**(10)").as_str(), "x^(10)");
}

#[test]
fn test_multiplication_before_parenthesis() {
    assert_eq!(evaluable_to_graphing("2*(x+1)").as_str(), "2(x+1)");
}

#[test]
fn test_namespace_prefixes_stripped() {
    assert_eq!(evaluable_to_graphing("math.e+1").as_str(), "e+1");
    assert_eq!(evaluable_to_graphing("np.log10(x)").as_str(), "log10(x)");
}

#[test]
fn test_circle_constant_glyph() {
    assert_eq!(evaluable_to_graphing("pi").as_str(), "π");
    assert_eq!(evaluable_to_graphing("2*pi").as_str(), "2*π");
}

#[test]
fn test_expression_without_variable_is_echoed() {
    // A constant function is still a function; nothing is rejected
    assert_eq!(evaluable_to_graphing("5").as_str(), "5");
    assert_eq!(evaluable_to_graphing("sin(2)").as_str(), "sin(2)");
}

#[test]
fn test_tree_emitter_matches_string_pass() {
    for (markup, expected) in [
        ("x^2-4", "x^2-4"),
        ("x^{2}\\cdot(x+1)", "x^2(x+1)"),
        ("\\frac{1}{2}", "(1)/(2)"),
        ("\\pi x", "π*x"),
        ("e^{x}", "exp(x)"),
    ] {
        assert_eq!(gr(markup), expected, "tree emitter, markup {:?}", markup);

        let through = evaluable_to_graphing(markup_to_evaluable(markup).as_str());
        assert_eq!(through.as_str(), expected, "string pass, markup {:?}", markup);
    }
}
