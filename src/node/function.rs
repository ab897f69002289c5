//! Function commands appearing in markup, and the resolved functions which
//! may appear in a structured node tree.

/// A function command as it appears in markup, before its meaning has been
/// pinned down. Reciprocal trigonometric commands and logarithm base
/// resolution only disappear when the tree is upgraded.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum FunctionCommand {
    Sine,
    Cosine,
    Tangent,
    Cosecant,
    Secant,
    Cotangent,
    HyperbolicSine,
    HyperbolicCosine,
    HyperbolicTangent,

    /// A `\log` with no subscript, or with a subscript which is empty or
    /// `10`. All of these mean the base-10 logarithm.
    Log,

    /// A `\ln`.
    NaturalLog,
}

impl FunctionCommand {
    /// Attempts to convert a markup command word (without its backslash) to a
    /// `FunctionCommand`, or returns `None` if the word is not a function.
    pub fn from_command_word(word: &str) -> Option<FunctionCommand> {
        Some(match word {
            "sin" => Self::Sine,
            "cos" => Self::Cosine,
            "tan" => Self::Tangent,
            "csc" => Self::Cosecant,
            "sec" => Self::Secant,
            "cot" => Self::Cotangent,
            "sinh" => Self::HyperbolicSine,
            "cosh" => Self::HyperbolicCosine,
            "tanh" => Self::HyperbolicTangent,
            "log" => Self::Log,
            "ln" => Self::NaturalLog,

            _ => return None,
        })
    }

    /// The function this command resolves to directly, or `None` for the
    /// reciprocal trigonometric commands, which have no function of their own
    /// and become `1/sin(..)`, `1/cos(..)` or `1/tan(..)` instead.
    pub fn resolved(&self) -> Option<Function> {
        Some(match self {
            Self::Sine => Function::Sine,
            Self::Cosine => Function::Cosine,
            Self::Tangent => Function::Tangent,
            Self::HyperbolicSine => Function::HyperbolicSine,
            Self::HyperbolicCosine => Function::HyperbolicCosine,
            Self::HyperbolicTangent => Function::HyperbolicTangent,
            Self::Log => Function::Log10,
            Self::NaturalLog => Function::NaturalLog,

            Self::Cosecant | Self::Secant | Self::Cotangent => return None,
        })
    }

    /// For the reciprocal commands, the function whose reciprocal they are.
    pub fn reciprocal_of(&self) -> Option<Function> {
        Some(match self {
            Self::Cosecant => Function::Sine,
            Self::Secant => Function::Cosine,
            Self::Cotangent => Function::Tangent,

            _ => return None,
        })
    }

    /// The function this command resolves to when marked with a `^{-1}`
    /// inverse, or `None` if no inverse form exists (the reciprocal and
    /// logarithm commands).
    pub fn inverse(&self) -> Option<Function> {
        Some(match self {
            Self::Sine => Function::ArcSine,
            Self::Cosine => Function::ArcCosine,
            Self::Tangent => Function::ArcTangent,
            Self::HyperbolicSine => Function::InverseHyperbolicSine,
            Self::HyperbolicCosine => Function::InverseHyperbolicCosine,
            Self::HyperbolicTangent => Function::InverseHyperbolicTangent,

            _ => return None,
        })
    }
}

/// A mathematical function, for which an invocation may appear in a
/// structured node tree.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Function {
    Sine,
    Cosine,
    Tangent,
    ArcSine,
    ArcCosine,
    ArcTangent,
    HyperbolicSine,
    HyperbolicCosine,
    HyperbolicTangent,
    InverseHyperbolicSine,
    InverseHyperbolicCosine,
    InverseHyperbolicTangent,

    /// The base-10 logarithm. Both `\log` and `\log_{10}` resolve here.
    Log10,

    /// The natural logarithm. The solver dialect calls this one `log`.
    NaturalLog,

    /// `e` raised to the argument. There is no markup command for this; it is
    /// produced by upgrading `e^{..}`.
    Exp,
}

impl Function {
    /// The name of this function in both output dialects. The solver's
    /// expression grammar and the graphing widget agree on all of these.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sine => "sin",
            Self::Cosine => "cos",
            Self::Tangent => "tan",
            Self::ArcSine => "asin",
            Self::ArcCosine => "acos",
            Self::ArcTangent => "atan",
            Self::HyperbolicSine => "sinh",
            Self::HyperbolicCosine => "cosh",
            Self::HyperbolicTangent => "tanh",
            Self::InverseHyperbolicSine => "asinh",
            Self::InverseHyperbolicCosine => "acosh",
            Self::InverseHyperbolicTangent => "atanh",
            Self::Log10 => "log10",
            Self::NaturalLog => "log",
            Self::Exp => "exp",
        }
    }

    /// The number of arguments for this function.
    pub fn argument_count(&self) -> usize {
        1
    }
}
