//! Typed widget commands and their command-syntax spellings.

use core::fmt;

use crate::conversion::GraphingExpression;

/// One imperative command understood by the graphing widget.
#[derive(PartialEq, Debug, Clone)]
pub enum GraphCommand {
    /// Locks the ratio between the axes' scales.
    SetAxesRatio(f64, f64),

    /// Shows or hides the coordinate grid.
    SetGridVisible(bool),

    /// Shows or hides the two axes.
    SetAxesVisible(bool, bool),

    /// Defines a named single-variable function from a graphing expression.
    DefineFunction {
        name: String,
        body: GraphingExpression,
    },

    /// Sets the display colour of a named object.
    SetColor {
        object: String,
        red: u8,
        green: u8,
        blue: u8,
    },

    /// Sets the line thickness of a named object.
    SetLineThickness { object: String, thickness: u32 },

    /// Sets the visible coordinate range.
    SetCoordinateSystem {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
}

impl GraphCommand {
    /// The command's spelling in the widget's command syntax.
    pub fn script(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GraphCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GraphCommand::SetAxesRatio(x, y) => write!(f, "SetAxesRatio({},{})", x, y),

            GraphCommand::SetGridVisible(visible) => write!(f, "SetGridVisible({})", visible),

            GraphCommand::SetAxesVisible(x, y) => write!(f, "SetAxesVisible({}, {})", x, y),

            GraphCommand::DefineFunction { name, body } => write!(f, "{}(x) = {}", name, body),

            GraphCommand::SetColor {
                object,
                red,
                green,
                blue,
            } => write!(f, "SetColor({}, {}, {}, {})", object, red, green, blue),

            GraphCommand::SetLineThickness { object, thickness } => {
                write!(f, "SetLineThickness({}, {})", object, thickness)
            }

            GraphCommand::SetCoordinateSystem {
                x_min,
                x_max,
                y_min,
                y_max,
            } => write!(
                f,
                "SetCoordinateSystem({}, {}, {}, {})",
                x_min, x_max, y_min, y_max
            ),
        }
    }
}
