//! The widget client, owning the embed handle and its readiness state.

use crate::{conversion::GraphingExpression, error::GraphError};

use super::{CommandSink, GraphCommand};

/// How a plotted function is drawn.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct FunctionStyle {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub thickness: u32,
}

impl Default for FunctionStyle {
    fn default() -> Self {
        Self {
            red: 255,
            green: 0,
            blue: 0,
            thickness: 3,
        }
    }
}

/// The visible coordinate range after plotting.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct ViewWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for ViewWindow {
    fn default() -> Self {
        Self {
            x_min: -10.0,
            x_max: 10.0,
            y_min: -10.0,
            y_max: 10.0,
        }
    }
}

/// A client for the embedded graphing widget.
///
/// The widget loads asynchronously in its embed, so the client starts out not
/// ready and refuses every command until [initialize](Self::initialize) is
/// called - the embedder calls it from the widget's load callback. Disposing
/// the client (when its view unmounts) closes the gate again. There is no
/// ambient shared handle; whichever component needs the widget owns a client.
pub struct GraphClient<S: CommandSink> {
    sink: S,
    ready: bool,
}

impl<S: CommandSink> GraphClient<S> {
    /// Creates a client over a widget which has not loaded yet.
    pub fn new(sink: S) -> Self {
        Self { sink, ready: false }
    }

    /// Marks the widget as loaded and ready for commands.
    pub fn initialize(&mut self) {
        self.ready = true;
    }

    /// Marks the widget as gone. Commands fail with
    /// [GraphError::NotReady] until it is initialized again.
    pub fn dispose(&mut self) {
        self.ready = false;
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Plots a function with the default style and view window: clears the
    /// widget, configures axes and grid, defines `name(x)`, and frames the
    /// view.
    pub fn plot(&mut self, name: &str, body: &GraphingExpression) -> Result<(), GraphError> {
        self.plot_with(name, body, FunctionStyle::default(), ViewWindow::default())
    }

    /// Plots a function with an explicit style and view window.
    pub fn plot_with(
        &mut self,
        name: &str,
        body: &GraphingExpression,
        style: FunctionStyle,
        window: ViewWindow,
    ) -> Result<(), GraphError> {
        if !self.ready {
            return Err(GraphError::NotReady);
        }

        self.sink.reset()?;

        let commands = [
            GraphCommand::SetAxesRatio(1.0, 1.0),
            GraphCommand::SetGridVisible(true),
            GraphCommand::SetAxesVisible(true, true),
            GraphCommand::DefineFunction {
                name: name.into(),
                body: body.clone(),
            },
            GraphCommand::SetColor {
                object: name.into(),
                red: style.red,
                green: style.green,
                blue: style.blue,
            },
            GraphCommand::SetLineThickness {
                object: name.into(),
                thickness: style.thickness,
            },
            GraphCommand::SetCoordinateSystem {
                x_min: window.x_min,
                x_max: window.x_max,
                y_min: window.y_min,
                y_max: window.y_max,
            },
        ];

        for command in &commands {
            self.sink.run(&command.script())?;
        }

        Ok(())
    }
}
