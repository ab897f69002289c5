use crate::{
    error::{GraphError, SinkError},
    evaluable_to_graphing,
    graph::{CommandSink, GraphClient},
};

#[derive(Default)]
struct RecordingSink {
    resets: u32,
    commands: Vec<String>,
    fail: bool,
}

impl CommandSink for RecordingSink {
    fn reset(&mut self) -> Result<(), SinkError> {
        if self.fail {
            return Err(SinkError("widget gone".into()));
        }
        self.resets += 1;
        Ok(())
    }

    fn run(&mut self, command: &str) -> Result<(), SinkError> {
        if self.fail {
            return Err(SinkError("widget gone".into()));
        }
        self.commands.push(command.into());
        Ok(())
    }
}

#[test]
fn test_plot_requires_readiness() {
    let body = evaluable_to_graphing("x**2-4");
    let mut client = GraphClient::new(RecordingSink::default());

    assert!(matches!(client.plot("f", &body), Err(GraphError::NotReady)));
    assert!(client.sink().commands.is_empty());

    client.initialize();
    assert!(client.is_ready());
    assert!(client.plot("f", &body).is_ok());

    client.dispose();
    assert!(matches!(client.plot("f", &body), Err(GraphError::NotReady)));
}

#[test]
fn test_plot_command_sequence() {
    let mut client = GraphClient::new(RecordingSink::default());
    client.initialize();
    client
        .plot("f", &evaluable_to_graphing("x**2-4"))
        .unwrap();

    assert_eq!(client.sink().resets, 1);
    assert_eq!(
        client.sink().commands,
        vec![
            "SetAxesRatio(1,1)",
            "SetGridVisible(true)",
            "SetAxesVisible(true, true)",
            "f(x) = x^2-4",
            "SetColor(f, 255, 0, 0)",
            "SetLineThickness(f, 3)",
            "SetCoordinateSystem(-10, 10, -10, 10)",
        ],
    );
}

#[test]
fn test_sink_failure_propagates() {
    let mut client = GraphClient::new(RecordingSink {
        fail: true,
        ..Default::default()
    });
    client.initialize();

    assert!(matches!(
        client.plot("f", &evaluable_to_graphing("x")),
        Err(GraphError::Sink(_)),
    ));
}
