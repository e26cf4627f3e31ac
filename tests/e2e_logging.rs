// AdMapLog - tests/e2e_logging.rs
//
// End-to-end tests for the plugin logger through the public library API.
//
// These tests drive real sinks: the console sink writes into an in-memory
// buffer, the GUI sink draws into the demo host state or into a host
// implemented right here with separate bar and panel types, and config is
// loaded from a real file on disk.

use admap_log::app::host::SharedHost;
use admap_log::core::model::{MessageStyle, PanelLevel};
use admap_log::core::surface::{
    HostInterface, MessageBar, MessagePanel, RecordingSurface, SurfaceCall,
};
use admap_log::platform::config::{load_config, SinkKind};
use admap_log::util::constants;
use admap_log::{ConsoleSink, GuiSink, Logger, Severity, Verbosity};
use std::cell::RefCell;
use std::rc::Rc;

// =============================================================================
// Helpers
// =============================================================================

fn host_label() -> String {
    "MainThread".to_string()
}

/// Call every severity method once, returning the four results.
fn call_all(logger: &dyn Logger, message: &str) -> [bool; 4] {
    [
        logger.error(message),
        logger.warning(message),
        logger.info(message),
        logger.debug(message),
    ]
}

/// A host whose bar and panel are different types sharing one event log,
/// the way a real GUI hands out separate widgets.
#[derive(Default)]
struct SplitHost {
    events: Rc<RefCell<Vec<String>>>,
}

struct Bar(Rc<RefCell<Vec<String>>>);
struct Panel(Rc<RefCell<Vec<String>>>);

impl MessageBar for Bar {
    fn clear_widgets(&self) {
        self.0.borrow_mut().push("clear".to_string());
    }

    fn push_message(&self, title: &str, text: &str, style: MessageStyle, duration_secs: u32) {
        self.0
            .borrow_mut()
            .push(format!("push {title} {text} {style:?} {duration_secs}"));
    }
}

impl MessagePanel for Panel {
    fn log_message(&self, text: &str, category: &str, level: PanelLevel) {
        self.0
            .borrow_mut()
            .push(format!("log {text} <{category}> {level:?}"));
    }
}

impl HostInterface for SplitHost {
    type Bar = Bar;
    type Panel = Panel;

    fn message_bar(&self) -> Bar {
        Bar(Rc::clone(&self.events))
    }

    fn message_panel(&self) -> Panel {
        Panel(Rc::clone(&self.events))
    }
}

// =============================================================================
// Severity gate
// =============================================================================

/// For thresholds 0..=3 each method emits iff threshold >= its requirement,
/// and every call returns false.
#[test]
fn e2e_threshold_matrix_on_console() {
    for threshold in 0..=3u32 {
        let sink = ConsoleSink::with_writer(Vec::new(), Verbosity(threshold))
            .with_thread_label(host_label);
        let results = call_all(&sink, "m");
        assert_eq!(results, [false; 4]);

        let out = String::from_utf8(sink.into_writer()).unwrap();
        let tags: Vec<&str> = out
            .lines()
            .map(|l| &l["[MainThread]".len().."[MainThread]".len() + 5])
            .collect();
        let expected: Vec<&str> = Severity::all()
            .iter()
            .filter(|s| threshold >= s.required_verbosity().value())
            .map(|s| s.tag())
            .collect();
        assert_eq!(tags, expected, "threshold {threshold}");
    }
}

/// A boxed trait object works as the plugin holds it.
#[test]
fn e2e_boxed_loggers_share_one_interface() {
    let recorder = RecordingSurface::new();
    let loggers: Vec<Box<dyn Logger>> = vec![
        Box::new(ConsoleSink::with_writer(Vec::new(), Verbosity(0))),
        Box::new(GuiSink::new(&recorder, Verbosity(0))),
    ];
    for logger in &loggers {
        assert!(!logger.error("shared"));
        assert!(!logger.debug("hidden"));
    }
    assert_eq!(recorder.calls().len(), 3);
}

// =============================================================================
// Console sink
// =============================================================================

#[test]
fn e2e_console_lines_for_all_methods() {
    let sink = ConsoleSink::with_writer(Vec::new(), Verbosity(4)).with_thread_label(host_label);
    call_all(&sink, "route planned");
    let out = String::from_utf8(sink.into_writer()).unwrap();
    assert_eq!(
        out,
        "[MainThread]ERROR: route planned\n\
         [MainThread]WARN.: route planned\n\
         [MainThread]INFO.: route planned\n\
         [MainThread]DEBUG: route planned\n"
    );
}

// =============================================================================
// GUI sink
// =============================================================================

#[test]
fn e2e_gui_error_is_clear_push_log() {
    let host = RecordingSurface::new();
    let sink = GuiSink::with_default_verbosity(&host);
    sink.error("x");
    assert_eq!(
        host.calls(),
        vec![
            SurfaceCall::ClearWidgets,
            SurfaceCall::PushMessage {
                title: "ERROR".to_string(),
                text: "x".to_string(),
                style: MessageStyle::Critical,
                duration_secs: constants::MESSAGE_BAR_TIMEOUT_SECS,
            },
            SurfaceCall::LogMessage {
                text: "x".to_string(),
                category: constants::PLUGIN_TITLE.to_string(),
                level: PanelLevel::Critical,
            },
        ]
    );
}

#[test]
fn e2e_gui_sink_with_split_host() {
    let host = SplitHost::default();
    let sink = GuiSink::new(&host, Verbosity(3));
    sink.debug("y");
    sink.log("????", "z");

    let events = host.events.borrow();
    assert_eq!(
        *events,
        vec![
            "clear".to_string(),
            "push DEBUG y Success 5".to_string(),
            "log y <Intel Autonomus Driving Map> Info".to_string(),
            "clear".to_string(),
            "push ???? z Success 5".to_string(),
            "log z <Intel Autonomus Driving Map> Info".to_string(),
        ]
    );
}

/// Only the most recent message stays on the demo host's bar, while the
/// panel keeps all of them with debug demoted to info.
#[test]
fn e2e_demo_host_bar_and_panel() {
    let host = SharedHost::new(Verbosity(4));
    let sink = GuiSink::new(&host, Verbosity(4));
    call_all(&sink, "tile");

    let state = host.lock();
    assert_eq!(state.widgets.len(), 1);
    assert_eq!(state.widgets[0].title, "DEBUG");
    assert_eq!(state.widgets[0].style, MessageStyle::Success);

    let levels: Vec<PanelLevel> = state.panel.iter().map(|e| e.level).collect();
    assert_eq!(
        levels,
        vec![
            PanelLevel::Critical,
            PanelLevel::Warning,
            PanelLevel::Info,
            PanelLevel::Info
        ]
    );
}

// =============================================================================
// Config
// =============================================================================

#[test]
fn e2e_config_drives_logger_verbosity() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(constants::CONFIG_FILE_NAME);
    std::fs::write(&path, "[logger]\nverbosity = 0\nsink = \"console\"\n").unwrap();

    let (config, warnings) = load_config(&path);
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    assert_eq!(config.sink, SinkKind::Console);

    let sink =
        ConsoleSink::with_writer(Vec::new(), config.verbosity).with_thread_label(host_label);
    sink.warning("suppressed");
    sink.error("kept");
    let out = String::from_utf8(sink.into_writer()).unwrap();
    assert_eq!(out, "[MainThread]ERROR: kept\n");
}
