use std::sync::{mpsc, Arc, Once};
use std::thread;
use std::time::Duration;

use pretty_assertions::assert_eq;
use pulse_core::{DisplayCommand, DisplayState, Msg, SessionConfig, SessionError};
use pulse_engine::{
    run_display, signal_progress, try_signal_progress, ProgressDisplay, ProgressServer,
    PulseWorker, ServerError, ServerSettings,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(pulse_logging::initialize_for_tests);
}

#[derive(Default)]
struct RecordingDisplay {
    commands: Vec<DisplayCommand>,
}

impl RecordingDisplay {
    fn positions(&self) -> Vec<u64> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DisplayCommand::SetPosition { position } => Some(*position),
                _ => None,
            })
            .collect()
    }

    fn last_title(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|command| match command {
            DisplayCommand::SetTitle { text } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl ProgressDisplay for RecordingDisplay {
    fn execute(&mut self, command: DisplayCommand) {
        self.commands.push(command);
    }
}

fn open(config: SessionConfig) -> (ProgressServer, u16, mpsc::Receiver<Msg>) {
    let (tx, rx) = mpsc::channel();
    let (server, port) =
        ProgressServer::open(config, &ServerSettings::loopback(), tx).expect("open server");
    (server, port, rx)
}

#[test]
fn n_pulses_fill_the_display_and_close_the_session() {
    init_logging();
    let config = SessionConfig::new("Fitting: ", 5, 1);
    let (server, port, rx) = open(config.clone());
    assert_eq!(server.port(), port);

    let worker = PulseWorker::new("127.0.0.1", port);
    let sender = thread::spawn(move || {
        for _ in 0..5 {
            assert!(worker.increment());
        }
        worker.done();
    });

    let mut display = RecordingDisplay::default();
    let state = run_display(DisplayState::new(&config), rx, &mut display);
    sender.join().unwrap();

    let view = state.view();
    assert_eq!(view.value, 5);
    assert!(view.disposed);
    assert_eq!(display.positions().last(), Some(&5));
    assert_eq!(display.last_title(), Some("Fitting: 100% completed."));
    assert_eq!(display.commands.last(), Some(&DisplayCommand::Dispose));
    assert!(server.is_closed());
    assert_eq!(server.completed(), 5);
}

#[test]
fn concurrent_pulses_are_all_counted() {
    init_logging();
    let workers = 8;
    let per_worker = 25;
    let total = (workers * per_worker) as u64;
    let config = SessionConfig::new("Batch ", total, 1);
    let (server, port, rx) = open(config.clone());

    let senders: Vec<_> = (0..workers)
        .map(|_| {
            thread::spawn(move || {
                for _ in 0..per_worker {
                    assert!(signal_progress("127.0.0.1", port));
                }
            })
        })
        .collect();

    let mut display = RecordingDisplay::default();
    let state = run_display(DisplayState::new(&config), rx, &mut display);
    for sender in senders {
        sender.join().unwrap();
    }

    assert_eq!(state.completed(), total);
    assert_eq!(server.completed(), total);
    let positions = display.positions();
    assert_eq!(positions.first(), Some(&0));
    assert_eq!(positions.last(), Some(&total));
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn n_pulses_with_larger_step_close_after_n() {
    init_logging();
    let config = SessionConfig::new("Voxels ", 5, 2);
    let (server, port, rx) = open(config.clone());

    let sender = thread::spawn(move || {
        for _ in 0..5 {
            assert!(signal_progress("127.0.0.1", port));
        }
    });

    let mut display = RecordingDisplay::default();
    let state = run_display(DisplayState::new(&config), rx, &mut display);
    sender.join().unwrap();

    assert_eq!(state.completed(), 5);
    assert_eq!(state.view().value, 10);
    assert_eq!(display.positions(), vec![0, 2, 4, 5, 5, 5]);
    assert_eq!(display.last_title(), Some("Voxels 200% completed."));
    assert!(server.is_closed());
    assert_eq!(server.completed(), 5);
}

#[test]
fn direct_increments_with_larger_step_close_after_n() {
    init_logging();
    let (server, _port, rx) = open(SessionConfig::new("t", 10, 2));

    for _ in 0..10 {
        assert!(!server.is_closed());
        server.increment();
    }
    assert!(server.is_closed());
    assert_eq!(server.completed(), 10);

    server.increment();
    assert_eq!(server.completed(), 10);

    let msgs: Vec<Msg> = rx.try_iter().collect();
    assert_eq!(msgs.len(), 11);
    assert_eq!(msgs[9], Msg::Progress { completed: 10 });
    assert_eq!(msgs[10], Msg::Closed);
}

#[test]
fn direct_increment_reaches_the_display() {
    init_logging();
    let config = SessionConfig::new("t", 3, 1);
    let (server, _port, rx) = open(config);
    let server = Arc::new(server);

    let handles: Vec<_> = (0..3)
        .map(|_| {
            let server = server.clone();
            thread::spawn(move || server.increment())
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let msgs: Vec<Msg> = rx.iter().take(4).collect();
    assert_eq!(
        msgs,
        vec![
            Msg::Progress { completed: 1 },
            Msg::Progress { completed: 2 },
            Msg::Progress { completed: 3 },
            Msg::Closed,
        ]
    );
}

#[test]
fn close_is_idempotent() {
    init_logging();
    let (server, _port, rx) = open(SessionConfig::new("t", 10, 1));

    server.close();
    server.close();
    assert!(server.is_closed());

    let msgs: Vec<Msg> = rx.try_iter().collect();
    assert_eq!(msgs, vec![Msg::Closed]);
}

#[test]
fn increment_after_close_does_not_reach_the_display() {
    init_logging();
    let (server, _port, rx) = open(SessionConfig::new("t", 10, 1));
    server.increment();
    server.close();

    server.increment();
    server.increment();

    assert_eq!(server.completed(), 1);
    let msgs: Vec<Msg> = rx.try_iter().collect();
    assert_eq!(msgs, vec![Msg::Progress { completed: 1 }, Msg::Closed]);
}

#[test]
fn close_releases_the_port() {
    init_logging();
    let (server, port, _rx) = open(SessionConfig::new("t", 10, 1));
    server.close();

    let result = try_signal_progress("127.0.0.1", port, Duration::from_millis(500));
    assert!(result.is_err());
}

#[test]
fn lost_pulse_is_swallowed() {
    init_logging();
    let (server, port, _rx) = open(SessionConfig::new("t", 10, 1));
    drop(server);

    assert!(!signal_progress("127.0.0.1", port));
    assert!(!PulseWorker::new("127.0.0.1", port)
        .with_connect_timeout(Duration::from_millis(200))
        .increment());
}

#[test]
fn display_disposes_when_server_goes_away() {
    init_logging();
    let config = SessionConfig::new("t", 10, 1);
    let (server, _port, rx) = open(config.clone());
    server.increment();
    drop(server);

    let mut display = RecordingDisplay::default();
    let state = run_display(DisplayState::new(&config), rx, &mut display);

    assert!(state.is_disposed());
    assert_eq!(state.completed(), 1);
    assert_eq!(display.commands.last(), Some(&DisplayCommand::Dispose));
}

#[test]
fn invalid_session_is_rejected() {
    init_logging();
    let (tx, _rx) = mpsc::channel();
    let result = ProgressServer::open(
        SessionConfig::new("t", 0, 1),
        &ServerSettings::loopback(),
        tx,
    );

    assert!(matches!(
        result,
        Err(ServerError::InvalidSession(SessionError::ZeroTotal))
    ));
}
