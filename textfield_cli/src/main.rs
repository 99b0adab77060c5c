//! textfield - Drives one editing session from standard input.
//!
//! Usage: textfield [CLIENT_ID] [ACTION]
//!
//! Each input line is either an editing command (`insert hello`,
//! `move-left-word`, `submit`, ...) or a host request encoded as a JSON
//! method call (`{"method":"TextInput.setClient","args":[1,{}]}`). Every
//! event the field emits is written to standard output as one JSON line.

use std::env;
use std::io::{self, BufRead};
use textfield_channel::{parse_call, spawn_writer, ChannelSink, HostRequest};
use textfield_core::{
    ClientId, EditCommand, FieldConfig, InputAction, InputSession, PresentationSink,
};

/// Handles one input line. Malformed lines are reported and skipped.
fn process_line<S: PresentationSink + Clone>(session: &mut InputSession<S>, line: &str) {
    let line = line.trim_end_matches('\r');
    if line.trim().is_empty() {
        return;
    }

    if line.starts_with('{') {
        match parse_call(line).and_then(|call| HostRequest::from_call(&call)) {
            Ok(request) => {
                log::debug!("Host request: {:?}", request);
                request.apply(session);
            }
            Err(e) => log::error!("Rejected host request: {}", e),
        }
        return;
    }

    match line.parse::<EditCommand>() {
        Ok(command) => {
            session.dispatch(&command);
        }
        Err(e) => log::error!("{}", e),
    }
}

/// Builds the initial focus from command-line arguments, if a client id
/// was given.
fn initial_config(args: &[String]) -> Option<FieldConfig> {
    let client_id = match args.get(1)?.parse::<ClientId>() {
        Ok(id) => id,
        Err(e) => {
            log::error!("Invalid client id '{}': {}", args[1], e);
            return None;
        }
    };

    let mut config = FieldConfig::new(client_id);
    if let Some(name) = args.get(2) {
        match name.parse::<InputAction>() {
            Ok(action) => config = config.with_input_action(action),
            Err(e) => log::warn!("{}; using '{}'", e, config.input_action),
        }
    }
    Some(config)
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting textfield");

    let (sink, rx) = ChannelSink::unbounded();
    let writer = spawn_writer(rx, io::stdout());

    let mut session = InputSession::new(sink);

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if let Some(config) = initial_config(&args) {
        log::info!("Focusing client {}", config.client_id);
        session.set_client(config);
    }

    for line in io::stdin().lock().lines() {
        match line {
            Ok(line) => process_line(&mut session, &line),
            Err(e) => {
                log::error!("Failed to read input: {}", e);
                break;
            }
        }
    }

    // Dropping the session closes the channel and lets the writer finish.
    drop(session);
    match writer.join() {
        Ok(Ok(())) => {}
        Ok(Err(e)) => log::error!("Failed to write output: {}", e),
        Err(_) => log::error!("Writer thread panicked"),
    }

    log::info!("textfield exited");
}
