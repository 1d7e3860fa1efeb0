//! Recording fakes shared by the integration tests.

#![allow(dead_code)]

use std::error::Error as StdError;
use std::fmt::Display;
use std::sync::{Arc, Mutex};

use ra_logger::{LogContext, LogError, LogHandler, LogResult, LogSink, LogType};

/// One call observed by a fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Log { level: LogType, tag: String, message: String },
    Format { level: LogType, context: Option<String>, format: String, args: Vec<String> },
    Exception { error: String, context: Option<String> },
}

fn collect(args: &[&dyn Display]) -> Vec<String> {
    args.iter().map(|a| a.to_string()).collect()
}

/// Sink that records every call.
#[derive(Default)]
pub struct RecordingSink {
    calls: Mutex<Vec<Call>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl LogSink for RecordingSink {
    fn log(&self, level: LogType, tag: &str, message: &dyn Display) -> LogResult<()> {
        self.calls.lock().unwrap().push(Call::Log {
            level,
            tag: tag.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }

    fn log_format(&self, level: LogType, format: &str, args: &[&dyn Display]) -> LogResult<()> {
        self.calls.lock().unwrap().push(Call::Format {
            level,
            context: None,
            format: format.to_string(),
            args: collect(args),
        });
        Ok(())
    }
}

/// Handler that records every call, optionally failing formatted ones.
#[derive(Default)]
pub struct RecordingHandler {
    calls: Mutex<Vec<Call>>,
    fail_with: Option<String>,
}

impl RecordingHandler {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Some(reason.to_string()),
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl LogHandler for RecordingHandler {
    fn log_exception(&self, error: &(dyn StdError + 'static), context: Option<&LogContext<'_>>) {
        self.calls.lock().unwrap().push(Call::Exception {
            error: error.to_string(),
            context: context.map(|c| c.name().to_string()),
        });
    }

    fn log_format(
        &self,
        level: LogType,
        context: Option<&LogContext<'_>>,
        format: &str,
        args: &[&dyn Display],
    ) -> LogResult<()> {
        self.calls.lock().unwrap().push(Call::Format {
            level,
            context: context.map(|c| c.name().to_string()),
            format: format.to_string(),
            args: collect(args),
        });
        match &self.fail_with {
            Some(reason) => Err(LogError::Handler(reason.clone())),
            None => Ok(()),
        }
    }
}
