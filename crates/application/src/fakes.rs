//! In-memory tester and transport for unit tests.
#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use webprobe_domain::FetchResult;

use crate::ports::{HttpFetcher, Tester};

/// One hook invocation, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Verbose(String),
    Get(String),
    /// Status code of the dumped result.
    Dump(u16),
}

type EventLog = Arc<Mutex<Vec<Event>>>;

/// Transport returning the same canned result for every URL.
pub struct CannedFetcher {
    response: FetchResult,
    events: EventLog,
}

#[async_trait]
impl HttpFetcher for CannedFetcher {
    async fn get(&self, url: &str) -> FetchResult {
        self.events.lock().unwrap().push(Event::Get(url.to_string()));
        self.response.clone()
    }
}

/// Tester recording every hook invocation into one shared log.
pub struct RecordingTester {
    base_url: String,
    fetcher: CannedFetcher,
    events: EventLog,
    dumps: Mutex<Vec<FetchResult>>,
}

impl RecordingTester {
    pub fn new(base_url: &str, response: FetchResult) -> Self {
        let events = EventLog::default();
        Self {
            base_url: base_url.to_string(),
            fetcher: CannedFetcher {
                response,
                events: Arc::clone(&events),
            },
            events,
            dumps: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn requested(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Get(url) => Some(url),
                _ => None,
            })
            .collect()
    }

    pub fn verbose_lines(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Verbose(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    pub fn dumps(&self) -> Vec<FetchResult> {
        self.dumps.lock().unwrap().clone()
    }
}

impl Tester for RecordingTester {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn verbose(&self, message: &str) {
        self.events.lock().unwrap().push(Event::Verbose(message.to_string()));
    }

    fn dump_contents(&self, result: &FetchResult) {
        self.events.lock().unwrap().push(Event::Dump(result.status_code));
        self.dumps.lock().unwrap().push(result.clone());
    }

    fn fetcher(&self) -> &dyn HttpFetcher {
        &self.fetcher
    }
}
