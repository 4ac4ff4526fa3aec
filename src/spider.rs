//! A configured feed source and the hand-off of its events downstream.
//!
//! Fetching is left to the crawler: it downloads each start URL and passes
//! the body to [`Spider::parse`] or [`Spider::crawl_body`].

use tracing::info;

use crate::config::SpiderConfig;
use crate::event::CalendarEvent;
use crate::parser::CalendarJsParser;
use crate::recognizer::{ClockRecognizer, TimeRecognizer};

/// Downstream consumer of scraped events.
pub trait ItemSink {
    fn emit(&mut self, event: CalendarEvent);
}

impl ItemSink for Vec<CalendarEvent> {
    fn emit(&mut self, event: CalendarEvent) {
        self.push(event);
    }
}

impl<S: ItemSink + ?Sized> ItemSink for &mut S {
    fn emit(&mut self, event: CalendarEvent) {
        (**self).emit(event);
    }
}

#[derive(Debug, Clone)]
pub struct Spider<R: TimeRecognizer = ClockRecognizer> {
    config: SpiderConfig,
    recognizer: R,
}

impl Spider<ClockRecognizer> {
    pub fn new(config: SpiderConfig) -> Self {
        Self::with_recognizer(config, ClockRecognizer)
    }
}

impl Default for Spider<ClockRecognizer> {
    fn default() -> Self {
        Self::new(SpiderConfig::default())
    }
}

impl<R: TimeRecognizer> Spider<R> {
    pub fn with_recognizer(config: SpiderConfig, recognizer: R) -> Self {
        Spider { config, recognizer }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.config.title
    }

    #[inline]
    pub fn start_urls(&self) -> &[String] {
        &self.config.start_urls
    }

    #[inline]
    pub fn config(&self) -> &SpiderConfig {
        &self.config
    }

    /// Lazily parse one downloaded feed body.
    pub fn parse<'a>(&'a self, body: &'a str) -> impl Iterator<Item = CalendarEvent> + 'a {
        CalendarJsParser::new(body, &self.recognizer, self.config.parser_options()).events()
    }

    /// Parse a feed body and emit every event to `sink`, returning how many were emitted.
    pub fn crawl_body(&self, body: &str, mut sink: impl ItemSink) -> usize {
        let mut count = 0;
        for event in self.parse(body) {
            sink.emit(event);
            count += 1;
        }
        info!(spider = self.name(), events = count, "parsed calendar feed");
        count
    }
}
