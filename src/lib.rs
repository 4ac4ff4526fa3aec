const LINE_PREFIX: &str = "calEvents[calEvents.length]";
const ASSIGN_DELIMITER: char = '=';
const FIELD_DELIMITER: char = '|';
const QUOTES: [char; 2] = ['"', '\''];
const STATEMENT_END: char = ';';

pub mod parser;
pub use parser::{CalendarJsParser, FeedLine, FeedLineReader, ParserError, ParserOptions};

pub mod event;
pub use event::{CalendarEvent, EventDate};

pub mod recognizer;
pub use recognizer::{ClockRecognizer, TimeRecognizer, TokenClass};

pub mod html;
pub mod ordinal;

pub mod config;
pub use config::{ConfigError, SpiderConfig};

pub mod spider;
pub use spider::{ItemSink, Spider};

pub mod types;
