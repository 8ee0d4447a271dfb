pub const WINDOW_LENGTH: usize = 5000;
pub const MAX_BOOK_CHARS: usize = 100_000;

pub(crate) const HTML_MARKER: &str = "<!DOCTYPE html>";

pub const CHARACTER_TEMPERATURE: f64 = 0.3;
pub const QUOTE_TEMPERATURE: f64 = 0.5;

pub(crate) const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
pub(crate) const DEFAULT_MODEL: &str = "gemma2-9b-it";
pub(crate) const DEFAULT_BOOK_SOURCE_URL: &str = "https://www.gutenberg.org";

pub(crate) const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub(crate) const DEFAULT_SERVER_PORT: u16 = 10000;

pub const CONNECT_TIMEOUT_SECS: u64 = 30;
pub const READ_TIMEOUT_SECS: u64 = 120;

pub const MAX_JSON_PAYLOAD_BYTES: usize = 4 * 1024 * 1024;

pub(crate) const BOOK_NOT_FOUND_DETAIL: &str = "Book not found in known formats.";
