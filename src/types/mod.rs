mod timezone;
pub use timezone::{DEFAULT_TIMEZONE, localize};
