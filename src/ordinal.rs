use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_ORDINAL_SUFFIX: Regex = Regex::new(r"(\d)(?:th|rd|nd|st)").unwrap();
}

/// Remove English ordinal suffixes following a digit ("August 8th" becomes "August 8").
pub fn strip_ordinals(text: &str) -> String {
    RE_ORDINAL_SUFFIX.replace_all(text, "$1").into_owned()
}
