//! Decoding of JavaScript string-literal escapes.
//!
//! The feed embeds each record as a quoted JavaScript string, so quotes,
//! backslashes and non-ASCII characters arrive escaped. Unknown escapes
//! such as `\/` or `\-` stand for the escaped character itself.

/// Error arising when a backslash sequence cannot be decoded
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UnescapeError {
    #[error("Offset {0}: String ends in a lone backslash.")]
    TrailingBackslash(usize),
    #[error("Offset {0}: Truncated \\{1} escape.")]
    Truncated(usize, char),
    #[error("Offset {0}: Invalid hex digits in \\{1} escape.")]
    InvalidHex(usize, char),
    #[error("Offset {0}: Unpaired surrogate U+{1:04X}.")]
    LoneSurrogate(usize, u32),
    #[error("Offset {0}: U+{1:X} is not a valid code point.")]
    InvalidCodePoint(usize, u32),
}

/// Unescape a JavaScript string literal body.
pub fn unescape(s: &str) -> Result<String, UnescapeError> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.char_indices();

    while let Some((offset, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        let Some((_, escaped)) = chars.next() else {
            return Err(UnescapeError::TrailingBackslash(offset));
        };
        match escaped {
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\u{b}'),
            '0' => out.push('\0'),
            'x' => {
                let code =
                    read_hex(&s[offset + 2..], 2).ok_or_else(|| hex_error(s, offset, 2, 'x'))?;
                skip(&mut chars, 2);
                // Two hex digits never leave the Latin-1 range
                out.push(char::from(code as u8));
            }
            'u' if s[offset + 2..].starts_with('{') => {
                let body = &s[offset + 3..];
                let Some(end) = body.find('}') else {
                    return Err(UnescapeError::Truncated(offset, 'u'));
                };
                let digits = &body[..end];
                if digits.is_empty() || !digits.chars().all(|d| d.is_ascii_hexdigit()) {
                    return Err(UnescapeError::InvalidHex(offset, 'u'));
                }
                let code = u32::from_str_radix(digits, 16)
                    .map_err(|_| UnescapeError::InvalidHex(offset, 'u'))?;
                out.push(
                    char::from_u32(code).ok_or(UnescapeError::InvalidCodePoint(offset, code))?,
                );
                // `{`, digits and `}`
                skip(&mut chars, digits.len() + 2);
            }
            'u' => {
                let high =
                    read_hex(&s[offset + 2..], 4).ok_or_else(|| hex_error(s, offset, 4, 'u'))?;
                skip(&mut chars, 4);
                let code = match high {
                    0xD800..=0xDBFF => {
                        let rest = &s[offset + 6..];
                        let low = rest
                            .strip_prefix("\\u")
                            .and_then(|rest| read_hex(rest, 4))
                            .filter(|low| (0xDC00..=0xDFFF).contains(low))
                            .ok_or(UnescapeError::LoneSurrogate(offset, high))?;
                        skip(&mut chars, 6);
                        0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
                    }
                    0xDC00..=0xDFFF => return Err(UnescapeError::LoneSurrogate(offset, high)),
                    code => code,
                };
                out.push(
                    char::from_u32(code).ok_or(UnescapeError::InvalidCodePoint(offset, code))?,
                );
            }
            // Quotes, backslash, slash and everything else stand for themselves
            other => out.push(other),
        }
    }

    Ok(out)
}

fn read_hex(s: &str, len: usize) -> Option<u32> {
    let digits = s.get(..len)?;
    if !digits.chars().all(|d| d.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

fn hex_error(s: &str, offset: usize, len: usize, kind: char) -> UnescapeError {
    if s[offset + 2..].chars().count() < len {
        UnescapeError::Truncated(offset, kind)
    } else {
        UnescapeError::InvalidHex(offset, kind)
    }
}

fn skip(chars: &mut impl Iterator, n: usize) {
    for _ in 0..n {
        chars.next();
    }
}
