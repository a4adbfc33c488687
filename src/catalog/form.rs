// SPDX-License-Identifier: MPL-2.0
//! Admin form input sanitisation.
//!
//! The sprite editor posts five raw strings. A field that was not posted
//! leaves the stored value alone; a posted field always overwrites it, even
//! when sanitising reduces it to nothing.

use super::record::ProductSprite;

/// Raw values submitted by the sprite editor form.
///
/// `None` means the field was not part of the submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub sprite_url: Option<String>,
    pub frame_width: Option<String>,
    pub frame_height: Option<String>,
    pub sheet_width: Option<String>,
    pub sheet_height: Option<String>,
}

impl FormInput {
    /// Writes the submitted fields into `record`.
    pub fn merge_into(&self, record: &mut ProductSprite) {
        if let Some(raw) = &self.sprite_url {
            let url = sanitize_url(raw);
            record.sprite_url = (!url.is_empty()).then_some(url);
        }

        for (raw, target) in [
            (&self.frame_width, &mut record.frame_width),
            (&self.frame_height, &mut record.frame_height),
            (&self.sheet_width, &mut record.sheet_width),
            (&self.sheet_height, &mut record.sheet_height),
        ] {
            if let Some(raw) = raw {
                *target = Some(parse_int(raw));
            }
        }
    }

    /// Builds a fresh record from the submitted fields.
    #[must_use]
    pub fn sanitize(&self) -> ProductSprite {
        let mut record = ProductSprite::default();
        self.merge_into(&mut record);
        record
    }
}

/// Cleans a submitted sprite URL.
///
/// Whitespace and control characters are dropped, along with characters
/// that cannot appear in a URL. What remains is kept only if it is an
/// `http`/`https` URL or a root-relative path; anything else becomes an
/// empty string.
#[must_use]
pub fn sanitize_url(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .filter(|c| !matches!(c, '<' | '>' | '"' | '\'' | '`' | '\\' | '{' | '}' | '|' | '^'))
        .collect();

    if has_web_scheme(&cleaned) || cleaned.starts_with('/') {
        cleaned
    } else {
        String::new()
    }
}

fn has_web_scheme(url: &str) -> bool {
    ["http://", "https://"].iter().any(|prefix| {
        url.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

/// Parses the leading integer of `raw`, the way form numbers are read.
///
/// Leading whitespace and one sign are accepted; parsing stops at the first
/// non-digit. No digits yields `0`; overflow saturates.
///
/// ```
/// use sprite360::catalog::parse_int;
///
/// assert_eq!(parse_int(" 400px"), 400);
/// assert_eq!(parse_int("-5"), -5);
/// assert_eq!(parse_int("abc"), 0);
/// ```
#[must_use]
pub fn parse_int(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(byte - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}
