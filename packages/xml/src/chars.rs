//! XML 1.0 character and name productions

use crate::error::ValidationError;

/// `Char`: tab, LF, CR and everything from U+0020 except U+FFFE and U+FFFF
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..)
}

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        ':' | 'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}'
            | '\u{300}'..='\u{36F}'
            | '\u{203F}'..='\u{2040}')
}

/// Reject any character outside the `Char` production
pub(crate) fn check_chars(raw: &[u8], position: usize) -> Result<(), ValidationError> {
    let text = utf8(raw, position)?;
    match text.chars().find(|c| !is_xml_char(*c)) {
        Some(c) => Err(ValidationError::new(
            format!("invalid character U+{:04X}", u32::from(c)),
            position,
        )),
        None => Ok(()),
    }
}

/// Reject names that do not match the `Name` production
pub(crate) fn check_name(raw: &[u8], position: usize) -> Result<(), ValidationError> {
    let name = utf8(raw, position)?;
    let mut chars = name.chars();
    let valid = chars.next().is_some_and(is_name_start_char) && chars.all(is_name_char);
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new(format!("invalid name {name:?}"), position))
    }
}

pub(crate) fn utf8(raw: &[u8], position: usize) -> Result<&str, ValidationError> {
    std::str::from_utf8(raw).map_err(|e| ValidationError::new(e.to_string(), position))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_production() {
        assert!(check_chars("tab\there\r\n é 日 😀".as_bytes(), 0).is_ok());
        assert!(check_chars(b"\x01", 0).is_err());
        assert!(check_chars(b"nul\0", 0).is_err());
        assert!(check_chars("\u{FFFE}".as_bytes(), 0).is_err());
        assert!(check_chars("\u{FFFF}".as_bytes(), 0).is_err());
    }

    #[test]
    fn test_name_production() {
        for name in ["a", "_x", "ns:tag", "élan", "a-1.b", "x\u{B7}y"] {
            assert!(check_name(name.as_bytes(), 0).is_ok(), "{name}");
        }
        for name in ["", "1a", "-a", ".a", "a\u{1}", "a b", "a>"] {
            assert!(check_name(name.as_bytes(), 0).is_err(), "{name:?}");
        }
    }

    #[test]
    fn test_error_reports_code_point() {
        let err = check_chars(b"ok\x07", 12).expect_err("bell is not a Char");
        assert_eq!(err.message, "invalid character U+0007");
        assert_eq!(err.position, 12);
    }
}
