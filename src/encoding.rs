use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};
use xhtmlchardet::detect;

use crate::error::Error;

// Best guess for the encoding of raw markup bytes, from the BOM or the XML
// declaration. Falls back to UTF-8.
fn sniff(data: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(data) {
        return encoding;
    }
    let mut cursor = std::io::Cursor::new(data);
    let charsets = match detect(&mut cursor, None) {
        Ok(charsets) => charsets,
        Err(_) => return UTF_8,
    };
    charsets
        .first()
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode markup bytes to text, returning the encoding that was used.
///
/// Malformed sequences are an error.
pub(crate) fn decode(data: &[u8]) -> Result<(Cow<'_, str>, &'static Encoding), Error> {
    let encoding = sniff(data);
    let (text, used, had_errors) = encoding.decode(data);
    if had_errors {
        return Err(Error::MalformedEncoding(used.name()));
    }
    Ok((text, used))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8() {
        let data = "<?xml version=\"1.0\" encoding=\"UTF-8\"?><a>é</a>".as_bytes();
        let (text, encoding) = decode(data).unwrap();
        assert_eq!(encoding.name(), "UTF-8");
        assert!(text.ends_with("<a>é</a>"));
    }

    #[test]
    fn test_utf8_without_declaration() {
        let (_, encoding) = decode(b"<a/>").unwrap();
        assert_eq!(encoding.name(), "UTF-8");
    }

    #[test]
    fn test_iso8859_1() {
        let data = b"<?xml version=\"1.0\" encoding=\"iso-8859-1\"?><a>\xe9</a>";
        let (text, encoding) = decode(data).unwrap();
        // windows-1252 is a superset of 8859-1
        assert_eq!(encoding.name(), "windows-1252");
        assert!(text.ends_with("<a>é</a>"));
    }

    #[test]
    fn test_malformed_utf8() {
        let data = b"<?xml version=\"1.0\" encoding=\"UTF-8\"?><a>\xff</a>";
        let err = decode(data).unwrap_err();
        assert!(matches!(err, Error::MalformedEncoding("UTF-8")));
    }

    #[test]
    fn test_bom_is_stripped() {
        let data = b"\xef\xbb\xbf<a/>";
        let (text, encoding) = decode(data).unwrap();
        assert_eq!(encoding.name(), "UTF-8");
        assert_eq!(text, "<a/>");
    }
}
