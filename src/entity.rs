use std::borrow::Cow;

use crate::error::Error;

pub(crate) fn parse_entities(content: Cow<str>) -> Result<Cow<str>, Error> {
    if !content.contains('&') {
        return Ok(content);
    }
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c == '&' {
            let mut entity = String::new();
            let mut is_complete = false;
            for c in chars.by_ref() {
                if c == ';' {
                    is_complete = true;
                    break;
                }
                entity.push(c);
            }
            if !is_complete {
                return Err(Error::UnclosedEntity(entity));
            }
            match entity.as_str() {
                "amp" => result.push('&'),
                "apos" => result.push('\''),
                "gt" => result.push('>'),
                "lt" => result.push('<'),
                "quot" => result.push('"'),
                _ => result.push(parse_character_reference(&entity)?),
            }
        } else {
            result.push(c);
        }
    }
    Ok(result.into())
}

fn parse_character_reference(entity: &str) -> Result<char, Error> {
    let code = if let Some(hex) = entity
        .strip_prefix("#x")
        .or_else(|| entity.strip_prefix("#X"))
    {
        u32::from_str_radix(hex, 16).ok()
    } else if let Some(decimal) = entity.strip_prefix('#') {
        decimal.parse::<u32>().ok()
    } else {
        None
    };
    code.and_then(char::from_u32)
        .ok_or_else(|| Error::InvalidEntity(entity.to_string()))
}

pub(crate) fn serialize_text(content: Cow<str>) -> Cow<str> {
    serialize(content, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        _ => None,
    })
}

pub(crate) fn serialize_attribute(content: Cow<str>) -> Cow<str> {
    serialize(content, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '"' => Some("&quot;"),
        '\n' => Some("&#10;"),
        '\t' => Some("&#9;"),
        '\r' => Some("&#13;"),
        _ => None,
    })
}

fn serialize(content: Cow<str>, escape: impl Fn(char) -> Option<&'static str>) -> Cow<str> {
    if !content.chars().any(|c| escape(c).is_some()) {
        return content;
    }
    let mut result = String::with_capacity(content.len());
    for c in content.chars() {
        match escape(c) {
            Some(replacement) => result.push_str(replacement),
            None => result.push(c),
        }
    }
    result.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let text = "A &amp; B";
        assert_eq!(parse_entities(text.into()).unwrap(), "A & B");
    }

    #[test]
    fn test_parse_multiple() {
        let text = "&amp;&apos;&gt;&lt;&quot;";
        assert_eq!(parse_entities(text.into()).unwrap(), "&'><\"");
    }

    #[test]
    fn test_parse_character_references() {
        let text = "&#65;&#x42;&#X43;";
        assert_eq!(parse_entities(text.into()).unwrap(), "ABC");
    }

    #[test]
    fn test_parse_unknown_entity() {
        let text = "&unknown;";
        let err = parse_entities(text.into());
        if let Err(Error::InvalidEntity(entity)) = err {
            assert_eq!(entity, "unknown");
        } else {
            unreachable!();
        }
    }

    #[test]
    fn test_parse_invalid_character_reference() {
        let text = "&#xD800;";
        assert!(matches!(
            parse_entities(text.into()),
            Err(Error::InvalidEntity(_))
        ));
    }

    #[test]
    fn test_parse_unfinished_entity() {
        let text = "&amp";
        let err = parse_entities(text.into());
        if let Err(Error::UnclosedEntity(entity)) = err {
            assert_eq!(entity, "amp");
        } else {
            unreachable!();
        }
    }

    #[test]
    fn test_parse_no_entities() {
        let text = "hello";
        let result = parse_entities(text.into()).unwrap();
        // this is the same slice
        assert!(std::ptr::eq(text, result.as_ref()));
    }

    #[test]
    fn test_serialize_text() {
        assert_eq!(serialize_text("A & B < C".into()), "A &amp; B &lt; C");
    }

    #[test]
    fn test_serialize_attribute() {
        assert_eq!(
            serialize_attribute("say \"hi\"\n".into()),
            "say &quot;hi&quot;&#10;"
        );
    }

    #[test]
    fn test_serialize_no_entities() {
        let text = "hello";
        let result = serialize_text(text.into());
        // this is the same slice
        assert!(std::ptr::eq(text, result.as_ref()));
    }
}
