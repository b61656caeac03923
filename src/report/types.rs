// Attribute types - Typed parsing of report attribute values
//
// sslyze writes booleans Python-style (`True`/`False`); the lowercase XML
// Schema spellings are accepted as well. Nothing else is a boolean.

use crate::Result;
use crate::document::Node;
use crate::error::ReportError;
use std::num::ParseIntError;
use std::str::FromStr;

/// Parse a boolean literal, `None` when the text is not an accepted literal
pub fn parse_boolean_literal(value: &str) -> Option<bool> {
    match value {
        "True" | "true" => Some(true),
        "False" | "false" => Some(false),
        _ => None,
    }
}

pub(crate) fn required_attribute<'d>(node: Node<'d>, attribute: &str) -> Result<&'d str> {
    node.attribute(attribute)
        .ok_or_else(|| ReportError::MissingAttribute {
            element: node.describe(),
            attribute: attribute.to_string(),
        })
}

/// Boolean attribute; `Ok(None)` when absent
pub(crate) fn boolean_attribute(node: Node<'_>, attribute: &str) -> Result<Option<bool>> {
    let Some(value) = node.attribute(attribute) else {
        return Ok(None);
    };
    parse_boolean_literal(value)
        .map(Some)
        .ok_or_else(|| ReportError::InvalidBooleanLiteral {
            element: node.describe(),
            attribute: attribute.to_string(),
            value: value.to_string(),
        })
}

pub(crate) fn required_boolean_attribute(node: Node<'_>, attribute: &str) -> Result<bool> {
    let value = required_attribute(node, attribute)?;
    parse_boolean_literal(value).ok_or_else(|| ReportError::InvalidBooleanLiteral {
        element: node.describe(),
        attribute: attribute.to_string(),
        value: value.to_string(),
    })
}

/// Integer attribute; `Ok(None)` when absent
pub(crate) fn integer_attribute<T>(node: Node<'_>, attribute: &str) -> Result<Option<T>>
where
    T: FromStr<Err = ParseIntError>,
{
    node.attribute(attribute)
        .map(|value| parse_integer(node, attribute, value))
        .transpose()
}

pub(crate) fn required_integer_attribute<T>(node: Node<'_>, attribute: &str) -> Result<T>
where
    T: FromStr<Err = ParseIntError>,
{
    let value = required_attribute(node, attribute)?;
    parse_integer(node, attribute, value)
}

fn parse_integer<T>(node: Node<'_>, attribute: &str, value: &str) -> Result<T>
where
    T: FromStr<Err = ParseIntError>,
{
    value
        .trim()
        .parse()
        .map_err(|source| ReportError::InvalidInteger {
            element: node.describe(),
            attribute: attribute.to_string(),
            value: value.to_string(),
            source,
        })
}

/// Decimal attribute; `Ok(None)` when absent
pub(crate) fn decimal_attribute(node: Node<'_>, attribute: &str) -> Result<Option<f64>> {
    let Some(value) = node.attribute(attribute) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|source| ReportError::InvalidDecimal {
            element: node.describe(),
            attribute: attribute.to_string(),
            value: value.to_string(),
            source,
        })
}

/// Hex-encoded big number attribute (`0x00ff...`) as bytes; `Ok(None)` when absent
pub(crate) fn hex_attribute(node: Node<'_>, attribute: &str) -> Result<Option<Vec<u8>>> {
    let Some(value) = node.attribute(attribute) else {
        return Ok(None);
    };

    let digits = value.trim();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);

    // Odd digit counts are left-padded, as the value is a number
    let padded;
    let digits = if digits.len() % 2 == 1 {
        padded = format!("0{}", digits);
        padded.as_str()
    } else {
        digits
    };

    hex::decode(digits)
        .map(Some)
        .map_err(|source| ReportError::InvalidHex {
            element: node.describe(),
            attribute: attribute.to_string(),
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    fn doc(xml: &str) -> Document {
        Document::parse_str(xml).unwrap()
    }

    #[test]
    fn test_boolean_literals() {
        assert_eq!(parse_boolean_literal("True"), Some(true));
        assert_eq!(parse_boolean_literal("true"), Some(true));
        assert_eq!(parse_boolean_literal("False"), Some(false));
        assert_eq!(parse_boolean_literal("false"), Some(false));

        for rejected in ["yes", "no", "1", "0", "TRUE", " true", ""] {
            assert_eq!(parse_boolean_literal(rejected), None, "{:?}", rejected);
        }
    }

    #[test]
    fn test_boolean_attribute() {
        let d = doc(r#"<e ok="True" bad="yes"/>"#);
        let node = d.root();

        assert_eq!(boolean_attribute(node, "ok").unwrap(), Some(true));
        assert_eq!(boolean_attribute(node, "absent").unwrap(), None);

        let err = boolean_attribute(node, "bad").unwrap_err();
        assert!(matches!(
            err,
            ReportError::InvalidBooleanLiteral { ref value, .. } if value == "yes"
        ));
    }

    #[test]
    fn test_required_boolean_attribute() {
        let d = doc(r#"<e flag="False"/>"#);
        assert!(!required_boolean_attribute(d.root(), "flag").unwrap());

        let err = required_boolean_attribute(d.root(), "other").unwrap_err();
        assert!(matches!(err, ReportError::MissingAttribute { .. }));
    }

    #[test]
    fn test_integer_attribute() {
        let d = doc(r#"<e port="443" size="big"/>"#);
        let node = d.root();

        assert_eq!(integer_attribute::<u16>(node, "port").unwrap(), Some(443));
        assert_eq!(integer_attribute::<u16>(node, "absent").unwrap(), None);
        assert!(matches!(
            integer_attribute::<u32>(node, "size"),
            Err(ReportError::InvalidInteger { .. })
        ));
        assert_eq!(required_integer_attribute::<u32>(node, "port").unwrap(), 443);
    }

    #[test]
    fn test_decimal_attribute() {
        let d = doc(r#"<e time="2.75" bad="soon"/>"#);
        assert_eq!(decimal_attribute(d.root(), "time").unwrap(), Some(2.75));
        assert!(decimal_attribute(d.root(), "bad").is_err());
    }

    #[test]
    fn test_hex_attribute() {
        let d = doc(r#"<e a="0x00ff10" b="0xabc" c="0xzz" d="1f"/>"#);
        let node = d.root();

        assert_eq!(hex_attribute(node, "a").unwrap(), Some(vec![0x00, 0xff, 0x10]));
        assert_eq!(hex_attribute(node, "b").unwrap(), Some(vec![0x0a, 0xbc]));
        assert_eq!(hex_attribute(node, "d").unwrap(), Some(vec![0x1f]));
        assert_eq!(hex_attribute(node, "absent").unwrap(), None);
        assert!(matches!(
            hex_attribute(node, "c"),
            Err(ReportError::InvalidHex { .. })
        ));
    }

    #[test]
    fn test_missing_attribute_names_element() {
        let d = doc(r#"<document><cipherSuite name="RC4-MD5"/></document>"#);
        let node = d.at("/document/cipherSuite").unwrap();

        let err = required_attribute(node, "keySize").unwrap_err();
        assert_eq!(
            err.element(),
            Some("/document/cipherSuite[@name='RC4-MD5']")
        );
    }
}
