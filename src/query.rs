//! Lookup queries
//!
//! A query is one of three shapes: a code, a name, or a postal code. Bare
//! scalars (integers and strings) always mean a code. Code and zip values go
//! through a narrow integer coercion; anything that does not coerce simply
//! matches nothing.

use serde::Deserialize;

/// Integer or string form of a code / postal code
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Text(String),
}

impl Scalar {
    /// Coerce to a prefecture code. Strings must be ASCII digits after
    /// trimming; leading zeros are allowed ("01" is 1).
    pub fn to_code(&self) -> Option<u8> {
        match self {
            Scalar::Int(n) => u8::try_from(*n).ok(),
            Scalar::Text(s) => parse_digits(s.trim()).and_then(|n| u8::try_from(n).ok()),
        }
    }

    /// Coerce to a postal code. Accepts the bare digit form ("1000001") and
    /// the hyphenated postal form ("100-0001").
    pub fn to_zip(&self) -> Option<u32> {
        match self {
            Scalar::Int(n) => u32::try_from(*n).ok(),
            Scalar::Text(s) => {
                let s = s.trim();
                match s.split_once('-') {
                    Some((head, tail)) if head.len() == 3 && tail.len() == 4 => {
                        let head = parse_digits(head)?;
                        let tail = parse_digits(tail)?;
                        u32::try_from(head * 10_000 + tail).ok()
                    }
                    Some(_) => None,
                    None => parse_digits(s).and_then(|n| u32::try_from(n).ok()),
                }
            }
        }
    }
}

/// Parse a non-empty run of ASCII digits. Signs, spaces, and other
/// characters are rejected rather than partially parsed.
fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

macro_rules! scalar_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(n: $t) -> Self {
                    Scalar::Int(i64::from(n))
                }
            }

            impl From<$t> for Query {
                fn from(n: $t) -> Self {
                    Query::Code(Scalar::from(n))
                }
            }
        )*
    };
}

scalar_from_int!(u8, u16, u32, i8, i16, i32, i64);

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<&String> for Scalar {
    fn from(s: &String) -> Self {
        Scalar::Text(s.clone())
    }
}

/// A prefecture lookup
///
/// Deserializes from the keyed-object form (`{"code": 1}`, `{"name": "東京"}`,
/// `{"zip": "1000001"}`) or from a bare scalar, which is read as a code.
/// Objects carrying several keys resolve code first, then name, then zip;
/// unrelated keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "QueryInput")]
pub enum Query {
    Code(Scalar),
    Name(String),
    Zip(Scalar),
}

impl Query {
    pub fn code(value: impl Into<Scalar>) -> Self {
        Query::Code(value.into())
    }

    pub fn name(value: impl Into<String>) -> Self {
        Query::Name(value.into())
    }

    pub fn zip(value: impl Into<Scalar>) -> Self {
        Query::Zip(value.into())
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Query::Code(Scalar::from(s))
    }
}

impl From<String> for Query {
    fn from(s: String) -> Self {
        Query::Code(Scalar::from(s))
    }
}

impl From<&String> for Query {
    fn from(s: &String) -> Self {
        Query::Code(Scalar::from(s))
    }
}

impl From<&Query> for Query {
    fn from(query: &Query) -> Self {
        query.clone()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum QueryInput {
    Keyed(KeyedQuery),
    Bare(Scalar),
}

/// Object form; when several keys are present code wins, then name, then zip
#[derive(Deserialize)]
struct KeyedQuery {
    #[serde(default)]
    code: Option<Scalar>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    zip: Option<Scalar>,
}

impl TryFrom<QueryInput> for Query {
    type Error = String;

    fn try_from(input: QueryInput) -> Result<Self, Self::Error> {
        match input {
            QueryInput::Bare(scalar) => Ok(Query::Code(scalar)),
            QueryInput::Keyed(KeyedQuery { code: Some(scalar), .. }) => Ok(Query::Code(scalar)),
            QueryInput::Keyed(KeyedQuery { name: Some(name), .. }) => Ok(Query::Name(name)),
            QueryInput::Keyed(KeyedQuery { zip: Some(scalar), .. }) => Ok(Query::Zip(scalar)),
            QueryInput::Keyed(_) => Err("query needs a code, name, or zip".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_coercion() {
        assert_eq!(Scalar::from(1).to_code(), Some(1));
        assert_eq!(Scalar::from("1").to_code(), Some(1));
        assert_eq!(Scalar::from("01").to_code(), Some(1));
        assert_eq!(Scalar::from(" 13 ").to_code(), Some(13));
        assert_eq!(Scalar::from("99").to_code(), Some(99));
        assert_eq!(Scalar::from(-1).to_code(), None);
        assert_eq!(Scalar::from(300).to_code(), None);
        assert_eq!(Scalar::from("1a").to_code(), None);
        assert_eq!(Scalar::from("+1").to_code(), None);
        assert_eq!(Scalar::from("").to_code(), None);
    }

    #[test]
    fn test_zip_coercion() {
        assert_eq!(Scalar::from("1000001").to_zip(), Some(1000001));
        assert_eq!(Scalar::from("100-0001").to_zip(), Some(1000001));
        assert_eq!(Scalar::from("001-0000").to_zip(), Some(10000));
        assert_eq!(Scalar::from("0010000").to_zip(), Some(10000));
        assert_eq!(Scalar::from(1000001).to_zip(), Some(1000001));
        assert_eq!(Scalar::from("10-00001").to_zip(), None);
        assert_eq!(Scalar::from("100-000a").to_zip(), None);
        assert_eq!(Scalar::from("zip").to_zip(), None);
        assert_eq!(Scalar::from(-5).to_zip(), None);
    }

    #[test]
    fn test_bare_values_are_codes() {
        assert_eq!(Query::from(1), Query::Code(Scalar::Int(1)));
        assert_eq!(Query::from("北海道"), Query::Code(Scalar::Text("北海道".into())));
    }

    #[test]
    fn test_deserialize_keyed_forms() {
        let q: Query = serde_json::from_str(r#"{"code": 1}"#).unwrap();
        assert_eq!(q, Query::code(1));

        let q: Query = serde_json::from_str(r#"{"code": "01"}"#).unwrap();
        assert_eq!(q, Query::code("01"));

        let q: Query = serde_json::from_str(r#"{"name": "東京"}"#).unwrap();
        assert_eq!(q, Query::name("東京"));

        let q: Query = serde_json::from_str(r#"{"zip": "9999999"}"#).unwrap();
        assert_eq!(q, Query::zip("9999999"));
    }

    #[test]
    fn test_deserialize_bare_scalar() {
        let q: Query = serde_json::from_str("13").unwrap();
        assert_eq!(q, Query::code(13));

        let q: Query = serde_json::from_str(r#""13""#).unwrap();
        assert_eq!(q, Query::code("13"));
    }

    #[test]
    fn test_deserialize_several_keys_in_dispatch_order() {
        let q: Query = serde_json::from_str(r#"{"code": 1, "name": "東京"}"#).unwrap();
        assert_eq!(q, Query::code(1));

        let q: Query = serde_json::from_str(r#"{"name": "宮", "zip": "1000001"}"#).unwrap();
        assert_eq!(q, Query::name("宮"));

        let q: Query = serde_json::from_str(r#"{"zip": 1000001, "code": null}"#).unwrap();
        assert_eq!(q, Query::zip(1000001));

        let q: Query = serde_json::from_str(r#"{"name": "hokkaido", "city": "札幌"}"#).unwrap();
        assert_eq!(q, Query::name("hokkaido"));
    }

    #[test]
    fn test_deserialize_unknown_key_fails() {
        assert!(serde_json::from_str::<Query>(r#"{"city": "札幌"}"#).is_err());
    }
}
