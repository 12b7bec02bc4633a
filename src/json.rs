//! A JSON grammar built from the combinators
//!
//! Serves both as a worked example of a recursive [`RuleSet`] and as a small,
//! usable parser. Whitespace follows every token; leading whitespace is skipped
//! once by the `document` rule.

use crate::between::between;
use crate::cursors::StrCursor;
use crate::element::{end, tag};
use crate::error::{Diagnostic, GrammarError, RecombError};
use crate::grammar::{Grammar, RuleSet};
use crate::map::map;
use crate::maybe::maybe;
use crate::or::or;
use crate::separated_list::separated_list;
use crate::sequence::{Sequence, seq};
use crate::text::{Number, lexeme, number, quoted, skip_whitespace};
use std::borrow::Cow;
use tracing::debug;

/// A JSON value
///
/// Objects keep their members in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum Json {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<Json>),
    Object(Vec<(String, Json)>),
}

impl Json {
    /// The value of the last member called `key`, if this is an object
    pub fn get(&self, key: &str) -> Option<&Json> {
        match self {
            Json::Object(members) => members
                .iter()
                .rev()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }
}

impl From<Number> for Json {
    fn from(number: Number) -> Self {
        match number {
            Number::Int(value) => Json::Int(value),
            Number::Float(value) => Json::Float(value),
        }
    }
}

pub type JsonRules<'c> = RuleSet<'c, StrCursor<'c>, Json>;

/// The JSON rule set, open for inheritance
///
/// `document` is the entry rule; `value` parses one value with its trailing
/// whitespace.
pub fn rules<'c>() -> JsonRules<'c> {
    JsonRules::new()
        .rule("document", |g| {
            let value = g.rule("value");
            seq(move |s: &mut Sequence<'_, StrCursor<'c>>| {
                s.skip(skip_whitespace())?;
                let document = s.bind(&value)?;
                s.skip(end())?;
                Ok(document)
            })
        })
        .rule("value", |g| {
            crate::or![
                g.rule("null"),
                g.rule("boolean"),
                g.rule("number"),
                g.rule("string"),
                g.rule("array"),
                g.rule("object"),
            ]
        })
        .rule("null", |_| map(lexeme(tag("null")), |_: Cow<'static, str>| Json::Null))
        .rule("boolean", |_| {
            or(
                map(lexeme(tag("true")), |_: Cow<'static, str>| Json::Bool(true)),
                map(lexeme(tag("false")), |_: Cow<'static, str>| Json::Bool(false)),
            )
        })
        .rule("number", |_| map(lexeme(number()), Json::from))
        .rule("string", |_| map(lexeme(quoted()), Json::Str))
        .rule("array", |g| {
            let items = separated_list(g.rule("value"), lexeme(','));
            map(
                between(lexeme('['), maybe(items), lexeme(']')),
                |items: Option<Vec<Json>>| Json::Array(items.unwrap_or_default()),
            )
        })
        .rule("object", |g| {
            let value = g.rule("value");
            let member = seq(move |s: &mut Sequence<'_, StrCursor<'c>>| {
                let key = s.bind(lexeme(quoted()))?;
                s.skip(lexeme(':'))?;
                let value = s.bind(&value)?;
                Ok((key, value))
            });
            map(
                between(lexeme('{'), maybe(separated_list(member, lexeme(','))), lexeme('}')),
                |members: Option<Vec<(String, Json)>>| Json::Object(members.unwrap_or_default()),
            )
        })
}

pub fn grammar<'c>() -> Result<Grammar<'c, StrCursor<'c>, Json>, GrammarError> {
    rules().compile()
}

#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    #[error("{diagnostic} (line {line}, column {column})")]
    Syntax {
        diagnostic: Diagnostic<char>,
        line: usize,
        column: usize,
    },
    #[error(transparent)]
    Grammar(#[from] GrammarError),
}

/// Parse a complete JSON document
pub fn parse(text: &str) -> Result<Json, JsonError> {
    let grammar = grammar()?;
    let mut cursor = StrCursor::new(text);
    match grammar.parse("document", &mut cursor) {
        Ok(document) => Ok(document),
        Err(RecombError::NoMatch) => {
            let diagnostic = Diagnostic::furthest(&mut cursor);
            let (line, column) = cursor.line_col(diagnostic.at);
            debug!(%diagnostic, "rejected document");
            Err(JsonError::Syntax {
                diagnostic,
                line,
                column,
            })
        }
        Err(RecombError::Grammar(error)) => Err(error.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use pretty_assertions::assert_eq;

    fn document(text: &str) -> Json {
        parse(text).unwrap()
    }

    #[test]
    fn test_integer() {
        assert_eq!(document("42"), Json::Int(42));
    }

    #[test]
    fn test_float_with_exponent() {
        assert_eq!(document("-3.5e2"), Json::Float(-350.0));
    }

    #[test]
    fn test_escaped_string() {
        assert_eq!(document(r#""ab\ncd""#), Json::Str("ab\ncd".into()));
    }

    #[test]
    fn test_array() {
        assert_eq!(
            document("[1,2,3]"),
            Json::Array(vec![Json::Int(1), Json::Int(2), Json::Int(3)])
        );
    }

    #[test]
    fn test_object() {
        let object = document(r#"{"a":1,"b":2}"#);

        assert_eq!(
            object,
            Json::Object(vec![("a".into(), Json::Int(1)), ("b".into(), Json::Int(2))])
        );
        assert_eq!(object.get("b"), Some(&Json::Int(2)));
        assert_eq!(object.get("c"), None);
    }

    #[test]
    fn test_keywords_and_empty_containers() {
        assert_eq!(document("null"), Json::Null);
        assert_eq!(document("true"), Json::Bool(true));
        assert_eq!(document("false"), Json::Bool(false));
        assert_eq!(document("[]"), Json::Array(vec![]));
        assert_eq!(document("{}"), Json::Object(vec![]));
    }

    #[test]
    fn test_nested_with_whitespace() {
        let text = r#"
            {
                "list" : [ true , null , "x" ] ,
                "inner" : { "n" : -1.5 }
            }
        "#;

        assert_eq!(
            document(text),
            Json::Object(vec![
                (
                    "list".into(),
                    Json::Array(vec![Json::Bool(true), Json::Null, Json::Str("x".into())])
                ),
                (
                    "inner".into(),
                    Json::Object(vec![("n".into(), Json::Float(-1.5))])
                ),
            ])
        );
    }

    #[test]
    fn test_unterminated_array_points_at_the_end() {
        let grammar = grammar().unwrap();
        let mut cursor = StrCursor::new("[1,2,");

        assert_eq!(grammar.parse("document", &mut cursor), Err(RecombError::NoMatch));
        assert_eq!(cursor.snapshot().offset(), 0);

        let diagnostic = Diagnostic::furthest(&mut cursor);
        assert_eq!(diagnostic.at.offset(), 5);
        assert_eq!(diagnostic.found, None);
    }

    #[test]
    fn test_syntax_error_message() {
        let error = parse("[1,2,").unwrap_err();

        assert_eq!(
            error.to_string(),
            "unexpected end of input at offset 5 (line 1, column 6)"
        );
    }

    #[test]
    fn test_trailing_garbage_is_rejected() {
        let error = parse("1 2").unwrap_err();

        assert!(matches!(error, JsonError::Syntax { line: 1, .. }));
    }

    #[test]
    fn test_rules_can_be_extended() {
        let lenient = RuleSet::inheriting(&[&rules()]).rule("null", |_| {
            or(
                map(lexeme(tag("null")), |_: Cow<'static, str>| Json::Null),
                map(lexeme(tag("nil")), |_: Cow<'static, str>| Json::Null),
            )
        });
        let grammar = lenient.compile().unwrap();
        let mut cursor = StrCursor::new("[nil, null]");

        assert_eq!(
            grammar.parse("document", &mut cursor),
            Ok(Json::Array(vec![Json::Null, Json::Null]))
        );
    }
}
