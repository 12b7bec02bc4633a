use crate::and::and;
use crate::cursor::Cursor;
use crate::element::{one_of, parse_if};
use crate::error::{RecombError, RecombResult};
use crate::maybe::maybe;
use crate::parser::Parser;
use crate::reducer::Concat;
use crate::sequence::{Sequence, seq};
use crate::some::one_plus_with;
use tracing::trace;

/// Parser that matches one or more ASCII digits and returns them as written
pub struct Digits;

impl<C: Cursor<Element = char>> Parser<C> for Digits {
    type Output = String;

    fn parse(&self, cursor: &mut C) -> RecombResult<String> {
        one_plus_with(parse_if(|ch: &char| ch.is_ascii_digit()), Concat).parse(cursor)
    }
}

pub fn digits() -> Digits {
    Digits
}

/// Parser that matches a decimal integer with an optional sign
///
/// Values outside the `i64` range do not match.
pub struct Integer;

impl<C: Cursor<Element = char>> Parser<C> for Integer {
    type Output = i64;

    fn parse(&self, cursor: &mut C) -> RecombResult<i64> {
        seq(|s: &mut Sequence<'_, C>| {
            let sign = s.bind(maybe(one_of("+-")))?;
            let digits = s.bind(digits())?;
            let text = match sign {
                Some('-') => format!("-{digits}"),
                _ => digits,
            };
            text.parse::<i64>().map_err(|_| {
                trace!(%text, "integer out of range");
                RecombError::NoMatch
            })
        })
        .parse(cursor)
    }
}

pub fn integer() -> Integer {
    Integer
}

/// A parsed number literal
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(value) => value as f64,
            Number::Float(value) => value,
        }
    }
}

/// Parser for number literals: `-?digits(.digits)?([eE][+-]?digits)?`
///
/// A literal without fraction or exponent is an `Int` when it fits an `i64` and a
/// `Float` otherwise. A dot or exponent marker that is not followed by digits is
/// left unconsumed.
pub struct Decimal;

impl<C: Cursor<Element = char>> Parser<C> for Decimal {
    type Output = Number;

    fn parse(&self, cursor: &mut C) -> RecombResult<Number> {
        seq(|s: &mut Sequence<'_, C>| {
            let mut text = String::new();
            if let Some(minus) = s.bind(maybe('-'))? {
                text.push(minus);
            }
            text.push_str(&s.bind(digits())?);

            let fraction = s.bind(maybe(and('.', digits())))?;
            let exponent = s.bind(maybe(and(and(one_of("eE"), maybe(one_of("+-"))), digits())))?;

            if fraction.is_none() && exponent.is_none() {
                match text.parse::<i64>() {
                    Ok(value) => return Ok(Number::Int(value)),
                    Err(_) => trace!(%text, "integer literal out of range, reading it as a float"),
                }
            }
            if let Some((_, digits)) = fraction {
                text.push('.');
                text.push_str(&digits);
            }
            if let Some(((_, sign), digits)) = exponent {
                text.push('e');
                text.extend(sign);
                text.push_str(&digits);
            }
            text.parse::<f64>().map(Number::Float).map_err(|_| RecombError::NoMatch)
        })
        .parse(cursor)
    }
}

pub fn number() -> Decimal {
    Decimal
}
