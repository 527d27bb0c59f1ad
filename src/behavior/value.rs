use glam::Vec2;
use crate::map::{Gid, Properties};
use super::{BehaviorKind, TypingError};

/// Typed access to the properties of one tile.
/// Errors name the tile and the property that failed.
pub(crate) struct PropertyReader<'a> {
    pub gid: Gid,
    pub local_id: u32,
    pub kind: BehaviorKind,
    pub properties: &'a Properties,
}

impl<'a> PropertyReader<'a> {

    /// Property value, trimmed. Blank values count as absent.
    pub fn optional(&self, parameter: &'static str) -> Option<&'a str> {
        self.properties
            .get(parameter)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    pub fn required(&self, parameter: &'static str) -> Result<&'a str, TypingError> {
        self.optional(parameter).ok_or(TypingError::MissingParameterError {
            gid: self.gid,
            local_id: self.local_id,
            behavior: self.kind.type_name(),
            parameter,
        })
    }

    pub fn float(&self, parameter: &'static str) -> Result<f32, TypingError> {
        let value = self.required(parameter)?;
        parse_float(value).ok_or_else(|| self.parse_error(parameter, value, "a decimal number"))
    }

    pub fn coordinate(&self, parameter: &'static str) -> Result<Vec2, TypingError> {
        let value = self.required(parameter)?;
        parse_coordinate(value).ok_or_else(|| self.parse_error(parameter, value, "a coordinate like '(x, y)'"))
    }

    /// Optional enum property, falling back to the default when absent.
    pub fn enumeration<T: Default>(
        &self,
        parameter: &'static str,
        parse: fn(&str) -> Option<T>,
        expected: &'static str,
    ) -> Result<T, TypingError> {
        match self.optional(parameter) {
            Some(value) => parse(value).ok_or_else(|| self.parse_error(parameter, value, expected)),
            None => Ok(T::default()),
        }
    }

    fn parse_error(&self, parameter: &'static str, value: &str, expected: &'static str) -> TypingError {
        TypingError::ParseError {
            gid: self.gid,
            local_id: self.local_id,
            parameter,
            value: String::from(value),
            expected,
        }
    }
}

/// Parses a finite decimal number. The whole text must match.
pub fn parse_float(text: &str) -> Option<f32> {
    text.trim()
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parses "(x, y)" or "x, y" into a vector. Exactly two components are allowed.
pub fn parse_coordinate(text: &str) -> Option<Vec2> {
    let text = text.trim();
    let inner = match (text.strip_prefix('('), text.ends_with(')')) {
        (Some(rest), true) => rest.strip_suffix(')')?,
        (None, false) => text,
        _ => return None,
    };
    let mut components = inner.split(',');
    let x = parse_float(components.next()?)?;
    let y = parse_float(components.next()?)?;
    if components.next().is_some() {
        return None;
    }
    Some(Vec2::new(x, y))
}

#[cfg(test)]
mod test {
    use glam::Vec2;
    use super::{parse_coordinate, parse_float};

    #[test]
    fn floats() {
        assert_eq!(Some(-850.0), parse_float("-850"));
        assert_eq!(Some(12.5), parse_float(" 12.5 "));
        assert_eq!(Some(1000.0), parse_float("1e3"));
        assert_eq!(None, parse_float("12px"));
        assert_eq!(None, parse_float("12,5"));
        assert_eq!(None, parse_float("1 2"));
        assert_eq!(None, parse_float(""));
        assert_eq!(None, parse_float("inf"));
        assert_eq!(None, parse_float("NaN"));
    }

    #[test]
    fn coordinates() {
        assert_eq!(Some(Vec2::new(5.0, 10.0)), parse_coordinate("(5, 10)"));
        assert_eq!(Some(Vec2::new(-1.5, 0.0)), parse_coordinate(" ( -1.5 ,0 ) "));
        assert_eq!(Some(Vec2::new(3.0, 4.0)), parse_coordinate("3,4"));
        assert_eq!(None, parse_coordinate("(5, 10"));
        assert_eq!(None, parse_coordinate("5, 10)"));
        assert_eq!(None, parse_coordinate("(5)"));
        assert_eq!(None, parse_coordinate("(5, 10, 15)"));
        assert_eq!(None, parse_coordinate("(5, ten)"));
        assert_eq!(None, parse_coordinate("(5 10)"));
        assert_eq!(None, parse_coordinate("()"));
    }
}
