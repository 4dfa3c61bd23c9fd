//! Airtable formula rendering for `filterByFormula`.
//!
//! Values are escaped instead of interpolated so a caller-supplied value can
//! never change the shape of the formula.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FormulaValue {
    Number(i64),
    Text(String),
    Bool(bool),
}

impl From<u32> for FormulaValue {
    fn from(value: u32) -> Self {
        FormulaValue::Number(i64::from(value))
    }
}

impl From<i64> for FormulaValue {
    fn from(value: i64) -> Self {
        FormulaValue::Number(value)
    }
}

impl From<&str> for FormulaValue {
    fn from(value: &str) -> Self {
        FormulaValue::Text(value.to_string())
    }
}

impl From<bool> for FormulaValue {
    fn from(value: bool) -> Self {
        FormulaValue::Bool(value)
    }
}

impl fmt::Display for FormulaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaValue::Number(n) => write!(f, "{}", n),
            FormulaValue::Bool(true) => f.write_str("TRUE()"),
            FormulaValue::Bool(false) => f.write_str("FALSE()"),
            FormulaValue::Text(s) => {
                f.write_str("\"")?;
                for c in s.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        _ => write!(f, "{}", c)?,
                    }
                }
                f.write_str("\"")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Formula {
    FieldEquals { field: String, value: FormulaValue },
}

impl Formula {
    pub fn field_equals(field: impl Into<String>, value: impl Into<FormulaValue>) -> Self {
        Formula::FieldEquals {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::FieldEquals { field, value } => {
                write_field(f, field)?;
                write!(f, "={}", value)
            }
        }
    }
}

// 簡單欄位名直接輸出，其餘用 {} 包起來
fn write_field(f: &mut fmt::Formatter<'_>, field: &str) -> fmt::Result {
    let is_bare = !field.is_empty()
        && field
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');

    if is_bare {
        return f.write_str(field);
    }

    f.write_str("{")?;
    for c in field.chars() {
        if c == '}' {
            f.write_str("\\}")?;
        } else {
            write!(f, "{}", c)?;
        }
    }
    f.write_str("}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hole_formula() {
        assert_eq!(Formula::field_equals("Hole", 5u32).to_string(), "Hole=5");
        assert_eq!(Formula::field_equals("Hole", 18u32).to_string(), "Hole=18");
    }

    #[test]
    fn test_text_is_quoted_and_escaped() {
        let formula = Formula::field_equals("Player", r#"Tom "The Hammer" \ Smith"#);
        assert_eq!(
            formula.to_string(),
            r#"Player="Tom \"The Hammer\" \\ Smith""#
        );
    }

    #[test]
    fn test_injection_attempt_stays_a_string() {
        let formula = Formula::field_equals("Hole", "5, TRUE())");
        assert_eq!(formula.to_string(), r#"Hole="5, TRUE())""#);
    }

    #[test]
    fn test_field_with_spaces_is_braced() {
        assert_eq!(
            Formula::field_equals("Player Name", "Ann").to_string(),
            r#"{Player Name}="Ann""#
        );
        assert_eq!(
            Formula::field_equals("odd}name", true).to_string(),
            r"{odd\}name}=TRUE()"
        );
    }
}
