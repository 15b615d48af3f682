use snmp2::Value;
use std::fmt;

/// Скалярное значение ячейки таблицы, отвязанное от буфера SNMP ответа
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    Integer(i64),
    Text(String),
}

impl RawValue {
    /// Строгое приведение к целому. Текст принимается только как
    /// каноническая запись: одни ASCII цифры, без знака и ведущих нулей.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            RawValue::Integer(n) => Some(*n),
            RawValue::Text(s) => {
                let canonical = !s.is_empty()
                    && s.bytes().all(|b| b.is_ascii_digit())
                    && (s == "0" || !s.starts_with('0'));
                if canonical { s.parse::<i64>().ok() } else { None }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RawValue::Text(s) if s.is_empty())
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Integer(n) => write!(f, "{}", n),
            RawValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Integer(n)
    }
}

impl<'a> From<&Value<'a>> for RawValue {
    fn from(value: &Value<'a>) -> Self {
        match value {
            Value::Integer(n) => RawValue::Integer(*n),
            Value::Counter32(n) | Value::Unsigned32(n) | Value::Timeticks(n) => {
                RawValue::Integer(i64::from(*n))
            }
            Value::Counter64(n) => match i64::try_from(*n) {
                Ok(n) => RawValue::Integer(n),
                Err(_) => RawValue::Text(n.to_string()),
            },
            // hrSWRunName приходит как OCTET STRING; в нём бывают не-UTF8 байты
            Value::OctetString(bytes) => {
                RawValue::Text(String::from_utf8_lossy(bytes).trim_end_matches('\0').to_string())
            }
            other => RawValue::Text(format!("{:?}", other)),
        }
    }
}
