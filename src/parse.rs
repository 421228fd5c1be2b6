use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("expected 3 comma-separated fields, got {0}")]
    FieldCount(usize),
    #[error("invalid measurement \"{0}\"")]
    BadValue(String),
}

/// One measurement line, value normalized to milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub key: String,
    pub x: String,
    pub y: f64,
}

/// Parses a `key,x-label,value unit` line into a [`Record`].
///
/// `key` and the x-label are taken verbatim, whitespace included. The third
/// field must start with a number; see [`normalize`] for the unit rule.
pub fn parse_line(line: &str) -> Result<Record, ParseError> {
    let fields = line.split(',').collect::<Vec<_>>();

    let [key, x, y_raw] = fields[..] else {
        return Err(ParseError::FieldCount(fields.len()));
    };

    Ok(Record {
        key: key.to_string(),
        x: x.to_string(),
        y: normalize(y_raw)?,
    })
}

/// Converts a `value unit` measurement to milliseconds.
///
/// The unit check is a substring count over the whole field, highest
/// priority first: exactly one "ms" means milliseconds, else exactly one
/// "us" means microseconds, anything else is read as seconds. The value is
/// the first space-delimited token.
fn normalize(y_raw: &str) -> Result<f64, ParseError> {
    let value: f64 = y_raw
        .split(' ')
        .next()
        .unwrap_or_default()
        .parse()
        .map_err(|_| ParseError::BadValue(y_raw.to_string()))?;

    if y_raw.matches("ms").count() == 1 {
        Ok(value)
    } else if y_raw.matches("us").count() == 1 {
        Ok(value / 1000.0)
    } else {
        Ok(value * 1000.0)
    }
}
