//! Human-readable rendering of uncertain values.
//!
//! Values render as `<value> ± <error> (<relative error>% error)`, with `∞`
//! standing in for the relative error of a zero value.

use crate::NoisedValue;
use std::fmt;

pub const PLUS_MINUS: char = '\u{00B1}';
pub const INFINITY: char = '\u{221E}';

/// Configuration for rendering a [`NoisedValue`].
///
/// # Example
/// ```rust
/// use noised_rs::NoisedValue;
/// use noised_rs::format::FormatOptions;
///
/// let x = NoisedValue::with_error(2.0, 0.1).unwrap();
/// let options = FormatOptions {
///     relative_precision: 1,
///     value_precision: Some(2),
/// };
/// assert_eq!(x.display_with(&options).to_string(), "2.00 ± 0.10 (5.0% error)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Decimal places of the relative error percentage
    pub relative_precision: usize,
    /// Decimal places of value and error; `None` prints them in full
    pub value_precision: Option<usize>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            relative_precision: 3,
            value_precision: None,
        }
    }
}

/// A [`NoisedValue`] paired with the options used to render it.
#[derive(Debug, Clone)]
pub struct Formatted<'a> {
    value: &'a NoisedValue,
    options: &'a FormatOptions,
}

impl NoisedValue {
    /// Renders the value with explicit [`FormatOptions`].
    #[must_use]
    pub fn display_with<'a>(&'a self, options: &'a FormatOptions) -> Formatted<'a> {
        Formatted {
            value: self,
            options,
        }
    }
}

impl fmt::Display for Formatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_noised(f, self.value, self.options)
    }
}

/// Renders with the default options. A precision on the formatter, as in
/// `{:.1}`, sets the decimal places of the relative error.
impl fmt::Display for NoisedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut options = FormatOptions::default();
        if let Some(precision) = f.precision() {
            options.relative_precision = precision;
        }
        write_noised(f, self, &options)
    }
}

fn write_noised(f: &mut fmt::Formatter<'_>, x: &NoisedValue, options: &FormatOptions) -> fmt::Result {
    match options.value_precision {
        Some(p) => write!(f, "{:.p$} {PLUS_MINUS} {:.p$}", x.value(), x.error())?,
        None => write!(f, "{} {PLUS_MINUS} {}", x.value(), x.error())?,
    }

    match x.relative_error() {
        Ok(relative) => write!(
            f,
            " ({:.prec$}% error)",
            relative * 100.0,
            prec = options.relative_precision
        ),
        Err(_) => write!(f, " ({INFINITY}% error)"),
    }
}
