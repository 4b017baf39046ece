use std::fmt;

/// A numeric parameter value with an optional unit.
///
/// A bare `f64` converts into a `Quantity` without a unit; the setter it is
/// passed to then supplies its default unit. An explicit unit always wins.
///
/// ```
/// use bdsim_beam::Quantity;
///
/// assert_eq!(Quantity::from(2.0).render(Some("um")), "2.0*um");
/// assert_eq!(Quantity::new(6.5, "TeV").render(Some("GeV")), "6.5*TeV");
/// assert_eq!(Quantity::from(0.001).render(None), "0.001");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: Option<String>,
}

impl Quantity {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: Some(unit.into()),
        }
    }

    pub fn unitless(value: f64) -> Self {
        Self { value, unit: None }
    }

    /// Renders as `value*unit`, falling back to `default_unit`, or as the
    /// bare number when neither is present.
    pub fn render(&self, default_unit: Option<&str>) -> String {
        let number = format_number(self.value);
        match self.unit.as_deref().or(default_unit) {
            Some(unit) => format!("{number}*{unit}"),
            None => number,
        }
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Self::unitless(value)
    }
}

impl From<(f64, &str)> for Quantity {
    fn from((value, unit): (f64, &str)) -> Self {
        Self::new(value, unit)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

/// Shortest round-trip decimal form that keeps a fractional part on
/// integral values (`1.0`, not `1`).
pub(crate) fn format_number(value: f64) -> String {
    format!("{value:?}")
}
