//! Field classifications and screen formats.

use std::fmt;

/// Classification of an output field.
///
/// Controls whether a field's value is written directly by the owning
/// output driver or derived from an expression during the evaluation
/// pass. Only [`FieldType::Custom`] fields carry an expression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// A user-selected residual.
    Residual,
    /// A residual generated automatically by the solver.
    AutoResidual,
    /// A user-selected coefficient.
    Coefficient,
    /// A coefficient generated automatically by the solver.
    AutoCoefficient,
    /// A field derived from an expression over other fields.
    Custom,
    /// Anything else.
    #[default]
    Default,
}

impl FieldType {
    /// All classifications, in declaration order.
    pub const ALL: [FieldType; 6] = [
        Self::Residual,
        Self::AutoResidual,
        Self::Coefficient,
        Self::AutoCoefficient,
        Self::Custom,
        Self::Default,
    ];

    /// Returns `true` for [`FieldType::Custom`].
    pub fn is_custom(self) -> bool {
        self == Self::Custom
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Residual => "RESIDUAL",
            Self::AutoResidual => "AUTO_RESIDUAL",
            Self::Coefficient => "COEFFICIENT",
            Self::AutoCoefficient => "AUTO_COEFFICIENT",
            Self::Custom => "CUSTOM",
            Self::Default => "DEFAULT",
        };
        f.write_str(s)
    }
}

/// How a history value is printed to screen.
///
/// Purely presentational; never affects the stored value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScreenFormat {
    /// Integer, e.g. `34`.
    Integer,
    /// Fixed precision, e.g. `344.54`.
    #[default]
    Fixed,
    /// Scientific notation, e.g. `3.4454e2`.
    Scientific,
    /// Fixed precision with a percent sign, e.g. `99.52%`.
    Percent,
}

impl fmt::Display for ScreenFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Integer => "INTEGER",
            Self::Fixed => "FIXED",
            Self::Scientific => "SCIENTIFIC",
            Self::Percent => "PERCENT",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_custom_is_custom() {
        let customs: Vec<_> = FieldType::ALL.iter().filter(|t| t.is_custom()).collect();
        assert_eq!(customs, vec![&FieldType::Custom]);
    }

    #[test]
    fn defaults() {
        assert_eq!(FieldType::default(), FieldType::Default);
        assert_eq!(ScreenFormat::default(), ScreenFormat::Fixed);
    }

    #[test]
    fn display_uses_upper_snake_case() {
        assert_eq!(FieldType::AutoCoefficient.to_string(), "AUTO_COEFFICIENT");
        assert_eq!(ScreenFormat::Scientific.to_string(), "SCIENTIFIC");
    }
}
