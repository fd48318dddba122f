use crate::error::ParameterError;
use crate::params::Family;

use super::ParamValue;

/// Display attributes carried alongside the curve geometry.
///
/// Colors are opaque strings (`"b"`, `"blue"`, `"#1f77b4"`) handed to the
/// shell untouched. None of these fields affect sampling.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub line_color: String,
    pub point_color: String,
    pub point_size: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            line_color: "b".to_owned(),
            point_color: "r".to_owned(),
            point_size: 8.0,
        }
    }
}

impl Style {
    /// Field names accepted by [`Style::set`].
    pub const FIELDS: [&'static str; 4] = ["line_color", "color", "point_color", "point_size"];

    /// Returns the default style for a family.
    #[must_use]
    pub fn for_family(family: Family) -> Self {
        match family {
            Family::Lemniscate => Self {
                line_color: "blue".to_owned(),
                ..Self::default()
            },
            _ => Self::default(),
        }
    }

    /// Returns whether `field` names a display attribute.
    #[must_use]
    pub fn handles(field: &str) -> bool {
        Self::FIELDS.contains(&field)
    }

    /// Stores a display attribute. `color` is an alias for `line_color`.
    ///
    /// # Errors
    ///
    /// Returns an error if a color is not text, the point size is not a
    /// finite number, or the field is not a display attribute.
    pub fn set(&mut self, field: &str, value: &ParamValue) -> Result<(), ParameterError> {
        match field {
            "line_color" | "color" => self.line_color = value.as_text("line_color")?.to_owned(),
            "point_color" => self.point_color = value.as_text("point_color")?.to_owned(),
            "point_size" => self.point_size = value.as_number("point_size")?,
            _ => {
                return Err(ParameterError::UnknownField {
                    family: "style",
                    field: field.to_owned(),
                })
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn colors_are_opaque() {
        let mut s = Style::default();
        s.set("color", &ParamValue::from("#12ab34")).unwrap();
        s.set("point_color", &ParamValue::from("g")).unwrap();
        assert_eq!(s.line_color, "#12ab34");
        assert_eq!(s.point_color, "g");
    }

    #[test]
    fn point_size_is_not_range_checked() {
        let mut s = Style::default();
        s.set("point_size", &ParamValue::from(0.0)).unwrap();
        assert_abs_diff_eq!(s.point_size, 0.0);
        assert!(s.set("point_size", &ParamValue::from("big")).is_err());
        assert_abs_diff_eq!(s.point_size, 0.0);
    }

    #[test]
    fn numeric_color_is_rejected() {
        let mut s = Style::default();
        assert!(s.set("line_color", &ParamValue::from(3.0)).is_err());
        assert_eq!(s.line_color, "b");
    }

    #[test]
    fn lemniscate_defaults_to_blue() {
        assert_eq!(Style::for_family(Family::Lemniscate).line_color, "blue");
        assert!(Style::handles("point_size"));
        assert!(!Style::handles("radius"));
    }
}
