//! Elementwise unary functions on numeric columns.
//! The derived column is named after the function, e.g. `sqrt(price)`.

use crate::{
    columnar::Column,
    datatypes::{Double, NumericValue},
    error::Error,
};

use super::map_present;

macro_rules! unary_transform {
    ($(#[$meta:meta])* $name:ident, $function:expr) => {
        $(#[$meta])*
        pub fn $name(&self) -> Column<Double> {
            self.transform(stringify!($name), $function)
        }
    };
}

impl<T: NumericValue> Column<T> {
    fn transform<F>(&self, function_name: &str, function: F) -> Column<Double>
    where
        F: Fn(f64) -> f64,
    {
        map_present(self, format!("{function_name}({})", self.name()), function)
    }

    unary_transform!(
        /// Square root of every value.
        sqrt,
        f64::sqrt
    );
    unary_transform!(
        /// Natural logarithm of every value.
        ln,
        f64::ln
    );
    unary_transform!(
        /// Base 10 logarithm of every value.
        log10,
        f64::log10
    );
    unary_transform!(
        /// `ln(1 + x)` of every value `x`, accurate for values close to zero.
        log1p,
        f64::ln_1p
    );
    unary_transform!(
        /// Sine of every value, in radians.
        sin,
        f64::sin
    );
    unary_transform!(
        /// Cosine of every value, in radians.
        cos,
        f64::cos
    );
    unary_transform!(
        /// Tangent of every value, in radians.
        tan,
        f64::tan
    );
    unary_transform!(
        /// Hyperbolic tangent of every value.
        tanh,
        f64::tanh
    );
    unary_transform!(
        /// Absolute value of every value.
        abs,
        f64::abs
    );
    unary_transform!(
        /// Every value with its sign flipped.
        negate,
        |value: f64| -value
    );

    /// Round every value to `decimal_places` digits after the decimal point.
    /// Halfway cases are rounded away from zero.
    /// Values that already carry fewer digits than requested,
    /// including every value when `decimal_places` exceeds the precision of [f64], are kept as they are.
    ///
    /// # Errors
    /// Returns [Error::InvalidArgument] if `decimal_places` is negative.
    pub fn round(&self, decimal_places: i32) -> Result<Column<Double>, Error> {
        if decimal_places < 0 {
            return Err(Error::InvalidArgument(format!(
                "cannot round to {decimal_places} decimal places"
            )));
        }

        let factor = 10f64.powi(decimal_places);
        Ok(self.transform("round", |value| {
            let scaled = value * factor;
            if !factor.is_finite() || !scaled.is_finite() {
                return value;
            }

            scaled.round() / factor
        }))
    }
}

#[cfg(test)]
mod test {
    use crate::{columnar::Column, datatypes::Double, error::Error};
    use test_log::test;

    #[test]
    fn names_and_values() {
        let column = Column::from_values("x", vec![4i32, 100, 1]);

        let roots = column.sqrt();
        assert_eq!(roots.name(), "sqrt(x)");
        assert_eq!(roots.get(0), Ok(&Double::new(2.0)));

        assert_eq!(column.log10().get(1), Ok(&Double::new(2.0)));
        assert_eq!(column.ln().get(2), Ok(&Double::new(0.0)));
        assert_eq!(column.log1p().name(), "log1p(x)");
        assert_eq!(column.negate().get(0), Ok(&Double::new(-4.0)));
        assert_eq!(column.negate().name(), "negate(x)");
    }

    #[test]
    fn trigonometry() {
        let column = Column::from_values("angle", vec![Double::new(0.0)]);
        assert_eq!(column.sin().get(0), Ok(&Double::new(0.0)));
        assert_eq!(column.cos().get(0), Ok(&Double::new(1.0)));
        assert_eq!(column.tan().get(0), Ok(&Double::new(0.0)));
        assert_eq!(column.tanh().get(0), Ok(&Double::new(0.0)));
    }

    #[test]
    fn missing_values_are_preserved() {
        let column = Column::from_options("x", vec![Some(-3i16), None]);
        let absolute = column.abs();
        assert_eq!(absolute.get(0), Ok(&Double::new(3.0)));
        assert_eq!(absolute.is_absent(1), Ok(true));
        assert_eq!(column.cos().is_absent(1), Ok(true));
    }

    #[test]
    fn round() {
        let column = Column::from_values(
            "x",
            vec![Double::new(1.2345), Double::new(-2.5), Double::NAN],
        );

        let rounded = column.round(2).unwrap();
        assert_eq!(rounded.name(), "round(x)");
        assert_eq!(rounded.get(0), Ok(&Double::new(1.23)));

        let whole = column.round(0).unwrap();
        assert_eq!(whole.get(1), Ok(&Double::new(-3.0)));
        assert_eq!(whole.is_absent(2), Ok(true));

        assert!(matches!(column.round(-1), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn round_beyond_double_precision() {
        let column = Column::from_values("x", vec![Double::new(1.5), Double::new(1e300)]);

        let rounded = column.round(400).unwrap();
        assert_eq!(rounded.values(), column.values());
        assert_eq!(rounded.count_missing(), 0);

        let rounded = column.round(10).unwrap();
        assert_eq!(rounded.get(0), Ok(&Double::new(1.5)));
        assert_eq!(rounded.get(1), Ok(&Double::new(1e300)));
    }
}
