//! Elementwise arithmetic between two columns, and between a column and a constant.

use crate::{
    columnar::Column,
    datatypes::{Double, NumericValue},
    error::Error,
};

use super::map_present;

impl<T: NumericValue> Column<T> {
    fn combine<U, F>(&self, other: &Column<U>, symbol: char, function: F) -> Result<Column<Double>, Error>
    where
        U: NumericValue,
        F: Fn(f64, f64) -> f64,
    {
        if self.size() != other.size() {
            return Err(Error::SizeMismatch {
                left: self.name().to_string(),
                left_size: self.size(),
                right: other.name().to_string(),
                right_size: other.size(),
            });
        }

        let values = self
            .iter()
            .zip(other.iter())
            .map(|(left, right)| {
                if left.is_missing() || right.is_missing() {
                    Double::NAN
                } else {
                    Double::new(function(left.to_f64(), right.to_f64()))
                }
            })
            .collect();

        Ok(Column::from_values(
            format!("{}{symbol}{}", self.name(), other.name()),
            values,
        ))
    }

    fn combine_constant<F>(&self, constant: f64, symbol: char, function: F) -> Column<Double>
    where
        F: Fn(f64, f64) -> f64,
    {
        map_present(self, format!("{}{symbol}{constant}", self.name()), |value| {
            function(value, constant)
        })
    }

    /// Add the values of two columns elementwise.
    ///
    /// # Errors
    /// Returns [Error::SizeMismatch] if the columns differ in size.
    pub fn plus<U: NumericValue>(&self, other: &Column<U>) -> Result<Column<Double>, Error> {
        self.combine(other, '+', |left, right| left + right)
    }

    /// Subtract the values of `other` from the values of `self` elementwise.
    ///
    /// # Errors
    /// Returns [Error::SizeMismatch] if the columns differ in size.
    pub fn minus<U: NumericValue>(&self, other: &Column<U>) -> Result<Column<Double>, Error> {
        self.combine(other, '-', |left, right| left - right)
    }

    /// Multiply the values of two columns elementwise.
    ///
    /// # Errors
    /// Returns [Error::SizeMismatch] if the columns differ in size.
    pub fn times<U: NumericValue>(&self, other: &Column<U>) -> Result<Column<Double>, Error> {
        self.combine(other, '*', |left, right| left * right)
    }

    /// Divide the values of `self` by the values of `other` elementwise.
    /// Division by zero follows IEEE 754, so `x / 0` is infinite and `0 / 0` is missing.
    ///
    /// # Errors
    /// Returns [Error::SizeMismatch] if the columns differ in size.
    pub fn divide<U: NumericValue>(&self, other: &Column<U>) -> Result<Column<Double>, Error> {
        self.combine(other, '/', |left, right| left / right)
    }

    /// Raise the values of `self` to the powers in `other` elementwise.
    ///
    /// # Errors
    /// Returns [Error::SizeMismatch] if the columns differ in size.
    pub fn pow<U: NumericValue>(&self, other: &Column<U>) -> Result<Column<Double>, Error> {
        self.combine(other, '^', f64::powf)
    }

    /// Add a constant to every value.
    pub fn add(&self, constant: f64) -> Column<Double> {
        self.combine_constant(constant, '+', |value, constant| value + constant)
    }

    /// Subtract a constant from every value.
    pub fn subtract(&self, constant: f64) -> Column<Double> {
        self.combine_constant(constant, '-', |value, constant| value - constant)
    }

    /// Multiply every value by a constant.
    pub fn multiply(&self, constant: f64) -> Column<Double> {
        self.combine_constant(constant, '*', |value, constant| value * constant)
    }

    /// Divide every value by a constant.
    pub fn divide_scalar(&self, constant: f64) -> Column<Double> {
        self.combine_constant(constant, '/', |value, constant| value / constant)
    }

    /// Raise every value to a constant power.
    pub fn pow_scalar(&self, constant: f64) -> Column<Double> {
        self.combine_constant(constant, '^', f64::powf)
    }
}

#[cfg(test)]
mod test {
    use crate::{
        columnar::Column,
        datatypes::{Double, NumericValue},
        error::Error,
    };
    use test_log::test;

    fn doubles(column: &Column<Double>) -> Vec<f64> {
        column.iter().map(|value| value.to_f64()).collect()
    }

    #[test]
    fn column_column() {
        let left = Column::from_values("a", vec![4i32, 10, 8, 13]);
        let right = Column::from_values("b", vec![Double::new(2.0), Double::new(0.5), Double::new(4.0), Double::new(1.0)]);

        let sum = left.plus(&right).unwrap();
        assert_eq!(sum.name(), "a+b");
        assert_eq!(doubles(&sum), vec![6.0, 10.5, 12.0, 14.0]);

        assert_eq!(left.minus(&right).unwrap().name(), "a-b");
        assert_eq!(doubles(&left.times(&right).unwrap()), vec![8.0, 5.0, 32.0, 13.0]);
        assert_eq!(doubles(&left.divide(&right).unwrap()), vec![2.0, 20.0, 2.0, 13.0]);

        let power = left.pow(&right).unwrap();
        assert_eq!(power.name(), "a^b");
        assert_eq!(doubles(&power)[0], 16.0);
    }

    #[test]
    fn missing_operands() {
        let left = Column::from_options("a", vec![Some(1i64), None, Some(3)]);
        let right = Column::from_options("b", vec![Some(1i16), Some(2), None]);

        let sum = left.plus(&right).unwrap();
        assert_eq!(sum.is_absent(0), Ok(false));
        assert_eq!(sum.is_absent(1), Ok(true));
        assert_eq!(sum.is_absent(2), Ok(true));

        // x^0 would be 1 for any x, but missing stays missing
        let zeros = Column::from_values("z", vec![0i8, 0, 0]);
        assert_eq!(left.pow(&zeros).unwrap().count_missing(), 1);
    }

    #[test]
    fn size_mismatch() {
        let left = Column::from_values("a", vec![1i32, 2, 3, 4]);
        let right = Column::from_values("b", vec![1i32, 2, 3]);

        assert_eq!(
            left.plus(&right),
            Err(Error::SizeMismatch {
                left: "a".to_string(),
                left_size: 4,
                right: "b".to_string(),
                right_size: 3,
            })
        );
        assert!(left.divide(&right).is_err());
    }

    #[test]
    fn constants() {
        let column = Column::from_options("a", vec![Some(2i32), None, Some(4)]);

        let added = column.add(1.5);
        assert_eq!(added.name(), "a+1.5");
        assert_eq!(added.get(0), Ok(&Double::new(3.5)));
        assert_eq!(added.is_absent(1), Ok(true));

        assert_eq!(column.subtract(2.0).name(), "a-2");
        assert_eq!(column.multiply(3.0).get(2), Ok(&Double::new(12.0)));
        assert_eq!(column.divide_scalar(4.0).get(0), Ok(&Double::new(0.5)));
        assert_eq!(column.pow_scalar(2.0).get(2), Ok(&Double::new(16.0)));
        assert_eq!(column.pow_scalar(0.0).count_missing(), 1);
    }
}
