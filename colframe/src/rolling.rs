//! This module defines [RollingWindow], which aggregates a sliding window over a numeric column.

use crate::{
    aggregates::AggregateOperation,
    columnar::Column,
    datatypes::{Double, NumericValue},
    error::Error,
};

/// Sliding window of fixed size over a numeric column.
///
/// The window ending at position `i` covers the positions `i - window_size + 1` to `i`.
/// Positions with less than `window_size` values of history produce a missing value.
#[derive(Debug, Clone, Copy)]
pub struct RollingWindow<'a, T: NumericValue> {
    column: &'a Column<T>,
    window_size: usize,
}

impl<'a, T: NumericValue> RollingWindow<'a, T> {
    /// Create a new rolling window over `column`.
    ///
    /// # Errors
    /// Returns [Error::InvalidArgument] if `window_size` is zero.
    pub fn new(column: &'a Column<T>, window_size: usize) -> Result<Self, Error> {
        if window_size == 0 {
            return Err(Error::InvalidArgument(
                "window size must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            column,
            window_size,
        })
    }

    /// Return the column the window slides over.
    pub fn column(&self) -> &'a Column<T> {
        self.column
    }

    /// Return the number of values in each window.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Name of the column computed by `operation`
    fn result_name(&self, operation: AggregateOperation) -> String {
        format!("{}_{}_{operation}", self.column.name(), self.window_size)
    }

    /// Aggregate every full window, yielding NaN for the leading positions.
    fn window_values(&self, operation: AggregateOperation) -> impl Iterator<Item = f64> + '_ {
        let leading = self.window_size.min(self.column.size() + 1) - 1;

        std::iter::repeat(f64::NAN).take(leading).chain(
            self.column
                .values()
                .windows(self.window_size)
                .map(move |window| operation.aggregate_numeric(window).value),
        )
    }

    /// Aggregate each window with `operation` into a new column of the source type.
    /// Windows whose aggregate is undefined, e.g. the mean of only missing values, become missing.
    ///
    /// # Errors
    /// Returns [Error::ConversionFailure] if an aggregate cannot be stored in the source type,
    /// e.g. a fractional mean over an integer column.
    pub fn calc(&self, operation: AggregateOperation) -> Result<Column<T>, Error> {
        log::trace!(
            "Rolling {operation} over \"{}\" with window size {}",
            self.column.name(),
            self.window_size
        );

        let values = self
            .window_values(operation)
            .map(T::from_f64)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Column::from_values(self.result_name(operation), values))
    }

    /// Aggregate each window with `operation` into a new column of doubles.
    pub fn calc_double(&self, operation: AggregateOperation) -> Column<Double> {
        log::trace!(
            "Rolling {operation} over \"{}\" with window size {}",
            self.column.name(),
            self.window_size
        );

        let values = self.window_values(operation).map(Double::new).collect();

        Column::from_values(self.result_name(operation), values)
    }
}

impl<T: NumericValue> Column<T> {
    /// Create a rolling window of the given size over this column.
    ///
    /// # Errors
    /// Returns [Error::InvalidArgument] if `window_size` is zero.
    pub fn rolling(&self, window_size: usize) -> Result<RollingWindow<'_, T>, Error> {
        RollingWindow::new(self, window_size)
    }
}

#[cfg(test)]
mod test {
    use super::RollingWindow;
    use crate::{
        aggregates::AggregateOperation,
        columnar::Column,
        datatypes::{ColumnTypeName, Double},
        error::Error,
    };
    use test_log::test;

    fn get_test_column() -> Column<i32> {
        Column::from_values("x", vec![4, 10, 8, 13])
    }

    #[test]
    fn rolling_sum() {
        let column = get_test_column();
        let result = column.rolling(2).unwrap().calc(AggregateOperation::Sum).unwrap();

        assert_eq!(result.name(), "x_2_sum");
        assert_eq!(result.values(), &[i32::MIN, 14, 18, 21]);
        assert_eq!(result.is_absent(0), Ok(true));
    }

    #[test]
    fn window_of_one() {
        let column = get_test_column();
        let result = column.rolling(1).unwrap().calc(AggregateOperation::Max).unwrap();
        assert_eq!(result.values(), column.values());
        assert_eq!(result.name(), "x_1_max");
    }

    #[test]
    fn window_larger_than_column() {
        let column = get_test_column();
        let result = column.rolling(10).unwrap().calc(AggregateOperation::Sum).unwrap();
        assert_eq!(result.size(), 4);
        assert_eq!(result.count_missing(), 4);
    }

    #[test]
    fn missing_windows() {
        let column = Column::from_options("x", vec![Some(1i64), None, None, Some(4)]);
        let result = RollingWindow::new(&column, 2)
            .unwrap()
            .calc(AggregateOperation::Mean)
            .unwrap();

        assert_eq!(result.values(), &[i64::MIN, 1, i64::MIN, 4]);
    }

    #[test]
    fn fractional_results() {
        let column = Column::from_values("x", vec![4i32, 11, 8]);
        let window = column.rolling(2).unwrap();

        assert!(matches!(
            window.calc(AggregateOperation::Mean),
            Err(Error::ConversionFailure(error)) if error.target == ColumnTypeName::Integer
        ));

        let doubles = window.calc_double(AggregateOperation::Mean);
        assert_eq!(doubles.name(), "x_2_mean");
        assert_eq!(doubles.is_absent(0), Ok(true));
        assert_eq!(doubles.get(1), Ok(&Double::new(7.5)));
        assert_eq!(doubles.get(2), Ok(&Double::new(9.5)));
    }

    #[test]
    fn longs_beyond_double_precision() {
        let column = Column::from_values("big", vec![9_007_199_254_740_993i64]);
        assert!(matches!(
            column.rolling(1).unwrap().calc(AggregateOperation::Max),
            Err(Error::ConversionFailure(error)) if error.target == ColumnTypeName::Long
        ));

        let column = Column::from_values("small", vec![9_007_199_254_740_000i64, -5]);
        let result = column.rolling(1).unwrap().calc(AggregateOperation::Max).unwrap();
        assert_eq!(result.values(), column.values());
    }

    #[test]
    fn standard_deviation() {
        let column = Column::from_values(
            "y",
            vec![Double::new(1.0), Double::new(3.0), Double::new(5.0)],
        );
        let result = column
            .rolling(3)
            .unwrap()
            .calc(AggregateOperation::StdPopulation)
            .unwrap();

        assert_eq!(result.name(), "y_3_std_population");
        assert_eq!(result.count_missing(), 2);
        assert!((result.values()[2].value() - (8.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn invalid_size() {
        let column = get_test_column();
        assert!(matches!(
            RollingWindow::new(&column, 0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(column.rolling(0).is_err());
    }
}
