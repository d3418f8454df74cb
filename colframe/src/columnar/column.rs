//! This module defines [Column], a named sequence of values of a single scalar kind.

use hashbrown::HashSet;

use crate::{
    columntype::{ColumnType, ParserOptions},
    datatypes::{ColumnTypeName, ColumnValue},
    error::{ConversionError, Error},
    parallel,
};

/// Named, ordered and mutable sequence of values of type `T`.
///
/// Missing entries hold the sentinel [ColumnValue::missing_value].
/// The column exclusively owns its backing storage;
/// mutation requires `&mut self`, so concurrent writers are ruled out by the borrow checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<T: ColumnValue> {
    name: String,
    data: Vec<T>,
}

impl<T: ColumnValue> Column<T> {
    /// Create a new empty column.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: Vec::new(),
        }
    }

    /// Create a column holding the given values.
    pub fn from_values(name: impl Into<String>, values: Vec<T>) -> Self {
        Self {
            name: name.into(),
            data: values,
        }
    }

    /// Create a column from optional values, storing `None` as the sentinel.
    pub fn from_options(name: impl Into<String>, values: impl IntoIterator<Item = Option<T>>) -> Self {
        Self {
            name: name.into(),
            data: values
                .into_iter()
                .map(|value| value.unwrap_or_else(T::missing_value))
                .collect(),
        }
    }

    /// Return the name of this column.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Change the name of this column.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Change the name of this column, returning the renamed column.
    pub fn rename(mut self, name: impl Into<String>) -> Self {
        self.set_name(name);
        self
    }

    /// Return the runtime tag of the stored type.
    pub fn column_type(&self) -> ColumnTypeName {
        T::TYPE
    }

    /// Return the number of entries (including missing ones).
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Return the number of entries (including missing ones).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Return `true` if the column has no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return the stored values, with missing entries as sentinels.
    pub fn values(&self) -> &[T] {
        &self.data
    }

    /// Return the stored values for in-place updates.
    pub(crate) fn values_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over the stored values, with missing entries as sentinels.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate over the stored values, with missing entries as `None`.
    pub fn iter_options(&self) -> impl Iterator<Item = Option<&T>> + '_ {
        self.data
            .iter()
            .map(|value| (!value.is_missing()).then_some(value))
    }

    /// Iterate over all non-missing values.
    pub fn present_values(&self) -> impl Iterator<Item = &T> + '_ {
        self.data.iter().filter(|value| !value.is_missing())
    }

    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index < self.data.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds {
                column: self.name.clone(),
                index,
                size: self.data.len(),
            })
        }
    }

    /// Return the value at the given index.
    ///
    /// # Errors
    /// Returns [Error::IndexOutOfBounds] if `index` is not smaller than the size.
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        self.check_index(index)?;
        Ok(&self.data[index])
    }

    /// Return the value at the given index, or `None` if it is missing.
    ///
    /// # Errors
    /// Returns [Error::IndexOutOfBounds] if `index` is not smaller than the size.
    pub fn get_option(&self, index: usize) -> Result<Option<&T>, Error> {
        let value = self.get(index)?;
        Ok((!value.is_missing()).then_some(value))
    }

    /// Append a value.
    pub fn append(&mut self, value: T) {
        self.data.push(value);
    }

    /// Append the sentinel.
    pub fn append_missing(&mut self) {
        self.data.push(T::missing_value());
    }

    /// Append all given values in order.
    pub fn append_all(&mut self, values: impl IntoIterator<Item = T>) {
        self.data.extend(values);
    }

    /// Parse `text` and append the result.
    /// Text matching one of the missing tokens in `options` appends the sentinel.
    ///
    /// # Errors
    /// Returns [Error::ConversionFailure] on malformed text; the column is left unchanged.
    pub fn append_text(&mut self, text: &str, options: &ParserOptions) -> Result<(), Error> {
        let value = if options.is_missing_token(text) {
            T::missing_value()
        } else {
            T::parse_value(text, options)?
        };
        self.data.push(value);

        Ok(())
    }

    /// Parse and append each text using `column_type`.
    /// Either all texts are appended or, on error, none.
    ///
    /// # Errors
    /// Returns [Error::ConversionFailure] for the first malformed text.
    pub fn append_all_text<'a>(
        &mut self,
        texts: impl IntoIterator<Item = &'a str>,
        column_type: &ColumnType<T>,
    ) -> Result<(), Error> {
        let parsed = texts
            .into_iter()
            .map(|text| column_type.parse(text))
            .collect::<Result<Vec<T>, Error>>()?;
        self.data.extend(parsed);

        Ok(())
    }

    /// Returns `true` if the value at `index` is missing.
    ///
    /// # Errors
    /// Returns [Error::IndexOutOfBounds] if `index` is not smaller than the size.
    pub fn is_absent(&self, index: usize) -> Result<bool, Error> {
        Ok(self.get(index)?.is_missing())
    }

    /// Returns `true` if `value` is the sentinel of this column's type.
    pub fn is_missing_value(value: &T) -> bool {
        value.is_missing()
    }

    /// Return the number of missing entries.
    pub fn count_missing(&self) -> usize {
        self.data.iter().filter(|value| value.is_missing()).count()
    }

    /// Return the number of non-missing entries.
    pub fn count_present(&self) -> usize {
        self.data.len() - self.count_missing()
    }

    /// Replace the value at `index`.
    ///
    /// # Errors
    /// Returns [Error::IndexOutOfBounds] if `index` is not smaller than the size.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), Error> {
        self.check_index(index)?;
        self.data[index] = value;

        Ok(())
    }

    /// Set the value at `index` to the sentinel.
    ///
    /// # Errors
    /// Returns [Error::IndexOutOfBounds] if `index` is not smaller than the size.
    pub fn set_missing(&mut self, index: usize) -> Result<(), Error> {
        self.set(index, T::missing_value())
    }

    /// Return `true` if `value` is stored in the column.
    pub fn contains(&self, value: &T) -> bool {
        self.data.contains(value)
    }

    /// Return the index of the first occurrence of `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.data.iter().position(|entry| entry == value)
    }

    /// Remove the first occurrence of `value`, shifting later entries to the left.
    /// Passing the sentinel removes the first missing entry.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `value` is not stored in the column.
    pub fn remove(&mut self, value: &T) -> Result<(), Error> {
        match self.index_of(value) {
            Some(index) => {
                self.data.remove(index);
                Ok(())
            }
            None => Err(Error::NotFound {
                column: self.name.clone(),
                value: format!("{value:?}"),
            }),
        }
    }

    /// Remove and return the value at `index`, shifting later entries to the left.
    ///
    /// # Errors
    /// Returns [Error::IndexOutOfBounds] if `index` is not smaller than the size.
    pub fn remove_at(&mut self, index: usize) -> Result<T, Error> {
        self.check_index(index)?;
        Ok(self.data.remove(index))
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Append sentinels until the column has `len` entries.
    pub fn pad_to(&mut self, len: usize) {
        if self.data.len() < len {
            self.data.resize(len, T::missing_value());
        }
    }

    /// Sort the column in place according to the natural order of `T`.
    ///
    /// Sentinels are ordinary values here: integer sentinels (the minimum value),
    /// the empty string and the minimum dates sort first, NaN and `'\u{FFFF}'` sort last.
    pub fn sort_ascending(&mut self) {
        self.data.sort();
    }

    /// Sort the column in place in reverse natural order of `T`.
    ///
    /// See [Column::sort_ascending] for the position of sentinels.
    pub fn sort_descending(&mut self) {
        self.data.sort_by(|a, b| b.cmp(a));
    }

    /// Return the permutation that sorts this column (stable).
    /// Applying it with [Column::take] yields the sorted column.
    pub fn sorted_indices(&self, ascending: bool) -> Vec<usize> {
        let mut indices = (0..self.data.len()).collect::<Vec<_>>();
        if ascending {
            indices.sort_by(|&a, &b| self.data[a].cmp(&self.data[b]));
        } else {
            indices.sort_by(|&a, &b| self.data[b].cmp(&self.data[a]));
        }

        indices
    }

    /// Return a new column containing the values at the given indices, in that order.
    ///
    /// # Errors
    /// Returns [Error::IndexOutOfBounds] if any index is not smaller than the size.
    pub fn take(&self, indices: &[usize]) -> Result<Self, Error> {
        let data = indices
            .iter()
            .map(|&index| self.get(index).cloned())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: self.name.clone(),
            data,
        })
    }

    /// Return a new column with the first `count` values.
    pub fn head(&self, count: usize) -> Self {
        Self {
            name: self.name.clone(),
            data: self.data.iter().take(count).cloned().collect(),
        }
    }

    /// Return an empty column with the same name and type.
    pub fn copy_empty(&self) -> Self {
        Self::new(self.name.clone())
    }

    /// Return a new column in which only the first occurrence of every value is kept.
    pub fn unique(&self) -> Self {
        let mut seen = HashSet::with_capacity(self.data.len());
        let data = self
            .data
            .iter()
            .filter(|value| seen.insert(*value))
            .cloned()
            .collect();

        Self {
            name: self.name.clone(),
            data,
        }
    }

    /// Return a new column with the non-missing values that satisfy `predicate`,
    /// in their original order.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool,
    {
        let data = self
            .data
            .iter()
            .filter(|value| !value.is_missing() && predicate(value))
            .cloned()
            .collect();

        Self {
            name: self.name.clone(),
            data,
        }
    }

    /// Return a new column where `function` has been applied to every non-missing value.
    /// Missing values are kept as they are.
    ///
    /// Large columns are processed in parallel (with the `parallel` feature),
    /// so `function` must be pure: it may neither depend on the order of evaluation
    /// nor mutate shared state. The result is always index-aligned with `self`.
    pub fn apply<F>(&self, function: F) -> Self
    where
        F: Fn(&T) -> T + Send + Sync,
    {
        let data = parallel::map_slice(&self.data, |value| {
            if value.is_missing() {
                value.clone()
            } else {
                function(value)
            }
        });

        Self {
            name: self.name.clone(),
            data,
        }
    }

    /// Replace every entry equal to one of `old_values` with `new_value`.
    /// Sentinels may appear in `old_values` to fill in missing entries.
    pub fn replace(&mut self, old_values: &[T], new_value: T) {
        for value in self.data.iter_mut() {
            if old_values.contains(value) {
                *value = new_value.clone();
            }
        }
    }

    /// Return a new column of type `U` by applying `mapper` to every non-missing value.
    /// Missing values become the sentinel of `U` without calling `mapper`.
    pub fn convert<U, F>(&self, mut mapper: F) -> Column<U>
    where
        U: ColumnValue,
        F: FnMut(&T) -> U,
    {
        let data = self
            .data
            .iter()
            .map(|value| {
                if value.is_missing() {
                    U::missing_value()
                } else {
                    mapper(value)
                }
            })
            .collect();

        Column {
            name: self.name.clone(),
            data,
        }
    }

    /// Like [Column::convert], but with a fallible `mapper`.
    ///
    /// # Errors
    /// Returns [Error::ConversionFailure] for the first value that `mapper` rejects.
    pub fn try_convert<U, F>(&self, mut mapper: F) -> Result<Column<U>, Error>
    where
        U: ColumnValue,
        F: FnMut(&T) -> Result<U, ConversionError>,
    {
        let data = self
            .data
            .iter()
            .map(|value| {
                if value.is_missing() {
                    Ok(U::missing_value())
                } else {
                    mapper(value)
                }
            })
            .collect::<Result<Vec<U>, ConversionError>>()?;

        Ok(Column {
            name: self.name.clone(),
            data,
        })
    }
}

impl<T: ColumnValue> Extend<T> for Column<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<'a, T: ColumnValue> IntoIterator for &'a Column<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod test {
    use chrono::{NaiveDate, NaiveDateTime};
    use quickcheck_macros::quickcheck;

    use super::Column;
    use crate::{
        columntype::{ColumnType, ParserOptions},
        datatypes::{ColumnTypeName, ColumnValue, Double, Float},
        error::Error,
    };
    use test_log::test;

    fn get_test_column() -> Column<i32> {
        Column::from_values("values", vec![4, 10, i32::MIN, 8, 13])
    }

    #[test]
    fn get_and_bounds() {
        let column = get_test_column();
        assert_eq!(column.size(), 5);
        assert_eq!(column.get(1), Ok(&10));
        assert_eq!(column.get_option(2), Ok(None));
        assert_eq!(
            column.get(5),
            Err(Error::IndexOutOfBounds {
                column: "values".to_string(),
                index: 5,
                size: 5
            })
        );
        assert!(column.is_absent(7).is_err());
    }

    fn sentinel_round_trip<T: ColumnValue>() {
        let mut column = Column::<T>::new("c");
        column.append_missing();
        assert_eq!(column.is_absent(column.size() - 1), Ok(true));
        assert_eq!(column.column_type(), T::TYPE);
    }

    #[test]
    fn sentinel_round_trip_all_types() {
        sentinel_round_trip::<bool>();
        sentinel_round_trip::<i8>();
        sentinel_round_trip::<char>();
        sentinel_round_trip::<NaiveDate>();
        sentinel_round_trip::<NaiveDateTime>();
        sentinel_round_trip::<Double>();
        sentinel_round_trip::<Float>();
        sentinel_round_trip::<i32>();
        sentinel_round_trip::<i64>();
        sentinel_round_trip::<i16>();
        sentinel_round_trip::<String>();
    }

    #[test]
    fn set_and_remove() {
        let mut column = get_test_column();
        column.set(0, 5).unwrap();
        assert_eq!(column.values(), &[5, 10, i32::MIN, 8, 13]);
        assert!(column.set(9, 1).is_err());

        column.remove(&i32::MIN).unwrap();
        assert_eq!(column.values(), &[5, 10, 8, 13]);
        assert!(matches!(column.remove(&99), Err(Error::NotFound { .. })));
        assert_eq!(column.values(), &[5, 10, 8, 13]);

        assert_eq!(column.remove_at(1), Ok(10));
        assert_eq!(column.values(), &[5, 8, 13]);
        assert!(column.remove_at(3).is_err());
    }

    #[test]
    fn remove_missing_double() {
        let mut column = Column::from_values(
            "d",
            vec![Double::new(1.0), Double::NAN, Double::new(2.0)],
        );
        column.remove(&Double::NAN).unwrap();
        assert_eq!(column.values(), &[Double::new(1.0), Double::new(2.0)]);
    }

    #[test]
    fn sorting_keeps_sentinels_as_values() {
        let mut column = get_test_column();
        column.sort_ascending();
        assert_eq!(column.values(), &[i32::MIN, 4, 8, 10, 13]);
        column.sort_descending();
        assert_eq!(column.values(), &[13, 10, 8, 4, i32::MIN]);

        let mut doubles = Column::from_values(
            "d",
            vec![Double::NAN, Double::new(2.0), Double::new(-1.0)],
        );
        doubles.sort_ascending();
        assert_eq!(doubles.get(0), Ok(&Double::new(-1.0)));
        assert!(doubles.is_absent(2).unwrap());
    }

    #[test]
    fn sorted_indices_and_take() {
        let column = Column::from_values("s", vec![3i64, 1, 2, 1]);
        let indices = column.sorted_indices(true);
        assert_eq!(indices, vec![1, 3, 2, 0]);
        assert_eq!(column.take(&indices).unwrap().values(), &[1, 1, 2, 3]);
        assert_eq!(column.sorted_indices(false), vec![0, 2, 1, 3]);
        assert!(column.take(&[4]).is_err());
    }

    #[test]
    fn unique_keeps_first_seen_order() {
        let column = Column::from_values("b", vec![true, false, true, false]);
        assert_eq!(column.unique().values(), &[true, false]);

        let column = Column::from_values("i", vec![3, 1, 3, 2, 1]);
        assert_eq!(column.unique().values(), &[3, 1, 2]);
    }

    #[test]
    fn filter_skips_missing() {
        let column = get_test_column();
        let filtered = column.filter(|value| *value > 5);
        assert_eq!(filtered.values(), &[10, 8, 13]);
        assert_eq!(filtered.name(), "values");

        // the sentinel would satisfy the predicate, but is never selected
        let filtered = column.filter(|_| true);
        assert_eq!(filtered.size(), 4);
    }

    #[test]
    fn apply_keeps_missing() {
        let column = get_test_column();
        let doubled = column.apply(|value| value * 2);
        assert_eq!(doubled.values(), &[8, 20, i32::MIN, 16, 26]);
        assert_eq!(column.values(), &[4, 10, i32::MIN, 8, 13]);
    }

    #[test]
    fn apply_large_column_is_index_aligned() {
        let values = (0..100_000i64).collect::<Vec<_>>();
        let column = Column::from_values("large", values);
        let result = column.apply(|value| value + 1);
        assert!(result
            .iter()
            .enumerate()
            .all(|(index, value)| *value == index as i64 + 1));
    }

    #[test]
    fn replace_values() {
        let mut column = Column::from_values(
            "s",
            vec!["a".to_string(), String::new(), "b".to_string(), "c".to_string()],
        );
        column.replace(&[String::new(), "b".to_string()], "z".to_string());
        assert_eq!(column.values(), &["a", "z", "z", "c"]);
    }

    #[test]
    fn convert_skips_missing() {
        let column = get_test_column();
        let mut calls = 0;
        let converted: Column<String> = column.convert(|value| {
            calls += 1;
            value.to_string()
        });
        assert_eq!(calls, 4);
        assert_eq!(converted.column_type(), ColumnTypeName::String);
        assert_eq!(converted.values(), &["4", "10", "", "8", "13"]);

        let failed = column.try_convert(|value| i8::try_from(*value * 20).map_err(|_| {
            crate::error::ConversionError::new(value, ColumnTypeName::Byte)
        }));
        assert!(matches!(failed, Err(Error::ConversionFailure(_))));
    }

    #[test]
    fn append_text() {
        let options = ParserOptions::default();
        let mut column = Column::<i16>::new("t");
        column.append_text("7", &options).unwrap();
        column.append_text("NA", &options).unwrap();
        assert!(column.append_text("seven", &options).is_err());
        assert_eq!(column.values(), &[7, i16::MIN]);

        let column_type = ColumnType::<i16>::default();
        assert!(column.append_all_text(["1", "x", "2"], &column_type).is_err());
        assert_eq!(column.size(), 2);
        column.append_all_text(["1", "", "2"], &column_type).unwrap();
        assert_eq!(column.values(), &[7, i16::MIN, 1, i16::MIN, 2]);
    }

    #[test]
    fn pad_and_copy_empty() {
        let mut column = Column::from_values("p", vec!['a']);
        column.pad_to(3);
        assert_eq!(column.values(), &['a', '\u{FFFF}', '\u{FFFF}']);
        assert_eq!(column.count_missing(), 2);
        assert_eq!(column.count_present(), 1);

        let empty = column.copy_empty();
        assert!(empty.is_empty());
        assert_eq!(empty.name(), "p");
    }

    #[quickcheck]
    fn copy_is_independent(values: Vec<i64>, replacement: i64) -> bool {
        let column = Column::from_values("q", values.clone());
        let mut copy = column.clone();
        let equal = copy == column;

        copy.append(replacement);
        copy.set(0, replacement.wrapping_add(1)).unwrap();
        copy.set_name("changed");

        equal && column.values() == values.as_slice() && column.name() == "q"
    }

    #[quickcheck]
    fn filter_closure(values: Vec<Double>, threshold: f64) -> bool {
        let column = Column::from_values("q", values);
        let predicate = |value: &Double| value.value() > threshold;
        let filtered = column.filter(predicate);

        filtered.size() <= column.size() && filtered.iter().all(predicate)
    }
}
