//! This module defines [ColumnContainer], an ordered collection of named columns forming a table.

use std::ops::{Deref, DerefMut};

use linked_hash_map::LinkedHashMap;

use crate::{datatypes::ColumnValue, error::Error};

use super::{AnyColumn, Column};

/// Insertion-ordered collection of uniquely named columns.
///
/// Inserting a column whose name is already taken stores it under
/// the first free name among `<name>_a`, `<name>_b`, ..., `<name>_z`, `<name>_aa`, ...
/// Inserting a column shorter than [ColumnContainer::row_count] pads it with missing values.
#[derive(Debug, Clone, Default)]
pub struct ColumnContainer {
    columns: LinkedHashMap<String, AnyColumn>,
}

/// Mutable access to a column of a [ColumnContainer] that keeps the column's name
/// in line with the key it is stored under.
#[derive(Debug)]
pub struct ColumnMut<'a> {
    key: &'a str,
    column: &'a mut AnyColumn,
}

impl Deref for ColumnMut<'_> {
    type Target = AnyColumn;

    fn deref(&self) -> &Self::Target {
        &*self.column
    }
}

impl DerefMut for ColumnMut<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.column
    }
}

impl Drop for ColumnMut<'_> {
    fn drop(&mut self) {
        if self.column.name() != self.key {
            log::trace!(
                "Restoring name \"{}\" of column renamed to \"{}\"",
                self.key,
                self.column.name()
            );
            self.column.set_name(self.key);
        }
    }
}

/// Returns the `index`-th suffix in the sequence `a`, `b`, ..., `z`, `aa`, `ab`, ...
fn collision_suffix(mut index: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'a' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.reverse();

    String::from_utf8(letters).unwrap_or_default()
}

impl ColumnContainer {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a container from the given columns, inserted in order.
    pub fn from_columns<C: Into<AnyColumn>>(columns: impl IntoIterator<Item = C>) -> Self {
        let mut result = Self::new();
        for column in columns {
            result.add_column(column);
        }

        result
    }

    fn resolve_name(&self, name: &str) -> String {
        if !self.columns.contains_key(name) {
            return name.to_string();
        }

        (0..)
            .map(|index| format!("{name}_{}", collision_suffix(index)))
            .find(|candidate| !self.columns.contains_key(candidate))
            .unwrap_or_else(|| name.to_string())
    }

    /// Insert a column at the end, padding it to the current row count.
    /// Returns the name under which the column was stored.
    pub fn add_column(&mut self, column: impl Into<AnyColumn>) -> String {
        let mut column = column.into();
        column.pad_to(self.row_count());

        let name = self.resolve_name(column.name());
        if name != column.name() {
            log::trace!("Renaming column \"{}\" to \"{name}\"", column.name());
            column.set_name(name.clone());
        }
        self.columns.insert(name.clone(), column);

        name
    }

    /// Return the column with the given name.
    pub fn get_column(&self, name: &str) -> Option<&AnyColumn> {
        self.columns.get(name)
    }

    /// Return the column with the given name for modification.
    ///
    /// The stored name is restored when the returned handle is dropped,
    /// so renaming has to go through [ColumnContainer::rename_column].
    pub fn get_column_mut<'a>(&'a mut self, name: &'a str) -> Option<ColumnMut<'a>> {
        let column = self.columns.get_mut(name)?;
        Some(ColumnMut { key: name, column })
    }

    /// Return the column with the given name as a column of type `T`.
    ///
    /// # Errors
    /// Returns [Error::ColumnNotFound] if there is no such column
    /// and [Error::TypeMismatch] if it holds values of a different type.
    pub fn column<T: ColumnValue>(&self, name: &str) -> Result<&Column<T>, Error> {
        self.columns
            .get(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))?
            .try_as_column::<T>()
    }

    /// Remove and return the column with the given name.
    pub fn remove_column(&mut self, name: &str) -> Option<AnyColumn> {
        self.columns.remove(name)
    }

    /// Returns `true` if there is a column with the given name.
    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Return the position of the column with the given name in insertion order.
    pub fn index_of_key(&self, name: &str) -> Option<usize> {
        self.columns.keys().position(|key| key == name)
    }

    /// Return the largest number of rows among the columns.
    pub fn row_count(&self) -> usize {
        self.columns.values().map(AnyColumn::len).max().unwrap_or(0)
    }

    /// Return the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Return the names of all columns in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.keys().map(String::as_str)
    }

    /// Iterate over all columns in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &AnyColumn> + '_ {
        self.columns.values()
    }

    /// Remove all rows while keeping the columns.
    pub fn clear(&mut self) {
        for (_, column) in self.columns.iter_mut() {
            column.clear();
        }
    }

    /// Rename a column, keeping its position.
    ///
    /// # Errors
    /// Returns [Error::ColumnNotFound] if there is no column called `old_name`
    /// and [Error::InvalidArgument] if `new_name` is already taken by another column.
    pub fn rename_column(&mut self, old_name: &str, new_name: &str) -> Result<(), Error> {
        if !self.columns.contains_key(old_name) {
            return Err(Error::ColumnNotFound(old_name.to_string()));
        }
        if old_name == new_name {
            return Ok(());
        }
        if self.columns.contains_key(new_name) {
            return Err(Error::InvalidArgument(format!(
                "a column named \"{new_name}\" already exists"
            )));
        }

        let columns = std::mem::take(&mut self.columns);
        for (name, mut column) in columns {
            if name == old_name {
                column.set_name(new_name);
                self.columns.insert(new_name.to_string(), column);
            } else {
                self.columns.insert(name, column);
            }
        }

        Ok(())
    }

    /// Return a new container with the rows at the given indices, in that order.
    /// Used by join and sort implementations that compute a permutation of row indices.
    ///
    /// # Errors
    /// Returns [Error::IndexOutOfBounds] if an index is out of bounds for some column.
    pub fn take_rows(&self, indices: &[usize]) -> Result<Self, Error> {
        let mut result = Self::new();
        for (name, column) in self.columns.iter() {
            result.columns.insert(name.clone(), column.take(indices)?);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod test {
    use super::{collision_suffix, ColumnContainer};
    use crate::{
        columnar::{AnyColumn, Column},
        datatypes::{ColumnTypeName, Double},
        error::Error,
    };
    use test_log::test;

    fn get_test_container() -> ColumnContainer {
        ColumnContainer::from_columns([
            AnyColumn::from(Column::from_values("id", vec![1i32, 2, 3])),
            AnyColumn::from(Column::from_values(
                "score",
                vec![Double::new(0.5), Double::new(1.5), Double::new(2.5)],
            )),
        ])
    }

    #[test]
    fn suffixes() {
        assert_eq!(collision_suffix(0), "a");
        assert_eq!(collision_suffix(25), "z");
        assert_eq!(collision_suffix(26), "aa");
        assert_eq!(collision_suffix(27), "ab");
        assert_eq!(collision_suffix(26 + 26 * 26), "aaa");
    }

    #[test]
    fn colliding_names() {
        let mut container = get_test_container();
        assert_eq!(container.add_column(Column::from_values("id", vec![7i64])), "id_a");
        assert_eq!(container.add_column(Column::from_values("id", vec![8i64])), "id_b");
        assert_eq!(container.column_count(), 4);
        assert_eq!(container.get_column("id_b").map(AnyColumn::name), Some("id_b"));
        assert_eq!(container.index_of_key("id_a"), Some(2));
        assert_eq!(container.index_of_key("missing"), None);
    }

    #[test]
    fn short_columns_are_padded() {
        let mut container = get_test_container();
        container.add_column(Column::from_values("label", vec!["x".to_string()]));
        let labels = container.column::<String>("label").unwrap();
        assert_eq!(labels.size(), 3);
        assert_eq!(labels.is_absent(2), Ok(true));
        assert_eq!(container.row_count(), 3);

        container.add_column(Column::from_values("long", vec![1i8, 2, 3, 4, 5]));
        assert_eq!(container.row_count(), 5);
    }

    #[test]
    fn typed_access() {
        let container = get_test_container();
        assert!(container.column::<i32>("id").is_ok());
        assert!(matches!(
            container.column::<i64>("id"),
            Err(Error::TypeMismatch {
                expected: ColumnTypeName::Long,
                found: ColumnTypeName::Integer,
                ..
            })
        ));
        assert_eq!(
            container.column::<i32>("nope"),
            Err(Error::ColumnNotFound("nope".to_string()))
        );
    }

    #[test]
    fn remove_and_clear() {
        let mut container = get_test_container();
        assert!(container.contains_column("score"));
        let removed = container.remove_column("score").unwrap();
        assert_eq!(removed.len(), 3);
        assert!(!container.contains_column("score"));
        assert!(container.remove_column("score").is_none());

        container.clear();
        assert_eq!(container.column_count(), 1);
        assert_eq!(container.row_count(), 0);
    }

    #[test]
    fn mutable_access_keeps_names_in_sync() {
        let mut container = get_test_container();
        {
            let mut column = container.get_column_mut("id").unwrap();
            column.append_missing();
            column.set_name("other");
        }
        let column = container.get_column("id").unwrap();
        assert_eq!(column.name(), "id");
        assert_eq!(column.len(), 4);
        assert_eq!(container.row_count(), 4);

        if let Some(mut column) = container.get_column_mut("score") {
            if let Some(scores) = column.as_column_mut::<Double>() {
                scores.set_name("renamed");
                scores.set(0, Double::new(9.0)).unwrap();
            }
        }
        let scores = container.column::<Double>("score").unwrap();
        assert_eq!(scores.name(), "score");
        assert_eq!(scores.get(0), Ok(&Double::new(9.0)));
        assert!(container.get_column_mut("missing").is_none());
    }

    #[test]
    fn rename_keeps_position() {
        let mut container = get_test_container();
        container.rename_column("id", "key").unwrap();
        assert_eq!(container.column_names().collect::<Vec<_>>(), vec!["key", "score"]);
        assert_eq!(container.get_column("key").map(AnyColumn::name), Some("key"));
        assert!(container.rename_column("key", "score").is_err());
        assert!(container.rename_column("id", "x").is_err());
    }

    #[test]
    fn take_rows() {
        let container = get_test_container();
        let reordered = container.take_rows(&[2, 0]).unwrap();
        assert_eq!(reordered.column::<i32>("id").unwrap().values(), &[3, 1]);
        assert_eq!(reordered.row_count(), 2);
        assert!(container.take_rows(&[3]).is_err());
    }
}
