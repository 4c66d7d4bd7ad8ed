//! This crate provides a dense, fixed-size, two-dimensional table addressed by
//! `(x, y)` coordinates. Every cell holds an optional value, so "no value" is a
//! regular cell state rather than an error. It uses `smallvec` for row storage
//! and `insta` for snapshot testing.

/// Rendering module for column-aligned text output.
///
/// # Example
/// ```
/// use tabler::{render::TableRenderConfig, Table};
///
/// let table = Table::from_fn(3, 2, |x, y| Some(x + y));
/// let text = table.render_with_config(&TableRenderConfig::default());
/// assert!(text.starts_with('\n') && text.ends_with('\n'));
/// ```
pub mod render;

use smallvec::SmallVec;
use thiserror::Error;
use tracing::*;

// Covers typical table widths without spilling to the heap
const DEFAULT_SMALLVEC_SIZE: usize = 32;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    #[error("Cell out of bounds at x={x}, y={y}: table is {width}x{height}")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Row out of bounds at y={y}: table height is {height}")]
    RowOutOfBounds { y: usize, height: usize },

    #[error("Column out of bounds at x={x}: table width is {width}")]
    ColumnOutOfBounds { x: usize, width: usize },

    #[error("Invalid arguments, at least one coordinate is required")]
    MissingCoordinate,
}

/// A type alias for SmallVec with an optimized stack-allocated buffer size.
pub type SmallVecLine<T> = SmallVec<[T; DEFAULT_SMALLVEC_SIZE]>;

/// A dense two-dimensional table of optional values.
///
/// Dimensions are fixed at construction. Storage is row-major and fully
/// materialized up front; every accessor assumes direct indexed access.
/// The only mutating operation is [`Table::set`]; every transform returns
/// a new table and leaves the receiver untouched.
///
/// # Example
/// ```
/// use tabler::Table;
///
/// let table = Table::from_fn(3, 3, |x, y| Some(x * y));
/// assert_eq!(table.get(2, 2).unwrap(), Some(&4));
/// assert_eq!(table.get(0, 1).unwrap(), Some(&0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Table<T> {
    width: usize,
    height: usize,
    rows: Vec<SmallVecLine<Option<T>>>,
}

impl<T> Table<T> {
    /// Creates a table with every cell absent.
    ///
    /// # Example
    /// ```
    /// use tabler::Table;
    ///
    /// let table: Table<u8> = Table::new(3, 2);
    /// assert_eq!(table.width(), 3);
    /// assert_eq!(table.height(), 2);
    /// assert_eq!(table.get(0, 0).unwrap(), None);
    /// ```
    pub fn new(width: usize, height: usize) -> Self {
        Self::from_fn(width, height, |_, _| None)
    }

    /// Creates a table with cell `(x, y)` initialized to `generator(x, y)`.
    ///
    /// # Example
    /// ```
    /// use tabler::Table;
    ///
    /// let table = Table::from_fn(3, 3, |x, _| Some(x + 1));
    /// assert_eq!(table.row(0).unwrap(), &[Some(1), Some(2), Some(3)][..]);
    /// ```
    pub fn from_fn<F>(width: usize, height: usize, mut generator: F) -> Self
    where
        F: FnMut(usize, usize) -> Option<T>,
    {
        trace!("Allocating table with width={}, height={}", width, height);
        let rows = (0..height)
            .map(|y| (0..width).map(|x| generator(x, y)).collect())
            .collect();
        Self {
            width,
            height,
            rows,
        }
    }

    /// Creates a table with every cell set to `value`.
    ///
    /// # Example
    /// ```
    /// use tabler::Table;
    ///
    /// let table = Table::filled(2, 2, "-");
    /// assert_eq!(table.get(1, 1).unwrap(), Some(&"-"));
    /// ```
    pub fn filled(width: usize, height: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(width, height, |_, _| Some(value.clone()))
    }

    /// Creates a table from data organized by rows.
    ///
    /// The width is the length of the longest row; cells missing from
    /// shorter rows become absent. Present values are preserved verbatim,
    /// including `Some(0)`, `Some("")`, and `Some(false)`.
    ///
    /// # Example
    /// ```
    /// use tabler::{table, Table};
    ///
    /// let table = Table::from_rows(vec![
    ///     vec![Some(1), Some(2)],
    ///     vec![Some(1), Some(2), Some(3)],
    /// ]);
    /// assert_eq!(table, table![[Some(1), Some(2), None], [Some(1), Some(2), Some(3)]]);
    /// ```
    pub fn from_rows<R>(source: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = Option<T>>,
    {
        let source: Vec<Vec<Option<T>>> = source
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();
        let height = source.len();
        let width = source.iter().map(Vec::len).max().unwrap_or(0);
        let rows = source
            .into_iter()
            .map(|mut row| {
                row.resize_with(width, || None);
                row.into_iter().collect()
            })
            .collect();
        Self {
            width,
            height,
            rows,
        }
    }

    /// Creates a table from data organized by columns.
    ///
    /// The height is the length of the longest column; cells missing from
    /// shorter columns become absent.
    ///
    /// # Example
    /// ```
    /// use tabler::{table, Table};
    ///
    /// let table = Table::from_cols(vec![
    ///     vec![Some(1), Some(2)],
    ///     vec![Some(1), Some(2), Some(3)],
    /// ]);
    /// assert_eq!(table, table![[Some(1), Some(1)], [Some(2), Some(2)], [None, Some(3)]]);
    /// ```
    pub fn from_cols<C>(source: impl IntoIterator<Item = C>) -> Self
    where
        C: IntoIterator<Item = Option<T>>,
    {
        let source: Vec<Vec<Option<T>>> = source
            .into_iter()
            .map(|col| col.into_iter().collect())
            .collect();
        let width = source.len();
        let height = source.iter().map(Vec::len).max().unwrap_or(0);
        let mut col_iters: Vec<_> = source
            .into_iter()
            .map(|mut col| {
                col.resize_with(height, || None);
                col.into_iter()
            })
            .collect();
        let rows = (0..height)
            .map(|_| col_iters.iter_mut().map(|col| col.next().flatten()).collect())
            .collect();
        Self {
            width,
            height,
            rows,
        }
    }

    /// Horizontal size of the table.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Vertical size of the table.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Table data organized by rows: the full backing structure.
    pub fn rows(&self) -> &[SmallVecLine<Option<T>>] {
        &self.rows
    }

    /// Table data organized by columns, one line per `x` in `[0, width)`.
    pub fn cols(&self) -> Vec<SmallVecLine<Option<T>>>
    where
        T: Clone,
    {
        (0..self.width)
            .map(|x| self.rows.iter().map(|row| row[x].clone()).collect())
            .collect()
    }

    /// Returns the value at the given coordinates.
    ///
    /// `Ok(None)` means the cell is present but holds no value; coordinates
    /// outside the table fail instead of clamping.
    ///
    /// # Example
    /// ```
    /// use tabler::{Table, TableError};
    ///
    /// let table = Table::from_fn(3, 3, |x, y| Some(format!("{x}-{y}")));
    /// assert_eq!(table.get(1, 0).unwrap(), Some(&"1-0".to_string()));
    /// assert_eq!(
    ///     table.get(3, 0),
    ///     Err(TableError::OutOfBounds { x: 3, y: 0, width: 3, height: 3 })
    /// );
    /// ```
    pub fn get(&self, x: usize, y: usize) -> Result<Option<&T>, TableError> {
        if x >= self.width || y >= self.height {
            return Err(TableError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.rows[y][x].as_ref())
    }

    /// Returns a borrow of row `y`.
    pub fn row(&self, y: usize) -> Result<&[Option<T>], TableError> {
        self.rows
            .get(y)
            .map(|row| row.as_slice())
            .ok_or(TableError::RowOutOfBounds {
                y,
                height: self.height,
            })
    }

    /// Returns column `x` as a freshly collected line.
    ///
    /// Storage is row-major, so a column is always gathered cell by cell
    /// rather than borrowed.
    ///
    /// # Example
    /// ```
    /// use tabler::Table;
    ///
    /// let table = Table::from_fn(3, 3, |x, _| Some(x + 1));
    /// assert_eq!(table.col(1).unwrap().as_slice(), &[Some(2), Some(2), Some(2)][..]);
    /// ```
    pub fn col(&self, x: usize) -> Result<SmallVecLine<Option<T>>, TableError>
    where
        T: Clone,
    {
        if x >= self.width {
            return Err(TableError::ColumnOutOfBounds {
                x,
                width: self.width,
            });
        }
        Ok(self.rows.iter().map(|row| row[x].clone()).collect())
    }

    /// Sets a value at the given coordinates.
    ///
    /// Passing `None` for one coordinate addresses the whole row or column;
    /// passing `None` for both is an error, not a no-op. Bounds are checked
    /// before anything is written.
    ///
    /// # Example
    /// ```
    /// use tabler::Table;
    ///
    /// let mut table = Table::filled(3, 3, '-');
    /// table.set(1, 1, Some('X')).unwrap();
    /// table.set(None, 2, Some('O')).unwrap();
    /// assert_eq!(table.get(1, 1).unwrap(), Some(&'X'));
    /// assert_eq!(table.row(2).unwrap(), &[Some('O'), Some('O'), Some('O')][..]);
    /// ```
    pub fn set<X, Y>(&mut self, x: X, y: Y, value: Option<T>) -> Result<&mut Self, TableError>
    where
        T: Clone,
        X: Into<Option<usize>>,
        Y: Into<Option<usize>>,
    {
        match (x.into(), y.into()) {
            (Some(x), Some(y)) => {
                if x >= self.width || y >= self.height {
                    return Err(TableError::OutOfBounds {
                        x,
                        y,
                        width: self.width,
                        height: self.height,
                    });
                }
                self.rows[y][x] = value;
            }
            (None, Some(y)) => {
                if y >= self.height {
                    return Err(TableError::RowOutOfBounds {
                        y,
                        height: self.height,
                    });
                }
                trace!("Filling row y={}", y);
                for x in 0..self.width {
                    self.rows[y][x] = value.clone();
                }
            }
            (Some(x), None) => {
                if x >= self.width {
                    return Err(TableError::ColumnOutOfBounds {
                        x,
                        width: self.width,
                    });
                }
                trace!("Filling column x={}", x);
                for y in 0..self.height {
                    self.rows[y][x] = value.clone();
                }
            }
            (None, None) => {
                error!("set called without coordinates");
                return Err(TableError::MissingCoordinate);
            }
        }
        Ok(self)
    }

    /// Creates a new table by applying `f` to every cell.
    ///
    /// The callback receives the cell value, its coordinates, and the source
    /// table, so it can consult neighboring cells while computing the new
    /// value. It is called exactly once per cell.
    ///
    /// # Example
    /// ```
    /// use tabler::{table, Table};
    ///
    /// let table = Table::from_fn(3, 1, |x, _| Some(x + 1));
    /// let squared = table.map(|value, _, _, _| value.map(|n| n * n));
    /// assert_eq!(squared, table![[Some(1), Some(4), Some(9)]]);
    /// ```
    pub fn map<U, F>(&self, mut f: F) -> Table<U>
    where
        F: FnMut(Option<&T>, usize, usize, &Table<T>) -> Option<U>,
    {
        Table::from_fn(self.width, self.height, |x, y| {
            f(self.rows[y][x].as_ref(), x, y, self)
        })
    }

    /// Folds over all cells in row-major order, starting from `initial`.
    ///
    /// Each of the `width * height` cells is visited exactly once, `y`
    /// ascending outer and `x` ascending inner. The order is part of the
    /// contract: non-commutative accumulators rely on it.
    ///
    /// # Example
    /// ```
    /// use tabler::Table;
    ///
    /// let table = Table::filled(10, 20, 0.5);
    /// let sum = table.reduce(|acc, value, _, _, _| acc + value.copied().unwrap_or(0.0), 1.0);
    /// assert_eq!(sum, 101.0);
    /// ```
    pub fn reduce<U, F>(&self, mut f: F, initial: U) -> U
    where
        F: FnMut(U, Option<&T>, usize, usize, &Table<T>) -> U,
    {
        let mut acc = initial;
        for y in 0..self.height {
            for x in 0..self.width {
                acc = f(acc, self.rows[y][x].as_ref(), x, y, self);
            }
        }
        acc
    }

    /// Calls `f` for every cell in row-major order.
    ///
    /// Callers needing shared state across invocations close over it.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Option<&T>, usize, usize, &Table<T>),
    {
        for y in 0..self.height {
            for x in 0..self.width {
                f(self.rows[y][x].as_ref(), x, y, self);
            }
        }
    }

    /// Returns a new table rotated clockwise.
    ///
    /// The result is `height x width`; cell `(x, y)` of the result is cell
    /// `(y, height - 1 - x)` of the receiver.
    ///
    /// # Example
    /// ```
    /// use tabler::{table, Table};
    ///
    /// let table = table![[Some(1), Some(2)], [Some(10), Some(20)], [Some(100), Some(200)]];
    /// assert_eq!(
    ///     table.clockwise(),
    ///     table![[Some(100), Some(10), Some(1)], [Some(200), Some(20), Some(2)]]
    /// );
    /// ```
    pub fn clockwise(&self) -> Table<T>
    where
        T: Clone,
    {
        Table::from_fn(self.height, self.width, |x, y| {
            self.rows[self.height - 1 - x][y].clone()
        })
    }

    /// Returns a new table rotated counterclockwise.
    ///
    /// The result is `height x width`; cell `(x, y)` of the result is cell
    /// `(width - 1 - y, x)` of the receiver.
    pub fn counterclockwise(&self) -> Table<T>
    where
        T: Clone,
    {
        Table::from_fn(self.height, self.width, |x, y| {
            self.rows[x][self.width - 1 - y].clone()
        })
    }

    /// Returns a new table flipped horizontally.
    pub fn flip_horizontal(&self) -> Table<T>
    where
        T: Clone,
    {
        Table::from_fn(self.width, self.height, |x, y| {
            self.rows[y][self.width - 1 - x].clone()
        })
    }

    /// Returns a new table flipped vertically.
    pub fn flip_vertical(&self) -> Table<T>
    where
        T: Clone,
    {
        Table::from_fn(self.width, self.height, |x, y| {
            self.rows[self.height - 1 - y][x].clone()
        })
    }
}

impl<T> From<Vec<Vec<Option<T>>>> for Table<T> {
    fn from(rows: Vec<Vec<Option<T>>>) -> Self {
        Table::from_rows(rows)
    }
}

/// Creates a [`Table`] from rows of `Option` expressions.
///
/// Each bracketed list is one row; the macro delegates to
/// [`Table::from_rows`], so ragged rows are padded with absent cells.
///
/// # Examples
///
/// ```
/// use tabler::table;
///
/// let table = table![
///     [Some(1), Some(2), Some(3)],
///     [Some(4), None, Some(6)],
/// ];
/// assert_eq!(table.width(), 3);
/// assert_eq!(table.height(), 2);
/// assert_eq!(table.get(1, 1).unwrap(), None);
/// ```
#[macro_export]
macro_rules! table {
    ($([$($cell:expr),* $(,)?]),* $(,)?) => {
        $crate::Table::from_rows(vec![$(vec![$($cell),*]),*])
    };
}
