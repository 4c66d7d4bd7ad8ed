//! This module renders a table as newline-framed, column-aligned text.
//!
//! Every cell is converted to text, each column is padded to the width of its
//! widest cell, cells are joined with a separator, and the whole result is
//! framed by a leading and trailing newline. Column widths are computed
//! independently, so ragged alignment across columns is expected.
//!
//! # Examples
//!
//! ```rust
//! use tabler::{render::TableRenderConfig, Table};
//!
//! let table = Table::from_fn(3, 3, |x, y| Some(".".repeat(x + y + 1)));
//!
//! let config = TableRenderConfig {
//!     separator: " | ".to_string(),
//!     absent_text: "null".to_string(),
//!     cell_text_provider: None, // Use the Display impl
//! };
//!
//! let text = table.render_with_config(&config);
//! assert_eq!(text, table.to_string());
//! ```

use std::fmt::{self, Display};

use crate::{SmallVecLine, Table};
use smallvec::smallvec;
use tracing::trace;

const DEFAULT_SEPARATOR: &str = " | ";
const DEFAULT_ABSENT_TEXT: &str = "null";

/// Configuration for rendering a table as text.
///
/// Users can rely on a cell's `Display` impl or provide a custom text
/// provider function for values with no natural textual form.
///
/// # Examples
///
/// ```
/// use tabler::{render::TableRenderConfig, Table};
///
/// let config = TableRenderConfig {
///     separator: " , ".to_string(),
///     absent_text: "?".to_string(),
///     cell_text_provider: Some(Box::new(|value: &u32| format!("<{value}>"))),
/// };
///
/// let table = Table::from_fn(2, 1, |x, _| if x == 0 { Some(7u32) } else { None });
/// assert_eq!(table.render_with_config(&config), "\n<7> , ?\n");
/// ```
pub struct TableRenderConfig<T> {
    /// Text placed between cells of a row.
    pub separator: String,
    /// Text rendered for an absent cell.
    pub absent_text: String,
    /// Optional function to provide custom text for present cells.
    pub cell_text_provider: Option<Box<dyn Fn(&T) -> String>>,
}

// Manually implement Debug for TableRenderConfig
impl<T> fmt::Debug for TableRenderConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableRenderConfig")
            .field("separator", &self.separator)
            .field("absent_text", &self.absent_text)
            .field("cell_text_provider", &"<function>")
            .finish()
    }
}

impl<T> Default for TableRenderConfig<T> {
    fn default() -> Self {
        TableRenderConfig {
            separator: DEFAULT_SEPARATOR.to_string(),
            absent_text: DEFAULT_ABSENT_TEXT.to_string(),
            cell_text_provider: None,
        }
    }
}

impl<T> Table<T> {
    /// Renders the table as column-aligned text using the given configuration.
    ///
    /// Cells with a custom `cell_text_provider` bypass the `Display` impl;
    /// absent cells always render as `absent_text`. Every cell is right-padded
    /// with spaces to its column width, including cells of the last column.
    pub fn render_with_config(&self, config: &TableRenderConfig<T>) -> String
    where
        T: Display,
    {
        trace!(
            "Rendering table with width={}, height={}",
            self.width(),
            self.height()
        );
        let texts: Vec<SmallVecLine<String>> = self
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Some(value) => match &config.cell_text_provider {
                            Some(provider) => provider(value),
                            None => value.to_string(),
                        },
                        None => config.absent_text.clone(),
                    })
                    .collect()
            })
            .collect();

        let mut widths: SmallVecLine<usize> = smallvec![0; self.width()];
        for row in &texts {
            for (x, text) in row.iter().enumerate() {
                widths[x] = widths[x].max(text.chars().count());
            }
        }

        let lines: Vec<String> = texts
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(x, text)| format!("{text:<width$}", width = widths[x]))
                    .collect::<Vec<_>>()
                    .join(&config.separator)
            })
            .collect();

        format!("\n{}\n", lines.join("\n"))
    }
}

/// Renders with the default configuration: `" | "` separators, absent cells
/// as `"null"`, and cell text from the value's `Display` impl.
///
/// # Example
/// ```
/// use tabler::Table;
///
/// let table = Table::filled(2, 1, "ab");
/// assert_eq!(table.to_string(), "\nab | ab\n");
/// ```
impl<T: Display> Display for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with_config(&TableRenderConfig::default()))
    }
}
