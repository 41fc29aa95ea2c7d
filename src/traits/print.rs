// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # **Print Module** - *Pretty Printing with Attitude*
//!
//! Contains implementations of the Display trait for matrices and operands,
//! and an additional `Print` trait which wraps it to provide
//! `myobj.print()` for any object that implements it.

use std::fmt::{self, Display, Formatter};

use crate::enums::nested::Nested;
use crate::enums::operand::Operand;
use crate::structs::dense::DenseMatrix;
use crate::structs::sparse::SparseMatrix;
use crate::traits::element::Element;

pub(crate) const MAX_PREVIEW: usize = 20;
pub(crate) const MAX_COLUMNS: usize = 8;

/// # Print
///
/// Loaded print trait for pretty printing matrices
///
/// Provides a more convenient way to activate `Display`
/// for other types such as matrices via `mymat.print()`,
/// avoiding the need to write `println!("{}", mymat);`
pub trait Print {
    #[inline]
    fn print(&self)
    where
        Self: Display,
    {
        println!("{}", self);
    }
}

impl<T: Display> Print for T where T: Display {}

// Helper functions

pub(crate) fn print_rule(f: &mut Formatter<'_>, idx_width: usize, col_widths: &[usize]) -> fmt::Result {
    write!(f, "+{:-<w$}+", "", w = idx_width + 2)?; // idx column (+2 for spaces)
    for &w in col_widths {
        write!(f, "{:-<w$}+", "", w = w + 2)?; // +2 for spaces
    }
    writeln!(f)
}

pub(crate) fn print_row(
    f: &mut Formatter<'_>,
    idx: &str,
    idx_width: usize,
    cells: &[String],
    col_widths: &[usize],
) -> fmt::Result {
    write!(f, "| {idx:>w$} |", w = idx_width)?;
    for (cell, &w) in cells.iter().zip(col_widths) {
        write!(f, " {cell:>w$} |", w = w)?;
    }
    writeln!(f)
}

pub(crate) fn print_ellipsis_row(
    f: &mut Formatter<'_>,
    idx_width: usize,
    col_widths: &[usize],
) -> fmt::Result {
    write!(f, "| {dots:^w$} |", dots = "…", w = idx_width)?;
    for &w in col_widths {
        write!(f, " {dots:^w$} |", dots = "…", w = w)?;
    }
    writeln!(f)
}

/// Renders `rows` as a boxed table with a leading index column.
fn print_table(
    f: &mut Formatter<'_>,
    headers: Vec<String>,
    rows: Vec<(String, Vec<String>)>,
    truncated: bool,
) -> fmt::Result {
    let idx_width = rows
        .iter()
        .map(|(idx, _)| idx.len())
        .chain(std::iter::once(3))
        .max()
        .unwrap_or(3);
    let mut col_widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for (_, cells) in &rows {
        for (w, cell) in col_widths.iter_mut().zip(cells) {
            *w = (*w).max(cell.chars().count());
        }
    }

    print_rule(f, idx_width, &col_widths)?;
    print_row(f, "idx", idx_width, &headers, &col_widths)?;
    print_rule(f, idx_width, &col_widths)?;
    for (idx, cells) in &rows {
        print_row(f, idx, idx_width, cells, &col_widths)?;
    }
    if truncated {
        print_ellipsis_row(f, idx_width, &col_widths)?;
    }
    print_rule(f, idx_width, &col_widths)
}

impl<T: Element + Display> Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "DenseMatrix<{}> {:?}", self.element_kind(), self.size())?;
        let Some((nrows, ncols)) = self.dims_2d() else {
            let shown: Vec<String> = self.iter().take(MAX_PREVIEW).map(|v| v.to_string()).collect();
            write!(f, "[{}", shown.join(", "))?;
            if self.len() > MAX_PREVIEW {
                write!(f, ", …")?;
            }
            return writeln!(f, "]");
        };

        let mut headers: Vec<String> = (0..ncols.min(MAX_COLUMNS)).map(|c| c.to_string()).collect();
        if ncols > MAX_COLUMNS {
            headers.push("…".into());
        }
        let rows = (0..nrows.min(MAX_PREVIEW))
            .map(|r| {
                let mut cells: Vec<String> = self.row(r)[..ncols.min(MAX_COLUMNS)]
                    .iter()
                    .map(|v| v.to_string())
                    .collect();
                if ncols > MAX_COLUMNS {
                    cells.push("…".into());
                }
                (r.to_string(), cells)
            })
            .collect();
        print_table(f, headers, rows, nrows > MAX_PREVIEW)
    }
}

impl<T: Element + Display> Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "SparseMatrix<{}> {} × {} (nnz = {})",
            self.element_kind(),
            self.rows(),
            self.columns(),
            self.nnz()
        )?;
        let headers = vec!["row".to_string(), "col".to_string(), "value".to_string()];
        let rows = self
            .iter()
            .take(MAX_PREVIEW)
            .enumerate()
            .map(|(n, (i, j, v))| (n.to_string(), vec![i.to_string(), j.to_string(), v.to_string()]))
            .collect();
        print_table(f, headers, rows, self.nnz() > MAX_PREVIEW)
    }
}

impl<T: Display> Display for Nested<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Nested::Leaf(v) => write!(f, "{v}"),
            Nested::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl<T: Element + Display> Display for Operand<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Scalar(v) => write!(f, "{v}"),
            Operand::Sequence(n) => write!(f, "{n}"),
            Operand::Dense(m) => write!(f, "{m}"),
            Operand::Sparse(m) => write!(f, "{m}"),
        }
    }
}
