//! The four-field matrix entry and the read-out of the current basis.

use std::fmt;

use crate::foundation::core::{Basis, Matrix2};
use crate::foundation::error::{LintransError, LintransResult};

/// Field position in row order: `[[A, B], [C, D]]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MatrixField {
    /// Top left.
    A,
    /// Top right.
    B,
    /// Bottom left.
    C,
    /// Bottom right.
    D,
}

impl MatrixField {
    /// All fields in row order.
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Position in row order.
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }
}

/// Raw text of the four matrix fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatrixInput {
    fields: [String; 4],
}

impl Default for MatrixInput {
    fn default() -> Self {
        Self::from_matrix(&Matrix2::IDENTITY)
    }
}

impl MatrixInput {
    /// Fields from raw text, in row order.
    pub fn new(a: &str, b: &str, c: &str, d: &str) -> Self {
        Self {
            fields: [a, b, c, d].map(str::to_owned),
        }
    }

    /// Parse `"a,b,c,d"` (whitespace around entries allowed). Missing entries stay empty and
    /// surplus entries stay in the last field, so both leave the input invalid.
    pub fn from_csv(s: &str) -> Self {
        let mut input = Self::new("", "", "", "");
        for (slot, part) in input.fields.iter_mut().zip(s.splitn(4, ',')) {
            *slot = part.trim().to_owned();
        }
        input
    }

    /// Fields showing `m` the way the readout formats it.
    pub fn from_matrix(m: &Matrix2) -> Self {
        let [[a, b], [c, d]] = m.rows();
        Self {
            fields: [a, b, c, d].map(format_entry),
        }
    }

    /// Raw text of `field`.
    pub fn field(&self, field: MatrixField) -> &str {
        &self.fields[field.index()]
    }

    /// Replace the text of `field`.
    pub fn set_field(&mut self, field: MatrixField, text: impl Into<String>) {
        self.fields[field.index()] = text.into();
    }

    /// `field` holds a finite number.
    pub fn is_field_valid(&self, field: MatrixField) -> bool {
        parse_entry(self.field(field)).is_some()
    }

    /// `true` only when every field holds a finite number.
    pub fn is_valid(&self) -> bool {
        MatrixField::ALL.iter().all(|&f| self.is_field_valid(f))
    }

    /// The typed matrix, `None` if any field is invalid.
    pub fn parse(&self) -> Option<Matrix2> {
        let [a, b, c, d] = [
            parse_entry(&self.fields[0])?,
            parse_entry(&self.fields[1])?,
            parse_entry(&self.fields[2])?,
            parse_entry(&self.fields[3])?,
        ];
        Some(Matrix2::from_rows([[a, b], [c, d]]))
    }

    /// Like [`MatrixInput::parse`], naming the first invalid field in the error.
    pub fn try_parse(&self) -> LintransResult<Matrix2> {
        if let Some(bad) = MatrixField::ALL
            .into_iter()
            .find(|&f| !self.is_field_valid(f))
        {
            return Err(LintransError::input(format!(
                "matrix field {bad:?} is not a number: {:?}",
                self.field(bad)
            )));
        }
        self.parse()
            .ok_or_else(|| LintransError::input("matrix fields are not numbers"))
    }
}

fn parse_entry(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// At most two decimals, no trailing zeros, and no negative zero.
pub fn format_entry(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        s
    };
    if s == "-0" { "0".to_owned() } else { s }
}

/// The current basis as displayed next to the grid.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct MatrixReadout {
    /// Formatted entries in row order.
    pub rows: [[String; 2]; 2],
}

impl MatrixReadout {
    /// Read out the columns of `basis`.
    pub fn from_basis(basis: &Basis) -> Self {
        let [[a, b], [c, d]] = basis.to_matrix().rows();
        Self {
            rows: [
                [format_entry(a), format_entry(b)],
                [format_entry(c), format_entry(d)],
            ],
        }
    }
}

impl fmt::Display for MatrixReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [[a, b], [c, d]] = &self.rows;
        write!(f, "[[{a}, {b}], [{c}, {d}]]")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/matrix.rs"]
mod tests;
