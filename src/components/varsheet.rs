//! Spritesheet with independently sized per-frame rectangles.
//!
//! A [`VariableSheet`] stores ordered rows of [`FrameRect`]s, each frame an
//! arbitrary sub-rectangle of the source texture. The cursor `(row, frame)`
//! is kept valid at all times: construction rejects empty rows, advancing
//! wraps row-end→next row and last-row→row 0, and direct cursor assignment
//! goes through [`VariableSheet::set_cursor`], which surfaces out-of-range
//! indices as [`SheetError`] instead of an unchecked fault.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One frame of a variable-frame sheet: a sub-rectangle of the source image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl FrameRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Errors from constructing or indexing a [`VariableSheet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetError {
    /// The sheet has no rows.
    EmptySheet,
    /// A row has no frames.
    EmptyRow { row: usize },
    /// Requested row is past the end.
    RowOutOfRange { row: usize, rows: usize },
    /// Requested frame is past the end of its row.
    FrameOutOfRange {
        row: usize,
        frame: usize,
        frames: usize,
    },
    /// The JSON definition did not parse.
    Parse(String),
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetError::EmptySheet => write!(f, "sheet has no rows"),
            SheetError::EmptyRow { row } => write!(f, "row {} has no frames", row),
            SheetError::RowOutOfRange { row, rows } => {
                write!(f, "row {} out of range (sheet has {} rows)", row, rows)
            }
            SheetError::FrameOutOfRange { row, frame, frames } => {
                write!(
                    f,
                    "frame {} out of range (row {} has {} frames)",
                    frame, row, frames
                )
            }
            SheetError::Parse(e) => write!(f, "failed to parse sheet definition: {}", e),
        }
    }
}

impl std::error::Error for SheetError {}

/// Animation over ordered rows of independently sized frames.
///
/// Rows and the cursor are private so the `(row, frame)` validity invariant
/// cannot be broken from outside.
#[derive(Debug, Clone, Component)]
pub struct VariableSheet {
    rows: Vec<Vec<FrameRect>>,
    current_row: usize,
    current_frame: usize,
}

impl VariableSheet {
    /// Build a sheet from rows of frames. Every row must hold at least one
    /// frame and there must be at least one row.
    pub fn new(rows: Vec<Vec<FrameRect>>) -> Result<Self, SheetError> {
        if rows.is_empty() {
            return Err(SheetError::EmptySheet);
        }
        for (row, frames) in rows.iter().enumerate() {
            if frames.is_empty() {
                return Err(SheetError::EmptyRow { row });
            }
        }
        Ok(Self {
            rows,
            current_row: 0,
            current_frame: 0,
        })
    }

    /// Parse a sheet definition from JSON: an array of rows, each an array of
    /// `{x, y, width, height}` frames.
    pub fn from_json(json: &str) -> Result<Self, SheetError> {
        let rows: Vec<Vec<FrameRect>> =
            serde_json::from_str(json).map_err(|e| SheetError::Parse(e.to_string()))?;
        Self::new(rows)
    }

    pub fn current_row(&self) -> usize {
        self.current_row
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The frame under the cursor. Infallible: the cursor invariant holds
    /// from construction onward.
    pub fn frame(&self) -> &FrameRect {
        &self.rows[self.current_row][self.current_frame]
    }

    /// Move the cursor directly. Out-of-range indices leave the cursor
    /// untouched and report which bound was violated.
    pub fn set_cursor(&mut self, row: usize, frame: usize) -> Result<(), SheetError> {
        let Some(frames) = self.rows.get(row) else {
            return Err(SheetError::RowOutOfRange {
                row,
                rows: self.rows.len(),
            });
        };
        if frame >= frames.len() {
            return Err(SheetError::FrameOutOfRange {
                row,
                frame,
                frames: frames.len(),
            });
        }
        self.current_row = row;
        self.current_frame = frame;
        Ok(())
    }

    /// Step to the next frame in the current row; at row end, move to the
    /// start of the next row, wrapping the last row back to row 0.
    pub fn advance_frame(&mut self) {
        self.current_frame += 1;
        if self.current_frame >= self.rows[self.current_row].len() {
            self.current_frame = 0;
            self.current_row += 1;
            if self.current_row >= self.rows.len() {
                self.current_row = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_row_sheet() -> VariableSheet {
        VariableSheet::new(vec![
            vec![
                FrameRect::new(0.0, 0.0, 16.0, 16.0),
                FrameRect::new(16.0, 0.0, 24.0, 16.0),
            ],
            vec![FrameRect::new(0.0, 16.0, 32.0, 20.0)],
        ])
        .unwrap()
    }

    #[test]
    fn test_new_rejects_empty_sheet() {
        assert_eq!(VariableSheet::new(vec![]).unwrap_err(), SheetError::EmptySheet);
    }

    #[test]
    fn test_new_rejects_empty_row() {
        let err = VariableSheet::new(vec![vec![FrameRect::new(0.0, 0.0, 1.0, 1.0)], vec![]])
            .unwrap_err();
        assert_eq!(err, SheetError::EmptyRow { row: 1 });
    }

    #[test]
    fn test_advance_walks_row_then_wraps_rows() {
        let mut sheet = two_row_sheet();
        assert_eq!((sheet.current_row(), sheet.current_frame()), (0, 0));
        sheet.advance_frame();
        assert_eq!((sheet.current_row(), sheet.current_frame()), (0, 1));
        sheet.advance_frame();
        assert_eq!((sheet.current_row(), sheet.current_frame()), (1, 0));
        sheet.advance_frame();
        assert_eq!((sheet.current_row(), sheet.current_frame()), (0, 0));
    }

    #[test]
    fn test_frame_follows_cursor() {
        let mut sheet = two_row_sheet();
        sheet.advance_frame();
        assert_eq!(*sheet.frame(), FrameRect::new(16.0, 0.0, 24.0, 16.0));
        sheet.advance_frame();
        assert_eq!(*sheet.frame(), FrameRect::new(0.0, 16.0, 32.0, 20.0));
    }

    #[test]
    fn test_set_cursor_valid() {
        let mut sheet = two_row_sheet();
        sheet.set_cursor(1, 0).unwrap();
        assert_eq!((sheet.current_row(), sheet.current_frame()), (1, 0));
    }

    #[test]
    fn test_set_cursor_row_out_of_range() {
        let mut sheet = two_row_sheet();
        let err = sheet.set_cursor(2, 0).unwrap_err();
        assert_eq!(err, SheetError::RowOutOfRange { row: 2, rows: 2 });
        assert_eq!((sheet.current_row(), sheet.current_frame()), (0, 0));
    }

    #[test]
    fn test_set_cursor_frame_out_of_range() {
        let mut sheet = two_row_sheet();
        let err = sheet.set_cursor(1, 1).unwrap_err();
        assert_eq!(
            err,
            SheetError::FrameOutOfRange {
                row: 1,
                frame: 1,
                frames: 1
            }
        );
        assert_eq!((sheet.current_row(), sheet.current_frame()), (0, 0));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            [{"x": 0.0, "y": 0.0, "width": 16.0, "height": 16.0}],
            [{"x": 0.0, "y": 16.0, "width": 24.0, "height": 20.0}]
        ]"#;
        let sheet = VariableSheet::from_json(json).unwrap();
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(*sheet.frame(), FrameRect::new(0.0, 0.0, 16.0, 16.0));
    }

    #[test]
    fn test_from_json_parse_error() {
        assert!(matches!(
            VariableSheet::from_json("not json"),
            Err(SheetError::Parse(_))
        ));
    }
}
