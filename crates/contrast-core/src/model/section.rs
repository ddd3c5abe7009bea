use serde::Serialize;

use super::row::Row;
use crate::errors::{ContrastError, Result};

/// A named subtree of the report body
///
/// A section owns its rows and subsections outright; order is document
/// order and is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    title: String,
    rows: Vec<Row>,
    subsections: Vec<Section>,
}

impl Section {
    /// Create a section from a title and its already ordered children
    ///
    /// Both collections may be empty; such a section renders as an empty body.
    ///
    /// # Errors
    /// * `EmptyTitle` - If `title` is blank
    pub fn new(
        title: impl Into<String>,
        rows: Vec<Row>,
        subsections: Vec<Section>,
    ) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ContrastError::EmptyTitle { entity: "Section" });
        }
        Ok(Self {
            title,
            rows,
            subsections,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn subsections(&self) -> &[Section] {
        &self.subsections
    }

    /// True when the section has neither rows nor subsections
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.subsections.is_empty()
    }

    /// Number of rows in this section and all nested subsections
    pub fn row_count(&self) -> usize {
        self.rows.len() + self.subsections.iter().map(Section::row_count).sum::<usize>()
    }

    /// Number of nested subsections at every depth, not counting `self`
    pub fn section_count(&self) -> usize {
        self.subsections
            .iter()
            .map(|s| 1 + s.section_count())
            .sum()
    }

    /// Depth-first pre-order walk: the section, its rows, then each
    /// subsection recursively, closed by an `Exit` event.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![Frame {
                section: self,
                depth: 0,
                state: FrameState::Start,
            }],
        }
    }
}

/// One step of the canonical section walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEvent<'a> {
    Enter { depth: usize, section: &'a Section },
    Row { depth: usize, row: &'a Row },
    Exit { depth: usize, section: &'a Section },
}

/// Iterator returned by [`Section::walk`]
///
/// Uses an explicit stack so deep contract trees cannot overflow the call stack.
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<Frame<'a>>,
}

#[derive(Debug, Clone)]
struct Frame<'a> {
    section: &'a Section,
    depth: usize,
    state: FrameState,
}

#[derive(Debug, Clone, Copy)]
enum FrameState {
    Start,
    Rows(usize),
    Subsections(usize),
}

impl<'a> Iterator for Walk<'a> {
    type Item = WalkEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let section = frame.section;
            let depth = frame.depth;
            let state = frame.state;

            match state {
                FrameState::Start => {
                    frame.state = FrameState::Rows(0);
                    return Some(WalkEvent::Enter { depth, section });
                }
                FrameState::Rows(i) => match section.rows.get(i) {
                    Some(row) => {
                        frame.state = FrameState::Rows(i + 1);
                        return Some(WalkEvent::Row { depth, row });
                    }
                    None => frame.state = FrameState::Subsections(0),
                },
                FrameState::Subsections(i) => match section.subsections.get(i) {
                    Some(child) => {
                        frame.state = FrameState::Subsections(i + 1);
                        self.stack.push(Frame {
                            section: child,
                            depth: depth + 1,
                            state: FrameState::Start,
                        });
                    }
                    None => {
                        self.stack.pop();
                        return Some(WalkEvent::Exit { depth, section });
                    }
                },
            }
        }
    }
}
