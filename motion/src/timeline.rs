//! Timeline entry model and per-index layout.
//!
//! Entries alternate sides on wide viewports: even indexes sit to the right of
//! the centre line and slide in from the right, odd ones mirror that. On
//! narrow viewports the line and markers disappear and cards stack.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use serde::{Deserialize, Serialize};

/// One experience record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

impl TimelineEntry {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        period: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self { title: title.into(), company: company.into(), period: period.into(), description: description.into() }
    }

    /// `"{company} | {period}"` subtitle line.
    #[must_use]
    pub fn meta_line(&self) -> String {
        format!("{} | {}", self.company, self.period)
    }
}

/// Which side of the centre line a card sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 { Self::Right } else { Self::Left }
    }

    /// Sign of the horizontal entrance offset: cards slide in from their own side.
    #[must_use]
    pub fn offset_sign(self) -> f64 {
        match self {
            Self::Right => 1.0,
            Self::Left => -1.0,
        }
    }

    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Placement of one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryLayout {
    pub side: Side,
    /// Centre marker and line are shown (wide viewports only).
    pub show_marker: bool,
}

impl EntryLayout {
    #[must_use]
    pub fn for_index(index: usize, is_mobile: bool) -> Self {
        Self { side: Side::for_index(index), show_marker: !is_mobile }
    }

    /// BEM classes for the entry row.
    #[must_use]
    pub fn row_class(&self) -> String {
        format!("timeline__entry timeline__entry--{}", self.side.modifier())
    }

    /// BEM classes for the card column.
    #[must_use]
    pub fn card_class(&self) -> String {
        format!("timeline__card timeline__card--{}", self.side.modifier())
    }
}

/// BEM classes for the timeline container; the centre line is desktop-only.
#[must_use]
pub fn container_class(is_mobile: bool) -> &'static str {
    if is_mobile { "timeline timeline--stacked" } else { "timeline timeline--split" }
}
