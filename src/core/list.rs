//! # List Engine
//!
//! The stateful table renderer and selector over one record sequence.
//!
//! ```text
//! ListEngine<R>
//! ├── records: Vec<R>          // immutable after construction
//! ├── columns: Vec<ColumnSpec> // declarative, from config
//! ├── selected: Option<usize>  // cursor; None only when empty
//! └── scroll: usize            // first visible record index
//! ```
//!
//! Column layout is recomputed on every draw from the current terminal
//! width, so resizes need no bookkeeping here. Fitting works in two
//! phases: drop low-priority columns until the intrinsic widths fit, then
//! stretch the text columns into whatever is left (see [`fit_columns`]).
//!
//! Replacing data means constructing a new engine, never mutating one in
//! place; the caches in `core::state` own engine lifetimes.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::columns::{ColumnSpec, FieldId, Pad};
use crate::core::record::Record;

/// Flexible minimum content width for free-text columns. Their labels are
/// often longer, but under pressure they may shrink to this.
const TEXT_MIN_WIDTH: usize = 5;

/// One column that survived fitting, with its final cell width.
#[derive(Clone, Debug, PartialEq)]
pub struct FittedColumn<'a> {
    pub spec: &'a ColumnSpec,
    pub width: usize,
}

/// Intrinsic minimum width: the label, or the flexible text floor.
fn min_width(spec: &ColumnSpec) -> usize {
    let content_min = match spec.field {
        FieldId::Title | FieldId::ChannelTitle => TEXT_MIN_WIDTH,
        _ => 0,
    };
    spec.label.width().max(content_min)
}

/// Decides which columns to show at terminal width `width` and how wide
/// each cell is.
///
/// Columns are dropped one at a time in ascending priority order (ties:
/// the later-declared column drops first) until the intrinsic widths plus
/// one separator space between neighbours fit. The last remaining column
/// is never dropped; its content gets clipped instead. Leftover width goes
/// to the stretchy columns, split evenly with the remainder on the
/// earliest ones.
pub fn fit_columns(columns: &[ColumnSpec], width: usize) -> Vec<FittedColumn<'_>> {
    let mut kept: Vec<usize> = (0..columns.len()).collect();

    let total = |kept: &[usize]| -> usize {
        let cells: usize = kept.iter().map(|&i| min_width(&columns[i])).sum();
        cells + kept.len().saturating_sub(1)
    };

    while kept.len() > 1 && total(&kept) > width {
        // Reverse scan so the later-declared of a priority tie loses.
        let drop_pos = kept
            .iter()
            .enumerate()
            .rev()
            .min_by_key(|&(_, &i)| columns[i].priority)
            .map(|(pos, _)| pos);
        let Some(drop_pos) = drop_pos else { break };
        kept.remove(drop_pos);
    }

    let mut widths: Vec<usize> = kept.iter().map(|&i| min_width(&columns[i])).collect();
    let used = widths.iter().sum::<usize>() + kept.len().saturating_sub(1);
    if used < width {
        let stretchy: Vec<usize> = kept
            .iter()
            .enumerate()
            .filter(|&(_, &i)| columns[i].pad.is_stretchy())
            .map(|(pos, _)| pos)
            .collect();
        if !stretchy.is_empty() {
            let leftover = width - used;
            let share = leftover / stretchy.len();
            let extra = leftover % stretchy.len();
            for (n, &pos) in stretchy.iter().enumerate() {
                widths[pos] += share + usize::from(n < extra);
            }
        }
    }

    kept.iter()
        .zip(widths)
        .map(|(&i, width)| FittedColumn {
            spec: &columns[i],
            width,
        })
        .collect()
}

/// Pads or clips `content` to exactly `width` display cells.
///
/// `Pad::Left` flushes content right, `Pad::Right` flushes it left, and
/// `Pad::None` right-aligns (numeric convention). Overlong content is
/// clipped, never wrapped.
pub fn pad_cell(content: &str, width: usize, pad: Pad) -> String {
    let w = content.width();
    if w > width {
        let mut clipped = clip_to_width(content, width);
        // A clipped wide character can leave the cell short.
        for _ in 0..width.saturating_sub(clipped.width()) {
            clipped.push(' ');
        }
        return clipped;
    }
    let fill = " ".repeat(width - w);
    match pad {
        Pad::None | Pad::Left => format!("{fill}{content}"),
        Pad::Right => format!("{content}{fill}"),
    }
}

/// Clips to at most `width` display cells without splitting a wide
/// character.
fn clip_to_width(content: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in content.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out
}

/// Joins padded cells with single separator spaces, clipping the whole row
/// to `max_width` (only relevant in the single-column floor case, where
/// the one surviving column may still be wider than the terminal).
fn compose_row(cells: &[String], layout: &[FittedColumn], max_width: usize) -> String {
    let mut row = String::new();
    for (n, (cell, col)) in cells.iter().zip(layout).enumerate() {
        if n > 0 {
            row.push(' ');
        }
        row.push_str(&pad_cell(cell, col.width, col.spec.pad));
    }
    if row.width() > max_width {
        clip_to_width(&row, max_width)
    } else {
        row
    }
}

/// The core stateful table: an ordered record sequence, its column set,
/// and a single-selection cursor kept visible through scrolling.
pub struct ListEngine<R: Record> {
    records: Vec<R>,
    columns: Vec<ColumnSpec>,
    selected: Option<usize>,
    scroll: usize,
}

impl<R: Record> ListEngine<R> {
    pub fn new(records: Vec<R>, columns: Vec<ColumnSpec>) -> Self {
        let selected = if records.is_empty() { None } else { Some(0) };
        Self {
            records,
            columns,
            selected,
            scroll: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_record(&self) -> Option<&R> {
        self.selected.and_then(|i| self.records.get(i))
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Moves the cursor by `delta` rows, clamped to the record range.
    /// No wraparound; a no-op on an empty list.
    pub fn select_rel(&mut self, delta: i64) {
        let Some(cur) = self.selected else { return };
        let last = self.records.len() - 1;
        self.selected = Some(cur.saturating_add_signed(delta as isize).min(last));
    }

    /// Adjusts the scroll offset by the minimum amount that keeps the
    /// selection inside a window of `visible_rows` rows. Also re-clamps a
    /// stale offset after the window grew.
    pub fn ensure_visible(&mut self, visible_rows: usize) {
        if visible_rows == 0 {
            return;
        }
        let max_scroll = self.records.len().saturating_sub(visible_rows);
        if self.scroll > max_scroll {
            self.scroll = max_scroll;
        }
        let Some(sel) = self.selected else { return };
        if sel < self.scroll {
            self.scroll = sel;
        } else if sel >= self.scroll + visible_rows {
            self.scroll = sel + 1 - visible_rows;
        }
    }

    /// Header row text at terminal width `width`.
    pub fn header_text(&self, width: usize) -> String {
        let layout = fit_columns(&self.columns, width);
        let cells: Vec<String> = layout
            .iter()
            .map(|col| col.spec.label.clone())
            .collect();
        compose_row(&cells, &layout, width)
    }

    /// Data row text for the record at `index`, at terminal width `width`.
    pub fn record_text(&self, index: usize, width: usize) -> Option<String> {
        let layout = fit_columns(&self.columns, width);
        self.records
            .get(index)
            .map(|record| Self::row_for(record, &layout, width))
    }

    fn row_for(record: &R, layout: &[FittedColumn], width: usize) -> String {
        let cells: Vec<String> = layout
            .iter()
            .map(|col| record.display(col.spec.field))
            .collect();
        compose_row(&cells, layout, width)
    }

    /// Writes the header plus as many records as fit into `area`. The
    /// selected row is rendered reversed. Only touches the frame buffer;
    /// flushing is the event loop's job.
    pub fn draw(&mut self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = area.width as usize;
        let visible_rows = area.height.saturating_sub(1) as usize;
        self.ensure_visible(visible_rows);

        let layout = fit_columns(&self.columns, width);
        let header_cells: Vec<String> = layout
            .iter()
            .map(|col| col.spec.label.clone())
            .collect();

        let mut lines = Vec::with_capacity(visible_rows + 1);
        lines.push(Line::from(compose_row(&header_cells, &layout, width)));
        for (idx, record) in self
            .records
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(visible_rows)
        {
            let text = Self::row_for(record, &layout, width);
            if Some(idx) == self.selected {
                lines.push(Line::styled(
                    text,
                    Style::new().add_modifier(Modifier::REVERSED),
                ));
            } else {
                lines.push(Line::from(text));
            }
        }
        frame.render_widget(Paragraph::new(lines), area);
    }
}
