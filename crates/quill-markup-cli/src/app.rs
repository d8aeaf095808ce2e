use std::path::PathBuf;

use log::{debug, info};
use quill_markup_config::Config;
use quill_markup_engine::{
    DecorationView, DesignTokens, FoldRange, FoldSet, Span, TextBuffer, ThemeMode, ThemeStyles,
    ToggleOutcome, ViewUpdate, fold_block_at_position, theme_styles, toggle_all_blocks,
    unfold_block_at_position,
};
use xi_rope::Rope;

/// One rendered row of the document view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    /// A buffer line, by 1-based number.
    Line(usize),
    /// Placeholder for a folded range starting on `line`.
    Folded { line: usize, range: FoldRange },
}

impl Row {
    pub fn line(self) -> usize {
        match self {
            Row::Line(line) | Row::Folded { line, .. } => line,
        }
    }
}

pub struct App {
    pub path: PathBuf,
    pub rope: Rope,
    pub folds: FoldSet,
    pub mode: ThemeMode,
    pub styles: ThemeStyles,
    pub view: DecorationView,
    /// Index into `rows()` of the cursor row.
    pub cursor: usize,
    /// Index into `rows()` of the first row on screen.
    pub scroll: usize,
    /// Rows that fit on screen, updated on every draw.
    pub height: usize,
    pub status: String,
    tokens: DesignTokens,
}

impl App {
    pub fn new(path: PathBuf, text: &str, config: &Config) -> Self {
        let rope = Rope::from(text);
        let folds = FoldSet::new();
        let view = DecorationView::new(&rope, &[], &folds);
        let mut app = Self {
            path,
            rope,
            folds,
            mode: config.theme,
            styles: theme_styles(config.theme, &config.tokens),
            view,
            cursor: 0,
            scroll: 0,
            height: 24,
            status: String::new(),
            tokens: config.tokens.clone(),
        };
        app.refresh(ViewUpdate::ALL);
        app
    }

    /// Rows in display order. Lines hidden by a fold collapse into one
    /// placeholder row on the fold's first line.
    pub fn rows(&self) -> Vec<Row> {
        let mut rows = vec![];
        let count = self.rope.line_count();
        let mut n = 1;
        while n <= count {
            let line = self.rope.line(n);
            match self.folds.folded_at(line.span.start) {
                Some(range) => {
                    rows.push(Row::Folded { line: n, range });
                    n = self.rope.line_at(range.to).number + 1;
                }
                None => {
                    rows.push(Row::Line(n));
                    n += 1;
                }
            }
        }
        rows
    }

    /// Byte ranges of the unfolded rows currently on screen.
    ///
    /// Consecutive lines merge into one range; a folded row ends a range.
    pub fn visible_ranges(&self) -> Vec<Span> {
        let mut ranges: Vec<Span> = vec![];
        let mut open: Option<Span> = None;
        for row in self.rows().into_iter().skip(self.scroll).take(self.height) {
            match row {
                Row::Line(n) => {
                    let span = self.line_extent(n);
                    open = Some(match open {
                        Some(cur) => Span::new(cur.start, span.end),
                        None => span,
                    });
                }
                Row::Folded { .. } => ranges.extend(open.take()),
            }
        }
        ranges.extend(open);
        ranges
    }

    /// Span of line `n` including its line break, so adjacent lines touch.
    fn line_extent(&self, n: usize) -> Span {
        let start = self.rope.line(n).span.start;
        let end = if n < self.rope.line_count() {
            self.rope.line(n + 1).span.start
        } else {
            self.rope.len()
        };
        Span::new(start, end)
    }

    pub fn cursor_row(&self) -> Option<Row> {
        self.rows().get(self.cursor).copied()
    }

    pub fn cursor_line(&self) -> usize {
        self.cursor_row().map(Row::line).unwrap_or(1)
    }

    /// Byte offset of the start of the cursor line.
    pub fn cursor_offset(&self) -> usize {
        self.rope.line(self.cursor_line()).span.start
    }

    pub fn move_down(&mut self) {
        let last = self.rows().len().saturating_sub(1);
        self.cursor = (self.cursor + 1).min(last);
        self.follow_cursor();
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.follow_cursor();
    }

    pub fn set_height(&mut self, height: usize) {
        let height = height.max(1);
        if height != self.height {
            self.height = height;
            self.follow_cursor();
        }
    }

    fn follow_cursor(&mut self) {
        let before = self.scroll;
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + self.height {
            self.scroll = self.cursor + 1 - self.height;
        }
        if self.scroll != before {
            self.refresh(ViewUpdate {
                viewport_changed: true,
                ..Default::default()
            });
        }
    }

    /// Folds the block under the cursor.
    pub fn fold_at_cursor(&mut self) {
        let line = self.cursor_line();
        let pos = self.cursor_offset();
        if fold_block_at_position(&self.rope, &mut self.folds, pos) {
            self.status = "Folded block".into();
            self.folds_changed(line);
        } else {
            self.status = "Not inside a metadata block".into();
        }
    }

    /// Clicks the widget on the cursor line, if there is one.
    pub fn activate_cursor(&mut self) {
        let line = self.cursor_line();
        let pos = self.cursor_offset();
        let Some(widget) = self.view.widget_at(pos).copied() else {
            self.status = "Nothing to activate".into();
            return;
        };
        if widget.click(&self.rope, &mut self.folds) {
            self.status = "Folded block".into();
            self.folds_changed(line);
        }
    }

    pub fn unfold_at_cursor(&mut self) {
        let line = self.cursor_line();
        let pos = self.cursor_offset();
        let unfolded = match self.cursor_row() {
            Some(Row::Folded { range, .. }) => self.folds.unfold_at(range.from) > 0,
            Some(Row::Line(_)) => unfold_block_at_position(&self.rope, &mut self.folds, pos),
            None => false,
        };
        if unfolded {
            self.status = "Unfolded".into();
            self.folds_changed(line);
        } else {
            self.status = "Nothing to unfold".into();
        }
    }

    pub fn toggle_all(&mut self) {
        let line = self.cursor_line();
        self.status = match toggle_all_blocks(&self.rope, &mut self.folds) {
            ToggleOutcome::NoBlocks => "No metadata blocks".into(),
            ToggleOutcome::Folded => "Folded all blocks".into(),
            ToggleOutcome::Unfolded => "Unfolded all blocks".into(),
        };
        self.folds_changed(line);
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.styles = theme_styles(self.mode, &self.tokens);
        info!("switched to {:?} mode", self.mode);
        self.status = format!("{:?} mode", self.mode);
    }

    /// Keeps the cursor on the row holding `line`, then redecorates.
    fn folds_changed(&mut self, line: usize) {
        let rows = self.rows();
        self.cursor = rows
            .iter()
            .rposition(|row| row.line() <= line)
            .unwrap_or(0);
        self.scroll = self.scroll.min(self.cursor);
        self.refresh(ViewUpdate {
            folds_changed: true,
            viewport_changed: true,
            ..Default::default()
        });
    }

    fn refresh(&mut self, update: ViewUpdate) {
        let visible = self.visible_ranges();
        if self.view.update(&update, &self.rope, &visible, &self.folds) {
            debug!(
                "decoration pass {} over {} ranges",
                self.view.passes(),
                visible.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use quill_markup_engine::{FoldEffect, FoldHost};

    use super::*;

    const DOC: &str = "---\ntitle: Test\n---\n\nBody *text*\n";

    fn app() -> App {
        App::new(PathBuf::from("test.md"), DOC, &Config::default())
    }

    #[test]
    fn rows_without_folds() {
        let app = app();
        assert_eq!(
            app.rows(),
            (1..=6).map(Row::Line).collect::<Vec<_>>()
        );
        assert_eq!(app.visible_ranges(), vec![Span::new(0, DOC.len())]);
    }

    #[test]
    fn folding_collapses_rows_and_splits_ranges() {
        let mut app = app();
        app.fold_at_cursor();
        let rows = app.rows();
        assert_eq!(
            rows[0],
            Row::Folded {
                line: 1,
                range: FoldRange::new(0, 19)
            }
        );
        assert_eq!(rows[1..], [Row::Line(4), Row::Line(5), Row::Line(6)]);
        assert_eq!(app.visible_ranges(), vec![Span::new(20, DOC.len())]);
        assert!(app.view.widget_at(0).is_none());
    }

    #[test]
    fn enter_on_opening_delimiter_folds() {
        let mut app = app();
        app.activate_cursor();
        assert_eq!(app.folds.ranges(), &[FoldRange::new(0, 19)]);

        app.unfold_at_cursor();
        assert!(app.folds.is_empty());
        assert!(app.view.widget_at(0).is_some());
    }

    #[test]
    fn unfold_on_block_line_clears_partial_fold() {
        let mut app = app();
        app.folds
            .dispatch(vec![FoldEffect::Fold(FoldRange::new(5, 14))]);
        app.move_down();
        assert_eq!(app.cursor_row(), Some(Row::Line(2)));

        app.unfold_at_cursor();
        assert_eq!(app.status, "Unfolded");
        assert!(app.folds.is_empty());
    }

    #[test]
    fn unfold_outside_blocks_leaves_folds_alone() {
        let mut app = app();
        app.toggle_all();
        // Rows: folded block, blank line, body, trailing empty line.
        app.move_down();
        app.move_down();
        assert_eq!(app.cursor_row(), Some(Row::Line(5)));
        app.unfold_at_cursor();
        assert_eq!(app.status, "Nothing to unfold");
        assert_eq!(app.folds.ranges(), &[FoldRange::new(0, 19)]);
    }

    #[test]
    fn toggle_all_and_back() {
        let mut app = app();
        app.toggle_all();
        assert_eq!(app.status, "Folded all blocks");
        app.toggle_all();
        assert_eq!(app.status, "Unfolded all blocks");
        assert_eq!(app.rows().len(), 6);
    }

    #[test]
    fn cursor_scrolls_viewport() {
        let mut app = app();
        app.set_height(2);
        for _ in 0..4 {
            app.move_down();
        }
        assert_eq!(app.cursor, 4);
        assert_eq!(app.scroll, 3);
        assert_eq!(app.visible_ranges(), vec![Span::new(20, DOC.len())]);
    }

    #[test]
    fn mode_switch_recomputes_styles() {
        let mut app = app();
        let before = app.styles.clone();
        app.toggle_mode();
        assert_eq!(app.mode, ThemeMode::Dark);
        assert_ne!(app.styles, before);
    }
}
