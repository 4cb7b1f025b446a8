//! Line editor for the guess being typed
//!
//! Five cells and an active-cell cursor. Typing fills the active cell and
//! moves right; backspace clears the active cell, or steps back and clears
//! the previous one when the active cell is empty.

use crate::core::WORD_LENGTH;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    cells: [Option<char>; WORD_LENGTH],
    cursor: usize,
}

impl InputLine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a letter into the active cell
    ///
    /// Only ASCII letters are accepted; anything else is ignored and `false`
    /// is returned. The cursor stays on the last cell once it gets there.
    pub fn type_letter(&mut self, c: char) -> bool {
        if !c.is_ascii_alphabetic() {
            return false;
        }

        self.cells[self.cursor] = Some(c.to_ascii_uppercase());
        if self.cursor < WORD_LENGTH - 1 {
            self.cursor += 1;
        }
        true
    }

    pub fn backspace(&mut self) {
        if self.cells[self.cursor].is_some() {
            self.cells[self.cursor] = None;
        } else if self.cursor > 0 {
            self.cursor -= 1;
            self.cells[self.cursor] = None;
        }
    }

    /// Make `index` the active cell, as when the cell is clicked
    ///
    /// Selecting a filled cell other than the last jumps to the cell after
    /// it. Out-of-range indices are ignored.
    pub fn select_cell(&mut self, index: usize) {
        if index >= WORD_LENGTH {
            return;
        }

        self.cursor = if self.cells[index].is_some() && index < WORD_LENGTH - 1 {
            index + 1
        } else {
            index
        };
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(WORD_LENGTH - 1);
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub const fn cells(&self) -> &[Option<char>; WORD_LENGTH] {
        &self.cells
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Filled cells joined in order
    #[must_use]
    pub fn text(&self) -> String {
        self.cells.iter().flatten().collect()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> InputLine {
        let mut line = InputLine::new();
        for c in s.chars() {
            line.type_letter(c);
        }
        line
    }

    #[test]
    fn typing_fills_and_advances() {
        let line = typed("ab");
        assert_eq!(line.text(), "AB");
        assert_eq!(line.cursor(), 2);
        assert!(!line.is_complete());
    }

    #[test]
    fn cursor_stays_on_last_cell() {
        let mut line = typed("abrir");
        assert!(line.is_complete());
        assert_eq!(line.cursor(), 4);

        // Overwrites the last cell
        line.type_letter('x');
        assert_eq!(line.text(), "ABRIX");
    }

    #[test]
    fn non_letters_ignored() {
        let mut line = InputLine::new();
        assert!(!line.type_letter('1'));
        assert!(!line.type_letter(' '));
        assert!(!line.type_letter('é'));
        assert!(line.is_empty());
        assert_eq!(line.cursor(), 0);
    }

    #[test]
    fn backspace_clears_active_cell_first() {
        let mut line = typed("abrir");
        line.backspace();
        assert_eq!(line.text(), "ABRI");
        assert_eq!(line.cursor(), 4);

        line.backspace();
        assert_eq!(line.text(), "ABR");
        assert_eq!(line.cursor(), 3);
    }

    #[test]
    fn backspace_at_start_does_nothing() {
        let mut line = InputLine::new();
        line.backspace();
        assert!(line.is_empty());
        assert_eq!(line.cursor(), 0);
    }

    #[test]
    fn selecting_filled_cell_jumps_past_it() {
        let mut line = typed("abc");
        line.select_cell(1);
        assert_eq!(line.cursor(), 2);

        line.select_cell(4);
        assert_eq!(line.cursor(), 4);
    }

    #[test]
    fn selecting_empty_cell_moves_there() {
        let mut line = typed("a");
        line.select_cell(3);
        assert_eq!(line.cursor(), 3);
        line.type_letter('z');
        assert_eq!(line.cells()[3], Some('Z'));
        // Gaps are allowed, but the line is not complete
        assert_eq!(line.text(), "AZ");
        assert!(!line.is_complete());
    }

    #[test]
    fn selecting_out_of_range_ignored() {
        let mut line = typed("ab");
        line.select_cell(9);
        assert_eq!(line.cursor(), 2);
    }

    #[test]
    fn arrow_movement_clamped() {
        let mut line = InputLine::new();
        line.move_left();
        assert_eq!(line.cursor(), 0);
        for _ in 0..10 {
            line.move_right();
        }
        assert_eq!(line.cursor(), 4);
    }

    #[test]
    fn clear_resets() {
        let mut line = typed("abr");
        line.clear();
        assert!(line.is_empty());
        assert_eq!(line.cursor(), 0);
    }
}
