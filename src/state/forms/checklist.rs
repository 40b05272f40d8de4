//! Multi-select over the document catalog

use crate::email::DOCUMENT_CATALOG;

/// Tracks which catalog entries are ticked and in what order
#[derive(Debug, Clone, Default)]
pub struct DocumentChecklist {
    /// Highlighted catalog row
    pub cursor: usize,
    /// Catalog indices in the order they were ticked
    selected: Vec<usize>,
}

impl DocumentChecklist {
    pub fn row_count(&self) -> usize {
        DOCUMENT_CATALOG.len()
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.row_count() {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Tick or untick the highlighted entry
    pub fn toggle_current(&mut self) {
        self.toggle(self.cursor);
    }

    /// Tick or untick an entry; unticking keeps the order of the rest
    pub fn toggle(&mut self, index: usize) {
        if index >= self.row_count() {
            return;
        }
        if let Some(pos) = self.selected.iter().position(|&i| i == index) {
            self.selected.remove(pos);
        } else {
            self.selected.push(index);
        }
    }

    /// 1-based position of an entry in the selection order
    pub fn selection_rank(&self, index: usize) -> Option<usize> {
        self.selected.iter().position(|&i| i == index).map(|p| p + 1)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Selected labels in selection order
    pub fn selected_labels(&self) -> Vec<String> {
        self.selected
            .iter()
            .map(|&i| DOCUMENT_CATALOG[i].to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let checklist = DocumentChecklist::default();
        assert_eq!(checklist.cursor, 0);
        assert_eq!(checklist.selected_count(), 0);
        assert!(checklist.selected_labels().is_empty());
    }

    #[test]
    fn test_selection_order_not_catalog_order() {
        let mut checklist = DocumentChecklist::default();
        checklist.toggle(4);
        checklist.toggle(1);
        checklist.toggle(8);
        assert_eq!(
            checklist.selected_labels(),
            vec![
                DOCUMENT_CATALOG[4].to_string(),
                DOCUMENT_CATALOG[1].to_string(),
                DOCUMENT_CATALOG[8].to_string(),
            ]
        );
        assert_eq!(checklist.selection_rank(1), Some(2));
    }

    #[test]
    fn test_untick_keeps_remaining_order() {
        let mut checklist = DocumentChecklist::default();
        checklist.toggle(3);
        checklist.toggle(0);
        checklist.toggle(5);
        checklist.toggle(0);
        assert_eq!(checklist.selection_rank(0), None);
        assert_eq!(checklist.selection_rank(3), Some(1));
        assert_eq!(checklist.selection_rank(5), Some(2));
    }

    #[test]
    fn test_retick_moves_to_end() {
        let mut checklist = DocumentChecklist::default();
        checklist.toggle(2);
        checklist.toggle(6);
        checklist.toggle(2);
        checklist.toggle(2);
        assert_eq!(checklist.selection_rank(2), Some(2));
    }

    #[test]
    fn test_toggle_out_of_range_ignored() {
        let mut checklist = DocumentChecklist::default();
        checklist.toggle(10);
        assert_eq!(checklist.selected_count(), 0);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut checklist = DocumentChecklist::default();
        checklist.move_up();
        assert_eq!(checklist.cursor, 0);
        for _ in 0..20 {
            checklist.move_down();
        }
        assert_eq!(checklist.cursor, DOCUMENT_CATALOG.len() - 1);
    }

    #[test]
    fn test_toggle_current_uses_cursor() {
        let mut checklist = DocumentChecklist::default();
        checklist.move_down();
        checklist.toggle_current();
        assert_eq!(checklist.selection_rank(1), Some(1));
    }
}
