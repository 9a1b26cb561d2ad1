//! Built-in translation tables.

use crate::table::LocaleTable;

/// Key of the table every negotiation falls back to.
pub const DEFAULT_LOCALE: &str = "en";

/// The English table registered under [`DEFAULT_LOCALE`].
pub fn english() -> LocaleTable {
    LocaleTable {
        role_description: "drag and drop list".to_string(),
        empty_note: "Empty. Select items in another list, then move to this list to drop them here."
            .to_string(),
        selection_note: "Press Space or Enter to select an item. Hold Shift to select a range, \
                         or Control to add items one at a time. Press Escape to clear the selection."
            .to_string(),
        drop_note: "Press Enter to drop the selected items here. Hold Control while pressing Enter \
                    to keep the order in which they were selected."
            .to_string(),
        sort_number: "selection {number}".to_string(),
        selected_count: "{count} {items} selected".to_string(),
        dropped_count: "{count} {items} dropped".to_string(),
        item_singular: "item".to_string(),
        item_plural: "items".to_string(),
    }
}
