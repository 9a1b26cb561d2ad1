//! Status texts derived from instance state.

use ferry_locale::LocaleTable;

use crate::registry::Container;
use crate::selection::SelectionState;

/// Status line for a container given the current selection.
///
/// Containers other than the selection's owner get drop instructions.
/// Otherwise an empty container is described as empty, and anything else
/// gets selection instructions.
pub(crate) fn status_text<'a>(table: &'a LocaleTable, container: &Container, selection: &SelectionState) -> &'a str {
    if selection.owner().is_some_and(|owner| owner != container.id) {
        &table.drop_note
    } else if container.is_empty() {
        &table.empty_note
    } else {
        &table.selection_note
    }
}
