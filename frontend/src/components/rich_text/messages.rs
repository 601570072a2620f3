use common::editor::EditorCommand;

use super::state::EditorTab;

pub enum Msg {
    Exec(EditorCommand),
    /// The editable surface changed; read it back and notify the parent.
    Input,
    SelectionChanged,
    Blur,
    SetTab(EditorTab),
}
