//! The fixed set of formatting commands and how each maps onto the browser
//! editing engine (`document.execCommand`).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorCommand {
    Undo,
    Redo,
    Paragraph,
    Heading(HeadingLevel),
    Bold,
    Italic,
    Strike,
    BulletList,
    OrderedList,
    Blockquote,
    CodeBlock,
    HorizontalRule,
    Align(Alignment),
}

/// Toolbar layout, one group per separator-delimited section.
pub const TOOLBAR: &[&[EditorCommand]] = &[
    &[EditorCommand::Undo, EditorCommand::Redo],
    &[
        EditorCommand::Paragraph,
        EditorCommand::Heading(HeadingLevel::H1),
        EditorCommand::Heading(HeadingLevel::H2),
        EditorCommand::Heading(HeadingLevel::H3),
    ],
    &[EditorCommand::Bold, EditorCommand::Italic, EditorCommand::Strike],
    &[
        EditorCommand::BulletList,
        EditorCommand::OrderedList,
        EditorCommand::Blockquote,
        EditorCommand::CodeBlock,
        EditorCommand::HorizontalRule,
    ],
    &[
        EditorCommand::Align(Alignment::Left),
        EditorCommand::Align(Alignment::Center),
        EditorCommand::Align(Alignment::Right),
        EditorCommand::Align(Alignment::Justify),
    ],
];

/// Reduced set shown in the floating menu over a selection.
pub const BUBBLE_MENU: &[EditorCommand] = &[
    EditorCommand::Bold,
    EditorCommand::Italic,
    EditorCommand::Strike,
    EditorCommand::Heading(HeadingLevel::H2),
];

impl EditorCommand {
    /// `execCommand` name and optional value argument.
    pub fn exec_args(&self) -> (&'static str, Option<&'static str>) {
        match self {
            EditorCommand::Undo => ("undo", None),
            EditorCommand::Redo => ("redo", None),
            EditorCommand::Paragraph => ("formatBlock", Some("<p>")),
            EditorCommand::Heading(HeadingLevel::H1) => ("formatBlock", Some("<h1>")),
            EditorCommand::Heading(HeadingLevel::H2) => ("formatBlock", Some("<h2>")),
            EditorCommand::Heading(HeadingLevel::H3) => ("formatBlock", Some("<h3>")),
            EditorCommand::Bold => ("bold", None),
            EditorCommand::Italic => ("italic", None),
            EditorCommand::Strike => ("strikeThrough", None),
            EditorCommand::BulletList => ("insertUnorderedList", None),
            EditorCommand::OrderedList => ("insertOrderedList", None),
            EditorCommand::Blockquote => ("formatBlock", Some("<blockquote>")),
            EditorCommand::CodeBlock => ("formatBlock", Some("<pre>")),
            EditorCommand::HorizontalRule => ("insertHorizontalRule", None),
            EditorCommand::Align(Alignment::Left) => ("justifyLeft", None),
            EditorCommand::Align(Alignment::Center) => ("justifyCenter", None),
            EditorCommand::Align(Alignment::Right) => ("justifyRight", None),
            EditorCommand::Align(Alignment::Justify) => ("justifyFull", None),
        }
    }

    /// `queryCommandState` name for commands that toggle, used to highlight
    /// the active buttons.
    pub fn state_query(&self) -> Option<&'static str> {
        match self {
            EditorCommand::Bold
            | EditorCommand::Italic
            | EditorCommand::Strike
            | EditorCommand::BulletList
            | EditorCommand::OrderedList
            | EditorCommand::Align(_) => Some(self.exec_args().0),
            _ => None,
        }
    }

    /// Block tag reported by `queryCommandValue("formatBlock")` when this
    /// block command is active.
    pub fn block_tag(&self) -> Option<&'static str> {
        match self {
            EditorCommand::Paragraph => Some("p"),
            EditorCommand::Heading(HeadingLevel::H1) => Some("h1"),
            EditorCommand::Heading(HeadingLevel::H2) => Some("h2"),
            EditorCommand::Heading(HeadingLevel::H3) => Some("h3"),
            EditorCommand::Blockquote => Some("blockquote"),
            EditorCommand::CodeBlock => Some("pre"),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EditorCommand::Undo => "Undo",
            EditorCommand::Redo => "Redo",
            EditorCommand::Paragraph => "Paragraph",
            EditorCommand::Heading(HeadingLevel::H1) => "Heading 1",
            EditorCommand::Heading(HeadingLevel::H2) => "Heading 2",
            EditorCommand::Heading(HeadingLevel::H3) => "Heading 3",
            EditorCommand::Bold => "Bold",
            EditorCommand::Italic => "Italic",
            EditorCommand::Strike => "Strikethrough",
            EditorCommand::BulletList => "Bullet list",
            EditorCommand::OrderedList => "Numbered list",
            EditorCommand::Blockquote => "Quote",
            EditorCommand::CodeBlock => "Code block",
            EditorCommand::HorizontalRule => "Divider",
            EditorCommand::Align(Alignment::Left) => "Align left",
            EditorCommand::Align(Alignment::Center) => "Align center",
            EditorCommand::Align(Alignment::Right) => "Align right",
            EditorCommand::Align(Alignment::Justify) => "Justify",
        }
    }

    /// Material icon name.
    pub fn icon(&self) -> &'static str {
        match self {
            EditorCommand::Undo => "undo",
            EditorCommand::Redo => "redo",
            EditorCommand::Paragraph => "notes",
            EditorCommand::Heading(HeadingLevel::H1) => "looks_one",
            EditorCommand::Heading(HeadingLevel::H2) => "looks_two",
            EditorCommand::Heading(HeadingLevel::H3) => "looks_3",
            EditorCommand::Bold => "format_bold",
            EditorCommand::Italic => "format_italic",
            EditorCommand::Strike => "format_strikethrough",
            EditorCommand::BulletList => "format_list_bulleted",
            EditorCommand::OrderedList => "format_list_numbered",
            EditorCommand::Blockquote => "format_quote",
            EditorCommand::CodeBlock => "code",
            EditorCommand::HorizontalRule => "horizontal_rule",
            EditorCommand::Align(Alignment::Left) => "format_align_left",
            EditorCommand::Align(Alignment::Center) => "format_align_center",
            EditorCommand::Align(Alignment::Right) => "format_align_right",
            EditorCommand::Align(Alignment::Justify) => "format_align_justify",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_menu_is_a_subset_of_the_toolbar() {
        let toolbar: Vec<EditorCommand> = TOOLBAR.iter().flat_map(|group| group.iter().copied()).collect();
        assert!(BUBBLE_MENU.iter().all(|command| toolbar.contains(command)));
        assert!(BUBBLE_MENU.len() < toolbar.len());
    }

    #[test]
    fn marks_report_their_state_query() {
        assert_eq!(EditorCommand::Bold.exec_args(), ("bold", None));
        assert_eq!(EditorCommand::Bold.state_query(), Some("bold"));
        assert_eq!(EditorCommand::Strike.state_query(), Some("strikeThrough"));
        assert_eq!(EditorCommand::HorizontalRule.state_query(), None);
    }

    #[test]
    fn headings_use_format_block() {
        let h3 = EditorCommand::Heading(HeadingLevel::H3);
        assert_eq!(h3.exec_args(), ("formatBlock", Some("<h3>")));
        assert_eq!(h3.block_tag(), Some("h3"));
    }
}
