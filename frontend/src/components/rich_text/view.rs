//! View for the rich-text editor: toolbar, Editor / Preview tabs, the
//! editable surface with its floating menu, and the word count footer.
//!
//! Toolbar buttons act on `mousedown` with the default prevented, so the
//! selection inside the surface survives the click.

use yew::html::Scope;
use yew::prelude::*;

use common::editor::{EditorCommand, BUBBLE_MENU, TOOLBAR};

use super::messages::Msg;
use super::state::{EditorTab, RichTextEditor};

pub fn view(editor: &RichTextEditor, ctx: &Context<RichTextEditor>) -> Html {
    let link = ctx.link();
    let props = ctx.props();
    let editing = editor.tab == EditorTab::Editor;

    html! {
        <div class={classes!("rte-root", props.read_only.then_some("read-only"))}>
            { build_toolbar(editor, link, props.read_only || !editing) }
            { build_tab_bar(editor, link) }

            // Kept mounted while previewing so the browser keeps its content.
            <div class="rte-surface" hidden={!editing}>
                { build_bubble_menu(editor, link, props.read_only) }
                <div
                    id={editor.id.clone()}
                    ref={editor.editor_ref.clone()}
                    class="rte-content"
                    contenteditable={(!props.read_only).to_string()}
                    role="textbox"
                    aria-multiline="true"
                    data-placeholder={props.placeholder.clone()}
                    oninput={link.callback(|_: InputEvent| Msg::Input)}
                    onkeyup={link.callback(|_: KeyboardEvent| Msg::SelectionChanged)}
                    onmouseup={link.callback(|_: MouseEvent| Msg::SelectionChanged)}
                    onblur={link.callback(|_: FocusEvent| Msg::Blur)}
                />
            </div>

            {
                if editing {
                    html! {}
                } else {
                    html! {
                        <div class="rte-preview">
                            { Html::from_html_unchecked(AttrValue::from(editor.last_emitted.clone())) }
                        </div>
                    }
                }
            }

            <footer class="rte-footer">
                { format!("{} words · {} characters", editor.stats.words, editor.stats.characters) }
            </footer>
        </div>
    }
}

fn build_toolbar(editor: &RichTextEditor, link: &Scope<RichTextEditor>, disabled: bool) -> Html {
    html! {
        <div class="icon-toolbar" role="toolbar">
            {
                for TOOLBAR.iter().enumerate().map(|(index, group)| html! {
                    <>
                        if index > 0 {
                            <span class="toolbar-separator" />
                        }
                        { for group.iter().map(|command| command_button(*command, editor, link, disabled)) }
                    </>
                })
            }
        </div>
    }
}

fn build_bubble_menu(editor: &RichTextEditor, link: &Scope<RichTextEditor>, read_only: bool) -> Html {
    let Some((top, center)) = editor.bubble.filter(|_| !read_only) else {
        return html! {};
    };
    let style = format!(
        "position: fixed; top: {}px; left: {}px; transform: translate(-50%, -100%);",
        top - 8.0,
        center
    );
    html! {
        <div class="rte-bubble" {style}>
            { for BUBBLE_MENU.iter().map(|command| command_button(*command, editor, link, false)) }
        </div>
    }
}

fn build_tab_bar(editor: &RichTextEditor, link: &Scope<RichTextEditor>) -> Html {
    let tab = |label: &'static str, target: EditorTab| {
        html! {
            <button
                class={classes!("tab-btn", (editor.tab == target).then_some("active"))}
                onclick={link.callback(move |_| Msg::SetTab(target))}
            >
                { label }
            </button>
        }
    };
    html! {
        <div class="tab-bar">
            { tab("Editor", EditorTab::Editor) }
            { tab("Preview", EditorTab::Preview) }
        </div>
    }
}

fn command_button(
    command: EditorCommand,
    editor: &RichTextEditor,
    link: &Scope<RichTextEditor>,
    disabled: bool,
) -> Html {
    let active = editor.active.contains(&command);
    html! {
        <button
            type="button"
            class={classes!("icon-btn", active.then_some("active"))}
            title={command.label()}
            aria-label={command.label()}
            aria-pressed={active.to_string()}
            {disabled}
            onmousedown={link.callback(move |e: MouseEvent| {
                e.prevent_default();
                Msg::Exec(command)
            })}
        >
            <i class="material-icons">{ command.icon() }</i>
        </button>
    }
}
