use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub page: usize,
    pub total_pages: usize,
    /// Page numbers to show; `None` renders an ellipsis.
    pub window: Vec<Option<usize>>,
    pub has_prev: bool,
    pub has_next: bool,
    pub on_page: Callback<usize>,
}

/// First / previous / numbered window / next / last controls.
pub struct Pagination;

impl Component for Pagination {
    type Message = ();
    type Properties = PaginationProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let go = |page: usize| {
            let on_page = props.on_page.clone();
            Callback::from(move |_: MouseEvent| on_page.emit(page))
        };

        html! {
            <nav class="pagination" aria-label="Pagination">
                { nav_button("first_page", "First page", !props.has_prev, go(1)) }
                { nav_button("chevron_left", "Previous page", !props.has_prev, go(props.page.saturating_sub(1).max(1))) }
                {
                    for props.window.iter().map(|entry| match entry {
                        Some(number) if *number == props.page => html! {
                            <button class="page-btn active" aria-current="page" disabled=true>
                                { number.to_string() }
                            </button>
                        },
                        Some(number) => html! {
                            <button class="page-btn" onclick={go(*number)}>{ number.to_string() }</button>
                        },
                        None => html! { <span class="page-gap">{"…"}</span> },
                    })
                }
                { nav_button("chevron_right", "Next page", !props.has_next, go((props.page + 1).min(props.total_pages))) }
                { nav_button("last_page", "Last page", !props.has_next, go(props.total_pages)) }
            </nav>
        }
    }
}

fn nav_button(icon: &str, label: &str, disabled: bool, on_click: Callback<MouseEvent>) -> Html {
    html! {
        <button class="icon-btn" title={label.to_string()} aria-label={label.to_string()} {disabled} onclick={on_click}>
            <i class="material-icons">{ icon.to_string() }</i>
        </button>
    }
}
