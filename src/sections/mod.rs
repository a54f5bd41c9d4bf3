pub mod customer;
pub mod driver;
pub mod vendor;

use yew::prelude::*;

/// Section titles render their final word in brand yellow.
pub(crate) fn highlighted_title(title: &str) -> Html {
    match title.rsplit_once(' ') {
        Some((head, last)) => html! {
            <>
                { head.to_string() }
                { " " }
                <span class="highlight">{ last.to_string() }</span>
            </>
        },
        None => html! { <span class="highlight">{ title.to_string() }</span> },
    }
}
