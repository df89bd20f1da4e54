pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Page skeleton: header with the search area, content column, footer.
///
/// ```text
/// +------------------------------------------+
/// |           Header (brand, search)          |
/// +------------------------------------------+
/// |                 children                  |
/// +------------------------------------------+
/// |                  Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <header::Header />
        <main class="main-content">{children()}</main>
        <footer::Footer />
    }
}
