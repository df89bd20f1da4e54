use leptos::prelude::*;

use crate::config;
use crate::shared::icons;

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="footer">
            <p class="footer__copyright">
                {format!(
                    "© {} {}. All rights reserved.",
                    current_year(),
                    config::BRAND_NAME
                )}
            </p>
            <div class="footer__links">
                <a
                    class="footer__link"
                    href=config::INSTAGRAM_URL
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="Instagram"
                >
                    {icons::icon("instagram")}
                    <span>"Instagram"</span>
                </a>
            </div>
        </footer>
    }
}
