use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<String>,
    pub set_theme: WriteSignal<String>,
}

/// Set or clear `data-theme` on `<html>`; "system" leaves it to CSS media queries.
pub fn apply_theme(theme: &str) {
    let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    match theme {
        "light" | "dark" => {
            let _ = html.set_attribute("data-theme", theme);
        }
        _ => {
            let _ = html.remove_attribute("data-theme");
        }
    }
}
