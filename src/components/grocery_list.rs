use leptos::prelude::*;

#[component]
pub fn GroceryList(#[prop(into)] items: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <div class="grocery-list">
            <h3>"Grocery List"</h3>
            <Show
                when=move || items.with(|i| !i.is_empty())
                fallback=|| view! { <p class="empty-state">"No ingredients yet. Generate a meal plan first."</p> }
            >
                <ul>
                    <For
                        each=move || items.get()
                        key=|item| item.clone()
                        children=|item| view! { <li>{item}</li> }
                    />
                </ul>
            </Show>
        </div>
    }
}
