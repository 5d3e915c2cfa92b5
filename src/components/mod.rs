pub mod api_key_form;
pub mod badge_list;
pub mod grocery_list;
pub mod sidebar;
pub mod status_badge;
pub mod toast;
