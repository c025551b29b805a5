//! UI Components
//!
//! Pages, layout and receipt widgets.

mod auth_page;
mod button;
mod delete_confirm_button;
mod header;
mod home_view;
mod item_list;
mod item_row;
mod receipt_card;
mod receipt_editor;
mod receipt_list;
mod search_dropdown;
mod sidebar;

pub use auth_page::AuthPage;
pub use header::Header;
pub use home_view::HomeView;
pub use receipt_list::ReceiptList;
pub use sidebar::SideBar;
