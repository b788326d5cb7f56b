//! UI Components
//!
//! Reusable Leptos components.

mod agenda_view;
mod board_tab_bar;
mod card_checklist;
mod dashboard;
mod delete_confirm_button;
mod kanban_board;
mod new_card_form;
mod page_controls;
mod toast_stack;
mod user_admin;

pub use agenda_view::AgendaView;
pub use board_tab_bar::BoardTabBar;
pub use card_checklist::CardChecklist;
pub use dashboard::Dashboard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use kanban_board::KanbanBoard;
pub use new_card_form::NewCardForm;
pub use page_controls::PageControls;
pub use toast_stack::ToastStack;
pub use user_admin::UserAdmin;
