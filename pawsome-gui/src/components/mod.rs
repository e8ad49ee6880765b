//! Pieces of the main window.
//!
//! Everything except [`playdate_dialog`] is a plain view function over session data. The
//! dialog keeps its own form state and reports back through an [`playdate_dialog::Action`].

pub mod match_list;
pub mod match_posts;
pub mod nav_bar;
pub mod playdate_dialog;
pub mod playdate_list;
pub mod profile_card;
