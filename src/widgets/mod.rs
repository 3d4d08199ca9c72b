//! Cellgrid Widgets Module
//!
//! Interactive and free-standing widgets that write straight to a screen:
//! - MessageBox: modal framed dialog with wrapped, scrollable text
//! - DropDownMenu: modal single choice anchored at the cursor
//! - ProgressBar: percentage and bar on one line
//! - YesNo: inline yes/no prompt

pub mod drop_down;
pub mod message_box;
pub mod progress_bar;
pub mod yes_no;

pub use drop_down::{DropDownMenu, DropDownSession, DropLayout};
pub use message_box::{split_message, BoxRect, MessageBox, MessageBoxSession, Response, ResponseSet};
pub use progress_bar::ProgressBar;
pub use yes_no::YesNo;
