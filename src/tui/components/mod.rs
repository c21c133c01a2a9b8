//! # TUI Components
//!
//! All components are stateless and props-based: they borrow what they need
//! from `EditorState`/`TuiState` and draw it. Rendering never mutates state.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── header.rs        (Tabs or session title)
//! ├── item_table.rs    (Cached rows, selected row highlighted)
//! ├── input_box.rs     (Prompt + buffer + cursor)
//! ├── welcome.rs       (Home tab)
//! ├── status_line.rs   (Last error or status message)
//! └── help_bar.rs      (Key-binding hints)
//! ```

pub mod header;
pub mod help_bar;
pub mod input_box;
pub mod item_table;
pub mod status_line;
pub mod welcome;

pub use header::Header;
pub use help_bar::HelpBar;
pub use input_box::InputBox;
pub use item_table::ItemTable;
pub use status_line::StatusLine;
pub use welcome::WelcomePage;
