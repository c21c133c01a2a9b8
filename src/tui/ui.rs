use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::{EditorState, Focus, Session};
use crate::tui::component::Component;
use crate::tui::components::{Header, HelpBar, InputBox, ItemTable, StatusLine, WelcomePage};
use crate::tui::{Tab, TuiState};

/// Draw one frame. Reads state only.
pub fn draw_ui(frame: &mut Frame, state: &EditorState, tui: &TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(3), Min(0), Length(1), Length(3)]);
    let [header_area, main_area, status_area, help_area] = layout.areas(frame.area());

    Header::new(state.session, tui.tab).render(frame, header_area);

    match (state.session, tui.tab) {
        (Session::Editor, Tab::Home) => WelcomePage::new(state.rows.len()).render(frame, main_area),
        (Session::Editor, Tab::Inventory) => draw_inventory(frame, main_area, state),
        (Session::List, _) => table(state).render(frame, main_area),
        (Session::Add, _) | (Session::Remove, _) => {
            let [input_area, _] = Layout::vertical([Length(3), Min(0)]).areas(main_area);
            input(state).render(frame, input_area);
        }
    }

    StatusLine::new(state.last_error.as_ref(), &state.status_message).render(frame, status_area);
    HelpBar::new(state.session, state.focus, tui.tab).render(frame, help_area);
}

/// Table on the left, input on the right.
fn draw_inventory(frame: &mut Frame, area: Rect, state: &EditorState) {
    use Constraint::{Length, Min, Percentage};
    let [table_area, side_area] =
        Layout::horizontal([Percentage(60), Percentage(40)]).areas(area);
    let [input_area, _] = Layout::vertical([Length(3), Min(0)]).areas(side_area);

    table(state).render(frame, table_area);
    input(state).render(frame, input_area);
}

fn table(state: &EditorState) -> ItemTable<'_> {
    ItemTable::new(&state.rows, state.selected, state.focus == Focus::Table)
}

fn input(state: &EditorState) -> InputBox<'_> {
    let input = InputBox::new(&state.input, state.focus == Focus::Input, state.max_input_len);
    if state.session == Session::Remove {
        input.title(" Remove item ").placeholder("remove an item?")
    } else {
        input
    }
}
