use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components in this architecture follow the React pattern:
/// - They receive data via props (struct fields), usually borrowed from
///   `EditorState`.
/// - They render to a `Frame` within a given `Rect`.
///
/// Rendering never touches `EditorState`; a frame is a pure function of the
/// props handed in.
pub trait Component {
    /// Render the component into the given area.
    fn render(&self, frame: &mut Frame, area: Rect);
}
