use std::cell::Cell;
use std::ops::Range;
use std::rc::Rc;

use trellis_core::prelude::*;

use crate::layout::Element;

/// Caret boundary nearest to `x` given ascending boundary positions.
/// Exactly halfway between two boundaries picks the right-hand one.
pub fn index_for_x(positions: &[f32], x: f32) -> usize {
    let n = positions.len();
    if n == 0 {
        return 0;
    }
    let i = positions.partition_point(|&p| p < x);
    if i == 0 {
        return 0;
    }
    if i == n {
        return n - 1;
    }
    if x - positions[i - 1] < positions[i] - x {
        i - 1
    } else {
        i
    }
}

struct FocusSession {
    /// Text when focus started; ESCAPE puts it back.
    initial: String,
}

/// Single-line text entry.
///
/// The cursor counts the character boundaries reported by the field's
/// [`TextMeasure`] (grapheme clusters for the stock measurers), so an accented
/// letter built from combining marks is stepped over and deleted as one.
/// Keys and typed characters are only accepted while focused; focus starts
/// with a click or [`Field::focus`] and ends with ENTER, ESCAPE or
/// [`Field::blur`].
pub struct Field {
    pub text: Signal<String>,
    /// Fires with the final text whenever focus ends.
    pub defocused: Signal<String>,
    measure: Rc<dyn TextMeasure>,
    theme: Theme,
    cursor: usize,
    session: Option<FocusSession>,
    enabled: bool,
    visible: bool,
    bounds: Rect,
    /// Bumped on every text change, wherever it comes from.
    revision: Rc<Cell<u64>>,
}

impl Field {
    pub fn new(initial: impl Into<String>) -> Self {
        let text = signal(initial.into());
        let revision = Rc::new(Cell::new(0u64));
        let bump = revision.clone();
        text.subscribe(move |_| bump.set(bump.get().wrapping_add(1)));
        Self {
            text,
            defocused: signal(String::new()),
            measure: Rc::new(Monospace::default()),
            theme: Theme::default(),
            cursor: 0,
            session: None,
            enabled: true,
            visible: true,
            bounds: Rect::default(),
            revision,
        }
    }

    pub fn with_measure(mut self, measure: Rc<dyn TextMeasure>) -> Self {
        self.measure = measure;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn is_focused(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Cursor position in characters, never past the end of the text
    /// even if the text was replaced from outside.
    pub fn cursor(&self) -> usize {
        self.cursor.min(self.metrics().len())
    }

    /// Gives this field keyboard focus, with the cursor just before the last
    /// character.
    pub fn focus(&mut self) {
        let cursor = self.metrics().len().saturating_sub(1);
        self.start_focus(cursor);
    }

    /// Ends focus, keeping the current text.
    pub fn blur(&mut self) {
        if self.session.take().is_none() {
            return;
        }
        log::debug!("field defocused");
        self.defocused.set(self.text.get());
    }

    /// Click in local coordinates: focuses and drops the cursor on the
    /// character boundary nearest to `x`.
    pub fn pointer_down(&mut self, x: f32, _y: f32) -> bool {
        if !self.enabled {
            return false;
        }
        let click_x = x - self.text_origin().x;
        let cursor = index_for_x(&self.metrics().positions, click_x);
        self.start_focus(cursor);
        true
    }

    /// Returns whether the key was consumed (the host should then suppress
    /// its default handling).
    pub fn key_down(&mut self, ev: &KeyEvent) -> bool {
        if !self.is_focused() {
            return false;
        }
        let m = self.metrics();
        let cursor = self.cursor.min(m.len());
        match ev.key {
            Key::Home => self.cursor = 0,
            Key::End => self.cursor = m.len(),
            Key::ArrowRight => self.cursor = (cursor + 1).min(m.len()),
            Key::ArrowLeft => self.cursor = cursor.saturating_sub(1),
            Key::Enter => self.blur(),
            Key::Escape => {
                if let Some(session) = self.session.as_ref() {
                    self.text.set(session.initial.clone());
                }
                self.blur();
            }
            Key::Backspace => {
                if cursor != 0 {
                    self.remove(m.byte_at(cursor - 1)..m.byte_at(cursor));
                    self.cursor = cursor - 1;
                }
            }
            Key::Delete => {
                if cursor < m.len() {
                    self.remove(m.byte_at(cursor)..m.byte_at(cursor + 1));
                }
            }
            _ => return false,
        }
        true
    }

    /// Inserts a typed character at the cursor.
    pub fn key_typed(&mut self, ch: char) -> bool {
        if !self.is_focused() || ch.is_control() {
            return false;
        }
        let at = self.metrics().byte_at(self.cursor());
        self.text.update(|t| t.insert(at, ch));
        // a combining mark joins the cluster before it
        let end = at + ch.len_utf8();
        self.cursor = self.metrics().byte_offsets.partition_point(|&b| b < end);
        true
    }

    pub fn handle_input(&mut self, ev: &InputEvent) -> bool {
        match ev {
            InputEvent::Pointer(pe) => match pe.event {
                PointerEventKind::Down(PointerButton::Primary) => {
                    self.pointer_down(pe.position.x, pe.position.y)
                }
                _ => false,
            },
            InputEvent::Key(ke) => self.key_down(ke),
            InputEvent::Typed(ch) => self.key_typed(*ch),
        }
    }

    /// Caret x relative to the text origin.
    pub fn cursor_x(&self) -> f32 {
        let m = self.metrics();
        m.x_at(self.cursor.min(m.len()))
    }

    pub fn render(&self, scene: &mut Scene) {
        let lh = self.measure.line_height();
        let origin = self.text_origin();
        let (x, y) = (self.bounds.x + origin.x, self.bounds.y + origin.y);
        let display = self.display_text();
        let width = self.measure.measure(&display).width();

        scene.fill_rect(self.bounds, self.theme.surface);
        scene.text(
            Rect::new(x, y, width, lh),
            display,
            self.theme.on_surface,
            self.theme.font_px,
        );
        if self.is_focused() {
            scene.fill_rect(
                Rect::new(x + self.cursor_x(), y, 1.0, lh),
                self.theme.cursor,
            );
        }
    }

    fn metrics(&self) -> TextMetrics {
        self.text.with(|t| self.measure.measure(t))
    }

    fn remove(&mut self, bytes: Range<usize>) {
        self.text.update(|t| t.replace_range(bytes, ""));
    }

    fn start_focus(&mut self, cursor: usize) {
        self.cursor = cursor;
        self.session = Some(FocusSession {
            initial: self.text.get(),
        });
        log::debug!("field focused, cursor at {}", self.cursor());
    }

    /// Never empty, so an empty field still measures one space wide.
    fn display_text(&self) -> String {
        let t = self.text.get();
        if t.is_empty() { " ".to_string() } else { t }
    }

    /// Local position of the text's top-left corner.
    fn text_origin(&self) -> Vec2 {
        let lh = self.measure.line_height();
        Vec2::new(
            self.theme.field_padding_x,
            ((self.bounds.h - lh) / 2.0).max(0.0),
        )
    }
}

impl Element for Field {
    fn is_visible(&self) -> bool {
        self.visible
    }
    fn revision(&self) -> u64 {
        self.revision.get()
    }
    fn preferred_size(&self, _hint_x: f32, _hint_y: f32) -> Size {
        let text_w = self.measure.measure(&self.display_text()).width();
        Size::new(
            text_w + self.theme.field_padding_x * 2.0,
            self.measure.line_height(),
        )
    }
    fn resize(&mut self, width: f32, height: f32) {
        self.bounds.w = width;
        self.bounds.h = height;
    }
    fn set_location(&mut self, x: f32, y: f32) {
        self.bounds.x = x;
        self.bounds.y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn field(text: &str) -> Field {
        // 10px per cluster, 4px padding from the default theme
        Field::new(text).with_measure(Rc::new(Monospace::new(10.0, 20.0)))
    }

    fn press(f: &mut Field, key: Key) -> bool {
        f.key_down(&KeyEvent::new(key))
    }

    #[test]
    fn test_index_for_x() {
        let p = [0.0, 10.0, 20.0, 30.0];
        assert_eq!(index_for_x(&p, -5.0), 0);
        assert_eq!(index_for_x(&p, 0.0), 0);
        assert_eq!(index_for_x(&p, 4.0), 0);
        assert_eq!(index_for_x(&p, 6.0), 1);
        assert_eq!(index_for_x(&p, 15.0), 2);
        assert_eq!(index_for_x(&p, 30.0), 3);
        assert_eq!(index_for_x(&p, 99.0), 3);
        assert_eq!(index_for_x(&[], 5.0), 0);
    }

    #[test]
    fn test_focus_places_cursor_before_last() {
        let mut f = field("hello");
        assert!(!f.is_focused());
        f.focus();
        assert!(f.is_focused());
        assert_eq!(f.cursor(), 4);

        let mut empty = field("");
        empty.focus();
        assert_eq!(empty.cursor(), 0);
    }

    #[test]
    fn test_pointer_picks_nearest_boundary() {
        let mut f = field("hello");
        assert!(f.pointer_down(4.0 + 23.0, 5.0));
        assert!(f.is_focused());
        assert_eq!(f.cursor(), 2);

        f.pointer_down(4.0 + 25.0, 5.0);
        assert_eq!(f.cursor(), 3);

        f.pointer_down(4.0 + 80.0, 5.0);
        assert_eq!(f.cursor(), 5);

        f.pointer_down(0.0, 5.0);
        assert_eq!(f.cursor(), 0);
    }

    #[test]
    fn test_disabled_ignores_pointer() {
        let mut f = field("hello");
        f.set_enabled(false);
        assert!(!f.pointer_down(20.0, 5.0));
        assert!(!f.is_focused());
    }

    #[test]
    fn test_cursor_keys() {
        let mut f = field("abc");
        f.focus();
        assert!(press(&mut f, Key::Home));
        assert_eq!(f.cursor(), 0);
        press(&mut f, Key::ArrowLeft);
        assert_eq!(f.cursor(), 0);
        press(&mut f, Key::ArrowRight);
        assert_eq!(f.cursor(), 1);
        press(&mut f, Key::End);
        assert_eq!(f.cursor(), 3);
        press(&mut f, Key::ArrowRight);
        assert_eq!(f.cursor(), 3);
        assert!(!press(&mut f, Key::Tab));
        assert!(!press(&mut f, Key::Character('x')));
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut f = field("abcd");
        f.focus();
        press(&mut f, Key::Home);
        press(&mut f, Key::Backspace);
        assert_eq!(f.text.get(), "abcd");

        press(&mut f, Key::ArrowRight);
        press(&mut f, Key::ArrowRight);
        press(&mut f, Key::Backspace);
        assert_eq!(f.text.get(), "acd");
        assert_eq!(f.cursor(), 1);

        press(&mut f, Key::Delete);
        assert_eq!(f.text.get(), "ad");
        assert_eq!(f.cursor(), 1);

        press(&mut f, Key::End);
        press(&mut f, Key::Delete);
        assert_eq!(f.text.get(), "ad");
    }

    #[test]
    fn test_typing_inserts_at_cursor() {
        let mut f = field("ac");
        assert!(!f.key_typed('x'));
        assert_eq!(f.text.get(), "ac");

        f.focus();
        assert!(f.key_typed('b'));
        assert_eq!(f.text.get(), "abc");
        assert_eq!(f.cursor(), 2);
        assert!(!f.key_typed('\u{8}'));
    }

    #[test]
    fn test_clusters_edit_as_one() {
        let mut f = field("ae\u{301}");
        f.focus();
        press(&mut f, Key::End);
        assert_eq!(f.cursor(), 2);
        press(&mut f, Key::Backspace);
        assert_eq!(f.text.get(), "a");

        let mut g = field("e");
        g.focus();
        press(&mut g, Key::End);
        g.key_typed('\u{301}');
        assert_eq!(g.text.get(), "e\u{301}");
        assert_eq!(g.cursor(), 1);
    }

    #[test]
    fn test_escape_restores_and_defocuses() {
        let mut f = field("keep");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        f.defocused.subscribe(move |t| seen_clone.borrow_mut().push(t.clone()));

        f.focus();
        press(&mut f, Key::End);
        f.key_typed('!');
        assert_eq!(f.text.get(), "keep!");
        press(&mut f, Key::Escape);
        assert!(!f.is_focused());
        assert_eq!(f.text.get(), "keep");

        f.focus();
        press(&mut f, Key::End);
        f.key_typed('?');
        press(&mut f, Key::Enter);
        assert_eq!(f.text.get(), "keep?");
        assert_eq!(*seen.borrow(), vec!["keep".to_string(), "keep?".to_string()]);

        // keys after focus ends are ignored
        assert!(!press(&mut f, Key::Backspace));
        assert_eq!(f.text.get(), "keep?");
    }

    #[test]
    fn test_external_text_change_clamps_cursor() {
        let mut f = field("hello");
        f.focus();
        press(&mut f, Key::End);
        f.text.set("hi".into());
        assert_eq!(f.cursor(), 2);
        f.key_typed('!');
        assert_eq!(f.text.get(), "hi!");
    }

    #[test]
    fn test_handle_input_dispatch() {
        let mut f = field("ab");
        let down = InputEvent::Pointer(PointerEvent::new(
            PointerEventKind::Down(PointerButton::Primary),
            4.0 + 20.0,
            0.0,
        ));
        assert!(f.handle_input(&down));
        assert_eq!(f.cursor(), 2);
        assert!(f.handle_input(&InputEvent::Typed('c')));
        assert!(f.handle_input(&InputEvent::Key(KeyEvent::new(Key::Home))));
        assert_eq!(f.cursor(), 0);
        assert_eq!(f.text.get(), "abc");
    }

    /// Treats every two bytes of ASCII as one character.
    struct Pairs;

    impl TextMeasure for Pairs {
        fn measure(&self, text: &str) -> TextMetrics {
            let mut byte_offsets: Vec<usize> = (0..text.len()).step_by(2).collect();
            byte_offsets.push(text.len());
            let positions = (0..byte_offsets.len()).map(|i| i as f32 * 10.0).collect();
            TextMetrics {
                positions,
                byte_offsets,
            }
        }
        fn line_height(&self) -> f32 {
            20.0
        }
    }

    #[test]
    fn test_edits_follow_measured_boundaries() {
        let mut f = Field::new("abcdef").with_measure(Rc::new(Pairs));
        f.focus();
        assert_eq!(f.cursor(), 2);
        press(&mut f, Key::Backspace);
        assert_eq!(f.text.get(), "abef");
        assert_eq!(f.cursor(), 1);

        press(&mut f, Key::Delete);
        assert_eq!(f.text.get(), "ab");

        f.key_typed('x');
        assert_eq!(f.text.get(), "abx");
        assert_eq!(f.cursor(), 2);
        assert_eq!(f.cursor_x(), 20.0);
    }

    #[test]
    fn test_revision_tracks_text_changes() {
        let f = field("ab");
        let text = f.text.clone();
        let before = f.revision();
        text.set("a much longer name".into());
        assert_ne!(f.revision(), before);
    }

    #[test]
    fn test_preferred_size_and_render() {
        let mut f = field("");
        assert_eq!(f.preferred_size(0.0, 0.0), Size::new(18.0, 20.0));

        f.text.set("abc".into());
        assert_eq!(f.preferred_size(0.0, 0.0), Size::new(38.0, 20.0));

        f.set_location(100.0, 50.0);
        f.resize(60.0, 30.0);
        let mut scene = Scene::new();
        f.render(&mut scene);
        // background + text, no cursor while unfocused
        assert_eq!(scene.nodes.len(), 2);

        f.focus();
        let mut scene = Scene::new();
        f.render(&mut scene);
        let cursor = scene.rects().last().copied().unwrap();
        assert_eq!(cursor, Rect::new(100.0 + 4.0 + 20.0, 55.0, 1.0, 20.0));
    }
}
