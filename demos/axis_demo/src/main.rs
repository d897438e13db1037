use std::rc::Rc;

use trellis_core::*;
use trellis_text::ShapedText;
use trellis_ui::*;

/// The widgets a settings row can hold.
enum Widget {
    Field(Field),
    Gap(Spacer),
    Slider(Slider),
}

impl Element for Widget {
    fn is_visible(&self) -> bool {
        match self {
            Widget::Field(f) => f.is_visible(),
            Widget::Gap(g) => g.is_visible(),
            Widget::Slider(s) => s.is_visible(),
        }
    }
    fn preferred_size(&self, hint_x: f32, hint_y: f32) -> Size {
        match self {
            Widget::Field(f) => f.preferred_size(hint_x, hint_y),
            Widget::Gap(g) => g.preferred_size(hint_x, hint_y),
            Widget::Slider(s) => s.preferred_size(hint_x, hint_y),
        }
    }
    fn revision(&self) -> u64 {
        match self {
            Widget::Field(f) => f.revision(),
            Widget::Gap(g) => g.revision(),
            Widget::Slider(s) => s.revision(),
        }
    }
    fn resize(&mut self, width: f32, height: f32) {
        match self {
            Widget::Field(f) => f.resize(width, height),
            Widget::Gap(g) => g.resize(width, height),
            Widget::Slider(s) => s.resize(width, height),
        }
    }
    fn set_location(&mut self, x: f32, y: f32) {
        match self {
            Widget::Field(f) => f.set_location(x, y),
            Widget::Gap(g) => g.set_location(x, y),
            Widget::Slider(s) => s.set_location(x, y),
        }
    }
}

impl Widget {
    fn bounds(&self) -> Rect {
        match self {
            Widget::Field(f) => f.bounds(),
            Widget::Gap(g) => g.bounds(),
            Widget::Slider(s) => s.bounds(),
        }
    }

    /// Routes an event given in row coordinates to the widget under it.
    fn dispatch(&mut self, ev: &InputEvent) -> bool {
        let b = self.bounds();
        let local = match ev {
            InputEvent::Pointer(pe) => {
                let mut pe = pe.clone();
                pe.position = Vec2::new(pe.position.x - b.x, pe.position.y - b.y);
                InputEvent::Pointer(pe)
            }
            other => other.clone(),
        };
        match self {
            Widget::Field(f) => f.handle_input(&local),
            Widget::Slider(s) => s.handle_input(&local),
            Widget::Gap(_) => false,
        }
    }

    fn render(&self, scene: &mut Scene) {
        match self {
            Widget::Field(f) => f.render(scene),
            Widget::Slider(s) => s.render(scene),
            Widget::Gap(_) => {}
        }
    }
}

fn pointer(kind: PointerEventKind, x: f32, y: f32) -> InputEvent {
    InputEvent::Pointer(PointerEvent::new(kind, x, y))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let measure: Rc<dyn TextMeasure> = if std::env::args().any(|a| a == "--shaped") {
        Rc::new(ShapedText::new(16.0))
    } else {
        Rc::new(Monospace::default())
    };

    let field = Field::new("player one").with_measure(measure);
    let slider = Slider::new(0.25, 0.0, 1.0)?;
    field
        .defocused
        .subscribe(|t| log::info!("name committed: {t:?}"));
    slider
        .value
        .subscribe(|v| log::info!("volume changed to {v:.2}"));

    let mut row = vec![
        Widget::Field(field),
        Widget::Gap(Spacer::new(16.0, 1.0)),
        Widget::Slider(slider),
    ];
    let layout = AxisLayout::horizontal().align_left().off_equalize().gap(8);
    let lookup =
        |w: &Widget| matches!(w, Widget::Slider(_)).then_some(Constraint::stretched());

    let pref = layout.compute_size(&row, &lookup, 0.0, 0.0);
    log::info!("row wants {}x{}", pref.width, pref.height);
    layout.layout(&mut row, &lookup, 480.0, pref.height);
    for w in &row {
        log::info!("placed at {:?}", w.bounds());
    }

    // click at the end of the name, extend it, commit
    let name = row[0].bounds();
    let events = [
        pointer(
            PointerEventKind::Down(PointerButton::Primary),
            name.x + name.w,
            name.y + name.h / 2.0,
        ),
        InputEvent::Typed('!'),
        InputEvent::Key(KeyEvent::new(Key::Enter)),
    ];
    for ev in &events {
        row[0].dispatch(ev);
    }

    // drag the volume to three quarters
    let vol = row[2].bounds();
    row[2].dispatch(&pointer(
        PointerEventKind::Down(PointerButton::Primary),
        vol.x + vol.w * 0.5,
        vol.y + 1.0,
    ));
    row[2].dispatch(&pointer(
        PointerEventKind::Drag,
        vol.x + vol.w * 0.75,
        vol.y + 1.0,
    ));

    let mut scene = Scene::new();
    for w in &row {
        w.render(&mut scene);
    }
    for node in &scene.nodes {
        println!("{node:?}");
    }
    Ok(())
}
