use crate::{Color, Rect};

/// Draw list a widget fills in; the host engine turns it into real draw calls.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.nodes.push(SceneNode::Rect { rect, color });
    }

    pub fn text(&mut self, rect: Rect, text: impl Into<String>, color: Color, size: f32) {
        self.nodes.push(SceneNode::Text {
            rect,
            text: text.into(),
            color,
            size,
        });
    }

    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.nodes.iter().filter_map(|n| match n {
            SceneNode::Rect { rect, .. } => Some(rect),
            _ => None,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Rect { rect: Rect, color: Color },
    Text {
        rect: Rect,
        text: String,
        color: Color,
        size: f32,
    },
}
