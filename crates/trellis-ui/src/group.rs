use std::cell::Cell;

use slotmap::{SecondaryMap, SlotMap, new_key_type};
use smallvec::SmallVec;
use trellis_core::{Rect, Size};

use crate::layout::{AxisLayout, Constraint, Element};

new_key_type! {
    /// Handle to a child of a [`Group`].
    pub struct ElementId;
}

struct Child {
    id: ElementId,
    element: Box<dyn Element>,
}

impl Element for Child {
    fn is_visible(&self) -> bool {
        self.element.is_visible()
    }
    fn preferred_size(&self, hint_x: f32, hint_y: f32) -> Size {
        self.element.preferred_size(hint_x, hint_y)
    }
    fn revision(&self) -> u64 {
        self.element.revision()
    }
    fn resize(&mut self, width: f32, height: f32) {
        self.element.resize(width, height)
    }
    fn set_location(&mut self, x: f32, y: f32) {
        self.element.set_location(x, y)
    }
}

#[derive(Clone, Copy)]
struct CachedSize {
    hint_x: f32,
    hint_y: f32,
    revision: u64,
    size: Size,
}

/// Container that owns its children and their constraints and arranges them
/// with an [`AxisLayout`].
///
/// Children are positioned relative to the group's own origin. A group is an
/// [`Element`] itself, so groups nest: resizing a group lays out its children.
pub struct Group {
    layout: AxisLayout,
    ids: SlotMap<ElementId, ()>,
    children: SmallVec<[Child; 8]>,
    constraints: SecondaryMap<ElementId, Constraint>,
    visible: bool,
    bounds: Rect,
    /// Last answer of `preferred_size`, keyed by the hints and the children's
    /// combined revision.
    cached: Cell<Option<CachedSize>>,
}

impl Group {
    pub fn new(layout: AxisLayout) -> Self {
        Self {
            layout,
            ids: SlotMap::with_key(),
            children: SmallVec::new(),
            constraints: SecondaryMap::new(),
            visible: true,
            bounds: Rect::default(),
            cached: Cell::new(None),
        }
    }

    pub fn layout_config(&self) -> AxisLayout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: AxisLayout) {
        self.layout = layout;
        self.invalidate();
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Appends an unconstrained child.
    pub fn add(&mut self, element: impl Element + 'static) -> ElementId {
        let id = self.ids.insert(());
        self.children.push(Child {
            id,
            element: Box::new(element),
        });
        self.invalidate();
        id
    }

    pub fn add_with(
        &mut self,
        element: impl Element + 'static,
        constraint: Constraint,
    ) -> ElementId {
        let id = self.add(element);
        self.constraints.insert(id, constraint);
        id
    }

    /// Attaches (or with `None`, clears) the constraint of a child.
    pub fn set_constraint(&mut self, id: ElementId, constraint: Option<Constraint>) -> bool {
        if !self.ids.contains_key(id) {
            log::warn!("set_constraint on stale element {id:?}");
            return false;
        }
        match constraint {
            Some(c) => {
                self.constraints.insert(id, c);
            }
            None => {
                self.constraints.remove(id);
            }
        }
        self.invalidate();
        true
    }

    pub fn constraint(&self, id: ElementId) -> Option<Constraint> {
        self.constraints.get(id).copied()
    }

    pub fn remove(&mut self, id: ElementId) -> Option<Box<dyn Element>> {
        if self.ids.remove(id).is_none() {
            log::warn!("remove of stale element {id:?}");
            return None;
        }
        self.constraints.remove(id);
        let idx = self.position(id)?;
        self.invalidate();
        Some(self.children.remove(idx).element)
    }

    pub fn get(&self, id: ElementId) -> Option<&dyn Element> {
        let idx = self.position(id)?;
        Some(self.children[idx].element.as_ref())
    }

    /// Mutable access to a child. Drops the cached preferred size, since the
    /// caller may change what the child asks for.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut (dyn Element + 'static)> {
        let idx = self.position(id)?;
        self.invalidate();
        Some(self.children[idx].element.as_mut())
    }

    /// Forgets the cached preferred size.
    pub fn invalidate(&self) {
        self.cached.set(None);
    }

    /// Lays the children out inside the group's current size.
    pub fn layout_children(&mut self) {
        let Self {
            layout,
            children,
            constraints,
            bounds,
            ..
        } = self;
        let lookup = |c: &Child| constraints.get(c.id).copied();
        layout.layout(children.as_mut_slice(), &lookup, bounds.w, bounds.h);
    }

    fn position(&self, id: ElementId) -> Option<usize> {
        self.children.iter().position(|c| c.id == id)
    }
}

impl Element for Group {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn preferred_size(&self, hint_x: f32, hint_y: f32) -> Size {
        let revision = self.revision();
        if let Some(c) = self.cached.get()
            && c.hint_x == hint_x
            && c.hint_y == hint_y
            && c.revision == revision
        {
            return c.size;
        }
        let lookup = |c: &Child| self.constraints.get(c.id).copied();
        let size = self
            .layout
            .compute_size(self.children.as_slice(), &lookup, hint_x, hint_y);
        self.cached.set(Some(CachedSize {
            hint_x,
            hint_y,
            revision,
            size,
        }));
        size
    }

    /// Sum of the children's revisions, so a change anywhere below reaches
    /// the parent's cache too.
    fn revision(&self) -> u64 {
        self.children
            .iter()
            .fold(0u64, |acc, c| acc.wrapping_add(c.revision()))
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.bounds.w = width;
        self.bounds.h = height;
        self.layout_children();
    }

    fn set_location(&mut self, x: f32, y: f32) {
        self.bounds.x = x;
        self.bounds.y = y;
    }
}
