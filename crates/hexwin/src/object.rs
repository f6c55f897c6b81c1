//! The window-object model.
//!
//! Windows, layouts and widgets all implement [`WinObject`], a fixed capability
//! set covering dimension negotiation, position assignment, drawing and event
//! handling. Composite objects own their children and expose them through
//! [`WinObject::child`] / [`WinObject::child_mut`] so a capture target can be
//! resolved by [`ObjectId`] without holding references across events.
//!
//! # Example
//!
//! ```ignore
//! use hexwin::{ObjectId, Painter, PointerEvent, Point, Rect, Size, WinObject};
//!
//! struct Swatch {
//!     id: ObjectId,
//!     rect: Rect,
//! }
//!
//! impl WinObject for Swatch {
//!     fn id(&self) -> ObjectId { self.id }
//!     fn rect(&self) -> Rect { self.rect }
//!     fn get_dimensions(&self, constraint: Size) -> Size { constraint.max(Size::new(4, 4)) }
//!     fn set_dimensions(&mut self, size: Size) { self.rect.w = size.w; self.rect.h = size.h; }
//!     fn set_position(&mut self, pos: Point) { self.rect.x = pos.x; self.rect.y = pos.y; }
//!     fn draw(&self, painter: &mut dyn Painter) { painter.fill_rect(self.rect); }
//!     fn handle_event(&mut self, _event: &PointerEvent) -> Option<ObjectId> { None }
//! }
//! ```

use crate::draw::Painter;
use crate::events::PointerEvent;
use crate::primitives::{Point, Rect, Size};
use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-unique identity of a window object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Allocate a fresh id
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Coarse classification of a window object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Window,
    Layout,
    Widget,
}

/// Upcast to [`Any`] so a known child can be accessed by its concrete type
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Capability set shared by windows, layouts and widgets
pub trait WinObject: AsAny {
    fn id(&self) -> ObjectId;

    fn kind(&self) -> ObjectKind {
        ObjectKind::Widget
    }

    /// Currently assigned rectangle
    fn rect(&self) -> Rect;

    /// Smallest size this object accepts, per axis no smaller than `constraint`.
    ///
    /// Passing [`Size::ZERO`] yields the true minimum. Passing the current size
    /// yields the current size unless the minimum is larger.
    fn get_dimensions(&self, constraint: Size) -> Size;

    /// Store a new size; composites re-run their layout here
    fn set_dimensions(&mut self, size: Size);

    fn position(&self) -> Point {
        self.rect().origin()
    }

    /// Store a new origin; composites move their children here
    fn set_position(&mut self, pos: Point);

    /// Paint inside the assigned rectangle. Never changes geometry.
    fn draw(&self, painter: &mut dyn Painter);

    /// Handle a pointer event, returning the object that wants capture
    fn handle_event(&mut self, event: &PointerEvent) -> Option<ObjectId>;

    fn child_count(&self) -> usize {
        0
    }

    fn child(&self, _index: usize) -> Option<&dyn WinObject> {
        None
    }

    fn child_mut(&mut self, _index: usize) -> Option<&mut dyn WinObject> {
        None
    }

    /// Minimum size with no constraint
    fn min_size(&self) -> Size {
        self.get_dimensions(Size::ZERO)
    }

    /// Dimensions as reported under the current size
    fn dimensions(&self) -> Size {
        self.get_dimensions(self.rect().size())
    }
}

impl dyn WinObject {
    pub fn downcast_ref<T: WinObject>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: WinObject>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

/// Find the object with `id` in the subtree rooted at `root` (depth-first)
pub fn find_object(root: &dyn WinObject, id: ObjectId) -> Option<&dyn WinObject> {
    if root.id() == id {
        return Some(root);
    }

    (0..root.child_count())
        .find_map(|index| root.child(index).and_then(|child| find_object(child, id)))
}

/// Mutable variant of [`find_object`]
pub fn find_object_mut(root: &mut dyn WinObject, id: ObjectId) -> Option<&mut dyn WinObject> {
    if root.id() == id {
        return Some(root);
    }

    // Locate the branch first; descending mutably inside the search loop would
    // hold the borrow of `root` across iterations.
    let index = (0..root.child_count()).find(|&index| {
        root.child(index)
            .is_some_and(|child| find_object(child, id).is_some())
    })?;
    find_object_mut(root.child_mut(index)?, id)
}

/// Visit every object in the subtree rooted at `root`, parents before children
pub fn visit_objects(root: &dyn WinObject, visitor: &mut dyn FnMut(&dyn WinObject)) {
    visitor(root);
    for index in 0..root.child_count() {
        if let Some(child) = root.child(index) {
            visit_objects(child, visitor);
        }
    }
}
