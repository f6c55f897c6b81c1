use hexwin::{ObjectId, ObjectKind, Painter, Point, PointerEvent, Rect, Size, WinObject};

/// Transparent wrapper around one owned object.
///
/// Every capability call, identity included, is forwarded to the wrapped
/// object, so a container is indistinguishable from its content to layouts
/// and to the window manager.
pub struct Container {
    inner: Box<dyn WinObject>,
}

impl Container {
    pub fn new(inner: impl WinObject) -> Self {
        Self::from_boxed(Box::new(inner))
    }

    pub fn from_boxed(inner: Box<dyn WinObject>) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &dyn WinObject {
        self.inner.as_ref()
    }

    pub fn inner_mut(&mut self) -> &mut dyn WinObject {
        self.inner.as_mut()
    }

    /// Typed access to the wrapped object
    pub fn inner_as<T: WinObject>(&self) -> Option<&T> {
        self.inner().downcast_ref::<T>()
    }

    pub fn inner_as_mut<T: WinObject>(&mut self) -> Option<&mut T> {
        self.inner_mut().downcast_mut::<T>()
    }

    pub fn into_inner(self) -> Box<dyn WinObject> {
        self.inner
    }
}

impl WinObject for Container {
    fn id(&self) -> ObjectId {
        self.inner.id()
    }

    fn kind(&self) -> ObjectKind {
        self.inner.kind()
    }

    fn rect(&self) -> Rect {
        self.inner.rect()
    }

    fn get_dimensions(&self, constraint: Size) -> Size {
        self.inner.get_dimensions(constraint)
    }

    fn set_dimensions(&mut self, size: Size) {
        self.inner.set_dimensions(size);
    }

    fn position(&self) -> Point {
        self.inner.position()
    }

    fn set_position(&mut self, pos: Point) {
        self.inner.set_position(pos);
    }

    fn draw(&self, painter: &mut dyn Painter) {
        self.inner.draw(painter);
    }

    fn handle_event(&mut self, event: &PointerEvent) -> Option<ObjectId> {
        self.inner.handle_event(event)
    }

    fn child_count(&self) -> usize {
        self.inner.child_count()
    }

    fn child(&self, index: usize) -> Option<&dyn WinObject> {
        self.inner.child(index)
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut dyn WinObject> {
        self.inner.child_mut(index)
    }
}
