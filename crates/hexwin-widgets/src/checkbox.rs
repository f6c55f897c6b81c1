//! Boolean checkbox built from two labels.
//!
//! The caption and a `0`/`1` state label sit in an HBox wrapped in a
//! [`Container`] that does all geometry and drawing. The container is not
//! exposed as a child, so the checkbox is the only object the router sees and
//! the one that takes capture.

use crate::container::Container;
use crate::label::Label;
use hexwin::{
    palette, BoxLayout, Color, LayoutFlags, Metrics, ObjectId, Painter, Point, PointerEvent, Rect,
    Size, WinObject,
};

const STATE_INDEX: usize = 1;

/// A labelled on/off switch toggled by a completed click
///
/// # Example
///
/// ```ignore
/// Checkbox::new("sound", metrics)
///     .with_checked(true)
///     .on_change(|checked| println!("sound: {}", checked))
/// ```
pub struct Checkbox {
    id: ObjectId,
    body: Container,
    checked: bool,
    pressed: bool,
    on_change: Option<Box<dyn FnMut(bool)>>,
}

impl Checkbox {
    pub fn new(text: impl Into<String>, metrics: Metrics) -> Self {
        let layout = BoxLayout::hbox()
            .with_child(Label::new(text, metrics.clone()), LayoutFlags::EXPAND)
            .with_child(
                Label::new(state_text(false), metrics).with_color(palette::WHITE),
                LayoutFlags::empty(),
            );
        Self {
            id: ObjectId::next(),
            body: Container::new(layout),
            checked: false,
            pressed: false,
            on_change: None,
        }
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.set_checked(checked);
        self
    }

    /// Outline the internal box, mostly useful when debugging placement
    pub fn with_border(mut self, color: Color) -> Self {
        if let Some(layout) = self.body.inner_as_mut::<BoxLayout>() {
            layout.set_border(Some(color));
        }
        self
    }

    /// Set a callback to be called with the new state after each toggle
    pub fn on_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the state without notifying the change callback
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
        if let Some(state) = self
            .body
            .inner_as_mut::<BoxLayout>()
            .and_then(|layout| layout.child_as_mut::<Label>(STATE_INDEX))
        {
            state.set_text(state_text(checked));
        }
        // Re-solve in case the state label changed width
        let size = self.body.rect().size();
        self.body.set_dimensions(size);
    }

    /// Text currently shown by the state label
    pub fn state_text(&self) -> &str {
        self.body
            .inner_as::<BoxLayout>()
            .and_then(|layout| layout.child_as::<Label>(STATE_INDEX))
            .map_or("", Label::text)
    }

    fn toggle(&mut self) {
        self.set_checked(!self.checked);
        log::trace!("checkbox {} toggled to {}", self.id, self.checked);
        if let Some(on_change) = &mut self.on_change {
            on_change(self.checked);
        }
    }
}

fn state_text(checked: bool) -> &'static str {
    if checked {
        "1"
    } else {
        "0"
    }
}

impl WinObject for Checkbox {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn rect(&self) -> Rect {
        self.body.rect()
    }

    fn get_dimensions(&self, constraint: Size) -> Size {
        self.body.get_dimensions(constraint)
    }

    fn set_dimensions(&mut self, size: Size) {
        self.body.set_dimensions(size);
    }

    fn set_position(&mut self, pos: Point) {
        self.body.set_position(pos);
    }

    fn draw(&self, painter: &mut dyn Painter) {
        self.body.draw(painter);
    }

    fn handle_event(&mut self, event: &PointerEvent) -> Option<ObjectId> {
        match *event {
            PointerEvent::Down { pos, .. } if self.rect().contains(pos) => {
                self.pressed = true;
                Some(self.id)
            }
            PointerEvent::Up { .. } if self.pressed => {
                self.pressed = false;
                self.toggle();
                None
            }
            _ => None,
        }
    }
}
