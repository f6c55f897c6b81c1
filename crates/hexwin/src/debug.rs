use crate::color::palette;
use crate::draw::Painter;
use crate::layout::BoxLayout;
use crate::object::{find_object, visit_objects, ObjectId, ObjectKind, WinObject};
use hexwin_macros::WithBuilders;

/// Configuration for the debug overlay drawn on top of all windows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, WithBuilders)]
pub struct DebugOptions {
    /// Outline every object's assigned rectangle (green)
    pub show_bounds: bool,
    /// Outline every layout slot (magenta)
    pub show_slots: bool,
    /// Outline the object currently holding capture (red)
    pub show_capture: bool,
}

impl DebugOptions {
    /// Create debug options with nothing enabled
    pub const fn none() -> Self {
        Self {
            show_bounds: false,
            show_slots: false,
            show_capture: false,
        }
    }

    /// Create debug options with all visualizations enabled
    pub const fn all() -> Self {
        Self {
            show_bounds: true,
            show_slots: true,
            show_capture: true,
        }
    }

    /// Check if any debug visualization is enabled
    pub const fn is_enabled(&self) -> bool {
        self.show_bounds || self.show_slots || self.show_capture
    }
}

/// Draw the overlay for one window tree
pub(crate) fn draw_overlay(
    options: &DebugOptions,
    root: &dyn WinObject,
    captured: Option<ObjectId>,
    painter: &mut dyn Painter,
) {
    if options.show_bounds {
        painter.set_color(palette::DEBUG_BOUNDS);
        visit_objects(root, &mut |object| painter.stroke_rect(object.rect()));
    }

    if options.show_slots {
        painter.set_color(palette::DEBUG_SLOTS);
        visit_objects(root, &mut |object| {
            if object.kind() != ObjectKind::Layout {
                return;
            }
            if let Some(layout) = object.downcast_ref::<BoxLayout>() {
                for entry in layout.entries() {
                    painter.stroke_rect(entry.slot());
                }
            }
        });
    }

    if options.show_capture {
        if let Some(object) = captured.and_then(|id| find_object(root, id)) {
            painter.set_color(palette::DEBUG_CAPTURE);
            painter.stroke_rect(object.rect());
        }
    }
}
