//! Horizontal integer slider.
//!
//! The slider maps the pointer's x position onto `offset..=offset + range`.
//! The handle is centered on the pointer, so the usable track is the widget
//! width minus the handle width. Pressing inside the widget captures the
//! pointer; while captured, moves outside the track pin the value to the
//! nearest end.

use hexwin::{
    palette, Color, ObjectId, Painter, Point, PointerEvent, Rect, Size, WinObject, WithBuilders,
};

/// Width of the draggable handle, which is also the minimum height
pub const HANDLE_WIDTH: i32 = 10;

/// Visual styling for a slider
#[derive(Debug, Clone, PartialEq, Eq, WithBuilders)]
pub struct SliderStyle {
    /// Color of the track
    pub track_color: Color,
    /// Color of the handle
    pub handle_color: Color,
    /// Color of the handle while dragging
    pub handle_active_color: Color,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            track_color: palette::SURFACE,
            handle_color: palette::TEXT,
            handle_active_color: palette::ACCENT,
        }
    }
}

/// A slider for picking an integer in `offset..=offset + range`
///
/// # Example
///
/// ```ignore
/// Slider::new(10)
///     .with_offset(-5)
///     .on_change(|value| println!("Value: {}", value))
/// ```
pub struct Slider {
    id: ObjectId,
    rect: Rect,
    range: i32,
    offset: i32,
    value: i32,
    dragging: bool,
    style: SliderStyle,
    on_change: Option<Box<dyn FnMut(i32)>>,
}

impl Slider {
    /// Create a slider spanning `range` steps, starting at 0
    pub fn new(range: i32) -> Self {
        Self {
            id: ObjectId::next(),
            rect: Rect::default(),
            range: range.max(0),
            offset: 0,
            value: 0,
            dragging: false,
            style: SliderStyle::default(),
            on_change: None,
        }
    }

    /// Shift the value range to start at `offset`; the value moves along
    pub fn with_offset(mut self, offset: i32) -> Self {
        let step = i64::from(self.value) - i64::from(self.offset);
        self.offset = offset;
        self.value = self.clamp_wide(i64::from(offset) + step);
        self
    }

    /// Set the initial value, clamped into range
    pub fn with_value(mut self, value: i32) -> Self {
        self.value = self.clamp(value);
        self
    }

    pub fn with_style(mut self, style: SliderStyle) -> Self {
        self.style = style;
        self
    }

    /// Set a callback to be called with the new value whenever it changes
    pub fn on_change(mut self, f: impl FnMut(i32) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Set the value without notifying the change callback
    pub fn set_value(&mut self, value: i32) {
        self.value = self.clamp(value);
    }

    pub fn range(&self) -> i32 {
        self.range
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Largest reachable value; saturates at `i32::MAX`
    fn upper(&self) -> i32 {
        self.offset.saturating_add(self.range)
    }

    fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.offset, self.upper())
    }

    fn clamp_wide(&self, value: i64) -> i32 {
        let clamped = value.clamp(i64::from(self.offset), i64::from(self.upper()));
        i32::try_from(clamped).unwrap_or(self.offset)
    }

    fn track_len(&self) -> i64 {
        (i64::from(self.rect.w) - i64::from(HANDLE_WIDTH)).max(0)
    }

    /// Value under the screen x coordinate `x`.
    ///
    /// Computed in `i64`: the track is at least as long as the range in any
    /// layout, so `travel * range` exceeds `i32` for large ranges.
    fn value_at(&self, x: i32) -> i32 {
        let track = self.track_len();
        if track == 0 {
            return self.offset;
        }
        let travel = (i64::from(x) - i64::from(self.rect.x) - i64::from(HANDLE_WIDTH / 2))
            .clamp(0, track);
        self.clamp_wide(i64::from(self.offset) + travel * i64::from(self.range) / track)
    }

    fn handle_rect(&self) -> Rect {
        let travel = if self.range == 0 {
            0
        } else {
            let step = i64::from(self.value) - i64::from(self.offset);
            let travel = step * self.track_len() / i64::from(self.range);
            i32::try_from(travel).unwrap_or(i32::MAX)
        };
        Rect::new(
            self.rect.x.saturating_add(travel),
            self.rect.y,
            HANDLE_WIDTH,
            self.rect.h,
        )
    }

    fn update(&mut self, x: i32) {
        let value = self.value_at(x);
        if value == self.value {
            return;
        }
        self.value = value;
        log::trace!("slider {} changed to {}", self.id, value);
        if let Some(on_change) = &mut self.on_change {
            on_change(value);
        }
    }
}

impl WinObject for Slider {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn get_dimensions(&self, constraint: Size) -> Size {
        constraint.max(Size::new(
            self.range.saturating_add(HANDLE_WIDTH),
            HANDLE_WIDTH,
        ))
    }

    fn set_dimensions(&mut self, size: Size) {
        self.rect.w = size.w;
        self.rect.h = size.h;
    }

    fn set_position(&mut self, pos: Point) {
        self.rect.x = pos.x;
        self.rect.y = pos.y;
    }

    fn draw(&self, painter: &mut dyn Painter) {
        let track_y = self.rect.y + self.rect.h / 2 - 1;
        painter.set_color(self.style.track_color);
        painter.fill_rect(Rect::new(self.rect.x, track_y, self.rect.w, 2));

        painter.set_color(if self.dragging {
            self.style.handle_active_color
        } else {
            self.style.handle_color
        });
        painter.fill_rect(self.handle_rect());
    }

    fn handle_event(&mut self, event: &PointerEvent) -> Option<ObjectId> {
        match *event {
            PointerEvent::Down { pos, .. } if self.rect.contains(pos) => {
                self.dragging = true;
                self.update(pos.x);
                Some(self.id)
            }
            PointerEvent::Move { pos } if self.dragging => {
                self.update(pos.x);
                None
            }
            PointerEvent::Up { .. } => {
                self.dragging = false;
                None
            }
            _ => None,
        }
    }
}
