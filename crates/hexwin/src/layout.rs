//! Box layouts (HBox / VBox) and the space distribution solver.
//!
//! A layout arranges its children one after another along the flow axis
//! (horizontal for an HBox, vertical for a VBox). Children without
//! [`LayoutFlags::EXPAND`] get exactly their minimum along the flow axis.
//! Whatever is left is split evenly between the expanding children; an
//! expanding child whose minimum does not fit into the even share is pinned to
//! its minimum and the share is recomputed for the rest.
//!
//! Division is integer. Remainder pixels are not handed out, so a row of three
//! expanding children in 100px ends up 33 + 33 + 33.

use crate::color::Color;
use crate::draw::Painter;
use crate::events::PointerEvent;
use crate::object::{ObjectId, ObjectKind, WinObject};
use crate::primitives::{Point, Rect, Size};
use bitflags::bitflags;

bitflags! {
    /// Per-child layout attributes
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LayoutFlags: u8 {
        /// Take a share of the leftover flow-axis space
        const EXPAND = 1 << 0;
        /// Align to the left edge (VBox cross axis)
        const LEFT = 1 << 1;
        /// Align to the right edge (VBox cross axis)
        const RIGHT = 1 << 2;
        /// Align to the top edge (HBox cross axis)
        const TOP = 1 << 3;
        /// Align to the bottom edge (HBox cross axis)
        const BOTTOM = 1 << 4;
    }
}

/// Direction in which a box layout arranges its children
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Children are arranged left to right (HBox)
    Horizontal,
    /// Children are arranged top to bottom (VBox)
    Vertical,
}

impl Orientation {
    /// Extent of `size` along the flow axis
    pub const fn flow(self, size: Size) -> i32 {
        match self {
            Self::Horizontal => size.w,
            Self::Vertical => size.h,
        }
    }

    /// Extent of `size` along the cross axis
    pub const fn cross(self, size: Size) -> i32 {
        match self {
            Self::Horizontal => size.h,
            Self::Vertical => size.w,
        }
    }

    /// Build a size from flow and cross extents
    pub const fn size(self, flow: i32, cross: i32) -> Size {
        match self {
            Self::Horizontal => Size::new(flow, cross),
            Self::Vertical => Size::new(cross, flow),
        }
    }

    /// Build a point from flow and cross coordinates
    pub const fn point(self, flow: i32, cross: i32) -> Point {
        match self {
            Self::Horizontal => Point::new(flow, cross),
            Self::Vertical => Point::new(cross, flow),
        }
    }

    /// Coordinate of `point` along the flow axis
    pub const fn flow_pos(self, point: Point) -> i32 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// Coordinate of `point` along the cross axis
    pub const fn cross_pos(self, point: Point) -> i32 {
        match self {
            Self::Horizontal => point.y,
            Self::Vertical => point.x,
        }
    }

    /// Flags that align a child to the start and the end of the cross axis
    pub const fn cross_flags(self) -> (LayoutFlags, LayoutFlags) {
        match self {
            Self::Horizontal => (LayoutFlags::TOP, LayoutFlags::BOTTOM),
            Self::Vertical => (LayoutFlags::LEFT, LayoutFlags::RIGHT),
        }
    }
}

/// A child of a box layout together with its solver state
pub struct LayoutEntry {
    child: Box<dyn WinObject>,
    flags: LayoutFlags,
    /// Size handed out by the last solve
    allotted: Size,
    /// Rectangle reserved for the child by the last solve, used for hit-testing
    slot: Rect,
    /// Minimum reported at the start of the current solve
    min: Size,
    finalized: bool,
}

impl LayoutEntry {
    fn new(child: Box<dyn WinObject>, flags: LayoutFlags) -> Self {
        Self {
            child,
            flags,
            allotted: Size::ZERO,
            slot: Rect::default(),
            min: Size::ZERO,
            finalized: false,
        }
    }

    pub fn child(&self) -> &dyn WinObject {
        self.child.as_ref()
    }

    pub fn child_mut(&mut self) -> &mut dyn WinObject {
        self.child.as_mut()
    }

    pub fn flags(&self) -> LayoutFlags {
        self.flags
    }

    pub fn allotted(&self) -> Size {
        self.allotted
    }

    pub fn slot(&self) -> Rect {
        self.slot
    }

    fn finalize(&mut self, axis: Orientation, flow: i32, cross_extent: i32) {
        self.allotted = axis.size(flow, cross_extent.max(axis.cross(self.min)));
        self.finalized = true;
    }
}

/// Ordered container laying out its children along one axis
pub struct BoxLayout {
    id: ObjectId,
    rect: Rect,
    orientation: Orientation,
    entries: Vec<LayoutEntry>,
    border: Option<Color>,
}

impl BoxLayout {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            id: ObjectId::next(),
            rect: Rect::default(),
            orientation,
            entries: Vec::new(),
            border: None,
        }
    }

    /// Horizontal box
    pub fn hbox() -> Self {
        Self::new(Orientation::Horizontal)
    }

    /// Vertical box
    pub fn vbox() -> Self {
        Self::new(Orientation::Vertical)
    }

    /// Outline the layout's rectangle when drawing
    pub fn with_border(mut self, color: Color) -> Self {
        self.set_border(Some(color));
        self
    }

    pub fn set_border(&mut self, border: Option<Color>) {
        self.border = border;
    }

    /// Append a child (builder style)
    pub fn with_child(mut self, child: impl WinObject, flags: LayoutFlags) -> Self {
        self.add(child, flags);
        self
    }

    /// Append a child, returning its id.
    ///
    /// The layout is not re-solved until the next `set_dimensions`.
    pub fn add(&mut self, child: impl WinObject, flags: LayoutFlags) -> ObjectId {
        self.add_boxed(Box::new(child), flags)
    }

    pub fn add_boxed(&mut self, child: Box<dyn WinObject>, flags: LayoutFlags) -> ObjectId {
        let id = child.id();
        self.entries.push(LayoutEntry::new(child, flags));
        id
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Typed access to the child at `index`
    pub fn child_as<T: WinObject>(&self, index: usize) -> Option<&T> {
        self.entries.get(index)?.child().downcast_ref::<T>()
    }

    /// Typed mutable access to the child at `index`
    pub fn child_as_mut<T: WinObject>(&mut self, index: usize) -> Option<&mut T> {
        self.entries.get_mut(index)?.child_mut().downcast_mut::<T>()
    }

    /// Distribute the current extent among the children
    fn solve(&mut self) {
        let axis = self.orientation;
        let extent = self.rect.size();
        let flow_extent = axis.flow(extent);
        let cross_extent = axis.cross(extent);

        // A zero flow constraint forces every child to report its true minimum
        let probe = axis.size(0, cross_extent);
        for entry in &mut self.entries {
            entry.finalized = false;
            entry.min = entry.child.get_dimensions(probe);
        }

        let mut remaining = flow_extent;
        let mut pool = 0;
        for entry in &mut self.entries {
            if entry.flags.contains(LayoutFlags::EXPAND) {
                pool += 1;
                continue;
            }
            let min_flow = axis.flow(entry.min);
            entry.finalize(axis, min_flow, cross_extent);
            remaining -= min_flow;
        }

        let mut common = even_share(remaining, pool);
        loop {
            let mut pinned = false;
            for entry in self.entries.iter_mut().filter(|entry| !entry.finalized) {
                let min_flow = axis.flow(entry.min);
                if min_flow > common {
                    entry.finalize(axis, min_flow, cross_extent);
                    remaining -= min_flow;
                    pool -= 1;
                    common = even_share(remaining, pool);
                    pinned = true;
                }
            }
            if !pinned || pool == 0 {
                break;
            }
        }

        for entry in self.entries.iter_mut().filter(|entry| !entry.finalized) {
            entry.finalize(axis, common, cross_extent);
        }

        log::trace!(
            "layout {} solved {}x{}: {} children, {} px unassigned",
            self.id,
            extent.w,
            extent.h,
            self.entries.len(),
            if pool > 0 { remaining - common * pool } else { remaining.max(0) },
        );
    }

    /// Compute slots from the allotments and push geometry to the children
    fn place(&mut self, resize_children: bool) {
        let axis = self.orientation;
        let (start_flag, end_flag) = axis.cross_flags();
        let mut cursor = axis.flow_pos(self.rect.origin());
        let cross_origin = axis.cross_pos(self.rect.origin());

        for entry in &mut self.entries {
            let flow = axis.flow(entry.allotted);
            let span = axis.cross(entry.allotted);
            entry.slot = Rect::from_origin_size(axis.point(cursor, cross_origin), entry.allotted);

            let at_start = entry.flags.contains(start_flag);
            let at_end = entry.flags.contains(end_flag);
            let cross = if at_start || at_end {
                let natural = entry.child.get_dimensions(axis.size(flow, 0));
                axis.cross(natural).min(span)
            } else {
                span
            };
            let offset = match (at_start, at_end) {
                (true, false) => 0,
                (false, true) => span - cross,
                _ => (span - cross) / 2,
            };

            if resize_children {
                entry.child.set_dimensions(axis.size(flow, cross));
            }
            entry
                .child
                .set_position(axis.point(cursor, cross_origin + offset));
            cursor += flow;
        }
    }
}

fn even_share(remaining: i32, pool: i32) -> i32 {
    if pool > 0 {
        remaining / pool
    } else {
        remaining
    }
}

impl WinObject for BoxLayout {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Layout
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn get_dimensions(&self, constraint: Size) -> Size {
        let axis = self.orientation;
        let probe = axis.size(0, axis.cross(constraint));
        let mut flow = 0;
        let mut cross = 0;
        for entry in &self.entries {
            let needed = entry.child.get_dimensions(probe).max(entry.allotted);
            flow += axis.flow(needed);
            cross = cross.max(axis.cross(needed));
        }
        axis.size(flow, cross).max(constraint)
    }

    fn set_dimensions(&mut self, size: Size) {
        self.rect.w = size.w;
        self.rect.h = size.h;
        self.solve();
        self.place(true);
    }

    fn set_position(&mut self, pos: Point) {
        self.rect.x = pos.x;
        self.rect.y = pos.y;
        self.place(false);
    }

    fn draw(&self, painter: &mut dyn Painter) {
        if let Some(color) = self.border {
            painter.set_color(color);
            painter.stroke_rect(self.rect);
        }
        for entry in &self.entries {
            entry.child.draw(painter);
        }
    }

    fn handle_event(&mut self, event: &PointerEvent) -> Option<ObjectId> {
        let pos = event.pos();
        match self.entries.iter_mut().find(|entry| entry.slot.contains(pos)) {
            Some(entry) => entry.child.handle_event(event),
            None => {
                log::trace!("layout {} has no child at ({}, {})", self.id, pos.x, pos.y);
                None
            }
        }
    }

    fn child_count(&self) -> usize {
        self.entries.len()
    }

    fn child(&self, index: usize) -> Option<&dyn WinObject> {
        self.entries.get(index).map(|entry| entry.child())
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut dyn WinObject> {
        self.entries.get_mut(index).map(|entry| entry.child_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{find_object, find_object_mut};
    use crate::testing::Block;
    use crate::MouseButton;
    use proptest::prelude::*;

    fn rects(layout: &BoxLayout) -> Vec<Rect> {
        (0..layout.child_count())
            .filter_map(|index| layout.child(index).map(|child| child.rect()))
            .collect()
    }

    fn flow_sum(layout: &BoxLayout) -> i32 {
        layout
            .entries()
            .iter()
            .map(|entry| layout.orientation().flow(entry.allotted()))
            .sum()
    }

    #[test]
    fn test_vbox_fixed_then_expand() {
        let mut vbox = BoxLayout::vbox()
            .with_child(Block::new(0, 20), LayoutFlags::empty())
            .with_child(Block::new(0, 0), LayoutFlags::EXPAND);
        vbox.set_dimensions(Size::new(100, 100));

        assert_eq!(
            rects(&vbox),
            vec![Rect::new(0, 0, 100, 20), Rect::new(0, 20, 100, 80)]
        );
    }

    #[test]
    fn test_even_split_drops_remainder() {
        let mut hbox = BoxLayout::hbox();
        for _ in 0..3 {
            hbox.add(Block::new(0, 0), LayoutFlags::EXPAND);
        }
        hbox.set_dimensions(Size::new(100, 10));

        let widths: Vec<i32> = rects(&hbox).iter().map(|rect| rect.w).collect();
        assert_eq!(widths, vec![33, 33, 33]);
        assert_eq!(flow_sum(&hbox), 99);
    }

    #[test]
    fn test_expand_child_pinned_to_minimum() {
        let mut hbox = BoxLayout::hbox()
            .with_child(Block::new(60, 0), LayoutFlags::EXPAND)
            .with_child(Block::new(0, 0), LayoutFlags::EXPAND)
            .with_child(Block::new(0, 0), LayoutFlags::EXPAND);
        hbox.set_dimensions(Size::new(100, 10));

        let widths: Vec<i32> = rects(&hbox).iter().map(|rect| rect.w).collect();
        assert_eq!(widths, vec![60, 20, 20]);
    }

    #[test]
    fn test_pinning_cascades() {
        // 90 / 3 = 30 pins the 40; 50 / 2 = 25 then pins the 26
        let mut hbox = BoxLayout::hbox()
            .with_child(Block::new(26, 0), LayoutFlags::EXPAND)
            .with_child(Block::new(40, 0), LayoutFlags::EXPAND)
            .with_child(Block::new(0, 0), LayoutFlags::EXPAND);
        hbox.set_dimensions(Size::new(90, 10));

        let widths: Vec<i32> = rects(&hbox).iter().map(|rect| rect.w).collect();
        assert_eq!(widths, vec![26, 40, 24]);
        assert_eq!(flow_sum(&hbox), 90);
    }

    #[test]
    fn test_no_expand_children_leaves_space_unassigned() {
        let mut vbox = BoxLayout::vbox()
            .with_child(Block::new(0, 10), LayoutFlags::empty())
            .with_child(Block::new(0, 15), LayoutFlags::empty());
        vbox.set_dimensions(Size::new(50, 100));

        assert_eq!(
            rects(&vbox),
            vec![Rect::new(0, 0, 50, 10), Rect::new(0, 10, 50, 15)]
        );
    }

    #[test]
    fn test_overflow_keeps_minimums() {
        let mut hbox = BoxLayout::hbox()
            .with_child(Block::new(40, 0), LayoutFlags::empty())
            .with_child(Block::new(30, 0), LayoutFlags::EXPAND)
            .with_child(Block::new(30, 0), LayoutFlags::EXPAND);
        hbox.set_dimensions(Size::new(50, 10));

        let widths: Vec<i32> = rects(&hbox).iter().map(|rect| rect.w).collect();
        assert_eq!(widths, vec![40, 30, 30]);
    }

    #[test]
    fn test_cross_axis_grows_to_child_minimum() {
        let mut vbox = BoxLayout::vbox().with_child(Block::new(120, 10), LayoutFlags::empty());
        vbox.set_dimensions(Size::new(100, 50));
        assert_eq!(vbox.entries()[0].allotted(), Size::new(120, 10));
    }

    #[test]
    fn test_cross_axis_alignment() {
        let mut vbox = BoxLayout::vbox()
            .with_child(Block::new(30, 10), LayoutFlags::LEFT)
            .with_child(Block::new(30, 10), LayoutFlags::RIGHT)
            .with_child(Block::new(30, 10), LayoutFlags::LEFT | LayoutFlags::RIGHT)
            .with_child(Block::new(30, 10), LayoutFlags::empty());
        vbox.set_dimensions(Size::new(100, 40));
        vbox.set_position(Point::new(10, 5));

        assert_eq!(
            rects(&vbox),
            vec![
                Rect::new(10, 5, 30, 10),
                Rect::new(80, 15, 30, 10),
                Rect::new(45, 25, 30, 10),
                Rect::new(10, 35, 100, 10),
            ]
        );
        // Slots always span the full cross extent
        assert_eq!(vbox.entries()[1].slot(), Rect::new(10, 15, 100, 10));
    }

    #[test]
    fn test_flow_axis_flags_are_ignored() {
        let mut hbox = BoxLayout::hbox().with_child(Block::new(10, 10), LayoutFlags::LEFT);
        hbox.set_dimensions(Size::new(50, 30));
        assert_eq!(rects(&hbox), vec![Rect::new(0, 0, 10, 30)]);
    }

    #[test]
    fn test_set_position_moves_children() {
        let mut hbox = BoxLayout::hbox()
            .with_child(Block::new(10, 0), LayoutFlags::empty())
            .with_child(Block::new(0, 0), LayoutFlags::EXPAND);
        hbox.set_dimensions(Size::new(40, 20));
        hbox.set_position(Point::new(100, 200));

        assert_eq!(
            rects(&hbox),
            vec![Rect::new(100, 200, 10, 20), Rect::new(110, 200, 30, 20)]
        );
        assert_eq!(hbox.entries()[1].slot(), Rect::new(110, 200, 30, 20));
    }

    #[test]
    fn test_reported_minimum_sums_flow_and_maxes_cross() {
        let hbox = BoxLayout::hbox()
            .with_child(Block::new(10, 5), LayoutFlags::empty())
            .with_child(Block::new(20, 8), LayoutFlags::EXPAND);
        assert_eq!(hbox.min_size(), Size::new(30, 8));
        assert_eq!(hbox.get_dimensions(Size::new(50, 4)), Size::new(50, 8));
    }

    #[test]
    fn test_reported_minimum_includes_prior_allotment() {
        let mut hbox = BoxLayout::hbox()
            .with_child(Block::new(10, 5), LayoutFlags::empty())
            .with_child(Block::new(0, 5), LayoutFlags::EXPAND);
        hbox.set_dimensions(Size::new(80, 20));
        assert_eq!(hbox.min_size(), Size::new(80, 20));
    }

    #[test]
    fn test_nested_layouts() {
        let inner = BoxLayout::hbox()
            .with_child(Block::new(10, 10), LayoutFlags::empty())
            .with_child(Block::new(0, 0), LayoutFlags::EXPAND);
        let mut outer = BoxLayout::vbox()
            .with_child(Block::new(0, 30), LayoutFlags::empty())
            .with_child(inner, LayoutFlags::EXPAND);
        outer.set_dimensions(Size::new(60, 100));

        let inner = outer.child_as::<BoxLayout>(1).expect("inner layout");
        assert_eq!(inner.rect(), Rect::new(0, 30, 60, 70));
        assert_eq!(
            rects(inner),
            vec![Rect::new(0, 30, 10, 70), Rect::new(10, 30, 50, 70)]
        );
    }

    #[test]
    fn test_event_goes_to_first_containing_slot() {
        let mut vbox = BoxLayout::vbox()
            .with_child(Block::claiming(0, 10), LayoutFlags::empty())
            .with_child(Block::new(0, 10), LayoutFlags::empty());
        vbox.set_dimensions(Size::new(20, 20));

        let first = vbox.child(0).map(|child| child.id());
        let target = vbox.handle_event(&PointerEvent::down(5, 5, MouseButton::Left));
        assert_eq!(target, first);

        assert_eq!(
            vbox.handle_event(&PointerEvent::down(5, 15, MouseButton::Left)),
            None
        );
        assert_eq!(vbox.child_as::<Block>(0).map(|b| b.events.len()), Some(1));
        assert_eq!(vbox.child_as::<Block>(1).map(|b| b.events.len()), Some(1));

        // Unassigned space below the last slot reaches nobody
        vbox.set_dimensions(Size::new(20, 40));
        assert_eq!(
            vbox.handle_event(&PointerEvent::down(5, 30, MouseButton::Left)),
            None
        );
        assert_eq!(vbox.child_as::<Block>(1).map(|b| b.events.len()), Some(1));
    }

    #[test]
    fn test_find_object_in_nested_tree() {
        let leaf = Block::new(1, 1);
        let leaf_id = leaf.id();
        let inner = BoxLayout::hbox().with_child(leaf, LayoutFlags::empty());
        let mut outer = BoxLayout::vbox()
            .with_child(Block::new(1, 1), LayoutFlags::empty())
            .with_child(inner, LayoutFlags::empty());

        assert_eq!(find_object(&outer, leaf_id).map(|o| o.id()), Some(leaf_id));

        let found = find_object_mut(&mut outer, leaf_id).expect("leaf in tree");
        found.set_dimensions(Size::new(7, 7));
        assert_eq!(
            find_object(&outer, leaf_id).map(|o| o.rect().size()),
            Some(Size::new(7, 7))
        );
        assert!(find_object(&outer, ObjectId::next()).is_none());
    }

    proptest! {
        #[test]
        fn prop_flow_allotments_fill_extent(
            vertical in any::<bool>(),
            mins in prop::collection::vec((0i32..30, any::<bool>()), 1..8),
            slack in 0i32..200,
            cross in 0i32..50,
        ) {
            let axis = if vertical { Orientation::Vertical } else { Orientation::Horizontal };
            let mut layout = BoxLayout::new(axis);
            // At least one child expands
            layout.add(Block::new(0, 0), LayoutFlags::EXPAND);
            for (min, expand) in &mins {
                let flags = if *expand { LayoutFlags::EXPAND } else { LayoutFlags::empty() };
                let min = axis.size(*min, 0);
                layout.add(Block::new(min.w, min.h), flags);
            }
            let extent = mins.iter().map(|(min, _)| *min).sum::<i32>() + slack;
            layout.set_dimensions(axis.size(extent, cross));

            let sum = flow_sum(&layout);
            let children = layout.len() as i32;
            prop_assert!(sum <= extent);
            prop_assert!(extent - sum <= children - 1);
            for entry in layout.entries() {
                prop_assert!(axis.flow(entry.allotted()) >= axis.flow(entry.child().min_size()));
                prop_assert_eq!(axis.cross(entry.allotted()), cross);
            }
        }
    }
}
