//! Geometry tracking for the sliding indicator.
//!
//! The widget never holds handles to rendered elements. Instead the host
//! injects a [`GeometrySource`] that answers "where is the container" and
//! "where is item `i`" from its most recent layout pass. The tracker turns
//! those answers into a container-relative [`Geometry`] for the indicator.

use thiserror::Error;

/// Screen rectangle in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Indicator placement relative to the container's left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    pub left: i32,
    pub width: u16,
}

impl Geometry {
    pub const fn new(left: i32, width: u16) -> Self {
        Self { left, width }
    }

    /// Geometry of `item` measured from the left edge of `container`.
    pub fn relative(container: Rect, item: Rect) -> Self {
        Self {
            left: i32::from(item.x) - i32::from(container.x),
            width: item.width,
        }
    }
}

/// Why a measurement could not be taken this cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("container has not been laid out")]
    ContainerUnavailable,
    #[error("item {0} has not been laid out")]
    ItemUnavailable(usize),
    #[error("item {index} is out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
}

/// Layout measurement capability provided by the host.
pub trait GeometrySource {
    /// Absolute rectangle of the widget's item container.
    fn container_rect(&self) -> Option<Rect>;

    /// Absolute rectangle of item `index`.
    fn item_rect(&self, index: usize) -> Option<Rect>;
}

impl<G: GeometrySource + ?Sized> GeometrySource for &G {
    fn container_rect(&self) -> Option<Rect> {
        (**self).container_rect()
    }

    fn item_rect(&self, index: usize) -> Option<Rect> {
        (**self).item_rect(index)
    }
}

/// A captured layout pass: one container rect plus one rect per item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutSnapshot {
    pub container: Option<Rect>,
    pub items: Vec<Rect>,
}

impl LayoutSnapshot {
    pub fn new(container: Rect, items: Vec<Rect>) -> Self {
        Self {
            container: Some(container),
            items,
        }
    }

    /// A snapshot taken before anything was laid out.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Index of the item containing the given cell, if any.
    pub fn item_at(&self, x: u16, y: u16) -> Option<usize> {
        self.items.iter().position(|rect| rect.contains(x, y))
    }

    /// True if the given cell is inside the container.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.container.is_some_and(|rect| rect.contains(x, y))
    }
}

impl GeometrySource for LayoutSnapshot {
    fn container_rect(&self) -> Option<Rect> {
        self.container
    }

    fn item_rect(&self, index: usize) -> Option<Rect> {
        self.items.get(index).copied()
    }
}

/// Measures the focused item and remembers whether a measurement is owed.
///
/// A measurement is owed after any focus change, resize or item-set change,
/// and stays owed until a query succeeds.
#[derive(Debug, Clone)]
pub struct GeometryTracker {
    len: usize,
    stale: bool,
}

impl GeometryTracker {
    pub fn new(len: usize) -> Self {
        Self { len, stale: true }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Update the number of tracked items. Always invalidates.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.stale = true;
    }

    /// Mark the current measurement as owed (resize, relayout).
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Returns true if a measurement is owed.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Measure item `index` against the container using live layout.
    ///
    /// On success the tracker is no longer stale. On failure it stays stale
    /// so the next trigger retries.
    pub fn measure(
        &mut self,
        source: &dyn GeometrySource,
        index: usize,
    ) -> Result<Geometry, GeometryError> {
        if index >= self.len {
            self.stale = true;
            return Err(GeometryError::OutOfRange {
                index,
                len: self.len,
            });
        }

        let result = source
            .container_rect()
            .ok_or(GeometryError::ContainerUnavailable)
            .and_then(|container| {
                let item = source
                    .item_rect(index)
                    .ok_or(GeometryError::ItemUnavailable(index))?;
                Ok(Geometry::relative(container, item))
            });

        self.stale = result.is_err();
        log::trace!("[geometry] measure index={} -> {:?}", index, result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_geometry_subtracts_container_left() {
        let geometry = Geometry::relative(Rect::new(10, 2, 40, 3), Rect::new(18, 3, 7, 1));
        assert_eq!(geometry, Geometry::new(8, 7));
    }

    #[test]
    fn relative_geometry_can_be_negative() {
        let geometry = Geometry::relative(Rect::new(10, 0, 40, 3), Rect::new(4, 0, 5, 1));
        assert_eq!(geometry.left, -6);
    }
}
