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

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Screen regions produced by the renderer, keyed by region id.
///
/// Insertion order is significant: later regions sit on top of earlier ones
/// for hit testing, so the container goes in first and its children after.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    regions: Vec<(String, Rect)>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn insert(&mut self, id: impl Into<String>, rect: Rect) {
        self.regions.push((id.into(), rect));
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.regions
            .iter()
            .find(|(region_id, _)| region_id == id)
            .map(|(_, rect)| rect)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rect)> {
        self.regions
            .iter()
            .map(|(id, rect)| (id.as_str(), rect))
    }

    /// Iterate from topmost (last inserted) to bottommost.
    pub fn iter_topmost(&self) -> impl Iterator<Item = (&str, &Rect)> {
        self.regions
            .iter()
            .rev()
            .map(|(id, rect)| (id.as_str(), rect))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
