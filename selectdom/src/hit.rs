use crate::layout::Layout;

/// Find the topmost region containing the point.
/// Regions inserted later are "on top" and win over earlier ones.
pub fn hit_test(layout: &Layout, x: u16, y: u16) -> Option<&str> {
    layout
        .iter_topmost()
        .find(|(_, rect)| rect.contains(x, y))
        .map(|(id, _)| id)
}
