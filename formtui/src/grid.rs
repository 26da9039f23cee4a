//! Drag-to-toggle weekly availability grid.
//!
//! The first press on a cell decides the drag polarity: pressing an empty
//! cell starts marking, pressing a marked one starts clearing. Dragging
//! then applies that polarity to every cell the pointer enters, so a sweep
//! never flickers cells back and forth. The checked set is mirrored into a
//! hidden form field as a bracketed value list.

use selectdom::{
    encode_values, hit_test, Buffer, Event, FormField, Layout, MouseButton, Rect, Rgb, Style,
};

pub const DAYS: usize = 7;
pub const SLOTS: usize = 12;
const FIRST_HOUR: usize = 8;

const DAY_LABELS: [&str; DAYS] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const CELL_PREFIX: &str = "cell:";

pub struct AvailabilityGrid {
    cells: [[bool; SLOTS]; DAYS],
    field: FormField,
    drag_polarity: Option<bool>,
    layout: Layout,
}

impl AvailabilityGrid {
    pub fn new(mut field: FormField) -> Self {
        field.set_silent(encode_values(&[]));
        Self {
            cells: [[false; SLOTS]; DAYS],
            field,
            drag_polarity: None,
            layout: Layout::new(),
        }
    }

    pub fn is_set(&self, day: usize, slot: usize) -> bool {
        self.cells[day][slot]
    }

    pub fn field(&self) -> &FormField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut FormField {
        &mut self.field
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn desired_height(&self) -> u16 {
        SLOTS as u16 + 1
    }

    pub fn desired_width(&self) -> u16 {
        4 + DAYS as u16 * 4
    }

    pub fn render(&mut self, buf: &mut Buffer, area: Rect) {
        self.layout.clear();
        if area.is_empty() {
            return;
        }

        let header = Style::default().dim();
        for (day, label) in DAY_LABELS.iter().enumerate() {
            buf.set_string(area.x + 4 + day as u16 * 4, area.y, label, header);
        }

        for slot in 0..SLOTS {
            let row = area.y + 1 + slot as u16;
            if row >= area.bottom() || row >= buf.height() {
                break;
            }
            buf.set_string(area.x, row, &format!("{:>2}h", FIRST_HOUR + slot), header);
            for day in 0..DAYS {
                let x = area.x + 4 + day as u16 * 4;
                let style = if self.cells[day][slot] {
                    Style::new(Rgb::new(138, 190, 255), Rgb::new(0, 0, 0))
                } else {
                    Style::default().dim()
                };
                let glyph = if self.cells[day][slot] { "███" } else { "···" };
                buf.set_string(x, row, glyph, style);
                self.layout
                    .insert(format!("{CELL_PREFIX}{day}:{slot}"), Rect::new(x, row, 4, 1));
            }
        }
    }

    /// Route a mouse event. Returns true when the grid consumed it.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match *event {
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => {
                let Some((day, slot)) = self.cell_at(x, y) else {
                    return false;
                };
                let polarity = !self.cells[day][slot];
                self.drag_polarity = Some(polarity);
                self.cells[day][slot] = polarity;
                self.sync_field();
                true
            }
            Event::Drag {
                x,
                y,
                button: MouseButton::Left,
            } => {
                let Some(polarity) = self.drag_polarity else {
                    return false;
                };
                if let Some((day, slot)) = self.cell_at(x, y) {
                    if self.cells[day][slot] != polarity {
                        self.cells[day][slot] = polarity;
                        self.sync_field();
                    }
                }
                true
            }
            Event::Release { .. } => self.drag_polarity.take().is_some(),
            _ => false,
        }
    }

    fn cell_at(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        let region = hit_test(&self.layout, x, y)?;
        let rest = region.strip_prefix(CELL_PREFIX)?;
        let (day, slot) = rest.split_once(':')?;
        Some((day.parse().ok()?, slot.parse().ok()?))
    }

    fn sync_field(&mut self) {
        let cells = self.cells;
        let checked: Vec<String> = (0..DAYS)
            .flat_map(|day| {
                (0..SLOTS)
                    .filter(move |&slot| cells[day][slot])
                    .map(move |slot| format!("{day}-{slot}"))
            })
            .collect();
        self.field.set_value(encode_values(&checked));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selectdom::FieldKind;

    fn grid() -> AvailabilityGrid {
        let mut grid = AvailabilityGrid::new(FormField::new("slots", FieldKind::Hidden));
        let mut buf = Buffer::new(80, 20);
        grid.render(&mut buf, Rect::new(0, 0, grid.desired_width(), grid.desired_height()));
        grid
    }

    fn center(grid: &AvailabilityGrid, day: usize, slot: usize) -> (u16, u16) {
        let rect = *grid
            .layout()
            .get(&format!("cell:{day}:{slot}"))
            .expect("cell region");
        (rect.x + 1, rect.y)
    }

    #[test]
    fn test_click_toggles_and_syncs_field() {
        let mut grid = grid();
        let (x, y) = center(&grid, 0, 0);

        assert!(grid.handle_event(&Event::Click {
            x,
            y,
            button: MouseButton::Left
        }));
        assert!(grid.is_set(0, 0));
        assert_eq!(grid.field().value(), "[0-0]");

        grid.handle_event(&Event::Release {
            x,
            y,
            button: MouseButton::Left,
        });
        assert!(grid.handle_event(&Event::Click {
            x,
            y,
            button: MouseButton::Left
        }));
        assert!(!grid.is_set(0, 0));
        assert_eq!(grid.field().value(), "[]");
    }

    #[test]
    fn test_drag_applies_press_polarity() {
        let mut grid = grid();

        // Pre-mark a cell in the sweep path, then start a marking drag
        let (x1, y1) = center(&grid, 1, 0);
        grid.handle_event(&Event::Click {
            x: x1,
            y: y1,
            button: MouseButton::Left,
        });
        grid.handle_event(&Event::Release {
            x: x1,
            y: y1,
            button: MouseButton::Left,
        });

        let (x0, y0) = center(&grid, 0, 0);
        grid.handle_event(&Event::Click {
            x: x0,
            y: y0,
            button: MouseButton::Left,
        });
        for day in 1..4 {
            let (x, y) = center(&grid, day, 0);
            assert!(grid.handle_event(&Event::Drag {
                x,
                y,
                button: MouseButton::Left
            }));
        }
        grid.handle_event(&Event::Release {
            x: 0,
            y: 0,
            button: MouseButton::Left,
        });

        // The marking sweep leaves every entered cell set, including the
        // one that was already set
        for day in 0..4 {
            assert!(grid.is_set(day, 0));
        }
        assert_eq!(grid.field().value(), "[0-0,1-0,2-0,3-0]");
    }

    #[test]
    fn test_clearing_drag_only_clears() {
        let mut grid = grid();
        for day in 0..3 {
            let (x, y) = center(&grid, day, 2);
            grid.handle_event(&Event::Click {
                x,
                y,
                button: MouseButton::Left,
            });
            grid.handle_event(&Event::Release {
                x,
                y,
                button: MouseButton::Left,
            });
        }

        // Press on a set cell starts a clearing sweep
        let (x, y) = center(&grid, 0, 2);
        grid.handle_event(&Event::Click {
            x,
            y,
            button: MouseButton::Left,
        });
        let (x1, y1) = center(&grid, 1, 2);
        grid.handle_event(&Event::Drag {
            x: x1,
            y: y1,
            button: MouseButton::Left,
        });
        grid.handle_event(&Event::Release {
            x: x1,
            y: y1,
            button: MouseButton::Left,
        });

        assert!(!grid.is_set(0, 2));
        assert!(!grid.is_set(1, 2));
        assert!(grid.is_set(2, 2));
    }

    #[test]
    fn test_drag_without_press_is_ignored() {
        let mut grid = grid();
        let (x, y) = center(&grid, 0, 0);
        assert!(!grid.handle_event(&Event::Drag {
            x,
            y,
            button: MouseButton::Left
        }));
        assert!(!grid.is_set(0, 0));
    }

    #[test]
    fn test_click_outside_grid_not_consumed() {
        let mut grid = grid();
        assert!(!grid.handle_event(&Event::Click {
            x: 70,
            y: 19,
            button: MouseButton::Left
        }));
    }
}
