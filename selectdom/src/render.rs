//! Rendering adapter for the select widget.
//!
//! Observes registry + selection + interaction state and draws into a cell
//! buffer, recording a region layout as it goes. The layout is what click
//! handling hits against, so every interactive part (container, tag removal
//! icons, filter box, option rows) registers a region here.

use crate::buffer::Buffer;
use crate::layout::Rect;
use crate::style::Style;
use crate::text::{display_width, truncate_to_width};
use crate::widget::{SelectWidget, OPTION_PREFIX, REGION_FILTER, REGION_SELECT, TAG_PREFIX};

impl SelectWidget {
    /// Rows the widget wants at its current state: one for the container,
    /// plus the filter box and visible options while open.
    pub fn desired_height(&self) -> u16 {
        if !self.opened {
            return 1;
        }
        let visible = self
            .registry
            .iter()
            .filter(|option| !self.registry.is_hidden(&option.value))
            .count() as u16;
        1 + u16::from(self.autocomplete) + visible
    }

    /// Draw into `buf` at `area` and record the hit-test layout.
    pub fn render(&mut self, buf: &mut Buffer, area: Rect) {
        self.layout.clear();
        if area.is_empty() {
            return;
        }

        self.render_container(buf, area);

        if self.opened {
            self.render_dropdown(buf, area);
        }
    }

    fn render_container(&mut self, buf: &mut Buffer, area: Rect) {
        let palette = self.palette;
        let base = Style::new(palette.text, palette.container_bg);
        buf.fill_row(area.x, area.y, area.width, base);

        // The container is the bottom-most region; tags stack on top of it.
        self.layout
            .insert(REGION_SELECT, Rect::new(area.x, area.y, area.width, 1));

        // Right-edge open/closed indicator
        if area.width >= 2 {
            let indicator = if self.opened { "▴" } else { "▾" };
            buf.set_string(area.right() - 2, area.y, indicator, base);
        }

        let content_width = area.width.saturating_sub(3) as usize;

        if self.state.is_multiple() && !self.state.selected().is_empty() {
            self.render_tags(buf, area);
            return;
        }

        if let Some(current) = self.state.single() {
            let label = self
                .registry
                .get(current)
                .map(|option| option.label.as_str())
                .unwrap_or(current);
            let label = truncate_to_width(label, content_width);
            buf.set_string(area.x + 1, area.y, &label, base);
            return;
        }

        let placeholder = truncate_to_width(&self.placeholder, content_width);
        buf.set_string(
            area.x + 1,
            area.y,
            &placeholder,
            Style::new(self.palette.placeholder, self.palette.container_bg).dim(),
        );
    }

    fn render_tags(&mut self, buf: &mut Buffer, area: Rect) {
        let palette = self.palette;
        let tag_style = Style::new(palette.tag_fg, palette.tag_bg);
        let limit_x = area.right().saturating_sub(3);

        let tags: Vec<String> = self
            .state
            .selected()
            .iter()
            .map(|value| {
                let text = if self.short_tags {
                    value.as_str()
                } else {
                    self.registry
                        .get(value)
                        .map(|option| option.label.as_str())
                        .unwrap_or(value)
                };
                text.to_string()
            })
            .collect();

        let mut x = area.x + 1;
        for (tag, value) in tags.iter().zip(self.state.selected().to_vec()) {
            // Tag cell: " text ×" with the icon as its own clickable region
            let needed = display_width(tag) as u16 + 3;
            if x + needed > limit_x {
                buf.set_string(x, area.y, "…", Style::new(palette.text, palette.container_bg));
                break;
            }
            x = buf.set_string(x, area.y, &format!(" {tag} "), tag_style);
            let icon_x = x;
            x = buf.set_string(x, area.y, &self.icon.to_string(), tag_style.bold());
            self.layout.insert(
                format!("{TAG_PREFIX}{value}"),
                Rect::new(icon_x, area.y, 1, 1),
            );
            x += 1;
        }
    }

    fn render_dropdown(&mut self, buf: &mut Buffer, area: Rect) {
        let palette = self.palette;
        let mut row = area.y + 1;

        if self.autocomplete {
            if row >= area.bottom() || row >= buf.height() {
                return;
            }
            let filter_style = Style::new(palette.filter_fg, palette.filter_bg);
            buf.fill_row(area.x, row, area.width, filter_style);
            let text = self.filter.text().to_string();
            buf.set_string(area.x + 1, row, &text, filter_style);

            // Block cursor at the edit position
            let cursor_offset: usize = text
                .chars()
                .take(self.filter.cursor())
                .map(crate::text::char_width)
                .sum();
            let cursor_x = area.x + 1 + cursor_offset as u16;
            if cursor_x < area.right() {
                let under = buf
                    .get(cursor_x, row)
                    .map(|cell| cell.ch)
                    .unwrap_or(' ');
                buf.set_string(cursor_x, row, &under.to_string(), filter_style.underline());
            }

            self.layout
                .insert(REGION_FILTER, Rect::new(area.x, row, area.width, 1));
            row += 1;
        }

        let content_width = area.width.saturating_sub(3) as usize;
        let visible: Vec<(String, String, bool, bool)> = self
            .registry
            .iter()
            .filter(|option| !self.registry.is_hidden(&option.value))
            .map(|option| {
                (
                    option.value.clone(),
                    option.label.clone(),
                    option.disabled,
                    self.state.is_selected(&option.value),
                )
            })
            .collect();

        for (value, label, disabled, selected) in visible {
            if row >= area.bottom() || row >= buf.height() {
                break;
            }

            let style = if disabled {
                Style::new(palette.option_disabled, palette.dropdown_bg).dim()
            } else if selected {
                Style::new(palette.option_selected, palette.dropdown_bg).bold()
            } else {
                Style::new(palette.option, palette.dropdown_bg)
            };

            buf.fill_row(area.x, row, area.width, style);
            let marker = if selected { "✓ " } else { "  " };
            buf.set_string(area.x, row, marker, style);
            let label = truncate_to_width(&label, content_width);
            buf.set_string(area.x + 2, row, &label, style);

            self.layout.insert(
                format!("{OPTION_PREFIX}{value}"),
                Rect::new(area.x, row, area.width, 1),
            );
            row += 1;
        }
    }
}
