mod flash;
mod grid;
mod validate;

use std::cell::RefCell;
use std::fs::File;
use std::rc::Rc;
use std::time::Duration;

use selectdom::filter::FilterInput;
use selectdom::{
    Buffer, Event, FieldKind, Form, FormField, Key, Rect, Rgb, SelectConfig, SelectOption, Style,
    Terminal,
};
use simplelog::{Config, LevelFilter, WriteLogger};

use flash::Flash;
use grid::AvailabilityGrid;
use validate::validate_homepage;

const YEAR_AREA: Rect = Rect::new(2, 4, 30, 1);
const DEPT_AREA: Rect = Rect::new(40, 4, 36, 1);
const HOMEPAGE_ROW: u16 = 12;
const GRID_ROW: u16 = 15;

fn main() -> std::io::Result<()> {
    let log_file = File::create("formtui.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let flash = Rc::new(RefCell::new(Flash::new()));

    let mut form = Form::new();
    form.add_field(FormField::text("year"))
        .subscribe(|value| log::info!("year field now {value:?}"));
    {
        let flash = flash.clone();
        form.add_field(FormField::text("departments")).subscribe(move |value| {
            log::info!("departments field now {value}");
            flash.borrow_mut().show(format!("departments saved: {value}"));
        });
    }

    let mut year = form
        .attach_select(
            "year",
            vec![
                SelectOption::new("1", "first year"),
                SelectOption::new("2", "sophomore"),
                SelectOption::new("3", "junior"),
                SelectOption::new("4", "senior or super senior"),
                SelectOption::new("5", "graduate student"),
            ],
            SelectConfig::new().placeholder("class year"),
        )
        .expect("year select configuration");

    let limit_flash = flash.clone();
    let mut departments = form
        .attach_select(
            "departments",
            vec![
                SelectOption::new("1", "1 Civil and Environmental Engineering"),
                SelectOption::new("6", "6 EECS"),
                SelectOption::new("7", "7 Biology"),
                SelectOption::new("8", "8 Physics"),
                SelectOption::new("18", "18 Mathematics"),
                SelectOption::new("24", "24 Linguistics and Philosophy"),
            ],
            SelectConfig::new()
                .multiple(true)
                .limit(3)
                .short_tags(true)
                .autocomplete(true)
                .placeholder("departments (up to 3)")
                .on_limit(move |limit| {
                    limit_flash
                        .borrow_mut()
                        .show(format!("choose at most {limit} departments"));
                }),
        )
        .expect("departments select configuration");

    let mut grid = AvailabilityGrid::new(FormField::new("slots", FieldKind::Hidden));
    grid.field_mut()
        .subscribe(|value| log::debug!("slots field now {value}"));

    let mut homepage = FilterInput::new();
    let mut homepage_focused = false;

    let mut term = Terminal::new()?;

    loop {
        let (width, height) = term.size()?;
        let mut buf = Buffer::new(width, height);

        buf.set_string(2, 1, "Profile form", Style::default().bold());
        buf.set_string(16, 1, "Ctrl+Q quits", Style::default().dim());

        buf.set_string(YEAR_AREA.x, YEAR_AREA.y - 1, "class year", Style::default().dim());
        buf.set_string(DEPT_AREA.x, DEPT_AREA.y - 1, "departments", Style::default().dim());

        // Draw the closed-over widget first so an open dropdown overlaps it
        if year.is_open() {
            render_select(&mut departments, &mut buf, DEPT_AREA);
            render_select(&mut year, &mut buf, YEAR_AREA);
        } else {
            render_select(&mut year, &mut buf, YEAR_AREA);
            render_select(&mut departments, &mut buf, DEPT_AREA);
        }

        let homepage_rect = render_homepage(&mut buf, &homepage, homepage_focused, width);

        buf.set_string(2, GRID_ROW - 1, "weekly availability", Style::default().dim());
        grid.render(
            &mut buf,
            Rect::new(2, GRID_ROW, grid.desired_width(), grid.desired_height()),
        );

        if let Some(message) = flash.borrow().message() {
            let color = flash
                .borrow()
                .color(Rgb::new(138, 190, 255), Rgb::new(0, 0, 0));
            buf.set_string(
                2,
                height.saturating_sub(2),
                message,
                Style::new(color, Rgb::new(0, 0, 0)),
            );
        }

        term.draw(&buf)?;

        // Short timeout keeps the flash fade animating between events
        for raw in term.poll(Some(Duration::from_millis(120)))? {
            let Some(event) = Event::from_crossterm(&raw) else {
                continue;
            };

            if let Event::Key { key, modifiers } = event {
                if key == Key::Char('q') && modifiers.ctrl {
                    return Ok(());
                }
            }

            // An open dropdown gets first claim on the event so outside
            // clicks close it before anything else reacts
            let consumed = if year.is_open() {
                year.handle_event(&event) || departments.handle_event(&event)
            } else {
                departments.handle_event(&event) || year.handle_event(&event)
            };
            if consumed {
                continue;
            }

            if grid.handle_event(&event) {
                continue;
            }

            match event {
                Event::Click { x, y, .. } => {
                    homepage_focused = homepage_rect.contains(x, y);
                }
                Event::Key { key, modifiers } if homepage_focused => {
                    match key {
                        Key::Enter => match validate_homepage(homepage.text()) {
                            Ok(None) => flash.borrow_mut().show("homepage cleared"),
                            Ok(Some(url)) => {
                                flash.borrow_mut().show(format!("homepage saved: {url}"));
                            }
                            Err(err) => flash.borrow_mut().show(err.to_string()),
                        },
                        Key::Escape => homepage_focused = false,
                        _ => {
                            homepage.handle_key(key, modifiers);
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

fn render_select(widget: &mut selectdom::SelectWidget, buf: &mut Buffer, area: Rect) {
    let height = widget.desired_height();
    widget.render(buf, Rect::new(area.x, area.y, area.width, height));
}

fn render_homepage(buf: &mut Buffer, input: &FilterInput, focused: bool, width: u16) -> Rect {
    let label = "homepage: ";
    buf.set_string(2, HOMEPAGE_ROW, label, Style::default().dim());

    let x = 2 + label.len() as u16;
    let box_width = width.saturating_sub(x + 2).min(48);
    let rect = Rect::new(x, HOMEPAGE_ROW, box_width, 1);

    let style = if focused {
        Style::default().underline()
    } else {
        Style::default()
    };
    buf.fill_row(rect.x, rect.y, rect.width, style);
    let end = buf.set_string(rect.x, rect.y, input.text(), style);
    if focused && end < rect.right() {
        buf.set_string(end, rect.y, "▏", style);
    }
    rect
}
