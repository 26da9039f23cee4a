use std::cell::RefCell;
use std::fs::File;
use std::rc::Rc;

use selectdom::{
    create_select, Buffer, Event, FormField, Key, Rect, SelectConfig, SelectOption, Style,
    Terminal,
};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> std::io::Result<()> {
    let log_file = File::create("multiselect-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let status = Rc::new(RefCell::new(String::new()));
    let limit_status = status.clone();

    let mut term = Terminal::new()?;

    let mut widget = create_select(
        FormField::text("departments"),
        vec![
            SelectOption::new("6", "6 EECS"),
            SelectOption::new("8", "8 Physics"),
            SelectOption::new("18", "18 Mathematics"),
            SelectOption::new("9", "9 Brain and Cognitive Sciences"),
            SelectOption::new("24", "24 Linguistics and Philosophy"),
        ],
        SelectConfig::new()
            .multiple(true)
            .limit(3)
            .short_tags(true)
            .placeholder("departments (up to 3)")
            .on_limit(move |limit| {
                *limit_status.borrow_mut() = format!("at most {limit} departments");
            }),
    )
    .expect("select configuration");

    loop {
        let (width, height) = term.size()?;
        let mut buf = Buffer::new(width, height);

        buf.set_string(
            2,
            1,
            "Multi-select demo - click options to toggle, x removes a tag, q quits",
            Style::default(),
        );

        widget.render(&mut buf, Rect::new(2, 3, 36, widget.desired_height()));

        buf.set_string(
            2,
            height.saturating_sub(3),
            &status.borrow(),
            Style::default().bold(),
        );
        buf.set_string(
            2,
            height.saturating_sub(2),
            &format!("backing field: {}", widget.field().value()),
            Style::default().dim(),
        );

        term.draw(&buf)?;

        for raw in term.poll(None)? {
            let Some(event) = Event::from_crossterm(&raw) else {
                continue;
            };
            status.borrow_mut().clear();
            if widget.handle_event(&event) {
                continue;
            }
            if let Event::Key {
                key: Key::Char('q') | Key::Escape,
                ..
            } = event
            {
                return Ok(());
            }
        }
    }
}
