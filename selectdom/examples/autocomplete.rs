use selectdom::{
    create_select, Buffer, Event, FormField, Key, Rect, SelectConfig, SelectOption, Style,
    Terminal,
};

fn main() -> std::io::Result<()> {
    let mut term = Terminal::new()?;

    let mut widget = create_select(
        FormField::text("department"),
        vec![
            SelectOption::new("1", "1 Civil and Environmental Engineering"),
            SelectOption::new("2", "2 Mechanical Engineering"),
            SelectOption::new("5", "5 Chemistry"),
            SelectOption::new("6", "6 EECS"),
            SelectOption::new("7", "7 Biology"),
            SelectOption::new("8", "8 Physics"),
            SelectOption::new("12", "12 EAPS"),
            SelectOption::new("14", "14 Economics"),
            SelectOption::new("18", "18 Mathematics"),
            SelectOption::new("21L", "21L Literature"),
            SelectOption::new("21M", "21M Music and Theater Arts"),
            SelectOption::new("24", "24 Linguistics and Philosophy"),
        ],
        SelectConfig::new()
            .autocomplete(true)
            .placeholder("department"),
    )
    .expect("select configuration");

    loop {
        let (width, height) = term.size()?;
        let mut buf = Buffer::new(width, height);

        buf.set_string(
            2,
            1,
            "Autocomplete demo - open and type to filter, Ctrl+C or Esc quits",
            Style::default(),
        );

        widget.render(&mut buf, Rect::new(2, 3, 42, widget.desired_height()));

        buf.set_string(
            2,
            height.saturating_sub(2),
            &format!("backing field: {:?}", widget.field().value()),
            Style::default().dim(),
        );

        term.draw(&buf)?;

        for raw in term.poll(None)? {
            let Some(event) = Event::from_crossterm(&raw) else {
                continue;
            };
            if let Event::Key { key, modifiers } = event {
                if matches!(key, Key::Char('c')) && modifiers.ctrl {
                    return Ok(());
                }
            }
            if widget.handle_event(&event) {
                continue;
            }
            if let Event::Key {
                key: Key::Escape, ..
            } = event
            {
                return Ok(());
            }
        }
    }
}
