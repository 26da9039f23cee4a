use selectdom::{
    create_select, Buffer, Event, FormField, Key, Rect, SelectConfig, SelectOption, Style,
    Terminal,
};

fn main() -> std::io::Result<()> {
    let mut term = Terminal::new()?;

    let mut widget = create_select(
        FormField::text("year"),
        vec![
            SelectOption::new("1", "first year"),
            SelectOption::new("2", "sophomore"),
            SelectOption::new("3", "junior"),
            SelectOption::new("4", "senior or super senior"),
            SelectOption::new("5", "graduate student"),
        ],
        SelectConfig::new().placeholder("class year"),
    )
    .expect("select configuration");

    loop {
        let (width, height) = term.size()?;
        let mut buf = Buffer::new(width, height);

        buf.set_string(
            2,
            1,
            "Select demo - click or Down to open, Esc closes, q quits",
            Style::default(),
        );

        widget.render(&mut buf, Rect::new(2, 3, 30, widget.desired_height()));

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
