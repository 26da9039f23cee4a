#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub dim: bool,
    pub underline: bool,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Cell style: colors plus text attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub text: TextStyle,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            text: TextStyle::new(),
        }
    }
}

impl Style {
    pub fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            text: TextStyle::new(),
        }
    }

    pub fn bold(mut self) -> Self {
        self.text.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text.dim = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text.underline = true;
        self
    }
}

/// Colors used by the select renderer.
///
/// Defaults are merged with caller overrides at construction via
/// `SelectConfig::palette`; there is no shared mutable default table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectPalette {
    pub container_bg: Rgb,
    pub text: Rgb,
    pub placeholder: Rgb,
    pub dropdown_bg: Rgb,
    pub option: Rgb,
    pub option_disabled: Rgb,
    pub option_selected: Rgb,
    pub tag_bg: Rgb,
    pub tag_fg: Rgb,
    pub filter_bg: Rgb,
    pub filter_fg: Rgb,
}

impl Default for SelectPalette {
    fn default() -> Self {
        Self {
            container_bg: Rgb::new(38, 42, 51),
            text: Rgb::new(220, 223, 228),
            placeholder: Rgb::new(120, 126, 138),
            dropdown_bg: Rgb::new(30, 33, 40),
            option: Rgb::new(200, 204, 212),
            option_disabled: Rgb::new(100, 105, 115),
            option_selected: Rgb::new(138, 190, 255),
            tag_bg: Rgb::new(58, 66, 82),
            tag_fg: Rgb::new(220, 223, 228),
            filter_bg: Rgb::new(24, 26, 32),
            filter_fg: Rgb::new(220, 223, 228),
        }
    }
}
