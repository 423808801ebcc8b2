use crate::classifier::spans::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub const SLATE_GRAY: Color = Color::rgb(112, 128, 144);
    pub const BLUE_VIOLET: Color = Color::rgb(138, 43, 226);
    pub const GREEN: Color = Color::rgb(87, 166, 74);
    pub const BLUE: Color = Color::rgb(86, 156, 214);
    pub const LIGHT_BLUE: Color = Color::rgb(156, 220, 254);
    pub const SILVER: Color = Color::rgb(180, 180, 180);
    pub const SALMON: Color = Color::rgb(214, 157, 133);
    pub const PALE_GREEN: Color = Color::rgb(181, 206, 168);
}

/// How the host should draw one category. Has no bearing on classification.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Style {
    pub display_name: String,
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
    pub underline: bool,
}

impl Style {
    pub fn new(display_name: &str) -> Self {
        Style {
            display_name: String::from(display_name),
            ..Style::default()
        }
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        self.foreground.is_none() && self.background.is_none() && !self.bold && !self.underline
    }
}

fn default_style(category: Category) -> Style {
    match category {
        Category::Comment => Style::new("Comment").foreground(Color::GREEN),
        Category::Keyword => Style::new("Keyword").foreground(Color::BLUE).bold(),
        Category::ReferenceDelimiter => Style::new("Reference").foreground(Color::SLATE_GRAY).bold(),
        Category::ReferenceValue => Style::new("Reference Value").foreground(Color::LIGHT_BLUE),
        // `@` keeps the editor's text colour.
        Category::PreprocessorMarker => Style::new("Quiet"),
        Category::Operator => Style::new("Operator").foreground(Color::SILVER),
        Category::StringLiteral => Style::new("String").foreground(Color::SALMON),
        Category::Number => Style::new("Number").foreground(Color::PALE_GREEN),
    }
}

/// Style for every [`Category`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    styles: [Style; Category::ALL.len()],
}

impl Default for StyleTable {
    fn default() -> Self {
        StyleTable {
            styles: Category::ALL.map(default_style),
        }
    }
}

impl StyleTable {
    pub fn get(&self, category: Category) -> &Style {
        &self.styles[category as usize]
    }

    pub fn set(&mut self, category: Category, style: Style) {
        self.styles[category as usize] = style;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &Style)> {
        Category::ALL.into_iter().zip(self.styles.iter())
    }
}
