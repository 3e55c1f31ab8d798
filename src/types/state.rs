use crate::types::{Directive, Style, TextAlignment};

#[derive(Debug,Clone,Copy,PartialEq,Eq,Default)]
pub enum Weight {
   #[default]
    Regular,
    Bold,
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Default)]
pub enum Slant {
   #[default]
    Regular,
    Italics,
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Default)]
pub enum Size {
   #[default]
    Normal,
    Large,
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Default)]
pub enum Fill {
    Fill,
   #[default]
    NoFill,
}

/// The formatting switches toggled by directives.
///
/// Created once per interpreter run and never reset by `.paragraph`, only
/// directives change it.
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default)]
pub struct FormattingState {
    pub weight: Weight,
    pub slant: Slant,
    pub size: Size,
    pub fill: Fill,
    pub indent_level: i32,
}

impl FormattingState {
    /// regular weight and slant, normal size, no fill, indent 0
    pub fn new() -> Self {
        FormattingState::default()
    }

    /// applies the effect of a directive, `.paragraph` leaves the state untouched
    pub fn apply(&mut self, directive: &Directive) {
        match *directive {
            Directive::Large => self.size = Size::Large,
            Directive::Normal => self.size = Size::Normal,
            Directive::Regular => self.weight = Weight::Regular,
            Directive::Bold => self.weight = Weight::Bold,
            Directive::Italics => self.slant = Slant::Italics,
            Directive::Fill => self.fill = Fill::Fill,
            Directive::NoFill => self.fill = Fill::NoFill,
            Directive::Indent(n) => self.indent_level = self.indent_level.saturating_add(n),
            Directive::Paragraph => {}
        }
    }

    /// weight and slant combine independently
    pub fn style(&self) -> Style {
        match (self.weight, self.slant) {
            (Weight::Regular, Slant::Regular) => Style::Regular,
            (Weight::Bold, Slant::Regular) => Style::Bold,
            (Weight::Regular, Slant::Italics) => Style::Italics,
            (Weight::Bold, Slant::Italics) => Style::BoldItalics,
        }
    }

    pub fn alignment(&self) -> TextAlignment {
        match self.fill {
            Fill::Fill => TextAlignment::Justify,
            Fill::NoFill => TextAlignment::Left,
        }
    }
}
