use pdf_writer::{ Name, Ref };

use crate::types::Style;

/// a registered base-14 font, `name` doubles as the resource name on each page
#[derive(Debug)]
pub struct FontReference {
    pub id: Ref,
    pub style: Style,
    pub name: Name<'static>,
}
