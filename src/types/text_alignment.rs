/// Paragraph alignment, `.fill` justifies and `.nofill` aligns left
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default)]
pub enum TextAlignment {
   #[default]
    Left,
    Justify,
}
