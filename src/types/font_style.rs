/// Resolved font variant of a run, weight × slant
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Default)]
pub enum Style {
   #[default]
    Regular,
    Bold,
    Italics,
    BoldItalics,
}

