use std::path::Path;

use chrono::{ Datelike, Local, Timelike };
use pdf_writer::{ Chunk, Date, Finish, Name, Pdf, Rect, Ref, TextStr };
use tracing::info;

use crate::{
    config::Config,
    traits::DocumentSink,
    types::{
        Paragraph,
        Result,
        TextBlock,
        Word,
        Writer
 }};

/// # PDF document sink
/// Collects sealed paragraphs and lays them out on A4 (by default) pages when closed.
#[derive(Debug,Default)]
pub struct Doc {
    pub config: Config,
    pub paragraphs: Vec<Paragraph>,
}

impl Doc {
    pub fn new(config: Config) -> Self {
        Doc {
            config,
            paragraphs: Vec::new(),
        }
    }

    /// closes the document and writes the PDF to `path`
    pub fn save(self, path: &Path) -> Result<()> {
        let bytes = self.close()?;
        std::fs::write(path, bytes)?;
        info!(path = %path.display(), "document saved");
        Ok(())
    }

    /// Entry point: builds the `Writer` struct, registers the base fonts and outputs a finished PDF
    pub fn render(&self) -> Vec<u8> {
        let mut pdf = Pdf::new();
        let mut secondary = Chunk::new();
        let mut write_head = Writer::new(&self.config);

        let page_tree_id = write_head.bump();

        for ref_obj in write_head.font_refs.iter() {
            pdf.type1_font(ref_obj.id)
                .base_font(ref_obj.name)
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        for paragraph in &self.paragraphs {
            Doc::render_paragraph(&mut write_head, paragraph, &self.config);
        }

        let pages = std::mem::take(&mut write_head.pages);
        let page_ids: Vec<Ref> = pages.iter().map(|page| page.page_id).collect();

        for page in pages {
            secondary.stream(page.content.content_id, &page.content.content.finish());

            let mut pdf_page = pdf.page(page.page_id);
            pdf_page.media_box(Rect::new(0.0, 0.0, write_head.page_width, write_head.page_height));
            pdf_page.parent(page_tree_id);
            pdf_page.contents(page.content.content_id);

            let mut resources = pdf_page.resources();
            let mut fonts = resources.fonts();

            for ref_obj in write_head.font_refs.iter() {
                fonts.pair(ref_obj.name, ref_obj.id);
            }

            fonts.finish();
            resources.finish();
        }

        // Add the content streams to the PDF.
        pdf.extend(&secondary);

        // Write the root of the page tree.
        pdf.pages(page_tree_id)
            .kids(page_ids.iter().copied())
            .count(page_ids.len() as i32);

        // Write the document catalog.
        pdf.catalog(write_head.bump()).pages(page_tree_id);

        self.write_info(&mut pdf, write_head.bump());

        let file_id: [u8; 16] = rand::random();
        pdf.set_file_id((file_id.to_vec(), file_id.to_vec()));

        info!(paragraphs = self.paragraphs.len(), pages = page_ids.len(), "document rendered");

        pdf.finish()
    }

    /// title, author, creator and creation date
    fn write_info(&self, pdf: &mut Pdf, id: Ref) {
        let now = Local::now();
        let offset_minutes = now.offset().local_minus_utc() / 60;

        let created = Date::new(now.year() as u16)
            .month(now.month() as u8)
            .day(now.day() as u8)
            .hour(now.hour() as u8)
            .minute(now.minute() as u8)
            .second(now.second() as u8)
            .utc_offset_hour((offset_minutes / 60) as i8)
            .utc_offset_minute((offset_minutes % 60).unsigned_abs() as u8);

        let mut info = pdf.document_info(id);

        if let Some(title) = &self.config.title {
            info.title(TextStr(title));
        }

        if let Some(author) = &self.config.author {
            info.author(TextStr(author));
        }

        info.creator(TextStr("txtpdf"));
        info.creation_date(created);
    }

    /// splits the runs of a paragraph into `Word` objects on any whitespace, a word without
    /// whitespace in front of it is glued to the previous word
    fn words(write_head: &Writer, paragraph: &Paragraph) -> Vec<Word> {
        let mut words = Vec::new();
        let mut spaced = false;

        for run in &paragraph.runs {
            let space_width = write_head.word_width(" ", &run.style, run.font_size);

            for (index, piece) in run.content.split(char::is_whitespace).enumerate() {
                spaced |= index > 0;

                if piece.is_empty() {
                    continue;
                }

                let word = Word {
                    text: piece.to_string(),
                    font_style: run.style,
                    font_size: run.font_size,
                    offset: if spaced { space_width } else { 0.0 },
                    width: write_head.word_width(piece, &run.style, run.font_size),
                    stretchable: spaced,
                };

                words.push(word);
                spaced = false;
            }
        }

        words
    }

    /// Lays out one paragraph and hands it to the `Writer`
    /// - breaks lines only in front of spaced words
    /// - a word that does not fit an empty line is placed anyway
    /// - applies fill/no-fill alignment
    /// - adds the paragraph spacing below the block
    fn render_paragraph(write_head: &mut Writer, paragraph: &Paragraph, config: &Config) {
        let text_width = write_head.text_width();
        let indent = paragraph.left_margin.clamp(0.0, text_width / 2.0);
        let writeable_area = text_width - indent;

        let mut text_block = TextBlock::new()
            .with_font_size(config.normal_font_size)
            .and_alignment(paragraph.alignment)
            .and_indent(indent);

        // group glued words into clusters that must share a line
        let mut clusters: Vec<Vec<Word>> = Vec::new();

        for word in Doc::words(write_head, paragraph) {
            match clusters.last_mut() {
                Some(cluster) if !word.stretchable => cluster.push(word),
                Some(_) | None => clusters.push(vec![word]),
            }
        }

        for cluster in clusters {
            let cluster_width: f32 = cluster.iter().map(|word| word.offset + word.width).sum();
            let line = text_block.current();

            if !line.body.is_empty() && line.width + cluster_width > writeable_area {
                text_block.next();
            }

            let line = text_block.current();
            let line_start = line.body.is_empty();

            for (index, mut word) in cluster.into_iter().enumerate() {
                // no gap at the start of a line
                if line_start && index == 0 {
                    word.offset = 0.0;
                    word.stretchable = false;
                }

                line.push(word);
            }
        }

        text_block.apply_alignment(writeable_area);

        write_head.write(text_block);
        write_head.feed(config.paragraph_spacing);
    }
}

impl DocumentSink for Doc {
    type Output = Vec<u8>;

    fn add(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// renders the collected paragraphs into PDF bytes
    fn close(self) -> Result<Self::Output> {
        Ok(self.render())
    }
}
