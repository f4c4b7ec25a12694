//! Minimal flowing page layout on top of pdf-writer: headings, wrapped
//! paragraphs and zebra-striped tables, with automatic page breaks.

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    content: Content,
    current_content_id: Option<Ref>,

    title: String,
    cursor_y: f32,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl PdfManager {
    /// Letter-sized portrait pages with `title` repeated on each page.
    pub fn new(title: &str) -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            content: Content::new(),
            current_content_id: None,

            title: title.to_string(),
            cursor_y: 0.0,

            page_w: 612.0,
            page_h: 792.0,
            margin: 36.0,
            row_h: 18.0,

            next_id,
            font_id,

            font_size: 9.0,
            header_font_size: 10.0,
            title_font_size: 14.0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn content_width(&self) -> f32 {
        self.page_w - 2.0 * self.margin
    }

    /// Close the current page (if any) and open a new one.
    fn new_page(&mut self) {
        self.finalize_page();

        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);
        page.resources().fonts().pair(Name(b"F1"), self.font_id);
        drop(page);

        self.current_content_id = Some(content_id);
        self.cursor_y = self.page_h - self.margin - 30.0;
        self.draw_page_header_footer();
    }

    /// Write the stream of the current page.
    fn finalize_page(&mut self) {
        if let Some(id) = self.current_content_id.take() {
            let content = std::mem::replace(&mut self.content, Content::new());
            self.pdf.stream(id, &content.finish());
        }
    }

    /// Make room for `height` points and return the baseline of that band.
    fn reserve(&mut self, height: f32) -> f32 {
        if self.current_content_id.is_none() || self.cursor_y - height < self.margin {
            self.new_page();
        }
        self.cursor_y -= height;
        self.cursor_y
    }

    fn draw_text(content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(ascii_text(text).as_bytes()));
        content.end_text();
    }

    fn draw_page_header_footer(&mut self) {
        Self::draw_text(
            &mut self.content,
            self.margin,
            self.page_h - self.margin,
            self.title_font_size,
            &self.title,
        );

        let pg = format!("Page {}", self.page_refs.len());
        Self::draw_text(
            &mut self.content,
            self.page_w - self.margin - 40.0,
            self.margin - 20.0,
            self.font_size,
            &pg,
        );
    }

    /// Section heading.
    pub fn heading(&mut self, text: &str) {
        let y = self.reserve(self.row_h + 6.0);
        Self::draw_text(
            &mut self.content,
            self.margin,
            y + 6.0,
            self.header_font_size + 2.0,
            text,
        );
    }

    /// Free text, wrapped to the page width.
    pub fn paragraph(&mut self, text: &str) {
        let chars_per_line = (self.content_width() / (self.font_size * 0.5)) as usize;
        let line_h = self.font_size + 4.0;

        for line in textwrap::wrap(text, chars_per_line.max(20)) {
            let y = self.reserve(line_h);
            Self::draw_text(&mut self.content, self.margin, y, self.font_size, &line);
        }
        self.cursor_y -= 4.0;
    }

    /// Table with a shaded header row, repeated after each page break.
    pub fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) {
        let col_widths = self.compute_col_widths(headers, rows);
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let total_w: f32 = col_widths.iter().sum();

        self.table_header(&col_widths, &header_row);

        for (i, row) in rows.iter().enumerate() {
            if self.cursor_y - self.row_h < self.margin {
                self.new_page();
                self.table_header(&col_widths, &header_row);
            }

            let y = self.reserve(self.row_h);

            // zebra stripe
            if i % 2 == 0 {
                self.content.save_state();
                self.content.set_fill_rgb(0.96, 0.96, 0.96);
                self.content.rect(self.margin, y, total_w, self.row_h);
                self.content.fill_nonzero();
                self.content.restore_state();
            }

            Self::draw_row(
                &mut self.content,
                y,
                &col_widths,
                self.margin,
                row,
                self.font_size,
                self.row_h,
            );
        }

        self.cursor_y -= 8.0;
    }

    fn table_header(&mut self, col_widths: &[f32], header_row: &[String]) {
        let y = self.reserve(self.row_h);
        let total_w: f32 = col_widths.iter().sum();

        self.content.save_state();
        self.content.set_fill_rgb(0.85, 0.87, 0.90);
        self.content.rect(self.margin, y, total_w, self.row_h);
        self.content.fill_nonzero();
        self.content.restore_state();

        Self::draw_row(
            &mut self.content,
            y,
            col_widths,
            self.margin,
            header_row,
            self.header_font_size,
            self.row_h,
        );
    }

    fn draw_row(
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        x_start: f32,
        row: &[String],
        font_size: f32,
        row_h: f32,
    ) {
        let mut x = x_start;

        for (text, &w) in row.iter().zip(col_widths) {
            let max_chars = (w / (font_size * 0.5)).max(1.0) as usize;
            let shown: String = text.chars().take(max_chars).collect();

            Self::draw_text(content, x + 4.0, y + 5.0, font_size, &shown);

            content.save_state();
            content.set_stroke_rgb(0.65, 0.65, 0.65);
            content.rect(x, y, w, row_h);
            content.stroke();
            content.restore_state();

            x += w;
        }
    }

    /// Column widths from header + content, scaled down to the page.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.5).collect();

        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (cell.len() as f32 * 5.2).max(*w);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.content_width();

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    /// Build the catalog + page tree and return the document bytes.
    pub fn finish(mut self) -> Vec<u8> {
        if self.page_refs.is_empty() {
            self.new_page();
        }
        self.finalize_page();

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.iter().copied());
        drop(pages);

        self.pdf.finish()
    }

    pub fn save(self, path: &Path) -> std::io::Result<()> {
        let bytes = self.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// Text is written as single-byte strings; non-ASCII becomes '?'.
fn ascii_text(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '?' })
        .collect()
}
