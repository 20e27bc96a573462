use chrono::{Datelike, Timelike, Utc};
use pdf_writer::{Content, Date, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::error::Error;
use crate::fonts;
use crate::latin1;
use crate::model::{BuiltinFont, Document, Metadata, PT_PER_MM, PageLayout};

const PRODUCER: &str = concat!("textside-pdf ", env!("CARGO_PKG_VERSION"));

/// Page-flow PDF writer over the standard Type 1 fonts.
///
/// Coordinates are millimetres from the top-left corner of the page; the
/// conversion to PDF user space happens when a line is emitted.
pub struct Writer {
    layout: PageLayout,
    pages: Vec<Content>,
    fonts_used: Vec<BuiltinFont>,
    font: Option<(BuiltinFont, f32)>,
    x: f32,
    y: f32,
}

impl Writer {
    pub fn new(layout: PageLayout) -> Result<Self, Error> {
        let dimensions = [
            layout.page_width,
            layout.page_height,
            layout.margin_left,
            layout.margin_top,
            layout.margin_right,
            layout.margin_bottom,
            layout.cell_margin,
        ];
        if dimensions.iter().any(|v| !v.is_finite()) {
            return Err(Error::Pdf("layout values must be finite".into()));
        }
        if layout.page_width <= 0.0 || layout.page_height <= 0.0 {
            return Err(Error::Pdf(format!(
                "invalid page size {}x{}",
                layout.page_width, layout.page_height
            )));
        }
        let printable_width = layout.page_width - layout.margin_left - layout.margin_right;
        if printable_width - 2.0 * layout.cell_margin <= 0.0 {
            return Err(Error::Pdf("margins leave no room for text".into()));
        }
        Ok(Writer {
            layout,
            pages: Vec::new(),
            fonts_used: Vec::new(),
            font: None,
            x: layout.margin_left,
            y: layout.margin_top,
        })
    }

    pub fn set_auto_page_break(&mut self, auto: bool, margin: f32) {
        self.layout.auto_page_break = auto;
        self.layout.margin_bottom = margin;
    }

    pub fn add_page(&mut self) {
        self.pages.push(Content::new());
        self.x = self.layout.margin_left;
        self.y = self.layout.margin_top;
    }

    pub fn set_font(&mut self, font: BuiltinFont, size: f32) -> Result<(), Error> {
        if !(size > 0.0 && size.is_finite()) {
            return Err(Error::Pdf(format!("invalid font size {size}")));
        }
        if !self.fonts_used.contains(&font) {
            self.fonts_used.push(font);
        }
        self.font = Some((font, size));
        Ok(())
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Current cursor position in millimetres from the top-left corner.
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Append flowing text with line height `h`.
    ///
    /// Lines wrap at the last space that fits, overlong words are broken
    /// between characters, and `\n` starts a new line. Text after the last
    /// break stays on the current line so a following call continues it.
    pub fn write(&mut self, h: f32, text: &str) -> Result<(), Error> {
        let (font, size) = self
            .font
            .ok_or_else(|| Error::Pdf("no font selected".into()))?;
        if self.pages.is_empty() {
            return Err(Error::Pdf("no page added".into()));
        }
        if !(h >= 0.0 && h.is_finite()) {
            return Err(Error::Pdf(format!("invalid line height {h}")));
        }

        let bytes: Vec<u8> = latin1::encode(text)
            .into_iter()
            .filter(|&b| b != b'\r')
            .collect();
        // millimetres per 1/1000 em
        let scale = size / PT_PER_MM / 1000.0;

        let mut start = 0;
        let mut sep: Option<usize> = None;
        let mut width = 0u32;
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            if b == b'\n' {
                self.emit_line(h, &bytes[start..i], true)?;
                i += 1;
                start = i;
                sep = None;
                width = 0;
                continue;
            }
            if b == b' ' {
                sep = Some(i);
            }
            width += u32::from(fonts::char_width(font, b));

            if width as f32 * scale > self.line_room() {
                match sep {
                    Some(s) => {
                        self.emit_line(h, &bytes[start..s], true)?;
                        i = s + 1;
                    }
                    None if self.x > self.layout.margin_left => {
                        // The word does not fit after earlier text; retry it on a fresh line.
                        self.x = self.layout.margin_left;
                        self.y += h;
                        i = start;
                    }
                    None => {
                        let end = if i == start { i + 1 } else { i };
                        self.emit_line(h, &bytes[start..end], true)?;
                        i = end;
                    }
                }
                start = i;
                sep = None;
                width = 0;
                continue;
            }
            i += 1;
        }
        if start < bytes.len() {
            self.emit_line(h, &bytes[start..], false)?;
        }
        Ok(())
    }

    fn line_room(&self) -> f32 {
        self.layout.page_width - self.layout.margin_right - self.x - 2.0 * self.layout.cell_margin
    }

    fn emit_line(&mut self, h: f32, bytes: &[u8], line_break: bool) -> Result<(), Error> {
        let (font, size) = self
            .font
            .ok_or_else(|| Error::Pdf("no font selected".into()))?;

        if self.layout.auto_page_break && self.y + h > self.layout.page_break_trigger() {
            let x = self.x;
            log::debug!("Page break after page {}", self.pages.len());
            self.add_page();
            self.x = x;
        }

        let font_mm = size / PT_PER_MM;
        let advance = fonts::string_width(font, bytes) as f32 * font_mm / 1000.0;

        if !bytes.is_empty() {
            let resource = self.resource_name(font);
            let x_pt = (self.x + self.layout.cell_margin) * PT_PER_MM;
            let baseline = self.y + 0.5 * h + 0.3 * font_mm;
            let y_pt = (self.layout.page_height - baseline) * PT_PER_MM;
            let content = self
                .pages
                .last_mut()
                .ok_or_else(|| Error::Pdf("no page added".into()))?;
            content
                .begin_text()
                .set_font(Name(resource.as_bytes()), size)
                .next_line(x_pt, y_pt)
                .show(Str(bytes))
                .end_text();
        }

        if line_break {
            self.x = self.layout.margin_left;
            self.y += h;
        } else {
            self.x += advance;
        }
        Ok(())
    }

    fn resource_name(&self, font: BuiltinFont) -> String {
        let index = self
            .fonts_used
            .iter()
            .position(|&f| f == font)
            .unwrap_or(0);
        format!("F{}", index + 1)
    }

    /// Serialize every page into a complete PDF file.
    pub fn finish(self, metadata: &Metadata) -> Result<Vec<u8>, Error> {
        if self.pages.is_empty() {
            return Err(Error::Pdf("document has no pages".into()));
        }

        let mut pdf = Pdf::new();
        let mut next_id = 1;
        let mut alloc = || {
            let r = Ref::new(next_id);
            next_id += 1;
            r
        };

        let catalog_id = alloc();
        let pages_id = alloc();
        let info_id = alloc();
        let font_ids: Vec<(String, Ref)> = self
            .fonts_used
            .iter()
            .enumerate()
            .map(|(i, _)| (format!("F{}", i + 1), alloc()))
            .collect();
        let page_ids: Vec<(Ref, Ref)> = self.pages.iter().map(|_| (alloc(), alloc())).collect();

        pdf.catalog(catalog_id).pages(pages_id);
        pdf.pages(pages_id)
            .kids(page_ids.iter().map(|&(page_id, _)| page_id))
            .count(page_ids.len() as i32);

        let media_box = Rect::new(
            0.0,
            0.0,
            self.layout.page_width * PT_PER_MM,
            self.layout.page_height * PT_PER_MM,
        );

        for (content, &(page_id, content_id)) in self.pages.into_iter().zip(&page_ids) {
            pdf.stream(content_id, &content.finish());

            let mut page = pdf.page(page_id);
            page.media_box(media_box).parent(pages_id).contents(content_id);
            let mut resources = page.resources();
            let mut font_dict = resources.fonts();
            for (name, font_id) in &font_ids {
                font_dict.pair(Name(name.as_bytes()), *font_id);
            }
        }

        for (font, (_, font_id)) in self.fonts_used.iter().zip(&font_ids) {
            pdf.type1_font(*font_id)
                .base_font(Name(font.base_name().as_bytes()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        let created = metadata.creation_date.unwrap_or_else(Utc::now);
        let date = Date::new(created.year().clamp(0, 9999) as u16)
            .month(created.month() as u8)
            .day(created.day() as u8)
            .hour(created.hour() as u8)
            .minute(created.minute() as u8)
            .second(created.second() as u8)
            .utc_offset_hour(0)
            .utc_offset_minute(0);

        {
            let mut info = pdf.document_info(info_id);
            info.producer(TextStr(PRODUCER)).creation_date(date);
            if let Some(title) = &metadata.title {
                info.title(TextStr(title));
            }
        }

        Ok(pdf.finish())
    }
}

pub fn render(doc: &Document) -> Result<Vec<u8>, Error> {
    let mut writer = Writer::new(doc.layout)?;
    writer.set_auto_page_break(doc.layout.auto_page_break, doc.layout.margin_bottom);
    writer.add_page();
    writer.set_font(doc.style.font, doc.style.font_size)?;
    writer.write(doc.style.line_height, &doc.text)?;
    log::debug!("Rendered {} page(s)", writer.page_count());
    writer.finish(&doc.metadata)
}
