use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use super::image::{ImageEncoding, SignatureImage};

/// A4 portrait, in points.
pub const PAGE_WIDTH: f32 = 595.0;
pub const PAGE_HEIGHT: f32 = 842.0;
pub const MARGIN: f32 = 56.0;
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

const REGULAR: Name<'static> = Name(b"F1");
const BOLD: Name<'static> = Name(b"F2");
const SIGNATURE: Name<'static> = Name(b"Sig");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Regular,
    Bold,
}

/// Re-encodes text for the standard fonts' WinAnsi encoding. Characters it
/// cannot express become `?`.
pub fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            ' '..='~' => ch as u8,
            '\u{A0}'..='\u{FF}' => ch as u32 as u8,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            _ => b'?',
        })
        .collect()
}

/// Rough Helvetica advance; good enough for centering and wrapping form text.
pub fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5
}

/// Greedy word wrap against the estimated advance width.
pub fn wrap(text: &str, width: f32, size: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if text_width(&candidate, size) > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Absolute-position drawing over a growing list of pages.
pub struct Sheet {
    pages: Vec<Content>,
}

impl Sheet {
    pub fn new() -> Self {
        Self {
            pages: vec![Content::new()],
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn new_page(&mut self) {
        self.pages.push(Content::new());
    }

    fn page(&mut self) -> &mut Content {
        if self.pages.is_empty() {
            self.pages.push(Content::new());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    pub fn text(&mut self, x: f32, y: f32, size: f32, weight: Weight, text: &str) {
        let font = match weight {
            Weight::Regular => REGULAR,
            Weight::Bold => BOLD,
        };
        let encoded = win_ansi(text);
        let page = self.page();
        page.begin_text();
        page.set_font(font, size);
        page.next_line(x, y);
        page.show(Str(&encoded));
        page.end_text();
    }

    pub fn centered(&mut self, y: f32, size: f32, weight: Weight, text: &str) {
        let x = (PAGE_WIDTH - text_width(text, size)) / 2.0;
        self.text(x.max(MARGIN), y, size, weight, text);
    }

    /// Draws wrapped text and returns the baseline below the last line.
    pub fn paragraph(&mut self, x: f32, y: f32, width: f32, size: f32, text: &str) -> f32 {
        let leading = size * 1.4;
        let mut y = y;
        for line in wrap(text, width, size) {
            self.text(x, y, size, Weight::Regular, &line);
            y -= leading;
        }
        y
    }

    pub fn rule(&mut self, x1: f32, y: f32, x2: f32) {
        let page = self.page();
        page.set_line_width(0.75);
        page.move_to(x1, y);
        page.line_to(x2, y);
        page.stroke();
    }

    pub fn frame(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let page = self.page();
        page.set_line_width(0.75);
        page.rect(x, y, width, height);
        page.stroke();
    }

    /// Places the signature image scaled into the box, keeping its aspect ratio.
    pub fn signature(&mut self, image: &SignatureImage, x: f32, y: f32, max_w: f32, max_h: f32) {
        if image.width == 0 || image.height == 0 {
            return;
        }
        let scale = (max_w / image.width as f32).min(max_h / image.height as f32);
        let (w, h) = (image.width as f32 * scale, image.height as f32 * scale);
        let page = self.page();
        page.save_state();
        page.transform([w, 0.0, 0.0, h, x + (max_w - w) / 2.0, y]);
        page.x_object(SIGNATURE);
        page.restore_state();
    }

    /// Serializes the document. Object ids are fixed so output is reproducible.
    pub fn finish(self, title: &str, image: Option<&SignatureImage>) -> Vec<u8> {
        let catalog_id = Ref::new(1);
        let tree_id = Ref::new(2);
        let regular_id = Ref::new(3);
        let bold_id = Ref::new(4);
        let info_id = Ref::new(5);
        let image_id = Ref::new(6);
        let mask_id = Ref::new(7);
        let first_page = 8;

        let page_ids: Vec<Ref> = (0..self.pages.len())
            .map(|index| Ref::new(first_page + 2 * index as i32))
            .collect();

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(tree_id);
        pdf.pages(tree_id)
            .kids(page_ids.iter().copied())
            .count(page_ids.len() as i32);
        pdf.type1_font(regular_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.document_info(info_id)
            .title(TextStr(title))
            .producer(TextStr("Travel Request Admin"));

        if let Some(image) = image {
            let mut xobject = pdf.image_xobject(image_id, &image.data);
            xobject.width(image.width as i32);
            xobject.height(image.height as i32);
            xobject.bits_per_component(8);
            match image.encoding {
                ImageEncoding::Jpeg { components } => {
                    xobject.filter(Filter::DctDecode);
                    if components == 1 {
                        xobject.color_space().device_gray();
                    } else {
                        xobject.color_space().device_rgb();
                    }
                }
                ImageEncoding::Flate { colors } => {
                    xobject.filter(Filter::FlateDecode);
                    if colors == 1 {
                        xobject.color_space().device_gray();
                    } else {
                        xobject.color_space().device_rgb();
                    }
                }
            }
            if image.alpha.is_some() {
                xobject.s_mask(mask_id);
            }
            xobject.finish();

            if let Some(alpha) = &image.alpha {
                let mut mask = pdf.image_xobject(mask_id, alpha);
                mask.width(image.width as i32);
                mask.height(image.height as i32);
                mask.bits_per_component(8);
                mask.color_space().device_gray();
                mask.filter(Filter::FlateDecode);
                mask.finish();
            }
        }

        for (index, content) in self.pages.into_iter().enumerate() {
            let page_id = page_ids[index];
            let content_id = Ref::new(page_id.get() + 1);
            let mut page = pdf.page(page_id);
            page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
            page.parent(tree_id);
            page.contents(content_id);
            let mut resources = page.resources();
            resources
                .fonts()
                .pair(REGULAR, regular_id)
                .pair(BOLD, bold_id);
            if image.is_some() {
                resources.x_objects().pair(SIGNATURE, image_id);
            }
            resources.finish();
            page.finish();
            pdf.stream(content_id, &content.finish());
        }

        pdf.finish()
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}
