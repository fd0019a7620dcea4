//! Paginated plain-text document builder.
//!
//! Pages are lists of lines. Every page opens with the running header and
//! closes with a `Page n of N` footer when the document is rendered.

use tabled::builder::Builder;
use tabled::settings::Style;

use super::types::RenderError;

/// Default page width in characters.
pub const DEFAULT_WIDTH: usize = 78;

/// Separator between pages (form feed).
pub const PAGE_BREAK: &str = "\u{000C}";

/// One page of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    lines: Vec<String>,
}

impl Page {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether any line on the page contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

/// A finished document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pages: Vec<Page>,
    width: usize,
}

impl Document {
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Render all pages with footers, separated by form feeds.
    pub fn to_text(&self) -> String {
        let total = self.pages.len();
        let mut out = String::new();

        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                out.push_str(PAGE_BREAK);
                out.push('\n');
            }
            for line in &page.lines {
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
            let footer = format!("Page {} of {}", i + 1, total);
            out.push_str(&format!("{:^width$}", footer, width = self.width));
            out.push('\n');
        }

        out
    }
}

/// Accumulates pages of text.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    width: usize,
    header: Vec<String>,
    pages: Vec<Page>,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

impl DocumentBuilder {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            header: Vec::new(),
            pages: Vec::new(),
        }
    }

    /// Lines repeated, centered, at the top of every page added afterwards.
    pub fn set_header(&mut self, lines: Vec<String>) {
        self.header = lines;
    }

    /// Start a new page.
    pub fn add_page(&mut self) {
        let mut page = Page::default();
        for line in &self.header {
            page.lines.push(format!("{:^width$}", line, width = self.width).trim_end().to_string());
        }
        if !self.header.is_empty() {
            page.lines.push(String::new());
        }
        self.pages.push(page);
    }

    fn current(&mut self) -> Result<&mut Page, RenderError> {
        self.pages.last_mut().ok_or(RenderError::NoPage)
    }

    /// Append a line of text.
    pub fn line(&mut self, text: impl Into<String>) -> Result<(), RenderError> {
        self.current()?.lines.push(text.into());
        Ok(())
    }

    /// Append an empty line.
    pub fn blank(&mut self) -> Result<(), RenderError> {
        self.line(String::new())
    }

    /// Append an underlined heading.
    pub fn heading(&mut self, text: &str) -> Result<(), RenderError> {
        let underline = "=".repeat(text.chars().count().min(self.width));
        self.line(text)?;
        self.line(underline)
    }

    /// Append text wrapped to the page width.
    pub fn paragraph(&mut self, text: &str) -> Result<(), RenderError> {
        let mut current = String::new();
        for word in text.split_whitespace() {
            if !current.is_empty() && current.len() + 1 + word.len() > self.width {
                self.line(std::mem::take(&mut current))?;
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            self.line(current)?;
        }
        Ok(())
    }

    /// Append a bordered table.
    pub fn table(&mut self, headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<(), RenderError> {
        let columns = headers.len();
        if let Some(bad) = rows.iter().find(|row| row.len() != columns) {
            return Err(RenderError::MalformedTable {
                expected: columns,
                found: bad.len(),
            });
        }

        let mut builder = Builder::default();
        builder.push_record(headers);
        for row in rows {
            builder.push_record(row);
        }

        let mut table = builder.build();
        table.with(Style::ascii());

        for line in table.to_string().lines() {
            self.line(line)?;
        }
        Ok(())
    }

    /// Append `count` ruled lines for handwritten notes.
    pub fn writing_lines(&mut self, count: usize) -> Result<(), RenderError> {
        let rule = "_".repeat(self.width);
        for _ in 0..count {
            self.blank()?;
            self.line(rule.clone())?;
        }
        Ok(())
    }

    /// Finish the document.
    pub fn build(self) -> Result<Document, RenderError> {
        if self.pages.is_empty() {
            return Err(RenderError::EmptyDocument);
        }
        Ok(Document {
            pages: self.pages,
            width: self.width,
        })
    }
}
