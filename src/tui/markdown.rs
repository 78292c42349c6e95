//! Markdown → ratatui `Text` renderer.
//!
//! Thin wrapper around `pulldown_cmark` for the bio and project
//! descriptions: headings, bold, italic, inline code, lists, blockquotes,
//! and links. Fenced code blocks render as plain dim text; a portfolio bio
//! has no use for a full highlighting pipeline.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

/// Parse markdown content into styled `Text`.
///
/// Returns owned text (`'static`) so callers aren't constrained by input
/// lifetime.
pub fn render(content: &str, base_fg: Color) -> Text<'static> {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let mut w = Writer::new(base_fg);
    for event in Parser::new_ext(content, opts) {
        w.handle(event);
    }
    w.flush_line();
    w.text
}

struct Writer {
    text: Text<'static>,
    base_fg: Color,
    /// Inline style stack; styles compose via `patch` so nested bold+italic
    /// works.
    styles: Vec<Style>,
    /// Spans accumulated for the line being built.
    current: Vec<Span<'static>>,
    /// Per-line prefix (blockquote bar, list bullet indentation).
    quote_depth: usize,
    /// List nesting: None = unordered, Some(n) = ordered at index n.
    list_indices: Vec<Option<u64>>,
    /// True inside a fenced code block.
    in_code_block: bool,
    /// Stored link URL, appended after the link text closes.
    link_url: Option<String>,
    /// Whether the next block element should be preceded by a blank line.
    needs_newline: bool,
}

impl Writer {
    fn new(base_fg: Color) -> Self {
        Self {
            text: Text::default(),
            base_fg,
            styles: vec![],
            current: vec![],
            quote_depth: 0,
            list_indices: vec![],
            in_code_block: false,
            link_url: None,
            needs_newline: false,
        }
    }

    fn style(&self) -> Style {
        let base = Style::default().fg(self.base_fg);
        self.styles.iter().fold(base, |acc, s| acc.patch(*s))
    }

    fn push_style(&mut self, style: Style) {
        self.styles.push(style);
    }

    fn pop_style(&mut self) {
        self.styles.pop();
    }

    fn span(&mut self, content: String) {
        let style = self.style();
        self.current.push(Span::styled(content, style));
    }

    /// Finish the line being built and append it to the output.
    fn flush_line(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let mut spans = Vec::new();
        for _ in 0..self.quote_depth {
            spans.push(Span::styled("│ ", Style::default().fg(Color::DarkGray)));
        }
        spans.append(&mut self.current);
        self.text.lines.push(Line::from(spans));
    }

    fn blank_line_if_needed(&mut self) {
        if self.needs_newline && !self.text.lines.is_empty() {
            self.text.lines.push(Line::default());
        }
        self.needs_newline = false;
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(tag) => self.close(tag),
            Event::Text(t) => {
                if self.in_code_block {
                    // Each line of a code block becomes its own dim line
                    for line in t.lines() {
                        self.span(line.to_string());
                        self.flush_line();
                    }
                } else {
                    self.span(t.to_string());
                }
            }
            Event::Code(c) => {
                let style = Style::default().fg(Color::Yellow);
                self.current.push(Span::styled(format!("`{c}`"), style));
            }
            Event::SoftBreak => self.span(" ".to_string()),
            Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.flush_line();
                self.blank_line_if_needed();
                self.text.lines.push(Line::from(Span::styled(
                    "────────",
                    Style::default().fg(Color::DarkGray),
                )));
                self.needs_newline = true;
            }
            _ => {}
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.blank_line_if_needed(),
            Tag::Heading { level, .. } => {
                self.blank_line_if_needed();
                self.push_style(heading_style(level));
            }
            Tag::BlockQuote(_) => {
                self.blank_line_if_needed();
                self.quote_depth += 1;
            }
            Tag::CodeBlock(_) => {
                self.blank_line_if_needed();
                self.in_code_block = true;
                self.push_style(Style::default().fg(Color::DarkGray));
            }
            Tag::List(start) => {
                if self.list_indices.is_empty() {
                    self.blank_line_if_needed();
                }
                self.list_indices.push(start);
            }
            Tag::Item => {
                let indent = "  ".repeat(self.list_indices.len().saturating_sub(1));
                let marker = match self.list_indices.last_mut() {
                    Some(Some(n)) => {
                        let m = format!("{indent}{n}. ");
                        *n += 1;
                        m
                    }
                    _ => format!("{indent}• "),
                };
                self.current
                    .push(Span::styled(marker, Style::default().fg(Color::DarkGray)));
            }
            Tag::Emphasis => self.push_style(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => {
                self.push_style(Style::default().add_modifier(Modifier::CROSSED_OUT));
            }
            Tag::Link { dest_url, .. } => {
                self.link_url = Some(dest_url.to_string());
                self.push_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED),
                );
            }
            _ => {}
        }
    }

    fn close(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                self.flush_line();
                self.needs_newline = true;
            }
            TagEnd::Heading(_) => {
                self.pop_style();
                self.flush_line();
                self.needs_newline = true;
            }
            TagEnd::BlockQuote(_) => {
                self.flush_line();
                self.quote_depth = self.quote_depth.saturating_sub(1);
                self.needs_newline = true;
            }
            TagEnd::CodeBlock => {
                self.in_code_block = false;
                self.pop_style();
                self.needs_newline = true;
            }
            TagEnd::List(_) => {
                self.list_indices.pop();
                if self.list_indices.is_empty() {
                    self.needs_newline = true;
                }
            }
            TagEnd::Item => self.flush_line(),
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => self.pop_style(),
            TagEnd::Link => {
                self.pop_style();
                if let Some(url) = self.link_url.take() {
                    let style = Style::default().fg(Color::DarkGray);
                    self.current.push(Span::styled(format!(" ({url})"), style));
                }
            }
            _ => {}
        }
    }
}

fn heading_style(level: HeadingLevel) -> Style {
    match level {
        HeadingLevel::H1 | HeadingLevel::H2 => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().add_modifier(Modifier::BOLD),
    }
}
