//! Raw log entry model.
//!
//! The upstream source extracts each log line as an ordered list of spans:
//! plain text runs, styled name runs (emphasis plus an optional color),
//! icon labels, and divider markers. The classifier never sees markup, only
//! this flat span list.

/// One ordered element of a raw entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Span {
    /// A plain text run.
    Text(String),
    /// A styled run, usually a player name.
    Styled {
        /// The rendered text.
        text: String,
        /// Color carried by the styling, when present.
        color: Option<String>,
    },
    /// An icon, identified by its descriptive label.
    Icon(String),
    /// A visual separator marker.
    Divider,
}

/// Position of a token within an entry.
///
/// Ordered by span index first, then byte offset within the span. Icons sit
/// at offset zero of their own span, so comparing an icon's position against
/// a keyword's is well defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pos {
    /// Index of the span within the entry.
    pub span: usize,
    /// Byte offset within the span's text.
    pub offset: usize,
}

/// A raw log entry: the ordered spans extracted from one line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawEntry {
    spans: Vec<Span>,
}

impl RawEntry {
    /// Creates an empty entry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a span.
    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// Appends a plain text run.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.spans.push(Span::Text(text.into()));
        self
    }

    /// Appends a styled run.
    #[must_use]
    pub fn with_styled(mut self, text: impl Into<String>, color: Option<&str>) -> Self {
        self.spans.push(Span::Styled {
            text: text.into(),
            color: color.map(str::to_string),
        });
        self
    }

    /// Appends an icon.
    #[must_use]
    pub fn with_icon(mut self, label: impl Into<String>) -> Self {
        self.spans.push(Span::Icon(label.into()));
        self
    }

    /// Appends a divider marker.
    #[must_use]
    pub fn with_divider(mut self) -> Self {
        self.spans.push(Span::Divider);
        self
    }

    /// The ordered spans.
    #[must_use]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// The plain text of the entry: all text and styled runs concatenated.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        for span in &self.spans {
            match span {
                Span::Text(text) | Span::Styled { text, .. } => out.push_str(text),
                Span::Icon(_) | Span::Divider => {}
            }
        }
        out
    }

    /// Whether the entry contains a divider marker.
    #[must_use]
    pub fn has_divider(&self) -> bool {
        self.spans.iter().any(|s| matches!(s, Span::Divider))
    }

    /// The first styled run, read as the acting player and their color.
    #[must_use]
    pub fn first_styled(&self) -> Option<(&str, Option<&str>)> {
        self.spans.iter().find_map(|span| match span {
            Span::Styled { text, color } => Some((text.as_str(), color.as_deref())),
            _ => None,
        })
    }

    /// Iterates icon labels with their positions.
    pub fn icons(&self) -> impl Iterator<Item = (Pos, &str)> {
        self.spans.iter().enumerate().filter_map(|(i, span)| match span {
            Span::Icon(label) => Some((Pos { span: i, offset: 0 }, label.as_str())),
            _ => None,
        })
    }

    /// Locates the first occurrence of `keyword` across text-bearing spans.
    ///
    /// The search is case-insensitive and by plain substring, so a keyword
    /// can also match inside a longer word ("got" inside "forgot"). That
    /// looseness is intentional and kept.
    #[must_use]
    pub fn find_keyword(&self, keyword: &str) -> Option<Pos> {
        for (i, span) in self.spans.iter().enumerate() {
            let text = match span {
                Span::Text(text) | Span::Styled { text, .. } => text,
                Span::Icon(_) | Span::Divider => continue,
            };
            if let Some(offset) = text.to_lowercase().find(keyword) {
                return Some(Pos { span: i, offset });
            }
        }
        None
    }
}
