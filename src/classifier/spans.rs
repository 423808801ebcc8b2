use std::{fmt::Display, ops::Range};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum Category {
    Comment,
    Keyword,

    // $( NAME )
    ReferenceDelimiter, // $( ${ ) }
    ReferenceValue,     // NAME

    PreprocessorMarker, // @
    Operator,
    StringLiteral,
    Number,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Comment,
        Category::Keyword,
        Category::ReferenceDelimiter,
        Category::ReferenceValue,
        Category::PreprocessorMarker,
        Category::Operator,
        Category::StringLiteral,
        Category::Number,
    ];

    /// Name of the host classification type this category is rendered as.
    pub fn classification_name(&self) -> &'static str {
        match self {
            Category::Comment => "comment",
            Category::Keyword => "keyword",
            Category::ReferenceDelimiter => "markup attribute",
            Category::ReferenceValue => "markup attribute value",
            Category::PreprocessorMarker => "preprocessor keyword",
            Category::Operator => "operator",
            Category::StringLiteral => "string",
            Category::Number => "number",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A slice of a document handed to the classifier, along with where it sits
/// in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFragment<'a> {
    pub text: &'a str,
    pub start: usize,
}

impl<'a> TextFragment<'a> {
    pub fn new(text: &'a str, start: usize) -> Self {
        TextFragment { text, start }
    }

    /// A fragment that is the whole document.
    pub fn whole(text: &'a str) -> Self {
        TextFragment { text, start: 0 }
    }

    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A categorised byte range in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassifiedSpan {
    pub start: usize,
    pub len: usize,
    pub category: Category,
}

impl Display for ClassifiedSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}..{})", self.category, self.start, self.end())
    }
}

impl ClassifiedSpan {
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Returns the text this span covers, given the document it was produced from.
    pub fn text<'a>(&self, document: &'a str) -> Option<&'a str> {
        document.get(self.range())
    }
}
