//! Unit tests for the classifier module.
//!
//! This module contains tests for each classification pass including:
//! - Blank fragments
//! - Full-line and trailing comments
//! - Keywords, references, quiet markers
//! - Operators, strings and numbers
//! - Offsets for fragments that do not start at zero

use rstest::rstest;

use super::{
    classifier::SpanClassifier,
    spans::{Category, ClassifiedSpan, TextFragment},
};

fn classify(text: &str) -> Vec<ClassifiedSpan> {
    SpanClassifier::new().classify(TextFragment::whole(text))
}

fn of_category(spans: &[ClassifiedSpan], category: Category) -> Vec<(usize, usize)> {
    spans
        .iter()
        .filter(|span| span.category == category)
        .map(|span| (span.start, span.len))
        .collect()
}

fn span(category: Category, start: usize, len: usize) -> ClassifiedSpan {
    ClassifiedSpan { start, len, category }
}

#[rstest]
#[case("")]
#[case(" ")]
#[case("\t\t")]
#[case("   \t  ")]
#[case("\n")]
fn test_blank_fragments_classify_to_nothing(#[case] text: &str) {
    assert!(classify(text).is_empty());
}

#[test]
fn test_full_line_comment_short_circuits() {
    let text = "# hello world";
    let spans = classify(text);

    assert_eq!(spans, vec![span(Category::Comment, 0, text.len())]);
}

#[test]
fn test_indented_comment_is_full_line() {
    // Leading whitespace belongs to the comment match, which still starts at 0.
    let spans = classify("   # %if 1 = 2 \"x\" @");

    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].category, Category::Comment);
    assert_eq!(spans[0].start, 0);
}

#[test]
fn test_trailing_comment_keeps_other_passes() {
    let spans = classify("  x = 1  # trailing");

    assert_eq!(of_category(&spans, Category::Comment), vec![(7, 12)]);
    assert_eq!(of_category(&spans, Category::Operator), vec![(4, 1)]);
    assert_eq!(of_category(&spans, Category::Number), vec![(6, 1)]);
}

#[test]
fn test_comment_needs_text_after_hash() {
    let spans = classify("FOO = 1 #");

    assert!(of_category(&spans, Category::Comment).is_empty());
}

#[test]
fn test_only_first_comment_is_tagged() {
    let spans = classify("A = 1 # one\nB = 2 # two");

    assert_eq!(of_category(&spans, Category::Comment), vec![(5, 6)]);
}

#[test]
fn test_comment_passes_still_see_text_inside_trailing_comment() {
    let spans = classify("x # 42");

    assert_eq!(of_category(&spans, Category::Comment), vec![(1, 5)]);
    assert_eq!(of_category(&spans, Category::Number), vec![(4, 2)]);
}

#[rstest]
#[case("%include foo.mki", "%include")]
#[case("%undef FOO", "%undef")]
#[case("%if defined (FOO)", "%if defined")]
#[case("%if FOO", "%if")]
#[case("%elif FOO", "%elif")]
#[case("%else", "%else")]
#[case("%endif", "%endif")]
#[case("%warn something", "%warn")]
#[case("%error bad", "%error")]
#[case("target: always", "always")]
fn test_keywords(#[case] text: &str, #[case] keyword: &str) {
    let spans = classify(text);
    let keywords = of_category(&spans, Category::Keyword);

    assert_eq!(keywords.len(), 1, "{text}");
    let (start, len) = keywords[0];
    assert_eq!(&text[start..start + len], keyword);
}

#[test]
fn test_keyword_word_boundaries() {
    // `%ifdef` is not `%if`, but `%warn` and `always` have no trailing boundary.
    assert!(of_category(&classify("%ifdef X"), Category::Keyword).is_empty());
    assert_eq!(of_category(&classify("%warning"), Category::Keyword), vec![(0, 5)]);
    assert_eq!(of_category(&classify("alwaysbuild"), Category::Keyword), vec![(0, 6)]);
}

#[test]
fn test_multiple_keywords() {
    let spans = classify("%if X %else %endif");

    assert_eq!(of_category(&spans, Category::Keyword), vec![(0, 3), (6, 5), (12, 6)]);
}

#[test]
fn test_reference_parentheses() {
    let spans = classify("$(FOO)");

    assert_eq!(
        spans,
        vec![
            span(Category::ReferenceDelimiter, 0, 2),
            span(Category::ReferenceValue, 2, 3),
            span(Category::ReferenceDelimiter, 5, 1),
        ]
    );
}

#[test]
fn test_reference_braces() {
    let spans = classify("${objDir}");

    assert_eq!(
        spans,
        vec![
            span(Category::ReferenceDelimiter, 0, 2),
            span(Category::ReferenceValue, 2, 6),
            span(Category::ReferenceDelimiter, 8, 1),
        ]
    );
}

#[test]
fn test_empty_reference_has_no_value() {
    let spans = classify("$()");

    assert_eq!(
        spans,
        vec![span(Category::ReferenceDelimiter, 0, 2), span(Category::ReferenceDelimiter, 2, 1)]
    );
}

#[test]
fn test_reference_pairing_is_not_strict() {
    let spans = classify("$(FOO}");

    assert_eq!(of_category(&spans, Category::ReferenceDelimiter), vec![(0, 2), (5, 1)]);
    assert_eq!(of_category(&spans, Category::ReferenceValue), vec![(2, 3)]);
}

#[test]
fn test_reference_is_shortest_match() {
    let spans = classify("$(A) $(B)");

    assert_eq!(of_category(&spans, Category::ReferenceValue), vec![(2, 1), (7, 1)]);
    assert_eq!(of_category(&spans, Category::ReferenceDelimiter), vec![(0, 2), (3, 1), (5, 2), (8, 1)]);
}

#[test]
fn test_reference_spans_newlines() {
    let spans = classify("$(FOO\nBAR)");

    assert_eq!(of_category(&spans, Category::ReferenceValue), vec![(2, 7)]);
}

#[test]
fn test_unterminated_reference_is_ignored() {
    let spans = classify("$(FOO");

    assert!(of_category(&spans, Category::ReferenceDelimiter).is_empty());
    assert!(of_category(&spans, Category::ReferenceValue).is_empty());
}

#[test]
fn test_only_first_quiet_marker() {
    let spans = classify("\t@echo @done");

    assert_eq!(of_category(&spans, Category::PreprocessorMarker), vec![(1, 1)]);
}

#[rstest]
#[case("a || b", vec![(2, 2)])]
#[case("a && b", vec![(2, 2)])]
#[case("a != b", vec![(2, 2)])]
#[case("a = b", vec![(2, 1)])]
#[case("a + b", vec![(2, 1)])]
#[case("a == b", vec![(2, 1), (3, 1)])]
#[case("a += b", vec![(2, 1), (3, 1)])]
#[case("a | b & c ! d", vec![])]
fn test_operators(#[case] text: &str, #[case] expected: Vec<(usize, usize)>) {
    assert_eq!(of_category(&classify(text), Category::Operator), expected);
}

#[test]
fn test_strings() {
    let spans = classify(r#"a = "one" + "two""#);

    assert_eq!(of_category(&spans, Category::StringLiteral), vec![(4, 5), (12, 5)]);
}

#[test]
fn test_unterminated_string_is_ignored() {
    let spans = classify("a = \"open\nclosed\"");

    assert!(of_category(&spans, Category::StringLiteral).is_empty());
}

#[test]
fn test_empty_string() {
    assert_eq!(of_category(&classify("x = \"\""), Category::StringLiteral), vec![(4, 2)]);
}

#[rstest]
#[case("v = 42", vec![(4, 2)])]
#[case("v = 2.5", vec![(4, 3)])]
#[case("v = 1 2", vec![(4, 1), (6, 1)])]
#[case("v = abc123", vec![])]
#[case("v = 1.2.3", vec![(4, 3), (8, 1)])]
fn test_numbers(#[case] text: &str, #[case] expected: Vec<(usize, usize)>) {
    assert_eq!(of_category(&classify(text), Category::Number), expected);
}

#[test]
fn test_conditional_line() {
    let text = r#"%if defined(FOO) && "bar" == 2.5"#;
    let spans = classify(text);

    assert_eq!(of_category(&spans, Category::Keyword), vec![(0, 11)]);
    assert_eq!(of_category(&spans, Category::Operator), vec![(17, 2), (26, 1), (27, 1)]);
    assert_eq!(of_category(&spans, Category::StringLiteral), vec![(20, 5)]);
    assert_eq!(of_category(&spans, Category::Number), vec![(29, 3)]);
}

#[test]
fn test_spans_are_grouped_in_pass_order() {
    let spans = classify("@$(CC) = 1 \"s\" %if # c");
    let order: Vec<Category> = spans.iter().map(|span| span.category).collect();

    assert_eq!(
        order,
        vec![
            Category::Comment,
            Category::Keyword,
            Category::ReferenceDelimiter,
            Category::ReferenceValue,
            Category::ReferenceDelimiter,
            Category::PreprocessorMarker,
            Category::Operator,
            Category::StringLiteral,
            Category::Number,
        ]
    );
}

#[test]
fn test_offsets_are_absolute() {
    let classifier = SpanClassifier::new();
    let spans = classifier.classify(TextFragment::new("$(FOO)", 100));

    assert_eq!(
        spans,
        vec![
            span(Category::ReferenceDelimiter, 100, 2),
            span(Category::ReferenceValue, 102, 3),
            span(Category::ReferenceDelimiter, 105, 1),
        ]
    );
}

#[test]
fn test_full_line_comment_is_relative_to_fragment() {
    // Offset 0 means the start of the fragment, not of the document.
    let spans = SpanClassifier::new().classify(TextFragment::new("# note = 1", 50));

    assert_eq!(spans, vec![span(Category::Comment, 50, 10)]);
}

#[test]
fn test_spans_stay_in_bounds_for_unicode() {
    let text = "ñame = \"ü\" $(ö) 3 # ß";
    let fragment = TextFragment::new(text, 7);

    for span in SpanClassifier::new().classify(fragment) {
        assert!(span.start >= fragment.start);
        assert!(span.end() <= fragment.end());
        assert!(text.is_char_boundary(span.start - fragment.start));
        assert!(text.is_char_boundary(span.end() - fragment.start));
    }
}

#[test]
fn test_classification_is_idempotent() {
    let classifier = SpanClassifier::new();
    let fragment = TextFragment::new("%if $(A) != \"b\" # c", 3);

    assert_eq!(classifier.classify(fragment), classifier.classify(fragment));
}

#[test]
fn test_category_classification_names() {
    assert_eq!(Category::Comment.classification_name(), "comment");
    assert_eq!(Category::ReferenceDelimiter.classification_name(), "markup attribute");
    assert_eq!(Category::ReferenceValue.classification_name(), "markup attribute value");
    assert_eq!(Category::PreprocessorMarker.classification_name(), "preprocessor keyword");
}

#[test]
fn test_span_text() {
    let text = "A = $(B)";
    let spans = classify(text);
    let value = spans.iter().find(|span| span.category == Category::ReferenceValue).unwrap();

    assert_eq!(value.text(text), Some("B"));
    assert_eq!(value.to_string(), "ReferenceValue [6..7)");
}
