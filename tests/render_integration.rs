use parbreak::render::{annotate, to_latex, to_listing, Segment};
use parbreak::{tokenize, BreakEngineBuilder, BreakPolicy};

const TEXT: &str = "Optimal line breaking considers the paragraph as a whole. \
Instead of filling each line greedily, it weighs every feasible break \
and picks the sequence with the least total badness.\n\
A forced break starts a new line.";

#[test]
fn latex_round_trip_keeps_every_word() {
    let words = tokenize(TEXT, BreakPolicy::Newline);
    let engine = BreakEngineBuilder::new()
        .with_target_width(50.0)
        .with_tolerance(3.0)
        .build()
        .unwrap();
    let solution = engine.search(&words).unwrap();
    let doc = to_latex(&words, &solution);

    assert_eq!(
        doc.matches("\\fontdimen2\\font=").count(),
        solution.line_count()
    );
    let body: Vec<&str> = doc
        .lines()
        .filter(|l| !l.starts_with('\\') && !l.is_empty())
        .flat_map(str::split_whitespace)
        .collect();
    let printable: Vec<&str> = words
        .iter()
        .filter(|w| !w.is_forced_break())
        .map(|w| w.text())
        .collect();
    assert_eq!(body, printable);
}

#[test]
fn forced_break_opens_a_new_line() {
    let words = tokenize(TEXT, BreakPolicy::Newline);
    let engine = BreakEngineBuilder::new()
        .with_target_width(50.0)
        .with_tolerance(3.0)
        .build()
        .unwrap();
    let solution = engine.search(&words).unwrap();
    let listing = to_listing(&words, &solution);
    assert!(listing
        .lines()
        .any(|l| l.split('\t').nth(1).is_some_and(|t| t.starts_with("A forced"))));
    assert_eq!(listing.lines().count(), solution.line_count());
}

#[test]
fn annotation_opens_with_spacing() {
    let words = tokenize("one two three", BreakPolicy::Newline);
    let solution = parbreak::search(&words, 13.0, 1.0).unwrap();
    let segments = annotate(&words, &solution);
    assert_eq!(segments[0], Segment::Spacing(0.5));
    assert_eq!(segments.len(), 4);
}
