//! Turning a [`Solution`] into output.
//!
//! [`annotate`] is a pure transformation: it never touches the caller's word
//! sequence and instead yields a new sequence where every line is preceded by
//! its spacing directive. The writers below consume that sequence.

use std::fmt::Write as _;

use crate::solution::Solution;
use crate::word::Word;

/// One element of an annotated paragraph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment<'w> {
    /// Start of a new line whose spaces are `em` wide.
    Spacing(f64),
    /// A printable word.
    Word(&'w Word),
}

/// Interleave `words` with one spacing directive per line.
///
/// Forced-break markers are dropped; the directive that opens the next line
/// already ends the current one.
pub fn annotate<'w>(words: &'w [Word], solution: &Solution) -> Vec<Segment<'w>> {
    let mut segments = Vec::with_capacity(words.len() + solution.adjustments.len());
    for (line, em) in solution.spaced_lines(words) {
        segments.push(Segment::Spacing(em));
        segments.extend(
            line.iter()
                .filter(|w| !w.is_forced_break())
                .map(Segment::Word),
        );
    }
    segments
}

const LATEX_HEADER: &[&str] = &[
    "\\documentclass{article}",
    "\\usepackage[margin=1in]{geometry}",
    "\\setlength\\parindent{0pt}",
    "\\renewcommand{\\familydefault}{\\ttdefault}",
    "\\begin{document}",
];
const LATEX_FOOTER: &str = "\\end{document}";

/// Monospaced LaTeX document with per-line inter-word spacing.
///
/// Each line becomes its own paragraph, opened by a `\fontdimen2\font`
/// assignment that sets the interword space of the current font.
pub fn to_latex(words: &[Word], solution: &Solution) -> String {
    let mut out = LATEX_HEADER.join("\n");
    out.push('\n');
    for segment in annotate(words, solution) {
        match segment {
            Segment::Spacing(em) => {
                // Writing to a String cannot fail.
                let _ = write!(out, "\n\n\\fontdimen2\\font={em:.4}em\n");
            }
            Segment::Word(word) => {
                if !out.ends_with('\n') {
                    out.push(' ');
                }
                out.push_str(&escape_latex(word.text()));
            }
        }
    }
    out.push('\n');
    out.push('\n');
    out.push_str(LATEX_FOOTER);
    out.push('\n');
    out
}

/// One output line per row: the space width, a tab, then the words.
pub fn to_listing(words: &[Word], solution: &Solution) -> String {
    let mut out = String::new();
    for (line, em) in solution.spaced_lines(words) {
        let text = line
            .iter()
            .filter(|w| !w.is_forced_break())
            .map(Word::text)
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(out, "{em:.4}\t{text}");
    }
    out
}

/// Escape the characters LaTeX treats specially.
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\textbackslash{}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '#' | '$' | '%' | '&' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}
