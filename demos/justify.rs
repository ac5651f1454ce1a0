//! Example: break a paragraph and print each line with its spacing.
//!
//! Run with:
//! `cargo run --example justify`

use parbreak::{render::to_listing, tokenize, BreakEngineBuilder, BreakPolicy};

const SAMPLE: &str = "In olden times when wishing still helped one, there lived a king \
whose daughters were all beautiful, but the youngest was so beautiful that the sun \
itself, which has seen so much, was astonished whenever it shone in her face.";

fn main() {
    let words = tokenize(SAMPLE, BreakPolicy::Newline);

    for width in [34.0, 45.0, 60.0] {
        let engine = BreakEngineBuilder::new()
            .with_target_width(width)
            .with_tolerance(2.0)
            .build()
            .expect("valid parameters");
        match engine.search(&words) {
            Ok(solution) => {
                println!(
                    "width {width}: {} lines, score {:.2}",
                    solution.line_count(),
                    solution.score
                );
                print!("{}", to_listing(&words, &solution));
            }
            Err(err) => println!("width {width}: {err}"),
        }
        println!();
    }
}
