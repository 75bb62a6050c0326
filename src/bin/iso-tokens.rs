use std::{env, fs};
use isoread::classify::TokenCategory;
use isoread::interp::{Interpreter, Sink, ToolpathPoint};

/// Prints every word of the program annotated with its markup category.
struct Markup;

impl Sink for Markup {
    fn token(&mut self, text: &str, category: TokenCategory) {
        if text.trim().is_empty() {
            return;
        }
        print!("{}[{}] ", text, category);
    }

    fn point(&mut self, _point: ToolpathPoint) {}

    fn end_block(&mut self, _lineno: usize) {
        println!();
    }
}

fn main() {
    let filename = env::args().nth(1).expect("file name required");
    let input = fs::read_to_string(&filename).unwrap();

    for err in Interpreter::new().run(&input, &mut Markup) {
        eprintln!("{}", err);
    }
}
