use std::{env, fs};
use isoread::classify::TokenCategory;
use isoread::interp::{Interpreter, Sink, ToolpathPoint};

/// Prints the toolpath as one "x y z" triple per motion-bearing line.
struct Trace;

impl Sink for Trace {
    fn token(&mut self, _text: &str, _category: TokenCategory) {}

    fn point(&mut self, p: ToolpathPoint) {
        println!("{} {} {}", p.x, p.y, p.z);
    }
}

fn main() {
    let filename = env::args().nth(1).expect("file name required");
    let input = fs::read_to_string(&filename).unwrap();

    for err in Interpreter::new().run(&input, &mut Trace) {
        eprintln!("{}", err);
    }
}
