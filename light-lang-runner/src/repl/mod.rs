mod evaluator;
mod printer;
mod reader;

use rustyline::DefaultEditor;

use evaluator::{DumpEvaluator, Evaluator, InterpreterEvaluator};
use printer::{DumpPrinter, InterpreterPrinter, Printer};
use reader::{ReadOutput, Reader};

use crate::Dump;

struct Repl<E: Evaluator, P: Printer> {
    reader: Reader,
    evaluator: E,
    printer: P,
}

impl<O, E: Evaluator<Object = O>, P: Printer<Object = O>> Repl<E, P> {
    fn run(mut self) {
        loop {
            match self.reader.read() {
                ReadOutput::Exit => break,
                ReadOutput::Clear => continue,
                ReadOutput::Value(line) => {
                    let result = self.evaluator.evaluate(&line);
                    self.printer.print(result)
                }
            }
        }
    }
}

pub fn start(dump: Option<Dump>) -> anyhow::Result<()> {
    let rl = DefaultEditor::new()?;
    log::debug!("starting interactive session");

    match dump {
        None => Repl {
            reader: Reader::new(rl),
            evaluator: InterpreterEvaluator::new(),
            printer: InterpreterPrinter {},
        }
        .run(),
        Some(dump) => Repl {
            reader: Reader::new(rl),
            evaluator: DumpEvaluator { dump },
            printer: DumpPrinter {},
        }
        .run(),
    };
    Ok(())
}
