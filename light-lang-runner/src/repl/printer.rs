use std::rc::Rc;

use light_lang_core::parser::ParseError;
use light_lang_interpreter::object::Object;
use light_lang_interpreter::Error;

pub trait Printer {
    type Object;

    fn print(&mut self, object: Self::Object);
}

pub struct InterpreterPrinter {}

impl InterpreterPrinter {
    /// `None` for results that print nothing, such as a `let` line.
    fn render(object: &Result<Rc<Object>, Error>) -> Option<String> {
        match object {
            Ok(obj) if obj.is_null() => None,
            Ok(obj) => Some(obj.to_string()),
            Err(err) => Some(format!("Error: {}", err)),
        }
    }
}

impl Printer for InterpreterPrinter {
    type Object = Result<Rc<Object>, Error>;

    fn print(&mut self, object: Self::Object) {
        if let Some(text) = Self::render(&object) {
            println!("{}", text);
        }
    }
}

pub struct DumpPrinter {}

impl Printer for DumpPrinter {
    type Object = Result<String, ParseError>;

    fn print(&mut self, object: Self::Object) {
        match object {
            Ok(text) => print!("{}", text),
            Err(err) => println!("Error: Parse error: {}", err),
        }
    }
}
