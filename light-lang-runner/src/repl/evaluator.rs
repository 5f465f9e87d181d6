use std::rc::Rc;

use light_lang_core::parser;
use light_lang_core::parser::ParseError;
use light_lang_interpreter::environment::Environment;
use light_lang_interpreter::evaluator;
use light_lang_interpreter::object::Object;
use light_lang_interpreter::Error;

use crate::runner::render_dump;
use crate::Dump;

pub trait Evaluator {
    type Object;

    fn evaluate(&mut self, line: &str) -> Self::Object;
}

/// Evaluates every line against the same environment, so bindings made on
/// one line are visible on the next.
pub struct InterpreterEvaluator {
    environment: Environment,
}

impl InterpreterEvaluator {
    pub fn new() -> Self {
        Self {
            environment: Environment::new(),
        }
    }
}

impl Evaluator for InterpreterEvaluator {
    type Object = Result<Rc<Object>, Error>;

    fn evaluate(&mut self, line: &str) -> Self::Object {
        let program = parser::parse_source(line)?;
        Ok(evaluator::eval_program(&program, &mut self.environment)?)
    }
}

pub struct DumpEvaluator {
    pub dump: Dump,
}

impl Evaluator for DumpEvaluator {
    type Object = Result<String, ParseError>;

    fn evaluate(&mut self, line: &str) -> Self::Object {
        render_dump(line, self.dump)
    }
}
