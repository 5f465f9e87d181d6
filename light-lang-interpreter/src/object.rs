use std::fmt::Display;
use std::rc::Rc;

use crate::environment::Environment;
use light_lang_core::ast;

use thiserror::Error;

#[derive(Debug, PartialEq, Clone)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    String(String),
    Function(Function),
    /// The value of statements that produce nothing, such as `let`.
    Null,
}

thread_local! {
    static NULL: Rc<Object> = Rc::new(Object::Null);
    static TRUE: Rc<Object> = Rc::new(Object::Boolean(true));
    static FALSE: Rc<Object> = Rc::new(Object::Boolean(false));
}

impl Object {
    pub fn null() -> Rc<Object> {
        NULL.with(|x| x.clone())
    }
    /// Returns one of the two shared boolean instances.
    pub fn boolean(value: bool) -> Rc<Object> {
        if value {
            TRUE.with(|x| x.clone())
        } else {
            FALSE.with(|x| x.clone())
        }
    }
    pub fn integer(value: i64) -> Rc<Object> {
        Rc::new(Object::Integer(value))
    }
    pub fn string(value: String) -> Rc<Object> {
        Rc::new(Object::String(value))
    }
    pub fn function(
        name: Option<Rc<str>>,
        parameters: Vec<Rc<str>>,
        body: ast::BlockStatement,
        env: Environment,
    ) -> Rc<Object> {
        Rc::new(Object::Function(Function {
            name,
            parameters,
            body,
            env,
        }))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Object::Null)
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "{}", value),
            Object::Boolean(value) => write!(f, "{}", value),
            Object::String(value) => write!(f, "{}", value),
            Object::Function(function) => write!(f, "{}", function),
            Object::Null => write!(f, "null"),
        }
    }
}

/// A closure: the function's code together with the environment it was
/// defined in, which is the parent scope of every call.
#[derive(Clone)]
pub struct Function {
    pub name: Option<Rc<str>>,
    pub parameters: Vec<Rc<str>>,
    pub body: ast::BlockStatement,
    pub env: Environment,
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.parameters == other.parameters && self.body == other.body && self.env == other.env
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .finish()
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "func")?;
        if let Some(name) = &self.name {
            write!(f, " {}", name)?;
        }
        write!(f, "({})", self.parameters.join(", "))
    }
}

/// Non-local exits from statement evaluation. `Return` travels up to the
/// nearest function call (or the program) and is unwrapped there.
#[derive(Debug, PartialEq)]
pub enum QuickReturn {
    Return(Rc<Object>),
    Error(EvaluationError),
}

impl From<EvaluationError> for QuickReturn {
    fn from(value: EvaluationError) -> Self {
        QuickReturn::Error(value)
    }
}

#[derive(Debug, PartialEq, Error)]
pub enum EvaluationError {
    #[error("Unknown identifier: {0}")]
    UnknownIdentifier(Rc<str>),
    #[error("Wrong number of arguments for function {function}. Expected {expected}, got {actual}")]
    WrongArgumentCount {
        function: Rc<str>,
        expected: usize,
        actual: usize,
    },
    #[error("Called an object that is not a function: {0}")]
    CallNonFunction(Rc<Object>),
    #[error("Function parameter is not an identifier: {0}")]
    InvalidParameter(ast::Expression),
    #[error("Integer literal out of range: {0}")]
    InvalidIntegerLiteral(Rc<str>),
    #[error("Unknown prefix operator: {operation}{right:?}")]
    UnknownPrefixOperator {
        right: Rc<Object>,
        operation: ast::PrefixOperationKind,
    },
    #[error("Unknown infix operator: {left:?} {operation} {right:?}")]
    UnknownInfixOperator {
        left: Rc<Object>,
        right: Rc<Object>,
        operation: ast::InfixOperationKind,
    },
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Integer overflow: {0}")]
    IntegerOverflow(String),
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::Object;

    #[test]
    fn test_booleans_are_shared() {
        assert!(Rc::ptr_eq(&Object::boolean(true), &Object::boolean(true)));
        assert!(Rc::ptr_eq(&Object::boolean(false), &Object::boolean(false)));
        // a separately built boolean is still equal by value
        assert_eq!(Rc::new(Object::Boolean(true)), Object::boolean(true));
        assert_ne!(Object::boolean(true), Object::boolean(false));
    }

    #[test]
    fn test_display() {
        let tests = vec![
            (Object::integer(-3), "-3"),
            (Object::boolean(true), "true"),
            (Object::string("hi".to_owned()), "hi"),
            (Object::null(), "null"),
            (
                Object::function(
                    Some("add".into()),
                    vec!["a".into(), "b".into()],
                    light_lang_core::ast::BlockStatement { statements: vec![] },
                    crate::environment::Environment::new(),
                ),
                "func add(a, b)",
            ),
        ];

        for (object, expected) in tests {
            assert_eq!(object.to_string(), expected);
        }
    }
}
