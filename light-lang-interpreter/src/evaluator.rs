use std::cmp::Ordering;
use std::rc::Rc;

use crate::environment::Environment;
use crate::object::{EvaluationError, Function, Object, QuickReturn};
use light_lang_core::ast;
use light_lang_core::ast::{Expression, InfixOperationKind, PrefixOperationKind};

/// Evaluates every statement of `program` in `environment` and returns the
/// value of the last one. A top-level `return` ends the program early.
pub fn eval_program(
    program: &ast::Program,
    environment: &mut Environment,
) -> Result<Rc<Object>, EvaluationError> {
    log::debug!(
        "evaluating program with {} statements",
        program.statements.len()
    );
    let mut output = Object::null();
    for statement in &program.statements {
        let result = eval_statement(statement, environment);

        match result {
            Err(QuickReturn::Return(value)) => return Ok(value),
            Err(QuickReturn::Error(error)) => return Err(error),
            Ok(object) => output = object,
        };
    }
    Ok(output)
}

/// Evaluates `program` in a fresh top-level environment.
pub fn evaluate_program(program: &ast::Program) -> Result<Rc<Object>, EvaluationError> {
    eval_program(program, &mut Environment::new())
}

/// Evaluates one statement against a persisted environment, which is how
/// bindings survive from one REPL line to the next.
pub fn evaluate(
    statement: &ast::Statement,
    environment: &mut Environment,
) -> Result<Rc<Object>, EvaluationError> {
    match eval_statement(statement, environment) {
        Ok(object) | Err(QuickReturn::Return(object)) => Ok(object),
        Err(QuickReturn::Error(error)) => Err(error),
    }
}

fn eval_statement(
    statement: &ast::Statement,
    environment: &mut Environment,
) -> Result<Rc<Object>, QuickReturn> {
    match statement {
        ast::Statement::Expression(expression) => eval_expression(expression, environment),
        ast::Statement::Return(statement) => eval_return_statement(statement, environment),
        ast::Statement::Let(statement) => eval_let_statement(statement, environment),
        ast::Statement::Conditional(conditional) => eval_conditional(conditional, environment),
        ast::Statement::Block(block) => eval_block_statement(block, environment),
    }
}

fn eval_let_statement(
    statement: &ast::LetStatement,
    environment: &mut Environment,
) -> Result<Rc<Object>, QuickReturn> {
    let value = eval_expression(&statement.value, environment)?;
    environment.set(statement.identifier.name.clone(), value);
    Ok(Object::null())
}

fn eval_return_statement(
    statement: &ast::ReturnStatement,
    environment: &mut Environment,
) -> Result<Rc<Object>, QuickReturn> {
    let value = eval_expression(&statement.value, environment)?;
    Err(QuickReturn::Return(value))
}

fn eval_conditional(
    conditional: &ast::Conditional,
    environment: &mut Environment,
) -> Result<Rc<Object>, QuickReturn> {
    let condition = eval_expression(&conditional.condition, environment)?;
    // equality with `true`, anything else takes the alternative
    if condition.as_ref() == Object::boolean(true).as_ref() {
        eval_block_statement(&conditional.consequence, environment)
    } else if let Some(alternative) = &conditional.alternative {
        eval_block_statement(alternative, environment)
    } else {
        Ok(Object::null())
    }
}

/// Blocks share the enclosing environment; only calls open a new scope.
fn eval_block_statement(
    block: &ast::BlockStatement,
    environment: &mut Environment,
) -> Result<Rc<Object>, QuickReturn> {
    let mut result = Object::null();
    for statement in &block.statements {
        result = eval_statement(statement, environment)?;
    }
    Ok(result)
}

fn eval_expression(
    expression: &Expression,
    environment: &mut Environment,
) -> Result<Rc<Object>, QuickReturn> {
    match expression {
        Expression::IntegerLiteral(digits) => match digits.parse::<i64>() {
            Ok(value) => Ok(Object::integer(value)),
            Err(_) => Err(EvaluationError::InvalidIntegerLiteral(digits.clone()).into()),
        },
        Expression::BooleanLiteral(literal) => Ok(Object::boolean(literal.as_ref() == "true")),
        Expression::StringLiteral(value) => Ok(Object::string(value.to_string())),
        Expression::Identifier(identifier) => lookup(identifier, environment),
        Expression::PrefixOperation(kind, expression) => {
            let right = eval_expression(expression, environment)?;
            Ok(eval_prefix_operation(*kind, right)?)
        }
        Expression::InfixOperation(kind, left, right) => {
            let left = eval_expression(left, environment)?;
            let right = eval_expression(right, environment)?;
            Ok(eval_infix_operation(*kind, left, right)?)
        }
        Expression::FunctionLiteral(literal) => eval_function_literal(literal, environment),
        Expression::CallExpression {
            function,
            arguments,
        } => eval_call_expression(function, arguments, environment),
    }
}

fn lookup(identifier: &ast::Identifier, environment: &Environment) -> Result<Rc<Object>, QuickReturn> {
    environment.get(&identifier.name).ok_or_else(|| {
        QuickReturn::Error(EvaluationError::UnknownIdentifier(
            identifier.name.clone(),
        ))
    })
}

fn eval_function_literal(
    literal: &ast::FunctionLiteral,
    environment: &mut Environment,
) -> Result<Rc<Object>, QuickReturn> {
    let parameters = literal
        .parameters
        .iter()
        .map(|parameter| match parameter {
            Expression::Identifier(identifier) => Ok(identifier.name.clone()),
            other => Err(EvaluationError::InvalidParameter(other.clone())),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let name = literal.name.as_ref().map(|name| name.name.clone());
    let function = Object::function(
        name.clone(),
        parameters,
        literal.body.clone(),
        environment.clone(),
    );

    // registered in the defining scope so the body can call itself
    if let Some(name) = name {
        log::trace!("declaring function {}", name);
        environment.set(name, function.clone());
    }
    Ok(function)
}

fn eval_call_expression(
    function: &ast::Identifier,
    arguments: &[Expression],
    environment: &mut Environment,
) -> Result<Rc<Object>, QuickReturn> {
    let callee = lookup(function, environment)?;
    let Object::Function(callee_function) = callee.as_ref() else {
        return Err(EvaluationError::CallNonFunction(callee.clone()).into());
    };

    if callee_function.parameters.len() != arguments.len() {
        return Err(EvaluationError::WrongArgumentCount {
            function: function.name.clone(),
            expected: callee_function.parameters.len(),
            actual: arguments.len(),
        }
        .into());
    }

    // arguments see the caller's scope, the body sees the defining one
    let arguments = eval_expressions(arguments, environment)?;
    apply_function(callee_function, arguments).map_err(QuickReturn::Error)
}

fn eval_expressions(
    arguments: &[Expression],
    environment: &mut Environment,
) -> Result<Vec<Rc<Object>>, QuickReturn> {
    let mut result = Vec::new();
    for argument in arguments {
        result.push(eval_expression(argument, environment)?);
    }
    Ok(result)
}

fn apply_function(
    function: &Function,
    arguments: Vec<Rc<Object>>,
) -> Result<Rc<Object>, EvaluationError> {
    log::trace!("calling {} with {} arguments", function, arguments.len());

    let mut new_environment = Environment::new_enclosed(function.env.clone());
    for (parameter, argument) in function.parameters.iter().zip(arguments) {
        new_environment.set(parameter.clone(), argument);
    }
    match eval_block_statement(&function.body, &mut new_environment) {
        Ok(object) | Err(QuickReturn::Return(object)) => Ok(object),
        Err(QuickReturn::Error(err)) => Err(err),
    }
}

fn eval_prefix_operation(
    kind: PrefixOperationKind,
    right: Rc<Object>,
) -> Result<Rc<Object>, EvaluationError> {
    match (kind, right.as_ref()) {
        (PrefixOperationKind::Minus, Object::Integer(value)) => value
            .checked_neg()
            .map(Object::integer)
            .ok_or_else(|| EvaluationError::IntegerOverflow(format!("-{}", value))),
        _ => Err(EvaluationError::UnknownPrefixOperator {
            right: right.clone(),
            operation: kind,
        }),
    }
}

fn integer_result(
    value: Option<i64>,
    left: i64,
    kind: InfixOperationKind,
    right: i64,
) -> Result<Rc<Object>, EvaluationError> {
    value
        .map(Object::integer)
        .ok_or_else(|| EvaluationError::IntegerOverflow(format!("{} {} {}", left, kind, right)))
}

/// Equality across kinds is always false. Functions have no equality.
fn values_equal(left: &Object, right: &Object) -> Option<bool> {
    match (left, right) {
        (Object::Function(_), _) | (_, Object::Function(_)) => None,
        (Object::Integer(left), Object::Integer(right)) => Some(left == right),
        (Object::Boolean(left), Object::Boolean(right)) => Some(left == right),
        (Object::String(left), Object::String(right)) => Some(left == right),
        (Object::Null, Object::Null) => Some(true),
        _ => Some(false),
    }
}

fn compare_values(left: &Object, right: &Object) -> Option<Ordering> {
    match (left, right) {
        (Object::Integer(left), Object::Integer(right)) => Some(left.cmp(right)),
        (Object::Boolean(left), Object::Boolean(right)) => Some(left.cmp(right)),
        (Object::String(left), Object::String(right)) => Some(left.cmp(right)),
        _ => None,
    }
}

fn eval_infix_operation(
    kind: InfixOperationKind,
    left: Rc<Object>,
    right: Rc<Object>,
) -> Result<Rc<Object>, EvaluationError> {
    use InfixOperationKind::*;

    let result = match (kind, left.as_ref(), right.as_ref()) {
        (Plus, Object::Integer(l), Object::Integer(r)) => {
            Some(integer_result(l.checked_add(*r), *l, kind, *r)?)
        }
        (Plus, Object::String(l), Object::String(r)) => {
            Some(Object::string(format!("{}{}", l, r)))
        }
        (Minus, Object::Integer(l), Object::Integer(r)) => {
            Some(integer_result(l.checked_sub(*r), *l, kind, *r)?)
        }
        (Multiply, Object::Integer(l), Object::Integer(r)) => {
            Some(integer_result(l.checked_mul(*r), *l, kind, *r)?)
        }
        (Divide, Object::Integer(_), Object::Integer(0)) => {
            return Err(EvaluationError::DivisionByZero)
        }
        // truncates toward zero
        (Divide, Object::Integer(l), Object::Integer(r)) => {
            Some(integer_result(l.checked_div(*r), *l, kind, *r)?)
        }
        (Equal, l, r) => values_equal(l, r).map(Object::boolean),
        (NotEqual, l, r) => values_equal(l, r).map(|equal| Object::boolean(!equal)),
        (LessThan, l, r) => compare_values(l, r).map(|ordering| Object::boolean(ordering.is_lt())),
        (GreaterThan, l, r) => {
            compare_values(l, r).map(|ordering| Object::boolean(ordering.is_gt()))
        }
        (LessEqual, l, r) => compare_values(l, r).map(|ordering| Object::boolean(ordering.is_le())),
        (GreaterEqual, l, r) => {
            compare_values(l, r).map(|ordering| Object::boolean(ordering.is_ge()))
        }
        _ => None,
    };

    result.ok_or(EvaluationError::UnknownInfixOperator {
        left,
        right,
        operation: kind,
    })
}
