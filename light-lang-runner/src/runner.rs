use std::path::Path;

use anyhow::{anyhow, Context};
use light_lang_core::lexer;
use light_lang_core::parser;
use light_lang_core::parser::ParseError;
use light_lang_interpreter::evaluator;

use crate::Dump;

pub fn execute(path: &Path, dump: Option<Dump>) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    log::info!("running {} ({} bytes)", path.display(), source.len());

    if let Some(dump) = dump {
        let rendered =
            render_dump(&source, dump).map_err(|err| anyhow!("{}: {}", path.display(), err))?;
        print!("{}", rendered);
        return Ok(());
    }

    // runtime values hold `Rc`s, so errors are flattened to messages here
    let program =
        parser::parse_source(&source).map_err(|err| anyhow!("{}: {}", path.display(), err))?;
    let value = evaluator::evaluate_program(&program)
        .map_err(|err| anyhow!("{}: {}", path.display(), err))?;
    if !value.is_null() {
        println!("{}", value);
    }
    Ok(())
}

/// One token per line, or the parsed program in its canonical form.
pub fn render_dump(source: &str, dump: Dump) -> Result<String, ParseError> {
    match dump {
        Dump::Tokens => Ok(lexer::Tokenizer::new(source)
            .map(|token| format!("{}\n", token))
            .collect()),
        Dump::Ast => Ok(parser::parse_source(source)?.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::render_dump;
    use crate::Dump;

    #[test]
    fn test_render_dump() {
        let tests = vec![
            (
                "let a = 1;",
                Dump::Tokens,
                "`let` at offset 0\nidentifier `a` at offset 4\n`=` at offset 6\ninteger `1` at offset 8\n`;` at offset 9\nend of input at offset 10\n",
            ),
            ("let a = 1 + 2 * 3", Dump::Ast, "let a = (1 + (2 * 3));\n"),
            ("", Dump::Tokens, "end of input at offset 0\n"),
            ("", Dump::Ast, ""),
        ];

        for (input, dump, expected) in tests {
            assert_eq!(render_dump(input, dump).unwrap(), expected, "input: {}", input);
        }
    }

    #[test]
    fn test_render_dump_reports_parse_errors() {
        assert!(render_dump("let = 1", Dump::Ast).is_err());
        // tokenizing never fails
        assert!(render_dump("let = 1", Dump::Tokens).is_ok());
    }
}
