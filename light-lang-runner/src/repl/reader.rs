use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const PROMPT: &str = ">> ";

pub enum ReadOutput {
    Exit,
    Clear,
    Value(String),
}

pub struct Reader {
    rl: DefaultEditor,
}

impl Reader {
    pub fn new(rl: DefaultEditor) -> Self {
        Self { rl }
    }

    pub fn read(&mut self) -> ReadOutput {
        match self.rl.readline(PROMPT) {
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                ReadOutput::Clear
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                ReadOutput::Exit
            }
            Err(err) => {
                println!("Error: {}", err);
                ReadOutput::Exit
            }
            Ok(line) if line.trim().is_empty() => ReadOutput::Clear,
            Ok(line) => {
                if let Err(err) = self.rl.add_history_entry(&line) {
                    log::warn!("could not record history: {}", err);
                }
                ReadOutput::Value(line)
            }
        }
    }
}
