use std::io::{self, Write};

/// The two things the menu can ask for, decided once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    RunBatch,
    Quit,
}

impl Command {
    pub fn from_input(input: &str) -> Self {
        match input.trim() {
            "1" => Command::RunBatch,
            _ => Command::Quit,
        }
    }
}

/// Print the menu, read one line from stdin and parse it into a command.
pub fn prompt() -> io::Result<Command> {
    println!("\n1: Read text from images in the \"images\" folder");
    println!("Any other key to quit\n");
    print!("Enter a number: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    Ok(Command::from_input(&line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_triggers_the_batch() {
        assert_eq!(Command::from_input("1"), Command::RunBatch);
        assert_eq!(Command::from_input(" 1\n"), Command::RunBatch);
    }

    #[test]
    fn anything_else_quits() {
        for input in ["", "\n", "2", "q", "11", "one"] {
            assert_eq!(Command::from_input(input), Command::Quit, "input {input:?}");
        }
    }
}
