//! Input Manager

use std::path::PathBuf;

/// A unique ID that corresponds to a piece of input tracked by an
/// [`InputCoordinator`].
///
/// This is used to find the source text back when a diagnostic is emitted.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct InputId(usize);

#[derive(Default)]
pub struct InputCoordinator {
    /// Inputs, where [`InputId`] are the corresponding indexes.
    inputs: Vec<Input>,
}

impl InputCoordinator {
    /// Input typed in at the repl.
    pub fn repl_input(&mut self, buffer: String) -> InputId {
        self.add(buffer, Name::Repl)
    }

    /// A token sequence given directly on the command line.
    pub fn argument_input(&mut self, buffer: String) -> InputId {
        self.add(buffer, Name::Argument)
    }

    /// Input read from a file.
    pub fn file_input(&mut self, buffer: String, path: PathBuf) -> InputId {
        self.add(buffer, Name::File(path))
    }

    pub fn get_input_buffer(&self, id: InputId) -> Option<&str> {
        self.inputs.get(id.0).map(|i| i.buffer.as_str())
    }

    /// A single (0-indexed) line of an input, without its line ending.
    pub fn get_line(&self, id: InputId, line: u32) -> Option<&str> {
        self.get_input_buffer(id)?.lines().nth(line as usize)
    }

    pub fn get_input_name(&self, id: InputId) -> Option<String> {
        let input = self.inputs.get(id.0)?;
        Some(match &input.name {
            Name::File(path) => format!("{}", path.display()),
            Name::Repl => format!("<repl {}>", id.0),
            Name::Argument => "<argument>".into(),
        })
    }

    fn add(&mut self, buffer: String, name: Name) -> InputId {
        let id = self.inputs.len();
        self.inputs.push(Input { buffer, name });
        InputId(id)
    }
}

/// A piece of input has a name, and a buffer which contains its text.
struct Input {
    name: Name,
    buffer: String,
}

/// A piece of input is named based on where it came from.
enum Name {
    Repl,
    Argument,
    File(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_lines() {
        let mut inputs = InputCoordinator::default();
        let file = inputs.file_input("a\nb\n".into(), PathBuf::from("g.txt"));
        let repl = inputs.repl_input("x y".into());

        assert_eq!(inputs.get_input_name(file).as_deref(), Some("g.txt"));
        assert_eq!(inputs.get_input_name(repl).as_deref(), Some("<repl 1>"));
        assert_eq!(inputs.get_line(file, 1), Some("b"));
        assert_eq!(inputs.get_line(file, 2), None);
    }
}
