/// Accumulating text log shown under the command console and import form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Echo a beets command before it is sent: `> beet <command>`.
    pub fn echo_command(&mut self, command: &str) {
        self.text.push_str(&format!("\n> beet {}\n", command));
    }

    /// Echo an import request before it is sent.
    pub fn echo_import(&mut self, path: &str) {
        self.text.push_str(&format!("\n> Importing music from: {}\n", path));
    }

    /// Append process stdout exactly as received.
    pub fn append_stdout(&mut self, stdout: &str) {
        self.text.push_str(stdout);
    }

    /// Append process stderr (or a failure message), labelled on its own line.
    pub fn append_error(&mut self, message: &str) {
        self.text.push_str(&format!("Error: {}\n", message));
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Non-empty lines, in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines().filter(|line| !line.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_command_adds_one_line() {
        let mut t = Transcript::new();
        t.echo_command("list -a");
        assert_eq!(t.lines().collect::<Vec<_>>(), vec!["> beet list -a"]);
    }

    #[test]
    fn test_output_follows_echo_in_order() {
        let mut t = Transcript::new();
        t.echo_command("stats");
        t.append_stdout("Tracks: 10\nTotal time: 40 minutes\n");
        t.append_error("warning: slow disk");
        assert_eq!(
            t.lines().collect::<Vec<_>>(),
            vec![
                "> beet stats",
                "Tracks: 10",
                "Total time: 40 minutes",
                "Error: warning: slow disk",
            ]
        );
    }

    #[test]
    fn test_stdout_is_verbatim() {
        let mut t = Transcript::new();
        t.append_stdout("  padded\twith tabs  ");
        assert_eq!(t.as_str(), "  padded\twith tabs  ");
    }

    #[test]
    fn test_echo_import() {
        let mut t = Transcript::new();
        t.echo_import("/music/new");
        assert_eq!(t.as_str(), "\n> Importing music from: /music/new\n");
    }

    #[test]
    fn test_clear() {
        let mut t = Transcript::new();
        t.echo_command("list");
        t.clear();
        assert!(t.is_empty());
    }
}
