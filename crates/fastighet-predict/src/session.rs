/// Per-user dashboard state that outlives a single interaction.
///
/// The only carried item is the last prediction banner, so a rerender
/// after an unrelated action can keep showing it.
#[derive(Debug, Default)]
pub struct Session {
    last_result: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly rendered result, returning whatever it displaced.
    pub fn remember(&mut self, result: String) -> Option<String> {
        self.last_result.replace(result)
    }

    pub fn last_result(&self) -> Option<&str> {
        self.last_result.as_deref()
    }
}
