/// Switches shared by the validator and the tree printer
#[derive(Debug, Clone)]
pub struct Config {
    /// Re-derive line/column from the source text when validating
    pub check_positions: bool,
    /// Append `@line:column [start..end]` to every node in tree dumps
    pub dump_spans: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            check_positions: true,
            dump_spans: false,
        }
    }
}
