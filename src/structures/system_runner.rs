/// `ToolRunner` that spawns real processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;
