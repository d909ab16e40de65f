use clap::Parser;

/// An interactive shell over named sets of strings.
#[derive(Clone, Debug, Parser)]
#[command(version)]
pub struct ShellOptions {
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Print a prompt before reading each command.
    #[arg(short, long, default_value_t = false)]
    pub prompt: bool,

    /// Render sets in storage order instead of sorting their members.
    #[arg(short, long, default_value_t = false)]
    pub unordered: bool,
}

impl ShellOptions {
    /// The logger specification, falling back to `info` when none was given.
    pub fn log_spec(&self) -> String {
        self.log_level.clone().unwrap_or("info".into())
    }
}
