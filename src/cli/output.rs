use clap::ValueEnum;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text for people and shell pipelines
    #[default]
    Human,
    /// JSON on stdout, JSON error envelopes on stderr
    Json,
}
