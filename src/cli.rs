use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "crawlctl", version, about = "Crawling profile console")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "CRAWLCTL_API_URL",
        help = "Profile API base URL (overrides the settings file)"
    )]
    pub api_url: Option<String>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        conflicts_with = "json",
        help = "Emit the profile list as an HTML page"
    )]
    pub html: bool,
    #[arg(long, global = true, help = "Show the active column and toggle action")]
    pub show_active: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    List,
    Show(NameArgs),
    Create(CreateArgs),
    Update(UpdateArgs),
    Delete(NameArgs),
    Toggle(ToggleArgs),
    Crawl(NameArgs),
    Analyze(NameArgs),
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct NameArgs {
    #[arg(help = "Profile name")]
    pub name: String,
}

#[derive(Debug, Args)]
pub struct ProfileFields {
    #[arg(long, help = "Site root to crawl")]
    pub base_url: String,
    #[arg(long, help = "Content language")]
    pub language: String,
    #[arg(long, help = "Backend crawling strategy")]
    pub crawling_strategy: String,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(long, help = "Unique profile name")]
    pub name: String,
    #[command(flatten)]
    pub fields: ProfileFields,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    #[arg(help = "Profile name")]
    pub name: String,
    #[command(flatten)]
    pub fields: ProfileFields,
}

#[derive(Debug, Args)]
pub struct ToggleArgs {
    #[arg(help = "Profile name")]
    pub name: String,
    #[arg(long, action = ArgAction::Set, help = "Active state the profile has now")]
    pub current: bool,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    Show,
    SetUrl(SetUrlArgs),
}

#[derive(Debug, Args)]
pub struct SetUrlArgs {
    #[arg(help = "Profile API base URL")]
    pub url: String,
}
