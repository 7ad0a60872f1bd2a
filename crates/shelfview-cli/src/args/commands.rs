use super::enums::{OutputFormat, SortArg};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive dashboard (default)")]
    Browse,

    #[command(about = "Print one page of the catalog")]
    List {
        #[arg(long, help = "Case-insensitive title search")]
        search: Option<String>,

        #[arg(long)]
        sort: Option<SortArg>,

        #[arg(long, requires = "sort", help = "Sort descending")]
        desc: bool,

        #[arg(long, default_value = "1")]
        page: usize,

        #[arg(long, help = "Products per page (default: display.page_size)")]
        page_size: Option<usize>,

        #[arg(long, default_value = "plain", help = "Output format")]
        format: OutputFormat,
    },

    #[command(about = "Write a default config file")]
    Init {
        #[arg(long, help = "Overwrite an existing config file")]
        force: bool,
    },
}
