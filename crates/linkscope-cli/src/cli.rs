//! Argument parsing and command dispatch.

use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use linkscope_config::ClientConfig;
use linkscope_config::defaults::{
    DEFAULT_API_URL, KEY_API_TOKEN, KEY_API_URL, KEY_HTTP_TIMEOUT_SECS, KEY_POLL_INTERVAL_SECS,
};
use linkscope_core::{SortDirection, SortKey, UrlAction, ViewState};
use linkscope_telemetry::{GlobalContextGuard, LogFormat, LoggingConfig, init_logging};
use uuid::Uuid;

use crate::client::{CliResult, HttpUrlService};
use crate::commands::urls::{handle_action, handle_add, handle_list, handle_show};
use crate::commands::watch::handle_watch;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Parses CLI arguments, executes the requested command, and reports the
/// outcome on stderr. Returns the process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();
    let command_name = command_label(&cli.command);

    let logging = LoggingConfig {
        format: cli.log_format.map_or_else(LogFormat::infer, LogFormatArg::into_format),
        ..LoggingConfig::default()
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("warning: {err}");
    }
    let _context = GlobalContextGuard::new(command_name);

    let trace_id = Uuid::new_v4().to_string();
    let result = match build_context(&cli, &trace_id) {
        Ok(ctx) => dispatch(cli, &ctx).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => {
            tracing::debug!(%trace_id, "command succeeded");
            0
        }
        Err(err) => {
            let exit_code = err.exit_code();
            tracing::debug!(%trace_id, exit_code, "command failed");
            eprintln!("error: {}", err.display_message());
            exit_code
        }
    }
}

/// Application context passed to command handlers.
pub(crate) struct AppContext {
    pub(crate) service: HttpUrlService,
}

fn build_context(cli: &Cli, trace_id: &str) -> CliResult<AppContext> {
    let mut config = ClientConfig::new(&cli.api_url)?
        .with_request_timeout(Duration::from_secs(cli.timeout));
    if let Some(token) = cli.api_token.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        config = config.with_bearer_token(token);
    }
    if let Command::Watch(args) = &cli.command
        && let Some(secs) = args.interval
    {
        config = config.with_poll_interval(Duration::from_secs(secs));
    }
    config.validate()?;

    Ok(AppContext {
        service: HttpUrlService::new(config, trace_id)?,
    })
}

async fn dispatch(cli: Cli, ctx: &AppContext) -> CliResult<()> {
    match cli.command {
        Command::Ls(args) => handle_list(ctx, &args, cli.output).await,
        Command::Show(args) => handle_show(ctx, args.id, cli.output).await,
        Command::Add(args) => handle_add(ctx, &args.url, cli.output).await,
        Command::Retry(args) => handle_action(ctx, UrlAction::Retry, &args.ids, cli.output).await,
        Command::Rm(args) => handle_action(ctx, UrlAction::Delete, &args.ids, cli.output).await,
        Command::Watch(args) => handle_watch(ctx, &args, cli.output).await,
    }
}

#[derive(Parser)]
#[command(
    name = "linkscope",
    about = "Terminal client for the Linkscope website analyzer"
)]
pub(crate) struct Cli {
    #[arg(long, global = true, env = KEY_API_URL, default_value = DEFAULT_API_URL)]
    api_url: String,
    #[arg(long, global = true, env = KEY_API_TOKEN, hide_env_values = true)]
    api_token: Option<String>,
    #[arg(
        long,
        global = true,
        env = KEY_HTTP_TIMEOUT_SECS,
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    timeout: u64,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render structured data"
    )]
    output: OutputFormat,
    #[arg(long, global = true, value_enum, env = "LINKSCOPE_LOG_FORMAT")]
    log_format: Option<LogFormatArg>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// List analysed URLs.
    Ls(ViewArgs),
    /// Show one result with its broken links.
    Show(ShowArgs),
    /// Submit a URL for analysis.
    Add(AddArgs),
    /// Re-run analysis for one or more results.
    Retry(IdsArgs),
    /// Delete one or more results.
    Rm(IdsArgs),
    /// Poll and re-render the list until interrupted.
    Watch(WatchArgs),
}

/// Filter, sort and page options shared by `ls` and `watch`.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct ViewArgs {
    /// Case-insensitive substring matched against the URL.
    #[arg(long, default_value = "")]
    pub(crate) search: String,
    /// Column to sort by (id, title, url, status, html, internal, external, broken, login, created_at).
    #[arg(long)]
    pub(crate) sort: Option<SortKey>,
    /// Sort descending.
    #[arg(long, requires = "sort")]
    pub(crate) desc: bool,
    /// Page to show, starting at 1.
    #[arg(long, default_value_t = 1)]
    pub(crate) page: usize,
}

impl ViewArgs {
    pub(crate) fn view_state(&self) -> ViewState {
        let mut state = ViewState::default();
        state.set_search(self.search.clone());
        state.sort = self.sort;
        if self.desc {
            state.direction = SortDirection::Descending;
        }
        state.set_page(self.page);
        state
    }
}

#[derive(Args)]
pub(crate) struct ShowArgs {
    pub(crate) id: u64,
}

#[derive(Args)]
pub(crate) struct AddArgs {
    pub(crate) url: String,
}

#[derive(Args)]
pub(crate) struct IdsArgs {
    #[arg(required = true, num_args = 1..)]
    pub(crate) ids: Vec<u64>,
}

#[derive(Args, Clone, Debug, Default)]
pub(crate) struct WatchArgs {
    #[command(flatten)]
    pub(crate) view: ViewArgs,
    /// Seconds between refreshes.
    #[arg(long, env = KEY_POLL_INTERVAL_SECS)]
    pub(crate) interval: Option<u64>,
    /// Stop after this many refreshes.
    #[arg(long)]
    pub(crate) count: Option<u64>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Json,
}

impl LogFormatArg {
    const fn into_format(self) -> LogFormat {
        match self {
            Self::Pretty => LogFormat::Pretty,
            Self::Json => LogFormat::Json,
        }
    }
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Ls(_) => "ls",
        Command::Show(_) => "show",
        Command::Add(_) => "add",
        Command::Retry(_) => "retry",
        Command::Rm(_) => "rm",
        Command::Watch(_) => "watch",
    }
}
