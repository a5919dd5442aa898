//! CLI for browsing posts from a terminal.
//!
//! ```ignore
//! use chitchat::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! let output = run_cli_command(command, ClientConfig::from_env()?).await?;
//! print!("{}", output);
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, ListOptions, USAGE};
pub use version::{version_line, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::sync::Arc;

use crate::adapters::{
    InMemoryParamStore, ReqwestHttpClient, StaticSession, TracingNavigator, TracingNotifier,
};
use crate::config::ClientConfig;
use crate::error::ChitChatError;
use crate::posts::PostsClient;
use crate::query_state::{LIMIT_KEY, PAGE_KEY, SEARCH_KEY};
use crate::render::{render_list, render_post, render_tags};
use crate::traits::{ParamStore, PostsApi};
use crate::view_model::ListViewModel;

/// Query parameters for a list run, as a fresh parameter store.
pub fn params_from_options(options: &ListOptions) -> InMemoryParamStore {
    let mut params = Vec::new();
    if let Some(page) = options.page {
        params.push((PAGE_KEY.to_string(), page.to_string()));
    }
    if let Some(limit) = options.limit {
        params.push((LIMIT_KEY.to_string(), limit.to_string()));
    }
    if let Some(search) = options.search.as_ref().filter(|s| !s.trim().is_empty()) {
        params.push((SEARCH_KEY.to_string(), search.clone()));
    }
    let mut store = InMemoryParamStore::new();
    store.replace_all(params);
    store
}

/// Run `command` against the backend in `config` and return what to print.
pub async fn run_cli_command(command: CliCommand, config: ClientConfig) -> Result<String> {
    match command {
        CliCommand::Version => Ok(format!("{}\n", version_line())),
        CliCommand::Help => Ok(USAGE.to_string()),
        command => {
            let http = ReqwestHttpClient::with_timeout(config.timeout)?;
            let client = Arc::new(PostsClient::from_config(http, &config));
            run_with_client(command, client, &config).await
        }
    }
}

/// Run a backend command with an already-built client.
pub async fn run_with_client<C: PostsApi + 'static>(
    command: CliCommand,
    client: Arc<C>,
    config: &ClientConfig,
) -> Result<String> {
    match command {
        CliCommand::Version => Ok(format!("{}\n", version_line())),
        CliCommand::Help => Ok(USAGE.to_string()),
        CliCommand::ShowPost(id) => {
            let post = client.fetch_post(&id).await.map_err(report)?;
            Ok(render_post(&post, config.user.as_ref()))
        }
        CliCommand::Tags => {
            let tags = client.fetch_tags().await.map_err(report)?;
            Ok(render_tags(&tags))
        }
        CliCommand::List(list) => {
            let mut vm = list_view_model(client, config, &list);
            vm.mount();
            vm.settle().await;
            Ok(render_list(&vm))
        }
        CliCommand::Like { id, list } => {
            let mut vm = list_view_model(client, config, &list);
            vm.like(&id).await.map_err(report)?;
            vm.settle().await;
            Ok(render_list(&vm))
        }
        CliCommand::Delete { id, list } => {
            let mut vm = list_view_model(client, config, &list);
            vm.delete(&id).await.map_err(report)?;
            vm.settle().await;
            Ok(render_list(&vm))
        }
    }
}

fn list_view_model<C: PostsApi + 'static>(
    client: Arc<C>,
    config: &ClientConfig,
    list: &ListOptions,
) -> ListViewModel<C, InMemoryParamStore> {
    let session = StaticSession::new(config.token.clone(), config.user.clone());
    ListViewModel::new(client, params_from_options(list))
        .with_session(Arc::new(session))
        .with_notifier(Arc::new(TracingNotifier))
        .with_navigator(Arc::new(TracingNavigator::new()))
        .with_fetch_timeout(config.timeout)
}

fn report(err: ChitChatError) -> color_eyre::Report {
    if err.requires_login() {
        eyre!(
            "{} Log in and set CHITCHAT_TOKEN and CHITCHAT_USER_ID.",
            err.user_message()
        )
    } else {
        eyre!(
            "{} ({})\nHint: {}.",
            err.user_message(),
            err.error_code(),
            err.category().recovery_hint()
        )
    }
}
