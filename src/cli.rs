//! Command line front end.
//!
//! Every command opens the store of one screen, dispatches the actions a user
//! would trigger there and prints the settled state. Nothing here talks to
//! repositories directly.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context as _};
use clap::{Parser, Subcommand};
use futures::StreamExt;

use crate::config::SecureString;
use crate::context::AppContext;
use crate::domain::{SortOption, Tip};
use crate::navigation::{Coordinator, NavigationStack, Route};
use crate::ui::blocked_list::BlockedListAction;
use crate::ui::explore::{ExploreAction, ExploreState};
use crate::ui::home::{HomeAction, HomeState};
use crate::ui::login::{LoginAction, LoginState};
use crate::ui::my_info::{MyInfoAction, MyInfoState};
use crate::ui::mvi::{Pulse, PulseReader, Reactor, Store};
use crate::ui::search::{SearchAction, SearchState};
use crate::ui::story_cell::StoryCellAction;
use crate::ui::user_profile::{UserProfileAction, UserProfileState};

/// Slack on top of the request timeout before a command stops waiting.
const SETTLE_GRACE: Duration = Duration::from_secs(5);

#[derive(Debug, Parser)]
#[command(name = "everytip")]
#[command(version)]
#[command(about = "Browse and manage EveryTip from the terminal", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/everytip/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL from the config file
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the home feed
    Feed {
        /// Ordering: latest, views or likes
        #[arg(long, value_parser = parse_sort, default_value = "latest")]
        sort: SortOption,

        /// Open the tip at this position in the feed
        #[arg(long)]
        open: Option<usize>,
    },

    /// Show the explore tab: writer stories and their tips
    Explore {
        /// Only show tips of this story's writer
        #[arg(long)]
        story: Option<String>,
    },

    /// Show a user's profile and tips
    Profile {
        user_id: i64,

        /// Toggle the subscription to this user
        #[arg(long)]
        subscribe: bool,

        /// Report this user
        #[arg(long, conflicts_with = "subscribe")]
        report: bool,
    },

    /// Search tips by keyword
    Search {
        keyword: String,

        /// Ordering: latest, views or likes
        #[arg(long, value_parser = parse_sort, default_value = "latest")]
        sort: SortOption,
    },

    /// Show or edit the recent search keywords
    Recent {
        /// Remove one keyword
        #[arg(long)]
        remove: Option<String>,

        /// Remove every keyword
        #[arg(long, conflicts_with = "remove")]
        clear: bool,
    },

    /// Show the signed-in profile and menu
    Me,

    /// Sign in; the password is read from stdin
    Login {
        #[arg(long)]
        email: String,
    },

    /// Sign out and forget the stored tokens
    Logout,

    /// Hide a user's content on this device
    Block { user_id: i64 },

    /// Show a blocked user's content again
    Unblock { user_id: i64 },

    /// List blocked users
    Blocked,
}

fn parse_sort(s: &str) -> Result<SortOption, String> {
    SortOption::parse(s).ok_or_else(|| format!("unknown sort '{}' (latest, views, likes)", s))
}

/// Execute `command` against `ctx`, reading secrets from `input` and printing
/// results to `out`.
pub async fn run<W: Write>(
    ctx: &AppContext,
    command: Command,
    input: &mut dyn BufRead,
    out: &mut W,
) -> anyhow::Result<()> {
    let limit = Duration::from_secs(u64::from(ctx.config().api.timeout_seconds)) + SETTLE_GRACE;

    match command {
        Command::Feed { sort, open } => feed(ctx, sort, open, limit, out).await,
        Command::Explore { story } => explore(ctx, story, limit, out).await,
        Command::Profile {
            user_id,
            subscribe,
            report,
        } => profile(ctx, user_id, subscribe, report, limit, out).await,
        Command::Search { keyword, sort } => search(ctx, keyword, sort, limit, out).await,
        Command::Recent { remove, clear } => recent(ctx, remove, clear, out),
        Command::Me => me(ctx, limit, out).await,
        Command::Login { email } => login(ctx, email, input, limit, out).await,
        Command::Logout => logout(ctx, out),
        Command::Block { user_id } => block(ctx, user_id, out),
        Command::Unblock { user_id } => unblock(ctx, user_id, out),
        Command::Blocked => blocked(ctx, out),
    }
}

/// Dispatch `action` and wait for the first snapshot satisfying `done`.
/// Falls back to the current state when `limit` passes first.
async fn settle<R, F>(store: &Store<R>, action: R::Action, done: F, limit: Duration) -> R::State
where
    R: Reactor,
    F: FnMut(&R::State) -> bool,
{
    let mut states = store.observe();
    store.dispatch(action);
    match states.wait_for(done, limit).await {
        Some(state) => state,
        None => {
            tracing::warn!(timeout_secs = limit.as_secs(), "Gave up waiting for the screen");
            store.current_state()
        }
    }
}

/// Predicate that holds once `busy` went up and came back down.
fn after_busy<S>(busy: impl Fn(&S) -> bool) -> impl FnMut(&S) -> bool {
    let mut started = false;
    move |state: &S| {
        if busy(state) {
            started = true;
            false
        } else {
            started
        }
    }
}

fn print_toast<W: Write>(out: &mut W, toast: &Pulse<String>) -> anyhow::Result<()> {
    if let Some(message) = PulseReader::new().read(toast) {
        writeln!(out, "! {}", message)?;
    }
    Ok(())
}

fn print_tips<W: Write>(out: &mut W, tips: &[&Tip]) -> anyhow::Result<()> {
    if tips.is_empty() {
        writeln!(out, "(no tips)")?;
    }
    for (index, tip) in tips.iter().enumerate() {
        writeln!(
            out,
            "{:>3}. [{}] {} by {} ({} views, {} likes)",
            index, tip.id, tip.title, tip.writer_name, tip.view_count, tip.like_count
        )?;
    }
    Ok(())
}

async fn feed<W: Write>(
    ctx: &AppContext,
    sort: SortOption,
    open: Option<usize>,
    limit: Duration,
    out: &mut W,
) -> anyhow::Result<()> {
    let store = Store::new(ctx.home());
    store.dispatch(HomeAction::SortButtonTapped(sort));
    let state = settle(
        &store,
        HomeAction::ViewDidLoad,
        after_busy(|s: &HomeState| s.is_loading),
        limit,
    )
    .await;

    writeln!(out, "Feed ({})", state.sort_option.label())?;
    print_tips(out, &state.tips.iter().collect::<Vec<_>>())?;
    print_toast(out, &state.toast)?;

    if let Some(index) = open {
        let tip = state
            .tips
            .get(index)
            .cloned()
            .with_context(|| format!("no tip at position {}", index))?;
        let mut pushes = store.observe().pulses(|s: &HomeState| &s.push_signal);
        store.dispatch(HomeAction::TipSelected(tip));
        let selected = store.current_state().selected_tip;

        let mut stack = NavigationStack::new(Route::Home);
        let mut app = Coordinator::new("app", Route::Home);
        if let (Some(()), Some(tip)) = (pushes.next().await, selected) {
            let detail = Coordinator::new("tip-detail", Route::tip_detail(&tip));
            detail.start(&mut stack);
            app.append_child(detail);
            writeln!(out, "-> {:?}", stack.top())?;
        }
    }
    Ok(())
}

async fn explore<W: Write>(
    ctx: &AppContext,
    story: Option<String>,
    limit: Duration,
    out: &mut W,
) -> anyhow::Result<()> {
    let store = Store::new(ctx.explore());
    let mut state = settle(
        &store,
        ExploreAction::ViewDidLoad,
        after_busy(|s: &ExploreState| s.is_loading),
        limit,
    )
    .await;
    if let Some(name) = story {
        store.dispatch(ExploreAction::StoryCellTapped(name));
        state = store.current_state();
    }

    for story in &state.stories {
        let cell = Store::new(ctx.story_cell());
        if story.user_name == state.selected_story {
            cell.dispatch(StoryCellAction::CellSelected);
        }
        let marker = if cell.current_state().is_selected {
            '*'
        } else {
            ' '
        };
        writeln!(out, "{} {}", marker, story.user_name)?;
    }
    writeln!(out)?;
    print_tips(out, &state.visible_tips())?;
    print_toast(out, &state.toast)
}

async fn profile<W: Write>(
    ctx: &AppContext,
    user_id: i64,
    subscribe: bool,
    report: bool,
    limit: Duration,
    out: &mut W,
) -> anyhow::Result<()> {
    let store = Store::new(ctx.user_profile(user_id));
    let mut state = settle(
        &store,
        UserProfileAction::ViewDidLoad,
        after_busy(|s: &UserProfileState| s.is_loading),
        limit,
    )
    .await;

    let follow_up = if subscribe {
        Some(UserProfileAction::SubscribeButtonTapped)
    } else if report {
        Some(UserProfileAction::ReportUser)
    } else {
        None
    };
    if let Some(action) = follow_up {
        let seen = state.toast.generation();
        state = settle(
            &store,
            action,
            move |s: &UserProfileState| s.toast.generation() > seen,
            limit,
        )
        .await;
    }

    match &state.user_profile {
        Some(profile) => writeln!(
            out,
            "{} (#{}) {} tips, {} subscribers{}",
            profile.nick_name,
            profile.id,
            profile.tip_count,
            profile.subscriber_count,
            if profile.is_following { ", subscribed" } else { "" }
        )?,
        None => writeln!(out, "User #{}", user_id)?,
    }
    print_tips(out, &state.tips.iter().collect::<Vec<_>>())?;
    print_toast(out, &state.toast)
}

async fn search<W: Write>(
    ctx: &AppContext,
    keyword: String,
    sort: SortOption,
    limit: Duration,
    out: &mut W,
) -> anyhow::Result<()> {
    let store = Store::new(ctx.search());
    store.dispatch(SearchAction::KeywordInputChanged(keyword.clone()));
    store.dispatch(SearchAction::SortButtonTapped(sort));

    let state = if keyword.trim().is_empty() {
        store.dispatch(SearchAction::SearchButtonTapped);
        store.current_state()
    } else {
        settle(
            &store,
            SearchAction::SearchButtonTapped,
            after_busy(|s: &SearchState| s.is_searching),
            limit,
        )
        .await
    };

    if state.shows_empty_result() {
        writeln!(out, "No tips found for '{}'", state.keyword.trim())?;
    } else if state.has_searched {
        print_tips(out, &state.tips.iter().collect::<Vec<_>>())?;
    }
    print_toast(out, &state.toast)
}

fn recent<W: Write>(
    ctx: &AppContext,
    remove: Option<String>,
    clear: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let store = Store::new(ctx.search());
    store.dispatch(SearchAction::LoadRecentKeywords);
    if let Some(keyword) = remove {
        store.dispatch(SearchAction::RemoveRecentKeyword(keyword));
    } else if clear {
        store.dispatch(SearchAction::RemoveAllButtonTapped);
    }

    let state = store.current_state();
    if state.recent_keywords.is_empty() {
        writeln!(out, "(no recent searches)")?;
    }
    for keyword in &state.recent_keywords {
        writeln!(out, "{}", keyword)?;
    }
    print_toast(out, &state.toast)
}

async fn me<W: Write>(ctx: &AppContext, limit: Duration, out: &mut W) -> anyhow::Result<()> {
    let store = Store::new(ctx.my_info());
    let state = settle(
        &store,
        MyInfoAction::Refresh,
        after_busy(|s: &MyInfoState| s.is_loading),
        limit,
    )
    .await;

    let profile = &state.my_profile;
    writeln!(out, "{} <{}>", profile.nick_name, profile.email)?;
    if !profile.is_guest() {
        writeln!(
            out,
            "{} tips, {} saved, {} subscribers",
            profile.tip_count, profile.saved_tip_count, profile.subscriber_count
        )?;
    }
    for item in &state.items {
        writeln!(out, "- {}", item.title())?;
    }
    Ok(())
}

async fn login<W: Write>(
    ctx: &AppContext,
    email: String,
    input: &mut dyn BufRead,
    limit: Duration,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    let password = SecureString::new(line.trim_end_matches(['\r', '\n']).to_string());

    let store = Store::new(ctx.login());
    store.dispatch(LoginAction::EmailChanged(email));
    store.dispatch(LoginAction::PasswordChanged(password));
    if !store.current_state().is_login_enabled {
        bail!("email and password must not be empty");
    }

    let mut stack = NavigationStack::new(Route::MyInfo);
    let mut app = Coordinator::new("app", Route::MyInfo);
    let flow = Coordinator::new("login", Route::Login);
    flow.start(&mut stack);
    let flow_id = app.append_child(flow);

    let state = settle(
        &store,
        LoginAction::LoginTapped,
        after_busy(|s: &LoginState| s.is_loading),
        limit,
    )
    .await;
    print_toast(out, &state.toast)?;
    if state.dismiss_signal.generation() == 0 {
        bail!("login failed");
    }
    app.did_finish(flow_id, &mut stack);
    writeln!(out, "-> {:?}", stack.top())?;
    Ok(())
}

fn logout<W: Write>(ctx: &AppContext, out: &mut W) -> anyhow::Result<()> {
    let store = Store::new(ctx.my_info());
    store.dispatch(MyInfoAction::LogoutConfirmTapped);
    print_toast(out, &store.current_state().toast)
}

fn block<W: Write>(ctx: &AppContext, user_id: i64, out: &mut W) -> anyhow::Result<()> {
    let store = Store::new(ctx.user_profile(user_id));
    store.dispatch(UserProfileAction::BlockUser);
    print_toast(out, &store.current_state().toast)
}

fn unblock<W: Write>(ctx: &AppContext, user_id: i64, out: &mut W) -> anyhow::Result<()> {
    let store = Store::new(ctx.blocked_list());
    store.dispatch(BlockedListAction::UnblockTapped(user_id));
    print_toast(out, &store.current_state().toast)
}

fn blocked<W: Write>(ctx: &AppContext, out: &mut W) -> anyhow::Result<()> {
    let store = Store::new(ctx.blocked_list());
    store.dispatch(BlockedListAction::ViewDidLoad);
    let state = store.current_state();
    if state.show_placeholder() {
        writeln!(out, "(nobody is blocked)")?;
    }
    for user_id in &state.blocked_ids {
        writeln!(out, "{}", user_id)?;
    }
    Ok(())
}
