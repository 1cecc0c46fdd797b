//! Pokedex TUI - step through PokeAPI records one id at a time

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, TaskKey,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

use pokedex::action::Action;
use pokedex::api;
use pokedex::components::{Component, RecordViewer, RecordViewerProps};
use pokedex::effect::{record_result_action, Effect};
use pokedex::reducer::reducer;
use pokedex::state::{AppState, DEFAULT_DEX_ID, LOADING_TICK_MS};

#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Browse PokeAPI records by national dex number")]
struct Args {
    /// Dex number to start on (minimum 1)
    #[arg(long, short, default_value_t = DEFAULT_DEX_ID, value_parser = clap::value_parser!(u32).range(1..))]
    id: u32,

    /// PokeAPI base URL
    #[arg(long, default_value = api::API_BASE)]
    api_base: String,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum ViewerComponentId {
    Viewer,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum ViewerContext {
    Main,
}

impl EventRoutingState<ViewerComponentId, ViewerContext> for AppState {
    fn focused(&self) -> Option<ViewerComponentId> {
        Some(ViewerComponentId::Viewer)
    }

    fn modal(&self) -> Option<ViewerComponentId> {
        None
    }

    fn binding_context(&self, _id: ViewerComponentId) -> ViewerContext {
        ViewerContext::Main
    }

    fn default_context(&self) -> ViewerContext {
        ViewerContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        id,
        api_base,
        debug: debug_args,
    } = Args::parse();

    api::configure(&api_base);
    let debug = DebugSession::new(debug_args);

    let state = debug
        .load_state_or_else_async(move || async move { Ok::<AppState, io::Error>(AppState::new(id)) })
        .await
        .map_err(debug_error)?;
    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let viewer = Rc::new(RefCell::new(RecordViewer::default()));
    let mut bus: EventBus<AppState, Action, ViewerComponentId, ViewerContext> = EventBus::new();
    let keybindings: Keybindings<ViewerContext> = Keybindings::new();

    let handler_viewer = Rc::clone(&viewer);
    bus.register(ViewerComponentId::Viewer, move |event, state| {
        let props = RecordViewerProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = handler_viewer
            .borrow_mut()
            .handle_event(&event.kind, props)
            .into_iter()
            .collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    });

    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::Init),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }
                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(LOADING_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                event_ctx.set_component_area(ViewerComponentId::Viewer, area);
                let props = RecordViewerProps {
                    state,
                    is_focused: render_ctx.is_focused(),
                };
                viewer.borrow_mut().render(frame, area, props);
            },
            |action| matches!(action, Action::Quit),
            handle_effect,
        )
        .await
}

/// Fetches share one task key, so a newer fetch aborts the one it supersedes.
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::FetchRecord { id, generation } => {
            ctx.tasks().spawn(TaskKey::new("pokemon"), async move {
                record_result_action(generation, api::fetch_pokemon(id).await)
            });
        }
    }
}
