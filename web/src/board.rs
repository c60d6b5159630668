use crate::api::{DEFAULT_API_BASE, HttpCategorySource};
use clap::Args;
use game::{CellPos, CellView, GameStatus};
use jeopardy_core as game;
use yew::prelude::*;

/// Seed for the category picker drawn from `Math.random`.
fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    let draw = || (random() * f64::from(u32::MAX)) as u64;
    (draw() << 32) | draw()
}

fn button_label(status: &GameStatus) -> &'static str {
    match status {
        GameStatus::Idle => "Start!",
        GameStatus::Loading => "Loading...",
        GameStatus::Ready => "Restart!",
        GameStatus::Failed(_) => "Try again",
    }
}

fn status_message(status: &GameStatus) -> Option<String> {
    status
        .error()
        .map(|err| format!("Could not load the board: {}", err))
}

fn cell_class(cell: CellView<'_>) -> Classes {
    match cell {
        CellView::Empty => classes!("cell", "empty"),
        CellView::Hidden => classes!("cell", "clue", "hidden"),
        CellView::Question(_) => classes!("cell", "clue", "question"),
        CellView::Answer(_) => classes!("cell", "clue", "answer"),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    NewGame,
    CellClick(CellPos),
    Loaded {
        generation: u64,
        result: game::Result<Vec<game::Category>>,
    },
}

#[derive(Properties, Clone, PartialEq)]
struct ClueCellProps {
    pos: CellPos,
    text: String,
    class: Classes,
    #[prop_or_default]
    callback: Option<Callback<CellPos>>,
}

#[function_component(ClueCell)]
fn clue_cell(props: &ClueCellProps) -> Html {
    let ClueCellProps {
        pos,
        text,
        class,
        callback,
    } = props.clone();

    let onclick = callback.map(|callback| {
        Callback::from(move |_: MouseEvent| {
            log::trace!("({}, {}) clicked", pos.row, pos.col);
            callback.emit(pos);
        })
    });

    html! {
        <td {class} {onclick}>{text}</td>
    }
}

/// Cell props for one table row; only cells backed by a clue get the click callback.
fn row_cells(
    grid: &game::BoardGrid<'_>,
    row: usize,
    callback: &Callback<CellPos>,
) -> Vec<ClueCellProps> {
    grid.iter_row(row)
        .map(|(pos, cell)| ClueCellProps {
            pos,
            text: cell.text().to_string(),
            class: cell_class(cell),
            callback: cell.is_clickable().then(|| callback.clone()),
        })
        .collect()
}

/// Reveals the clicked clue, returns whether the board needs a redraw.
fn apply_cell_click(controller: &mut game::GameController, pos: CellPos) -> bool {
    let outcome = controller.reveal(pos);
    log::trace!("cell {:?}: {:?}", pos, outcome);
    outcome.has_update()
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct BoardProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Categories on the board
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_CATEGORIES)]
    pub categories: usize,

    /// Clue rows per category
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_ROWS)]
    pub rows: usize,

    /// Largest category id to pick from
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_MAX_ID)]
    pub max_id: game::CategoryId,

    /// Base URL of the trivia API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,
}

impl BoardProps {
    fn game_config(&self) -> game::GameConfig {
        game::GameConfig::new(self.categories, self.rows, self.max_id)
    }
}

impl Default for BoardProps {
    fn default() -> Self {
        let config = game::GameConfig::default();
        Self {
            seed: None,
            categories: config.categories,
            rows: config.rows,
            max_id: config.max_id,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

#[derive(Debug)]
pub(crate) struct BoardView {
    controller: game::GameController,
    source: HttpCategorySource,
    seed: u64,
}

impl BoardView {
    fn start_game(&mut self, ctx: &Context<Self>) {
        let seed = std::mem::replace(&mut self.seed, js_random_seed());
        let round = self
            .controller
            .start_round(game::RandomCategoryPicker::new(seed));
        log::debug!("new game, round {}", round.generation());

        let source = self.source.clone();
        ctx.link().send_future(async move {
            let result = round.fetch(&source).await;
            Msg::Loaded {
                generation: round.generation(),
                result,
            }
        });
    }

    fn view_header(&self) -> Html {
        let grid = self.controller.grid();
        html! {
            <thead>
                <tr>
                    { for grid.headers().iter().map(|title| html! { <th>{ title.to_string() }</th> }) }
                </tr>
            </thead>
        }
    }

    fn view_body(&self, ctx: &Context<Self>) -> Html {
        let grid = self.controller.grid();
        let callback = ctx.link().callback(Msg::CellClick);

        html! {
            <tbody>
                {
                    for (0..grid.row_count()).map(|row| html! {
                        <tr>
                            {
                                for row_cells(&grid, row, &callback).into_iter().map(|props| html! {
                                    <ClueCell ..props/>
                                })
                            }
                        </tr>
                    })
                }
            </tbody>
        }
    }
}

impl Component for BoardView {
    type Message = Msg;
    type Properties = BoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        ctx.link().send_message(Msg::NewGame);

        Self {
            controller: game::GameController::new(props.game_config()),
            source: HttpCategorySource::new(&props.api_base),
            seed: props.seed.unwrap_or_else(js_random_seed),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            NewGame => {
                self.start_game(ctx);
                true
            }
            CellClick(pos) => apply_cell_click(&mut self.controller, pos),
            Loaded { generation, result } => self
                .controller
                .commit_round(generation, result)
                .has_update(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let status = self.controller.status();
        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NewGame
        });

        html! {
            <div class="jeopardy">
                <nav>
                    <button
                        id="start-button"
                        class={classes!(status.is_loading().then_some("loading"))}
                        onclick={cb_new_game}
                    >
                        { button_label(status) }
                    </button>
                    if let Some(message) = status_message(status) {
                        <aside class="error">{ message }</aside>
                    }
                </nav>
                if status.is_loading() {
                    <div id="spin-container"><i class="loader"/></div>
                }
                <table id="jeopardy">
                    { self.view_header() }
                    { self.view_body(ctx) }
                </table>
            </div>
        }
    }
}
