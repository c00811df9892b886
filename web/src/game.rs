use crate::question::{Feedback, QuestionBox};
use crate::summary::{BonusMessage, RevealSummary};
use crate::tiles::TileGrid;
use crate::utils::*;
use clap::Args;
use gloo::timers::callback::Timeout;
use unveil_core as game;
use yew::prelude::*;

/// Pause between picking an option and submitting it, so the pick is visible.
const SELECTION_DELAY_MS: u32 = 400;

/// Session plus the view-only state around it.
#[derive(Clone, Debug)]
pub(crate) struct QuizState {
    session: game::GameSession,
    selected: Option<AttrValue>,
    bonus_open: bool,
}

impl QuizState {
    fn new(session: game::GameSession) -> Self {
        Self {
            session,
            selected: None,
            bonus_open: false,
        }
    }

    fn can_select(&self) -> bool {
        self.session.phase().is_playing()
            && !self.session.is_awaiting_advance()
            && self.selected.is_none()
    }

    /// Records the pick; `true` means a delayed submit should be scheduled.
    fn select(&mut self, choice: AttrValue) -> bool {
        if !self.can_select() {
            log::debug!("ignoring selection {:?}", choice);
            return false;
        }
        self.selected = Some(choice);
        true
    }

    fn submit(&mut self, choice: &str) -> bool {
        if self.selected.as_deref() != Some(choice) {
            log::debug!("dropping stale submit {:?}", choice);
            return false;
        }
        self.selected = None;

        match self.session.submit_answer(choice) {
            Ok(outcome) => {
                log::debug!("answer outcome: {:?}", outcome);
            }
            Err(err) => {
                log::warn!("{}", err);
            }
        }
        true
    }

    fn start(&mut self) -> bool {
        match self.session.start() {
            Ok(()) => true,
            Err(err) => {
                log::warn!("{}", err);
                false
            }
        }
    }

    fn next(&mut self) -> bool {
        match self.session.advance() {
            Ok(outcome) => {
                if outcome.is_revealed() {
                    self.bonus_open = true;
                }
                true
            }
            Err(err) => {
                log::warn!("{}", err);
                false
            }
        }
    }

    fn reset(&mut self) -> bool {
        self.selected = None;
        self.bonus_open = false;
        self.session.reset();
        true
    }

    fn close_bonus(&mut self) -> bool {
        std::mem::replace(&mut self.bonus_open, false)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start,
    Select(AttrValue),
    Submit(AttrValue),
    Next,
    Reset,
    CloseBonus,
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<String>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    state: QuizState,
    pending_submit: Option<Timeout>,
}

impl GameView {
    fn view_setup(&self, ctx: &Context<Self>) -> Html {
        let onclick = ctx.link().callback(|_: MouseEvent| Msg::Start);
        let config = self.state.session.config();
        let total = config.total_tiles();

        html! {
            <section class="setup">
                <h2>{config.theme.clone()}</h2>
                <p>{format!("{} Questions. 1 Mystery Image. Can you reveal the whole picture?", total)}</p>
                <button {onclick}>{"Start Quiz"}</button>
            </section>
        }
    }

    fn view_playing(&self, ctx: &Context<Self>, snapshot: &game::SessionSnapshot) -> Html {
        let panel = match (&snapshot.last_outcome, &snapshot.question) {
            (Some(outcome), _) => {
                let on_next = ctx.link().callback(|()| Msg::Next);
                html! { <Feedback outcome={outcome.clone()} {on_next}/> }
            }
            (None, Some(question)) => {
                let on_select = ctx.link().callback(Msg::Select);
                let selected = self.state.selected.clone();
                let disabled = selected.is_some();
                html! {
                    <QuestionBox question={question.clone()} {selected} {disabled} {on_select}/>
                }
            }
            (None, None) => html! {},
        };

        html! {
            <section class="playing">
                <div class="board">
                    <nav>
                        <aside>{"Revealed: "}<strong>{format!("{} / {}", snapshot.revealed_tiles.len(), snapshot.total_tiles)}</strong></aside>
                        <aside>{"Question: "}<strong>{format!("{} / {}", snapshot.question_number, snapshot.question_count)}</strong></aside>
                    </nav>
                    <TileGrid
                        image_url={snapshot.image_url.clone()}
                        revealed={snapshot.revealed_tiles.clone()}
                        total_tiles={snapshot.total_tiles}
                    />
                </div>
                <div class="panel">{panel}</div>
            </section>
        }
    }

    fn view_revealed(&self, ctx: &Context<Self>, snapshot: &game::SessionSnapshot) -> Html {
        let onclick = ctx.link().callback(|_: MouseEvent| Msg::Reset);
        let on_close = ctx.link().callback(|()| Msg::CloseBonus);
        let message = self.state.session.config().bonus_message.clone();

        html! {
            <section class="revealed">
                <RevealSummary
                    score={snapshot.score}
                    total={snapshot.total_tiles}
                    perfect={snapshot.perfect}
                />
                <TileGrid
                    image_url={snapshot.image_url.clone()}
                    revealed={snapshot.revealed_tiles.clone()}
                    total_tiles={snapshot.total_tiles}
                />
                <button {onclick}>{"Try Again"}</button>
                <BonusMessage open={self.state.bonus_open} {message} {on_close}/>
            </section>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx
            .props()
            .seed
            .as_deref()
            .map(parse_seed)
            .unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let bank = game::QuestionBank::builtin().expect("Built-in question bank is invalid");
        let session = game::GameSession::new(bank, game::QuizConfig::default(), seed);

        Self {
            state: QuizState::new(session),
            pending_submit: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => self.state.start(),
            Select(choice) => {
                if !self.state.select(choice.clone()) {
                    return false;
                }
                let link = ctx.link().clone();
                self.pending_submit = Some(Timeout::new(SELECTION_DELAY_MS, move || {
                    link.send_message(Submit(choice))
                }));
                true
            }
            Submit(choice) => {
                self.pending_submit = None;
                self.state.submit(&choice)
            }
            Next => self.state.next(),
            Reset => {
                // dropping the timeout cancels a submit still in flight
                self.pending_submit = None;
                self.state.reset()
            }
            CloseBonus => self.state.close_bonus(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use game::Phase::*;

        let snapshot = self.state.session.snapshot();
        let body = match snapshot.phase {
            Setup => self.view_setup(ctx),
            Playing => self.view_playing(ctx, &snapshot),
            Revealed => self.view_revealed(ctx, &snapshot),
        };

        html! {
            <div class="unveil">
                <header>
                    <h1>{"Trivia Mystery Reveal"}</h1>
                    <p>{"Test your knowledge to uncover the secret image."}</p>
                </header>
                <main>{body}</main>
                <footer>{format!("{} Challenge • Offline Mode", snapshot.theme)}</footer>
            </div>
        }
    }
}
