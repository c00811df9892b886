use crate::utils::Modal;
use yew::prelude::*;

const fn headline(perfect: bool) -> &'static str {
    if perfect {
        "Mystery Unlocked!"
    } else {
        "Incomplete Reveal"
    }
}

fn score_line(score: usize, total: usize) -> String {
    format!("{} out of {}", score, total)
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct RevealSummaryProps {
    pub score: usize,
    pub total: usize,
    pub perfect: bool,
}

#[function_component]
pub(crate) fn RevealSummary(props: &RevealSummaryProps) -> Html {
    let RevealSummaryProps {
        score,
        total,
        perfect,
    } = *props;
    let class = if perfect { "perfect" } else { "partial" };

    html! {
        <header class={classes!("summary", class)}>
            <h2>{headline(perfect)}</h2>
            <p>{"Final Score: "}<strong>{score_line(score, total)}</strong></p>
            if !perfect {
                <small>{"Get all questions correct next time to reveal the full image!"}</small>
            }
        </header>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct BonusMessageProps {
    pub open: bool,
    pub message: AttrValue,
    pub on_close: Callback<()>,
}

#[function_component]
pub(crate) fn BonusMessage(props: &BonusMessageProps) -> Html {
    if !props.open {
        return html! {};
    }
    let onclick = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <Modal>
            <dialog id="bonus" open={true}>
                <article>
                    <button class="close" aria-label="Close message" onclick={onclick.clone()}>{"×"}</button>
                    <h3>{"Secret Reward!"}</h3>
                    <blockquote>{props.message.to_string()}</blockquote>
                    <footer>
                        <button {onclick}>{"Got it!"}</button>
                    </footer>
                </article>
            </dialog>
        </Modal>
    }
}
