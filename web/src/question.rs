use unveil_core as game;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct QuestionBoxProps {
    pub question: game::Question,
    /// Option picked but not yet submitted.
    #[prop_or_default]
    pub selected: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    pub on_select: Callback<AttrValue>,
}

fn option_class(option: &str, selected: Option<&str>, disabled: bool) -> Classes {
    let is_selected = selected == Some(option);
    classes!(
        "option",
        is_selected.then_some("selected"),
        (disabled && !is_selected).then_some("dimmed"),
    )
}

#[function_component]
pub(crate) fn QuestionBox(props: &QuestionBoxProps) -> Html {
    let QuestionBoxProps {
        question,
        selected,
        disabled,
        on_select,
    } = props.clone();

    let category = question.category();

    html! {
        <article class="question-box">
            <header>
                <span class={classes!("category", category.label())}>{category.label()}</span>
            </header>
            <h3>{question.text()}</h3>
            <div class="options">
                {
                    for question.options().iter().enumerate().map(|(idx, option)| {
                        let option = AttrValue::from(option.clone());
                        let class = option_class(&option, selected.as_deref(), disabled);
                        let onclick = {
                            let on_select = on_select.clone();
                            let option = option.clone();
                            Callback::from(move |_: MouseEvent| {
                                log::trace!("option clicked: {:?}", option);
                                on_select.emit(option.clone());
                            })
                        };
                        html! {
                            <button key={idx} {class} {onclick} {disabled}>
                                <span class="letter">{game::Question::option_label(idx).to_string()}</span>
                                {option.to_string()}
                            </button>
                        }
                    })
                }
            </div>
        </article>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct FeedbackProps {
    pub outcome: game::AnswerOutcome,
    pub on_next: Callback<()>,
}

#[function_component]
pub(crate) fn Feedback(props: &FeedbackProps) -> Html {
    let game::AnswerOutcome {
        correct,
        explanation,
        ..
    } = &props.outcome;
    let (class, mark, title) = if *correct {
        ("correct", "✓", "Correct Answer!")
    } else {
        ("incorrect", "✗", "Incorrect")
    };
    let onclick = props.on_next.reform(|_: MouseEvent| ());

    html! {
        <article class={classes!("feedback", class)}>
            <div class="mark">{mark}</div>
            <h3>{title}</h3>
            <p>{explanation.clone()}</p>
            <button {onclick}>{"Next Question"}</button>
        </article>
    }
}
