use unveil_core as game;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewTileState {
    Hidden,
    Revealed,
    /// The most recently uncovered tile, animated in.
    Fresh,
}

impl ViewTileState {
    fn at(index: game::TileIndex, revealed: &[game::TileIndex]) -> Self {
        match revealed.last() {
            Some(&last) if last == index => Self::Fresh,
            _ if revealed.contains(&index) => Self::Revealed,
            _ => Self::Hidden,
        }
    }

    const fn class(self) -> &'static str {
        use ViewTileState::*;
        match self {
            Hidden => "hidden",
            Revealed => "revealed",
            Fresh => "revealed fresh",
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct TileGridProps {
    pub image_url: AttrValue,
    pub revealed: Vec<game::TileIndex>,
    pub total_tiles: game::TileIndex,
    #[prop_or(game::TileLayout::STANDARD)]
    pub layout: game::TileLayout,
}

#[function_component]
pub(crate) fn TileGrid(props: &TileGridProps) -> Html {
    let TileGridProps {
        image_url,
        revealed,
        total_tiles,
        layout,
    } = props;

    let style = format!(
        "grid-template-columns: repeat({}, 1fr); grid-template-rows: repeat({}, 1fr);",
        layout.columns, layout.rows
    );

    html! {
        <div class="tile-grid">
            <img src={image_url.clone()} alt="Mystery Reveal"/>
            <div class="tiles" {style}>
                {
                    for (0..*total_tiles).map(|index| {
                        let state = ViewTileState::at(index, revealed);
                        html! {
                            <div key={index} class={classes!("tile", state.class().split(' ').collect::<Vec<_>>())}>
                                if state == ViewTileState::Hidden {
                                    <span>{index + 1}</span>
                                }
                            </div>
                        }
                    })
                }
            </div>
        </div>
    }
}
