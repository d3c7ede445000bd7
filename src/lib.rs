use std::sync::Once;

use wasm_bindgen::prelude::*;

pub mod config;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod menu;
pub mod policy;
pub mod session;
pub mod view;

pub use config::TableConfig;
pub use error::GameError;
pub use game::{Phase, RoundOutcome, RoundState};
pub use policy::Action;

static INIT_HOOKS: Once = Once::new();

fn init_hooks() {
    INIT_HOOKS.call_once(|| {
        console_error_panic_hook::set_once();
        #[cfg(target_arch = "wasm32")]
        tracing_wasm::set_as_global_default();
    });
}

fn parse_config(params: &JsValue) -> error::Result<TableConfig> {
    if params.is_undefined() || params.is_null() {
        return Ok(TableConfig::default());
    }
    serde_wasm_bindgen::from_value(params.clone()).map_err(|err| GameError::InvalidConfig {
        message: err.to_string(),
    })
}

fn to_js_error(err: GameError) -> JsValue {
    tracing::error!(%err, "table operation failed");
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub fn play_scripted_round(params: &JsValue) -> std::result::Result<JsValue, JsValue> {
    init_hooks();
    let input: session::ScriptedRoundInput = serde_wasm_bindgen::from_value(params.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;

    let report = session::run_scripted(input).map_err(to_js_error)?;

    serde_wasm_bindgen::to_value(&report)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

/// Browser-side table. The page renders `view()` and forwards button
/// clicks to `hit()` and `stand()`.
#[wasm_bindgen]
pub struct BlackjackTable {
    config: TableConfig,
    round: RoundState,
    rounds_started: u64,
}

#[wasm_bindgen]
impl BlackjackTable {
    #[wasm_bindgen(constructor)]
    pub fn new(params: &JsValue) -> std::result::Result<BlackjackTable, JsValue> {
        init_hooks();
        let config = parse_config(params).map_err(to_js_error)?;
        Ok(BlackjackTable {
            config,
            round: RoundState::new(),
            rounds_started: 0,
        })
    }

    #[wasm_bindgen(js_name = startRound)]
    pub fn start_round(&mut self) -> std::result::Result<JsValue, JsValue> {
        let deck = self.config.deck_for_round(self.rounds_started);
        self.rounds_started += 1;
        self.round.start_round(deck).map_err(to_js_error)?;
        self.view()
    }

    pub fn hit(&mut self) -> std::result::Result<JsValue, JsValue> {
        self.act(Action::Hit)
    }

    pub fn stand(&mut self) -> std::result::Result<JsValue, JsValue> {
        self.act(Action::Stand)
    }

    #[wasm_bindgen(js_name = outcomePauseMs)]
    pub fn outcome_pause_ms(&self) -> u32 {
        u32::try_from(self.config.outcome_pause_ms).unwrap_or(u32::MAX)
    }

    pub fn view(&self) -> std::result::Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&view::TableView::from_round(&self.round))
            .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
    }
}

impl BlackjackTable {
    fn act(&mut self, action: Action) -> std::result::Result<JsValue, JsValue> {
        self.round.apply(action).map_err(to_js_error)?;
        self.view()
    }
}
