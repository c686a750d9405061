use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    SetConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigPayload {
    pub config: serde_json::Value,
}

/// Message telling an admin front end to replace its global config.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigAction {
    #[serde(rename = "type")]
    pub action_type: ActionType,
    pub payload: ConfigPayload,
}

/// Wrap `config` unchanged as `{ type: SET_CONFIG, payload: { config } }`.
pub fn set_config(config: serde_json::Value) -> ConfigAction {
    ConfigAction {
        action_type: ActionType::SetConfig,
        payload: ConfigPayload { config },
    }
}
