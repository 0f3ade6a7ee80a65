//! Chat core: pure ChatWidget state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{Key, Msg};
pub use state::{
    prepare_question, AppState, MessageNode, RequestId, Role, SubmitError,
    EXCHANGE_FAILED_TEXT,
};
pub use update::update;
pub use view_model::AppViewModel;
