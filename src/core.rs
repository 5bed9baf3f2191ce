//! Elm-style core of the comment feed
//!
//! Raw terminal input is translated into [`msg::Msg`], folded into
//! [`state::AppState`] by [`update::update`], and the resulting
//! [`cmd::Cmd`]s are run by [`cmd_executor::CmdExecutor`].

pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod translator;
pub mod update;
