pub mod check;
mod command_result;
pub mod compile;
pub mod init;
pub mod inspect;

pub use command_result::{
    CheckSummary, CommandResult, CommandSummary, CompileSummary, CompiledFile, FileFailure,
    InitSummary, InspectSummary,
};
