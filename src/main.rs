use statsync::engine::collector::CollectorError;
use statsync::git::GitError;

fn main() {
    if let Err(err) = statsync::cli::run() {
        statsync::ui::output::error(format!("{:#}", err));
        std::process::exit(exit_code(&err));
    }
}

/// Propagate the failing subprocess's exit code when one is known.
fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(CollectorError::Failed {
            code: Some(code), ..
        }) = cause.downcast_ref::<CollectorError>()
        {
            return *code;
        }
        if let Some(GitError::CommandFailed {
            code: Some(code), ..
        }) = cause.downcast_ref::<GitError>()
        {
            return *code;
        }
    }
    1
}
