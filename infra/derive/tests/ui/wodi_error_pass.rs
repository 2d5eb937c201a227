use std::borrow::Cow;
use wodi_derive::wodi_error;

#[wodi_error]
#[derive(Debug)]
pub enum ArchiveError {
    #[error("Archive read error{}: {source}", format_context(.context))]
    Read {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[cfg(unix)]
    #[error("Archive permission error{}: {message}", format_context(.context))]
    Permission { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Archive internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn open() -> Result<(), ArchiveError> {
    Err(String::from("header truncated").into())
}

fn main() {
    let err = open().context("Game.dat").unwrap_err();
    assert_eq!(err.kind(), "Internal");
    assert_eq!(err.to_string(), "Archive internal error (Game.dat): header truncated");
}
