use std::borrow::Cow;

/// Errors raised while installing the global subscriber.
#[wodi_derive::wodi_error]
pub enum LoggerError {
    /// The rolling file appender could not be built (unwritable directory and the like).
    #[error("Rolling file appender error{}: {source}", format_context(context))]
    Appender { source: tracing_appender::rolling::InitError, context: Option<Cow<'static, str>> },

    /// A global subscriber is already installed in this process.
    #[error("Tracing subscriber error{}: {source}", format_context(context))]
    Subscriber {
        source: tracing_subscriber::util::TryInitError,
        context: Option<Cow<'static, str>>,
    },

    /// The configured level is not one of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    #[error("Unknown log level{}: {source}", format_context(context))]
    Level {
        source: tracing::level_filters::ParseLevelFilterError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Invalid logger configuration{}: {message}", format_context(context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal logger error{}: {message}", format_context(context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
