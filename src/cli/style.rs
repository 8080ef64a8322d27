use owo_colors::{OwoColorize, Stream};

pub fn heading(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.bold()).to_string()
}

pub fn success(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.green()).to_string()
}

pub fn warn(text: &str) -> String {
    warn_on(Stream::Stdout, text)
}

/// Like [`warn`], but checks color support of `stream` instead of stdout.
pub fn warn_on(stream: Stream, text: &str) -> String {
    text.if_supports_color(stream, |t| t.yellow()).to_string()
}

pub fn error(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.red()).to_string()
}
