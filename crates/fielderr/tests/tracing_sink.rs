use std::io;
use std::sync::Arc;

use fielderr::{Error, Field};
use parking_lot::Mutex;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl Buffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Buffer {
    type Writer = Buffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture(f: impl FnOnce()) -> String {
    let buffer = Buffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    buffer.contents()
}

#[test]
fn logs_structured_error() {
    let err = fielderr::wrap(
        Some(io::Error::other("error")),
        "failed to execute something",
        [Field::int("foo", 1), Field::string("bar", "baz")],
    )
    .unwrap();

    let out = capture(|| tracing::info!(error = err.log_value(), "example"));

    assert!(out.contains("example"), "{out}");
    assert!(
        out.contains(r#"error={"foo":1,"bar":"baz","error":"failed to execute something: error"}"#),
        "{out}"
    );
}

#[test]
fn logs_plain_error_as_text() {
    let plain = io::Error::other("disk full");
    let out = capture(|| tracing::warn!(error = fielderr::log_value(Some(&plain)), "flush"));
    assert!(out.contains("error=disk full"), "{out}");
}

#[test]
fn skips_missing_error() {
    let out = capture(|| tracing::info!(error = fielderr::log_value(None), "done"));
    assert!(out.contains("done"), "{out}");
    assert!(!out.contains("error="), "{out}");
}

#[test]
fn wrap_policy_is_traced() {
    let out = {
        let buffer = Buffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let _ = Error::new("e", [Field::int("a", 1)]).wrap("outer", [Field::int("b", 2)]);
        });
        buffer.contents()
    };
    assert!(out.contains("nesting new layer"), "{out}");
}
