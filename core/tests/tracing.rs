use std::io;
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use valwrap_core::{Maybe, Outcome};

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);
impl CapturedLog {
  fn contents(&self) -> String {
    String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
  }
}
impl io::Write for CapturedLog {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.0.lock().unwrap().extend_from_slice(buf);
    Ok(buf.len())
  }
  fn flush(&mut self) -> io::Result<()> { Ok(()) }
}
impl<'a> MakeWriter<'a> for CapturedLog {
  type Writer = Self;
  fn make_writer(&'a self) -> Self::Writer { self.clone() }
}

fn capture(f: impl FnOnce()) -> String {
  let log = CapturedLog::default();
  let subscriber = tracing_subscriber::fmt()
    .with_writer(log.clone())
    .with_max_level(Level::TRACE)
    .with_ansi(false)
    .finish();
  tracing::subscriber::with_default(subscriber, f);
  log.contents()
}

#[test]
fn misuse_is_traced() {
  let log = capture(|| {
    let _ = Maybe::<u8>::none().get();
  });
  assert!(log.contains("value wrapper misuse"));
  assert!(log.contains("Cannot get the value of an absent Maybe"));
}

#[test]
fn captured_failure_is_traced() {
  let log = capture(|| {
    let _ = Outcome::<u8, _>::attempt(|| "-1".parse::<u8>());
  });
  assert!(log.contains("captured failure"));
  assert!(log.contains("ParseIntError"));
}

#[test]
fn success_is_silent() {
  let log = capture(|| {
    let _ = Outcome::<_, ()>::attempt(|| Ok(1)).get();
    let _ = Maybe::just(1).get();
  });
  assert!(log.is_empty());
}
